use regex::{escape, Regex, RegexBuilder};

use crate::domain::model::CanonicalModel;
use crate::utils::error::Result;

/// Marketing filler stripped from product names before the residual code is
/// read off. Overridable through configuration.
pub const DEFAULT_NOISE_KEYWORDS: &[&str] = &["gaming", "laptop", "notebook", "pc"];

/// Strips matched-model and noise tokens from a raw product name, leaving the
/// residual product code.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    noise: Vec<Regex>,
}

impl CodeExtractor {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let noise = keywords
            .iter()
            .map(|keyword| ci_literal(keyword))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { noise })
    }

    pub fn with_defaults() -> Result<Self> {
        let keywords: Vec<String> = DEFAULT_NOISE_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        Self::new(&keywords)
    }

    /// Derives the residual code from `raw_name`.
    ///
    /// Applied in order: noise-keyword removal, then literal brand/series/line
    /// removal when a model is supplied (each substring independently, not
    /// token-based), then whitespace collapsing, then hyphen-to-space
    /// replacement. All removals are case-insensitive. Pure; the caller
    /// supplies the already-matched model.
    pub fn extract(&self, raw_name: &str, model: Option<&CanonicalModel>) -> Result<String> {
        let mut name = raw_name.to_string();

        for noise in &self.noise {
            name = noise.replace_all(&name, "").into_owned();
        }

        if let Some(model) = model {
            let parts = [
                Some(model.brand.as_str()),
                Some(model.series.as_str()),
                model.line.as_deref(),
            ];
            for part in parts.into_iter().flatten() {
                if part.is_empty() {
                    continue;
                }
                name = ci_literal(part)?.replace_all(&name, "").into_owned();
            }
        }

        let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
        Ok(collapsed.replace('-', " ").trim().to_string())
    }
}

fn ci_literal(literal: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(&escape(literal))
        .case_insensitive(true)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legion_5() -> CanonicalModel {
        CanonicalModel {
            brand: "Lenovo".into(),
            series: "Legion".into(),
            line: Some("5".into()),
        }
    }

    #[test]
    fn fully_matched_name_leaves_empty_code() {
        let extractor = CodeExtractor::with_defaults().unwrap();
        let code = extractor
            .extract("Lenovo Legion 5 Gaming Laptop", Some(&legion_5()))
            .unwrap();
        assert_eq!(code, "");
    }

    #[test]
    fn residual_tokens_survive_with_single_spacing() {
        let extractor = CodeExtractor::with_defaults().unwrap();
        let code = extractor
            .extract("Lenovo Legion 5 16GB RAM", Some(&legion_5()))
            .unwrap();
        assert_eq!(code, "16GB RAM");
    }

    #[test]
    fn removals_are_case_insensitive() {
        let extractor = CodeExtractor::with_defaults().unwrap();
        let code = extractor
            .extract("LENOVO legion 5 GAMING 82AV", Some(&legion_5()))
            .unwrap();
        assert_eq!(code, "82AV");
    }

    #[test]
    fn line_removal_is_substring_based_not_token_based() {
        // The literal "5" disappears from "82B5" too.
        let extractor = CodeExtractor::with_defaults().unwrap();
        let code = extractor
            .extract("Lenovo Legion 5 82B5", Some(&legion_5()))
            .unwrap();
        assert_eq!(code, "82B");
    }

    #[test]
    fn hyphens_become_spaces_after_collapsing() {
        let extractor = CodeExtractor::new(&[]).unwrap();
        let code = extractor.extract("82B5-00AX", None).unwrap();
        assert_eq!(code, "82B5 00AX");
    }

    #[test]
    fn works_without_a_model() {
        let extractor = CodeExtractor::with_defaults().unwrap();
        let code = extractor.extract("Gaming Laptop XZ-500", None).unwrap();
        assert_eq!(code, "XZ 500");
    }

    #[test]
    fn configured_keywords_replace_the_defaults() {
        let extractor = CodeExtractor::new(&["bundle".to_string()]).unwrap();
        let code = extractor
            .extract("Legion Bundle 82AV", Some(&legion_5()))
            .unwrap();
        assert_eq!(code, "82AV");
    }
}
