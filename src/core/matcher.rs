use std::collections::HashSet;

use crate::core::tokenize::tokenize;
use crate::domain::model::CanonicalModel;

/// Finds the first catalog model whose identifying tokens are all present in
/// `product_name`.
///
/// The catalog is scanned in its given order and the FIRST satisfying
/// candidate wins, so callers must hand over an ordered sequence. Token order
/// inside the name is irrelevant; membership is what counts. A model with an
/// absent or empty `line` matches on brand and series alone.
pub fn match_model<'a>(
    product_name: &str,
    catalog: &'a [CanonicalModel],
) -> Option<&'a CanonicalModel> {
    let tokens: HashSet<String> = tokenize(product_name).into_iter().collect();

    catalog.iter().find(|candidate| {
        if !candidate.is_matchable() {
            return false;
        }

        let brand_match = covered_by(&candidate.brand, &tokens);
        let series_match = covered_by(&candidate.series, &tokens);
        let line_match = match candidate.line.as_deref() {
            Some(line) if !line.is_empty() => covered_by(line, &tokens),
            _ => true,
        };

        brand_match && series_match && line_match
    })
}

fn covered_by(field: &str, tokens: &HashSet<String>) -> bool {
    tokenize(field).iter().all(|token| tokens.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(brand: &str, series: &str, line: Option<&str>) -> CanonicalModel {
        CanonicalModel {
            brand: brand.into(),
            series: series.into(),
            line: line.map(Into::into),
        }
    }

    #[test]
    fn matches_when_all_model_tokens_appear() {
        let catalog = vec![model("Lenovo", "Legion", Some("5"))];
        let matched = match_model("Lenovo Legion 5 Gaming Laptop", &catalog);
        assert_eq!(matched, Some(&catalog[0]));
    }

    #[test]
    fn no_match_is_none() {
        let catalog = vec![model("Lenovo", "Legion", Some("5"))];
        assert_eq!(match_model("Asus Zephyrus", &catalog), None);
    }

    #[test]
    fn token_order_is_irrelevant() {
        let catalog = vec![model("Lenovo", "Legion", Some("5"))];
        assert_eq!(match_model("Legion Lenovo 5", &catalog), Some(&catalog[0]));
    }

    #[test]
    fn empty_line_matches_on_brand_and_series_alone() {
        let catalog = vec![
            model("Apple", "MacBook", Some("")),
            model("Apple", "iPad", None),
        ];
        assert_eq!(match_model("Apple MacBook Air", &catalog), Some(&catalog[0]));
        assert_eq!(match_model("Apple iPad 2022", &catalog), Some(&catalog[1]));
    }

    #[test]
    fn records_missing_brand_or_series_are_skipped() {
        let catalog = vec![
            model("", "Legion", Some("5")),
            model("Lenovo", "", None),
            model("Lenovo", "Legion", None),
        ];
        assert_eq!(match_model("Lenovo Legion 5", &catalog), Some(&catalog[2]));
    }

    #[test]
    fn first_satisfying_candidate_wins() {
        // Both entries match; catalog order decides, not specificity.
        let catalog = vec![
            model("Lenovo", "Legion", None),
            model("Lenovo", "Legion", Some("5")),
        ];
        assert_eq!(
            match_model("Lenovo Legion 5 Pro", &catalog),
            Some(&catalog[0])
        );
    }

    #[test]
    fn multi_token_fields_require_every_token() {
        let catalog = vec![model("HP", "Pavilion Gaming", Some("15"))];
        assert_eq!(match_model("HP Pavilion 15", &catalog), None);
        assert_eq!(
            match_model("HP Pavilion Gaming 15 Ryzen", &catalog),
            Some(&catalog[0])
        );
    }
}
