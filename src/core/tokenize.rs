/// Lowercases `text` and splits it into word tokens.
///
/// Word characters are alphanumerics and `_`; every other character is a
/// boundary. Empty tokens are dropped, original order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_word_boundaries() {
        assert_eq!(tokenize("Lenovo Legion 5"), vec!["lenovo", "legion", "5"]);
    }

    #[test]
    fn idempotent_on_already_tokenized_text() {
        let first = tokenize("Lenovo Legion 5");
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn punctuation_is_a_boundary() {
        assert_eq!(
            tokenize("ThinkPad X1-Carbon (Gen 11)"),
            vec!["thinkpad", "x1", "carbon", "gen", "11"]
        );
    }

    #[test]
    fn empty_and_symbol_only_input_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- !! ").is_empty());
    }
}
