/// Trimmed copy of `text`, or `None` when nothing but whitespace is left.
pub fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Acme "), Some("Acme".to_string()));
        assert_eq!(non_empty(" \t "), None);
        assert_eq!(non_empty(""), None);
    }
}
