//! CSV field sanitizing and escaping
//!
//! Free text goes through two layers before it is written:
//! 1. `sanitize`: every delimiter is replaced with a space, so tools that
//!    split lines naively on `,` still see the right column count
//! 2. `escape`: fields containing a delimiter, quote or line break are
//!    wrapped in quotes with embedded quotes doubled
//!
//! Numeric and timestamp fields skip step 1 but still go through step 2.

use crate::constants::DELIMITER;

const QUOTE: char = '"';

/// Replace every delimiter in free text with a space
pub fn sanitize(text: &str) -> String {
    text.replace(DELIMITER, " ")
}

/// Check if a field has to be quoted
pub fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n')
}

/// Escape a field for CSV output
///
/// # Examples
///
/// ```
/// use datafeed_core::escape;
///
/// assert_eq!(escape::escape("plain".to_string()), "plain");
/// assert_eq!(escape::escape("a,b".to_string()), "\"a,b\"");
/// assert_eq!(escape::escape("say \"hi\"".to_string()), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape(field: String) -> String {
    if !needs_quoting(&field) {
        return field;
    }

    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            escaped.push(QUOTE);
        }
        escaped.push(c);
    }
    escaped.push(QUOTE);
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_replaces_delimiter() {
        assert_eq!(sanitize("Truck, north yard"), "Truck  north yard");
        assert_eq!(sanitize("no delimiter"), "no delimiter");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_escape_plain_field_untouched() {
        assert_eq!(escape("Truck1".to_string()), "Truck1");
        assert_eq!(escape(String::new()), "");
        assert_eq!(escape("10.0".to_string()), "10.0");
    }

    #[test]
    fn test_escape_line_breaks() {
        assert_eq!(escape("line1\nline2".to_string()), "\"line1\nline2\"");
        assert_eq!(escape("a\r\nb".to_string()), "\"a\r\nb\"");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape("5\" wheel".to_string()), "\"5\"\" wheel\"");
    }

    #[test]
    fn test_sanitized_text_only_quoted_for_quotes_and_breaks() {
        let field = escape(sanitize("Acme, \"Big\" truck"));
        assert_eq!(field, "\"Acme  \"\"Big\"\" truck\"");
    }

    proptest! {
        #[test]
        fn prop_escaped_field_reparses_to_input(text in ".*") {
            let line = escape(text.clone());
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(line.as_bytes());

            match reader.records().next() {
                Some(record) => {
                    let record = record.unwrap();
                    prop_assert_eq!(record.len(), 1);
                    prop_assert_eq!(&record[0], text.as_str());
                }
                // csv yields no record for an empty line
                None => prop_assert!(text.is_empty()),
            }
        }

        #[test]
        fn prop_sanitized_text_has_no_delimiter(text in ".*") {
            prop_assert!(!sanitize(&text).contains(DELIMITER));
        }

        #[test]
        fn prop_unquoted_fields_are_unchanged(text in "[^,\"\r\n]*") {
            prop_assert_eq!(escape(text.clone()), text);
        }
    }
}
