/// Split one CSV line into trimmed fields.
///
/// Character scan with an in-quotes flag: `"` toggles quoting, a doubled `""`
/// inside quotes emits a literal quote, and `,` only separates fields outside
/// quotes. The final field is always emitted, even when empty. An
/// unterminated quote absorbs the rest of the line as quoted content; the
/// source is a hand-edited spreadsheet export, so ragged quoting is expected
/// rather than an error.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    buf.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(buf.trim().to_string());
                buf.clear();
            }
            _ => buf.push(c),
        }
    }
    fields.push(buf.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma_is_literal() {
        assert_eq!(split_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_escapes() {
        assert_eq!(split_line(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_absorbs_rest_of_line() {
        assert_eq!(split_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }
}
