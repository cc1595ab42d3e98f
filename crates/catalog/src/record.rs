//! Quote-aware splitting of one dataset line into raw fields.
//!
//! The format is comma-separated. A field whose first character is a double
//! quote is a quoted field: commas inside it are content, and it ends at the
//! first comma seen after an odd number of further quote characters (the
//! closing quote). Quotes inside a field are kept as they are, so `""` is not
//! unescaped to `"`.
//!
//! ```
//! use catalog::record::parse_line;
//!
//! assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
//! assert_eq!(parse_line("x,,y,"), vec!["x", "", "y", ""]);
//! ```

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// One parsed line: ordered field strings with no meaning attached yet
pub type RawRecord = Vec<String>;

/// Split a line into fields, honoring quoted spans
///
/// An empty line yields no fields. Otherwise the field after the last
/// separator is always emitted, even when empty, exactly as accumulated: a
/// closing quote at the end of the line is kept. No whitespace is trimmed.
pub fn parse_line(line: &str) -> RawRecord {
    let mut fields = Vec::new();
    if line.is_empty() {
        return fields;
    }

    let mut current = String::new();
    let mut quoted = false;
    let mut quote_count = 0usize;

    for ch in line.chars() {
        if current.is_empty() && !quoted && ch == QUOTE {
            // Opening quote: marks the field, is not content
            quoted = true;
        } else if ch == SEPARATOR {
            let closed = quote_count % 2 == usize::from(quoted);
            if closed {
                fields.push(finish_field(current, quoted));
                current = String::new();
                quote_count = 0;
                quoted = false;
            } else {
                current.push(ch);
            }
        } else {
            if ch == QUOTE {
                quote_count += 1;
            }
            current.push(ch);
        }
    }

    fields.push(current);
    fields
}

/// Drop the closing quote of a quoted field
fn finish_field(mut field: String, quoted: bool) -> String {
    if quoted && field.ends_with(QUOTE) {
        field.pop();
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn test_unquoted_fields() {
        let line = "1,The Godfather,1972,A,175 min";
        let fields = parse_line(line);
        assert_eq!(fields, line.split(',').collect::<Vec<_>>());
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn test_single_field() {
        assert_eq!(parse_line("only"), vec!["only"]);
    }

    #[test]
    fn test_trailing_and_leading_empty_fields() {
        assert_eq!(parse_line(","), vec!["", ""]);
        assert_eq!(parse_line(",a,"), vec!["", "a", ""]);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_quoted_genre_list() {
        let fields = parse_line(r#"1,Alpha,2001,"Action, Adventure, Drama",8.1"#);
        assert_eq!(fields[3], "Action, Adventure, Drama");
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn test_doubled_quotes_are_kept() {
        let fields = parse_line(r#"a,"He said ""hi"", then left",b"#);
        assert_eq!(fields, vec!["a", r#"He said ""hi"", then left"#, "b"]);
    }

    #[test]
    fn test_quoted_last_field_keeps_closing_quote() {
        assert_eq!(parse_line(r#"a,"1,234,567""#), vec!["a", r#"1,234,567""#]);
        assert_eq!(parse_line(r#"a,"""#), vec!["a", r#"""#]);
        assert_eq!(parse_line(r#""solo""#), vec![r#"solo""#]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest() {
        assert_eq!(parse_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_quote_inside_unquoted_field() {
        // An odd number of quotes keeps an unquoted field open
        assert_eq!(parse_line(r#"5" disk,x",y"#), vec![r#"5" disk,x""#, "y"]);
        assert_eq!(parse_line(r#"a "b" c,d"#), vec![r#"a "b" c"#, "d"]);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(parse_line(" a , b "), vec![" a ", " b "]);
    }
}
