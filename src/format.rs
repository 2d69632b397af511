//! Rendering helpers shared by every matcher's failure text.
//!
//! Values are quoted the way Rust debug-prints strings, so embedded quotes
//! and control characters stay visible in assertion output.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Quotes a single value: `"text/html"`.
#[must_use]
pub fn quote(value: &str) -> String {
    format!("{value:?}")
}

/// Quotes every value and lists them: `["a", "b"]`.
#[must_use]
pub fn quote_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = values.into_iter().map(|v| quote(v.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

/// Renders a pattern between slashes: `/foo/`.
#[must_use]
pub fn pattern(regex: &Regex) -> String {
    format!("/{}/", regex.as_str())
}

/// Renders a header mapping: `{content_type: "text/html"}`.
#[must_use]
pub fn headers(headers: &BTreeMap<String, String>) -> String {
    let mut out = String::from("{");
    for (i, (key, value)) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{key}: {}", quote(value));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("bar"), r#""bar""#);
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_quote_list() {
        assert_eq!(quote_list(["bar"]), r#"["bar"]"#);
        assert_eq!(
            quote_list(vec!["foobar".to_string(), "bazqux".to_string()]),
            r#"["foobar", "bazqux"]"#
        );
        assert_eq!(quote_list(Vec::<String>::new()), "[]");
    }

    #[test]
    fn test_pattern() {
        let regex = Regex::new(r"The \w+").unwrap();
        assert_eq!(pattern(&regex), r"/The \w+/");
    }

    #[test]
    fn test_headers_sorted_by_key() {
        let mut map = BTreeMap::new();
        map.insert("x_mailer".to_string(), "mutt".to_string());
        map.insert("content_type".to_string(), "text/html".to_string());
        assert_eq!(
            headers(&map),
            r#"{content_type: "text/html", x_mailer: "mutt"}"#
        );
        assert_eq!(headers(&BTreeMap::new()), "{}");
    }
}
