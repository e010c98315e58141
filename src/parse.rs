//! Line-oriented INI parsing.
//!
//! Each line is trimmed and classified:
//!
//! - empty, or starting with `;`, `#` or `[`: skipped (comments and section
//!   headers; sections do not scope keys);
//! - anything else: a data line, which must contain exactly one `=`.
//!
//! Values are cleaned before they reach the [`FileMapping`]: unquoted values
//! lose everything from the first `#` or `;` on, quoted values are decoded by
//! [`unquote`](crate::unquote::unquote). Both are trimmed afterwards, so
//! `"  x  "` reads as `x`.

use std::path::Path;

use crate::error::CfgFlagsError;
use crate::types::FileMapping;
use crate::unquote::{UnquoteError, unquote};

/// Read and parse the configuration file at `path`.
pub fn parse_file(path: &Path) -> Result<FileMapping, CfgFlagsError> {
    let content = std::fs::read_to_string(path).map_err(|source| CfgFlagsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

/// Parse configuration text. Stops at the first malformed line.
pub fn parse_str(content: &str) -> Result<FileMapping, CfgFlagsError> {
    let mut mapping = FileMapping::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        let number = i + 1;

        if line.is_empty() || line.starts_with([';', '#', '[']) {
            continue;
        }

        let found = line.matches('=').count();
        let Some((key, value)) = line.split_once('=').filter(|_| found == 1) else {
            return Err(CfgFlagsError::MalformedLine {
                line: number,
                text: line.to_string(),
                found,
            });
        };

        let value = clean_value(value).map_err(|source| CfgFlagsError::MalformedQuotedValue {
            line: number,
            text: line.to_string(),
            source,
        })?;

        let key = key.trim();
        if let Some(previous) = mapping.insert(key.to_string(), value, number) {
            tracing::debug!(
                key,
                previous = %previous,
                line = number,
                "duplicate key overrides earlier value"
            );
        }
    }

    Ok(mapping)
}

/// Strip an inline comment from an unquoted value, or decode a quoted one.
fn clean_value(raw: &str) -> Result<String, UnquoteError> {
    let value = raw.trim();
    if value.starts_with('"') {
        return unquote(value).map(|s| s.trim().to_string());
    }
    let uncommented = match value.find(['#', ';']) {
        Some(pos) => &value[..pos],
        None => value,
    };
    Ok(uncommented.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse_one(line: &str) -> String {
        let mapping = parse_str(line).unwrap();
        assert_eq!(mapping.len(), 1);
        mapping.iter().next().unwrap().value.clone()
    }

    #[test]
    fn simple_pair() {
        let mapping = parse_str("timeout = 30\n").unwrap();
        assert_eq!(mapping.get("timeout"), Some("30"));
    }

    #[test]
    fn whitespace_around_key_and_value_ignored() {
        let mapping = parse_str("   host\t=   example.org   \n").unwrap();
        assert_eq!(mapping.get("host"), Some("example.org"));
    }

    #[test]
    fn inline_hash_comment_stripped() {
        assert_eq!(parse_one("name = alice # the user"), "alice");
    }

    #[test]
    fn inline_semicolon_comment_stripped() {
        assert_eq!(parse_one("name = bob ; note"), "bob");
    }

    #[test]
    fn earliest_comment_marker_wins() {
        assert_eq!(parse_one("a = x ; y # z"), "x");
        assert_eq!(parse_one("a = x # y ; z"), "x");
    }

    #[test]
    fn comment_right_after_value() {
        assert_eq!(parse_one("a = 1#two"), "1");
    }

    #[test]
    fn quoted_value_keeps_comment_markers() {
        assert_eq!(parse_one(r#"msg = "hello # world""#), "hello # world");
        assert_eq!(parse_one(r#"msg = "a; b""#), "a; b");
    }

    #[test]
    fn quoted_value_unescaped() {
        assert_eq!(parse_one(r#"msg = "tab\there""#), "tab\there");
    }

    #[test]
    fn quoted_value_is_trimmed() {
        assert_eq!(parse_one(r#"pad = "  x  ""#), "x");
        assert_eq!(parse_one(r#"pad = "\tx\n""#), "x");
        assert_eq!(parse_one(r#"pad = "a  b""#), "a  b");
    }

    #[test]
    fn empty_value() {
        assert_eq!(parse_one("name ="), "");
        assert_eq!(parse_one("name =    "), "");
    }

    #[test]
    fn value_that_is_only_a_comment() {
        assert_eq!(parse_one("name = # nothing"), "");
    }

    #[test]
    fn comments_sections_and_blank_lines_skipped() {
        let content = "\
; leading comment
# another comment

[server]
   ; indented comment
port = 8080
";
        let mapping = parse_str(content).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("port"), Some("8080"));
    }

    #[test]
    fn sections_do_not_scope_keys() {
        let content = "[a]\nkey = 1\n[b]\nkey = 2\n";
        let mapping = parse_str(content).unwrap();
        assert_eq!(mapping.get("key"), Some("2"));
    }

    #[test]
    fn crlf_line_endings() {
        let mapping = parse_str("a = 1\r\nb = 2\r\n").unwrap();
        assert_eq!(mapping.get("a"), Some("1"));
        assert_eq!(mapping.get("b"), Some("2"));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let mapping = parse_str("port = 1\nport = 2\n").unwrap();
        assert_eq!(mapping.get("port"), Some("2"));
        assert_eq!(mapping.entry("port").unwrap().line, 2);
    }

    #[test]
    fn line_without_separator_is_malformed() {
        let err = parse_str("a = 1\nnovalue\n").unwrap_err();
        match err {
            CfgFlagsError::MalformedLine { line, text, found } => {
                assert_eq!(line, 2);
                assert_eq!(text, "novalue");
                assert_eq!(found, 0);
            }
            other => panic!("Expected MalformedLine, got: {other:?}"),
        }
    }

    #[test]
    fn line_with_two_separators_is_malformed() {
        let err = parse_str("a=b=c").unwrap_err();
        assert!(matches!(
            err,
            CfgFlagsError::MalformedLine { line: 1, found: 2, .. }
        ));
    }

    #[test]
    fn separator_inside_quotes_still_counts() {
        let err = parse_str(r#"url = "a=b""#).unwrap_err();
        assert!(matches!(err, CfgFlagsError::MalformedLine { found: 2, .. }));
    }

    #[test]
    fn bad_quoting_names_the_line() {
        let err = parse_str("ok = 1\nmsg = \"unterminated\n").unwrap_err();
        match err {
            CfgFlagsError::MalformedQuotedValue { line, text, source } => {
                assert_eq!(line, 2);
                assert_eq!(text, "msg = \"unterminated");
                assert_eq!(source, UnquoteError::Unterminated);
            }
            other => panic!("Expected MalformedQuotedValue, got: {other:?}"),
        }
    }

    #[test]
    fn comment_after_quoted_value_is_rejected() {
        let err = parse_str(r#"msg = "hi" # greeting"#).unwrap_err();
        assert!(matches!(err, CfgFlagsError::MalformedQuotedValue { .. }));
    }

    #[test]
    fn empty_content() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, "timeout = 30\n").unwrap();
        let mapping = parse_file(&path).unwrap();
        assert_eq!(mapping.get("timeout"), Some("30"));
    }

    #[test]
    fn parse_file_missing_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.ini");
        let err = parse_file(&path).unwrap_err();
        match err {
            CfgFlagsError::FileRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected FileRead, got: {other:?}"),
        }
    }
}
