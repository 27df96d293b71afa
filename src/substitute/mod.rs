//! Placeholder substitution
//!
//! Items are applied one after another, each as a plain left-to-right
//! replacement of `start_tag + key + end_tag`. A later item can therefore
//! match text inserted by an earlier one, but a value is never rescanned by
//! its own item.

use std::fs;
use std::path::Path;

use crate::domain::ReplaceData;
use crate::error::{ReplaceError, Result};

/// Apply every item of `data` to `content`, in list order.
pub fn apply_replacements(content: &str, data: &ReplaceData, start_tag: &str, end_tag: &str) -> String {
    let mut text = content.to_string();
    for item in data.iter() {
        let pattern = format!("{start_tag}{}{end_tag}", item.key);
        // An empty pattern would match between every character.
        if pattern.is_empty() {
            tracing::debug!("Skipping empty placeholder pattern");
            continue;
        }

        tracing::debug!("Replacing {}", pattern);
        text = text.replace(pattern.as_str(), &item.value);
    }
    text
}

/// Read `input`, substitute placeholders, and write the result to `output`.
///
/// The output file is created or truncated. The write is not atomic.
pub fn replace_tags(
    data: &ReplaceData,
    input: &Path,
    output: &Path,
    start_tag: &str,
    end_tag: &str,
) -> Result<()> {
    let content = fs::read_to_string(input).map_err(|e| ReplaceError::io(input, e))?;
    let rendered = apply_replacements(&content, data, start_tag, end_tag);
    fs::write(output, rendered).map_err(|e| ReplaceError::io(output, e))?;
    tracing::info!("Wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReplaceItem;
    use similar_asserts::assert_eq;
    use tempfile::TempDir;

    fn data(pairs: &[(&str, &str)]) -> ReplaceData {
        pairs.iter().map(|(k, v)| ReplaceItem::new(*k, *v)).collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = apply_replacements(
            "Hello {{NAME}}! Bye {{NAME}}.",
            &data(&[("NAME", "World")]),
            "{{",
            "}}",
        );
        assert_eq!(out, "Hello World! Bye World.");
    }

    #[test]
    fn custom_tags_leave_default_pattern_untouched() {
        let out = apply_replacements(
            "Hello <<NAME>>! {{NAME}}",
            &data(&[("NAME", "World")]),
            "<<",
            ">>",
        );
        assert_eq!(out, "Hello World! {{NAME}}");
    }

    #[test]
    fn unknown_placeholders_remain() {
        let out = apply_replacements("{{A}} {{B}}", &data(&[("A", "1")]), "{{", "}}");
        assert_eq!(out, "1 {{B}}");
    }

    #[test]
    fn later_items_see_earlier_values() {
        let out = apply_replacements(
            "{{OUTER}}",
            &data(&[("OUTER", "<{{INNER}}>"), ("INNER", "x")]),
            "{{",
            "}}",
        );
        assert_eq!(out, "<x>");
    }

    #[test]
    fn earlier_items_do_not_see_later_values() {
        let out = apply_replacements(
            "{{INNER}} {{OUTER}}",
            &data(&[("INNER", "x"), ("OUTER", "{{INNER}}")]),
            "{{",
            "}}",
        );
        assert_eq!(out, "x {{INNER}}");
    }

    #[test]
    fn value_is_not_rescanned_by_its_own_item() {
        let out = apply_replacements("{{A}}", &data(&[("A", "{{A}}{{A}}")]), "{{", "}}");
        assert_eq!(out, "{{A}}{{A}}");
    }

    #[test]
    fn duplicate_keys_apply_in_order() {
        let out = apply_replacements("{{K}}", &data(&[("K", "first"), ("K", "second")]), "{{", "}}");
        assert_eq!(out, "first");
    }

    #[test]
    fn overlapping_matches_resolve_left_to_right() {
        let out = apply_replacements("aaa", &data(&[("a", "b")]), "a", "");
        assert_eq!(out, "ba");
    }

    #[test]
    fn empty_pattern_is_skipped() {
        let out = apply_replacements("abc", &data(&[("", "X")]), "", "");
        assert_eq!(out, "abc");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let items = data(&[("NAME", "World")]);
        let once = apply_replacements("Hello {{NAME}}!", &items, "{{", "}}");
        let twice = apply_replacements(&once, &items, "{{", "}}");
        assert_eq!(once, twice);
    }

    #[test]
    fn replace_tags_writes_output_file() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("in.txt");
        let output = tmp.path().join("out.txt");
        fs::write(&input, "Hello {{NAME}}!").expect("write");
        fs::write(&output, "stale content that is longer than the result").expect("write");

        replace_tags(&data(&[("NAME", "World")]), &input, &output, "{{", "}}").expect("replace");

        assert_eq!(fs::read_to_string(&output).expect("read"), "Hello World!");
    }

    #[test]
    fn missing_input_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let output = tmp.path().join("out.txt");
        let err = replace_tags(&ReplaceData::default(), &tmp.path().join("absent.txt"), &output, "{{", "}}")
            .unwrap_err();
        assert!(matches!(err, ReplaceError::Io { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn missing_output_directory_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("in.txt");
        fs::write(&input, "x").expect("write");
        let output = tmp.path().join("no-such-dir").join("out.txt");
        let err = replace_tags(&ReplaceData::default(), &input, &output, "{{", "}}").unwrap_err();
        match err {
            ReplaceError::Io { path, .. } => assert_eq!(path, output),
            other => panic!("unexpected error: {other}"),
        }
    }
}
