//! Filename generation for exported records.

use crate::domain::{ContentRecord, ExportFormat};

/// Base name used when nothing usable survives sanitization.
pub const UNTITLED: &str = "untitled";

/// Converts arbitrary text into a filesystem-safe base name.
///
/// - Every character outside ASCII letters, digits and `-` becomes `-`
/// - Consecutive hyphens collapse into one
/// - Leading and trailing hyphens are trimmed
/// - Letters are lowercased
/// - Returns "untitled" for empty results
///
/// Idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
///
/// # Examples
///
/// ```
/// use staticpress::infra::sanitize;
///
/// assert_eq!(sanitize("Hello, World!"), "hello-world");
/// assert_eq!(sanitize(""), "untitled");
/// ```
pub fn sanitize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }

    let trimmed = result.trim_matches('-');
    if trimmed.is_empty() {
        return UNTITLED.to_string();
    }
    trimmed.to_string()
}

/// Sanitized base name for a record: its slug when present, else its title.
pub fn record_basename(record: &ContentRecord) -> String {
    if record.slug().is_empty() {
        sanitize(record.title())
    } else {
        sanitize(record.slug())
    }
}

/// Appends the format's extension to a base name.
///
/// # Examples
///
/// ```
/// use staticpress::domain::ExportFormat;
/// use staticpress::infra::output_filename;
///
/// assert_eq!(output_filename("hello-world", ExportFormat::Txt), "hello-world.txt");
/// ```
pub fn output_filename(base: &str, format: ExportFormat) -> String {
    format!("{}.{}", base, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::NaiveDate;

    fn record(title: &str, slug: &str) -> ContentRecord {
        let published = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ContentRecord::new(1, title, "", published, slug, Category::Post, "")
    }

    #[test]
    fn sanitize_lowercases_letters() {
        assert_eq!(sanitize("API Design"), "api-design");
        assert_eq!(sanitize("CamelCase"), "camelcase");
    }

    #[test]
    fn sanitize_replaces_punctuation_with_hyphens() {
        assert_eq!(sanitize("Hello, World!"), "hello-world");
        assert_eq!(sanitize("foo@bar#baz"), "foo-bar-baz");
        assert_eq!(sanitize("my_title"), "my-title");
        assert_eq!(sanitize("Version 2.0"), "version-2-0");
    }

    #[test]
    fn sanitize_collapses_runs_of_hyphens() {
        assert_eq!(sanitize("foo---bar----baz"), "foo-bar-baz");
        assert_eq!(sanitize("hello - world"), "hello-world");
    }

    #[test]
    fn sanitize_trims_hyphens() {
        assert_eq!(sanitize("-hello-"), "hello");
        assert_eq!(sanitize("  (draft)  "), "draft");
    }

    #[test]
    fn sanitize_empty_is_untitled() {
        assert_eq!(sanitize(""), "untitled");
        assert_eq!(sanitize("!@#$%"), "untitled");
        assert_eq!(sanitize("---"), "untitled");
    }

    #[test]
    fn sanitize_non_ascii_becomes_separators() {
        assert_eq!(sanitize("日本語タイトル"), "untitled");
        assert_eq!(sanitize("Café Design"), "caf-design");
        assert_eq!(sanitize("émoji 🎉 test"), "moji-test");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "",
            "Hello, World!",
            "--a--b--",
            "Ünïcödé ✓ text",
            "already-clean",
            "   ",
            "path/../../etc/passwd",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn sanitize_blocks_path_traversal() {
        assert_eq!(sanitize("../../etc/passwd"), "etc-passwd");
    }

    #[test]
    fn basename_prefers_slug() {
        assert_eq!(record_basename(&record("Some Title", "the-slug")), "the-slug");
    }

    #[test]
    fn basename_falls_back_to_title() {
        assert_eq!(record_basename(&record("Some Title", "")), "some-title");
    }

    #[test]
    fn basename_of_percent_encoded_slug() {
        // Non-latin slugs are stored percent-encoded in the source
        assert_eq!(record_basename(&record("x", "%e6%97%a5")), "e6-97-a5");
    }

    #[test]
    fn output_filename_appends_extension() {
        assert_eq!(output_filename("a", ExportFormat::Html), "a.html");
        assert_eq!(output_filename("a", ExportFormat::Txt), "a.txt");
    }
}
