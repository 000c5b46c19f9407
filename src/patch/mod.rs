//! Literal whole-file text replacement.

pub mod catalog;

pub use catalog::{catalog, find, HEADER_TIME_DISPLAY, STYLE_TIME_DISPLAY};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::diff::summarize;
use crate::error::{PatchError, PatchResult};

/// A literal replacement applied to a fixed, ordered list of files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// Name used on the command line
    pub name: &'static str,
    pub summary: &'static str,
    /// File names relative to the directory the patch runs in
    pub targets: &'static [&'static str],
    /// Exact text to search for
    pub old: &'static str,
    /// Text that takes its place
    pub new: &'static str,
    /// Line printed once every target has been written
    pub trailer: Option<&'static str>,
}

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub replacements: usize,
    /// CRLF and CR line endings were rewritten to LF to find the pattern
    pub newlines_normalized: bool,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

impl Patch {
    /// Replace every non-overlapping occurrence of the pattern, left to right.
    ///
    /// Returns the new text together with the number of replacements made.
    pub fn apply_to_str(&self, content: &str) -> (String, usize) {
        let count = content.matches(self.old).count();
        if count == 0 {
            return (content.to_string(), 0);
        }
        (content.replace(self.old, self.new), count)
    }

    /// Like [`Patch::apply_to_str`], retrying on LF-normalized text when the
    /// exact text has no match but contains carriage returns.
    ///
    /// The returned flag is set when the output is the normalized text. With
    /// no match at all the input comes back untouched.
    pub fn apply_with_newlines(&self, content: &str) -> (String, usize, bool) {
        let (after, count) = self.apply_to_str(content);
        if count > 0 || !content.contains('\r') {
            return (after, count, false);
        }

        let (after, count) = self.apply_to_str(&normalize_newlines(content));
        if count == 0 {
            return (content.to_string(), 0, false);
        }
        (after, count, true)
    }

    /// Read `root/target`, replace the pattern and write the whole file back.
    ///
    /// The file is rewritten even when the pattern is absent.
    pub fn apply_to_file(&self, root: &Path, target: &str) -> PatchResult<FileReport> {
        let path = root.join(target);

        let before = fs::read_to_string(&path).map_err(|e| PatchError::read_error(e, &path))?;
        let (after, replacements, newlines_normalized) = self.apply_with_newlines(&before);

        if replacements == 0 {
            warn!(
                "Pattern for {} not found in {}, writing file back unchanged",
                self.name,
                path.display()
            );
        } else {
            if newlines_normalized {
                debug!("{}: line endings converted to LF", path.display());
            }
            let changes = summarize(&before, &after);
            debug!(
                "{}: {} replacement(s), +{} -{} lines",
                path.display(),
                replacements,
                changes.inserted,
                changes.deleted
            );
        }

        fs::write(&path, &after).map_err(|e| PatchError::write_error(e, &path))?;

        Ok(FileReport {
            path,
            replacements,
            newlines_normalized,
            bytes_before: before.len(),
            bytes_after: after.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TINY: Patch = Patch {
        name: "tiny",
        summary: "test patch",
        targets: &["a.txt"],
        old: "foo\nbar",
        new: "baz",
        trailer: None,
    };

    #[test]
    fn test_replaces_every_occurrence() {
        let (out, count) = TINY.apply_to_str("foo\nbar\n--\nfoo\nbar\n");
        assert_eq!(out, "baz\n--\nbaz\n");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_absent_pattern_is_noop() {
        let input = "foo\nqux\n";
        let (out, count) = TINY.apply_to_str(input);
        assert_eq!(out, input);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_match_is_exact() {
        // Differing whitespace is not a match
        let (_, count) = TINY.apply_to_str("foo \nbar");
        assert_eq!(count, 0);
        let (_, count) = TINY.apply_to_str("foo\r\nbar");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_crlf_content_matches_after_normalizing() {
        let (out, count, normalized) = TINY.apply_with_newlines("x\r\nfoo\r\nbar\r\ny\r\n");
        assert_eq!(out, "x\nbaz\ny\n");
        assert_eq!(count, 1);
        assert!(normalized);

        let (out, count, normalized) = TINY.apply_with_newlines("foo\rbar");
        assert_eq!(out, "baz");
        assert_eq!(count, 1);
        assert!(normalized);
    }

    #[test]
    fn test_exact_match_keeps_other_line_endings() {
        let (out, count, normalized) = TINY.apply_with_newlines("foo\nbar\r\nend\r\n");
        assert_eq!(out, "baz\r\nend\r\n");
        assert_eq!(count, 1);
        assert!(!normalized);
    }

    #[test]
    fn test_crlf_without_pattern_is_returned_as_is() {
        let input = "foo\r\nqux\r\n";
        let (out, count, normalized) = TINY.apply_with_newlines(input);
        assert_eq!(out, input);
        assert_eq!(count, 0);
        assert!(!normalized);
    }

    #[test]
    fn test_crlf_stylesheet_is_patched_with_lf_endings() {
        let dir = tempdir().unwrap();
        let css = format!("body {{}}\n\n{}\n", STYLE_TIME_DISPLAY.old).replace('\n', "\r\n");
        fs::write(dir.path().join("style.css"), &css).unwrap();

        let report = STYLE_TIME_DISPLAY
            .apply_to_file(dir.path(), "style.css")
            .unwrap();
        assert_eq!(report.replacements, 1);
        assert!(report.newlines_normalized);

        let written = fs::read_to_string(dir.path().join("style.css")).unwrap();
        assert_eq!(written, format!("body {{}}\n\n{}\n", STYLE_TIME_DISPLAY.new));
        assert!(!written.contains('\r'));
    }

    #[test]
    fn test_crlf_file_without_pattern_keeps_bytes() {
        let dir = tempdir().unwrap();
        let html = "<html>\r\n<body></body>\r\n</html>\r\n";
        fs::write(dir.path().join("contact.html"), html).unwrap();

        let report = HEADER_TIME_DISPLAY
            .apply_to_file(dir.path(), "contact.html")
            .unwrap();
        assert!(!report.changed());
        assert!(!report.newlines_normalized);
        assert_eq!(fs::read(dir.path().join("contact.html")).unwrap(), html.as_bytes());
    }

    #[test]
    fn test_stylesheet_patch_on_file() {
        let dir = tempdir().unwrap();
        let css = format!(
            "body {{ margin: 0; }}\n\n{}\n\n.footer {{}}\n",
            STYLE_TIME_DISPLAY.old
        );
        fs::write(dir.path().join("style.css"), &css).unwrap();

        let report = STYLE_TIME_DISPLAY
            .apply_to_file(dir.path(), "style.css")
            .unwrap();
        assert_eq!(report.replacements, 1);
        assert!(report.changed());
        assert_eq!(report.bytes_before, css.len());

        let written = fs::read_to_string(dir.path().join("style.css")).unwrap();
        assert!(written.contains(STYLE_TIME_DISPLAY.new));
        assert!(!written.contains(STYLE_TIME_DISPLAY.old));
        assert!(written.starts_with("body { margin: 0; }\n\n/* Time display wrapper */"));
        assert!(written.ends_with("}\n\n.footer {}\n"));
        assert_eq!(report.bytes_after, written.len());
    }

    #[test]
    fn test_file_without_pattern_is_unchanged() {
        let dir = tempdir().unwrap();
        let html = "<html>\n  <body>no header here</body>\n</html>\n";
        fs::write(dir.path().join("index.html"), html).unwrap();

        let report = HEADER_TIME_DISPLAY
            .apply_to_file(dir.path(), "index.html")
            .unwrap();
        assert_eq!(report.replacements, 0);
        assert!(!report.changed());
        assert_eq!(fs::read(dir.path().join("index.html")).unwrap(), html.as_bytes());
    }

    #[test]
    fn test_second_application_changes_nothing() {
        let dir = tempdir().unwrap();
        let html = format!("<header>{}</header>\n", HEADER_TIME_DISPLAY.old);
        fs::write(dir.path().join("signup.html"), &html).unwrap();

        let first = HEADER_TIME_DISPLAY
            .apply_to_file(dir.path(), "signup.html")
            .unwrap();
        let once = fs::read_to_string(dir.path().join("signup.html")).unwrap();
        let second = HEADER_TIME_DISPLAY
            .apply_to_file(dir.path(), "signup.html")
            .unwrap();
        let twice = fs::read_to_string(dir.path().join("signup.html")).unwrap();

        assert_eq!(first.replacements, 1);
        assert_eq!(second.replacements, 0);
        assert_eq!(once, twice);
        assert_eq!(twice, format!("<header>{}</header>\n", HEADER_TIME_DISPLAY.new));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = TINY.apply_to_file(dir.path(), "a.txt").unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = tempdir().unwrap();
        let bytes = [0x66, 0x6f, 0xff, 0xfe];
        fs::write(dir.path().join("a.txt"), bytes).unwrap();

        let err = TINY.apply_to_file(dir.path(), "a.txt").unwrap_err();
        assert!(matches!(err, PatchError::Encoding { .. }));
        assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), bytes);
    }
}
