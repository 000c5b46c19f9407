use similar::{ChangeTag, TextDiff};

/// Line counts of a rewrite, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub inserted: usize,
    pub deleted: usize,
}

/// Count inserted and deleted lines between two versions of a file
pub fn summarize(before: &str, after: &str) -> ChangeSummary {
    let diff = TextDiff::from_lines(before, after);
    let mut summary = ChangeSummary::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => summary.inserted += 1,
            ChangeTag::Delete => summary.deleted += 1,
            ChangeTag::Equal => {}
        }
    }

    summary
}
