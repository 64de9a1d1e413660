//! Deferred, non-fatal diagnostics collected during one run.

use std::fmt;

/// One item that failed inside an otherwise successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureNote {
    /// The item's page could not be fetched
    PageUnavailable { url: String, reason: String },

    /// The item's page was fetched but lacked a required element
    TagNotFound { url: String, detail: String },

    /// A proposal page shows a status its index code does not allow
    StatusMismatch {
        url: String,
        code: String,
        displayed: String,
        expected: Vec<String>,
    },
}

impl fmt::Display for FailureNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureNote::PageUnavailable { url, reason } => {
                write!(f, "Page unavailable {url}: {reason}")
            }
            FailureNote::TagNotFound { url, detail } => {
                write!(f, "Unexpected page structure {url}: {detail}")
            }
            FailureNote::StatusMismatch {
                url,
                code,
                displayed,
                expected,
            } => write!(
                f,
                "Mismatched status {url}: code '{code}', page shows '{displayed}', expected ({})",
                expected.join(", ")
            ),
        }
    }
}

/// Ordered buffer of [`FailureNote`]s, flushed to the log after a run.
#[derive(Debug, Default)]
pub struct FailureNotes {
    notes: Vec<FailureNote>,
}

impl FailureNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: FailureNote) {
        self.notes.push(note);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FailureNote> {
        self.notes.iter()
    }

    /// Write every note to the log at warn level, in recorded order.
    pub fn flush(self) {
        for note in &self.notes {
            log::warn!("{note}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_display() {
        let note = FailureNote::StatusMismatch {
            url: "https://peps.python.org/pep-0001/".to_string(),
            code: "A".to_string(),
            displayed: "Draft".to_string(),
            expected: vec!["Active".to_string(), "Accepted".to_string()],
        };
        let text = note.to_string();
        assert!(text.contains("code 'A'"));
        assert!(text.contains("'Draft'"));
        assert!(text.ends_with("expected (Active, Accepted)"));
    }

    #[test]
    fn test_notes_keep_order() {
        let mut notes = FailureNotes::new();
        notes.push(FailureNote::PageUnavailable {
            url: "a".to_string(),
            reason: "x".to_string(),
        });
        notes.push(FailureNote::TagNotFound {
            url: "b".to_string(),
            detail: "y".to_string(),
        });
        let urls: Vec<&str> = notes
            .iter()
            .map(|n| match n {
                FailureNote::PageUnavailable { url, .. } | FailureNote::TagNotFound { url, .. } => {
                    url.as_str()
                }
                FailureNote::StatusMismatch { url, .. } => url.as_str(),
            })
            .collect();
        assert_eq!(urls, ["a", "b"]);
    }
}
