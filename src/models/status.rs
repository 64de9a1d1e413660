//! Proposal status lookup table and per-status tally.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Status code (single character, or empty for drafts) to the displayed
/// statuses a proposal page may legitimately show for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExpectedStatusTable(BTreeMap<String, Vec<String>>);

impl ExpectedStatusTable {
    /// Build a table from `(code, statuses)` pairs.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
    ) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(code, statuses)| {
                    (
                        code.to_string(),
                        statuses.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Accepted displayed statuses for `code`, or `None` if the code is unmapped.
    pub fn expected(&self, code: &str) -> Option<&[String]> {
        self.0.get(code).map(Vec::as_slice)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExpectedStatusTable {
    fn default() -> Self {
        Self::from_pairs([
            ("A", &["Active", "Accepted"][..]),
            ("D", &["Deferred"][..]),
            ("F", &["Final"][..]),
            ("P", &["Provisional"][..]),
            ("R", &["Rejected"][..]),
            ("S", &["Superseded"][..]),
            ("W", &["Withdrawn"][..]),
            ("", &["Draft", "Active"][..]),
        ])
    }
}

/// Count of proposals per displayed status, in first-seen order.
///
/// There is no stored total: [`StatusTally::total`] always sums the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    entries: Vec<(String, usize)>,
}

impl StatusTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more proposal under `status`.
    pub fn increment(&mut self, status: &str) {
        match self.entries.iter_mut().find(|(s, _)| s == status) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((status.to_string(), 1)),
        }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_codes() {
        let table = ExpectedStatusTable::default();
        assert_eq!(table.codes().count(), 8);
        assert_eq!(
            table.expected(""),
            Some(&["Draft".to_string(), "Active".to_string()][..])
        );
        assert!(table.expected("X").is_none());
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = StatusTally::new();
        tally.increment("Final");
        tally.increment("Active");
        tally.increment("Final");
        tally.increment("Draft");

        let order: Vec<&str> = tally.entries().iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(order, ["Final", "Active", "Draft"]);
        assert_eq!(tally.entries()[0], ("Final".to_string(), 2));
    }

    #[test]
    fn test_total_is_sum_of_entries() {
        let mut tally = StatusTally::new();
        assert_eq!(tally.total(), 0);
        for status in ["Final", "Final", "Withdrawn", "Accepted", "Final"] {
            tally.increment(status);
        }
        let summed: usize = tally.entries().iter().map(|(_, c)| c).sum();
        assert_eq!(tally.total(), summed);
        assert_eq!(tally.total(), 5);
    }
}
