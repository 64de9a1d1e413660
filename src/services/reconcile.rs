// src/services/reconcile.rs

//! Status reconciliation for proposals.

use crate::error::{AppError, Result};
use crate::models::{ExpectedStatusTable, FailureNote, FailureNotes, StatusTally, Table};

pub const HEADER: [&str; 2] = ["Status", "Count"];
pub const TOTAL_LABEL: &str = "Total";

/// Checks each proposal's displayed status against its index code and
/// counts proposals per displayed status.
pub struct StatusReconciler<'a> {
    expected: &'a ExpectedStatusTable,
    tally: StatusTally,
}

impl<'a> StatusReconciler<'a> {
    pub fn new(expected: &'a ExpectedStatusTable) -> Self {
        Self {
            expected,
            tally: StatusTally::new(),
        }
    }

    /// Record one processed proposal.
    ///
    /// An unmapped `code` is an error. A `displayed` status outside the
    /// code's expected set adds a note, and the proposal is counted anyway.
    pub fn record(
        &mut self,
        code: &str,
        displayed: &str,
        url: &str,
        notes: &mut FailureNotes,
    ) -> Result<()> {
        let expected = self
            .expected
            .expected(code)
            .ok_or_else(|| AppError::UnknownStatusCode {
                code: code.to_string(),
                url: url.to_string(),
            })?;

        if !expected.iter().any(|status| status == displayed) {
            notes.push(FailureNote::StatusMismatch {
                url: url.to_string(),
                code: code.to_string(),
                displayed: displayed.to_string(),
                expected: expected.to_vec(),
            });
        }
        self.tally.increment(displayed);
        Ok(())
    }

    /// Tally rows in first-seen order followed by a `Total` row.
    pub fn into_table(self) -> Result<Table> {
        let mut table = Table::new(HEADER);
        for (status, count) in self.tally.entries() {
            table.push([status.clone(), count.to_string()])?;
        }
        table.push([TOTAL_LABEL.to_string(), self.tally.total().to_string()])?;
        Ok(table)
    }
}
