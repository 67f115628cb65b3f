//! Record list: per-record view models for the outer surface.
//!
//! Each row carries everything the list renders plus its two affordances:
//! the edit action (dispatched to the logbook store) and a print flag that
//! the root App turns into a ticket-queue request.

use crate::reducer::LogbookAction;
use crate::types::{LogbookState, ParkingRecord, RecordId, category_label};
use std::fmt;

/// One rendered row of the record list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRow {
    /// Record behind this row
    pub id: RecordId,
    /// Category label
    pub category: &'static str,
    /// Entry time, `"HH:MM"`
    pub entry_time: String,
    /// Exit time, `"HH:MM"`; empty while the vehicle is parked
    pub exit_time: String,
    /// License plate
    pub plate: String,
    /// Vehicle color
    pub color: String,
    /// Assigned slot
    pub slot: u8,
    /// Whether the print affordance is shown (entry and exit recorded)
    pub can_print: bool,
}

impl RecordRow {
    /// Build the row for one record
    #[must_use]
    pub fn from_record(record: &ParkingRecord) -> Self {
        Self {
            id: record.id,
            category: category_label(record.category),
            entry_time: record.entry_time.clone(),
            exit_time: record.exit_time.clone(),
            plate: record.plate.clone(),
            color: record.color.clone(),
            slot: record.slot,
            can_print: record.is_printable(),
        }
    }

    /// Action dispatched by the row's edit affordance
    #[must_use]
    pub const fn edit_action(&self) -> LogbookAction {
        LogbookAction::SelectRecord { id: self.id }
    }
}

impl fmt::Display for RecordRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exit = if self.exit_time.is_empty() {
            "-"
        } else {
            &self.exit_time
        };
        write!(
            f,
            "{} | in {} | out {} | plate {} | {} | slot {}",
            self.category, self.entry_time, exit, self.plate, self.color, self.slot
        )?;
        if self.can_print {
            write!(f, " [printable]")?;
        }
        Ok(())
    }
}

/// Rows for every record, in registration order
#[must_use]
pub fn rows(state: &LogbookState) -> Vec<RecordRow> {
    state.records.iter().map(RecordRow::from_record).collect()
}
