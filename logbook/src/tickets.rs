//! Ticket queue: records selected for printing.
//!
//! The queue is its own feature store so the root App owns it explicitly
//! and the logbook reducer can never touch it. Queued entries are
//! snapshots; removing one never removes the record from the logbook.

use crate::pricing::ticket_price;
use crate::types::{ParkingRecord, RecordId, category_label};
use parklog_core::{
    SmallVec, effect::Effect, environment::Printer, reducer::Reducer, smallvec,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Environment dependencies for the ticket queue
#[derive(Clone)]
pub struct TicketEnvironment {
    /// Platform print-dialog boundary
    pub printer: Arc<dyn Printer>,
}

impl TicketEnvironment {
    /// Creates a new `TicketEnvironment`
    #[must_use]
    pub fn new(printer: Arc<dyn Printer>) -> Self {
        Self { printer }
    }
}

/// State of the print queue
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TicketState {
    /// Records queued for printing, in selection order
    pub queue: Vec<ParkingRecord>,
}

impl TicketState {
    /// Creates a new empty queue
    #[must_use]
    pub const fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Whether a record is already queued
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.queue.iter().any(|t| t.id == *id)
    }

    /// Whether the queue is empty (the normal view is showing)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Actions for the print queue
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TicketAction {
    /// Queue a record snapshot for printing
    QueueTicket {
        /// Snapshot to queue; silently dropped if it has no exit time or is
        /// already queued
        record: ParkingRecord,
    },

    /// Drop one ticket from the queue; unknown ids are a no-op
    RemoveTicket {
        /// Ticket to drop
        id: RecordId,
    },

    /// Empty the queue, returning to the normal view
    ClearQueue,

    /// Invoke the platform print dialog over the current view
    PrintAll,
}

/// Reducer for the print queue
#[derive(Clone, Debug, Default)]
pub struct TicketReducer;

impl TicketReducer {
    /// Creates a new `TicketReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TicketReducer {
    type State = TicketState;
    type Action = TicketAction;
    type Environment = TicketEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TicketAction::QueueTicket { record } => {
                // Exitless records are not ticketable; re-queueing the same
                // record is idempotent.
                if record.has_exited() && !state.contains(&record.id) {
                    state.queue.push(record);
                }
            }

            TicketAction::RemoveTicket { id } => {
                state.queue.retain(|t| t.id != id);
            }

            TicketAction::ClearQueue => {
                state.queue.clear();
            }

            TicketAction::PrintAll => {
                let printer = Arc::clone(&env.printer);
                return smallvec![Effect::Future(Box::pin(async move {
                    printer.print();
                    None
                }))];
            }
        }

        smallvec![Effect::None]
    }
}

/// One priced ticket, ready for the print view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketView {
    /// Record behind this ticket
    pub id: RecordId,
    /// Category label
    pub category: &'static str,
    /// Entry time, `"HH:MM"`
    pub entry_time: String,
    /// Exit time, `"HH:MM"`
    pub exit_time: String,
    /// License plate
    pub plate: String,
    /// Vehicle color
    pub color: String,
    /// Assigned slot
    pub slot: u8,
    /// Computed price, `"$<total>"`
    pub total: String,
}

impl TicketView {
    /// Build the priced view for one queued record
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
            total: ticket_price(&record.entry_time, &record.exit_time),
        }
    }
}

impl fmt::Display for TicketView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | in {} | out {} | plate {} | {} | slot {} | total {} MXN",
            self.category,
            self.entry_time,
            self.exit_time,
            self.plate,
            self.color,
            self.slot,
            self.total
        )
    }
}

/// Priced views for every queued ticket, in selection order
#[must_use]
pub fn ticket_views(state: &TicketState) -> Vec<TicketView> {
    state.queue.iter().map(TicketView::from_record).collect()
}
