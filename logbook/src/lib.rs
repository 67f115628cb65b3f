//! Parking-lot logbook built on the parklog architecture.
//!
//! A small operator-facing logbook: register vehicle entries (category,
//! entry time, plate, color, assigned slot), attach an exit time through
//! the editing flow, and print priced tickets. State is in-memory only and
//! lives in two reducer-driven stores:
//!
//! - The **logbook** store owns the authoritative record list and the
//!   current selection ([`reducer`]).
//! - The **ticket** store owns the ephemeral print queue ([`tickets`]).
//!
//! The [`form`] module is the working copy of the record being created or
//! edited, [`list`] projects records into rows, [`pricing`] computes ticket
//! totals, and [`app`] ties everything together behind one owned object.
//!
//! # Quick Start
//!
//! ```no_run
//! use parklog::app::App;
//! use parklog::reducer::LogbookEnvironment;
//! use parklog::tickets::TicketEnvironment;
//! use parklog_core::environment::{SystemPrinter, UuidIds};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = App::new(
//!     LogbookEnvironment::new(Arc::new(UuidIds)),
//!     TicketEnvironment::new(Arc::new(SystemPrinter)),
//! );
//!
//! // Register a vehicle
//! app.form_mut().set_entry_time("08:00");
//! app.form_mut().set_plate("PRA-42-46");
//! app.form_mut().set_color("Red");
//! app.select_slot(3).await;
//! app.submit_form().await?;
//!
//! // Later: load it for editing and record the exit
//! let rows = app.rows().await;
//! if let Some(row) = rows.first() {
//!     app.dispatch(row.edit_action()).await?;
//!     app.form_mut().set_exit_time("09:15");
//!     app.submit_form().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod form;
pub mod list;
pub mod pricing;
pub mod reducer;
pub mod tickets;
pub mod types;

// Re-export commonly used types
pub use app::{App, View};
pub use form::{FormMode, RegistrationForm, SlotStatus};
pub use list::RecordRow;
pub use pricing::{HOURLY_RATE, ticket_price};
pub use reducer::{LogbookAction, LogbookEnvironment, LogbookReducer};
pub use tickets::{TicketAction, TicketEnvironment, TicketReducer, TicketState, TicketView};
pub use types::{CATEGORIES, Category, LogbookState, ParkingRecord, RecordId};
