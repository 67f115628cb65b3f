//! Root application: both stores, the form, and the view switch.
//!
//! `App` is the single owned state object the rest of the program talks
//! to. It owns the logbook store, the ticket store, and the registration
//! form, and keeps the form in sync with the logbook's selection.

use crate::form::{RegistrationForm, SlotStatus};
use crate::list::{self, RecordRow};
use crate::reducer::{LogbookAction, LogbookEnvironment, LogbookReducer};
use crate::tickets::{
    self, TicketAction, TicketEnvironment, TicketReducer, TicketState, TicketView,
};
use crate::types::{LogbookState, RecordId};
use parklog_runtime::{Store, StoreError};
use std::time::Duration;

/// Which of the two screens is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Form plus record list
    Normal,
    /// Print preview of the queued tickets
    Tickets,
}

type LogbookStore = Store<LogbookState, LogbookAction, LogbookEnvironment, LogbookReducer>;
type TicketStore = Store<TicketState, TicketAction, TicketEnvironment, TicketReducer>;

/// Root application state
pub struct App {
    logbook: LogbookStore,
    tickets: TicketStore,
    env: LogbookEnvironment,
    form: RegistrationForm,
    form_selection: Option<RecordId>,
}

impl App {
    /// Creates a new application with empty stores and a blank form
    #[must_use]
    pub fn new(logbook_env: LogbookEnvironment, ticket_env: TicketEnvironment) -> Self {
        let form = RegistrationForm::for_selection(&LogbookState::new(), &logbook_env);
        Self {
            logbook: Store::new(LogbookState::new(), LogbookReducer::new(), logbook_env.clone()),
            tickets: Store::new(TicketState::new(), TicketReducer::new(), ticket_env),
            env: logbook_env,
            form,
            form_selection: None,
        }
    }

    /// The registration form, for rendering
    #[must_use]
    pub const fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// The registration form, for field input
    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    /// Dispatch a logbook action
    ///
    /// After the reducer runs, the form is re-derived iff the active
    /// selection changed; unrelated state changes leave it alone.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the logbook store is shutting down.
    pub async fn dispatch(&mut self, action: LogbookAction) -> Result<(), StoreError> {
        self.logbook.send(action).await?;
        self.sync_form().await;
        Ok(())
    }

    async fn sync_form(&mut self) {
        let (active_id, state) = self.logbook.state(|s| (s.active_id, s.clone())).await;
        if active_id != self.form_selection {
            self.form = RegistrationForm::for_selection(&state, &self.env);
            self.form_selection = active_id;
        }
    }

    /// Submit the form, dispatching the assembled record if the gate passes
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the logbook store is shutting down.
    pub async fn submit_form(&mut self) -> Result<(), StoreError> {
        let action = self.form.submit(&self.env);
        if let Some(action) = action {
            self.dispatch(action).await?;
        }
        Ok(())
    }

    /// Assign a slot to the form's draft, checked against live state
    pub async fn select_slot(&mut self, slot: u8) -> bool {
        let state = self.logbook.state(Clone::clone).await;
        self.form.select_slot(&state, slot)
    }

    /// Rendering state of one slot in the form's grid
    pub async fn slot_status(&self, slot: u8) -> SlotStatus {
        let state = self.logbook.state(Clone::clone).await;
        self.form.slot_status(&state, slot)
    }

    /// Snapshot of the logbook state
    pub async fn logbook_state(&self) -> LogbookState {
        self.logbook.state(Clone::clone).await
    }

    /// Rows for the record list, in registration order
    pub async fn rows(&self) -> Vec<RecordRow> {
        self.logbook.state(list::rows).await
    }

    /// Queue a record's ticket by id
    ///
    /// Silently ignores unknown ids and records without an exit time;
    /// queue-level dedup makes the whole path idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the ticket store is shutting down.
    pub async fn handle_print_ticket(&self, id: RecordId) -> Result<(), StoreError> {
        let record = self.logbook.state(|s| s.find(&id).cloned()).await;
        match record {
            Some(record) if record.has_exited() => {
                self.tickets.send(TicketAction::QueueTicket { record }).await
            }
            _ => {
                tracing::debug!(%id, "ignoring print request for unticketable record");
                Ok(())
            }
        }
    }

    /// Remove one ticket from the print queue (never from the logbook)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the ticket store is shutting down.
    pub async fn handle_delete_ticket(&self, id: RecordId) -> Result<(), StoreError> {
        self.tickets.send(TicketAction::RemoveTicket { id }).await
    }

    /// Leave the ticket view, emptying the queue
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the ticket store is shutting down.
    pub async fn handle_back(&self) -> Result<(), StoreError> {
        self.tickets.send(TicketAction::ClearQueue).await
    }

    /// Invoke the platform print dialog over the ticket view
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the ticket store is shutting down.
    pub async fn print_all(&self) -> Result<(), StoreError> {
        self.tickets.send(TicketAction::PrintAll).await
    }

    /// Priced views of the queued tickets
    pub async fn ticket_views(&self) -> Vec<TicketView> {
        self.tickets.state(tickets::ticket_views).await
    }

    /// Which screen to render: tickets whenever the queue is non-empty
    pub async fn view(&self) -> View {
        if self.tickets.state(TicketState::is_empty).await {
            View::Normal
        } else {
            View::Tickets
        }
    }

    /// Shut both stores down, waiting for pending effects
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects are still running
    /// when the timeout elapses.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.logbook.shutdown(timeout).await?;
        self.tickets.shutdown(timeout).await
    }
}
