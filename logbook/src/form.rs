//! Registration form: the working copy of a record being created or edited.
//!
//! The form is a pure derivation of `(active_id, records)`: the root App
//! rebuilds it with [`RegistrationForm::for_selection`] exactly once per
//! selection change. Field mutators enforce per-mode editability, the slot
//! grid enforces occupancy against the live record list, and submission is
//! gated and latched against duplicate dispatch.

use crate::reducer::{LogbookAction, LogbookEnvironment};
use crate::types::{CAR, LogbookState, ParkingRecord, SLOT_COUNT, SLOT_UNASSIGNED};

/// Whether the form is creating a new record or editing an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// No record selected; entry time and the slot grid are live
    Create,
    /// A record is loaded; only the exit time and free-text fields are live
    Edit,
}

/// Rendering state of one slot in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    /// Held by another vehicle that has not exited
    Occupied,
    /// Chosen for the current draft
    Selected,
    /// Free and selectable
    Available,
    /// Free but not selectable (incomplete fields, or edit mode)
    Locked,
}

/// Working copy of a single record, plus submission bookkeeping
///
/// The plate is tracked apart from the draft so partial edits to the other
/// fields cannot clobber it; submission merges it back in.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    draft: ParkingRecord,
    plate: String,
    mode: FormMode,
    submitting: bool,
}

impl RegistrationForm {
    fn blank(env: &LogbookEnvironment) -> Self {
        Self {
            draft: ParkingRecord::blank(env.record_id()),
            plate: String::new(),
            mode: FormMode::Create,
            submitting: false,
        }
    }

    /// Derive the form for the current selection
    ///
    /// Loads the selected record's full contents when `active_id` is set,
    /// or mints a blank create-mode draft when it is `None`. A dangling
    /// `active_id` keeps edit mode but falls back to a blank draft.
    #[must_use]
    pub fn for_selection(state: &LogbookState, env: &LogbookEnvironment) -> Self {
        match state.active_id {
            Some(id) => match state.find(&id) {
                Some(record) => Self {
                    draft: record.clone(),
                    plate: record.plate.clone(),
                    mode: FormMode::Edit,
                    submitting: false,
                },
                None => Self {
                    mode: FormMode::Edit,
                    ..Self::blank(env)
                },
            },
            None => Self::blank(env),
        }
    }

    /// The working copy
    #[must_use]
    pub const fn draft(&self) -> &ParkingRecord {
        &self.draft
    }

    /// The separately tracked plate
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Create or edit mode
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether the submit control is latched after a dispatch
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Set the vehicle category; always editable
    pub fn set_category(&mut self, id: u8) {
        self.draft.category = id;
        self.submitting = false;
    }

    /// Set the entry time; ignored while editing an existing record
    pub fn set_entry_time(&mut self, value: &str) {
        if self.mode == FormMode::Edit {
            return;
        }
        self.draft.entry_time = value.to_owned();
        self.submitting = false;
    }

    /// Set the exit time; ignored while creating (an entry must exist first)
    pub fn set_exit_time(&mut self, value: &str) {
        if self.mode == FormMode::Create {
            return;
        }
        self.draft.exit_time = value.to_owned();
        self.submitting = false;
    }

    /// Set the plate; always editable
    pub fn set_plate(&mut self, value: &str) {
        self.plate = value.to_owned();
        self.submitting = false;
    }

    /// Set the vehicle color; always editable
    pub fn set_color(&mut self, value: &str) {
        self.draft.color = value.to_owned();
        self.submitting = false;
    }

    /// Whether category, entry time, plate, and color are all filled in,
    /// unlocking the slot grid
    #[must_use]
    pub fn fields_complete(&self) -> bool {
        self.draft.category != 0
            && !self.draft.entry_time.trim().is_empty()
            && !self.plate.trim().is_empty()
            && !self.draft.color.trim().is_empty()
    }

    /// Rendering state of one slot, checked against the live record list
    #[must_use]
    pub fn slot_status(&self, state: &LogbookState, slot: u8) -> SlotStatus {
        if state.slot_occupied(slot, &self.draft.id) {
            SlotStatus::Occupied
        } else if self.draft.slot == slot {
            SlotStatus::Selected
        } else if self.mode == FormMode::Create && self.fields_complete() {
            SlotStatus::Available
        } else {
            SlotStatus::Locked
        }
    }

    /// Assign a slot to the draft
    ///
    /// Only in create mode, only once the other fields are complete, and
    /// only onto a slot no parked vehicle holds. Returns whether the slot
    /// was taken.
    pub fn select_slot(&mut self, state: &LogbookState, slot: u8) -> bool {
        if slot == SLOT_UNASSIGNED || slot > SLOT_COUNT {
            return false;
        }
        if self.mode != FormMode::Create || !self.fields_complete() {
            return false;
        }
        if state.slot_occupied(slot, &self.draft.id) {
            return false;
        }

        self.draft.slot = slot;
        self.submitting = false;
        true
    }

    /// Whether the working record passes the submission gate for its mode
    ///
    /// Editing only requires an exit time; creating requires every field
    /// plus a chosen slot.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.mode {
            FormMode::Edit => self.draft.has_exited(),
            FormMode::Create => self.fields_complete() && self.draft.slot != SLOT_UNASSIGNED,
        }
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Submit-control label, varying with the chosen category
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.draft.category == CAR {
            "Register car"
        } else {
            "Register van"
        }
    }

    /// Assemble and yield the save action, if the gate passes
    ///
    /// Merges the tracked plate back into the record, mints a fresh id when
    /// creating, latches the submit control, and resets the form to a blank
    /// create-mode draft. The latch holds until the next field change.
    pub fn submit(&mut self, env: &LogbookEnvironment) -> Option<LogbookAction> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;

        let mut record = self.draft.clone();
        record.plate = self.plate.clone();
        if self.mode == FormMode::Create {
            record.id = env.record_id();
        }

        self.draft = ParkingRecord::blank(env.record_id());
        self.plate.clear();
        self.mode = FormMode::Create;

        Some(LogbookAction::SaveRecord { record })
    }
}
