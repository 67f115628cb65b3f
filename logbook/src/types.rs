//! Domain types for the parking logbook.
//!
//! A [`ParkingRecord`] is one vehicle's parking session. Records live in the
//! [`LogbookState`] in registration order and are never deleted; attaching an
//! exit time through the editing flow is what frees the record's slot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a parking record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random `RecordId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `RecordId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle category offered by the lot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Catalog id, referenced by [`ParkingRecord::category`]
    pub id: u8,
    /// Selector label
    pub name: &'static str,
}

/// Catalog id for cars
pub const CAR: u8 = 1;

/// Catalog id for vans
pub const VAN: u8 = 2;

/// The static category catalog consumed by the form's selector
pub const CATEGORIES: [Category; 2] = [
    Category { id: CAR, name: "Car" },
    Category { id: VAN, name: "Van" },
];

/// Label for a category id
///
/// Anything that is not a car renders as a van, matching the list and
/// ticket views' binary rendering.
#[must_use]
pub const fn category_label(id: u8) -> &'static str {
    if id == CAR { "Car" } else { "Van" }
}

/// Number of physical slots in the lot
pub const SLOT_COUNT: u8 = 20;

/// Slot value meaning "no slot assigned"
pub const SLOT_UNASSIGNED: u8 = 0;

/// One vehicle's parking session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingRecord {
    /// Unique identifier, generated when the record is created
    pub id: RecordId,
    /// Foreign key into [`CATEGORIES`]
    pub category: u8,
    /// Time of entry, `"HH:MM"`; empty until set
    pub entry_time: String,
    /// Time of exit, `"HH:MM"`; empty while the vehicle is parked
    pub exit_time: String,
    /// License plate
    pub plate: String,
    /// Vehicle color
    pub color: String,
    /// Assigned slot in `1..=SLOT_COUNT`; [`SLOT_UNASSIGNED`] if none
    pub slot: u8,
}

impl ParkingRecord {
    /// Blank car record with the given id, the form's create-mode draft
    #[must_use]
    pub const fn blank(id: RecordId) -> Self {
        Self {
            id,
            category: CAR,
            entry_time: String::new(),
            exit_time: String::new(),
            plate: String::new(),
            color: String::new(),
            slot: SLOT_UNASSIGNED,
        }
    }

    /// Whether the vehicle has left (an exit time is recorded)
    #[must_use]
    pub fn has_exited(&self) -> bool {
        !self.exit_time.trim().is_empty()
    }

    /// Whether the record still holds its slot
    #[must_use]
    pub fn occupies_slot(&self) -> bool {
        self.slot != SLOT_UNASSIGNED && !self.has_exited()
    }

    /// Whether both times are recorded, making the record ticketable
    #[must_use]
    pub fn is_printable(&self) -> bool {
        !self.entry_time.trim().is_empty() && self.has_exited()
    }
}

/// State of the logbook aggregate
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LogbookState {
    /// All parking records, in registration order
    pub records: Vec<ParkingRecord>,
    /// Record currently loaded into the form; `None` means create mode
    pub active_id: Option<RecordId>,
}

impl LogbookState {
    /// Creates a new empty logbook
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            active_id: None,
        }
    }

    /// Returns the number of records
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns a record by id
    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&ParkingRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Whether a slot is held by some record other than `except`
    ///
    /// A record holds its slot until its exit time is set; the check runs
    /// against the live record list every time it is asked.
    #[must_use]
    pub fn slot_occupied(&self, slot: u8, except: &RecordId) -> bool {
        self.records
            .iter()
            .any(|r| r.slot == slot && r.id != *except && r.occupies_slot())
    }
}
