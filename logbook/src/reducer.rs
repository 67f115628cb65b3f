//! Reducer logic for the logbook aggregate.
//!
//! The reducer is a pure state machine: it performs no validation (the
//! registration form gates every dispatch) and produces no side effects.

use crate::types::{LogbookState, ParkingRecord, RecordId};
use parklog_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Environment dependencies for the logbook
///
/// The reducer itself takes no dependencies; the id generator is consumed
/// by the registration form when it mints blank drafts and fresh record
/// ids on creation.
#[derive(Clone)]
pub struct LogbookEnvironment {
    /// Source of fresh unique ids
    pub ids: Arc<dyn IdGenerator>,
}

impl LogbookEnvironment {
    /// Creates a new `LogbookEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Mint an id for a new record
    #[must_use]
    pub fn record_id(&self) -> RecordId {
        RecordId::from_uuid(self.ids.new_id())
    }
}

/// Actions for the logbook aggregate
///
/// The set is closed and exhaustively matched; there is no unknown-action
/// arm to handle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LogbookAction {
    /// Load a record into the form for editing
    SelectRecord {
        /// Record to edit; a dangling id is tolerated (the form falls back
        /// to a blank draft)
        id: RecordId,
    },

    /// Create a record, or replace the one sharing its id in place
    SaveRecord {
        /// The assembled record, already validated by the form
        record: ParkingRecord,
    },
}

/// Reducer for the logbook aggregate
#[derive(Clone, Debug, Default)]
pub struct LogbookReducer;

impl LogbookReducer {
    /// Creates a new `LogbookReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for LogbookReducer {
    type State = LogbookState;
    type Action = LogbookAction;
    type Environment = LogbookEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            LogbookAction::SelectRecord { id } => {
                state.active_id = Some(id);
            }

            LogbookAction::SaveRecord { record } => {
                // Replacing keeps the record's position in the list.
                if let Some(existing) = state.records.iter_mut().find(|r| r.id == record.id) {
                    *existing = record;
                } else {
                    state.records.push(record);
                }
                state.active_id = None;
            }
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklog_testing::{ReducerTest, SequentialIds, assertions};

    fn test_env() -> LogbookEnvironment {
        LogbookEnvironment::new(Arc::new(SequentialIds::new()))
    }

    fn parked(env: &LogbookEnvironment, plate: &str, slot: u8) -> ParkingRecord {
        let mut record = ParkingRecord::blank(env.record_id());
        record.entry_time = "08:00".to_owned();
        record.plate = plate.to_owned();
        record.color = "Red".to_owned();
        record.slot = slot;
        record
    }

    #[test]
    fn select_record_sets_active_id() {
        let env = test_env();
        let id = env.record_id();

        ReducerTest::new(LogbookReducer::new())
            .with_env(test_env())
            .given_state(LogbookState::new())
            .when_action(LogbookAction::SelectRecord { id })
            .then_state(move |state| {
                assert_eq!(state.active_id, Some(id));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn save_new_record_appends() {
        let env = test_env();
        let record = parked(&env, "PRA-42-46", 3);
        let id = record.id;

        ReducerTest::new(LogbookReducer::new())
            .with_env(test_env())
            .given_state(LogbookState::new())
            .when_action(LogbookAction::SaveRecord { record })
            .then_state(move |state| {
                assert_eq!(state.count(), 1);
                assert!(state.find(&id).is_some());
                assert_eq!(state.active_id, None);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn save_existing_record_replaces_in_place() {
        let env = test_env();
        let first = parked(&env, "PRA-42-46", 3);
        let second = parked(&env, "XKT-10-99", 7);
        let mut edited = first.clone();
        edited.exit_time = "09:15".to_owned();
        let first_id = first.id;

        ReducerTest::new(LogbookReducer::new())
            .with_env(test_env())
            .given_state(LogbookState {
                records: vec![first, second],
                active_id: Some(first_id),
            })
            .when_action(LogbookAction::SaveRecord { record: edited })
            .then_state(move |state| {
                assert_eq!(state.count(), 2);
                // Position and id preserved, exit time attached
                assert_eq!(state.records[0].id, first_id);
                assert_eq!(state.records[0].exit_time, "09:15");
                assert_eq!(state.active_id, None);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn save_clears_selection_even_when_appending() {
        let env = test_env();
        let record = parked(&env, "PRA-42-46", 3);
        let dangling = env.record_id();

        ReducerTest::new(LogbookReducer::new())
            .with_env(test_env())
            .given_state(LogbookState {
                records: Vec::new(),
                active_id: Some(dangling),
            })
            .when_action(LogbookAction::SaveRecord { record })
            .then_state(|state| {
                assert_eq!(state.active_id, None);
            })
            .run();
    }
}
