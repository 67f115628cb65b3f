//! # Parklog Testing
//!
//! Testing utilities and helpers for the parklog architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use parklog_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(LogbookReducer::new())
//!     .with_env(test_environment())
//!     .given_state(LogbookState::new())
//!     .when_action(LogbookAction::SelectRecord { id })
//!     .then_state(|state| assert_eq!(state.active_id, Some(id)))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
///
/// One deterministic stand-in per platform boundary: id generation and the
/// print dialog.
pub mod mocks {
    use parklog_core::environment::{IdGenerator, Printer};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use uuid::Uuid;

    /// Sequential id generator for deterministic tests
    ///
    /// Produces `Uuid`s built from an incrementing counter, so the ids a
    /// test mints are predictable and reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use parklog_core::environment::IdGenerator;
    /// use parklog_testing::mocks::SequentialIds;
    ///
    /// let ids = SequentialIds::new();
    /// assert_ne!(ids.new_id(), ids.new_id());
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Create a new generator starting at 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGenerator for SequentialIds {
        fn new_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Printer mock that counts invocations instead of opening a dialog
    #[derive(Debug, Clone, Default)]
    pub struct RecordingPrinter {
        invocations: Arc<AtomicUsize>,
    }

    impl RecordingPrinter {
        /// Create a new recording printer
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of times the print dialog was requested
        #[must_use]
        pub fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    impl Printer for RecordingPrinter {
        fn print(&self) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub use mocks::{RecordingPrinter, SequentialIds};
