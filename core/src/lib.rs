//! # Parklog Core
//!
//! Core traits and types for the parklog architecture.
//!
//! This crate provides the fundamental abstractions the logbook application
//! is built from:
//!
//! - **State**: owned domain state for a feature
//! - **Action**: all possible inputs to a reducer, as a closed enum
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use parklog_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for LogbookReducer {
//!     type State = LogbookState;
//!     type Action = LogbookAction;
//!     type Environment = LogbookEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut LogbookState,
//!         action: LogbookAction,
//!         env: &LogbookEnvironment,
//!     ) -> SmallVec<[Effect<LogbookAction>; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export the effect list type so dependents share one smallvec.
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed by the runtime
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution), returned from reducers and executed
/// by the Store.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. The logbook has exactly two platform
/// boundaries: unique id generation and the print dialog.
pub mod environment {
    use uuid::Uuid;

    /// Id generation trait - abstracts unique id creation for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use parklog_core::environment::{IdGenerator, UuidIds};
    ///
    /// let ids = UuidIds;
    /// assert_ne!(ids.new_id(), ids.new_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh unique identifier
        fn new_id(&self) -> Uuid;
    }

    /// Production id generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIds;

    impl IdGenerator for UuidIds {
        fn new_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }

    /// Print boundary trait - abstracts the platform print dialog
    ///
    /// The dialog takes no parameters and returns nothing observable;
    /// implementations are fire-and-forget.
    pub trait Printer: Send + Sync {
        /// Request the platform print dialog over the current view
        fn print(&self);
    }

    /// Production printer
    ///
    /// Headless builds have no dialog to open, so the invocation is logged.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemPrinter;

    impl Printer for SystemPrinter {
        fn print(&self) {
            tracing::info!("print dialog requested");
        }
    }
}
