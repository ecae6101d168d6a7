//! Workout session runtime
//!
//! This module provides:
//! - **State**: the phase/progress snapshot the UI renders from
//! - **Runtime**: the state machine that owns the single countdown slot,
//!   applies transition rules, and emits the completion statistic
//!
//! The runtime is synchronous: a clock source delivers ticks and the
//! frontend delivers user actions, both on one logical thread of control.

mod error;
mod runtime;
mod state;


pub use error::SessionError;
pub use runtime::SessionRuntime;
pub use state::{Phase, SessionSnapshot};
