//! Battle state machine, events, and tuning constants.

#![allow(unused_imports)]

pub mod battle;
pub mod constants;
pub mod events;

pub use battle::*;
pub use constants::*;
pub use events::*;
