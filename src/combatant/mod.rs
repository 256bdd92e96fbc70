//! Combatants: classes, stat blocks, and level progression.

#![allow(unused_imports)]

pub mod class;
pub mod progression;
pub mod types;

pub use class::*;
pub use types::*;
