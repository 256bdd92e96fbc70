//! Move catalog, action resolution, and status effects.

#![allow(unused_imports)]

pub mod moves;
pub mod resolver;
pub mod status;

pub use moves::*;
pub use resolver::*;
pub use status::*;
