//! Duel - Terminal-Based Battle Game Library
//!
//! This module exposes the battle logic for testing and external use.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod build_info;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod items;
pub mod simulator;
pub mod ui;
