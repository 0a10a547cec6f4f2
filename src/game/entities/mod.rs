//! Game entities module.
//!
//! This module organizes the bot registry and the bot decision functions.

pub mod bot;
pub mod strategy;

pub use bot::*;
pub use strategy::*;
