//! # art_attack
//!
//! Turn-based territory painting. Bots roam a square grid, marking the cells
//! they step on while their pen is down; whoever owns the most cells when the
//! round limit is reached wins.
//!
//! The [`driver::SimulationDriver`] actor runs the turns on a timer and
//! broadcasts the grid and bots to its observers after every tick.

pub mod config;
pub mod driver;
pub mod error;
pub mod game;
