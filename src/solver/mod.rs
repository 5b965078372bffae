//! Constrained enumeration of candidate expressions and ranking

pub mod constants;
mod core;
mod prune;
mod rank;
mod search;
mod strategy;

pub use core::PuzzleSolver;
pub use strategy::Strategy;
