//! Common types and utilities for crm-seed populators.
//!
//! This crate provides the argument types shared by every storage backend so
//! the seeding parameters look the same regardless of where rows land.

pub mod args;

pub use args::{CommonSeedArgs, TrendModeArg};
