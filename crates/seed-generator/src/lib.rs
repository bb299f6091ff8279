//! Synthetic row generator for the crm-seed tool.
//!
//! This crate provides the `CrmGenerator`, which produces CRM-style rows
//! (accounts, leads, opportunities, interactions, orders) from fake-data
//! providers, and the sinusoidal trend function used to decide how many
//! leads land on each simulated day. Nothing in here touches storage; the
//! populator crates feed the produced rows into a database.
//!
//! # Architecture
//!
//! ```text
//!  TrendParams ──► trend::leads_for_day(mode, day)
//!                          │
//!                          ▼ leads per day
//! ┌──────────────────────────────────┐
//! │           CrmGenerator           │
//! │                                  │
//! │  - rng (StdRng, seeded/entropy)  │
//! │  - next_lead_id                  │
//! └────────────────┬─────────────────┘
//!                  │
//!                  ▼
//!   AccountRow / LeadRow / OpportunityRow / InteractionRow / OrderRow
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{CrmGenerator, TrendMode, TrendParams};
//!
//! let mut generator = CrmGenerator::new(42);
//! let account = generator.account();
//! assert!(account.address.contains(", "));
//!
//! let per_day = seed_generator::trend::leads_for_day(
//!     TrendMode::Literal,
//!     0,
//!     &TrendParams::default(),
//! );
//! assert_eq!(per_day, 228);
//! ```

pub mod generator;
pub mod generators;
pub mod rows;
pub mod trend;

// Re-exports for convenience
pub use generator::{CrmGenerator, GeneratorError};
pub use rows::{AccountRow, InteractionRow, LeadRow, OpportunityRow, OrderRow};
pub use trend::{sin_curve, TrendMode, TrendParams};
