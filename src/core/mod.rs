//! # Core Application Logic
//!
//! This module contains naiken's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (records)      │
//!                    │  • Scorer (pure fn)     │
//!                    │  • Report (presenter)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: The `Record` entity and its input draft
//! - [`score`]: The composite score formula
//! - [`store`]: Ordered record collection + id counter
//! - [`report`]: Summary statistics and ranked rows for display
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings layering (file, env, defaults)

pub mod action;
pub mod config;
pub mod record;
pub mod report;
pub mod score;
pub mod state;
pub mod store;
