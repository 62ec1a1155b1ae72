//! fleetdash-core — view models for the fleet operations dashboard.
//!
//! Provides:
//! - `table` — generic table view-model (filter, tri-state sort, pagination,
//!   pinned column offsets)
//! - `model` — device, node and activity records
//! - `provider` — record source abstraction (directory, in-memory)
//! - `view` — UI-agnostic page views for the three collections
//! - `fmt` — shared formatting helpers (timestamps, limits, footers)
//! - `config` — per-view page-size settings
//!
//! With `tui` feature (default):
//! - `tui` — TUI rendering (ratatui/crossterm), state, input, widgets

pub mod config;
pub mod fmt;
pub mod model;
pub mod provider;
pub mod table;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Crate version with the embedded git SHA, e.g. `0.1.0-3f2a9c1`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("FLEETDASH_GIT_SHA"));
