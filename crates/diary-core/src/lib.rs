//! # Diary Core
//!
//! Core library for Diary - a personal diary of dated Markdown entries kept
//! in a single JSON file.
//!
//! This crate provides the storage layer, input validation, and calendar
//! helpers independent of any front end.
//!
//! ## Architecture
//!
//! - **storage**: `EntryStore` trait and the JSON file backend
//! - **service**: form validation and orchestration over a store
//! - **calendar**: calendar-day grouping for date pickers
//! - **fs**: file write helpers

pub mod calendar;
pub mod error;
pub mod fs;
pub mod service;
pub mod storage;

pub use error::{DiaryError, Result};
pub use service::EntryService;
pub use storage::{EntryStore, JsonFileStore, StoreConfig};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
