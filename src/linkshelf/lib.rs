//! # Linkshelf Architecture
//!
//! Linkshelf is a **UI-agnostic bookmark library**: a shelf of named links,
//! rendered as colored cards with favicons, searchable by name, with a
//! light/dark/sepia theme. The bundled CLI is one client; a browser or TUI
//! front end would drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints cards and messages              │
//! │  - Implements the Prompter on the terminal                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One controller owning AppState, config and the store     │
//! │  - One method per user interaction                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Event handlers: mutate state, persist, re-render         │
//! │  - Pure pieces: shelf, render, favicon, palette, theme      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: string slots, like local storage    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr, reads stdin or
//! exits. Confirmation and error dialogs are a [`prompt::Prompter`] supplied
//! by the UI, so delete and validation logic run unattended in tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller, entry point for all operations
//! - [`commands`]: One handler per interaction
//! - [`shelf`]: Ordered link list, URL normalization, name filter
//! - [`render`]: Shelf to cards / empty state
//! - [`favicon`]: Per-card icon fallback state machine
//! - [`palette`]: Card colors
//! - [`theme`]: Theme controller
//! - [`state`]: In-memory application state
//! - [`store`]: Slot storage and the link/theme persistence adapter
//! - [`index`]: Position and id selectors
//! - [`config`]: Configuration management
//! - [`prompt`]: Confirm/notify capability
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favicon;
pub mod index;
pub mod model;
pub mod palette;
pub mod prompt;
pub mod render;
pub mod shelf;
pub mod state;
pub mod store;
pub mod theme;
