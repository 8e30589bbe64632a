//! # ContentCraft Architecture
//!
//! ContentCraft is a **UI-agnostic content workspace**: a library that holds a
//! collection of content records, a draft being edited, and the filters applied
//! to the list. The bundled binary is one front end for it; a browser or TUI
//! front end would drive exactly the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front End (cli/, wired by main.rs)                         │
//! │  - Reads user actions, renders records and notifications    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Workspace (api.rs)                                         │
//! │  - Owns draft, edit mode, panel, filter state, media        │
//! │  - Resolves selectors (indexes, id prefixes) to ids         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Commit rules: validation, ids, publish dates, ordering   │
//! │  - Pure filtering and counting                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContentStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<CmdResult>`.
//! It never prints and never exits. Notifications ("Content created
//! successfully!") travel back as [`commands::CmdMessage`] values for the front
//! end to show however it likes.
//!
//! ## Nothing Persists
//!
//! Records, uploads and the draft live only as long as the process. The only
//! file ever read is the optional configuration.
//!
//! ## Module Overview
//!
//! - [`api`]: The workspace view-model, entry point for all operations
//! - [`commands`]: Commit rules, filtering and stats
//! - [`draft`]: The draft editor, including tags and slug handling
//! - [`slug`]: Slug derivation
//! - [`store`]: Storage abstraction and the in-memory collection
//! - [`model`]: Core data types (`ContentRecord`, `ContentStatus`, `Category`, ...)
//! - [`index`]: Display indexes and record selectors
//! - [`media`]: Media library and image intake
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod index;
pub mod media;
pub mod model;
pub mod slug;
pub mod store;
