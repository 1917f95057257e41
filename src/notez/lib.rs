//! # Notez Architecture
//!
//! Notez is a small note-taking service. The interesting part is the store: it owns a single
//! persisted collection of notes and protects its invariants (unique titles, never-reused ids,
//! non-empty fields) across create/read/update/delete calls. HTTP is a thin adapter on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Parses paths and JSON bodies                             │
//! │  - Maps error kinds to status codes and generic messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - SharedNotesApi: the single in-process critical section   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, uniqueness and existence checks              │
//! │  - Id assignment, timestamps                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: load / save the whole collection   │
//! │  - FsBackend (JSON file), MemBackend (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read-Modify-Write
//!
//! Every operation loads the full collection fresh from the backend, checks and mutates it,
//! and (for writes) saves it back in full. There are no incremental indexes to drift. The
//! price is that the load→save window must not interleave with another call, which is why
//! clients go through [`api::SharedNotesApi`].
//!
//! Only one process may use a given store file. Two processes sharing a file can both
//! assign the same id or accept the same title.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and its shared, locked handle
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NotesDb`, `NoteUpdate`)
//! - [`config`]: Runtime configuration
//! - [`server`]: axum router and handlers
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
