//! # Command Layer
//!
//! This module contains the **core business logic** of notez. Each operation lives in its
//! own submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Shape of a Command
//!
//! Every command follows the same read-modify-write pattern:
//!
//! 1. Validate inputs that need no state (empty fields).
//! 2. Load the full collection fresh from the store.
//! 3. Check existence and uniqueness against that snapshot.
//! 4. Mutate the snapshot and save it back in full.
//!
//! Nothing is cached between calls, so a failed save leaves the previously persisted
//! collection authoritative: the next call simply reloads it.
//!
//! Commands do not lock. Callers that may run concurrently must serialize calls
//! (see [`crate::api::SharedNotesApi`]).
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch; this is where most of the
//! testing lives.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note, assigning the next id
//! - [`get`]: List all notes, look one up by id or title
//! - [`update`]: Change title and/or content
//! - [`delete`]: Remove a note

pub mod create;
pub mod delete;
pub mod get;
pub mod update;
