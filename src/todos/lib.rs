//! # Todos
//!
//! A small to-do list kept in a single JSON document. The crate is a library
//! with a thin CLI client on top.
//!
//! ```text
//! cli/ (binary only)  parse args, prompt, print tables
//!        │
//!        ▼
//! api.rs              facade: parse references, dispatch
//!        │
//!        ▼
//! commands/*.rs       load, mutate, save; return CmdResult
//!        │
//!        ▼
//! store/              TodoStore trait: FileStore, InMemoryStore
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr, and nothing exits
//! the process.
//!
//! ## Identity
//!
//! Each to-do gets an id when it is created and keeps it. Commands such as
//! `do` and `undo` address to-dos by id, and an unknown id is an ordinary
//! [`error::TodoError::TodoNotFound`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Todo` and `TodoList`
//! - [`config`]: Storage locations and status labels
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
