//! # Doable Architecture
//!
//! Doable is a **UI-agnostic task-tracking library** with a CLI client. The
//! interesting parts live in the core: a small document store with a
//! Mongo-style query matcher, and the status derivation logic that turns a
//! task into plain presentation values (deadline string, color and symbol
//! tokens, script-resolved flag).
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders output, maps tokens to colors  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, query, status, store/)                        │
//! │  - TodoItem record type and the closed query grammar        │
//! │  - StatusDeriver: pure functions over a task                │
//! │  - TodoStore trait: FileStore (prod), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never calls
//! `std::process::exit`. Status derivation returns semantic tokens
//! ([`status::ColorToken`], [`status::SymbolToken`]) and plain strings; ANSI
//! escapes exist only in the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`TodoItem`, `TodoStatus`, `TodoDraft`)
//! - [`query`]: The closed filter grammar and matcher
//! - [`status`]: Deadline parsing, script detection, display tokens
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod query;
pub mod status;
pub mod store;
