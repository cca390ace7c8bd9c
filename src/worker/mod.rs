//! Worker communication module.
//!
//! The catalog itself is reached through a long-running worker process.
//! This crate stays protocol-agnostic: it encodes translated queries as
//! JSON parameters and the worker speaks the catalog's wire protocol.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    QueryExecutor (blocking)                     │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │          WorkerTransport (current-thread runtime)         │  │
//! │  │  ┌─────────────────────────────────────────────────────┐  │  │
//! │  │  │  WorkerClient (async)                               │  │  │
//! │  │  │  - Spawns the worker as a child process             │  │  │
//! │  │  │  - NDJSON protocol over stdin/stdout                │  │  │
//! │  │  │  - Request IDs for response correlation             │  │  │
//! │  │  └─────────────────────────────────────────────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                              │                                  │
//! │               stdin (NDJSON) │ stdout (NDJSON)                  │
//! │                              ▼                                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │            Catalog Worker (Long-Running Child Process)          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use genquery::worker::WorkerTransport;
//! use genquery::executor::QueryExecutor;
//!
//! let settings = Settings::load()?;
//! let mut executor = QueryExecutor::new(WorkerTransport::spawn(&settings)?);
//! let page = executor.execute(&query, settings.page_request())?;
//! ```

mod blocking;
mod client;
mod error;
pub mod protocol;

pub use blocking::WorkerTransport;
pub use client::WorkerClient;
pub use error::{WorkerError, WorkerResult};
