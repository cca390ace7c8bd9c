//! # GenQuery
//!
//! Translate GenQuery-style catalog queries and page through their results.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │   "SELECT DATA_NAME WHERE COLL_NAME = '/zone/home'"      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query::QueryTranslator]  or  [query::QueryBuilder]
//! ┌─────────────────────────────────────────────────────────┐
//! │     TranslatedQuery (column codes, conditions, flags)    │
//! │     resolved against a catalog::CatalogSymbolTable       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [executor::QueryExecutor]
//! ┌─────────────────────────────────────────────────────────┐
//! │     CatalogTransport (worker::WorkerTransport, ...)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │     ResultSet pages of ResultRow, continuation cursor    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod executor;
pub mod query;
pub mod result;
pub mod worker;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{
        columns, CatalogField, CatalogSymbolTable, ExtensibleMetadataMap, FieldCode,
        StaticCatalog,
    };
    pub use crate::config::Settings;
    pub use crate::executor::{
        CatalogTransport, CloseBehavior, ExecuteError, PageRequest, QueryExecutor, RawResponse,
        TransportError,
    };
    pub use crate::query::{
        Aggregation, BuilderError, ConditionOperator, ParseError, ParseErrorKind, QueryBuilder,
        QueryTranslator, SortDir, TextQuery, TranslatedQuery,
    };
    pub use crate::result::{ResultError, ResultRow, ResultSet};
}

pub use catalog::{CatalogSymbolTable, StaticCatalog};
pub use executor::QueryExecutor;
pub use query::{QueryBuilder, QueryTranslator, TextQuery, TranslatedQuery};
pub use result::{ResultRow, ResultSet};
