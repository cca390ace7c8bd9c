//! Query front ends.
//!
//! Two ways in, one way out:
//!
//! ```text
//!  "SELECT ... WHERE ..."          builder.add_*(...)
//!           │                             │
//!           ▼                             ▼
//!   ┌────────────────┐           ┌────────────────┐
//!   │ QueryTranslator│           │  QueryBuilder  │
//!   │ lexer → parser │           │  (validating)  │
//!   │ → resolver     │           │                │
//!   └───────┬────────┘           └───────┬────────┘
//!           └─────────────┬───────────────┘
//!                         ▼
//!                 TranslatedQuery
//! ```

mod builder;
mod condition;
mod error;
mod field;
pub mod lexer;
pub mod parser;
mod resolver;
mod translated;
mod translator;

pub use builder::QueryBuilder;
pub use condition::{
    is_known_operator, ConditionDescriptor, ConditionOperator, ConditionValue, OPERATORS,
};
pub use error::{BuilderError, BuilderResult, ParseError, ParseErrorKind, ParseResult};
pub use field::{Aggregation, FieldDescriptor, FieldSource, OrderByDescriptor, SortDir};
pub use resolver::{split_aggregate, FieldResolver, ResolvedField};
pub use translated::{QueryOrigin, TranslatedQuery};
pub use translator::{order_by_fields, QueryTranslator, TextQuery};
