//! Resolved select and order-by fields.

use std::fmt;

use serde::Serialize;

use crate::catalog::{CatalogField, FieldCode};

/// Where a field's wire code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    CatalogField,
    ExtensibleMetadata,
    Avu,
    Unknown,
}

/// Aggregate function wrapped around a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Plain column value.
    #[default]
    Field,
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl Aggregation {
    /// Classify the text before `(` in a select token.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.trim().to_ascii_uppercase().as_str() {
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "COUNT" => Some(Self::Count),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            _ => None,
        }
    }

    /// Function code sent alongside the column code.
    pub fn wire_code(self) -> u32 {
        match self {
            Self::Field => 1,
            Self::Min => 2,
            Self::Max => 3,
            Self::Sum => 4,
            Self::Avg => 5,
            Self::Count => 6,
        }
    }

}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Field => "FIELD",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::Min => "MIN",
            Self::Max => "MAX",
        };
        f.write_str(s)
    }
}

/// A select field with its wire code and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    column_name: String,
    code: FieldCode,
    source: FieldSource,
    aggregation: Aggregation,
}

impl FieldDescriptor {
    pub fn new(
        column_name: impl Into<String>,
        code: FieldCode,
        source: FieldSource,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            code,
            source,
            aggregation,
        }
    }

    /// Select of a catalog column, wrapped in `aggregation` unless it is
    /// [`Aggregation::Field`].
    pub fn from_catalog(field: &CatalogField, aggregation: Aggregation) -> Self {
        Self::new(field.name(), field.code(), FieldSource::CatalogField, aggregation)
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn code(&self) -> FieldCode {
        self.code
    }

    pub fn source(&self) -> FieldSource {
        self.source
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.aggregation {
            Aggregation::Field => write!(f, "{}", self.column_name),
            agg => write!(f, "{}({})", agg, self.column_name),
        }
    }
}

/// Sort direction for an order-by entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Order-by flag OR'd into the column's wire options.
    pub fn wire_flag(self) -> u32 {
        match self {
            Self::Asc => 0x400,
            Self::Desc => 0x800,
        }
    }
}

/// An order-by entry: a previously selected field plus a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderByDescriptor {
    field: FieldDescriptor,
    dir: SortDir,
}

impl OrderByDescriptor {
    pub fn new(field: FieldDescriptor, dir: SortDir) -> Self {
        Self { field, dir }
    }

    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    pub fn dir(&self) -> SortDir {
        self.dir
    }
}
