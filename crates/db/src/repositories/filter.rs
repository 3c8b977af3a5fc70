//! Equality-filter builder for list queries.
//!
//! List endpoints accept optional filters that each become a
//! `column = $n` predicate, ANDed together. Absent and empty values are
//! skipped. Values are collected in placeholder order and bound afterwards.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use vedic_core::types::DbId;

/// A single bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Id(DbId),
    Text(String),
}

/// Accumulated `WHERE` predicates and their bind values.
#[derive(Debug, Default)]
pub struct EqFilters {
    clauses: Vec<String>,
    values: Vec<FilterValue>,
}

impl EqFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column = $n` for an id filter when present.
    pub fn id(mut self, column: &str, value: Option<DbId>) -> Self {
        if let Some(id) = value {
            self.push(column, FilterValue::Id(id));
        }
        self
    }

    /// Add `column = $n` for a text filter when present and non-empty.
    pub fn text(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(text) = value.filter(|t| !t.is_empty()) {
            self.push(column, FilterValue::Text(text.to_string()));
        }
        self
    }

    fn push(&mut self, column: &str, value: FilterValue) {
        self.values.push(value);
        self.clauses.push(format!("{column} = ${}", self.values.len()));
    }

    /// Number of predicates collected.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the `WHERE ...` clause, or an empty string when unfiltered.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Bind every collected value, in placeholder order.
    pub fn bind<'q, O>(
        self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for value in self.values {
            query = match value {
                FilterValue::Id(id) => query.bind(id),
                FilterValue::Text(text) => query.bind(text),
            };
        }
        query
    }
}
