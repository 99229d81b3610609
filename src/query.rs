//! PostgREST query builder.
//!
//! Filters, ordering and limits are expressed as query-string pairs the way
//! PostgREST expects them (`name=eq.Pikachu`, `order=rarity.desc`). Builder
//! methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use poketrade::query::{Direction, Query};
//! let (table, params) = Query::new("pokemon_cards")
//!     .where_eq("type", "Electric")
//!     .order("rarity", Direction::Desc)
//!     .limit(10)
//!     .build();
//! assert_eq!(table, "pokemon_cards");
//! assert_eq!(params[0], ("select".to_string(), "*".to_string()));
//! ```

use std::fmt;

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

/// A read query against one table of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    select_cols: Vec<String>,
    filters: Vec<(String, String)>,
    order_cols: Vec<(String, Direction)>,
    limit_val: Option<usize>,
}

impl Query {
    /// Create a query selecting every column of `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select_cols: vec!["*".to_string()],
            filters: Vec::new(),
            order_cols: Vec::new(),
            limit_val: None,
        }
    }

    /// Table this query reads from.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Set the columns to select (replaces the default `*`).
    ///
    /// Embedded resources use PostgREST syntax, e.g. `"pokemon_cards(*)"`.
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add an equality filter: `{column}=eq.{value}`.
    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Add an ORDER BY column. Multiple calls sort by each column in turn.
    pub fn order(&mut self, column: &str, direction: Direction) -> &mut Self {
        self.order_cols.push((column.to_string(), direction));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the target table and the ordered query-string pairs.
    pub fn build(&self) -> (String, Vec<(String, String)>) {
        let mut params = vec![("select".to_string(), self.select_cols.join(","))];

        params.extend(self.filters.iter().cloned());

        if !self.order_cols.is_empty() {
            let order = self
                .order_cols
                .iter()
                .map(|(col, dir)| format!("{}.{}", col, dir))
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }

        if let Some(n) = self.limit_val {
            params.push(("limit".to_string(), n.to_string()));
        }

        (self.table.clone(), params)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (table, params) = self.build();
        let qs = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "{}?{}", table, qs)
    }
}
