//! Dataframe column typing
//!
//! Schema generation only needs the ordered list of column names and the
//! storage kind of each column's dtype. Anything that can produce that list
//! implements [`DataFrameLike`]; [`ColumnTypes`] is the in-crate carrier used
//! by the CLI and the tests.
//!
//! Column documents look like:
//!
//! ```text
//! {"columns": [{"name": "n", "dtype": "int64"}, {"name": "s", "dtype": "O"}]}
//! ```

mod dtype;
mod errors;

pub use dtype::DTypeKind;
pub use errors::{FrameError, FrameResult};

use serde::Deserialize;

/// An ordered mapping of column name to dtype kind
pub trait DataFrameLike {
    /// Column names and dtype kinds, in column order
    fn dtypes(&self) -> Vec<(&str, DTypeKind)>;
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: DTypeKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: DTypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered column dtypes of a dataframe.
///
/// Duplicate names are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypes {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct ColumnsDocument {
    columns: Vec<ColumnEntry>,
}

#[derive(Deserialize)]
struct ColumnEntry {
    name: String,
    dtype: String,
}

impl ColumnTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column
    pub fn push(&mut self, name: impl Into<String>, kind: DTypeKind) {
        self.columns.push(Column::new(name, kind));
    }

    /// Builder form of [`push`](Self::push)
    pub fn with_column(mut self, name: impl Into<String>, kind: DTypeKind) -> Self {
        self.push(name, kind);
        self
    }

    /// Parses a `{"columns": [{"name", "dtype"}]}` document.
    ///
    /// `dtype` may be a dtype name (`int64`) or a kind code (`i`).
    pub fn from_json(input: &str) -> FrameResult<Self> {
        let doc: ColumnsDocument = serde_json::from_str(input)?;
        let columns = doc
            .columns
            .into_iter()
            .map(|entry| {
                let kind = DTypeKind::from_dtype_name(&entry.dtype)?;
                Ok(Column::new(entry.name, kind))
            })
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl DataFrameLike for ColumnTypes {
    fn dtypes(&self) -> Vec<(&str, DTypeKind)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.kind))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, DTypeKind)> for ColumnTypes {
    fn from_iter<I: IntoIterator<Item = (S, DTypeKind)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, kind)| Column::new(name, kind))
                .collect(),
        }
    }
}
