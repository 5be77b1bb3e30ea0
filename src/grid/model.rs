//! Grid data model
//!
//! Columns are an ordered list of definitions; each row maps column id to text.

use std::collections::{HashMap, HashSet};

/// Id of the synthetic row-number column
pub const ROW_INDEX_COLUMN_ID: &str = "index";

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rejected grid access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index outside the current bounds
    OutOfRange { row: usize, col: usize },
    /// Column id not present in the model
    UnknownColumn(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfRange { row, col } => {
                write!(f, "cell ({}, {}) is out of range", row, col)
            }
            GridError::UnknownColumn(id) => write!(f, "unknown column '{}'", id),
        }
    }
}

impl std::error::Error for GridError {}

/// One field of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: String,
    pub label: String,
    position: usize,
    editable: bool,
}

impl Column {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }
}

/// Column definition used when building a grid
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub id: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A row of text values keyed by column id
pub type Row = HashMap<String, String>;

/// Column definitions plus row data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridData {
    columns: Vec<Column>,
    rows: Vec<Row>,
    /// Next suffix for generated column ids. Only ever grows.
    next_column_seq: usize,
}

impl GridData {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from column specs and rows
    ///
    /// Duplicate column ids keep their first occurrence. Rows are normalized so
    /// every row holds a value for every column; keys that name no column are dropped.
    pub fn from_parts(specs: Vec<ColumnSpec>, rows: Vec<Row>) -> Self {
        let mut seen = HashSet::new();
        let columns: Vec<Column> = specs
            .into_iter()
            .filter(|spec| seen.insert(spec.id.clone()))
            .enumerate()
            .map(|(position, spec)| Column {
                id: spec.id,
                label: spec.label,
                position,
                editable: true,
            })
            .collect();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                let mut normalized = Row::with_capacity(columns.len());
                for column in &columns {
                    let value = row.remove(&column.id).unwrap_or_default();
                    normalized.insert(column.id.clone(), value);
                }
                normalized
            })
            .collect();

        let next_column_seq = columns.len();
        Self {
            columns,
            rows,
            next_column_seq,
        }
    }

    /// Prepend the read-only row-number column (values "1".."N")
    ///
    /// Does nothing if the column already exists.
    pub fn with_row_numbers(mut self) -> Self {
        if self.column_index(ROW_INDEX_COLUMN_ID).is_some() {
            return self;
        }

        for column in &mut self.columns {
            column.position += 1;
        }
        self.columns.insert(
            0,
            Column {
                id: ROW_INDEX_COLUMN_ID.to_string(),
                label: "#".to_string(),
                position: 0,
                editable: false,
            },
        );
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.insert(ROW_INDEX_COLUMN_ID.to_string(), (i + 1).to_string());
        }
        self.next_column_seq = self.next_column_seq.max(self.columns.len());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns in left-to-right order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_id_at(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.id.as_str())
    }

    /// Find the position of a column by id
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Check that a coordinate is inside the current bounds
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.rows.len() && pos.col < self.columns.len()
    }

    /// Get cell value by row and column id
    ///
    /// Missing values read as the empty string.
    pub fn value(&self, row: usize, column_id: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column_id))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Get cell value at a grid coordinate
    pub fn value_at(&self, pos: CellPosition) -> &str {
        match self.column_id_at(pos.col) {
            Some(id) => self.value(pos.row, id),
            None => "",
        }
    }

    /// Overwrite a cell value
    ///
    /// Returns `Ok(false)` without writing when the column is read-only.
    pub fn set_value(&mut self, row: usize, column_id: &str, text: &str) -> Result<bool, GridError> {
        let col = self
            .column_index(column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_string()))?;

        if row >= self.rows.len() {
            return Err(GridError::OutOfRange { row, col });
        }

        if !self.columns[col].editable {
            return Ok(false);
        }

        let cell = self.rows[row].entry(column_id.to_string()).or_default();
        cell.clear();
        cell.push_str(text);
        Ok(true)
    }

    /// Append a column and backfill every row with an empty value
    ///
    /// Returns the generated column id.
    pub fn append_column(&mut self, label: &str) -> String {
        let id = loop {
            self.next_column_seq += 1;
            let candidate = format!("column_{}", self.next_column_seq);
            if self.column_index(&candidate).is_none() {
                break candidate;
            }
        };

        self.columns.push(Column {
            id: id.clone(),
            label: label.to_string(),
            position: self.columns.len(),
            editable: true,
        });
        for row in &mut self.rows {
            row.insert(id.clone(), String::new());
        }

        id
    }
}
