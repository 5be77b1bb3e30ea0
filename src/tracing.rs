//! Tracing setup and selection diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gridpad::update=debug` - state transitions only
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridpad/logs/gridpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::{CellPosition, GridState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/gridpad/logs/gridpad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gridpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of grid selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub active: Option<CellPosition>,
    pub editing: Option<CellPosition>,
    pub row_count: usize,
    pub column_count: usize,
}

fn describe(pos: Option<CellPosition>) -> String {
    match pos {
        Some(p) => format!("({},{})", p.row, p.col),
        None => "none".to_string(),
    }
}

impl SelectionSnapshot {
    pub fn from_grid(grid: &GridState) -> Self {
        Self {
            active: grid.active(),
            editing: grid.editing(),
            row_count: grid.data.row_count(),
            column_count: grid.data.column_count(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.active != other.active {
            changes.push(format!(
                "active: {} → {}",
                describe(self.active),
                describe(other.active)
            ));
        }
        if self.editing != other.editing {
            changes.push(format!(
                "editing: {} → {}",
                describe(self.editing),
                describe(other.editing)
            ));
        }
        if self.row_count != other.row_count {
            changes.push(format!("rows: {} → {}", self.row_count, other.row_count));
        }
        if self.column_count != other.column_count {
            changes.push(format!(
                "columns: {} → {}",
                self.column_count, other.column_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{starter_grid, ColumnSpec, GridData, Row};

    #[test]
    fn test_snapshot_diff() {
        let mut grid = GridState::new(starter_grid());
        let before = SelectionSnapshot::from_grid(&grid);
        assert_eq!(before.diff(&before), None);

        grid.on_cell_click(1, 2).unwrap();
        let after = SelectionSnapshot::from_grid(&grid);

        assert_eq!(
            before.diff(&after).as_deref(),
            Some("active: none → (1,2); editing: none → (1,2)")
        );
    }

    #[test]
    fn test_snapshot_diff_reports_shape_changes() {
        let mut grid = GridState::new(starter_grid());
        let before = SelectionSnapshot::from_grid(&grid);

        grid.data = GridData::from_parts(vec![ColumnSpec::new("a", "A")], vec![Row::new()]);
        let after = SelectionSnapshot::from_grid(&grid);

        assert_eq!(
            before.diff(&after).as_deref(),
            Some("rows: 5 → 1; columns: 9 → 1")
        );
    }
}
