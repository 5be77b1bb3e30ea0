//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridpad::config::GridConfig;
use gridpad::grid::{starter_grid, CellPosition, ColumnSpec, GridData, GridState, Row};
use gridpad::messages::{GridMsg, InputMsg, Msg};
use gridpad::model::AppModel;
use gridpad::update::update;

/// Create a test model showing the starter grid in an 800x600 window
pub fn test_model() -> AppModel {
    AppModel::new(800, 600, GridConfig::default())
}

/// Create a test model with the read-only row-number column
pub fn test_model_with_row_numbers() -> AppModel {
    let config = GridConfig {
        row_numbers: true,
        ..GridConfig::default()
    };
    AppModel::new(800, 600, config)
}

/// Bare grid state around the starter grid
pub fn starter_state() -> GridState {
    GridState::new(starter_grid())
}

/// Build a grid from column ids (label = id) and rows of values
pub fn grid_from(ids: &[&str], rows: &[&[&str]]) -> GridData {
    let specs = ids.iter().map(|id| ColumnSpec::new(*id, *id)).collect();
    let rows = rows
        .iter()
        .map(|values| {
            ids.iter()
                .zip(values.iter())
                .map(|(id, v)| (id.to_string(), v.to_string()))
                .collect::<Row>()
        })
        .collect();
    GridData::from_parts(specs, rows)
}

pub fn pos(row: usize, col: usize) -> CellPosition {
    CellPosition::new(row, col)
}

/// Send a cell click through the update loop
pub fn click(model: &mut AppModel, row: usize, col: usize) {
    update(model, Msg::Grid(GridMsg::CellClicked { row, col }));
}

/// Type text into the edit input one character at a time
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Input(InputMsg::InsertChar(ch)));
    }
}

/// Clear the edit input with backspaces
pub fn clear_input(model: &mut AppModel) {
    update(model, Msg::Input(InputMsg::CursorEnd));
    while !model.ui.cell_input.text().is_empty() {
        update(model, Msg::Input(InputMsg::DeleteBackward));
    }
}
