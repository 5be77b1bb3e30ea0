//! Window layout and hit-testing
//!
//! Pure geometry computed from the model on demand, shared by the renderer
//! (where to draw) and the runtime (what was clicked). All coordinates are
//! physical pixels.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Spreadsheet                                  │ title
//! │ Tool bar  Hide fields ...   Import ... [New] │ toolbar
//! │ ┌──────────┬──────────┬─────┬───┐            │
//! │ │ Header   │ Header   │ ... │ + │            │ header (scrolls with x only)
//! │ ├──────────┼──────────┼─────┼───┘            │
//! │ │ cell     │ cell     │ ... │                │ body
//! │ └──────────┴──────────┴─────┘                │
//! ├──────────────────────────────────────────────┤
//! │ EDIT                          R1 · Job  5×9  │ status bar
//! └──────────────────────────────────────────────┘
//! ```

use crate::grid::CellPosition;
use crate::model::{AppModel, GridViewport};
use crate::toolbar::{ToolbarAction, ToolbarSide, TOOLBAR_ITEMS};

/// Outer margin around the page content
pub const PAGE_PADDING: f32 = 16.0;
/// Horizontal padding inside cells and buttons
pub const CELL_PADDING_X: f32 = 8.0;
/// Extra height added to a text line for header and body rows
pub const ROW_PADDING_Y: f32 = 8.0;
/// Width of the read-only row-number column in characters
const ROW_NUMBER_CHARS: usize = 4;
/// Width of the add-column affordance in characters
const ADD_COLUMN_CHARS: usize = 3;
const TOOLBAR_GAP: f32 = 12.0;
const SECTION_GAP: f32 = 12.0;

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// What lies under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A body cell
    Cell { row: usize, col: usize },
    /// A column header
    HeaderCell { col: usize },
    /// The trailing "+" in the header row
    AddColumn,
    Toolbar(ToolbarAction),
    /// Inside the grid frame but not on a cell
    GridEmpty,
    StatusBar,
    /// Page background
    None,
}

/// A positioned toolbar entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub rect: Rect,
}

/// Geometry of the whole window for one model state
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub title: Rect,
    pub toolbar: Vec<ToolbarButton>,
    /// Frame holding the header row and body; everything grid-related clips to it
    pub grid_area: Rect,
    pub header_height: f32,
    pub row_height: f32,
    /// Left edge of each column in content space (before scrolling)
    pub column_offsets: Vec<f32>,
    pub column_widths: Vec<f32>,
    pub add_column_width: f32,
    pub row_count: usize,
    /// Scroll offset, already clamped to the content
    pub viewport: GridViewport,
    pub status_bar: Rect,
}

impl GridLayout {
    /// Lay out the window for the current model
    pub fn compute(model: &AppModel) -> Self {
        let (win_w, win_h) = (model.window_size.0 as f32, model.window_size.1 as f32);
        let char_width = model.char_width.max(1.0);
        let line_height = model.line_height.max(1) as f32;

        let title = Rect::new(PAGE_PADDING, PAGE_PADDING, (win_w - 2.0 * PAGE_PADDING).max(0.0), line_height + 12.0);

        let toolbar_y = title.bottom() + SECTION_GAP / 2.0;
        let toolbar_h = line_height + 12.0;
        let toolbar = layout_toolbar(toolbar_y, toolbar_h, win_w, char_width);

        let status_h = line_height + 6.0;
        let status_bar = Rect::new(0.0, (win_h - status_h).max(0.0), win_w, status_h);

        let grid_y = toolbar_y + toolbar_h + SECTION_GAP;
        let grid_area = Rect::new(
            PAGE_PADDING,
            grid_y,
            (win_w - 2.0 * PAGE_PADDING).max(0.0),
            (status_bar.y - SECTION_GAP / 2.0 - grid_y).max(0.0),
        );

        let data_width = model.config.column_width as f32 * char_width + 2.0 * CELL_PADDING_X;
        let narrow_width = ROW_NUMBER_CHARS as f32 * char_width + 2.0 * CELL_PADDING_X;

        let mut column_offsets = Vec::with_capacity(model.grid.data.column_count());
        let mut column_widths = Vec::with_capacity(model.grid.data.column_count());
        let mut x = 0.0;
        for column in model.grid.data.columns() {
            let width = if column.is_editable() {
                data_width
            } else {
                narrow_width
            };
            column_offsets.push(x);
            column_widths.push(width);
            x += width;
        }

        let mut layout = Self {
            title,
            toolbar,
            grid_area,
            header_height: line_height + ROW_PADDING_Y,
            row_height: line_height + ROW_PADDING_Y,
            column_offsets,
            column_widths,
            add_column_width: ADD_COLUMN_CHARS as f32 * char_width + 2.0 * CELL_PADDING_X,
            row_count: model.grid.data.row_count(),
            viewport: GridViewport::default(),
            status_bar,
        };
        layout.viewport = layout.clamp_viewport(model.ui.viewport);
        layout
    }

    /// Width of all columns plus the add-column affordance
    pub fn content_width(&self) -> f32 {
        self.column_widths.iter().sum::<f32>() + self.add_column_width
    }

    /// Height of all body rows
    pub fn content_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// Visible body area below the header row
    pub fn body_rect(&self) -> Rect {
        Rect::new(
            self.grid_area.x,
            self.grid_area.y + self.header_height,
            self.grid_area.width,
            (self.grid_area.height - self.header_height).max(0.0),
        )
    }

    /// Largest scroll offsets that still keep content in view
    pub fn max_scroll(&self) -> (f32, f32) {
        (
            (self.content_width() - self.grid_area.width).max(0.0),
            (self.content_height() - self.body_rect().height).max(0.0),
        )
    }

    pub fn clamp_viewport(&self, viewport: GridViewport) -> GridViewport {
        let (max_x, max_y) = self.max_scroll();
        GridViewport {
            scroll_x: viewport.scroll_x.clamp(0.0, max_x),
            scroll_y: viewport.scroll_y.clamp(0.0, max_y),
        }
    }

    /// Screen x of a column's left edge
    pub fn column_x(&self, col: usize) -> Option<f32> {
        self.column_offsets
            .get(col)
            .map(|offset| self.grid_area.x + offset - self.viewport.scroll_x)
    }

    pub fn header_rect(&self, col: usize) -> Option<Rect> {
        let x = self.column_x(col)?;
        Some(Rect::new(
            x,
            self.grid_area.y,
            self.column_widths[col],
            self.header_height,
        ))
    }

    pub fn add_column_rect(&self) -> Rect {
        let x = self.grid_area.x + self.column_widths.iter().sum::<f32>() - self.viewport.scroll_x;
        Rect::new(x, self.grid_area.y, self.add_column_width, self.header_height)
    }

    /// Screen rectangle of a body cell (may lie outside the visible area)
    pub fn cell_rect(&self, pos: CellPosition) -> Option<Rect> {
        if pos.row >= self.row_count {
            return None;
        }
        let x = self.column_x(pos.col)?;
        let y = self.body_rect().y + pos.row as f32 * self.row_height - self.viewport.scroll_y;
        Some(Rect::new(x, y, self.column_widths[pos.col], self.row_height))
    }

    /// Column under a screen x coordinate
    fn column_at(&self, x: f32) -> Option<usize> {
        let content_x = x - self.grid_area.x + self.viewport.scroll_x;
        self.column_offsets
            .iter()
            .zip(&self.column_widths)
            .position(|(offset, width)| content_x >= *offset && content_x < offset + width)
    }

    /// Find the highest-priority target at a point
    pub fn hit_test(&self, x: f32, y: f32) -> HitTarget {
        if self.status_bar.contains(x, y) {
            return HitTarget::StatusBar;
        }

        if let Some(button) = self.toolbar.iter().find(|b| b.rect.contains(x, y)) {
            return HitTarget::Toolbar(button.action);
        }

        if !self.grid_area.contains(x, y) {
            return HitTarget::None;
        }

        if y < self.grid_area.y + self.header_height {
            if self.add_column_rect().contains(x, y) {
                return HitTarget::AddColumn;
            }
            return match self.column_at(x) {
                Some(col) => HitTarget::HeaderCell { col },
                None => HitTarget::GridEmpty,
            };
        }

        let body = self.body_rect();
        let row = ((y - body.y + self.viewport.scroll_y) / self.row_height).floor();
        if row < 0.0 || row as usize >= self.row_count {
            return HitTarget::GridEmpty;
        }
        match self.column_at(x) {
            Some(col) => HitTarget::Cell {
                row: row as usize,
                col,
            },
            None => HitTarget::GridEmpty,
        }
    }

    /// Viewport that makes a cell fully visible, moving as little as possible
    pub fn scroll_to_reveal(&self, pos: CellPosition) -> GridViewport {
        let mut viewport = self.viewport;

        if let (Some(left), Some(width)) = (
            self.column_offsets.get(pos.col),
            self.column_widths.get(pos.col),
        ) {
            let visible = self.grid_area.width;
            if *left < viewport.scroll_x {
                viewport.scroll_x = *left;
            } else if left + width > viewport.scroll_x + visible {
                viewport.scroll_x = left + width - visible;
            }
        }

        if pos.row < self.row_count {
            let top = pos.row as f32 * self.row_height;
            let visible = self.body_rect().height;
            if top < viewport.scroll_y {
                viewport.scroll_y = top;
            } else if top + self.row_height > viewport.scroll_y + visible {
                viewport.scroll_y = top + self.row_height - visible;
            }
        }

        self.clamp_viewport(viewport)
    }
}

/// Place toolbar buttons: left items from the left margin, right items
/// packed against the right margin without overlapping the left group
fn layout_toolbar(y: f32, height: f32, win_w: f32, char_width: f32) -> Vec<ToolbarButton> {
    let width_of = |label: &str| label.chars().count() as f32 * char_width + 2.0 * CELL_PADDING_X;

    let mut buttons = Vec::with_capacity(TOOLBAR_ITEMS.len());
    let mut x = PAGE_PADDING;
    for item in TOOLBAR_ITEMS.iter().filter(|i| i.side == ToolbarSide::Left) {
        let width = width_of(item.label);
        buttons.push(ToolbarButton {
            action: item.action,
            rect: Rect::new(x, y, width, height),
        });
        x += width + TOOLBAR_GAP;
    }

    let right_items: Vec<_> = TOOLBAR_ITEMS
        .iter()
        .filter(|i| i.side == ToolbarSide::Right)
        .collect();
    let right_total: f32 = right_items.iter().map(|i| width_of(i.label)).sum::<f32>()
        + TOOLBAR_GAP * right_items.len().saturating_sub(1) as f32;
    let mut x = (win_w - PAGE_PADDING - right_total).max(x);
    for item in right_items {
        let width = width_of(item.label);
        buttons.push(ToolbarButton {
            action: item.action,
            rect: Rect::new(x, y, width, height),
        });
        x += width + TOOLBAR_GAP;
    }

    buttons
}
