//! Toolbar affordances
//!
//! None of the actions are wired to grid behaviour; activating one only
//! records it in the log and the status bar.

/// An action offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    ToolBar,
    HideFields,
    Sort,
    Filter,
    CellView,
    FinancialOverview,
    Import,
    Export,
    Share,
    NewAction,
}

/// Which end of the toolbar a button sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarSide {
    Left,
    Right,
}

/// Visual treatment of a toolbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarStyle {
    /// Plain text label
    Label,
    /// Text button
    Link,
    /// Highlighted pill
    Badge,
    /// Bordered button
    Outlined,
    /// Filled call-to-action button
    Primary,
}

/// A toolbar entry definition
#[derive(Debug, Clone)]
pub struct ToolbarItem {
    pub action: ToolbarAction,
    pub label: &'static str,
    pub side: ToolbarSide,
    pub style: ToolbarStyle,
}

/// Static registry of toolbar entries, in display order per side
pub static TOOLBAR_ITEMS: &[ToolbarItem] = &[
    ToolbarItem {
        action: ToolbarAction::ToolBar,
        label: "Tool bar",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Label,
    },
    ToolbarItem {
        action: ToolbarAction::HideFields,
        label: "Hide fields",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Link,
    },
    ToolbarItem {
        action: ToolbarAction::Sort,
        label: "Sort",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Link,
    },
    ToolbarItem {
        action: ToolbarAction::Filter,
        label: "Filter",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Link,
    },
    ToolbarItem {
        action: ToolbarAction::CellView,
        label: "Cell view",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Link,
    },
    ToolbarItem {
        action: ToolbarAction::FinancialOverview,
        label: "Q3 Financial Overview",
        side: ToolbarSide::Left,
        style: ToolbarStyle::Badge,
    },
    ToolbarItem {
        action: ToolbarAction::Import,
        label: "Import",
        side: ToolbarSide::Right,
        style: ToolbarStyle::Outlined,
    },
    ToolbarItem {
        action: ToolbarAction::Export,
        label: "Export",
        side: ToolbarSide::Right,
        style: ToolbarStyle::Outlined,
    },
    ToolbarItem {
        action: ToolbarAction::Share,
        label: "Share",
        side: ToolbarSide::Right,
        style: ToolbarStyle::Outlined,
    },
    ToolbarItem {
        action: ToolbarAction::NewAction,
        label: "New Action",
        side: ToolbarSide::Right,
        style: ToolbarStyle::Primary,
    },
];

impl ToolbarAction {
    /// Registry entry for this action
    pub fn item(self) -> &'static ToolbarItem {
        TOOLBAR_ITEMS
            .iter()
            .find(|item| item.action == self)
            .unwrap_or(&TOOLBAR_ITEMS[0])
    }

    pub fn label(self) -> &'static str {
        self.item().label
    }
}
