//! Status bar tests
//!
//! The status bar is re-synced after every message, so these drive the
//! public `update()` entry point and read the segments back.

mod common;

use common::{click, test_model};
use gridpad::grid::{CommitReason, NavKey};
use gridpad::messages::{GridMsg, Msg, UiMsg};
use gridpad::model::{SegmentId, SegmentPosition, TransientMessage};
use gridpad::update::update;
use std::time::Duration;

#[test]
fn test_initial_segments() {
    let model = test_model();
    let bar = &model.ui.status_bar;

    assert_eq!(bar.text(SegmentId::Mode), "READY");
    assert_eq!(bar.text(SegmentId::CellPosition), "");
    assert_eq!(bar.text(SegmentId::Dimensions), "5 × 9");
}

#[test]
fn test_mode_follows_selection() {
    let mut model = test_model();

    click(&mut model, 1, 2);
    assert_eq!(model.ui.status_bar.text(SegmentId::Mode), "EDIT");
    assert_eq!(
        model.ui.status_bar.text(SegmentId::CellPosition),
        "R2 · Status"
    );

    update(&mut model, Msg::Grid(GridMsg::Commit(CommitReason::EnterKey)));
    assert_eq!(model.ui.status_bar.text(SegmentId::Mode), "CELL");

    update(&mut model, Msg::Grid(GridMsg::Key(NavKey::ArrowRight)));
    assert_eq!(
        model.ui.status_bar.text(SegmentId::CellPosition),
        "R2 · Submitter"
    );
}

#[test]
fn test_dimensions_update_after_add_column() {
    let mut model = test_model();
    update(&mut model, Msg::Grid(GridMsg::AddColumn));

    assert_eq!(model.ui.status_bar.text(SegmentId::Dimensions), "5 × 10");
    assert_eq!(
        model.ui.status_bar.text(SegmentId::StatusMessage),
        "Added column Column 10"
    );
}

#[test]
fn test_expired_message_cleared_on_tick() {
    let mut model = test_model();
    model.ui.transient_message = Some(TransientMessage::new("old", Duration::from_secs(0)));

    update(&mut model, Msg::Ui(UiMsg::Tick));

    assert!(model.ui.transient_message.is_none());
    assert_eq!(model.ui.status_bar.side_text(SegmentPosition::Left), "READY");
}
