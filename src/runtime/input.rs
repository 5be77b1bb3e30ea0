//! Keyboard input handling
//!
//! Maps winit keys to grid messages:
//! - Arrow keys always move the active cell (and leave edit mode)
//! - Enter and Escape close the edit input
//! - Typing, Backspace/Delete and Home/End edit the input while editing
//! - Ctrl+Q / Cmd+Q quits

use winit::keyboard::{Key, NamedKey};

use gridpad::commands::Cmd;
use gridpad::grid::{CommitReason, NavKey};
use gridpad::messages::{AppMsg, GridMsg, InputMsg, Msg};
use gridpad::model::AppModel;
use gridpad::update::update;

/// Translate a key press into a message for the current state
pub fn key_to_msg(key: &Key, ctrl: bool, logo: bool, is_editing: bool) -> Option<Msg> {
    let command = ctrl || logo;

    match key {
        Key::Character(s) if command && s.eq_ignore_ascii_case("q") => Some(Msg::App(AppMsg::Quit)),

        Key::Named(NamedKey::ArrowUp) => Some(Msg::Grid(GridMsg::Key(NavKey::ArrowUp))),
        Key::Named(NamedKey::ArrowDown) => Some(Msg::Grid(GridMsg::Key(NavKey::ArrowDown))),
        Key::Named(NamedKey::ArrowLeft) => Some(Msg::Grid(GridMsg::Key(NavKey::ArrowLeft))),
        Key::Named(NamedKey::ArrowRight) => Some(Msg::Grid(GridMsg::Key(NavKey::ArrowRight))),

        Key::Named(NamedKey::Enter) => Some(Msg::Grid(GridMsg::Commit(CommitReason::EnterKey))),
        Key::Named(NamedKey::Escape) => {
            Some(Msg::Grid(GridMsg::Commit(CommitReason::EscapeKey)))
        }

        // Everything below edits the input
        _ if !is_editing || command => None,

        Key::Named(NamedKey::Backspace) => Some(Msg::Input(InputMsg::DeleteBackward)),
        Key::Named(NamedKey::Delete) => Some(Msg::Input(InputMsg::DeleteForward)),
        Key::Named(NamedKey::Home) => Some(Msg::Input(InputMsg::CursorHome)),
        Key::Named(NamedKey::End) => Some(Msg::Input(InputMsg::CursorEnd)),
        Key::Named(NamedKey::Space) => Some(Msg::Input(InputMsg::InsertChar(' '))),
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Msg::Input(InputMsg::InsertChar(ch))),
                (Some(_), Some(_)) => Some(Msg::Input(InputMsg::InsertText(s.to_string()))),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Handle a key press against the model
pub fn handle_key(model: &mut AppModel, key: Key, ctrl: bool, logo: bool) -> Option<Cmd> {
    let msg = key_to_msg(&key, ctrl, logo, model.grid.is_editing())?;
    update(model, msg)
}
