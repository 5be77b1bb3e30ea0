//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the window
    Redraw,
    /// Close the window and exit
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }

    /// Check if this command asks the app to exit
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
    }

    #[test]
    fn test_is_quit() {
        assert!(Cmd::Quit.is_quit());
        assert!(!Cmd::Redraw.is_quit());
        assert!(!Cmd::None.is_quit());
    }
}
