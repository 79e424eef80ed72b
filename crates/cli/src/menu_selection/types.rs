//! Type definitions for the menu session.

use postinstall_core::menu_definitions::MenuNode;

/// How a menu session ended.
#[derive(Debug)]
pub enum MenuOutcome {
    /// The user backed out of the root; carries the navigated forest.
    Finished(Vec<MenuNode>),
    /// The user pressed Ctrl+C.
    Interrupted,
}

/// State for the UI viewport.
///
/// Tracks the visible window of rows when a section has more entries than
/// fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
}

impl ViewportState {
    /// Rows left for entries once the header and footer lines are drawn.
    pub fn for_terminal_height(terminal_height: u16) -> Self {
        Self {
            offset: 0,
            height: terminal_height.saturating_sub(2).max(1),
        }
    }

    pub fn resize(&mut self, terminal_height: u16) {
        self.height = terminal_height.saturating_sub(2).max(1);
    }

    /// Moves the window the least amount needed to show `cursor`.
    pub fn scroll_to(&mut self, cursor: usize) -> usize {
        let height = usize::from(self.height.max(1));

        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }

        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_terminal_height() {
        assert_eq!(ViewportState::for_terminal_height(24).height, 22);
        assert_eq!(ViewportState::for_terminal_height(1).height, 1);
    }

    #[test]
    fn test_scroll_down_past_window() {
        let mut viewport = ViewportState {
            offset: 0,
            height: 5,
        };
        assert_eq!(viewport.scroll_to(4), 0);
        assert_eq!(viewport.scroll_to(5), 1);
        assert_eq!(viewport.scroll_to(9), 5);
    }

    #[test]
    fn test_scroll_up_past_window() {
        let mut viewport = ViewportState {
            offset: 5,
            height: 5,
        };
        assert_eq!(viewport.scroll_to(7), 5);
        assert_eq!(viewport.scroll_to(2), 2);
        assert_eq!(viewport.scroll_to(0), 0);
    }

    #[test]
    fn test_resize_keeps_offset() {
        let mut viewport = ViewportState {
            offset: 3,
            height: 10,
        };
        viewport.resize(6);
        assert_eq!(viewport.height, 4);
        assert_eq!(viewport.offset, 3);
    }
}
