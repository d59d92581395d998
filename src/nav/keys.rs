//! Key bindings for the navigation sidebar.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for moving between groups and expanding them.
#[derive(Debug, Clone)]
pub struct SidebarKeyMap {
    /// Move to the previous group.
    pub up: key::Binding,
    /// Move to the next group.
    pub down: key::Binding,
    /// Expand or collapse the group under the cursor.
    pub toggle: key::Binding,
    /// Quit.
    pub quit: key::Binding,
}

impl Default for SidebarKeyMap {
    fn default() -> Self {
        Self {
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "toggle group"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }
}

impl key::KeyMap for SidebarKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.toggle, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.up, &self.down], vec![&self.toggle, &self.quit]]
    }
}
