//! Interactive trait for components that handle keyboard input
//!
//! App handles global keys first and routes the rest to the focused
//! component.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should fall through to the next handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global: Ctrl+C, Ctrl+H/Tab, Esc, Enter)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (fallback: definition scrolling in Search mode)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;
}

/// Default key handling for components that are both Interactive and Scrollable
pub trait ScrollableInteractive: Interactive + super::Scrollable {
    /// Handle Up, Down, Home, End, PageUp, PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Up => {
                self.scroll_up();
                Handled::Yes
            }
            KeyCode::Down => {
                self.scroll_down();
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll_to_top();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}

// Blanket implementation: anything that implements both traits gets this for free
impl<T: Interactive + super::Scrollable> ScrollableInteractive for T {}
