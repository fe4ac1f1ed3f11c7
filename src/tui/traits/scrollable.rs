//! Scrollable trait for components with scrollable content
//!
//! Components own a `ScrollState` and expose it through this trait to get
//! uniform scroll behavior.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Components only need to implement `scroll_state()` and
/// `scroll_state_mut()`; navigation delegates to `ScrollState`.
pub trait Scrollable: Component {
    /// Get immutable reference to scroll state
    fn scroll_state(&self) -> &ScrollState;

    /// Get mutable reference to scroll state
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    /// Scroll up by one line/item
    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    /// Scroll down by one line/item
    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    /// Jump to the top of content
    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    /// Jump to the bottom of content
    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// Scroll up by a page
    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    /// Scroll down by a page
    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Current position as a whole percentage
    fn scroll_percent(&self) -> u16 {
        self.scroll_state().scroll_percent()
    }
}

/// Extension trait for scrollable components with selectable items
///
/// A text view scrolls but doesn't select, so this is separate from
/// `Scrollable`.
pub trait Selectable: Scrollable {
    /// Get the currently selected item index
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected item index
    fn select(&mut self, index: usize);

    /// Get total number of selectable items
    fn item_count(&self) -> usize;

    /// Select the next item (with bounds checking)
    fn select_next(&mut self) {
        if let Some(current) = self.selected_index() {
            let max = self.item_count().saturating_sub(1);
            if current < max {
                self.select(current + 1);
            }
        } else if self.item_count() > 0 {
            self.select(0);
        }
    }

    /// Select the previous item (with bounds checking)
    fn select_previous(&mut self) {
        if let Some(current) = self.selected_index() {
            if current > 0 {
                self.select(current - 1);
            }
        } else if self.item_count() > 0 {
            self.select(self.item_count().saturating_sub(1));
        }
    }

    /// Select the first item
    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    /// Select the last item
    fn select_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.select(count - 1);
        }
    }
}
