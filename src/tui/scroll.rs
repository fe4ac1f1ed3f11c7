// Scroll state shared by the definition and history panels
//
// Each panel owns one ScrollState; App routes keys and ui.rs renders.
// Offsets are in rows: wrapped text rows for the definition panel, items
// for the history list.

/// Scroll position plus the sizes it is clamped against
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Row at the top of the viewport
    offset: usize,

    /// Total rows of content
    total: usize,

    /// Rows visible at once
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions, clamping the offset
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll just enough to bring `index` into view
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Position as a whole percentage; content that fits counts as 100%
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            100
        } else {
            (self.offset * 100 / max) as u16
        }
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_clamped_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 15);
        scroll.scroll_down();
        assert_eq!(scroll.offset(), 15);

        // Content shrinks: offset follows
        scroll.update_dimensions(8, 5);
        assert_eq!(scroll.offset(), 3);
    }

    #[test]
    fn paging_moves_by_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 20);
        scroll.page_up();
        assert_eq!(scroll.offset(), 10);
        assert_eq!(scroll.visible_range(), (10, 20));
    }

    #[test]
    fn percent_tracks_position() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 10);
        assert_eq!(scroll.scroll_percent(), 100);

        scroll.update_dimensions(30, 10);
        assert_eq!(scroll.scroll_percent(), 0);
        scroll.page_down();
        assert_eq!(scroll.scroll_percent(), 50);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.scroll_percent(), 100);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 3);

        scroll.ensure_visible(4);
        assert_eq!(scroll.offset(), 2);
        scroll.ensure_visible(3);
        assert_eq!(scroll.offset(), 2);
        scroll.ensure_visible(0);
        assert_eq!(scroll.offset(), 0);
    }
}
