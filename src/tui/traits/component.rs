//! Core component trait
//!
//! Every UI element that can be rendered implements `Component`.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifies a component for focus tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Text input in the header
    SearchInput,
    /// Formatted definition / status text
    Definition,
    /// Search history list
    History,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Style table
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,

    /// Whether a lookup is in flight
    pub loading: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize, loading: bool) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
            loading,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself into an area of the
/// frame. Rendering takes `&mut self` so components can record the size
/// they were drawn at and clamp their scroll state to it.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        let theme = Theme::plain();
        let first = RenderContext::new(&theme, ComponentId::SearchInput, 0, true);
        let wrapped = RenderContext::new(&theme, ComponentId::SearchInput, 4, true);

        assert_eq!(first.spinner_char(), wrapped.spinner_char());
        assert!(first.is_focused(ComponentId::SearchInput));
        assert!(!first.is_focused(ComponentId::History));
    }
}
