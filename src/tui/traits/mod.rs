//! Component trait system for the TUI
//!
//! Panels declare their capabilities through traits instead of App knowing
//! how to scroll or handle keys for each one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │      (session state machine: modes, focus, lookups)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌────────────┐  ┌──────────┐
//!        │  Search  │   │ Definition │  │ History  │
//!        │  Input   │   │   Panel    │  │  Panel   │
//!        └──────────┘   └────────────┘  └──────────┘
//! ```
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard input
//! - [`Scrollable`] - Components with scrollable content
//! - [`Selectable`] - Scrollable components with a selected item

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::{Scrollable, Selectable};
