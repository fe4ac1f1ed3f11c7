// Components module - UI building blocks
//
// - Title bar: search input, last searched word, spinner
// - Definition panel: formatted entry or status text, scrollable
// - History panel: past searches, selectable
// - Status bar: key hints and scroll position

pub mod definition_panel;
pub mod history_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;

pub use definition_panel::DefinitionPanel;
pub use history_panel::HistoryPanel;
