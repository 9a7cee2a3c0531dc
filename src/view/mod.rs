//! View layer: what the page shows for the selected encoder.
//!
//! - `composer`: selection state and page assembly
//! - `table`: sample-table rendering and column highlighting
//! - `code_panel`: code snippet display and the copy button

pub mod code_panel;
pub mod composer;
pub mod table;

pub use code_panel::{Clipboard, ClipboardError, CodePanelView, CopyButton, MemoryClipboard};
pub use composer::{PageView, SectionView, TabView, ViewComposer};
pub use table::{highlighted_columns, TableView};
