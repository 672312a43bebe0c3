//! TUI pane rendering modules
//!
//! Stateless render functions, one per visible region:
//!
//! - [`header`]: page title, nav links and theme glyph
//! - [`slide`]: the active pane's content
//! - [`menu`]: nav menu overlay
//! - [`status`]: status bar with keybindings and the current fragment
//!
//! Each takes the palette for the document's current theme.

pub mod header;
pub mod menu;
pub mod slide;
pub mod status;

// Re-export render functions for convenience
pub use header::render_header;
pub use menu::render_menu;
pub use slide::render_slide_pane;
pub use status::{render_status_bar, StatusRenderData};
