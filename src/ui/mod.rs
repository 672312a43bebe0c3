//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The terminal plays the part of the browser: it shows the active pane,
//! turns key presses into clicks and keydowns, and reports scroll offsets
//! and viewport height to the controller.
//!
//! - **[`app`]** — application state and keyboard event loop
//! - **[`panes`]** — stateless render functions for each visible region
//! - **[`theme`]** — light and dark color palettes
//!
//! The entry point for consumers is [`App`]: construct it with a loaded
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::controller::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
