//! # Introduction
//!
//! Folio presents a single-page portfolio as a deck of full-screen panes in
//! the terminal. A page is described in TOML; the presenter wires slide
//! navigation, a typing animation, a persisted light/dark theme and
//! scroll-triggered reveal animations onto it, and renders the active pane
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Page TOML → Document → Controller (+ Scheduler, Store) → TUI
//! ```
//!
//! 1. [`markup`] — parses a page file into a laid-out [`dom::Document`].
//! 2. [`dom`] — the element tree: selectors, classes, attributes, inline
//!    style and row-based layout.
//! 3. [`controller`] — the presentation controller: navigation, typing,
//!    theme and scroll behaviours, driven by [`controller::Event`]s.
//! 4. [`scheduler`] — virtual-clock timer queue for deferred callbacks.
//! 5. [`store`] — persisted key-value preferences.
//! 6. [`location`] — the `slide-{n}` fragment, the only bookmarkable state.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Page contract
//!
//! Panes carry class `slide`; nav links are `a[data-slide]` inside a `nav`;
//! controls are `.prev-btn`, `.next-btn`, `#menu-toggle`, `#nav-menu` and
//! `#theme-toggle`; the hero text is `.typed-text`; skill bars are `.bar`
//! with a `data-percent` width; reveal targets are `.fade-in`. All of them
//! are optional.

pub mod config;
pub mod controller;
pub mod dom;
pub mod errors;
pub mod location;
pub mod markup;
pub mod scheduler;
pub mod store;
pub mod ui;
