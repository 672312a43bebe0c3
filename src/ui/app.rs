//! Main TUI application state and logic

use crate::controller::{Controller, Event as PageEvent, Key};
use crate::dom::ROW_HEIGHT_PX;
use crate::store::KeyValueStore;
use crate::ui::panes::{
    render_header, render_menu, render_slide_pane, render_status_bar, StatusRenderData,
};
use crate::ui::theme::palette_for;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Rows taken by the header (title line + bottom border)
const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the status bar
const STATUS_HEIGHT: u16 = 1;
/// Rows the slide pane spends on its border and padding
const PANE_CHROME: u16 = 3;

/// The main application state
pub struct App<S: KeyValueStore> {
    /// The presentation controller driving the page
    pub controller: Controller<S>,

    /// Reference point for the controller's clock
    pub started: Instant,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new app around an already loaded controller
    pub fn new(controller: Controller<S>) -> Self {
        App {
            controller,
            started: Instant::now(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.resize(size.height);

        loop {
            // Fire every timer that came due since the last frame
            self.controller.advance(self.started.elapsed());

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Short poll so the typing animation keeps moving between keys
            if event::poll(Duration::from_millis(30))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, height) => self.resize(height),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Tell the controller how tall the visible part of a pane is
    pub fn resize(&mut self, terminal_rows: u16) {
        let rows = terminal_rows.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + PANE_CHROME);
        self.controller
            .dispatch(PageEvent::Resize(rows as i32 * ROW_HEIGHT_PX));
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let palette = palette_for(self.controller.theme());
        let size = frame.area();

        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(size);

        render_header(frame, chunks[0], &self.controller, palette);
        render_slide_pane(frame, chunks[1], &self.controller, palette);

        if self.controller.is_menu_open() {
            render_menu(frame, chunks[1], &self.controller, palette);
        }

        let elements = self.controller.elements();
        let fragment = self.controller.document().location.hash();
        let status = StatusRenderData {
            message: &self.status_message,
            fragment: &fragment,
            current_slide: self.controller.current_slide(),
            slide_count: self.controller.slide_count(),
            has_buttons: elements.prev_button.is_some() || elements.next_button.is_some(),
            has_menu: elements.menu_toggle.is_some() && elements.nav_menu.is_some(),
            has_theme_toggle: elements.theme_toggle.is_some(),
        };
        render_status_bar(frame, chunks[2], &status, palette);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let before = self.controller.current_slide();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => self.controller.dispatch(PageEvent::KeyDown(Key::ArrowLeft)),
            KeyCode::Right => self.controller.dispatch(PageEvent::KeyDown(Key::ArrowRight)),
            KeyCode::Char('p') => self.controller.dispatch(PageEvent::PrevClick),
            KeyCode::Char('n') => self.controller.dispatch(PageEvent::NextClick),
            // Number keys click the n-th nav link
            KeyCode::Char(c @ '0'..='9') => {
                let position = c as usize - '0' as usize;
                match self.controller.elements().nav_links.get(position).copied() {
                    Some(link) => self.controller.dispatch(PageEvent::NavLinkClick(link)),
                    None => self.status_message = format!("No nav link {}", position),
                }
            }
            KeyCode::Char('m') => self.controller.dispatch(PageEvent::MenuToggleClick),
            KeyCode::Esc => {
                if self.controller.is_menu_open() {
                    self.controller.dispatch(PageEvent::MenuToggleClick);
                }
            }
            KeyCode::Char('t') => {
                self.controller.dispatch(PageEvent::ThemeToggleClick);
                self.status_message = format!("Theme: {}", self.controller.theme());
            }
            KeyCode::Up => self.scroll_by(-ROW_HEIGHT_PX),
            KeyCode::Down => self.scroll_by(ROW_HEIGHT_PX),
            KeyCode::PageUp => self.scroll_by(-self.controller.viewport().height),
            KeyCode::PageDown => self.scroll_by(self.controller.viewport().height),
            other => {
                if let KeyCode::Char(_) = other {
                    self.controller.dispatch(PageEvent::KeyDown(Key::Other));
                }
            }
        }

        let after = self.controller.current_slide();
        if after != before {
            // Each pane starts at its top
            self.controller.dispatch(PageEvent::Scroll(0));
            self.status_message = format!("Slide {}", after);
        }
    }

    /// Scroll the active pane, staying within its content
    fn scroll_by(&mut self, delta: i32) {
        let viewport = self.controller.viewport();
        let content = self
            .controller
            .active_slide()
            .map(|s| self.controller.document().subtree_bottom(s))
            .unwrap_or(0);
        let max_scroll = (content - viewport.height).max(0);
        let target = (viewport.scroll_y + delta).clamp(0, max_scroll);
        self.controller.dispatch(PageEvent::Scroll(target));
    }
}
