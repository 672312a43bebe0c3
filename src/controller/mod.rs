//! Presentation controller
//!
//! Owns the document, the preference store and the timer queue, and wires
//! five independent behaviours onto them:
//!
//! - [`navigator`]: slide navigation with clamped indices and fragment sync
//! - [`typing`]: the hero pane's typing/deleting text loop
//! - [`theme`]: the persisted light/dark toggle
//! - [`scroll`]: skill bar fills and fade-in reveals
//!
//! The host (the terminal front end, or a test) feeds [`Event`]s through
//! [`Controller::dispatch`] and moves time forward with
//! [`Controller::advance`]. Nothing here returns an error: missing elements
//! turn their feature into a no-op and bad input is clamped or ignored.

pub mod navigator;
pub mod scroll;
pub mod theme;
pub mod typing;

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::PresentationConfig;
use crate::dom::{Document, ElementId};
use crate::location::{parse_int_prefix, parse_slide_index, slide_fragment};
use crate::scheduler::Scheduler;
use crate::store::KeyValueStore;

use navigator::SlideNavigator;
use scroll::{BarAnimator, Viewport};
use theme::Theme;
use typing::TypingAnimator;

pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";
pub const SLIDE_ATTR: &str = "data-slide";

/// Element references collected once at startup.
///
/// Every reference is optional; a page without, say, a theme toggle simply
/// has no theme toggle behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elements {
    pub slides: Vec<ElementId>,
    pub nav_links: Vec<ElementId>,
    pub prev_button: Option<ElementId>,
    pub next_button: Option<ElementId>,
    pub menu_toggle: Option<ElementId>,
    pub nav_menu: Option<ElementId>,
    pub theme_toggle: Option<ElementId>,
    pub typed_text: Option<ElementId>,
    pub bars: Vec<ElementId>,
    pub fade_ins: Vec<ElementId>,
}

impl Elements {
    pub fn collect(document: &Document) -> Self {
        // The selectors are fixed and known to parse; a failure would only
        // mean the feature finds nothing
        let all = |selector: &str| document.query_selector_all(selector).unwrap_or_default();
        let one = |selector: &str| document.query_selector(selector).ok().flatten();

        Elements {
            slides: all(".slide"),
            nav_links: all("nav a[data-slide]"),
            prev_button: one(".prev-btn"),
            next_button: one(".next-btn"),
            menu_toggle: one("#menu-toggle"),
            nav_menu: one("#nav-menu"),
            theme_toggle: one("#theme-toggle"),
            typed_text: one(".typed-text"),
            bars: all(".bar"),
            fade_ins: all(".fade-in"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Host events the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PrevClick,
    NextClick,
    NavLinkClick(ElementId),
    MenuToggleClick,
    ThemeToggleClick,
    KeyDown(Key),
    /// The page was scrolled to this offset, in px
    Scroll(i32),
    /// The viewport now has this height, in px
    Resize(i32),
}

/// Deferred work queued on the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// One typing tick, valid only while its generation is current
    Type { generation: u64 },
    FillBar(ElementId),
    /// The bar and fade-in sweep run once after load
    InitialSweep,
}

pub struct Controller<S: KeyValueStore> {
    document: Document,
    store: S,
    config: PresentationConfig,
    elements: Elements,
    navigator: SlideNavigator,
    typing: TypingAnimator,
    bars: BarAnimator,
    viewport: Viewport,
    scheduler: Scheduler<Task>,
    loaded: bool,
}

impl<S: KeyValueStore> Controller<S> {
    /// Collect element references, create bar fills and apply the saved
    /// theme. Call [`load`](Self::load) afterwards to pick the first pane.
    pub fn new(mut document: Document, store: S, config: PresentationConfig) -> Self {
        let elements = Elements::collect(&document);
        debug!(
            slides = elements.slides.len(),
            nav_links = elements.nav_links.len(),
            bars = elements.bars.len(),
            fade_ins = elements.fade_ins.len(),
            typed_text = elements.typed_text.is_some(),
            "elements collected"
        );

        scroll::ensure_fills(&mut document, &elements.bars);
        theme::apply_saved(&mut document, elements.theme_toggle, &store);

        Controller {
            navigator: SlideNavigator::new(elements.slides.len()),
            typing: TypingAnimator::new(&config.typing),
            bars: BarAnimator::new(&config.scroll),
            document,
            store,
            config,
            elements,
            viewport: Viewport::default(),
            scheduler: Scheduler::new(),
            loaded: false,
        }
    }

    /// Handle the page load: show the pane named by `fragment` when it is
    /// valid and in range, otherwise the first pane, then queue the
    /// initial scroll sweep. Later calls re-resolve the fragment but the
    /// sweep is only queued once.
    pub fn load(&mut self, fragment: Option<&str>) {
        if let Some(fragment) = fragment {
            self.document.location.set_fragment(fragment);
        }
        let requested = self
            .document
            .location
            .fragment()
            .and_then(parse_slide_index);

        match requested {
            Some(index) if self.navigator.in_range(index) => self.go_to(index),
            Some(index) => {
                debug!(index, "fragment index out of range; showing first pane");
                self.go_to(0);
            }
            None => {
                if let Some(fragment) = self.document.location.fragment() {
                    debug!(fragment, "fragment does not name a pane; showing first pane");
                }
                self.go_to(0);
            }
        }

        if !self.loaded {
            self.loaded = true;
            self.scheduler
                .schedule(self.config.scroll.initial_sweep_delay(), Task::InitialSweep);
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        trace!(?event, "dispatch");
        match event {
            Event::PrevClick => {
                if self.elements.prev_button.is_some() {
                    self.prev();
                }
            }
            Event::NextClick => {
                if self.elements.next_button.is_some() {
                    self.next();
                }
            }
            Event::NavLinkClick(link) => self.follow_nav_link(link),
            Event::MenuToggleClick => {
                if self.elements.menu_toggle.is_some() {
                    if let Some(menu) = self.elements.nav_menu {
                        self.document.get_mut(menu).toggle_class(SHOW_CLASS);
                    }
                }
            }
            Event::ThemeToggleClick => {
                if self.elements.theme_toggle.is_some() {
                    theme::toggle(
                        &mut self.document,
                        self.elements.theme_toggle,
                        &mut self.store,
                    );
                }
            }
            Event::KeyDown(Key::ArrowLeft) => self.prev(),
            Event::KeyDown(Key::ArrowRight) => self.next(),
            Event::KeyDown(Key::Other) => {}
            Event::Scroll(scroll_y) => {
                self.viewport.scroll_y = scroll_y.max(0);
                self.sweep();
            }
            Event::Resize(height) => {
                self.viewport.height = height.max(0);
            }
        }
    }

    /// Run every task due at or before `until`, in order
    pub fn advance(&mut self, until: Duration) {
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.settle(until);
    }

    /// Advance the clock by `delta` from the current time
    pub fn advance_by(&mut self, delta: Duration) {
        let until = self.scheduler.now() + delta;
        self.advance(until);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Type { generation } => self.type_tick(generation),
            Task::FillBar(bar) => {
                if self.bars.fill(&mut self.document, bar) {
                    trace!(bar = bar.index(), "bar filled");
                }
            }
            Task::InitialSweep => self.sweep(),
        }
    }

    /// Show pane `index`, clamped to the existing panes
    pub fn go_to(&mut self, index: i64) {
        let Some(target) = self.navigator.go_to(index) else {
            return;
        };
        for &slide in &self.elements.slides {
            self.document.get_mut(slide).remove_class(ACTIVE_CLASS);
        }
        self.document
            .get_mut(self.elements.slides[target])
            .add_class(ACTIVE_CLASS);
        self.document.location.set_fragment(&slide_fragment(target));
        debug!(requested = index, slide = target, "navigated");

        if target == 0 {
            self.restart_typing();
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.navigator.next_index());
    }

    pub fn prev(&mut self) {
        self.go_to(self.navigator.prev_index());
    }

    fn follow_nav_link(&mut self, link: ElementId) {
        if !self.elements.nav_links.contains(&link) {
            return;
        }
        match self
            .document
            .get(link)
            .attr(SLIDE_ATTR)
            .and_then(parse_int_prefix)
        {
            Some(index) => self.go_to(index),
            None => debug!(link = link.index(), "nav link has no numeric data-slide; ignoring"),
        }
        if let Some(menu) = self.elements.nav_menu {
            self.document.get_mut(menu).remove_class(SHOW_CLASS);
        }
    }

    fn restart_typing(&mut self) {
        let Some(target) = self.elements.typed_text else {
            return;
        };
        if !self.typing.is_enabled() {
            return;
        }
        let generation = self.typing.restart();
        self.document.get_mut(target).text.clear();
        self.scheduler
            .schedule(self.typing.start_delay(), Task::Type { generation });
    }

    fn type_tick(&mut self, generation: u64) {
        if !self.typing.is_current(generation) {
            trace!(generation, "dropping stale typing tick");
            return;
        }
        let Some(target) = self.elements.typed_text else {
            return;
        };
        if let Some(step) = self.typing.tick() {
            self.document.get_mut(target).text = step.text;
            self.scheduler
                .schedule(step.next_delay, Task::Type { generation });
        }
    }

    fn sweep(&mut self) {
        for bar in self
            .bars
            .sweep(&self.document, &self.elements.bars, self.viewport)
        {
            self.scheduler
                .schedule(self.config.scroll.fill_delay(), Task::FillBar(bar));
        }
        let revealed = scroll::reveal(
            &mut self.document,
            &self.elements.fade_ins,
            self.viewport,
            self.config.scroll.reveal_margin_px,
        );
        if revealed > 0 {
            trace!(revealed, "fade-in elements revealed");
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_slide(&self) -> usize {
        self.navigator.current()
    }

    pub fn slide_count(&self) -> usize {
        self.navigator.count()
    }

    /// The currently active pane element, if there are panes at all
    pub fn active_slide(&self) -> Option<ElementId> {
        self.elements.slides.get(self.navigator.current()).copied()
    }

    pub fn theme(&self) -> Theme {
        theme::current(&self.document)
    }

    pub fn typing(&self) -> &TypingAnimator {
        &self.typing
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_menu_open(&self) -> bool {
        self.elements
            .nav_menu
            .is_some_and(|m| self.document.get(m).has_class(SHOW_CLASS))
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }
}
