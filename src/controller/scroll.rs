//! Scroll-triggered skill bar fills and fade-in reveals
//!
//! Both sweeps run on every scroll event and once shortly after load. An
//! element counts as visible once its top edge, relative to the viewport,
//! is above `viewport height - reveal margin`.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::ScrollConfig;
use crate::dom::{Document, ElementId};

pub const FILL_CLASS: &str = "fill";
pub const PERCENT_ATTR: &str = "data-percent";

/// Visible window onto the page, in px
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub height: i32,
    pub scroll_y: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            height: 768,
            scroll_y: 0,
        }
    }
}

impl Viewport {
    /// Top of an element relative to the viewport
    pub fn bounding_top(&self, top: i32) -> i32 {
        top - self.scroll_y
    }

    pub fn is_in_view(&self, top: i32, margin: i32) -> bool {
        self.bounding_top(top) < self.height - margin
    }
}

/// The fill child of `bar`, if it has one
pub fn fill_of(document: &Document, bar: ElementId) -> Option<ElementId> {
    document
        .query_selector_within(bar, &format!(".{}", FILL_CLASS))
        .ok()
        .flatten()
}

/// Give every bar a fill child unless its markup already has one
pub fn ensure_fills(document: &mut Document, bars: &[ElementId]) {
    for &bar in bars {
        if fill_of(document, bar).is_some() {
            continue;
        }
        let top = document.get(bar).top;
        let fill = document.create_element("div");
        let element = document.get_mut(fill);
        element.add_class(FILL_CLASS);
        element.top = top;
        document.append_child(bar, fill);
    }
}

/// Tracks which bars already have a fill on its way
#[derive(Debug, Clone, Default)]
pub struct BarAnimator {
    margin: i32,
    pending: FxHashSet<ElementId>,
}

impl BarAnimator {
    pub fn new(config: &ScrollConfig) -> Self {
        BarAnimator {
            margin: config.reveal_margin_px,
            pending: FxHashSet::default(),
        }
    }

    /// Bars that just became eligible for a fill. Each bar is returned at
    /// most once; the caller schedules [`fill`](Self::fill) for them.
    pub fn sweep(
        &mut self,
        document: &Document,
        bars: &[ElementId],
        viewport: Viewport,
    ) -> Vec<ElementId> {
        let mut due = Vec::new();
        for &bar in bars {
            let element = document.get(bar);
            if element.attr(PERCENT_ATTR).is_none()
                || !viewport.is_in_view(element.top, self.margin)
            {
                continue;
            }
            let Some(fill) = fill_of(document, bar) else {
                continue;
            };
            if document.get(fill).style.width.is_some() || self.pending.contains(&bar) {
                continue;
            }
            self.pending.insert(bar);
            due.push(bar);
        }
        if !due.is_empty() {
            trace!(count = due.len(), "bars queued for fill");
        }
        due
    }

    /// Set the bar's fill width to its target percentage, unless it already
    /// has one. Returns whether anything was written.
    pub fn fill(&mut self, document: &mut Document, bar: ElementId) -> bool {
        self.pending.remove(&bar);
        let Some(fill) = fill_of(document, bar) else {
            return false;
        };
        if document.get(fill).style.width.is_some() {
            return false;
        }
        let Some(percent) = document.get(bar).attr(PERCENT_ATTR).map(str::to_string) else {
            debug!(bar = bar.index(), "bar has no data-percent; leaving it empty");
            return false;
        };
        document.get_mut(fill).style.width = Some(percent);
        true
    }
}

/// Make every fade-in element in view fully visible. Returns how many
/// elements were newly revealed.
pub fn reveal(
    document: &mut Document,
    elements: &[ElementId],
    viewport: Viewport,
    margin: i32,
) -> usize {
    let mut revealed = 0;
    for &el in elements {
        if !viewport.is_in_view(document.get(el).top, margin) {
            continue;
        }
        let style = &mut document.get_mut(el).style;
        if !style.is_opaque() {
            revealed += 1;
        }
        style.opacity = Some(1.0);
        style.transform = Some("translateY(0)".to_string());
    }
    revealed
}
