//! In-memory document model
//!
//! A small arena-backed element tree standing in for the browser DOM. The
//! presentation controller only needs a handful of operations: selector
//! queries, class and attribute access, text content, a few inline style
//! properties, and the vertical position of each element relative to the
//! top of the page.
//!
//! # Layout
//!
//! Layout is deliberately coarse: every element occupies a whole number of
//! rows ([`ROW_HEIGHT_PX`] each) and elements stack top to bottom in document
//! order. Each pane (an element with class `slide`) starts a fresh coordinate
//! space at `0`, since panes are full-screen and shown one at a time.

pub mod selector;
pub mod style;

use std::collections::BTreeMap;

use crate::errors::SelectorError;
use crate::location::Location;

pub use selector::{Compound, Selector};
pub use style::InlineStyle;

/// Height of one layout row, in px
pub const ROW_HEIGHT_PX: i32 = 16;

/// Handle to an element in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single element node
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub style: InlineStyle,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    /// Distance from the top of the page (or of the enclosing pane), in px
    pub top: i32,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            ..Element::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Flip a class; returns whether it is present afterwards
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Rows this element occupies on its own, excluding children
    pub fn rows(&self) -> i32 {
        if self.has_class("bar") {
            2
        } else if !self.text.is_empty() || self.has_class("typed-text") {
            1
        } else {
            0
        }
    }

    fn matches_compound(&self, compound: &Compound) -> bool {
        if let Some(tag) = &compound.tag {
            if &self.tag != tag {
                return false;
            }
        }
        if let Some(id) = &compound.id {
            if self.id.as_ref() != Some(id) {
                return false;
            }
        }
        compound.classes.iter().all(|c| self.has_class(c))
            && compound.attrs.iter().all(|a| self.attrs.contains_key(a))
    }
}

/// The element tree plus document-level state
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    roots: Vec<ElementId>,
    /// Attributes of the document element (`<html>`), e.g. `data-theme`
    root_attrs: BTreeMap<String, String>,
    pub title: String,
    pub location: Location,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.insert(Element::new(tag))
    }

    /// Add a fully built element as a detached node
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            parent: None,
            children: Vec::new(),
            ..element
        });
        id
    }

    /// Attach a detached element at the top level of the document
    pub fn append_root(&mut self, child: ElementId) {
        self.elements[child.0].parent = None;
        self.roots.push(child);
    }

    /// Attach `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    pub fn set_root_attr(&mut self, name: &str, value: &str) {
        self.root_attrs.insert(name.to_string(), value.to_string());
    }

    /// Every attached element in document (pre-)order
    pub fn all(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.collect_subtree(root, &mut out);
        }
        out
    }

    /// Strict descendants of `root` in document order
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &child in &self.get(root).children {
            self.collect_subtree(child, &mut out);
        }
        out
    }

    fn collect_subtree(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for &child in &self.get(id).children {
            self.collect_subtree(child, out);
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.all()
            .into_iter()
            .find(|&e| self.get(e).id.as_deref() == Some(id))
    }

    pub fn matches(&self, id: ElementId, selector: &Selector) -> bool {
        if !self.get(id).matches_compound(selector.subject()) {
            return false;
        }
        // Descendant combinators only, so matching each ancestor compound
        // against the nearest qualifying ancestor is sufficient
        let mut cursor = self.get(id).parent;
        for compound in selector.ancestors() {
            loop {
                match cursor {
                    Some(ancestor) => {
                        cursor = self.get(ancestor).parent;
                        if self.get(ancestor).matches_compound(compound) {
                            break;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .all()
            .into_iter()
            .filter(|&e| self.matches(e, &selector))
            .collect())
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<ElementId>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// First descendant of `root` matching `selector`
    pub fn query_selector_within(
        &self,
        root: ElementId,
        selector: &str,
    ) -> Result<Option<ElementId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(root)
            .into_iter()
            .find(|&e| self.matches(e, &selector)))
    }

    /// Assign `top` to every attached element
    pub fn layout(&mut self) {
        let mut y = 0;
        for root in self.roots.clone() {
            self.layout_subtree(root, &mut y);
        }
    }

    fn layout_subtree(&mut self, id: ElementId, y: &mut i32) {
        let is_pane = self.get(id).has_class("slide");
        let resume = *y;
        if is_pane {
            *y = 0;
        }
        self.get_mut(id).top = *y;
        *y += self.get(id).rows() * ROW_HEIGHT_PX;
        for child in self.get(id).children.clone() {
            self.layout_subtree(child, y);
        }
        if is_pane {
            *y = resume;
        }
    }

    /// Bottom edge of `id` and everything below it, relative to its pane
    pub fn subtree_bottom(&self, id: ElementId) -> i32 {
        let element = self.get(id);
        let own = element.top + element.rows() * ROW_HEIGHT_PX;
        element
            .children
            .iter()
            .map(|&c| self.subtree_bottom(c))
            .fold(own, i32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(doc: &mut Document, tag: &str, classes: &[&str], text: &str) -> ElementId {
        let id = doc.create_element(tag);
        let el = doc.get_mut(id);
        for class in classes {
            el.add_class(class);
        }
        el.text = text.to_string();
        id
    }

    fn sample() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let nav = element(&mut doc, "nav", &[], "");
        doc.append_root(nav);
        let link = element(&mut doc, "a", &[], "Home");
        doc.get_mut(link)
            .attrs
            .insert("data-slide".to_string(), "0".to_string());
        doc.append_child(nav, link);
        let plain = element(&mut doc, "a", &[], "Elsewhere");
        doc.append_root(plain);

        let slide = element(&mut doc, "section", &["slide"], "");
        doc.append_root(slide);
        let heading = element(&mut doc, "h1", &[], "Hello");
        doc.append_child(slide, heading);
        let bar = element(&mut doc, "div", &["bar"], "Rust");
        doc.append_child(slide, bar);
        (doc, link, bar)
    }

    #[test]
    fn test_descendant_selector() {
        let (doc, link, _) = sample();
        assert_eq!(doc.query_selector_all("nav a[data-slide]").unwrap(), vec![link]);
        assert_eq!(doc.query_selector_all("a").unwrap().len(), 2);
        assert_eq!(doc.query_selector("footer a").unwrap(), None);
    }

    #[test]
    fn test_query_within_and_classes() {
        let (mut doc, _, bar) = sample();
        let fill = doc.create_element("div");
        doc.get_mut(fill).add_class("fill");
        doc.append_child(bar, fill);

        assert_eq!(doc.query_selector_within(bar, ".fill").unwrap(), Some(fill));
        assert!(doc.get_mut(fill).toggle_class("show"));
        assert!(!doc.get_mut(fill).toggle_class("show"));
        assert!(!doc.get(fill).has_class("show"));
    }

    #[test]
    fn test_layout_restarts_per_pane() {
        let (mut doc, link, bar) = sample();
        doc.layout();
        assert_eq!(doc.get(link).top, 0);
        let slide = doc.query_selector(".slide").unwrap().unwrap();
        assert_eq!(doc.get(slide).top, 0);
        // heading takes one row, so the bar starts on the second
        assert_eq!(doc.get(bar).top, ROW_HEIGHT_PX);
        assert_eq!(doc.subtree_bottom(slide), 3 * ROW_HEIGHT_PX);
    }

    #[test]
    fn test_root_attributes() {
        let mut doc = Document::new();
        assert_eq!(doc.root_attr("data-theme"), None);
        doc.set_root_attr("data-theme", "dark");
        assert_eq!(doc.root_attr("data-theme"), Some("dark"));
    }
}
