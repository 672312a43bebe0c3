//! Page description loading
//!
//! A page is a TOML file describing the element tree the presenter wires
//! itself onto, plus optional animation settings:
//!
//! ```toml
//! title = "Jane Doe"
//! theme = "light"
//!
//! [typing]
//! phrases = ["a Rustacean", "a Runner"]
//!
//! [[elements]]
//! tag = "section"
//! class = ["slide"]
//!
//!   [[elements.children]]
//!   tag = "span"
//!   class = ["typed-text"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::PresentationConfig;
use crate::dom::{Document, Element, ElementId};
use crate::errors::PageError;

#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class: Vec<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct PageSpec {
    #[serde(default)]
    title: String,
    /// Static `data-theme` the page declares before any stored preference
    #[serde(default)]
    theme: Option<String>,
    #[serde(flatten)]
    config: PresentationConfig,
    #[serde(default)]
    elements: Vec<ElementSpec>,
}

/// A parsed page, laid out and ready to be handed to the controller
#[derive(Debug, Clone)]
pub struct Page {
    pub document: Document,
    pub config: PresentationConfig,
}

pub fn load_page(path: &Path) -> Result<Page, PageError> {
    let source = fs::read_to_string(path).map_err(|source| PageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page(&source)
}

pub fn parse_page(source: &str) -> Result<Page, PageError> {
    let spec: PageSpec = toml::from_str(source)?;

    let mut document = Document::new();
    document.title = spec.title;
    if let Some(theme) = &spec.theme {
        document.set_root_attr("data-theme", theme);
    }
    for element in &spec.elements {
        let id = build(&mut document, element);
        document.append_root(id);
    }
    document.layout();
    debug!(elements = document.len(), "page parsed");

    Ok(Page {
        document,
        config: spec.config,
    })
}

fn build(document: &mut Document, spec: &ElementSpec) -> ElementId {
    let mut element = Element::new(&spec.tag);
    element.id = spec.id.clone();
    for class in &spec.class {
        element.add_class(class);
    }
    element.attrs = spec.attrs.clone();
    element.text = spec.text.clone();

    let id = document.insert(element);
    for child in &spec.children {
        let child_id = build(document, child);
        document.append_child(id, child_id);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_page() {
        let page = parse_page(
            r#"
            title = "Test"
            theme = "dark"

            [typing]
            phrases = ["one"]

            [[elements]]
            tag = "nav"
            id = "nav-menu"

              [[elements.children]]
              tag = "a"
              text = "Home"
              attrs = { "data-slide" = "0" }

            [[elements]]
            tag = "section"
            class = ["slide", "active"]
            "#,
        )
        .unwrap();

        let doc = &page.document;
        assert_eq!(doc.title, "Test");
        assert_eq!(doc.root_attr("data-theme"), Some("dark"));
        assert_eq!(page.config.typing.phrases, vec!["one".to_string()]);
        assert_eq!(doc.query_selector_all("nav a[data-slide]").unwrap().len(), 1);
        let slide = doc.query_selector(".slide").unwrap().unwrap();
        assert!(doc.get(slide).has_class("active"));
        assert_eq!(doc.get(slide).tag, "section");
    }

    #[test]
    fn test_defaults_to_div() {
        let page = parse_page("[[elements]]\nclass = [\"fade-in\"]\n").unwrap();
        let el = page.document.query_selector(".fade-in").unwrap().unwrap();
        assert_eq!(page.document.get(el).tag, "div");
        assert_eq!(page.document.root_attr("data-theme"), None);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(parse_page("elements = 3"), Err(PageError::Parse(_))));
    }
}
