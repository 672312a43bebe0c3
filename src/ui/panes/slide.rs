//! Active pane rendering
//!
//! Walks the active pane's subtree in document order and emits exactly
//! [`Element::rows`] lines per element, so the rendered rows line up with the
//! layout positions the scroll animators test against.
//!
//! - Headings (`h1`..`h3`) are bold in the heading color
//! - The typed-text element gets a block cursor
//! - Bars render as a label row plus a track filled to the fill's width
//! - Fade-in elements (and their subtrees) stay blank until revealed

use crate::controller::scroll::{fill_of, FILL_CLASS};
use crate::controller::Controller;
use crate::dom::{Document, Element, ElementId, ROW_HEIGHT_PX};
use crate::store::KeyValueStore;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Whether `id` sits inside (or is) a fade-in element that is still hidden
fn is_hidden(document: &Document, id: ElementId) -> bool {
    let mut cursor = Some(id);
    while let Some(current) = cursor {
        let element = document.get(current);
        if element.has_class("fade-in") && !element.style.is_opaque() {
            return true;
        }
        cursor = element.parent;
    }
    false
}

fn text_style(element: &Element, palette: &Palette) -> Style {
    match element.tag.as_str() {
        "h1" | "h2" | "h3" => Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
        "a" => Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::UNDERLINED),
        "em" | "small" => Style::default().fg(palette.comment),
        _ => Style::default().fg(palette.fg),
    }
}

fn bar_lines(
    document: &Document,
    bar: ElementId,
    width: usize,
    palette: &Palette,
) -> [Line<'static>; 2] {
    let element = document.get(bar);
    let percent = fill_of(document, bar)
        .and_then(|fill| document.get(fill).style.width_percent())
        .unwrap_or(0);
    let filled = width * percent as usize / 100;

    let label = Line::from(vec![
        Span::styled(element.text.clone(), Style::default().fg(palette.fg)),
        Span::styled(
            if percent > 0 {
                format!("  {}%", percent)
            } else {
                String::new()
            },
            Style::default().fg(palette.comment),
        ),
    ]);
    let track = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(palette.fill)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled)),
            Style::default().fg(palette.track),
        ),
    ]);
    [label, track]
}

/// Build one line per layout row of the pane
pub fn slide_lines(
    document: &Document,
    slide: ElementId,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let subtree = std::iter::once(slide).chain(document.descendants(slide));

    for id in subtree {
        let element = document.get(id);
        let rows = element.rows() as usize;
        if rows == 0 || element.has_class(FILL_CLASS) {
            continue;
        }
        if is_hidden(document, id) {
            lines.extend(std::iter::repeat(Line::default()).take(rows));
            continue;
        }

        if element.has_class("bar") {
            lines.extend(bar_lines(document, id, width, palette));
        } else if element.has_class("typed-text") {
            lines.push(Line::from(vec![
                Span::styled(
                    element.text.clone(),
                    Style::default()
                        .fg(palette.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("▌", Style::default().fg(palette.secondary)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                element.text.clone(),
                text_style(element, palette),
            )));
        }
    }
    lines
}

/// Render the active pane, scrolled to the controller's viewport offset
pub fn render_slide_pane<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller<S>,
    palette: &Palette,
) {
    let position = format!(
        " {}/{} ",
        controller.current_slide() + 1,
        controller.slide_count()
    );
    let block = Block::default()
        .title(position)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_normal))
        .style(Style::default().bg(palette.bg))
        .padding(Padding::new(2, 2, 1, 0));

    let Some(slide) = controller.active_slide() else {
        let paragraph = Paragraph::new("(this page has no slides)")
            .block(block)
            .style(Style::default().fg(palette.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let width = block.inner(area).width.max(1) as usize;
    let lines = slide_lines(controller.document(), slide, width, palette);
    let offset = (controller.viewport().scroll_y / ROW_HEIGHT_PX).max(0) as u16;

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK_PALETTE;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_rows_match_layout() {
        let mut doc = Document::new();
        let slide = doc.create_element("section");
        doc.get_mut(slide).add_class("slide");
        doc.append_root(slide);

        let heading = doc.create_element("h1");
        doc.get_mut(heading).text = "Skills".to_string();
        doc.append_child(slide, heading);

        let bar = doc.create_element("div");
        let el = doc.get_mut(bar);
        el.add_class("bar");
        el.text = "Rust".to_string();
        doc.append_child(slide, bar);
        let fill = doc.create_element("div");
        let el = doc.get_mut(fill);
        el.add_class(FILL_CLASS);
        el.style.width = Some("50%".to_string());
        doc.append_child(bar, fill);

        let hidden = doc.create_element("p");
        let el = doc.get_mut(hidden);
        el.add_class("fade-in");
        el.text = "secret".to_string();
        doc.append_child(slide, hidden);
        doc.layout();

        let lines = slide_lines(&doc, slide, 10, &DARK_PALETTE);
        assert_eq!(lines.len() as i32 * ROW_HEIGHT_PX, doc.subtree_bottom(slide));
        assert_eq!(text(&lines[0]), "Skills");
        assert_eq!(text(&lines[1]), "Rust  50%");
        assert_eq!(text(&lines[2]), "█████░░░░░");
        assert_eq!(text(&lines[3]), "");

        doc.get_mut(hidden).style.opacity = Some(1.0);
        let lines = slide_lines(&doc, slide, 10, &DARK_PALETTE);
        assert_eq!(text(&lines[3]), "secret");
    }
}
