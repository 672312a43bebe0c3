//! Navigation menu overlay, shown while the nav menu carries `show`

use crate::controller::Controller;
use crate::store::KeyValueStore;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Render the menu as a box pinned to the top-left corner of `area`
pub fn render_menu<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller<S>,
    palette: &Palette,
) {
    let document = controller.document();
    let links = &controller.elements().nav_links;

    let widest = links
        .iter()
        .map(|&l| document.get(l).text.chars().count())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .min(area.width);
    let height = u16::try_from(links.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let popup = Rect::new(area.x, area.y, width, height);

    let items: Vec<ListItem> = links
        .iter()
        .enumerate()
        .map(|(position, &link)| {
            ListItem::new(format!(" {}  {}", position, document.get(link).text))
                .style(Style::default().fg(palette.fg))
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(palette.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(palette.bar_bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(List::new(items).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_page;
    use crate::store::MemoryStore;
    use crate::ui::theme::DARK_PALETTE;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_oversized_link_text_is_clipped_to_area() {
        let long = "x".repeat(70_000);
        let source = format!(
            r#"
            [[elements]]
            tag = "nav"
            id = "nav-menu"

              [[elements.children]]
              tag = "a"
              text = "{}"
              attrs = {{ "data-slide" = "0" }}
            "#,
            long
        );
        let page = parse_page(&source).unwrap();
        let controller = Controller::new(page.document, MemoryStore::new(), page.config);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| render_menu(f, f.area(), &controller, &DARK_PALETTE))
            .unwrap();

        // The box spans the full width and stops after one row of links
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content[39].symbol(), "┐");
        assert_eq!(buffer.content[2 * 40].symbol(), "└");
    }
}
