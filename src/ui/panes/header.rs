//! Header bar: page title, navigation links, and the theme toggle glyph

use crate::controller::{Controller, SLIDE_ATTR};
use crate::location::parse_int_prefix;
use crate::store::KeyValueStore;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header with one entry per nav link
pub fn render_header<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller<S>,
    palette: &Palette,
) {
    let document = controller.document();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border_normal))
        .style(Style::default().bg(palette.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(inner);

    let mut spans = vec![Span::styled(
        format!(" {} ", document.title),
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )];

    let current = controller.current_slide() as i64;
    for (position, &link) in controller.elements().nav_links.iter().enumerate() {
        let element = document.get(link);
        let is_current = element.attr(SLIDE_ATTR).and_then(parse_int_prefix) == Some(current);
        let style = if is_current {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(" │ ", Style::default().fg(palette.comment)));
        spans.push(Span::styled(format!("{} ", position), Style::default().fg(palette.comment)));
        spans.push(Span::styled(element.text.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    if let Some(toggle) = controller.elements().theme_toggle {
        let glyph = Paragraph::new(document.get(toggle).text.clone())
            .style(Style::default().fg(palette.secondary))
            .alignment(Alignment::Right);
        frame.render_widget(glyph, columns[1]);
    }
}
