//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar needs to know about the presenter
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub fragment: &'a str,
    pub current_slide: usize,
    pub slide_count: usize,
    pub has_buttons: bool,
    pub has_menu: bool,
    pub has_theme_toggle: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    data: &StatusRenderData,
    palette: &Palette,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: pane position, fragment and status message
    let position = if data.slide_count == 0 {
        " Slide -/0 ".to_string()
    } else {
        format!(" Slide {}/{} ", data.current_slide + 1, data.slide_count)
    };

    let left_spans = vec![
        Span::styled(
            position,
            Style::default()
                .bg(palette.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.fragment),
            Style::default().bg(palette.bar_bg).fg(palette.secondary),
        ),
        Span::styled(" | ", Style::default().bg(palette.bar_bg).fg(palette.comment)),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(palette.bar_bg).fg(palette.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(palette.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, only for the controls the page actually has
    let key_style = Style::default().bg(palette.comment).fg(Color::Black);
    let desc_style = Style::default().bg(palette.bar_bg).fg(palette.fg);
    let sep_style = Style::default().bg(palette.bar_bg).fg(palette.comment);

    let mut binds: Vec<(&str, &str)> = vec![(" ←/→ ", " slide ")];
    if data.has_buttons {
        binds.push((" p/n ", " prev/next "));
    }
    binds.push((" 0-9 ", " jump "));
    if data.has_menu {
        binds.push((" m ", " menu "));
    }
    if data.has_theme_toggle {
        binds.push((" t ", " theme "));
    }
    binds.push((" ↑/↓ ", " scroll "));
    binds.push((" q ", " quit "));

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in binds.into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(palette.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
