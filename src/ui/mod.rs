use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Popup};
use crate::card::SEPARATOR;
use crate::theme::Theme;
use crate::view::ViewNode;

/// One styled line per heading: label highlighted, value in text color.
pub fn card_lines(view: &ViewNode, theme: &Theme) -> Vec<Line<'static>> {
    view.lines()
        .into_iter()
        .map(|line| match line.split_once(SEPARATOR) {
            Some((label, value)) => Line::from(vec![
                Span::styled(
                    label.to_string(),
                    Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
                ),
                Span::styled(SEPARATOR, Style::default().fg(theme.text_dim)),
                Span::styled(value.to_string(), Style::default().fg(theme.value)),
            ]),
            None => Line::from(Span::styled(line, Style::default().fg(theme.value))),
        })
        .collect()
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Card
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_card(f, app, chunks[0]);
    draw_footer(f, app, chunks[1]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

fn draw_card(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let lines = card_lines(&app.view, theme);

    // Borders plus one line of padding on each side
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let card_area = centered_fixed(width.max(24), height, area);

    let block = Block::default()
        .title(Span::styled(
            " Profile ",
            Style::default().fg(theme.border).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let card = Paragraph::new(lines).block(block).alignment(Alignment::Left);
    f.render_widget(card, card_area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints = [("h", "Help"), ("q", "Quit")];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_fixed(44, 8, f.area());

    f.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(text),
        ])
    };

    let help = Paragraph::new(vec![
        key_line("  h/?      ", "Toggle this help"),
        key_line("  q/Esc    ", "Quit"),
        key_line("  Ctrl-C   ", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  profile-card --format json",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Help ", Style::default().fg(theme.accent)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    f.render_widget(help, popup_area);
}

/// A `width` x `height` rect centered in `r`, clamped to fit.
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
