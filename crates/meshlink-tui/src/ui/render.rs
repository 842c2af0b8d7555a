//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use meshlink_core::ConnectionState;

use crate::state::UiState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &UiState) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);
    render_body(frame, body_area, state);
    render_footer(frame, footer_area, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(" Connection status")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Meshlink ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, state: &UiState) {
    let display = state.view.display;

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Status: "),
            Span::styled(
                display.label,
                Style::default()
                    .fg(label_color(state.view.state))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            button(display.action_button_text, display.action_button_enabled),
        ]),
    ];

    if let Some(prompt) = &state.view.sso_prompt {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Finish logging in from your browser:",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(format!("  {}", prompt.verification_uri)));
        lines.push(Line::from(vec![
            Span::raw("  Code: "),
            Span::styled(
                prompt.user_code.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(body, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &UiState) {
    let help = " Enter: action | r: refresh | q: quit ";

    let mut spans = Vec::new();
    if let Some(error) = &state.last_error {
        spans.push(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        spans.push(Span::raw(" | "));
    } else if !state.view.daemon_version.is_empty() {
        spans.push(Span::styled(
            format!("daemon {}", state.view.daemon_version),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn button(text: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[ {text} ]"), style)
}

fn label_color(state: Option<ConnectionState>) -> Color {
    match state {
        Some(ConnectionState::Connected) => Color::Green,
        Some(ConnectionState::Connecting) => Color::Yellow,
        Some(ConnectionState::NeedsLogin | ConnectionState::LoginFailed) => Color::Red,
        Some(ConnectionState::Idle) | None => Color::White,
    }
}
