//! View rendering for the terminal UI.
//!
//! Pure presentation: every function here reads app state and draws
//! widgets; nothing mutates the core data.

use crate::formatter::{format_body, format_duration, format_size};
use crate::models::{ExecutionResult, HttpMethod};
use crate::ui::{App, View, SPINNER_FRAMES};
use crate::variables::used_variables;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// Accent color per HTTP method, matching common REST tooling conventions.
fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::GET => Color::Green,
        HttpMethod::POST => Color::Blue,
        HttpMethod::PUT => Color::Yellow,
        HttpMethod::PATCH => Color::Magenta,
        HttpMethod::DELETE => Color::Red,
        _ => Color::Gray,
    }
}

/// Status line color by response class.
fn status_color(status_code: u16) -> Color {
    match status_code {
        200..=299 => Color::Green,
        300..=399 => Color::Yellow,
        _ => Color::Red,
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Draws the active view.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    match app.view {
        View::List => draw_list(frame, app),
        View::Loading => draw_loading(frame, app),
        View::Response => draw_response(frame, app),
        View::Error => draw_error(frame, app),
    }
}

fn draw_list(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let total = app.document.requests.len();
    let title = Line::from(vec![
        Span::styled(" reqtui ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("· {} requests", total), dim()),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let items: Vec<ListItem> = app
        .visible_requests()
        .iter()
        .map(|request| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<8}", request.method.as_str()),
                    Style::default()
                        .fg(method_color(request.method))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(request.url.clone()),
            ])];
            if !request.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("        {}", request.description),
                    dim(),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, chunks[1], &mut app.list_state);

    let filter_line = if app.filtering || !app.filter.is_empty() {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(Color::Yellow)),
            Span::raw(app.filter.clone()),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(filter_line), chunks[2]);

    let help = if app.filtering {
        " type to filter · enter keep · esc clear"
    } else {
        " ↑/↓ navigate · / filter · enter send · q quit"
    };
    frame.render_widget(Paragraph::new(Span::styled(help, dim())), chunks[3]);
}

fn draw_loading(frame: &mut Frame<'_>, app: &App) {
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", spinner, app.pending_title),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled("waiting for response · q quit", dim())),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(paragraph, frame.area());
}

fn draw_response(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let lines = match app.last_result.as_ref() {
        Some(result) => response_lines(result, app),
        None => vec![Line::from("no response yet")],
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Response "))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, chunks[0]);

    let help = " j/k scroll · h headers · v variables · b back · q quit";
    frame.render_widget(Paragraph::new(Span::styled(help, dim())), chunks[1]);
}

/// Builds the full response view content as styled lines.
fn response_lines(result: &ExecutionResult, app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(error) = &result.error {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if let Some(response) = &result.response {
        lines.push(Line::from(vec![
            Span::styled(
                format!("● {} {}", response.status_code, response.status_text),
                Style::default()
                    .fg(status_color(response.status_code))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {}  {}",
                    format_duration(response.duration),
                    format_size(response.size as u64)
                ),
                dim(),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Request",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        result.request.title(),
        Style::default().fg(method_color(result.request.method)),
    )));
    lines.push(Line::from(""));

    if app.show_variables {
        lines.push(Line::from(Span::styled(
            "Variables Used",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let used = used_variables(&result.request, &app.variables);
        if used.is_empty() {
            lines.push(Line::from(Span::styled("(none)", dim())));
        } else {
            for (name, value) in used {
                lines.push(Line::from(Span::styled(
                    format!("{} = {}", name, value),
                    dim(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if let Some(response) = &result.response {
        if app.show_headers {
            lines.push(Line::from(Span::styled(
                "Headers",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let mut headers: Vec<(&String, &String)> = response.headers.iter().collect();
            headers.sort();
            for (name, value) in headers {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", name), Style::default().fg(Color::Cyan)),
                    Span::raw(value.clone()),
                ]));
            }
            lines.push(Line::from(""));
        }

        for line in format_body(response).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    lines
}

fn draw_error(frame: &mut Frame<'_>, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.error_message.clone()),
        Line::from(""),
        Line::from(Span::styled("b/esc back · q quit", dim())),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" reqtui "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}
