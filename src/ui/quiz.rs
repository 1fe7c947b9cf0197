use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::OptionKey;

/// Countdown turns red with this many seconds left.
const TIMER_URGENT_SECS: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(snapshot) = app.session().and_then(|s| s.snapshot(app.bank())) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status_line(
        frame,
        chunks[0],
        snapshot.number,
        snapshot.total,
        snapshot.time_remaining,
    );
    render_question_text(frame, chunks[1], &snapshot.question.text);
    render_options(frame, chunks[2], &snapshot.question.options, app);
    render_controls(frame, chunks[3]);
}

fn render_status_line(frame: &mut Frame, area: Rect, number: usize, total: usize, secs: u16) {
    let timer_color = if secs <= TIMER_URGENT_SECS {
        Color::Red
    } else {
        Color::Yellow
    };
    let timer = Paragraph::new(format!("Time: {}", secs))
        .alignment(Alignment::Left)
        .fg(timer_color);
    frame.render_widget(timer, area);

    let progress = Paragraph::new(format!("{}/{}", number, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String; 4], app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, key) in OptionKey::ALL.into_iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = option_style(app, key, is_selected);
        let marker = if app.reveal().is_none() && is_selected {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", key.label()), style),
            Span::styled(options[index].as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// During the reveal the correct option is green and a wrong choice red;
/// otherwise the cursor highlights the selection.
fn option_style(app: &App, key: OptionKey, is_selected: bool) -> Style {
    if let Some(reveal) = app.reveal() {
        if key == reveal.correct_option {
            Style::default().fg(Color::Green).bold()
        } else if key == reveal.chosen {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    } else if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
