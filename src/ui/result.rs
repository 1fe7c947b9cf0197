use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::OptionKey;

const QUESTION_PREVIEW_LENGTH: usize = 45;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let score = session.score();
    let total = session.total();
    let percentage = calculate_percentage(score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], app, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let Some(session) = app.session() else {
        return;
    };

    let lines: Vec<Line> = session
        .plan()
        .iter()
        .zip(session.answers().iter())
        .enumerate()
        .filter_map(|(position, (&bank_index, answer))| {
            let question = app.bank().get(bank_index)?;
            let is_correct = *answer == Some(question.correct);
            let (symbol, color) = if is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", position + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.text),
                    Style::default().fg(Color::Gray),
                ),
            ];
            spans.push(Span::styled(
                outcome_note(*answer, question.correct),
                Style::default().fg(Color::DarkGray),
            ));

            Some(Line::from(spans))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn outcome_note(answer: Option<OptionKey>, correct: OptionKey) -> String {
    match answer {
        None => format!("  · timed out, answer {}", correct.label()),
        Some(chosen) if chosen != correct => {
            format!("  · you {}, answer {}", chosen.label(), correct.label())
        }
        Some(_) => String::new(),
    }
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r new session  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_handles_empty_session() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
        assert_eq!(calculate_percentage(1, 2), 50.0);
    }

    #[test]
    fn test_outcome_note_variants() {
        assert_eq!(outcome_note(Some(OptionKey::A), OptionKey::A), "");
        assert!(outcome_note(None, OptionKey::C).contains("timed out"));
        assert!(outcome_note(Some(OptionKey::B), OptionKey::A).contains("you B"));
    }
}
