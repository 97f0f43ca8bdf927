//! Stateless render functions for each visible pane

use crate::calc::engine::Calculator;
use crate::history::EventFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the calculator display: memory indicators, the upper operand line,
/// and the operator/lower line.
pub fn render_display_pane(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let block = Block::default()
        .title(" display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let indicator_style = Style::default().fg(DEFAULT_THEME.comment);
    let occupied_style = Style::default().fg(DEFAULT_THEME.success);
    let memory_line = Line::from(vec![
        Span::styled(
            if calc.memory1_occupied() { "◉ " } else { "◯ " },
            if calc.memory1_occupied() {
                occupied_style
            } else {
                indicator_style
            },
        ),
        Span::styled(
            calc.memory1_text().unwrap_or(""),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::raw("   "),
        Span::styled(
            if calc.memory2_occupied() { "◉ " } else { "◯ " },
            if calc.memory2_occupied() {
                occupied_style
            } else {
                indicator_style
            },
        ),
        Span::styled(
            calc.memory2_text().unwrap_or(""),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let value_style = if calc.has_error() {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    };

    let width = block.inner(area).width as usize;
    let upper = calc.upper_text();
    let upper_line = Line::from(Span::styled(
        format!("{:>width$}", upper, width = width.saturating_sub(1)),
        value_style,
    ));

    let lower = format!("{} {}", calc.operator_token(), calc.lower_text());
    let lower_line = Line::from(vec![Span::styled(
        format!("{:>width$}", lower, width = width.saturating_sub(1)),
        Style::default().fg(DEFAULT_THEME.fg),
    )]);

    let paragraph = Paragraph::new(vec![memory_line, Line::default(), upper_line, lower_line])
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}

/// Render the keypad legend mapping keys to operations.
pub fn render_keypad_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let key_style = Style::default().fg(DEFAULT_THEME.primary);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);
    let legend = [
        ("0-9 .", "digits"),
        ("+ - * /", "add sub mul div"),
        ("^ l m", "power log mod"),
        ("r ! i", "sqrt factorial 1/x"),
        ("M W", "memory store/recall"),
        ("e s", "exponent, sign"),
        ("enter", "equals"),
        ("del", "clear"),
        ("bksp", "undo"),
        ("esc", "quit"),
    ];
    let lines: Vec<Line> = legend
        .iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<8}", keys), key_style),
                Span::styled(*desc, desc_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}

/// Render the event log: one line per frame, baseline then event codes,
/// newest at the bottom.
pub fn render_history_pane(frame: &mut Frame, area: Rect, frames: &[EventFrame]) {
    let block = Block::default()
        .title(" history ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let visible = block.inner(area).height as usize;
    let skip = frames.len().saturating_sub(visible);
    let lines: Vec<Line> = frames
        .iter()
        .skip(skip)
        .map(|f| {
            let baseline = if f.baseline.is_empty() {
                "·"
            } else {
                f.baseline.as_str()
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", baseline),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled("⊢ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(f.events.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, frame_count: usize) {
    let left = vec![
        Span::styled(
            format!(" frame {} ", frame_count),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let paragraph = Paragraph::new(Line::from(left))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
