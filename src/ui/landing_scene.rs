//! The $SHOOKCAT landing page.

use crate::ui::game_common::{format_number_short, render_status_bar};
use flappycat::host::LandingPage;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const CAT: [&str; 4] = [r"  /\_/\  ", r" ( O.O ) ", r"  > ^ <  ", r" /|   |\ "];
const CAT_SHOOK: [&str; 4] = [r"  /\_/\   ", r" ( @.@ )~ ", r"  > ! <   ", r" \|   |/  "];

const STORY: &str = "Ziggy Meowla, a crypto-savvy cat, stumbles on a neon-lit casino ad: \
\"Turn 1 SOL into 10 SOL!\" Bet. He connects his wallet and starts raking in wins like a \
legend. Vibes immaculate. Then the withdraw button stops working.";

/// Page units per terminal cell when placing the dodging button.
const DODGE_UNITS_PER_COL: f64 = 10.0;
const DODGE_UNITS_PER_ROW: f64 = 50.0;

pub fn render_landing(frame: &mut Frame, area: Rect, page: &LandingPage, now: Instant) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // rug banner
            Constraint::Length(3), // title
            Constraint::Length(3), // loss counter + button
            Constraint::Length(5), // cat
            Constraint::Min(3),    // story
            Constraint::Length(2), // status bar
        ])
        .split(inner);

    if page.rug_banner_visible(now) {
        let banner = Paragraph::new(
            "🚨 BREAKING: ANOTHER CASINO RUG PULL JUST DROPPED FR FR NO CAP 🚨",
        )
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[0]);
    }

    let title = vec![
        Line::from(Span::styled(
            "$SHOOKCAT",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "absolutely shooketh 😱",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[1],
    );

    render_loss_counter(frame, chunks[2], page);
    render_cat(frame, chunks[3], page.is_shook(now));

    let story = vec![
        Line::from(Span::styled(
            "TL;DR: Crypto casinos are sus, even for cats. 🎰",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(STORY, Style::default().fg(Color::White))),
    ];
    frame.render_widget(
        Paragraph::new(story)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[4],
    );

    let controls: &[(&str, &str)] = if page.close_button_visible() {
        &[("[C/Click]", "Pet cat"), ("[X/Enter]", "Close Position"), ("[Q]", "Quit")]
    } else {
        &[("[C/Click]", "Pet cat"), ("[Q]", "Quit")]
    };
    render_status_bar(
        frame,
        chunks[5],
        "click me if ngmi 👆",
        Color::DarkGray,
        controls,
    );
}

fn render_loss_counter(frame: &mut Frame, area: Rect, page: &LandingPage) {
    if !page.close_button_visible() {
        let hint = Paragraph::new(Span::styled(
            "ser... you still have money? 👀",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, Rect { height: 1, ..area });
        return;
    }

    let counter = Paragraph::new(Span::styled(
        format!("SOL Rugged: {} 💀", format_number_short(page.money_lost)),
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(counter, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let label = " Close Position 🙏 ";
    let label_width = 19u16;
    let (dx, dy) = page.close_button_offset;
    let base_x = area.x as i32 + (area.width.saturating_sub(label_width) / 2) as i32;
    let max_x = (area.x + area.width.saturating_sub(label_width)) as i32;
    let x = (base_x + (dx / DODGE_UNITS_PER_COL).round() as i32).clamp(area.x as i32, max_x);
    let base_y = area.y as i32 + 1;
    let max_y = (area.y + area.height - 1) as i32;
    let y = (base_y + (dy / DODGE_UNITS_PER_ROW).round() as i32).clamp(base_y, max_y);

    let button = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        button,
        Rect::new(x as u16, y as u16, label_width.min(area.width), 1),
    );
}

fn render_cat(frame: &mut Frame, area: Rect, shook: bool) {
    let (art, color) = if shook {
        (CAT_SHOOK, Color::LightMagenta)
    } else {
        (CAT, Color::Yellow)
    };
    let lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
