//! UI rendering for the Flappy Cat game.

use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use flappycat::core::constants::*;
use flappycat::game::{CatGame, TerminalCause};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the game scene.
pub fn render_cat_game(frame: &mut Frame, area: Rect, game: &CatGame) {
    let layout = create_game_layout(frame, area, " Flappy Cat ", Color::Magenta, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.is_terminal() {
        render_game_over(frame, layout.content, game);
    } else if game.score == 0 {
        render_instructions(frame, layout.content);
    }
}

/// What occupies a play-field cell.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Cat,
    Pipe,
}

/// Sample the field at the center of display cell (`col`, `row`).
fn cell_at(game: &CatGame, col: usize, row: usize, width: usize, height: usize) -> Cell {
    let fx = (col as f64 + 0.5) * FIELD_WIDTH / width as f64;
    let fy = (row as f64 + 0.5) * FIELD_HEIGHT / height as f64;

    let cat_y = game.player.y;
    if fx >= PLAYER_LEFT
        && fx < PLAYER_LEFT + PLAYER_SIZE
        && fy >= cat_y
        && fy < cat_y + PLAYER_SIZE
    {
        return Cell::Cat;
    }

    let is_pipe = game
        .obstacles
        .iter()
        .any(|o| fx >= o.x && fx < o.x + OBSTACLE_WIDTH && o.blocks(fy));
    if is_pipe {
        Cell::Pipe
    } else {
        Cell::Empty
    }
}

/// Render the play field with the cat and the pipes, scaled to the area.
fn render_play_area(frame: &mut Frame, area: Rect, game: &CatGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let cat_style = if game.is_terminal() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let pipe_color = if row < height / 2 {
            Color::Magenta
        } else {
            Color::LightMagenta
        };
        let spans: Vec<Span> = (0..width)
            .map(|col| match cell_at(game, col, row, width, height) {
                Cell::Cat => Span::styled("▓", cat_style),
                Cell::Pipe => Span::styled("█", Style::default().fg(pipe_color)),
                Cell::Empty => Span::raw(" "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &CatGame) {
    if game.is_terminal() {
        render_status_bar(
            frame,
            area,
            &format!("NGMI. Final score: {}", game.score),
            Color::Red,
            &[("[Enter/Esc]", "Back to Copium"), ("[R]", "Retry"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::LightMagenta,
            &[("[Space/Up/Click]", "Jump"), ("[Q]", "Quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &CatGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let (status_text, status_color) = match game.terminal_cause() {
        None => ("Vibing", Color::Green),
        Some(TerminalCause::Ceiling) => ("Hit the ceiling", Color::Red),
        Some(TerminalCause::Floor) => ("Hit the floor", Color::Red),
        Some(TerminalCause::Obstacle) => ("Hit a pipe", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            " $SHOOKCAT ",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{}", game.obstacles.len()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(
                format!("{:.0}", FLOOR_Y - game.player.y),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", status_text),
            Style::default().fg(status_color),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_instructions(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Click anywhere to jump!",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Don't hit the pipes or you're NGMI",
            Style::default().fg(Color::White),
        )),
    ];
    render_modal(frame, area, Color::DarkGray, lines, 40);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &CatGame) {
    let lines = vec![
        Line::from(Span::styled(
            "NGMI 💀",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", game.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Back to Copium  ", Style::default().fg(Color::Magenta)),
            Span::styled("[R]", Style::default().fg(Color::White)),
            Span::styled(" Retry", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_modal(frame, area, Color::LightMagenta, lines, 36);
}
