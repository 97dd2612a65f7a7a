#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to u16 since board dimensions are always small enough to fit in u16
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss
)]

use std::collections::HashSet;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::{Board, Cursor, Dock, FloatingScore, GameState};
use crate::config::{self, Config};
use crate::theme::Theme;

// Each board cell is 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;
const DOCK_SLOT_WIDTH: u16 = 8;
const DOCK_HEIGHT: u16 = 5;
const MIN_INFO_WIDTH: u16 = 22;

pub fn render(f: &mut Frame, app: &mut App) {
    let config = config::current();

    let board_size = app.world.resource::<Board>().size as u16;
    let board_width = board_size * CELL_WIDTH + 2; // +2 for borders
    let board_height = board_size + 2;
    let min_total_width = board_width + MIN_INFO_WIDTH;
    let min_total_height = 2 + board_height + DOCK_HEIGHT;

    // Terminal too small to lay the game out properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("blockdock - paused"),
        );
        let warning_area = centered_rect(30, 6, f.area());
        f.render_widget(warning, warning_area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Min(MIN_INFO_WIDTH),
        ])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Length(DOCK_HEIGHT),  // Dock
            Constraint::Min(0),
        ])
        .split(main_layout[0]);

    let title = Paragraph::new("BLOCKDOCK")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_board(f, app, game_layout[1], &config);
    render_dock(f, app, game_layout[2], config.theme);
    render_info(f, app, main_layout[1], config.theme);
    render_floating_scores(f, app, game_layout[1]);

    if app.world.resource::<GameState>().game_over {
        render_game_over(f, app);
    }
}

/// Footprint of the selected piece at the cursor, restricted to the board,
/// plus whether the whole placement would be legal.
fn preview_cells(app: &App) -> (HashSet<(usize, usize)>, bool) {
    let board = app.world.resource::<Board>();
    let dock = app.world.resource::<Dock>();
    let cursor = app.world.resource::<Cursor>();

    let mut cells = HashSet::new();
    let Some(piece) = dock.pieces().get(cursor.selected) else {
        return (cells, false);
    };

    let legal = board.can_place(piece, cursor.row, cursor.col);
    let size = board.size as i32;
    for &(dr, dc) in piece.cells() {
        let r = cursor.row + dr;
        let c = cursor.col + dc;
        if r >= 0 && r < size && c >= 0 && c < size {
            cells.insert((r as usize, c as usize));
        }
    }

    (cells, legal)
}

fn render_board(f: &mut Frame, app: &mut App, area: Rect, config: &Config) {
    let theme = config.theme;
    let game_over = app.world.resource::<GameState>().game_over;
    let (preview, legal) = if game_over {
        (HashSet::new(), false)
    } else {
        preview_cells(app)
    };

    let board = app.world.resource::<Board>();
    let mut lines = Vec::with_capacity(board.size);

    for row in 0..board.size {
        let mut spans = Vec::with_capacity(board.size);
        for col in 0..board.size {
            let span = if let Some(color) = board.cell(row, col) {
                Span::styled("██", Style::default().fg(theme.block_color(color)))
            } else if preview.contains(&(row, col)) {
                let color = if legal {
                    theme.preview_color()
                } else {
                    Color::Red
                };
                Span::styled("▒▒", Style::default().fg(color))
            } else if config.show_grid {
                Span::styled("··", Style::default().fg(theme.grid_color()))
            } else {
                Span::raw("  ")
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_dock(f: &mut Frame, app: &mut App, area: Rect, theme: Theme) {
    let dock = app.world.resource::<Dock>();
    let cursor = app.world.resource::<Cursor>();

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(DOCK_SLOT_WIDTH),
            Constraint::Length(DOCK_SLOT_WIDTH),
            Constraint::Length(DOCK_SLOT_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, piece) in dock.pieces().iter().enumerate().take(3) {
        let border_style = if index == cursor.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(theme.grid_color())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{}", index + 1));

        let (rows, cols) = piece.bounds();
        let occupied: HashSet<(i32, i32)> = piece.cells().iter().copied().collect();
        let mut lines = Vec::with_capacity(rows as usize);
        for r in 0..rows {
            let mut spans = Vec::with_capacity(cols as usize);
            for c in 0..cols {
                if occupied.contains(&(r, c)) {
                    spans.push(Span::styled(
                        "██",
                        Style::default().fg(theme.block_color(piece.color)),
                    ));
                } else {
                    spans.push(Span::raw("  "));
                }
            }
            lines.push(Line::from(spans));
        }

        let widget = Paragraph::new(lines).block(block);
        f.render_widget(widget, slots[index]);
    }
}

fn render_info(f: &mut Frame, app: &mut App, area: Rect, theme: Theme) {
    let state = app.world.resource::<GameState>();

    let status = if state.game_over { "Game over" } else { "Playing" };
    let text = format!(
        "Score: {}\nBest:  {}\n\nStatus: {status}\nTheme:  {theme:?}\n\n\
         1-3/Tab  select piece\narrows   move\nEnter    place\nr        restart\nt        theme\nq        quit",
        state.score, state.best_score
    );

    let info = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("INFO"));
    f.render_widget(info, area);
}

fn render_floating_scores(f: &mut Frame, app: &mut App, board_area: Rect) {
    let inner_x = board_area.x + 1;
    let inner_y = board_area.y + 1;

    let popups: Vec<(u16, u16, u32)> = {
        let mut query = app.world.query::<&FloatingScore>();
        query
            .iter(&app.world)
            .map(|popup| (popup.row as u16, popup.col as u16, popup.points))
            .collect()
    };

    for (row, col, points) in popups {
        let text = format!("+{points}");
        let width = text.len() as u16;
        let x = inner_x + col * CELL_WIDTH;
        let y = inner_y + row;
        if x + width > f.area().width || y >= f.area().height {
            continue;
        }
        let popup_area = Rect::new(x, y, width, 1);
        let widget =
            Paragraph::new(text).style(Style::default().fg(Color::White).bold());
        f.render_widget(widget, popup_area);
    }
}

fn render_game_over(f: &mut Frame, app: &mut App) {
    let state = app.world.resource::<GameState>();
    let text = format!(
        "GAME OVER\n\nScore: {}\nBest:  {}\n\nPress r to restart",
        state.score, state.best_score
    );

    let area = centered_rect(26, 8, f.area());
    f.render_widget(Clear, area);
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// A `width` x `height` rect centered inside `r`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}
