use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Piece};

/// Screen position of a cell, with row 0 on the origin line. Rows that do not
/// fit above the origin are clamped to the top of the terminal.
fn cell_position((origin_x, origin_y): (u16, u16), row: usize, column: usize) -> (u16, u16) {
    let clamp = |n: usize| n.min(u16::MAX as usize) as u16;
    (
        origin_x.saturating_add(clamp(column)),
        origin_y.saturating_sub(clamp(row)),
    )
}

/// Draws the board at the cursor, top row first, with column numbers above
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..board.rows() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let (pos_x, pos_y) = cell_position((origin_x, origin_y), row, column);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, column) {
                            Piece::Player => Color::Red,
                            Piece::Ai => Color::Yellow,
                            Piece::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(cell_position((origin_x, origin_y), 0, board.columns()).0, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
