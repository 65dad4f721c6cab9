use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};

use eight_puzzle::{Board, Step, ROW};

const RULE: &str = "+---+---+---+\n";

/// Draws `board` as an ASCII grid. Tiles already on their goal cell are green.
pub fn board(out: &mut impl Write, board: &Board, goal: &Board) -> io::Result<()> {
    queue!(out, Print(RULE))?;

    for row in 0..ROW {
        queue!(out, Print("|"))?;
        for col in 0..ROW {
            let tile = board.tile_at(row, col);
            if tile == 0 {
                queue!(out, Print("   "))?;
            } else if tile == goal.tile_at(row, col) {
                queue!(out, PrintStyledContent(format!(" {} ", tile).green()))?;
            } else {
                queue!(out, Print(format!(" {} ", tile)))?;
            }
            queue!(out, Print("|"))?;
        }
        queue!(out, Print("\n"), Print(RULE))?;
    }

    Ok(())
}

pub fn step(out: &mut impl Write, step: &Step, goal: &Board) -> io::Result<()> {
    match step.movement {
        Some(movement) => queue!(out, PrintStyledContent(format!("{}\n", movement).bold()))?,
        None => queue!(out, PrintStyledContent("Start\n".bold()))?,
    }
    board(out, &step.board, goal)?;
    queue!(out, Print("\n"))?;
    out.flush()
}
