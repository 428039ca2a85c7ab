//! Line-oriented console front-end.
//!
//! Each input line is either a square (`e2` or `6 4`) fed to the turn
//! controller as a click, or one of the commands `x`/`cancel`, `board` and
//! `quit`. Promotion choices are read from the same input stream.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::turn_control::game_status::GameStatus;
use crate::turn_control::promotion_prompt::{parse_promotion_answer, PromotionPrompt};
use crate::turn_control::turn_controller::{ClickOutcome, TurnController};
use crate::utils::algebraic::parse_square_input;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Draw pieces with Unicode chess glyphs instead of FEN letters.
    pub unicode: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

pub fn run_stdio_loop(controller: TurnController, config: ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(controller, &mut stdin.lock(), &mut stdout, config).map(|_| ())
}

/// Drives `controller` from `input` until `quit` or end of input, returning
/// the controller in its final state.
pub fn run_console<R: BufRead, W: Write>(
    controller: TurnController,
    input: &mut R,
    out: &mut W,
    config: ConsoleConfig,
) -> io::Result<TurnController> {
    let mut console = ConsoleState { controller, config };
    console.print_board(out)?;

    let mut line = String::new();
    loop {
        console.print_prompt(out)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if console.handle_command(&line, input, out)? {
            break;
        }
    }

    out.flush()?;
    Ok(console.controller)
}

struct ConsoleState {
    controller: TurnController,
    config: ConsoleConfig,
}

impl ConsoleState {
    fn handle_command<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "x" | "cancel" => {
                if self.controller.cancel_selection() {
                    writeln!(out, "selection cleared")?;
                } else {
                    writeln!(out, "nothing selected")?;
                }
                return Ok(false);
            }
            "board" => {
                self.print_board(out)?;
                return Ok(false);
            }
            _ => {}
        }

        let square = match parse_square_input(trimmed) {
            Ok(square) => square,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(false);
            }
        };

        let mover = self.controller.turn();
        let mut prompt = ConsolePromotionPrompt {
            input,
            out: &mut *out,
            io_error: None,
        };
        let outcome = self.controller.click(square, &mut prompt);
        if let Some(err) = prompt.io_error.take() {
            return Err(err);
        }

        self.report(outcome, square, mover, out)?;
        Ok(false)
    }

    fn report<W: Write>(
        &self,
        outcome: ClickOutcome,
        square: Square,
        mover: Color,
        out: &mut W,
    ) -> io::Result<()> {
        match outcome {
            ClickOutcome::Ignored if self.controller.status().is_over() => {
                writeln!(out, "the game is over")?;
            }
            ClickOutcome::Ignored => {
                writeln!(out, "no {mover} piece on {square}")?;
            }
            ClickOutcome::Selected(from) => {
                self.print_board(out)?;
                let count = self.controller.candidates().map_or(0, |moves| moves.len());
                writeln!(out, "selected {from}: {count} candidate move(s)")?;
            }
            ClickOutcome::Deselected => {
                writeln!(out, "selection cleared")?;
            }
            ClickOutcome::Moved(played) => {
                self.print_board(out)?;
                match played.promotion {
                    Some(kind) => writeln!(
                        out,
                        "{mover} played {}-{} promoting to {kind}",
                        played.from, played.to
                    )?,
                    None => writeln!(out, "{mover} played {}-{}", played.from, played.to)?,
                }
                self.print_status(out)?;
            }
            ClickOutcome::Rejected { reason, reselected } => {
                writeln!(out, "illegal move: {reason}")?;
                if let Some(from) = reselected {
                    self.print_board(out)?;
                    writeln!(out, "selected {from}")?;
                }
            }
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let turn = self.controller.turn();
        match self.controller.status() {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Check => writeln!(out, "{turn} is in check"),
            GameStatus::Checkmate => {
                writeln!(out, "checkmate, {} wins", turn.opposite())
            }
            GameStatus::Stalemate => writeln!(out, "stalemate"),
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rendered = render_board(
            self.controller.board(),
            self.controller.selected_square(),
            self.controller.candidates(),
            self.config.unicode,
        );
        writeln!(out, "{rendered}")
    }

    fn print_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.controller.status().is_over() {
            write!(out, "game over> ")
        } else {
            write!(out, "{} to move> ", self.controller.turn())
        }
    }
}

/// Asks for the promotion piece on the console's own streams.
///
/// Unknown answers are asked again; end of input cancels. An I/O error also
/// cancels and is kept for the caller to surface.
struct ConsolePromotionPrompt<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
    io_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsolePromotionPrompt<'_, R, W> {
    fn ask(&mut self, color: Color, square: Square) -> io::Result<Option<PieceKind>> {
        let mut answer = String::new();
        loop {
            write!(
                self.out,
                "promote {color} pawn on {square} to [N]ight, [B]ishop, [R]ook, [Q]ueen or [C]ancel: "
            )?;
            self.out.flush()?;

            answer.clear();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(None);
            }
            match parse_promotion_answer(&answer) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.out, "please answer N, B, R, Q or C")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PromotionPrompt for ConsolePromotionPrompt<'_, R, W> {
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<PieceKind> {
        match self.ask(color, square) {
            Ok(choice) => choice,
            Err(err) => {
                warn!(%err, "promotion prompt failed");
                self.io_error = Some(err);
                None
            }
        }
    }
}
