//! Line-oriented terminal front end.
//!
//! Translates typed commands into clicks and session controls, redraws the
//! board after every transition, and waits out the reply delay so the human
//! move is on screen before the automated reply lands.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use crate::game_state::chess_types::Square;
use crate::session::game_session::GameSession;
use crate::session::selection::ClickOutcome;
use crate::session::session_config::SessionConfig;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::long_algebraic::long_algebraic_to_move;

const HELP_TEXT: &str = "\
commands:
  click <row> <col>   click a square by row (0 = rank 8) and column (0 = file a)
  <square>            click a square by name, e.g. e2
  move <from><to>     click twice, e.g. move e2e3
  new                 start a new game
  undo                take back one move
  board               redraw the board
  fen                 print the position
  position <fen>      load a position (board and side to move)
  setoption name <N> value <V>
                      ReplyDelay, AutomatedSide, Seed, Debug, LogCapacity
  log                 print the session log
  help                show this text
  quit                leave";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(config);

    terminal.redraw(&mut stdout)?;
    terminal.wait_for_reply(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
        terminal.wait_for_reply(&mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

pub struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: GameSession::new(config),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one input line. Returns `true` when the user asked to quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        let now = Instant::now();

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => self.redraw(out)?,
            "fen" => writeln!(out, "{}", self.session.game_state().get_fen())?,
            "log" => {
                for entry in self.session.log().entries() {
                    writeln!(out, "{}", entry.format_line())?;
                }
                self.session.log_mut().drain_unread();
            }
            "new" => {
                self.session.new_game(now);
                self.redraw(out)?;
            }
            "undo" => {
                if !self.session.undo() {
                    writeln!(out, "nothing to undo")?;
                }
                self.redraw(out)?;
            }
            "click" => match parse_row_col(&rest) {
                Ok(square) => {
                    let outcome = self.session.click(square, now);
                    self.report_click(outcome, out)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "move" => match rest.first().map(|s| long_algebraic_to_move(s)) {
                Some(Ok(mv)) => {
                    let outcome = self.session.play_move(mv, now);
                    self.report_click(outcome, out)?;
                }
                Some(Err(e)) => writeln!(out, "error: {e}")?,
                None => writeln!(out, "error: move needs an argument such as e2e3")?,
            },
            "position" => match self.session.load_position(&rest.join(" "), now) {
                Ok(()) => self.redraw(out)?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "setoption" => match parse_setoption(&rest) {
                Ok((name, value)) => {
                    if let Err(e) = self.session.set_option(&name, &value, now) {
                        writeln!(out, "error: {e}")?;
                    }
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            _ => match algebraic_to_square(command) {
                Ok(square) if rest.is_empty() => {
                    let outcome = self.session.click(square, now);
                    self.report_click(outcome, out)?;
                }
                _ => writeln!(out, "error: unknown command '{trimmed}' (try help)")?,
            },
        }

        self.flush_log(out)?;
        Ok(false)
    }

    /// Sleep until a pending reply is due, then let it play and redraw.
    pub fn wait_for_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(wait) = self.session.reply_wait(Instant::now()) else {
            return Ok(());
        };
        thread::sleep(wait);

        if let Some(mv) = self.session.poll(Instant::now()) {
            writeln!(out, "reply {mv}")?;
            self.redraw(out)?;
        }
        self.flush_log(out)
    }

    pub fn redraw(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.session.render())
    }

    fn report_click(&self, outcome: ClickOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            ClickOutcome::Selected(square) => {
                let targets: Vec<String> = self
                    .session
                    .snapshot()
                    .highlighted
                    .into_iter()
                    .map(square_to_algebraic)
                    .collect();
                writeln!(
                    out,
                    "selected {} -> [{}]",
                    square_to_algebraic(square),
                    targets.join(" ")
                )?;
                self.redraw(out)
            }
            ClickOutcome::Moved(mv) => {
                writeln!(out, "moved {mv}")?;
                self.redraw(out)
            }
            ClickOutcome::Deselected => {
                writeln!(out, "selection cleared")?;
                self.redraw(out)
            }
            ClickOutcome::Ignored => Ok(()),
        }
    }

    fn flush_log(&mut self, out: &mut impl Write) -> io::Result<()> {
        let entries = self.session.log_mut().drain_unread();
        if self.session.config().debug {
            for entry in entries {
                writeln!(out, "{}", entry.format_line())?;
            }
        }
        Ok(())
    }
}

fn parse_row_col(args: &[&str]) -> Result<Square, String> {
    let [row, col] = args else {
        return Err("click needs a row and a column".to_owned());
    };
    let row = row
        .parse::<u8>()
        .map_err(|_| format!("Invalid row: {row}"))?;
    let col = col
        .parse::<u8>()
        .map_err(|_| format!("Invalid column: {col}"))?;
    Square::new(row, col).ok_or_else(|| format!("Square ({row}, {col}) is off the board"))
}

fn parse_setoption(args: &[&str]) -> Result<(String, String), String> {
    let name_pos = args
        .iter()
        .position(|a| a.eq_ignore_ascii_case("name"))
        .ok_or("setoption needs 'name'")?;
    let value_pos = args
        .iter()
        .position(|a| a.eq_ignore_ascii_case("value"))
        .ok_or("setoption needs 'value'")?;
    if value_pos <= name_pos + 1 {
        return Err("setoption needs an option name before 'value'".to_owned());
    }

    let name = args[name_pos + 1..value_pos].join(" ");
    let value = args[value_pos + 1..].join(" ");
    Ok((name, value))
}
