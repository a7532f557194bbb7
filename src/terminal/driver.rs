use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::board::TerminalPresenter;
use super::command::Command;
use crate::game::{CardId, GameSession};

const PROMPT: &str = "> ";
const HELP: &str = "\
Flip two cards per turn by typing their numbers, one per line.
  n, next     go to the next level once this one is cleared
  r, restart  start over from level 1
  h, help     show this help
  q, quit     leave the game";

/// Source of wall-clock time for the driver loop.
pub trait Clock {
    /// Time passed since the previous call (or since creation).
    fn elapsed(&mut self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Plays `session` from line-based `input` until end of input or `quit`.
pub fn run<R, W, C>(
    session: &mut GameSession<TerminalPresenter>,
    input: R,
    output: &mut W,
    clock: &mut C,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    redraw(session, output)?;

    for line in input.lines() {
        let line = line?;
        session.advance(clock.elapsed());

        match line.parse::<Command>() {
            Ok(Command::Quit) => {
                info!(level = session.level(), "player quit");
                break;
            }
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Card(position)) => {
                if !session.activate_card(CardId(position - 1)) {
                    writeln!(output, "Card {position} can't be flipped right now.")?;
                }
            }
            Ok(Command::Next) => {
                if session.presenter().banner().is_none() {
                    writeln!(output, "Clear this level first.")?;
                } else if let Err(err) = session.advance_level() {
                    writeln!(output, "{err}")?;
                }
            }
            Ok(Command::Restart) => session.restart(),
            Err(err) => writeln!(output, "{err}")?,
        }

        settle(session, output, clock)?;
        redraw(session, output)?;
    }
    Ok(())
}

/// Shows the board while a hide or announcement is pending, then waits it out.
fn settle<W: Write, C: Clock>(
    session: &mut GameSession<TerminalPresenter>,
    output: &mut W,
    clock: &mut C,
) -> io::Result<()> {
    while let Some(wait) = session.next_delay_in() {
        session.presenter().render(output)?;
        debug!(?wait, "waiting for pending delay");
        clock.sleep(wait);
        session.advance(clock.elapsed().max(wait));
    }
    Ok(())
}

fn redraw<W: Write>(session: &GameSession<TerminalPresenter>, output: &mut W) -> io::Result<()> {
    session.presenter().render(output)?;
    write!(output, "{PROMPT}")?;
    output.flush()
}
