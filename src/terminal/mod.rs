//! Plain-text front end: a board that redraws from session notifications, a
//! line-based command parser and the loop that ties them to stdin/stdout.

pub mod board;
pub mod command;
pub mod driver;

pub use board::{Banner, TerminalPresenter};
pub use command::{Command, CommandError};
pub use driver::{Clock, SystemClock, run};
