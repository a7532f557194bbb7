//! Game core: deck generation, the flip/match state machine, the elapsed
//! timer and level progression.
//!
//! Nothing in here touches a clock or a screen. Time is fed in through
//! [`GameSession::advance`] and every state change is reported to a
//! [`Presenter`].

pub mod config;
pub mod deck;
pub mod error;
pub mod presenter;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod timer;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use presenter::{Notification, Presenter};
pub use scheduler::{Scheduler, TaskId};
pub use session::GameSession;
pub use state::{Card, CardId, ComparisonPhase, Face, LevelOutcome, Selection, SessionStats};
pub use timer::{ElapsedTimer, TimerState, format_mm_ss};
