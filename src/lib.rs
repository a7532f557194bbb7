//! Concentration: flip two cards at a time, find every pair, clear the levels.
//!
//! [`game`] holds the whole rule set behind a [`Presenter`](game::Presenter)
//! seam; [`terminal`] is a small text front end built on top of it.

pub mod game;
pub mod terminal;

pub use game::{
    Card, CardId, ConfigError, Face, GameConfig, GameError, GameSession, Notification, Presenter,
};
