//! Shared helpers for driving a session through whole turns.

#![allow(dead_code)]

use std::time::Duration;

use concentration::{CardId, GameConfig, GameSession, Notification};

pub type RecordingSession = GameSession<Vec<Notification>>;

pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);
pub const COMPLETION_DELAY: Duration = Duration::from_millis(500);

pub fn session_with(config: GameConfig, seed: u64) -> RecordingSession {
    GameSession::with_seed(config, Vec::new(), seed).expect("valid config")
}

pub fn default_session(seed: u64) -> RecordingSession {
    session_with(GameConfig::default(), seed)
}

/// Two levels of two and three pairs; small enough to clear by hand.
pub fn short_config() -> GameConfig {
    GameConfig {
        levels: vec![2, 3],
        ..GameConfig::default()
    }
}

pub fn partner_of(session: &RecordingSession, card: CardId) -> CardId {
    let symbol = &session.cards()[card.index()].symbol;
    session
        .cards()
        .iter()
        .find(|other| other.id != card && &other.symbol == symbol)
        .map(|other| other.id)
        .expect("every card has a partner")
}

/// A face-down pair.
pub fn hidden_pair(session: &RecordingSession) -> (CardId, CardId) {
    let first = session
        .cards()
        .iter()
        .find(|card| card.is_hidden())
        .map(|card| card.id)
        .expect("a hidden card");
    (first, partner_of(session, first))
}

/// Two face-down cards with different symbols.
pub fn hidden_mismatch(session: &RecordingSession) -> (CardId, CardId) {
    let (first, _) = hidden_pair(session);
    let symbol = &session.cards()[first.index()].symbol;
    let second = session
        .cards()
        .iter()
        .find(|card| card.is_hidden() && &card.symbol != symbol)
        .map(|card| card.id)
        .expect("at least two hidden pairs");
    (first, second)
}

pub fn match_next_pair(session: &mut RecordingSession) {
    let (a, b) = hidden_pair(session);
    assert!(session.activate_card(a));
    assert!(session.activate_card(b));
}

/// Matches every remaining pair without letting any time pass.
pub fn clear_level(session: &mut RecordingSession) {
    while session.cards().iter().any(|card| card.is_hidden()) {
        match_next_pair(session);
    }
}

pub fn take_notifications(session: &mut RecordingSession) -> Vec<Notification> {
    std::mem::take(session.presenter_mut())
}
