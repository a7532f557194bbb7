//! Outbound notifications from the session to whatever draws the game.

use super::state::{Card, CardId, Face};

/// Receives every visible state change of a [`GameSession`](super::GameSession).
///
/// Calls arrive synchronously, in the order the changes happen. Times are
/// preformatted as `MM:SS`.
pub trait Presenter {
    fn level_started(&mut self, level: usize, level_count: usize, pair_count: usize);

    /// A fresh face-down deck and the suggested number of grid columns.
    fn deck_initialized(&mut self, cards: &[Card], grid_columns: usize);

    fn card_state_changed(&mut self, card: CardId, face: Face);

    fn moves_changed(&mut self, moves: u32);

    fn pairs_changed(&mut self, matched: usize, total: usize);

    fn time_changed(&mut self, elapsed: &str);

    fn level_complete(&mut self, moves: u32, elapsed: &str, has_next_level: bool);

    fn game_complete(&mut self, moves: u32, elapsed: &str);
}

/// A recorded [`Presenter`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    LevelStarted {
        level: usize,
        level_count: usize,
        pair_count: usize,
    },
    DeckInitialized {
        symbols: Vec<String>,
        grid_columns: usize,
    },
    CardStateChanged {
        card: CardId,
        face: Face,
    },
    MovesChanged(u32),
    PairsChanged {
        matched: usize,
        total: usize,
    },
    TimeChanged(String),
    LevelComplete {
        moves: u32,
        time: String,
        has_next_level: bool,
    },
    GameComplete {
        moves: u32,
        time: String,
    },
}

impl Presenter for Vec<Notification> {
    fn level_started(&mut self, level: usize, level_count: usize, pair_count: usize) {
        self.push(Notification::LevelStarted {
            level,
            level_count,
            pair_count,
        });
    }

    fn deck_initialized(&mut self, cards: &[Card], grid_columns: usize) {
        self.push(Notification::DeckInitialized {
            symbols: cards.iter().map(|card| card.symbol.clone()).collect(),
            grid_columns,
        });
    }

    fn card_state_changed(&mut self, card: CardId, face: Face) {
        self.push(Notification::CardStateChanged { card, face });
    }

    fn moves_changed(&mut self, moves: u32) {
        self.push(Notification::MovesChanged(moves));
    }

    fn pairs_changed(&mut self, matched: usize, total: usize) {
        self.push(Notification::PairsChanged { matched, total });
    }

    fn time_changed(&mut self, elapsed: &str) {
        self.push(Notification::TimeChanged(elapsed.to_string()));
    }

    fn level_complete(&mut self, moves: u32, elapsed: &str, has_next_level: bool) {
        self.push(Notification::LevelComplete {
            moves,
            time: elapsed.to_string(),
            has_next_level,
        });
    }

    fn game_complete(&mut self, moves: u32, elapsed: &str) {
        self.push(Notification::GameComplete {
            moves,
            time: elapsed.to_string(),
        });
    }
}
