use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl Face {
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Hidden => "hidden",
            Face::Revealed => "revealed",
            Face::Matched => "matched",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub symbol: String,
    pub face: Face,
}

impl Card {
    pub fn is_hidden(&self) -> bool {
        self.face == Face::Hidden
    }

    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}

/// Per-level counters. `elapsed_seconds` only moves while the timer runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub moves: u32,
    pub matched_pairs: usize,
    pub elapsed_seconds: u32,
}

/// Cards picked in the current comparison.
///
/// `input_locked` is only ever true while a mismatched pair waits to be
/// hidden again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub first_pick: Option<CardId>,
    pub second_pick: Option<CardId>,
    pub input_locked: bool,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    pub fn phase(&self) -> ComparisonPhase {
        if self.input_locked {
            ComparisonPhase::LockedMismatch
        } else if self.first_pick.is_some() {
            ComparisonPhase::OneRevealed
        } else {
            ComparisonPhase::Idle
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonPhase {
    Idle,
    OneRevealed,
    LockedMismatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LevelOutcome {
    #[default]
    Playing,
    /// Every pair found; the announcement is still pending.
    Completed,
    Announced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_phase_follows_picks_and_lock() {
        let mut selection = Selection::default();
        assert_eq!(selection.phase(), ComparisonPhase::Idle);

        selection.first_pick = Some(CardId(3));
        assert_eq!(selection.phase(), ComparisonPhase::OneRevealed);

        selection.second_pick = Some(CardId(5));
        selection.input_locked = true;
        assert_eq!(selection.phase(), ComparisonPhase::LockedMismatch);

        selection.clear();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn a_card_never_pairs_with_itself() {
        let card = Card {
            id: CardId(0),
            symbol: "moon".to_string(),
            face: Face::Hidden,
        };
        let twin = Card {
            id: CardId(1),
            ..card.clone()
        };
        assert!(!card.pairs_with(&card));
        assert!(card.pairs_with(&twin));
    }
}
