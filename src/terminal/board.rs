use std::io::{self, Write};

use crate::game::{Card, CardId, Face, Presenter, format_mm_ss};

const CELL_PADDING: usize = 2;

#[derive(Clone, Debug)]
struct CardView {
    symbol: String,
    face: Face,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    LevelComplete { level: usize, moves: u32, time: String },
    GameComplete { moves: u32, time: String },
}

/// Text board kept in sync from session notifications.
#[derive(Clone, Debug)]
pub struct TerminalPresenter {
    cards: Vec<CardView>,
    columns: usize,
    level: usize,
    level_count: usize,
    moves: u32,
    matched: usize,
    total: usize,
    time: String,
    banner: Option<Banner>,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        TerminalPresenter {
            cards: Vec::new(),
            columns: 4,
            level: 1,
            level_count: 1,
            moves: 0,
            matched: 0,
            total: 0,
            time: format_mm_ss(0),
            banner: None,
        }
    }
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn status_line(&self) -> String {
        format!(
            "Level {}/{} | Moves {} | Pairs {}/{} | {}",
            self.level, self.level_count, self.moves, self.matched, self.total, self.time
        )
    }

    fn cell_label(position: usize, card: &CardView) -> String {
        match card.face {
            Face::Hidden => position.to_string(),
            Face::Revealed => card.symbol.clone(),
            Face::Matched => format!("[{}]", card.symbol),
        }
    }

    fn cell_width(&self) -> usize {
        let widest_symbol = self
            .cards
            .iter()
            .map(|card| card.symbol.chars().count() + 2)
            .max()
            .unwrap_or(0);
        let widest_number = self.cards.len().to_string().len();
        widest_symbol.max(widest_number) + CELL_PADDING
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.status_line())?;

        let width = self.cell_width();
        let columns = self.columns.max(1);
        for (row_idx, cards) in self.cards.chunks(columns).enumerate() {
            let mut line = String::new();
            for (col_idx, card) in cards.iter().enumerate() {
                let position = row_idx * columns + col_idx + 1;
                line.push_str(&format!(
                    "{:^width$}",
                    Self::cell_label(position, card),
                    width = width
                ));
            }
            writeln!(out, "{}", line.trim_end())?;
        }

        match &self.banner {
            Some(Banner::LevelComplete { level, moves, time }) => writeln!(
                out,
                "Level {level} complete! Moves: {moves}, Time: {time}. Type 'n' for the next level or 'r' to start over."
            )?,
            Some(Banner::GameComplete { moves, time }) => writeln!(
                out,
                "Game beaten! Moves: {moves}, Time: {time}. Type 'r' to play again."
            )?,
            None => {}
        }
        Ok(())
    }
}

impl Presenter for TerminalPresenter {
    fn level_started(&mut self, level: usize, level_count: usize, pair_count: usize) {
        self.level = level;
        self.level_count = level_count;
        self.total = pair_count;
        self.banner = None;
    }

    fn deck_initialized(&mut self, cards: &[Card], grid_columns: usize) {
        self.cards = cards
            .iter()
            .map(|card| CardView {
                symbol: card.symbol.clone(),
                face: card.face,
            })
            .collect();
        self.columns = grid_columns;
    }

    fn card_state_changed(&mut self, card: CardId, face: Face) {
        if let Some(view) = self.cards.get_mut(card.index()) {
            view.face = face;
        }
    }

    fn moves_changed(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn pairs_changed(&mut self, matched: usize, total: usize) {
        self.matched = matched;
        self.total = total;
    }

    fn time_changed(&mut self, elapsed: &str) {
        self.time = elapsed.to_string();
    }

    fn level_complete(&mut self, moves: u32, elapsed: &str, _has_next_level: bool) {
        self.banner = Some(Banner::LevelComplete {
            level: self.level,
            moves,
            time: elapsed.to_string(),
        });
    }

    fn game_complete(&mut self, moves: u32, elapsed: &str) {
        self.banner = Some(Banner::GameComplete {
            moves,
            time: elapsed.to_string(),
        });
    }
}
