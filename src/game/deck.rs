use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Card, CardId, Face};

/// Builds a face-down deck holding two cards for each of the first
/// `pair_count` symbols, in uniformly random order.
pub fn build_deck<R: Rng + ?Sized>(symbols: &[String], pair_count: usize, rng: &mut R) -> Vec<Card> {
    let mut values: Vec<&str> = symbols
        .iter()
        .take(pair_count)
        .flat_map(|symbol| [symbol.as_str(), symbol.as_str()])
        .collect();

    values.shuffle(rng);

    values
        .into_iter()
        .enumerate()
        .map(|(idx, symbol)| Card {
            id: CardId(idx),
            symbol: symbol.to_string(),
            face: Face::Hidden,
        })
        .collect()
}

/// Column count suggested for laying out `card_count` cards.
pub fn grid_columns(card_count: usize) -> usize {
    if card_count <= 12 {
        4
    } else if card_count <= 20 {
        5
    } else {
        6
    }
}
