//! The 52-card deck and shuffling.

use crate::core::{Card, GameRng, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Build a full deck, suit-major and rank-minor.
///
/// ```
/// use bluff_engine::cards::{create_deck, DECK_SIZE};
/// use bluff_engine::core::{Card, Rank, Suit};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Two));
/// assert_eq!(deck[51], Card::new(Suit::Spades, Rank::Ace));
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Return a uniformly shuffled copy of `deck`. The input is left untouched.
#[must_use]
pub fn shuffle_deck(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_create_deck_has_every_card_once() {
        let deck = create_deck();
        assert_eq!(deck.len(), 52);

        let unique: FxHashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_create_deck_order() {
        let deck = create_deck();
        assert_eq!(deck[1], Card::new(Suit::Clubs, Rank::Three));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(create_deck(), deck);
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let deck = create_deck();
        let mut rng = GameRng::new(42);
        let shuffled = shuffle_deck(&deck, &mut rng);

        assert_eq!(shuffled.len(), deck.len());
        assert_ne!(shuffled, deck);

        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected = deck.clone();
        expected.sort();
        assert_eq!(sorted, expected);

        // Input untouched
        assert_eq!(deck, create_deck());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let deck = create_deck();
        let a = shuffle_deck(&deck, &mut GameRng::new(7));
        let b = shuffle_deck(&deck, &mut GameRng::new(7));
        let c = shuffle_deck(&deck, &mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
