//! Dealing a fresh game.

use im::Vector;
use tracing::debug;

use super::deck::{create_deck, shuffle_deck};
use crate::core::{Card, GameRng, GameState, Player, PlayerId, Rules};

/// Shuffle a fresh deck and deal it round-robin to `player_ids`.
///
/// Cards go one at a time in seat order until the deck runs out, so hand
/// sizes differ by at most one and earlier seats get the extra cards.
/// Duplicate ids are not merged; that is the caller's business.
///
/// ```
/// use bluff_engine::cards::deal_cards;
/// use bluff_engine::core::{GameRng, PlayerId, Rules};
///
/// let ids = [PlayerId::new("a"), PlayerId::new("b"), PlayerId::new("c")];
/// let state = deal_cards(&ids, Rules::default(), &mut GameRng::new(1));
///
/// let sizes: Vec<_> = state.players.iter().map(|p| p.hand_size()).collect();
/// assert_eq!(sizes, vec![18, 17, 17]);
/// ```
#[must_use]
pub fn deal_cards(player_ids: &[PlayerId], rules: Rules, rng: &mut GameRng) -> GameState {
    assert!(!player_ids.is_empty(), "Must have at least 1 player");

    let deck = shuffle_deck(&create_deck(), rng);
    let seat_count = player_ids.len();

    let mut hands: Vec<Vector<Card>> = vec![Vector::new(); seat_count];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % seat_count].push_back(card);
    }

    let players = player_ids
        .iter()
        .cloned()
        .zip(hands)
        .map(|(id, hand)| Player { id, hand });

    debug!(players = seat_count, allow_pass = rules.allow_pass, "dealt new game");
    GameState::new(players, rules)
}

/// Seat order for a game started by `starter`.
///
/// The starter moves to the front; everyone else keeps their relative
/// order. A starter who is not in `seats` leaves the order unchanged.
#[must_use]
pub fn seat_order(seats: &[PlayerId], starter: &PlayerId) -> Vec<PlayerId> {
    let mut order = seats.to_vec();
    if let Some(pos) = order.iter().position(|id| id == starter) {
        let first = order.remove(pos);
        order.insert(0, first);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::DECK_SIZE;

    fn ids(names: &[&str]) -> Vec<PlayerId> {
        names.iter().map(|n| PlayerId::new(*n)).collect()
    }

    #[test]
    fn test_deal_initial_fields() {
        let rules = Rules::new(true);
        let state = deal_cards(&ids(&["a", "b", "c"]), rules, &mut GameRng::new(42));

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player_index, 0);
        assert!(state.pile.is_empty());
        assert!(state.last_move.is_none());
        assert!(state.winner_id.is_none());
        assert!(state.expected_rank.is_none());
        assert_eq!(state.rules, rules);
        assert_eq!(state.players[0].id, PlayerId::new("a"));
        assert_eq!(state.players[2].id, PlayerId::new("c"));
    }

    #[test]
    fn test_deal_hand_sizes() {
        for n in 1..=8 {
            let names: Vec<String> = (0..n).map(|i| format!("p{}", i)).collect();
            let players: Vec<PlayerId> = names.iter().map(PlayerId::new).collect();
            let state = deal_cards(&players, Rules::default(), &mut GameRng::new(n as u64));

            let sizes: Vec<usize> = state.players.iter().map(Player::hand_size).collect();
            assert_eq!(sizes.iter().sum::<usize>(), DECK_SIZE);

            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            assert!(max - min <= 1, "{} players: {:?}", n, sizes);

            // Larger hands come first
            assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_deal_is_seed_deterministic() {
        let players = ids(&["a", "b"]);
        let first = deal_cards(&players, Rules::default(), &mut GameRng::new(5));
        let second = deal_cards(&players, Rules::default(), &mut GameRng::new(5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_deal_keeps_duplicate_ids() {
        let state = deal_cards(&ids(&["a", "a"]), Rules::default(), &mut GameRng::new(1));
        assert_eq!(state.player_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_deal_no_players() {
        let _ = deal_cards(&[], Rules::default(), &mut GameRng::new(1));
    }

    #[test]
    fn test_seat_order() {
        let seats = ids(&["a", "b", "c", "d"]);
        assert_eq!(seat_order(&seats, &PlayerId::new("c")), ids(&["c", "a", "b", "d"]));
        assert_eq!(seat_order(&seats, &PlayerId::new("a")), seats);
        assert_eq!(seat_order(&seats, &PlayerId::new("z")), seats);
    }
}
