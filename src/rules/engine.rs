//! The move reducer.
//!
//! `apply_move` takes a snapshot and a move and returns the next snapshot
//! plus any events. It never mutates its input, holds no locks and keeps no
//! state between calls, so independent rooms can call it in parallel.
//!
//! ## Rejection
//!
//! An illegal move is answered with the input state unchanged and no
//! events. `try_apply_move` is the same reducer but reports why a move was
//! refused, for callers that want to tell the player.
//!
//! ## Order of checks
//!
//! 1. A finished game accepts nothing.
//! 2. If the previous play emptied its player's hand and the incoming move
//!    is anything but a bluff call, that player wins and the move is
//!    dropped. Emptying your hand only counts once the next player has had
//!    the chance to challenge it.
//! 3. The move itself is validated and applied.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::{Card, GameState, Move, MoveKind, Player, Rank};
use crate::events::GameEvent;

/// New state plus the events produced on the way there.
pub type Transition = (GameState, Vec<GameEvent>);

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is already over")]
    GameOver,
    #[error("declared {declared} but {expected} is expected")]
    WrongRank { expected: Rank, declared: Rank },
    #[error("there is no play to challenge")]
    NothingToChallenge,
    #[error("passing is not allowed in this game")]
    PassDisallowed,
    #[error("cannot pass twice in a row")]
    ConsecutivePass,
}

/// Apply `mv` to `state`.
///
/// Illegal moves return a clone of `state` and no events.
#[must_use]
pub fn apply_move(state: &GameState, mv: &Move) -> Transition {
    try_apply_move(state, mv).unwrap_or_else(|reason| {
        debug!(%reason, kind = ?mv.kind(), "move rejected");
        (state.clone(), Vec::new())
    })
}

/// Apply `mv` to `state`, or say why it cannot be applied.
pub fn try_apply_move(state: &GameState, mv: &Move) -> Result<Transition, Rejection> {
    if state.is_over() {
        return Err(Rejection::GameOver);
    }

    if !matches!(mv, Move::CallBluff) {
        if let Some(winner) = unchallenged_winner(state) {
            info!(winner = %winner.id, "unchallenged empty hand wins");
            let next = GameState {
                winner_id: Some(winner.id.clone()),
                ..state.clone()
            };
            return Ok((next, Vec::new()));
        }
    }

    match mv {
        Move::Play { cards, declared_rank } => play(state, cards, *declared_rank),
        Move::CallBluff => call_bluff(state),
        Move::Pass => pass(state),
    }
}

/// Move kinds the current seat could submit right now.
///
/// Does not account for the deferred win: any non-challenge move listed here
/// may instead end the game in favour of the previous player.
#[must_use]
pub fn legal_move_kinds(state: &GameState) -> Vec<MoveKind> {
    if state.is_over() {
        return Vec::new();
    }

    let mut kinds = vec![MoveKind::Play];
    if matches!(state.last_move, Some(Move::Play { .. })) {
        kinds.push(MoveKind::CallBluff);
    }
    if state.rules.allow_pass && !matches!(state.last_move, Some(Move::Pass)) {
        kinds.push(MoveKind::Pass);
    }
    kinds
}

/// The player who made the last play, if it emptied their hand.
fn unchallenged_winner(state: &GameState) -> Option<&Player> {
    match state.last_move {
        Some(Move::Play { .. }) => {
            let last = &state.players[state.previous_player_index()];
            last.has_empty_hand().then_some(last)
        }
        _ => None,
    }
}

/// Lay cards face down and declare their rank.
///
/// Named cards the player does not hold are dropped: they neither leave the
/// hand nor reach the pile, and the recorded `last_move` lists only the cards
/// that were actually put down. A later bluff call therefore judges the held
/// cards alone, so naming an unheld card cannot make an honest play look
/// like a bluff, nor an empty-handed claim look truthful.
fn play(state: &GameState, cards: &[Card], declared: Rank) -> Result<Transition, Rejection> {
    if let Some(expected) = state.expected_rank {
        if declared != expected {
            return Err(Rejection::WrongRank { expected, declared });
        }
    }

    let seat = state.current_player_index;
    let actor = &state.players[seat];

    // Only cards actually held move to the pile.
    let mut hand = actor.hand.clone();
    let mut played = Vec::with_capacity(cards.len());
    for card in cards {
        if let Some(pos) = hand.index_of(card) {
            hand.remove(pos);
            played.push(*card);
        }
    }
    if played.len() < cards.len() {
        debug!(
            player = %actor.id,
            claimed = cards.len(),
            held = played.len(),
            "play named cards not in hand"
        );
    }

    let mut events = Vec::new();
    if hand.is_empty() {
        events.push(GameEvent::PlayerEmptiedHand {
            player_id: actor.id.clone(),
        });
    }

    let mut players = state.players.clone();
    players.set(
        seat,
        Player {
            id: actor.id.clone(),
            hand,
        },
    );

    let mut pile = state.pile.clone();
    pile.extend(played.iter().copied());

    let next = GameState {
        players,
        pile,
        current_player_index: state.next_player_index(),
        last_move: Some(Move::play(&played, declared)),
        current_declared_rank: declared,
        expected_rank: Some(declared.next()),
        ..state.clone()
    };
    Ok((next, events))
}

fn call_bluff(state: &GameState) -> Result<Transition, Rejection> {
    let Some(Move::Play { cards, declared_rank }) = &state.last_move else {
        return Err(Rejection::NothingToChallenge);
    };

    let challenger_seat = state.current_player_index;
    let bluffer_seat = state.previous_player_index();
    let challenger = &state.players[challenger_seat];
    let bluffer = &state.players[bluffer_seat];

    let truthful = cards.iter().all(|card| card.rank == *declared_rank);
    let taker_seat = if truthful { challenger_seat } else { bluffer_seat };
    let taker = &state.players[taker_seat];

    let event = GameEvent::PileTaken {
        taker_id: taker.id.clone(),
        bluffer_id: bluffer.id.clone(),
        challenger_id: challenger.id.clone(),
        bluff_was_truthful: truthful,
    };

    let mut players = state.players.clone();
    let mut hand = taker.hand.clone();
    hand.append(state.pile.clone());
    players.set(
        taker_seat,
        Player {
            id: taker.id.clone(),
            hand,
        },
    );

    // A truthful final play survives the challenge and ends the game.
    let winner_id = (truthful && bluffer.has_empty_hand()).then(|| bluffer.id.clone());
    if let Some(winner) = &winner_id {
        info!(%winner, challenger = %challenger.id, "last play survived challenge");
    }

    let next = GameState {
        players,
        pile: im::Vector::new(),
        current_player_index: taker_seat,
        last_move: Some(Move::CallBluff),
        winner_id,
        current_declared_rank: Rank::FIRST,
        expected_rank: None,
        ..state.clone()
    };
    Ok((next, vec![event]))
}

fn pass(state: &GameState) -> Result<Transition, Rejection> {
    if !state.rules.allow_pass {
        return Err(Rejection::PassDisallowed);
    }
    if matches!(state.last_move, Some(Move::Pass)) {
        return Err(Rejection::ConsecutivePass);
    }

    let next = GameState {
        current_player_index: state.next_player_index(),
        last_move: Some(Move::Pass),
        ..state.clone()
    };
    Ok((next, Vec::new()))
}
