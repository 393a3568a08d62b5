//! A single game room.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use super::error::RoomError;
use crate::cards::{deal_cards, seat_order};
use crate::core::{GameRng, GameState, Move, PlayerId, PublicView, RoomConfig};
use crate::events::GameEvent;
use crate::rules::try_apply_move;

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// State after the move; broadcast this (or per-player views of it).
    pub state: GameState,
    /// Events to announce, in order.
    pub events: Vec<GameEvent>,
}

/// Where a rematch vote left things.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RematchStatus {
    /// Still waiting on other seated players.
    Pending { votes: usize, needed: usize },
    /// Everyone voted; a new game was dealt.
    Started(GameState),
}

/// Mutable room data. Only touched with the room lock held.
#[derive(Debug)]
struct RoomInner {
    /// Seated players in join order.
    seats: Vec<PlayerId>,
    game: Option<GameState>,
    rematch_votes: FxHashSet<PlayerId>,
    rng: GameRng,
}

impl RoomInner {
    fn is_seated(&self, player: &PlayerId) -> bool {
        self.seats.contains(player)
    }

    fn game_in_progress(&self) -> bool {
        self.game.as_ref().is_some_and(|g| !g.is_over())
    }

    fn deal(&mut self, room: &str, config: &RoomConfig, starter: &PlayerId) -> GameState {
        let order = seat_order(&self.seats, starter);
        let state = deal_cards(&order, config.rules, &mut self.rng);
        self.game = Some(state.clone());
        self.rematch_votes.clear();
        info!(room, starter = %starter, players = order.len(), "game dealt");
        state
    }

    /// Deal a rematch if every seated player has voted.
    fn try_rematch(&mut self, room: &str, config: &RoomConfig) -> RematchStatus {
        let needed = self.seats.len();
        let votes = self.seats.iter().filter(|p| self.rematch_votes.contains(*p)).count();
        if votes < needed || needed < config.min_players {
            return RematchStatus::Pending { votes, needed };
        }
        let starter = self.seats[0].clone();
        info!(room, "rematch agreed");
        RematchStatus::Started(self.deal(room, config, &starter))
    }
}

/// One room: seats, the live game and rematch votes behind one lock.
///
/// Every mutation takes the lock for its whole duration, so at most one
/// move is being applied to a room's game at any time. Rooms share nothing
/// with each other.
#[derive(Debug)]
pub struct Room {
    name: String,
    config: RoomConfig,
    inner: Mutex<RoomInner>,
}

impl Room {
    /// Create an empty room.
    #[must_use]
    pub fn new(name: impl Into<String>, config: RoomConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            name: name.into(),
            config,
            inner: Mutex::new(RoomInner {
                seats: Vec::new(),
                game: None,
                rematch_votes: FxHashSet::default(),
                rng,
            }),
        }
    }

    /// Room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room configuration.
    #[must_use]
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Seated players in join order.
    #[must_use]
    pub fn seats(&self) -> Vec<PlayerId> {
        self.inner.lock().seats.clone()
    }

    /// Current game state, if a game has been dealt.
    #[must_use]
    pub fn state(&self) -> Option<GameState> {
        self.inner.lock().game.clone()
    }

    /// The current game as seen by `player`.
    #[must_use]
    pub fn view_for(&self, player: &PlayerId) -> Option<PublicView> {
        let inner = self.inner.lock();
        inner
            .game
            .as_ref()
            .and_then(|game| PublicView::for_player(game, player))
    }

    /// Take a seat. Returns the number of seated players.
    ///
    /// Joining while a game runs is allowed; the new seat plays from the
    /// next deal.
    pub fn join(&self, player: PlayerId) -> Result<usize, RoomError> {
        let mut inner = self.inner.lock();
        if inner.is_seated(&player) {
            return Err(RoomError::AlreadySeated(player));
        }
        if inner.seats.len() >= self.config.max_players {
            warn!(room = %self.name, player = %player, "room full");
            return Err(RoomError::RoomFull {
                max: self.config.max_players,
            });
        }
        info!(room = %self.name, player = %player, "player joined");
        inner.seats.push(player);
        Ok(inner.seats.len())
    }

    /// Give up a seat.
    ///
    /// Leaving a running game you were dealt into abandons that game: its
    /// turn order can no longer complete, so the room drops it and the
    /// remaining players may `start` again. If the game is over and everyone
    /// left has already voted for a rematch, the rematch is dealt and
    /// returned.
    pub fn leave(&self, player: &PlayerId) -> Result<Option<GameState>, RoomError> {
        let mut inner = self.inner.lock();
        let Some(pos) = inner.seats.iter().position(|p| p == player) else {
            return Err(RoomError::NotSeated(player.clone()));
        };
        inner.seats.remove(pos);
        inner.rematch_votes.remove(player);
        info!(room = %self.name, player = %player, "player left");

        let dealt_in = inner.game.as_ref().is_some_and(|g| g.seat_of(player).is_some());
        if inner.game_in_progress() && dealt_in {
            inner.game = None;
            inner.rematch_votes.clear();
            info!(room = %self.name, player = %player, "game abandoned");
            return Ok(None);
        }

        let game_over = inner.game.as_ref().is_some_and(GameState::is_over);
        if game_over && !inner.rematch_votes.is_empty() {
            if let RematchStatus::Started(state) = inner.try_rematch(&self.name, &self.config) {
                return Ok(Some(state));
            }
        }
        Ok(None)
    }

    /// Deal a new game with `starter` leading.
    pub fn start(&self, starter: &PlayerId) -> Result<GameState, RoomError> {
        let mut inner = self.inner.lock();
        if !inner.is_seated(starter) {
            return Err(RoomError::NotSeated(starter.clone()));
        }
        if inner.game_in_progress() {
            return Err(RoomError::GameInProgress);
        }
        if inner.seats.len() < self.config.min_players {
            return Err(RoomError::NotEnoughPlayers {
                min: self.config.min_players,
                have: inner.seats.len(),
            });
        }
        Ok(inner.deal(&self.name, &self.config, starter))
    }

    /// Submit a move on behalf of `player`.
    ///
    /// Only the current seat may play or pass. Anyone in the game may call
    /// bluff; the reducer resolves the call against the play that was just
    /// made, with the current seat as challenger.
    pub fn submit(&self, player: &PlayerId, mv: Move) -> Result<MoveOutcome, RoomError> {
        let mut inner = self.inner.lock();
        if !inner.is_seated(player) {
            return Err(RoomError::NotSeated(player.clone()));
        }
        let game = inner.game.as_ref().ok_or(RoomError::NoGame)?;
        if game.seat_of(player).is_none() {
            return Err(RoomError::NotSeated(player.clone()));
        }
        if game.is_over() {
            return Err(RoomError::GameOver);
        }

        let current = &game.current_player().id;
        if !matches!(mv, Move::CallBluff) && current != player {
            warn!(room = %self.name, player = %player, current = %current, "move out of turn");
            return Err(RoomError::NotYourTurn {
                player: player.clone(),
                current: current.clone(),
            });
        }

        let (state, events) = try_apply_move(game, &mv).map_err(|reason| {
            warn!(room = %self.name, player = %player, %reason, "illegal move");
            RoomError::IllegalMove(reason)
        })?;

        if let Some(winner) = &state.winner_id {
            info!(room = %self.name, winner = %winner, "game over");
        }
        inner.game = Some(state.clone());
        Ok(MoveOutcome { state, events })
    }

    /// Vote for a rematch once the game is over.
    pub fn vote_rematch(&self, player: &PlayerId) -> Result<RematchStatus, RoomError> {
        let mut inner = self.inner.lock();
        if !inner.is_seated(player) {
            return Err(RoomError::NotSeated(player.clone()));
        }
        match &inner.game {
            None => return Err(RoomError::NoGame),
            Some(game) if !game.is_over() => return Err(RoomError::GameInProgress),
            Some(_) => {}
        }
        if inner.seats.len() < self.config.min_players {
            return Err(RoomError::NotEnoughPlayers {
                min: self.config.min_players,
                have: inner.seats.len(),
            });
        }

        inner.rematch_votes.insert(player.clone());
        Ok(inner.try_rematch(&self.name, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn seated_room(names: &[&str]) -> Room {
        let room = Room::new("test", RoomConfig::new(Rules::new(true)).with_seed(42));
        for name in names {
            room.join(PlayerId::new(*name)).unwrap();
        }
        room
    }

    #[test]
    fn test_join_and_leave() {
        let room = seated_room(&["a"]);
        assert_eq!(room.join(PlayerId::new("b")), Ok(2));
        assert_eq!(
            room.join(PlayerId::new("a")),
            Err(RoomError::AlreadySeated(PlayerId::new("a")))
        );

        assert_eq!(room.leave(&PlayerId::new("a")), Ok(None));
        assert_eq!(room.seats(), vec![PlayerId::new("b")]);
        assert_eq!(
            room.leave(&PlayerId::new("a")),
            Err(RoomError::NotSeated(PlayerId::new("a")))
        );
    }

    #[test]
    fn test_room_full() {
        let room = Room::new("small", RoomConfig::default().with_player_limits(1, 2));
        room.join(PlayerId::new("a")).unwrap();
        room.join(PlayerId::new("b")).unwrap();
        assert_eq!(
            room.join(PlayerId::new("c")),
            Err(RoomError::RoomFull { max: 2 })
        );
    }

    #[test]
    fn test_start_puts_starter_first() {
        let room = seated_room(&["a", "b", "c"]);
        let state = room.start(&PlayerId::new("b")).unwrap();

        let order: Vec<_> = state.players.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(room.start(&PlayerId::new("a")), Err(RoomError::GameInProgress));
    }

    #[test]
    fn test_start_needs_players() {
        let room = seated_room(&["a"]);
        assert_eq!(
            room.start(&PlayerId::new("a")),
            Err(RoomError::NotEnoughPlayers { min: 2, have: 1 })
        );
        assert_eq!(
            room.start(&PlayerId::new("z")),
            Err(RoomError::NotSeated(PlayerId::new("z")))
        );
    }

    #[test]
    fn test_submit_without_game() {
        let room = seated_room(&["a", "b"]);
        assert_eq!(
            room.submit(&PlayerId::new("a"), Move::Pass),
            Err(RoomError::NoGame)
        );
    }

    #[test]
    fn test_vote_rematch_requires_finished_game() {
        let room = seated_room(&["a", "b"]);
        assert_eq!(room.vote_rematch(&PlayerId::new("a")), Err(RoomError::NoGame));

        room.start(&PlayerId::new("a")).unwrap();
        assert_eq!(
            room.vote_rematch(&PlayerId::new("a")),
            Err(RoomError::GameInProgress)
        );
    }
}
