//! Room errors.

use thiserror::Error;

use crate::core::PlayerId;
use crate::rules::Rejection;

/// Why a room refused a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("player {0} is not seated here")]
    NotSeated(PlayerId),
    #[error("player {0} is already seated")]
    AlreadySeated(PlayerId),
    #[error("room is full ({max} players)")]
    RoomFull { max: usize },
    #[error("need at least {min} players, have {have}")]
    NotEnoughPlayers { min: usize, have: usize },
    #[error("a game is already in progress")]
    GameInProgress,
    #[error("no game has been dealt")]
    NoGame,
    #[error("the game is over")]
    GameOver,
    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Rejection),
}
