use thiserror::Error;

use crate::game::Phase;

/// Errors returned by engine transitions.
///
/// Every rejected action leaves the caller's `GameState` untouched: transitions
/// take `&self` and only return a new state on `Ok`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("deck exhausted: needed {needed} cards, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("no community cards are dealt on {0}")]
    NoDealForPhase(Phase),
    #[error("not enough players: {0}")]
    NotEnoughPlayers(usize),
    #[error("seat {0} is taken more than once")]
    DuplicateSeat(usize),
    #[error("no player at seat {0}")]
    UnknownSeat(usize),
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("no action is pending")]
    NoActionPending,
    #[error("seat {0} has already folded")]
    PlayerFolded(usize),
    #[error("seat {0} is all-in")]
    PlayerAllIn(usize),
    #[error("cannot check with {to_call} chips to call")]
    CheckWithBetOutstanding { to_call: u32 },
    #[error("raise requires {required} chips but only {stack} available")]
    RaiseExceedsStack { required: u32, stack: u32 },
    #[error("invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("betting round is still open")]
    RoundOpen,
    #[error("betting round is complete, advance the phase")]
    RoundClosed,
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("hand already complete")]
    HandAlreadyComplete,
    #[error("hand has not reached showdown")]
    ShowdownNotReached,
}
