use crate::errors::EngineError;
use crate::player::PlayerAction;

/// An action that passed validation, annotated with the chips it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Pay `pay` chips to match the current bet (clamped to the stack, which
    /// turns the call into an all-in for less).
    Call { pay: u32 },
    /// Raise the table bet to `to`, paying `pay` additional chips.
    Raise { to: u32, pay: u32 },
    /// Commit the entire remaining stack.
    AllIn { pay: u32 },
}

/// Validates a requested action against the table's betting state.
///
/// * `stack` - the player's remaining chips
/// * `player_bet` - chips the player already has in on this street
/// * `current_bet` - the table bet to match
/// * `min_raise` - the minimum raise increment over the current bet
/// * `raise_to` - explicit raise target; defaults to `current_bet + min_raise`
///
/// A raise whose required chips exceed the stack is rejected rather than
/// converted: the caller must send [`PlayerAction::AllIn`] instead.
///
/// ```
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// // Calling a 100 bet with 40 already in pays the 60 difference.
/// let va = validate_action(1_000, 40, 100, 100, PlayerAction::Call, None);
/// assert_eq!(va, Ok(ValidatedAction::Call { pay: 60 }));
///
/// // Checking while facing a bet is rejected.
/// let va = validate_action(1_000, 0, 100, 100, PlayerAction::Check, None);
/// assert!(va.is_err());
/// ```
pub fn validate_action(
    stack: u32,
    player_bet: u32,
    current_bet: u32,
    min_raise: u32,
    action: PlayerAction,
    raise_to: Option<u32>,
) -> Result<ValidatedAction, EngineError> {
    let to_call = current_bet.saturating_sub(player_bet);
    match action {
        PlayerAction::Fold => Ok(ValidatedAction::Fold),
        PlayerAction::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(EngineError::CheckWithBetOutstanding { to_call })
            }
        }
        PlayerAction::Call => Ok(ValidatedAction::Call {
            pay: to_call.min(stack),
        }),
        PlayerAction::Raise => {
            let to = raise_to.unwrap_or(current_bet + min_raise);
            if to < current_bet + min_raise {
                return Err(EngineError::InvalidBetAmount {
                    amount: to,
                    minimum: current_bet + min_raise,
                });
            }
            let required = to.saturating_sub(player_bet);
            if required > stack {
                return Err(EngineError::RaiseExceedsStack { required, stack });
            }
            Ok(ValidatedAction::Raise { to, pay: required })
        }
        PlayerAction::AllIn => Ok(ValidatedAction::AllIn { pay: stack }),
    }
}
