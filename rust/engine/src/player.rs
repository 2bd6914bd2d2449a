use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A player action during a betting round. A raise amount travels separately
/// as the optional raise target of
/// [`GameState::process_action`](crate::game::GameState::process_action).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when no bet is outstanding)
    Check,
    /// Call the current bet
    Call,
    /// Raise the table bet to a target amount
    Raise,
    /// Commit the entire remaining stack
    AllIn,
}

/// Per-hand state for one seated player.
///
/// The engine never interprets `wallet`; it is an opaque identity reference
/// carried through for the settlement layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerState {
    /// Seat number, stable for the duration of the hand.
    pub seat: usize,
    /// Opaque wallet/identity reference.
    pub wallet: String,
    /// Remaining chip stack. Never goes negative: any payment clamps to the
    /// stack and flips the player all-in instead.
    pub stack: u32,
    /// Hole cards, dealt at hand creation.
    pub hole_cards: Option<(Card, Card)>,
    /// Chips contributed on the current street.
    pub bet: u32,
    /// Total chips contributed this hand, input to side-pot tiers.
    pub contributed: u32,
    /// The player has folded.
    pub folded: bool,
    /// The player has committed their whole stack.
    pub all_in: bool,
    /// The last action taken this street, `None` before acting (posting a
    /// blind does not count as acting).
    pub last_action: Option<PlayerAction>,
}

impl PlayerState {
    /// Creates a player waiting to be dealt in.
    pub fn new(seat: usize, wallet: impl Into<String>, stack: u32) -> Self {
        Self {
            seat,
            wallet: wallet.into(),
            stack,
            hole_cards: None,
            bet: 0,
            contributed: 0,
            folded: false,
            all_in: false,
            last_action: None,
        }
    }

    /// A player who is neither folded nor all-in and still has to act.
    pub fn is_actionable(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Pays up to `amount` chips toward the pot, clamping to the stack.
    /// Returns the chips actually paid; an emptied stack marks the player
    /// all-in.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.bet += paid;
        self.contributed += paid;
        if self.stack == 0 {
            self.all_in = true;
        }
        paid
    }

    /// Folds the player out of the hand.
    pub fn fold(&mut self) {
        self.folded = true;
        self.last_action = Some(PlayerAction::Fold);
    }

    /// Resets per-street state when a new street begins.
    pub(crate) fn start_street(&mut self) {
        self.bet = 0;
        self.last_action = None;
    }
}
