use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{find_winners, HandResult};
use crate::logger::ActionRecord;
use crate::player::{PlayerAction, PlayerState};
use crate::pot::{split_pot, PotManager};
use crate::rules::{validate_action, ValidatedAction};

/// The phase of a hand. Each betting street is tied to a dealing stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No hand in progress.
    Waiting,
    /// Hole cards dealt, blinds posted.
    Preflop,
    /// Three community cards on the board.
    Flop,
    /// Fourth community card.
    Turn,
    /// Fifth community card.
    River,
    /// Final betting done, hands are compared.
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        write!(f, "{name}")
    }
}

/// Chips awarded to one seat at hand end. `hand` is `None` when the pot was
/// won uncontested (everyone else folded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandPayoff {
    pub seat: usize,
    pub chips: u32,
    pub hand: Option<HandResult>,
}

/// Authoritative state for one hand at one table.
///
/// Every transition takes `&self` and returns a fresh state on success; a
/// rejected action returns an [`EngineError`] and leaves the input untouched,
/// so a mutation is never partially applied. The engine performs no I/O and
/// holds no global state: the same seed and action sequence reproduce the
/// same hand bit for bit.
#[derive(Debug, Clone)]
pub struct GameState {
    table_id: String,
    phase: Phase,
    deck: Deck,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    min_raise: u32,
    small_blind: u32,
    big_blind: u32,
    dealer_seat: usize,
    active_seat: Option<usize>,
    last_raiser: Option<usize>,
    round_complete: bool,
    players: Vec<PlayerState>,
    actions: Vec<ActionRecord>,
    seed: u64,
}

impl GameState {
    /// Starts a hand with an entropy-drawn deck seed.
    ///
    /// Shuffles a fresh deck, deals two hole cards per player round-robin,
    /// posts the blinds (clamped to short stacks) from the first and second
    /// seats clockwise of the dealer, and puts the third seat under the gun.
    pub fn new(
        table_id: impl Into<String>,
        players: Vec<PlayerState>,
        dealer_seat: usize,
        small_blind: u32,
        big_blind: u32,
    ) -> Result<Self, EngineError> {
        let seed = rand::rng().random();
        Self::with_seed(table_id, players, dealer_seat, small_blind, big_blind, seed)
    }

    /// Starts a hand with a fixed deck seed for reproducible play.
    pub fn with_seed(
        table_id: impl Into<String>,
        mut players: Vec<PlayerState>,
        dealer_seat: usize,
        small_blind: u32,
        big_blind: u32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(players.len()));
        }
        for i in 0..players.len() {
            if players[i + 1..].iter().any(|p| p.seat == players[i].seat) {
                return Err(EngineError::DuplicateSeat(players[i].seat));
            }
        }
        let dealer_idx = players
            .iter()
            .position(|p| p.seat == dealer_seat)
            .ok_or(EngineError::UnknownSeat(dealer_seat))?;

        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let hole = deck.deal_hole_cards(players.len())?;
        for (player, cards) in players.iter_mut().zip(hole) {
            player.hole_cards = Some(cards);
        }

        let n = players.len();
        let sb_idx = (dealer_idx + 1) % n;
        let bb_idx = (dealer_idx + 2) % n;
        let utg_idx = (dealer_idx + 3) % n;

        // Blinds clamp to short stacks; the pot holds only chips actually
        // posted, while the table bet to match is the full big blind.
        let mut pot = 0;
        pot += players[sb_idx].pay(small_blind);
        pot += players[bb_idx].pay(big_blind);

        let last_raiser = Some(players[bb_idx].seat);
        let utg_seat = players[utg_idx].seat;
        let utg_actionable = players[utg_idx].is_actionable();

        let mut state = Self {
            table_id: table_id.into(),
            phase: Phase::Preflop,
            deck,
            community: Vec::with_capacity(5),
            pot,
            current_bet: big_blind,
            min_raise: big_blind,
            small_blind,
            big_blind,
            dealer_seat,
            active_seat: None,
            last_raiser,
            round_complete: false,
            players,
            actions: Vec::new(),
            seed,
        };
        state.active_seat = if utg_actionable {
            Some(utg_seat)
        } else {
            state.next_actionable_after(utg_seat)
        };
        state.round_complete = state.actionable_count() <= 1;

        Ok(state)
    }

    /// Applies one player action, returning the resulting state.
    ///
    /// `raise_to` is the raise target total; when omitted a raise goes to
    /// `current_bet + min_raise`. Invalid actions are rejected with a typed
    /// error and the input state is unchanged.
    pub fn process_action(
        &self,
        seat: usize,
        action: PlayerAction,
        raise_to: Option<u32>,
    ) -> Result<GameState, EngineError> {
        let idx = self.idx_of(seat).ok_or(EngineError::UnknownSeat(seat))?;
        if self.players[idx].folded {
            return Err(EngineError::PlayerFolded(seat));
        }
        if self.players[idx].all_in {
            return Err(EngineError::PlayerAllIn(seat));
        }
        if self.round_complete {
            return Err(EngineError::RoundClosed);
        }
        let expected = self.active_seat.ok_or(EngineError::NoActionPending)?;
        if expected != seat {
            return Err(EngineError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }

        let player = &self.players[idx];
        let validated = validate_action(
            player.stack,
            player.bet,
            self.current_bet,
            self.min_raise,
            action,
            raise_to,
        )?;

        let mut next = self.clone();
        let mut amount = None;
        match validated {
            ValidatedAction::Fold => next.players[idx].fold(),
            ValidatedAction::Check => next.players[idx].last_action = Some(PlayerAction::Check),
            ValidatedAction::Call { pay } => {
                let paid = next.players[idx].pay(pay);
                next.pot += paid;
                next.players[idx].last_action = Some(PlayerAction::Call);
            }
            ValidatedAction::Raise { to, pay } => {
                let paid = next.players[idx].pay(pay);
                next.pot += paid;
                next.min_raise = to - next.current_bet;
                next.current_bet = to;
                next.last_raiser = Some(seat);
                next.players[idx].last_action = Some(PlayerAction::Raise);
                amount = Some(to);
            }
            ValidatedAction::AllIn { pay } => {
                let paid = next.players[idx].pay(pay);
                next.pot += paid;
                let total = next.players[idx].bet;
                // An all-in above the table bet reopens the betting.
                if total > next.current_bet {
                    next.min_raise = (total - next.current_bet).max(next.min_raise);
                    next.current_bet = total;
                    next.last_raiser = Some(seat);
                }
                next.players[idx].last_action = Some(PlayerAction::AllIn);
                amount = Some(paid);
            }
        }

        next.actions.push(ActionRecord {
            seat,
            phase: next.phase,
            action,
            amount,
        });
        next.active_seat = next.next_actionable_after(seat);
        next.round_complete = next.is_round_complete(seat);
        Ok(next)
    }

    /// Deals the next street and resets per-street betting state.
    ///
    /// Flop deals 3 cards, turn and river 1 each, all after one burn card;
    /// river advances to showdown without dealing. First to act is the first
    /// actionable seat after the dealer.
    pub fn advance_phase(&self) -> Result<GameState, EngineError> {
        let target = match self.phase {
            Phase::Waiting => return Err(EngineError::NoHandInProgress),
            Phase::Showdown => return Err(EngineError::HandAlreadyComplete),
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
        };
        if !self.round_complete {
            return Err(EngineError::RoundOpen);
        }

        let mut next = self.clone();
        if target != Phase::Showdown {
            let dealt = next.deck.deal_community(target)?;
            next.community.extend(dealt);
        }
        next.phase = target;

        for p in &mut next.players {
            p.start_street();
        }
        next.current_bet = 0;
        next.min_raise = next.big_blind;

        if target == Phase::Showdown {
            next.active_seat = None;
            next.last_raiser = None;
            next.round_complete = true;
        } else {
            next.active_seat = next.next_actionable_after(next.dealer_seat);
            next.last_raiser = next.last_actionable_in_order();
            next.round_complete = next.actionable_count() <= 1;
        }
        Ok(next)
    }

    /// Evaluates all non-folded hands at showdown and splits the pot evenly
    /// among every seat sharing the best hand value.
    ///
    /// Floor division decides the shares; the odd-chip remainder goes to the
    /// winning seat closest clockwise after the dealer. The returned payoffs
    /// are for the settlement layer to credit, the state itself is done.
    pub fn determine_winners(&self) -> Result<Vec<HandPayoff>, EngineError> {
        if self.phase != Phase::Showdown {
            return Err(EngineError::ShowdownNotReached);
        }
        let entries: Vec<(usize, (Card, Card))> = self
            .players
            .iter()
            .filter(|p| !p.folded)
            .filter_map(|p| p.hole_cards.map(|hc| (p.seat, hc)))
            .collect();
        if entries.is_empty() {
            return Err(EngineError::NotEnoughPlayers(0));
        }

        let mut winners = find_winners(&entries, &self.community);
        let dealer_idx = self.idx_of(self.dealer_seat).unwrap_or(0);
        let n = self.players.len();
        winners.sort_by_key(|&(seat, _)| {
            self.idx_of(seat)
                .map(|i| (i + n - dealer_idx - 1) % n)
                .unwrap_or(usize::MAX)
        });

        let shares = split_pot(self.pot, winners.len());
        Ok(winners
            .into_iter()
            .zip(shares)
            .map(|((seat, hand), chips)| HandPayoff {
                seat,
                chips,
                hand: Some(hand),
            })
            .collect())
    }

    /// When exactly one non-folded player remains, that seat wins the whole
    /// pot without dealing further cards or comparing hands.
    pub fn check_early_win(&self) -> Option<HandPayoff> {
        let mut alive = self.players.iter().filter(|p| !p.folded);
        let winner = alive.next()?;
        if alive.next().is_some() {
            return None;
        }
        Some(HandPayoff {
            seat: winner.seat,
            chips: self.pot,
            hand: None,
        })
    }

    /// Pot tiers derived from each seat's total contribution. Settlement uses
    /// the single even split of [`determine_winners`](Self::determine_winners);
    /// the tiers are exposed for callers tracking all-in eligibility.
    pub fn pots(&self) -> PotManager {
        PotManager::from_contributions(self.players.iter().map(|p| (p.seat, p.contributed)))
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }

    pub fn active_seat(&self) -> Option<usize> {
        self.active_seat
    }

    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }

    pub fn round_complete(&self) -> bool {
        self.round_complete
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.seat == seat)
    }

    /// Chronological actions applied this hand.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// The deck seed; replaying it with the same action sequence reproduces
    /// the hand exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn idx_of(&self, seat: usize) -> Option<usize> {
        self.players.iter().position(|p| p.seat == seat)
    }

    fn actionable_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_actionable()).count()
    }

    fn next_actionable_after(&self, seat: usize) -> Option<usize> {
        let idx = self.idx_of(seat)?;
        let n = self.players.len();
        (1..=n)
            .map(|off| &self.players[(idx + off) % n])
            .find(|p| p.is_actionable())
            .map(|p| p.seat)
    }

    /// The actionable seat acting last on this street, used as the default
    /// last-raiser so an unraised street closes after it acts.
    fn last_actionable_in_order(&self) -> Option<usize> {
        let idx = self.idx_of(self.dealer_seat)?;
        let n = self.players.len();
        (1..=n)
            .map(|off| &self.players[(idx + off) % n])
            .filter(|p| p.is_actionable())
            .last()
            .map(|p| p.seat)
    }

    /// A street is complete when at most one actionable player remains, or
    /// when every actionable player has matched the table bet, has acted this
    /// street, and the action has circled back to the last raiser.
    fn is_round_complete(&self, actor: usize) -> bool {
        if self.actionable_count() <= 1 {
            return true;
        }
        let all_matched = self
            .players
            .iter()
            .filter(|p| p.is_actionable())
            .all(|p| p.bet == self.current_bet && p.last_action.is_some());
        if !all_matched {
            return false;
        }
        match self.last_raiser {
            Some(lr) => {
                let raiser_can_act = self
                    .idx_of(lr)
                    .map(|i| self.players[i].is_actionable())
                    .unwrap_or(false);
                actor == lr || self.active_seat == Some(lr) || !raiser_can_act
            }
            None => true,
        }
    }
}
