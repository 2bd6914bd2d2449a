//! # holdem-engine: Texas Hold'em Game Engine
//!
//! A deterministic multi-player Texas Hold'em engine: seeded dealing, 7-card
//! hand evaluation, and a pure betting state machine. The engine performs no
//! I/O and holds no global state; every transition takes a state and returns
//! a new one, so the same seed and action sequence always reproduce the same
//! hand.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic shuffling and dealing with ChaCha20 RNG
//! - [`game`] - The hand state machine: blinds, streets, showdown
//! - [`hand`] - 7-card hand evaluation and winner selection
//! - [`player`] - Per-seat player state, actions, and stack management
//! - [`pot`] - Pot tiers from contributions and split-pot arithmetic
//! - [`rules`] - Betting validation (check/call/raise/all-in legality)
//! - [`logger`] - JSONL hand history records
//! - [`errors`] - Typed rejection errors for game operations
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let hole = [Card::parse("Ah").unwrap(), Card::parse("Kh").unwrap()];
//! let board = [
//!     Card::parse("Qh").unwrap(),
//!     Card::parse("Jh").unwrap(),
//!     Card::parse("10h").unwrap(),
//!     Card::parse("2c").unwrap(),
//!     Card::parse("3d").unwrap(),
//! ];
//!
//! let result = evaluate_hand(&hole, &board);
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::game::GameState;
//! use holdem_engine::player::{PlayerAction, PlayerState};
//!
//! let players = vec![
//!     PlayerState::new(0, "wallet-a", 10_000),
//!     PlayerState::new(1, "wallet-b", 10_000),
//!     PlayerState::new(2, "wallet-c", 10_000),
//! ];
//!
//! // Dealer at seat 0: seat 1 posts the small blind, seat 2 the big blind,
//! // and seat 0 is first to act.
//! let state = GameState::with_seed("table-1", players, 0, 50, 100, 42).unwrap();
//! assert_eq!(state.pot(), 150);
//! assert_eq!(state.active_seat(), Some(0));
//!
//! let state = state.process_action(0, PlayerAction::Call, None).unwrap();
//! assert_eq!(state.pot(), 250);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
