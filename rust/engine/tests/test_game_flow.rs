use holdem_engine::errors::EngineError;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::{PlayerAction, PlayerState};

fn three_players() -> Vec<PlayerState> {
    vec![
        PlayerState::new(0, "wallet-a", 10_000),
        PlayerState::new(1, "wallet-b", 10_000),
        PlayerState::new(2, "wallet-c", 10_000),
    ]
}

fn new_hand() -> GameState {
    GameState::with_seed("table-1", three_players(), 0, 50, 100, 7).unwrap()
}

#[test]
fn blinds_are_posted_at_hand_start() {
    let state = new_hand();
    assert_eq!(state.phase(), Phase::Preflop);
    assert_eq!(state.pot(), 150);
    assert_eq!(state.current_bet(), 100);
    assert_eq!(state.min_raise(), 100);
    // Seat 1 is the small blind, seat 2 the big blind, seat 0 under the gun.
    assert_eq!(state.player(1).unwrap().bet, 50);
    assert_eq!(state.player(1).unwrap().stack, 9_950);
    assert_eq!(state.player(2).unwrap().bet, 100);
    assert_eq!(state.player(2).unwrap().stack, 9_900);
    assert_eq!(state.active_seat(), Some(0));
    assert_eq!(state.last_raiser(), Some(2));
    assert!(!state.round_complete());
    assert!(state.players().iter().all(|p| p.hole_cards.is_some()));
}

#[test]
fn heads_up_non_dealer_posts_small_blind_and_acts_first() {
    let players = vec![
        PlayerState::new(0, "wallet-a", 10_000),
        PlayerState::new(1, "wallet-b", 10_000),
    ];
    let state = GameState::with_seed("table-1", players, 0, 50, 100, 7).unwrap();
    assert_eq!(state.player(1).unwrap().bet, 50);
    assert_eq!(state.player(0).unwrap().bet, 100);
    assert_eq!(state.active_seat(), Some(1));
}

#[test]
fn hand_creation_rejects_bad_seatings() {
    let one = vec![PlayerState::new(0, "solo", 1_000)];
    assert_eq!(
        GameState::with_seed("t", one, 0, 50, 100, 1).unwrap_err(),
        EngineError::NotEnoughPlayers(1)
    );

    let dup = vec![
        PlayerState::new(3, "a", 1_000),
        PlayerState::new(3, "b", 1_000),
    ];
    assert_eq!(
        GameState::with_seed("t", dup, 3, 50, 100, 1).unwrap_err(),
        EngineError::DuplicateSeat(3)
    );

    assert_eq!(
        GameState::with_seed("t", three_players(), 9, 50, 100, 1).unwrap_err(),
        EngineError::UnknownSeat(9)
    );
}

#[test]
fn hole_cards_follow_the_deck_in_seat_order() {
    let state = new_hand();

    let mut deck = holdem_engine::deck::Deck::new_with_seed(7);
    deck.shuffle();
    let expected = deck.deal_hole_cards(3).unwrap();

    for (seat, cards) in expected.into_iter().enumerate() {
        assert_eq!(state.player(seat).unwrap().hole_cards, Some(cards));
    }
}

#[test]
fn same_seed_reproduces_the_deal() {
    let a = new_hand();
    let b = new_hand();
    for seat in 0..3 {
        assert_eq!(
            a.player(seat).unwrap().hole_cards,
            b.player(seat).unwrap().hole_cards
        );
    }
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let state = new_hand();
    assert_eq!(
        state.process_action(1, PlayerAction::Call, None).unwrap_err(),
        EngineError::NotPlayersTurn {
            expected: 0,
            actual: 1
        }
    );
    assert_eq!(
        state.process_action(5, PlayerAction::Call, None).unwrap_err(),
        EngineError::UnknownSeat(5)
    );
}

#[test]
fn folded_player_cannot_act_again() {
    let state = new_hand();
    let state = state.process_action(0, PlayerAction::Fold, None).unwrap();
    assert_eq!(state.active_seat(), Some(1));
    assert_eq!(
        state.process_action(0, PlayerAction::Call, None).unwrap_err(),
        EngineError::PlayerFolded(0)
    );
}

#[test]
fn rejected_action_leaves_the_state_unchanged() {
    let state = new_hand();
    let err = state
        .process_action(0, PlayerAction::Raise, Some(150))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidBetAmount {
            amount: 150,
            minimum: 200
        }
    );
    assert_eq!(state.pot(), 150);
    assert_eq!(state.current_bet(), 100);
    assert_eq!(state.player(0).unwrap().stack, 10_000);
    assert_eq!(state.active_seat(), Some(0));
}

#[test]
fn big_blind_keeps_the_option_after_limps() {
    let state = new_hand();
    let state = state.process_action(0, PlayerAction::Call, None).unwrap();
    assert_eq!(state.pot(), 250);
    let state = state.process_action(1, PlayerAction::Call, None).unwrap();
    assert_eq!(state.pot(), 300);
    // All bets match but the big blind has not acted yet.
    assert!(!state.round_complete());
    assert_eq!(state.active_seat(), Some(2));

    let state = state.process_action(2, PlayerAction::Check, None).unwrap();
    assert!(state.round_complete());
    assert_eq!(
        state.process_action(0, PlayerAction::Check, None).unwrap_err(),
        EngineError::RoundClosed
    );
}

#[test]
fn raise_reopens_the_round_until_callers_match() {
    let state = new_hand();
    let state = state
        .process_action(0, PlayerAction::Raise, Some(300))
        .unwrap();
    assert_eq!(state.pot(), 450);
    assert_eq!(state.current_bet(), 300);
    assert_eq!(state.min_raise(), 200);
    assert_eq!(state.last_raiser(), Some(0));

    let state = state.process_action(1, PlayerAction::Call, None).unwrap();
    assert_eq!(state.pot(), 700);
    assert!(!state.round_complete(), "seat 2 still has to respond");

    let state = state.process_action(2, PlayerAction::Call, None).unwrap();
    assert_eq!(state.pot(), 900);
    assert!(state.round_complete());
}

#[test]
fn phases_advance_through_the_streets_to_showdown() {
    let mut state = new_hand();
    assert_eq!(state.advance_phase().unwrap_err(), EngineError::RoundOpen);

    for seat in [0, 1] {
        state = state.process_action(seat, PlayerAction::Call, None).unwrap();
    }
    state = state.process_action(2, PlayerAction::Check, None).unwrap();

    state = state.advance_phase().unwrap();
    assert_eq!(state.phase(), Phase::Flop);
    assert_eq!(state.community().len(), 3);
    assert_eq!(state.current_bet(), 0);
    assert!(state.players().iter().all(|p| p.bet == 0));
    // Post-flop the first actionable seat after the dealer opens.
    assert_eq!(state.active_seat(), Some(1));
    assert!(!state.round_complete());

    for (expected_phase, expected_board) in [(Phase::Turn, 4), (Phase::River, 5)] {
        for seat in [1, 2, 0] {
            state = state.process_action(seat, PlayerAction::Check, None).unwrap();
        }
        state = state.advance_phase().unwrap();
        assert_eq!(state.phase(), expected_phase);
        assert_eq!(state.community().len(), expected_board);
    }

    for seat in [1, 2, 0] {
        state = state.process_action(seat, PlayerAction::Check, None).unwrap();
    }
    state = state.advance_phase().unwrap();
    assert_eq!(state.phase(), Phase::Showdown);
    assert_eq!(state.community().len(), 5);
    assert_eq!(state.active_seat(), None);
    assert!(state.round_complete());

    assert_eq!(
        state.advance_phase().unwrap_err(),
        EngineError::HandAlreadyComplete
    );
}

#[test]
fn winners_are_only_determined_at_showdown() {
    let state = new_hand();
    assert_eq!(
        state.determine_winners().unwrap_err(),
        EngineError::ShowdownNotReached
    );
}

#[test]
fn every_action_is_recorded_in_order() {
    let state = new_hand();
    let state = state
        .process_action(0, PlayerAction::Raise, Some(300))
        .unwrap();
    let state = state.process_action(1, PlayerAction::Fold, None).unwrap();
    let state = state.process_action(2, PlayerAction::Call, None).unwrap();

    let actions = state.actions();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0].seat, 0);
    assert_eq!(actions[0].action, PlayerAction::Raise);
    assert_eq!(actions[0].amount, Some(300));
    assert_eq!(actions[1].action, PlayerAction::Fold);
    assert_eq!(actions[1].amount, None);
    assert_eq!(actions[2].seat, 2);
    assert!(actions.iter().all(|a| a.phase == Phase::Preflop));
}
