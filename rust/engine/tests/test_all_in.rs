use holdem_engine::errors::EngineError;
use holdem_engine::game::{GameState, Phase};
use holdem_engine::player::{PlayerAction, PlayerState};

fn hand_with_stacks(stacks: [u32; 3], seed: u64) -> GameState {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(seat, &stack)| PlayerState::new(seat, format!("wallet-{seat}"), stack))
        .collect();
    GameState::with_seed("table-1", players, 0, 50, 100, seed).unwrap()
}

#[test]
fn short_big_blind_posts_all_in_for_less() {
    let state = hand_with_stacks([1_000, 1_000, 60], 3);
    let bb = state.player(2).unwrap();
    assert_eq!(bb.bet, 60);
    assert_eq!(bb.stack, 0);
    assert!(bb.all_in);
    // The pot holds only what was posted, the bet to match stays the full
    // big blind.
    assert_eq!(state.pot(), 110);
    assert_eq!(state.current_bet(), 100);
    assert_eq!(state.active_seat(), Some(0));
    assert!(!state.round_complete());
}

#[test]
fn all_in_above_the_bet_reopens_the_betting() {
    let state = hand_with_stacks([1_000, 500, 1_000], 3);
    let state = state.process_action(0, PlayerAction::AllIn, None).unwrap();

    let shover = state.player(0).unwrap();
    assert!(shover.all_in);
    assert_eq!(shover.bet, 1_000);
    assert_eq!(state.pot(), 1_150);
    assert_eq!(state.current_bet(), 1_000);
    assert_eq!(state.min_raise(), 900);
    assert_eq!(state.last_raiser(), Some(0));
    assert!(!state.round_complete());
}

#[test]
fn short_call_never_lowers_the_table_bet() {
    let state = hand_with_stacks([1_000, 500, 1_000], 3);
    let state = state.process_action(0, PlayerAction::AllIn, None).unwrap();

    // Seat 1 calls for less than the bet and is all-in.
    let state = state.process_action(1, PlayerAction::Call, None).unwrap();
    let caller = state.player(1).unwrap();
    assert!(caller.all_in);
    assert_eq!(caller.bet, 500);
    assert_eq!(state.pot(), 1_600);
    assert_eq!(state.current_bet(), 1_000);
}

#[test]
fn round_closes_when_one_actionable_player_remains() {
    let state = hand_with_stacks([1_000, 1_000, 1_000], 3);
    let state = state.process_action(0, PlayerAction::AllIn, None).unwrap();
    assert!(!state.round_complete(), "two players still have chips behind");

    let state = state.process_action(1, PlayerAction::AllIn, None).unwrap();
    assert!(state.round_complete());
    assert_eq!(
        state.process_action(2, PlayerAction::Call, None).unwrap_err(),
        EngineError::RoundClosed
    );
}

#[test]
fn all_in_hand_runs_out_to_showdown() {
    let mut state = hand_with_stacks([1_000, 1_000, 1_000], 9);
    state = state.process_action(0, PlayerAction::AllIn, None).unwrap();
    state = state.process_action(1, PlayerAction::AllIn, None).unwrap();
    assert!(state.round_complete());
    let pot = state.pot();
    assert_eq!(pot, 2_100);

    // With nobody left to act each street closes as soon as it is dealt.
    for (phase, board) in [(Phase::Flop, 3), (Phase::Turn, 4), (Phase::River, 5)] {
        state = state.advance_phase().unwrap();
        assert_eq!(state.phase(), phase);
        assert_eq!(state.community().len(), board);
        assert!(state.round_complete());
    }
    state = state.advance_phase().unwrap();
    assert_eq!(state.phase(), Phase::Showdown);

    let payoffs = state.determine_winners().unwrap();
    let total: u32 = payoffs.iter().map(|p| p.chips).sum();
    assert_eq!(total, pot);
}

#[test]
fn all_in_player_cannot_act_again() {
    let state = hand_with_stacks([1_000, 500, 1_000], 3);
    let state = state.process_action(0, PlayerAction::AllIn, None).unwrap();
    assert_eq!(
        state.process_action(0, PlayerAction::Check, None).unwrap_err(),
        EngineError::PlayerAllIn(0)
    );
}
