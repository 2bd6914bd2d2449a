use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::cards::{all_suits, Card, Rank};

/// Hand categories in strength order. The discriminant is the category rank
/// used by the hand value formula, so any higher category always outranks any
/// lower one regardless of kickers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The outcome of evaluating a hand: its category, the five cards that form
/// it, and a single integer strength for total ordering.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand category.
    pub category: Category,
    /// The best cards forming the hand, strongest grouping first
    /// (fewer than five when evaluating a short pre-showdown hand).
    pub best_five: Vec<Card>,
    /// `category * 100_000_000 + Σ kicker_rank * 15^(4-i)` over the ordered
    /// best five. Equal values mean an exact tie (split pot).
    pub value: u64,
}

impl HandResult {
    /// Human-readable hand name, e.g. `"Full House"`.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

const CATEGORY_SCALE: u64 = 100_000_000;

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn hand_value(category: Category, kickers: &[u8]) -> u64 {
    let mut value = category as u64 * CATEGORY_SCALE;
    for (i, &k) in kickers.iter().take(5).enumerate() {
        value += k as u64 * 15u64.pow(4 - i as u32);
    }
    value
}

fn build(category: Category, best_five: Vec<Card>, kickers: &[u8]) -> HandResult {
    HandResult {
        category,
        value: hand_value(category, kickers),
        best_five,
    }
}

/// Evaluates the best 5-card hand from 2 hole cards and 0-5 community cards.
///
/// With fewer than 5 total cards the result degrades to a High-Card ranking
/// over whatever is available; that path is for pre-showdown display only and
/// never resolves a pot.
pub fn evaluate_hand(hole: &[Card; 2], community: &[Card]) -> HandResult {
    let mut cards: Vec<Card> = Vec::with_capacity(7);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    evaluate(&cards)
}

/// Compares two evaluated hands; `Ordering::Equal` means a split pot.
pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.value.cmp(&b.value)
}

/// Evaluates every entry's best hand against the community cards and returns
/// all entries sharing the maximum value, supporting multi-way splits.
pub fn find_winners(
    entries: &[(usize, (Card, Card))],
    community: &[Card],
) -> Vec<(usize, HandResult)> {
    let results: Vec<(usize, HandResult)> = entries
        .iter()
        .map(|&(seat, (c1, c2))| (seat, evaluate_hand(&[c1, c2], community)))
        .collect();

    let best = match results.iter().map(|(_, r)| r.value).max() {
        Some(v) => v,
        None => return Vec::new(),
    };

    results.into_iter().filter(|(_, r)| r.value == best).collect()
}

fn evaluate(cards: &[Card]) -> HandResult {
    if cards.len() < 5 {
        let mut sorted = cards.to_vec();
        sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
        sorted.truncate(5);
        let kickers: Vec<u8> = sorted.iter().map(|c| rank_val(c.rank)).collect();
        return build(Category::HighCard, sorted, &kickers);
    }

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[rank_val(c.rank) as usize] += 1;
    }

    // Straight flush, with the Ace counting high (Royal Flush) and low (wheel).
    for &suit in &all_suits() {
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        if suited.len() >= 5 {
            let ranks: Vec<u8> = suited.iter().map(|c| rank_val(c.rank)).collect();
            if let Some(high) = straight_high(&ranks) {
                let five = straight_cards(&suited, high);
                let category = if high == 14 {
                    Category::RoyalFlush
                } else {
                    Category::StraightFlush
                };
                return build(category, five, &straight_kicker_ranks(high));
            }
        }
    }

    // Four of a kind, kicker is the highest remaining card.
    if let Some(quad) = top_rank_where(&rank_counts, |c| c == 4) {
        let mut five = cards_of_rank(cards, quad, 4);
        let kicker = best_excluding(cards, &[quad], 1);
        let mut kickers = vec![quad; 4];
        kickers.extend(kicker.iter().map(|c| rank_val(c.rank)));
        five.extend(kicker);
        return build(Category::FourOfAKind, five, &kickers);
    }

    // Full house: highest trips plus the best remaining pair group, where a
    // second three-of-a-kind degrades to a pair candidate.
    if let Some(trip) = top_rank_where(&rank_counts, |c| c >= 3) {
        let pair = (2..=14u8)
            .rev()
            .find(|&r| r != trip && rank_counts[r as usize] >= 2);
        if let Some(pair) = pair {
            let mut five = cards_of_rank(cards, trip, 3);
            five.extend(cards_of_rank(cards, pair, 2));
            return build(Category::FullHouse, five, &[trip, trip, trip, pair, pair]);
        }
    }

    // Flush: best five of the suit, descending.
    for &suit in &all_suits() {
        let mut suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        if suited.len() >= 5 {
            suited.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
            suited.truncate(5);
            let kickers: Vec<u8> = suited.iter().map(|c| rank_val(c.rank)).collect();
            return build(Category::Flush, suited, &kickers);
        }
    }

    // Straight over all suits, wheel supported.
    let uniq: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if let Some(high) = straight_high(&uniq) {
        let five = straight_cards(cards, high);
        return build(Category::Straight, five, &straight_kicker_ranks(high));
    }

    // Three of a kind with the two highest kickers.
    if let Some(trip) = top_rank_where(&rank_counts, |c| c >= 3) {
        let mut five = cards_of_rank(cards, trip, 3);
        let kick = best_excluding(cards, &[trip], 2);
        let mut kickers = vec![trip; 3];
        kickers.extend(kick.iter().map(|c| rank_val(c.rank)));
        five.extend(kick);
        return build(Category::ThreeOfAKind, five, &kickers);
    }

    let pairs: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == 2)
        .collect();

    // Two pair: the two highest pair groups plus one kicker.
    if pairs.len() >= 2 {
        let (hi, lo) = (pairs[0], pairs[1]);
        let mut five = cards_of_rank(cards, hi, 2);
        five.extend(cards_of_rank(cards, lo, 2));
        let kick = best_excluding(cards, &[hi, lo], 1);
        let mut kickers = vec![hi, hi, lo, lo];
        kickers.extend(kick.iter().map(|c| rank_val(c.rank)));
        five.extend(kick);
        return build(Category::TwoPair, five, &kickers);
    }

    // One pair plus three kickers.
    if let Some(&pair) = pairs.first() {
        let mut five = cards_of_rank(cards, pair, 2);
        let kick = best_excluding(cards, &[pair], 3);
        let mut kickers = vec![pair; 2];
        kickers.extend(kick.iter().map(|c| rank_val(c.rank)));
        five.extend(kick);
        return build(Category::OnePair, five, &kickers);
    }

    // High card: top five ranks.
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
    sorted.truncate(5);
    let kickers: Vec<u8> = sorted.iter().map(|c| rank_val(c.rank)).collect();
    build(Category::HighCard, sorted, &kickers)
}

/// Finds the highest straight in a set of ranks, returning its high card.
/// The Ace additionally counts low, so `A-2-3-4-5` reports a 5-high wheel.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut v = ranks.to_vec();
    v.sort_unstable();
    v.dedup();
    if v.binary_search(&14).is_ok() {
        v.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..v.len() {
        if v[i] == v[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = v[i];
            }
        } else {
            run = 1;
        }
    }
    (best_high > 0).then_some(best_high)
}

/// Kicker ranks for a straight in play order; the wheel scores its Ace as 1
/// so it loses to every higher straight.
fn straight_kicker_ranks(high: u8) -> [u8; 5] {
    if high == 5 {
        [5, 4, 3, 2, 1]
    } else {
        [high, high - 1, high - 2, high - 3, high - 4]
    }
}

fn straight_cards(cards: &[Card], high: u8) -> Vec<Card> {
    let needed: [u8; 5] = if high == 5 {
        [5, 4, 3, 2, 14]
    } else {
        [high, high - 1, high - 2, high - 3, high - 4]
    };
    needed
        .iter()
        .filter_map(|&r| cards.iter().copied().find(|c| rank_val(c.rank) == r))
        .collect()
}

fn top_rank_where(rank_counts: &[u8; 15], pred: impl Fn(u8) -> bool) -> Option<u8> {
    (2..=14u8).rev().find(|&r| pred(rank_counts[r as usize]))
}

fn cards_of_rank(cards: &[Card], rank: u8, n: usize) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| rank_val(c.rank) == rank)
        .take(n)
        .collect()
}

fn best_excluding(cards: &[Card], excluded: &[u8], n: usize) -> Vec<Card> {
    let mut rest: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|c| !excluded.contains(&rank_val(c.rank)))
        .collect();
    rest.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
    rest.truncate(n);
    rest
}
