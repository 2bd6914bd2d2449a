/// A pot tier: the chips wagered at this level and the seats eligible to win
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    /// Chips in this tier.
    pub chips: u32,
    /// Seats that contributed up to this tier, in input order.
    pub eligible: Vec<usize>,
}

/// Derives pot tiers from per-seat hand contributions.
///
/// Each distinct all-in amount caps a tier: everyone pays into the lowest
/// tier, only deeper stacks pay into the ones above it. The first tier is the
/// main pot, the rest are side pots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<SidePot>,
}

impl PotManager {
    /// Builds tiers from `(seat, total contribution)` pairs.
    pub fn from_contributions<I>(contributions: I) -> Self
    where
        I: IntoIterator<Item = (usize, u32)>,
    {
        let entries: Vec<(usize, u32)> = contributions
            .into_iter()
            .filter(|&(_, chips)| chips > 0)
            .collect();

        let mut levels: Vec<u32> = entries.iter().map(|&(_, chips)| chips).collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots = Vec::with_capacity(levels.len());
        let mut floor = 0u32;
        for &level in &levels {
            let mut chips = 0u32;
            let mut eligible = Vec::new();
            for &(seat, contributed) in &entries {
                chips += contributed.min(level) - contributed.min(floor);
                if contributed >= level {
                    eligible.push(seat);
                }
            }
            pots.push(SidePot { chips, eligible });
            floor = level;
        }

        Self { pots }
    }

    /// Chips in the main pot (the tier everyone is eligible for).
    pub fn main_pot(&self) -> u32 {
        self.pots.first().map(|p| p.chips).unwrap_or(0)
    }

    /// The side-pot tiers above the main pot.
    pub fn side_pots(&self) -> &[SidePot] {
        match self.pots.len() {
            0 | 1 => &[],
            _ => &self.pots[1..],
        }
    }

    /// Total chips across all tiers.
    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.chips).sum()
    }
}

/// Splits a pot evenly among `winners` shares using floor division. The
/// remainder of a non-divisible split goes to the first share, so the caller
/// decides the odd-chip seat by ordering the winners.
pub fn split_pot(pot: u32, winners: usize) -> Vec<u32> {
    if winners == 0 {
        return Vec::new();
    }
    let share = pot / winners as u32;
    let remainder = pot % winners as u32;
    let mut shares = vec![share; winners];
    shares[0] += remainder;
    shares
}
