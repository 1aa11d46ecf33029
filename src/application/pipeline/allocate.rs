//! Stake allocation for detected arbitrage.
//!
//! Each outcome gets `total / sum * implied`, which makes `stake * price`
//! the same for every outcome of a game: `total / sum`. Whichever outcome
//! wins pays back more than the total staked.

use crate::domain::{ArbitrageRow, DomainError, Probability, Stake, StakedRow};

/// Split `total_stake` across the outcomes of each arbitrage game.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveStake`] if `total_stake` is not positive,
/// and [`DomainError::StakeOverflow`] if a stake or payout doesn't fit in a
/// `Decimal`.
pub fn allocate_stakes(
    rows: Vec<ArbitrageRow>,
    total_stake: Stake,
) -> Result<Vec<StakedRow>, DomainError> {
    if total_stake <= Stake::ZERO {
        return Err(DomainError::NonPositiveStake { stake: total_stake });
    }

    rows.into_iter()
        .map(|row| {
            let (stake, payout) = split(&row, total_stake)
                .ok_or(DomainError::StakeOverflow { stake: total_stake })?;
            let roi = Probability::ONE - row.sum_implied_probability();
            Ok(StakedRow::new(row, stake, payout, roi))
        })
        .collect()
}

/// Stake and payout for one outcome, or `None` on overflow.
fn split(row: &ArbitrageRow, total_stake: Stake) -> Option<(Stake, Stake)> {
    // The detector only emits positive sums.
    let stake = total_stake
        .checked_div(row.sum_implied_probability())?
        .checked_mul(row.implied_probability())?;
    let payout = stake.checked_mul(row.price())?;
    Some((stake, payout))
}
