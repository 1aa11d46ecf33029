//! Monetary and probability types.

use rust_decimal::Decimal;

/// Decimal odds, e.g. 2.10 pays 2.10x the stake including the stake itself.
pub type Price = Decimal;

/// Implied probability (1 / price) or a sum of them.
pub type Probability = Decimal;

/// Amount of money placed on an outcome.
pub type Stake = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_times_stake_is_payout() {
        let price: Price = dec!(2.10);
        let stake: Stake = dec!(100);

        assert_eq!(price * stake, dec!(210.00));
    }
}
