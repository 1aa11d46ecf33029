use rust_decimal::Decimal;

use oddsarb::domain::StakedRow;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Rows of one game pay the same amount whichever outcome wins.
pub fn assert_equal_payouts(rows: &[&StakedRow], tolerance: Decimal) {
    let Some(first) = rows.first() else {
        return;
    };
    for row in rows {
        assert_decimal_near(row.payout(), first.payout(), tolerance);
    }
}
