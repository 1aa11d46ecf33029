//! Report sink port.

use crate::domain::StakedRow;
use crate::error::Result;

/// Renders the staked arbitrage rows of a run.
///
/// A reporter is a terminal sink: nothing downstream reads its output.
pub trait Reporter {
    /// Render every game in `rows`.
    fn report(&mut self, rows: &[StakedRow]) -> Result<()>;
}
