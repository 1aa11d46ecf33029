//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌─────────────┐      ┌───────────────┐      ┌─────────────┐
//!   │ OddsSource  │ ───▶ │   Pipeline    │ ───▶ │  Reporter   │
//!   │  (adapter)  │      │ (application) │      │  (adapter)  │
//!   └─────────────┘      └───────────────┘      └─────────────┘
//! ```

pub mod outbound;

pub use outbound::report::Reporter;
pub use outbound::source::{OddsRequest, OddsSource};
