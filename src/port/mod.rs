//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!  ┌──────────────┐   ┌──────────────┐
//!  │  Reference   │   │ Market odds  │
//!  │   provider   │   │   provider   │
//!  └──────┬───────┘   └──────┬───────┘
//!         └────────┬─────────┘
//!                  ▼
//!           ┌─────────────┐      ┌──────────────┐
//!           │  EV engine  ├─────►│ Presentation │
//!           └─────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::provider::{MarketOddsProvider, MarketRow, ReferenceOddsProvider, ReferenceRow};
