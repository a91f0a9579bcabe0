//! # yugioh-card-db
//!
//! Structured attributes of Yu-Gi-Oh! OCG cards, and the limit regulation
//! lookup that maps a card name to its deck quota.
//!
//! ## Design Principles
//!
//! 1. **Closed Catalogues**: Card categories and quotas are enums with an
//!    explicit, exhaustively matched order. No free-form categories.
//!
//! 2. **Category-Driven Fields**: Monster statistics are optional and may
//!    only be set on cards with a monster category. Absent statistics are
//!    left out of the JSON form entirely.
//!
//! 3. **Immutable Values**: Cards and statistics never change after
//!    construction and can be shared across threads freely.
//!
//! ## Modules
//!
//! - `core`: Errors, optional-value helpers, summary configuration
//! - `cards`: Card categories, monster statistics, the `Card` aggregate
//! - `regulation`: Limit regulation quotas and the name lookup table
//!
//! No I/O happens here: hosts read and write the JSON strings themselves.

pub mod cards;
pub mod core;
pub mod regulation;

// Re-export commonly used types
pub use crate::core::{CardError, Optional, Result, SummaryConfig};

pub use crate::cards::{
    Attack, Attribute, Card, CardBuilder, CardKind, Defence, Level, LinkMarker, LinkMarkers,
    PendulumScale, Race, Rank, Status,
};

pub use crate::regulation::{LimitRegulation, RegulationTable};
