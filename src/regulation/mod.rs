//! Limit regulation: how many copies of each card a deck may hold.
//!
//! ## Key Types
//!
//! - `LimitRegulation`: Quota value (prohibited, limited, semi-limited, unlimited)
//! - `RegulationTable`: Name to quota lookup, persisted grouped by quota

pub mod limit;
pub mod table;

pub use limit::LimitRegulation;
pub use table::RegulationTable;
