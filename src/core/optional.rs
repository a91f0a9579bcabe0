//! Checked operations on optional values.
//!
//! Card attributes that may be absent are plain `Option<T>`. The native
//! type already covers `map`, `unwrap_or` and equality; this module adds
//! the operations that report misuse through [`CardError`] instead of
//! panicking.
//!
//! ```
//! use yugioh_card_db::core::Optional;
//!
//! let level = Option::<u8>::present(Some(4)).unwrap();
//! assert_eq!(level.try_unwrap().unwrap(), 4);
//!
//! let missing = Option::<u8>::absent();
//! assert!(missing.try_unwrap().is_err());
//! ```

use super::error::{CardError, Result};

/// Extension trait for `Option<T>` with error-reporting accessors.
pub trait Optional<T>: Sized {
    /// Build a present option, failing if the value is missing.
    fn present(value: Option<T>) -> Result<Self>;

    /// Build an absent option.
    fn absent() -> Self;

    /// Take the contained value, failing if absent.
    fn try_unwrap(self) -> Result<T>;

    /// Run `action` on the contained value if present.
    fn for_each<F: FnOnce(T)>(self, action: F);
}

impl<T> Optional<T> for Option<T> {
    fn present(value: Option<T>) -> Result<Self> {
        match value {
            Some(v) => Ok(Some(v)),
            None => Err(CardError::invalid_argument(
                "cannot build a present value from a missing one",
            )),
        }
    }

    fn absent() -> Self {
        None
    }

    fn try_unwrap(self) -> Result<T> {
        self.ok_or_else(|| CardError::invalid_state("cannot unwrap an absent value"))
    }

    fn for_each<F: FnOnce(T)>(self, action: F) {
        if let Some(v) = self {
            action(v);
        }
    }
}
