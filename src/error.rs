//! Error types for bleep.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// A raw byte that does not name a tone.
///
/// Defined tone values are `0` (silence) and `7..=22` (B4 through C7);
/// `1..=6` sit below the counter's reach and are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidTone(pub u8);
