//! Shared primitive IDs.

/// Store-assigned item identifier. Never reused and never shown to the user.
pub type ItemId = i64;
/// Item quantity. Any value that parses as a signed integer is accepted.
pub type Quantity = i64;
