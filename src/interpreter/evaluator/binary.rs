/// Binary operator dispatch.
pub mod core;

/// Arithmetic and string concatenation.
pub mod arithmetic;

/// Ordering comparisons and equality.
pub mod comparison;

/// Short-circuiting `and` and `or`.
pub mod logic;
