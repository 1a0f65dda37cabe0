/// Number formatting helpers.
///
/// This module renders the interpreter's double precision numbers as text, the
/// way `print` and the debug printer show them: integral values without a
/// fractional part, the shortest round-trip decimal otherwise, and exponent
/// notation for very large or very small magnitudes.
pub mod num;

/// Stack growth for deep recursion.
///
/// Parsing and evaluation recurse once per nesting level of the program.
/// This module lets those recursions grow the stack on demand instead of
/// overflowing it.
pub mod stack;
