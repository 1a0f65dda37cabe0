/// Runtime values.
///
/// Defines the `Value` enum with its equality, truthiness and display rules,
/// and conversions from literals and native Rust types.
pub mod core;

/// Callable values.
///
/// Defines native functions and user functions with their captured
/// environment, and the arity and name queries shared by both.
pub mod callable;
