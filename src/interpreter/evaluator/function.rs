/// Function declaration and calls.
///
/// Binds declared functions with their closure, checks callees and argument
/// counts, and runs user function bodies in a fresh scope.
pub mod core;

/// Native functions.
///
/// The table of functions implemented in Rust that every interpreter starts
/// with in its global scope.
pub mod native;
