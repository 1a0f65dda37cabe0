/// Stack space that must remain before a recursive step runs in place.
const RED_ZONE: usize = 100 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a freshly allocated stack segment if less than
/// the red zone remains on the current one.
///
/// Every recursive step of the parser and the evaluator goes through this, so
/// nesting depth is bounded by memory rather than by the thread's stack.
///
/// ## Example
/// ```
/// use treelox::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
