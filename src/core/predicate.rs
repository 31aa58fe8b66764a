//! Composable boolean predicates.
//!
//! Predicates are cheap to clone and combine. `always()` and `never()` are
//! the identities for `and` and `or`, which makes them convenient seeds
//! when folding a list of conditions.

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

/// A thread-safe boolean test over `&T`.
///
/// # Example
///
/// ```rust
/// use statehook::core::Predicate;
///
/// let even = Predicate::new(|n: &u32| n % 2 == 0);
/// let small = Predicate::new(|n: &u32| *n < 10);
///
/// let small_odd = small.clone().and(!even.clone());
/// assert!(small_odd.check(&3));
/// assert!(!small_odd.check(&4));
/// assert!(!small_odd.check(&11));
///
/// let any = [even, small]
///     .into_iter()
///     .fold(Predicate::never(), Predicate::or);
/// assert!(any.check(&12));
/// assert!(!any.check(&13));
/// ```
pub struct Predicate<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized + 'static> Predicate<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Matches everything.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Matches nothing.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn check(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Both must hold; `other` is not evaluated when `self` fails.
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.check(value) && other.check(value))
    }

    /// Either must hold; `other` is not evaluated when `self` passes.
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.check(value) || other.check(value))
    }
}

impl<T: ?Sized + 'static> Not for Predicate<T> {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(move |value| !self.check(value))
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
