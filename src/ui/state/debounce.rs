// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing for bursty input streams.
//!
//! A [`Debouncer`] collapses rapid repeated observations into a single
//! delivery: each observation replaces the pending value and re-arms the
//! deadline, and the value comes out of [`Debouncer::poll`] only once the
//! quiet period has elapsed with no further observations. Delivery is
//! poll-driven, so nothing ever fires inside the call that observed the
//! value; the update loop polls on its animation tick.

use std::time::{Duration, Instant};

/// Collapses bursts of values into one trailing delivery per quiet window.
///
/// Holds at most one pending value; a new observation supersedes the old
/// one (last writer wins). Independent instances never share state.
///
/// # Example
///
/// ```
/// use skillforge_landing::ui::state::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(16));
/// let t0 = Instant::now();
///
/// debouncer.observe(1, t0);
/// debouncer.observe(2, t0 + Duration::from_millis(5));
///
/// // Still inside the quiet window: nothing delivered yet.
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(10)), None);
///
/// // Quiet period elapsed since the *last* observation: the last value wins.
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(25)), Some(2));
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(30)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    ///
    /// A zero quiet period degenerates to "deliver on the next poll".
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a value, superseding any pending one and re-arming the
    /// deadline to `now + quiet`.
    pub fn observe(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet,
        });
    }

    /// Takes the pending value if its quiet window has elapsed.
    ///
    /// Returns the value at most once per burst; subsequent polls return
    /// `None` until a new observation arrives.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// Whether a value is waiting for its quiet window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discards any pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
