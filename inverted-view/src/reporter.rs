use crate::ScrollValues;

/// Trailing-edge throttle with duplicate suppression for scroll reports.
///
/// The engine is headless, so the throttle is driven by explicit time: callers mark a
/// report as pending with [`request`](Self::request) and flush the trailing edge with
/// [`poll`](Self::poll). A burst of requests within one interval collapses into a
/// single delivery at interval expiry, carrying whatever values are current at that
/// moment. A triple identical to the last one actually forwarded is never delivered.
#[derive(Clone, Debug)]
pub struct ScrollReporter {
    interval_ms: u64,
    pending: bool,
    /// `None` while pending means "deliver on the next poll" (used for the initial
    /// mount report, which has no timestamp yet).
    deadline_ms: Option<u64>,
    last_reported: Option<ScrollValues>,
    /// When the last report was actually forwarded.
    last_forwarded_ms: Option<u64>,
}

impl ScrollReporter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: false,
            deadline_ms: None,
            last_reported: None,
            last_forwarded_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the minimum interval. An already-armed deadline is re-based onto the
    /// new interval.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        if let Some(deadline) = self.deadline_ms {
            let armed_at = deadline.saturating_sub(self.interval_ms);
            self.deadline_ms = Some(armed_at.saturating_add(interval_ms));
        }
        self.interval_ms = interval_ms;
    }

    /// Returns the last triple actually forwarded, if any.
    pub fn last_reported(&self) -> Option<ScrollValues> {
        self.last_reported
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Marks the initial mount report as pending.
    ///
    /// Nothing has been forwarded yet at mount, so the report is delivered on the
    /// first poll regardless of the interval. This is the only deadline-less path.
    pub fn request_initial(&mut self) {
        self.pending = true;
        self.deadline_ms = None;
    }

    /// Marks a report as pending from an entry point that carries no clock (e.g. the
    /// imperative scroll-to-bottom handle).
    ///
    /// Delivery is armed one interval after the last forwarded report, keeping the
    /// at-most-once-per-interval guarantee; when nothing has been forwarded yet it
    /// behaves like the initial request.
    pub fn request_throttled(&mut self) {
        if self.pending {
            return;
        }
        self.pending = true;
        self.deadline_ms = self
            .last_forwarded_ms
            .map(|t| t.saturating_add(self.interval_ms));
    }

    /// Marks a report as pending. The first request when idle arms the delivery
    /// deadline at `now_ms + interval_ms`; requests arriving while already pending
    /// coalesce into the armed delivery.
    pub fn request(&mut self, now_ms: u64) {
        if self.pending {
            return;
        }
        self.pending = true;
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Flushes the trailing edge.
    ///
    /// Returns the triple to forward when a report is pending, its deadline has
    /// expired, and `values` differs from the last triple actually forwarded.
    /// A duplicate triple clears the pending state without being forwarded.
    pub fn poll(&mut self, values: ScrollValues, now_ms: u64) -> Option<ScrollValues> {
        if !self.pending {
            return None;
        }
        if let Some(deadline) = self.deadline_ms {
            if now_ms < deadline {
                return None;
            }
        }
        self.pending = false;
        self.deadline_ms = None;

        if self.last_reported == Some(values) {
            return None;
        }
        self.last_reported = Some(values);
        self.last_forwarded_ms = Some(now_ms);
        Some(values)
    }
}
