use alloc::sync::Arc;

use crate::key::{ChildKey, ChildMap};
use crate::reporter::ScrollReporter;
use crate::{ChildChange, ChildMetrics, ScrollHandle, ScrollValues, SizeRecord, ViewOptions};

/// A headless bottom-anchored scroll view engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; children are identified by a stable key `K`.
/// - Your adapter drives it by feeding observation batches
///   ([`apply_size_batch`](Self::apply_size_batch),
///   [`apply_structural_batch`](Self::apply_structural_batch)) and scroll events
///   ([`on_scroll`](Self::on_scroll)).
/// - The adapter reads back [`scroll_offset`](Self::scroll_offset) after each batch to
///   position the real viewport.
///
/// Each batch is reduced to one scroll-offset delta, applied atomically at the end of
/// the pass, so that mutations at or above the bottom edge of the visible window (the
/// fold) never move the visible content. Mutations strictly below the fold contribute
/// nothing.
///
/// Anomalous inputs never raise: observations for unknown children and 0×0 phantom
/// records are dropped, and the last good scroll offset is preserved.
#[derive(Clone, Debug)]
pub struct InvertedView<K = u64> {
    options: ViewOptions,
    viewport_height: u32,
    content_height: u64,
    scroll_offset: u64,
    children: ChildMap<K>,
    reporter: ScrollReporter,
}

impl<K: ChildKey> InvertedView<K> {
    /// Creates a new view from options.
    ///
    /// The view mounts scrolled to the bottom: the initial scroll offset equals
    /// `options.initial_content_height`. An initial report is queued and delivered on
    /// the first [`tick`](Self::tick) or batch.
    pub fn new(options: ViewOptions) -> Self {
        let viewport_height = options.initial_viewport_height;
        let content_height = options.initial_content_height;
        ivdebug!(
            viewport_height,
            content_height,
            report_interval_ms = options.report_interval_ms,
            "InvertedView::new"
        );
        let mut reporter = ScrollReporter::new(options.report_interval_ms);
        reporter.request_initial();
        Self {
            viewport_height,
            content_height,
            scroll_offset: content_height,
            children: ChildMap::<K>::default(),
            reporter,
            options,
        }
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn set_on_scroll(
        &mut self,
        on_scroll: Option<impl Fn(ScrollValues) + Send + Sync + 'static>,
    ) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn set_report_interval_ms(&mut self, interval_ms: u64) {
        self.options.report_interval_ms = interval_ms;
        self.reporter.set_interval_ms(interval_ms);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u64 {
        self.content_height
    }

    /// Returns the current observable state as one snapshot.
    pub fn scroll_values(&self) -> ScrollValues {
        ScrollValues {
            content_height: self.content_height,
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    /// Jumps the viewport to the bottom of the content.
    ///
    /// Sets the scroll offset to the full content height (the platform viewport clamps
    /// to its own maximum). A no-op against zero-height content.
    pub fn scroll_to_bottom(&mut self) {
        ivtrace!(content_height = self.content_height, "scroll_to_bottom");
        self.scroll_offset = self.content_height;
        // No clock on the imperative handle; the reporter arms the delivery one
        // interval after the last forwarded report.
        self.reporter.request_throttled();
    }

    /// Applies a scroll offset reported by the platform's scroll listener.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.scroll_offset = offset;
        self.request_report(now_ms);
        self.try_report(now_ms);
    }

    /// Begins tracking a child without compensation.
    ///
    /// This is the mount path: children already present when the view attaches are
    /// registered directly, as no structural notification will arrive for them.
    /// Runtime insertions go through [`apply_structural_batch`](Self::apply_structural_batch)
    /// instead.
    pub fn track_child(&mut self, key: K, metrics: ChildMetrics) {
        self.children.insert(key, metrics);
    }

    /// Stops tracking a child without compensation.
    pub fn forget_child(&mut self, key: &K) -> Option<ChildMetrics> {
        self.children.remove(key)
    }

    pub fn is_tracked(&self, key: &K) -> bool {
        self.children.contains_key(key)
    }

    pub fn tracked_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the last-known measurements for a tracked child.
    pub fn child_metrics(&self, key: &K) -> Option<ChildMetrics> {
        self.children.get(key).copied()
    }

    /// Iterates over all tracked children without allocations.
    pub fn for_each_tracked_child(&self, mut f: impl FnMut(&K, ChildMetrics)) {
        for (k, m) in self.children.iter() {
            f(k, *m);
        }
    }

    /// The fold line: the bottom edge of the currently visible window, in content
    /// coordinates. Changes at or above this line must be compensated; changes
    /// strictly below it must not move the viewport.
    fn fold(&self) -> u64 {
        self.scroll_offset.saturating_add(self.viewport_height as u64)
    }

    /// Consumes one batch of size observations and applies a single compensating
    /// scroll-offset delta.
    ///
    /// Per batch:
    /// - 0×0 records are phantoms from not-yet-laid-out elements and are skipped.
    /// - A content record adopts the new content height with no delta contribution.
    /// - A container record contributes `old_height - new_height` at the end of the
    ///   batch, keeping the top of the window stable when the viewport itself shrinks
    ///   or grows.
    /// - A child record refreshes the tracking entry; its height delta contributes
    ///   when either edge of the child's span is at or above the fold captured at
    ///   batch start. Records for unknown children are dropped.
    ///
    /// Returns the applied delta.
    pub fn apply_size_batch(
        &mut self,
        records: impl IntoIterator<Item = SizeRecord<K>>,
        now_ms: u64,
    ) -> i64 {
        let mut next_viewport = self.viewport_height;
        let mut next_content = self.content_height;
        let mut delta: i64 = 0;
        let fold = self.fold();

        for record in records {
            if record.is_zero_size() {
                continue;
            }
            match record {
                SizeRecord::Content { height, .. } => {
                    next_content = height as u64;
                }
                SizeRecord::Container { height, .. } => {
                    next_viewport = height;
                }
                SizeRecord::Child {
                    key,
                    height,
                    offset_top,
                    ..
                } => {
                    let Some(entry) = self.children.get_mut(&key) else {
                        // Unobserved child (e.g. a record queued past its removal):
                        // not attributable to anything, so it contributes nothing.
                        continue;
                    };
                    let d = height as i64 - entry.height as i64;
                    entry.height = height;
                    entry.offset_top = offset_top;
                    if d != 0 {
                        let span = ChildMetrics::new(height, offset_top);
                        if span.is_at_or_above(fold) {
                            delta += d;
                        }
                    }
                }
            }
        }

        if next_viewport != self.viewport_height {
            delta += self.viewport_height as i64 - next_viewport as i64;
        }

        self.apply_delta(delta);
        self.viewport_height = next_viewport;
        self.content_height = next_content;

        ivtrace!(delta, scroll_offset = self.scroll_offset, "apply_size_batch");
        self.request_report(now_ms);
        self.try_report(now_ms);
        delta
    }

    /// Consumes one batch of child insertions/removals and applies a single
    /// compensating scroll-offset delta.
    ///
    /// Removals are resolved against the last-known tracking entry and subtract the
    /// child's height when its span was at or above the fold; the child is untracked
    /// either way. Insertions add the new child's measured height when its span is at
    /// or above the fold, and begin tracking it either way. Removals of unknown
    /// children are dropped.
    ///
    /// Returns the applied delta.
    pub fn apply_structural_batch(
        &mut self,
        changes: impl IntoIterator<Item = ChildChange<K>>,
        now_ms: u64,
    ) -> i64 {
        let mut delta: i64 = 0;
        let fold = self.fold();

        for change in changes {
            match change {
                ChildChange::Removed { key } => {
                    let Some(entry) = self.children.remove(&key) else {
                        continue;
                    };
                    if entry.is_at_or_above(fold) {
                        delta -= entry.height as i64;
                    }
                }
                ChildChange::Added {
                    key,
                    offset_top,
                    height,
                } => {
                    let metrics = ChildMetrics::new(height, offset_top);
                    if metrics.is_at_or_above(fold) {
                        delta += height as i64;
                    }
                    self.children.insert(key, metrics);
                }
            }
        }

        self.apply_delta(delta);

        ivtrace!(
            delta,
            scroll_offset = self.scroll_offset,
            "apply_structural_batch"
        );
        self.request_report(now_ms);
        self.try_report(now_ms);
        delta
    }

    /// Flushes the trailing edge of the throttled reporter.
    ///
    /// Adapters should call this on their frame/timer tick so a burst of batches still
    /// produces its coalesced report once the interval expires.
    pub fn tick(&mut self, now_ms: u64) {
        self.try_report(now_ms);
    }

    fn apply_delta(&mut self, delta: i64) {
        if delta >= 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(delta as u64);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
    }

    fn request_report(&mut self, now_ms: u64) {
        self.reporter.request(now_ms);
    }

    fn try_report(&mut self, now_ms: u64) {
        let values = self.scroll_values();
        if let Some(values) = self.reporter.poll(values, now_ms) {
            if let Some(cb) = &self.options.on_scroll {
                cb(values);
            }
        }
    }
}

impl<K: ChildKey> ScrollHandle for InvertedView<K> {
    fn scroll_to_bottom(&mut self) {
        InvertedView::scroll_to_bottom(self);
    }

    fn scroll_offset(&self) -> u64 {
        InvertedView::scroll_offset(self)
    }

    fn viewport_height(&self) -> u32 {
        InvertedView::viewport_height(self)
    }
}
