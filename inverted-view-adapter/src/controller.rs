use alloc::vec::Vec;

use inverted_view::{
    ChildChange, ChildMetrics, InvertedView, ScrollHandle, ScrollValues, SizeRecord, ViewOptions,
};

use crate::{SizeChangeSource, StructuralChangeSource, ViewKey};

/// A framework-neutral controller that wraps an `inverted_view::InvertedView` and
/// provides the common adapter workflow.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the platform's scroll listener fires
/// - `pump_sizes` / `pump_children` when observation sources have pending batches
/// - `tick(now_ms)` each frame/timer tick (to flush the trailing edge of the
///   throttled change report)
///
/// It also implements [`ScrollHandle`], the imperative surface handed back to the
/// host (scroll to bottom, read offset, read viewport height).
#[derive(Clone, Debug)]
pub struct Controller<K = u64> {
    view: InvertedView<K>,
    size_scratch: Vec<SizeRecord<K>>,
    child_scratch: Vec<ChildChange<K>>,
}

impl<K: ViewKey> Controller<K> {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            view: InvertedView::new(options),
            size_scratch: Vec::new(),
            child_scratch: Vec::new(),
        }
    }

    pub fn from_view(view: InvertedView<K>) -> Self {
        Self {
            view,
            size_scratch: Vec::new(),
            child_scratch: Vec::new(),
        }
    }

    pub fn view(&self) -> &InvertedView<K> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut InvertedView<K> {
        &mut self.view
    }

    pub fn into_view(self) -> InvertedView<K> {
        self.view
    }

    /// Registers the children already present at mount, without compensation.
    pub fn mount_children(&mut self, children: impl IntoIterator<Item = (K, ChildMetrics)>) {
        for (key, metrics) in children {
            self.view.track_child(key, metrics);
        }
    }

    /// Call this when the platform reports a scroll offset change (wheel/drag).
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.view.on_scroll(offset, now_ms);
    }

    /// Drains every pending batch from a size-change source into the view.
    ///
    /// Each batch is reconciled separately (one applied delta per batch, matching the
    /// platform's delivery granularity). Returns the summed applied delta.
    pub fn pump_sizes(&mut self, source: &mut dyn SizeChangeSource<K>, now_ms: u64) -> i64 {
        let mut applied = 0i64;
        loop {
            source.poll_batch(&mut self.size_scratch);
            if self.size_scratch.is_empty() {
                break;
            }
            applied += self
                .view
                .apply_size_batch(self.size_scratch.drain(..), now_ms);
        }
        applied
    }

    /// Drains every pending batch from a structural-change source into the view.
    ///
    /// Returns the summed applied delta.
    pub fn pump_children(
        &mut self,
        source: &mut dyn StructuralChangeSource<K>,
        now_ms: u64,
    ) -> i64 {
        let mut applied = 0i64;
        loop {
            source.poll_batch(&mut self.child_scratch);
            if self.child_scratch.is_empty() {
                break;
            }
            applied += self
                .view
                .apply_structural_batch(self.child_scratch.drain(..), now_ms);
        }
        applied
    }

    /// Advances the controller: flushes the trailing edge of the throttled report.
    pub fn tick(&mut self, now_ms: u64) {
        self.view.tick(now_ms);
    }

    /// Returns the current `ScrollValues` snapshot (the reporter may still suppress
    /// or delay forwarding it).
    pub fn scroll_values(&self) -> ScrollValues {
        self.view.scroll_values()
    }
}

impl<K: ViewKey> ScrollHandle for Controller<K> {
    fn scroll_to_bottom(&mut self) {
        self.view.scroll_to_bottom();
    }

    fn scroll_offset(&self) -> u64 {
        self.view.scroll_offset()
    }

    fn viewport_height(&self) -> u32 {
        self.view.viewport_height()
    }
}
