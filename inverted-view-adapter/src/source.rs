use alloc::collections::VecDeque;
use alloc::vec::Vec;

use inverted_view::{ChildChange, SizeRecord};

/// A batched size-change source.
///
/// This abstracts the platform's size-observation primitive (a ResizeObserver, a
/// polling measurer, a test script): observations accumulate into batches, and the
/// adapter drains one batch at a time into the view. Implementations must deliver
/// batches in observation order and deliver nothing after `disconnect`.
pub trait SizeChangeSource<K> {
    /// Drains the next pending batch into `out` (clears `out` first). Leaves `out`
    /// empty when no batch is pending.
    fn poll_batch(&mut self, out: &mut Vec<SizeRecord<K>>);

    /// Releases the underlying subscription. Idempotent; no batches are delivered
    /// after the first call.
    fn disconnect(&mut self);
}

/// A batched structural-change source.
///
/// The structural counterpart of [`SizeChangeSource`]: child insertions/removals
/// accumulate into batches drained by the adapter.
pub trait StructuralChangeSource<K> {
    /// Drains the next pending batch into `out` (clears `out` first). Leaves `out`
    /// empty when no batch is pending.
    fn poll_batch(&mut self, out: &mut Vec<ChildChange<K>>);

    /// Releases the underlying subscription. Idempotent; no batches are delivered
    /// after the first call.
    fn disconnect(&mut self);
}

/// A queue-backed [`SizeChangeSource`].
///
/// Platforms that surface size changes through polling or event queues can push
/// batches here; tests use it as a scripted source.
#[derive(Clone, Debug)]
pub struct QueuedSizeSource<K> {
    batches: VecDeque<Vec<SizeRecord<K>>>,
    connected: bool,
}

impl<K> QueuedSizeSource<K> {
    pub fn new() -> Self {
        Self {
            batches: VecDeque::new(),
            connected: true,
        }
    }

    /// Enqueues one observation batch. Ignored after `disconnect`.
    pub fn push_batch(&mut self, batch: impl IntoIterator<Item = SizeRecord<K>>) {
        if !self.connected {
            return;
        }
        self.batches.push_back(batch.into_iter().collect());
    }

    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl<K> SizeChangeSource<K> for QueuedSizeSource<K> {
    fn poll_batch(&mut self, out: &mut Vec<SizeRecord<K>>) {
        out.clear();
        if let Some(batch) = self.batches.pop_front() {
            out.extend(batch);
        }
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.batches.clear();
    }
}

/// A queue-backed [`StructuralChangeSource`].
#[derive(Clone, Debug)]
pub struct QueuedChildSource<K> {
    batches: VecDeque<Vec<ChildChange<K>>>,
    connected: bool,
}

impl<K> QueuedChildSource<K> {
    pub fn new() -> Self {
        Self {
            batches: VecDeque::new(),
            connected: true,
        }
    }

    /// Enqueues one notification batch. Ignored after `disconnect`.
    pub fn push_batch(&mut self, batch: impl IntoIterator<Item = ChildChange<K>>) {
        if !self.connected {
            return;
        }
        self.batches.push_back(batch.into_iter().collect());
    }

    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl<K> StructuralChangeSource<K> for QueuedChildSource<K> {
    fn poll_batch(&mut self, out: &mut Vec<ChildChange<K>>) {
        out.clear();
        if let Some(batch) = self.batches.pop_front() {
            out.extend(batch);
        }
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.batches.clear();
    }
}

impl<K> Default for QueuedSizeSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Default for QueuedChildSource<K> {
    fn default() -> Self {
        Self::new()
    }
}
