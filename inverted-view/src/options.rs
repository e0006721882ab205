use alloc::sync::Arc;

use crate::ScrollValues;

/// A callback fired (throttled) when the observable scroll state changes.
///
/// The engine forwards a [`ScrollValues`] triple at most once per report interval,
/// and only when at least one of the three values differs from the last triple
/// actually forwarded.
pub type OnScrollCallback = Arc<dyn Fn(ScrollValues) + Send + Sync>;

/// Configuration for [`crate::InvertedView`].
///
/// This type is cheap to clone: the callback is stored in an `Arc` so adapters can
/// tweak a field and rebuild options without reallocating closures.
pub struct ViewOptions {
    /// Height of the container at mount, if already laid out.
    pub initial_viewport_height: u32,
    /// Height of the content wrapper at mount, if already laid out.
    ///
    /// The view starts scrolled to the bottom: the initial scroll offset equals this
    /// value (the defining behavior of an inverted/log-style view).
    pub initial_content_height: u64,
    /// Optional throttled observer of `(content height, scroll offset, viewport height)`.
    pub on_scroll: Option<OnScrollCallback>,
    /// Minimum interval between two forwarded `on_scroll` calls, in milliseconds.
    pub report_interval_ms: u64,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self {
            initial_viewport_height: 0,
            initial_content_height: 0,
            on_scroll: None,
            report_interval_ms: 150,
        }
    }

    pub fn with_initial_viewport_height(mut self, height: u32) -> Self {
        self.initial_viewport_height = height;
        self
    }

    pub fn with_initial_content_height(mut self, height: u64) -> Self {
        self.initial_content_height = height;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollValues) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_report_interval_ms(mut self, interval_ms: u64) -> Self {
        self.report_interval_ms = interval_ms;
        self
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ViewOptions {
    fn clone(&self) -> Self {
        Self {
            initial_viewport_height: self.initial_viewport_height,
            initial_content_height: self.initial_content_height,
            on_scroll: self.on_scroll.clone(),
            report_interval_ms: self.report_interval_ms,
        }
    }
}

impl core::fmt::Debug for ViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewOptions")
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("initial_content_height", &self.initial_content_height)
            .field("report_interval_ms", &self.report_interval_ms)
            .finish_non_exhaustive()
    }
}
