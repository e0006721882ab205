/// The observable scroll state of an inverted view, as reported to the `on_scroll`
/// callback.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollValues {
    /// Total height of the scrollable content (the content wrapper).
    pub content_height: u64,
    /// Current vertical scroll position.
    pub scroll_offset: u64,
    /// Height of the visible window (the container).
    pub viewport_height: u32,
}

/// Last-known measurements for one tracked child of the content wrapper.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildMetrics {
    /// Most recently observed height of this child.
    pub height: u32,
    /// Most recently observed distance from the top of the content wrapper to the
    /// top of this child.
    pub offset_top: u64,
}

impl ChildMetrics {
    pub fn new(height: u32, offset_top: u64) -> Self {
        Self { height, offset_top }
    }

    /// Bottom edge of this child's span in content coordinates.
    pub fn bottom(&self) -> u64 {
        self.offset_top.saturating_add(self.height as u64)
    }

    /// Whether any edge of this child's span lies at or above the given fold line.
    ///
    /// A span straddling the fold counts as above it, so partially-visible edits are
    /// always compensated.
    pub fn is_at_or_above(&self, fold: u64) -> bool {
        self.offset_top <= fold || self.bottom() <= fold
    }
}

/// One size observation delivered by a batched size-change source.
///
/// `Child` records carry the child's freshly measured `offset_top` along with the new
/// height: a headless engine cannot read live layout, so the platform adapter supplies
/// post-layout measurements with the record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeRecord<K> {
    /// The outer scrollable container changed size; its height is the viewport height.
    Container { height: u32, width: u32 },
    /// The content wrapper changed size; its height is the total content height.
    Content { height: u32, width: u32 },
    /// A direct child of the content wrapper changed size.
    Child {
        key: K,
        height: u32,
        width: u32,
        offset_top: u64,
    },
}

impl<K> SizeRecord<K> {
    /// Platform observers report a not-yet-laid-out element as 0×0 on first delivery.
    /// Such records are phantoms, not real changes.
    pub fn is_zero_size(&self) -> bool {
        let (h, w) = match self {
            Self::Container { height, width }
            | Self::Content { height, width }
            | Self::Child { height, width, .. } => (*height, *width),
        };
        h == 0 && w == 0
    }
}

/// One structural notification delivered by a batched structural-change source.
///
/// Insertions carry the new child's measured geometry; removals are resolved against
/// the view's last-known tracking entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChildChange<K> {
    Added {
        key: K,
        offset_top: u64,
        height: u32,
    },
    Removed { key: K },
}

/// The imperative handle an inverted view exposes to its host.
///
/// This is the narrow capability surface handed back to the caller (e.g. through a
/// ref/handle mechanism): jump to the bottom, read the current offset, read the
/// viewport height. All three are safe to call before anything has been measured.
pub trait ScrollHandle {
    /// Jumps the viewport to the bottom of the content (offset = content height).
    fn scroll_to_bottom(&mut self);
    /// Returns the last known scroll offset.
    fn scroll_offset(&self) -> u64;
    /// Returns the last known viewport height.
    fn viewport_height(&self) -> u32;
}
