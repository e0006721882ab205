use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use inverted_view::{
    ChildChange, ChildMetrics, ScrollHandle, ScrollValues, SizeRecord, ViewOptions,
};

#[test]
fn controller_pumps_size_batches() {
    let mut c = Controller::<u64>::new(
        ViewOptions::new()
            .with_initial_content_height(1000)
            .with_initial_viewport_height(300),
    );
    c.mount_children(vec![(1, ChildMetrics::new(100, 100))]);

    let mut sizes = QueuedSizeSource::new();
    sizes.push_batch(vec![SizeRecord::Child {
        key: 1,
        height: 60,
        width: 600,
        offset_top: 100,
    }]);

    let applied = c.pump_sizes(&mut sizes, 0);
    assert_eq!(applied, -40);
    assert_eq!(c.scroll_offset(), 960);
    assert_eq!(sizes.pending_batches(), 0);
}

#[test]
fn controller_pumps_each_batch_separately() {
    let mut c = Controller::<u64>::new(
        ViewOptions::new()
            .with_initial_content_height(1000)
            .with_initial_viewport_height(300),
    );

    let mut children = QueuedChildSource::new();
    // Two platform-delivered batches: each gets its own fold line and delta.
    children.push_batch(vec![ChildChange::Added {
        key: 1,
        offset_top: 0,
        height: 50,
    }]);
    children.push_batch(vec![ChildChange::Removed { key: 1 }]);

    let applied = c.pump_children(&mut children, 0);
    assert_eq!(applied, 0);
    assert_eq!(c.scroll_offset(), 1000);
    assert!(!c.view().is_tracked(&1));
}

#[test]
fn disconnect_is_idempotent_and_stops_delivery() {
    let mut sizes = QueuedSizeSource::<u64>::new();
    sizes.push_batch(vec![SizeRecord::Container {
        height: 200,
        width: 600,
    }]);

    sizes.disconnect();
    sizes.disconnect();
    assert!(!sizes.is_connected());

    // Nothing queued before or after the disconnect is delivered.
    sizes.push_batch(vec![SizeRecord::Container {
        height: 100,
        width: 600,
    }]);
    let mut out = Vec::new();
    sizes.poll_batch(&mut out);
    assert!(out.is_empty());

    let mut children = QueuedChildSource::<u64>::new();
    children.push_batch(vec![ChildChange::Removed { key: 1 }]);
    children.disconnect();
    children.disconnect();
    let mut out = Vec::new();
    children.poll_batch(&mut out);
    assert!(out.is_empty());
}

#[test]
fn controller_exposes_the_scroll_handle() {
    let mut c = Controller::<u64>::new(
        ViewOptions::new()
            .with_initial_content_height(1500)
            .with_initial_viewport_height(300),
    );
    c.on_scroll(200, 0);

    let handle: &mut dyn ScrollHandle = &mut c;
    assert_eq!(handle.scroll_offset(), 200);
    assert_eq!(handle.viewport_height(), 300);
    handle.scroll_to_bottom();
    assert_eq!(handle.scroll_offset(), 1500);
}

#[test]
fn end_to_end_chat_session() {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);

    let mut c = Controller::<u64>::new(
        ViewOptions::new()
            .with_initial_content_height(1000)
            .with_initial_viewport_height(300)
            .with_on_scroll(Some(move |v: ScrollValues| {
                sink.lock().unwrap().push(v);
            })),
    );
    // Ten 100px messages already mounted.
    c.mount_children((0..10u64).map(|i| (i, ChildMetrics::new(100, i * 100))));
    c.tick(0); // mount report
    assert_eq!(reports.lock().unwrap().len(), 1);

    let mut sizes = QueuedSizeSource::new();
    let mut children = QueuedChildSource::new();

    // An image above the fold finishes loading and grows message 2 by 120px.
    sizes.push_batch(vec![SizeRecord::Child {
        key: 2,
        height: 220,
        width: 600,
        offset_top: 200,
    }]);
    c.pump_sizes(&mut sizes, 10);
    assert_eq!(c.scroll_offset(), 1120);

    // History pruning removes the two oldest messages in one batch.
    children.push_batch(vec![
        ChildChange::Removed { key: 0 },
        ChildChange::Removed { key: 1 },
    ]);
    c.pump_children(&mut children, 20);
    assert_eq!(c.scroll_offset(), 920);
    assert_eq!(c.view().tracked_count(), 8);

    // The user drags to the top, then a message far below the fold grows: no jump.
    c.on_scroll(0, 30);
    sizes.push_batch(vec![SizeRecord::Child {
        key: 9,
        height: 180,
        width: 600,
        offset_top: 900,
    }]);
    c.pump_sizes(&mut sizes, 40);
    assert_eq!(c.scroll_offset(), 0);

    // Everything above settles into one coalesced report after the interval.
    c.tick(200);
    let got = reports.lock().unwrap().clone();
    assert_eq!(got.len(), 2);
    assert_eq!(got[1].scroll_offset, 0);
    assert_eq!(got[1].viewport_height, 300);
    // The controller's snapshot is what the reporter just forwarded.
    assert_eq!(c.scroll_values(), got[1]);

    // New message arrives; the host jumps back to the bottom via the handle.
    children.push_batch(vec![ChildChange::Added {
        key: 10,
        offset_top: 1080,
        height: 60,
    }]);
    c.pump_children(&mut children, 220);
    assert_eq!(c.scroll_offset(), 0); // added below the fold: no perturbation

    c.scroll_to_bottom();
    assert_eq!(c.scroll_offset(), c.view().content_height());
}
