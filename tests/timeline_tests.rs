// Host-side tests for the cancellable one-shot timeline.

use chest_core::*;

fn drain(t: &mut Timeline<&'static str>, now: f64) -> Vec<&'static str> {
    std::iter::from_fn(|| t.pop_due(now)).map(|f| f.task).collect()
}

#[test]
fn fires_in_due_order_with_ties_in_schedule_order() {
    let mut t = Timeline::new();
    let c = CycleId(0);
    t.schedule(c, 300.0, "late");
    t.schedule(c, 100.0, "first");
    t.schedule(c, 200.0, "tie-a");
    t.schedule(c, 200.0, "tie-b");
    assert_eq!(drain(&mut t, 250.0), vec!["first", "tie-a", "tie-b"]);
    assert_eq!(t.pending(), 1);
    assert_eq!(drain(&mut t, 300.0), vec!["late"]);
    assert!(t.pop_due(1e9).is_none());
}

#[test]
fn nothing_fires_early() {
    let mut t = Timeline::new();
    t.schedule(CycleId(0), 2000.0, "reveal");
    assert!(t.pop_due(1999.9).is_none());
    let fired = t.pop_due(2000.0).unwrap();
    assert_eq!(fired.task, "reveal");
    assert_eq!(fired.due_ms, 2000.0);
}

#[test]
fn cancel_by_handle() {
    let mut t = Timeline::new();
    let h = t.schedule(CycleId(0), 10.0, "a");
    t.schedule(CycleId(0), 20.0, "b");
    assert!(t.is_pending(h));
    assert!(t.cancel(h));
    assert!(!t.cancel(h));
    assert!(!t.is_pending(h));
    assert_eq!(drain(&mut t, 100.0), vec!["b"]);
}

#[test]
fn cancel_cycle_only_drops_that_cycle() {
    let mut t = Timeline::new();
    let old = CycleId(3);
    let new = old.next();
    t.schedule(old, 10.0, "stale-1");
    t.schedule(old, 20.0, "stale-2");
    t.schedule(new, 15.0, "fresh");
    assert_eq!(t.pending_in(old), 2);
    assert_eq!(t.cancel_cycle(old), 2);
    assert_eq!(t.pending_in(old), 0);
    assert_eq!(drain(&mut t, 100.0), vec!["fresh"]);
}

#[test]
fn fired_handle_cannot_be_cancelled() {
    let mut t = Timeline::new();
    let h = t.schedule(CycleId(0), 0.0, "now");
    assert_eq!(t.pop_due(0.0).map(|f| f.handle), Some(h));
    assert!(!t.cancel(h));
}
