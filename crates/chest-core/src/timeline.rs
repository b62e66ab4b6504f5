//! One-shot deferred continuations with cancellation.
//!
//! Every entry belongs to a chest cycle so that a reset can drop everything the
//! previous cycle still had in flight. The timeline never reads a clock; the
//! caller feeds it the current time.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// One chest lifecycle, from scan to reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CycleId(pub u32);

impl CycleId {
    pub fn next(self) -> Self {
        CycleId(self.0.wrapping_add(1))
    }
}

/// A continuation that became due.
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub cycle: CycleId,
    pub due_ms: f64,
    pub task: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    due_ms: f64,
    cycle: CycleId,
    task: T,
}

#[derive(Clone, Debug)]
pub struct Timeline<T> {
    next_handle: u64,
    entries: FnvHashMap<TimerHandle, Entry<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, cycle: CycleId, due_ms: f64, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.insert(handle, Entry { due_ms, cycle, task });
        handle
    }

    /// Returns false when the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    /// Cancel every pending continuation of `cycle`; returns how many were dropped.
    pub fn cancel_cycle(&mut self, cycle: CycleId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.cycle != cycle);
        before - self.entries.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn pending_in(&self, cycle: CycleId) -> usize {
        self.entries.values().filter(|e| e.cycle == cycle).count()
    }

    /// Remove and return the earliest entry due at or before `now_ms`; ties
    /// fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Fired<T>> {
        let handle = self
            .entries
            .iter()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by(|(ha, a), (hb, b)| a.due_ms.total_cmp(&b.due_ms).then(ha.cmp(hb)))
            .map(|(h, _)| *h)?;
        self.entries.remove(&handle).map(|e| Fired {
            handle,
            cycle: e.cycle,
            due_ms: e.due_ms,
            task: e.task,
        })
    }
}
