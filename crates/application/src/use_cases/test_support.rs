//! Hand-driven mocks shared by the use case tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::ports::{CancellationToken, Clock, ClockDisplay, Navigator, Scheduler, TimerHandle};

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct ManualTimer {
    id: usize,
    due: Duration,
    period: Option<Duration>,
    task: Option<Task>,
    handle: ManualHandle,
}

#[derive(Default)]
struct Inner {
    now: Duration,
    next_id: usize,
    timers: Vec<ManualTimer>,
}

/// Scheduler whose time only moves when [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Clone, Default)]
pub struct ManualHandle {
    token: CancellationToken,
    finished: Rc<Cell<bool>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&self) {
        self.token.cancel();
    }

    fn is_active(&self) -> bool {
        !self.token.is_cancelled() && !self.finished.get()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that may still fire.
    pub fn active_count(&self) -> usize {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|t| t.handle.is_active())
            .count()
    }

    /// Moves virtual time forward, firing every timer that comes due.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                inner.timers.retain(|t| t.handle.is_active());
                let index = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target && t.task.is_some())
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                index.map(|i| {
                    let due = inner.timers[i].due;
                    inner.now = due;
                    let timer = &mut inner.timers[i];
                    (timer.id, timer.task.take(), timer.handle.clone())
                })
            };
            let Some((id, task, handle)) = next else {
                break;
            };
            match task {
                Some(Task::Once(f)) => {
                    handle.finished.set(true);
                    f();
                }
                Some(Task::Repeat(mut f)) => {
                    f();
                    let mut inner = self.inner.borrow_mut();
                    if let Some(timer) = inner.timers.iter_mut().find(|t| t.id == id) {
                        if let Some(period) = timer.period {
                            timer.due += period;
                        }
                        timer.task = Some(Task::Repeat(f));
                    }
                }
                None => {}
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn push(&self, delay: Duration, period: Option<Duration>, task: Task) -> ManualHandle {
        let handle = ManualHandle::default();
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.timers.push(ManualTimer {
            id,
            due,
            period,
            task: Some(task),
            handle: handle.clone(),
        });
        handle
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&self, delay: Duration, task: impl FnOnce() + 'static) -> ManualHandle {
        self.push(delay, None, Task::Once(Box::new(task)))
    }

    fn schedule_repeating(&self, period: Duration, task: impl FnMut() + 'static) -> ManualHandle {
        self.push(period, Some(period), Task::Repeat(Box::new(task)))
    }
}

/// Clock frozen at a settable instant.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("Lock poisoned") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("Lock poisoned")
    }
}

/// Display that records every label write.
#[derive(Default)]
pub struct RecordingDisplay {
    writes: RefCell<Vec<String>>,
}

impl RecordingDisplay {
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ClockDisplay for RecordingDisplay {
    fn show(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}

/// Navigator that records calls in order.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: RefCell<Vec<&'static str>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_main_screen(&self) {
        self.calls.borrow_mut().push("open_main");
    }

    fn close_launch_screen(&self) {
        self.calls.borrow_mut().push("close_launch");
    }
}
