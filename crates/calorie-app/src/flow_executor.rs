use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
    time::{Duration, Instant},
};

use crate::action::{Action, ActionRequestQueue};

/// Lightweight async flow executor for UI orchestration.
///
/// This executor is polled from the app update loop with the frame time and
/// drives flow futures that request UI actions, await modal responses, and
/// sleep until a deadline.
pub(crate) struct FlowExecutor {
    state: Rc<RefCell<FlowState>>,
    tasks: Vec<FlowTask>,
}

impl std::fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("active", &self.active_count())
            .field("next_wake", &self.next_wake())
            .finish_non_exhaustive()
    }
}

impl Default for FlowExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowExecutor {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(FlowState {
                now: Instant::now(),
                next_wake: None,
                pending_actions: Vec::new(),
            })),
            tasks: Vec::new(),
        }
    }

    /// Returns a handle for flows to request actions and sleep.
    #[must_use]
    pub(crate) fn handle(&self) -> FlowHandle {
        FlowHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Returns the number of flows that have not finished or been aborted.
    #[must_use]
    pub(crate) fn active_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status.get() == FlowStatus::Running)
            .count()
    }

    /// Earliest deadline a sleeping flow is waiting for, as of the last poll.
    #[must_use]
    pub(crate) fn next_wake(&self) -> Option<Instant> {
        self.state.borrow().next_wake
    }

    /// Spawn a new flow future. The returned handle observes and aborts it.
    pub(crate) fn spawn(&mut self, future: impl Future<Output = ()> + 'static) -> FlowTaskHandle {
        let status = Rc::new(Cell::new(FlowStatus::Running));
        self.tasks.push(FlowTask {
            future: Box::pin(future),
            status: Rc::clone(&status),
        });
        FlowTaskHandle { status }
    }

    /// Poll all active flows at time `now` and drain any queued actions into
    /// the UI action queue. Aborted flows are dropped without being polled.
    pub(crate) fn poll(&mut self, now: Instant, action_queue: &mut ActionRequestQueue) {
        {
            let mut state = self.state.borrow_mut();
            state.now = now;
            state.next_wake = None;
        }
        self.drain_actions(action_queue);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        self.tasks.retain_mut(|task| {
            if task.status.get() == FlowStatus::Aborted {
                return false;
            }
            if task.future.as_mut().poll(&mut cx).is_ready() {
                task.status.set(FlowStatus::Finished);
                return false;
            }
            true
        });

        self.drain_actions(action_queue);
    }

    fn drain_actions(&mut self, action_queue: &mut ActionRequestQueue) {
        let mut state = self.state.borrow_mut();
        for action in state.pending_actions.drain(..) {
            action_queue.request(action);
        }
    }
}

/// Flow handle used by async flows to request actions and sleep.
#[derive(Clone)]
pub(crate) struct FlowHandle {
    state: Rc<RefCell<FlowState>>,
}

impl FlowHandle {
    pub(crate) fn request_action(&self, action: Action) {
        self.state.borrow_mut().pending_actions.push(action);
    }

    /// Completes once `duration` has passed on the executor clock, counted
    /// from the poll in which the sleep is first awaited.
    #[must_use]
    pub(crate) fn sleep(&self, duration: Duration) -> Sleep {
        Sleep {
            state: Rc::clone(&self.state),
            duration,
            deadline: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowStatus {
    Running,
    Finished,
    Aborted,
}

/// Handle to a spawned flow. Dropping the handle does not cancel the flow.
#[derive(Debug, Clone)]
pub(crate) struct FlowTaskHandle {
    status: Rc<Cell<FlowStatus>>,
}

impl FlowTaskHandle {
    /// Stops the flow before its next poll. No-op once it has finished.
    pub(crate) fn abort(&self) {
        if self.status.get() == FlowStatus::Running {
            self.status.set(FlowStatus::Aborted);
        }
    }

    #[must_use]
    pub(crate) fn is_running(&self) -> bool {
        self.status.get() == FlowStatus::Running
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_aborted(&self) -> bool {
        self.status.get() == FlowStatus::Aborted
    }
}

/// Future returned by [`FlowHandle::sleep`].
pub(crate) struct Sleep {
    state: Rc<RefCell<FlowState>>,
    duration: Duration,
    deadline: Option<Instant>,
}

impl Future for Sleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        let now = self.state.borrow().now;
        let duration = self.duration;
        let deadline = *self.deadline.get_or_insert(now + duration);
        if now >= deadline {
            return Poll::Ready(());
        }

        let mut state = self.state.borrow_mut();
        state.next_wake = Some(state.next_wake.map_or(deadline, |wake| wake.min(deadline)));
        Poll::Pending
    }
}

struct FlowTask {
    future: Pin<Box<dyn Future<Output = ()>>>,
    status: Rc<Cell<FlowStatus>>,
}

struct FlowState {
    now: Instant,
    next_wake: Option<Instant>,
    pending_actions: Vec<Action>,
}

fn noop_waker() -> Waker {
    unsafe fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    unsafe fn wake(_: *const ()) {}

    unsafe fn wake_by_ref(_: *const ()) {}

    unsafe fn drop(_: *const ()) {}

    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);

    unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
}
