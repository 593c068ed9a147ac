use std::collections::HashMap;

use calorie_core::FieldId;

use crate::{
    action::ModalRequest,
    camera::CaptureRig,
    flow_executor::{FlowExecutor, FlowTaskHandle},
};

// UiState holds ephemeral UI-only state (modals, toasts, timers, flows). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) executor: FlowExecutor,
    pub(crate) timers: DismissTimers,
    pub(crate) toast: Option<Toast>,
    pub(crate) confirm_flow: Option<FlowTaskHandle>,
    pub(crate) capture_rig: CaptureRig,
    pub(crate) exit_requested: bool,
    next_toast_id: u64,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(capture_rig: CaptureRig) -> Self {
        Self {
            active_modal: None,
            executor: FlowExecutor::new(),
            timers: DismissTimers::default(),
            toast: None,
            confirm_flow: None,
            capture_rig,
            exit_requested: false,
            next_toast_id: 0,
        }
    }

    /// Returns `true` while a confirmation flow is waiting for its dialog.
    #[must_use]
    pub(crate) fn is_confirming(&self) -> bool {
        self.active_modal.is_some()
            || self
                .confirm_flow
                .as_ref()
                .is_some_and(FlowTaskHandle::is_running)
    }

    pub(crate) fn next_toast_id(&mut self) -> ToastId {
        let id = ToastId(self.next_toast_id);
        self.next_toast_id += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) id: ToastId,
    pub(crate) message: String,
}

/// Something that clears itself after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TimerSlot {
    Field(FieldId),
    Toast,
}

/// At most one pending dismissal flow per slot.
#[derive(Debug, Default)]
pub(crate) struct DismissTimers {
    armed: HashMap<TimerSlot, FlowTaskHandle>,
}

impl DismissTimers {
    /// Stores `task` as the dismissal for `slot`, aborting the one it replaces.
    pub(crate) fn arm(&mut self, slot: TimerSlot, task: FlowTaskHandle) {
        if let Some(previous) = self.armed.insert(slot, task) {
            previous.abort();
        }
    }

    pub(crate) fn cancel(&mut self, slot: TimerSlot) {
        if let Some(task) = self.armed.remove(&slot) {
            task.abort();
        }
    }

    pub(crate) fn cancel_fields(&mut self) {
        for field in FieldId::ALL {
            self.cancel(TimerSlot::Field(field));
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_armed(&self, slot: TimerSlot) -> bool {
        self.armed.get(&slot).is_some_and(FlowTaskHandle::is_running)
    }
}
