use std::mem;

use calorie_core::{CalculatorKey, ErrorId, FieldId};

use crate::state::{Screen, Settings, ToastId};

pub(crate) mod flows;
pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Navigation(NavigationAction),
    Calorie(CalorieAction),
    Calculator(CalculatorAction),
    Camera(CameraAction),
    Settings(SettingsAction),
    Ui(UiAction),
    Flow(FlowAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationAction {
    Open(Screen),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CalorieAction {
    Edit { field: FieldId, proposed: String },
    Calculate,
    DismissError { field: FieldId, id: ErrorId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalculatorAction {
    Press(CalculatorKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CameraAction {
    AccessGranted,
    AccessDenied,
    Capture,
    TakeAnother,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    DismissToast(ToastId),
    RequestExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowAction {
    ConfirmExit,
    RequestCameraAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmResult {
    Confirmed,
    Cancelled,
}

pub(crate) type Responder<T> = futures_channel::oneshot::Sender<T>;
pub(crate) type ConfirmResponder = Responder<ConfirmResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmKind {
    ExitApp,
    CameraAccess,
}

#[derive(Debug)]
pub(crate) enum ModalRequest {
    Confirm {
        kind: ConfirmKind,
        responder: Option<ConfirmResponder>,
    },
    Settings,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use calorie_core::FieldId;

    use super::{ActionRequestQueue, CalorieAction, NavigationAction, handler};
    use crate::{
        camera::CaptureRig,
        state::{AppState, Screen, Settings, UiState},
    };

    fn edit(field: FieldId, proposed: &str) -> CalorieAction {
        CalorieAction::Edit {
            field,
            proposed: proposed.to_owned(),
        }
    }

    #[test]
    fn frame_of_calorie_edits_is_applied_in_request_order() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::new(CaptureRig::default());
        let mut queue = ActionRequestQueue::default();

        queue.request(NavigationAction::Open(Screen::CalorieCalculator).into());
        queue.request(edit(FieldId::CaloriesPer100g, "2").into());
        queue.request(edit(FieldId::CaloriesPer100g, "20").into());
        queue.request(edit(FieldId::CaloriesPer100g, "200").into());
        queue.request(edit(FieldId::WeightInGrams, "150").into());
        queue.request(CalorieAction::Calculate.into());
        assert!(!queue.is_empty());

        handler::handle_all(&mut app_state, &mut ui_state, &mut queue);
        assert!(queue.is_empty());

        let form = app_state.navigation.calorie_form_mut().unwrap();
        assert_eq!(form.field(FieldId::CaloriesPer100g).value(), "200");
        assert_eq!(form.result(), Some(300.0));
    }

    #[test]
    fn calorie_actions_without_open_screen_are_dropped() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::new(CaptureRig::default());
        let mut queue = ActionRequestQueue::default();

        queue.request(edit(FieldId::WeightInGrams, "150").into());
        queue.request(CalorieAction::Calculate.into());
        handler::handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert!(queue.take_all().is_empty());
        assert!(app_state.navigation.calorie_form_mut().is_none());
        assert_eq!(ui_state.executor.active_count(), 0);
    }
}
