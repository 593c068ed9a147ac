use std::time::{Duration, Instant};

use calorie_core::EditOutcome;

use crate::{
    action::{
        Action, ActionRequestQueue, CalculatorAction, CalorieAction, CameraAction, FlowAction,
        NavigationAction, SettingsAction, UiAction, flows,
    },
    camera::CameraPermission,
    state::{AppState, Screen, ScreenState, TimerSlot, Toast, UiState},
};

const TOAST_DURATION: Duration = Duration::from_secs(2);
const CAMERA_PERMISSION_DENIED: &str = "Camera permission not granted";
const MAX_SETTLE_ROUNDS: usize = 8;

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };
    ctx.handle_action(action);
}

/// Applies queued actions and polls flows at `now` until neither produces
/// more work. Returns `true` if any action was applied.
pub(crate) fn run_until_settled(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    now: Instant,
    action_queue: &mut ActionRequestQueue,
) -> bool {
    let mut handled = false;
    for _ in 0..MAX_SETTLE_ROUNDS {
        handled |= !action_queue.is_empty();
        handle_all(app_state, ui_state, action_queue);
        ui_state.executor.poll(now, action_queue);
        if action_queue.is_empty() {
            return handled;
        }
    }
    log::warn!("flows did not settle within {MAX_SETTLE_ROUNDS} rounds");
    handled
}

impl ActionContext<'_> {
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Navigation(action) => self.navigate(action),
            Action::Calorie(action) => self.update_calorie_form(action),
            Action::Calculator(CalculatorAction::Press(key)) => {
                if let Some(calculator) = self.app_state.navigation.calculator_mut() {
                    calculator.press(key);
                }
            }
            Action::Camera(action) => self.update_camera(action),
            Action::Settings(SettingsAction::UpdateSettings(settings)) => {
                self.app_state.set_settings(settings);
            }
            Action::Ui(action) => self.update_ui(action),
            Action::Flow(action) => self.start_flow(action),
        }
    }

    fn navigate(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Open(screen) => {
                if self.app_state.navigation.push(screen) {
                    log::info!("opened {screen}");
                    if screen == Screen::Camera {
                        self.start_flow(FlowAction::RequestCameraAccess);
                    }
                }
            }
            NavigationAction::Back => self.navigate_back(),
        }
    }

    fn navigate_back(&mut self) {
        let Some(state) = self.app_state.navigation.pop() else {
            self.start_flow(FlowAction::ConfirmExit);
            return;
        };
        log::info!("left {}", state.screen());
        if matches!(state, ScreenState::CalorieCalculator(_)) {
            self.ui_state.timers.cancel_fields();
        }
        // Dropping a camera state removes its photo file.
        drop(state);
    }

    fn update_calorie_form(&mut self, action: CalorieAction) {
        let Some(form) = self.app_state.navigation.calorie_form_mut() else {
            return;
        };
        match action {
            CalorieAction::Edit { field, proposed } => match form.edit(field, &proposed) {
                EditOutcome::Accepted { cleared } => {
                    if cleared.is_some() {
                        self.ui_state.timers.cancel(TimerSlot::Field(field));
                    }
                }
                EditOutcome::Rejected(error) => {
                    log::debug!(
                        "rejected {proposed:?} for {}: {}",
                        field.label(),
                        error.kind
                    );
                    let delay = self.app_state.settings().error_dismiss_delay.duration();
                    let task = flows::spawn_dismiss_after(
                        &mut self.ui_state.executor,
                        delay,
                        CalorieAction::DismissError {
                            field,
                            id: error.id,
                        }
                        .into(),
                    );
                    self.ui_state.timers.arm(TimerSlot::Field(field), task);
                }
            },
            CalorieAction::Calculate => {
                let total = form.calculate();
                log::debug!("calculated total calories: {total:?}");
            }
            CalorieAction::DismissError { field, id } => {
                if form.dismiss_error(field, id) {
                    self.ui_state.timers.cancel(TimerSlot::Field(field));
                }
            }
        }
    }

    fn update_camera(&mut self, action: CameraAction) {
        let Some(camera) = self.app_state.navigation.camera_mut() else {
            return;
        };
        match action {
            CameraAction::AccessGranted => {
                log::info!("camera access granted");
                camera.permission = CameraPermission::Granted;
            }
            CameraAction::AccessDenied => {
                log::info!("camera access denied");
                self.show_toast(CAMERA_PERMISSION_DENIED.to_owned());
                self.navigate_back();
            }
            CameraAction::Capture => {
                if !camera.permission.is_granted() || camera.photo.is_some() {
                    return;
                }
                match self.ui_state.capture_rig.capture() {
                    Ok(photo) => camera.photo = Some(photo),
                    Err(err) => {
                        log::warn!("failed to capture photo: {err}");
                        self.show_toast(format!("Failed to capture photo: {err}"));
                    }
                }
            }
            CameraAction::TakeAnother => {
                if let Some(photo) = camera.photo.take() {
                    log::debug!("discarding {}", photo.path().display());
                }
            }
        }
    }

    fn update_ui(&mut self, action: UiAction) {
        match action {
            UiAction::OpenModal(modal_request) => {
                self.ui_state.active_modal = Some(modal_request);
            }
            UiAction::CloseModal => {
                self.ui_state.active_modal = None;
            }
            UiAction::DismissToast(id) => {
                if self.ui_state.toast.as_ref().is_some_and(|toast| toast.id == id) {
                    self.ui_state.toast = None;
                }
            }
            UiAction::RequestExit => {
                log::info!("exit requested");
                self.ui_state.exit_requested = true;
            }
        }
    }

    fn start_flow(&mut self, action: FlowAction) {
        if self.ui_state.is_confirming() {
            log::debug!("ignoring {action:?} while another dialog is pending");
            return;
        }
        let executor = &mut self.ui_state.executor;
        let task = match action {
            FlowAction::ConfirmExit => flows::spawn_exit_flow(executor),
            FlowAction::RequestCameraAccess => {
                let pending = self
                    .app_state
                    .navigation
                    .camera_mut()
                    .is_some_and(|camera| camera.permission.is_pending());
                if !pending {
                    return;
                }
                flows::spawn_camera_access_flow(executor)
            }
        };
        self.ui_state.confirm_flow = Some(task);
    }

    fn show_toast(&mut self, message: String) {
        let id = self.ui_state.next_toast_id();
        self.ui_state.toast = Some(Toast { id, message });
        let task = flows::spawn_dismiss_after(
            &mut self.ui_state.executor,
            TOAST_DURATION,
            UiAction::DismissToast(id).into(),
        );
        self.ui_state.timers.arm(TimerSlot::Toast, task);
    }
}
