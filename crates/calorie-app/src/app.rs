//! Calorie Counter desktop application UI.
//!
//! # Design Notes
//! - A stack of screens: main menu, calorie calculator, calculator, camera.
//! - All state changes go through actions handled once per frame.
//! - Delayed work (error dismissal, toasts, confirm dialogs) runs as flows on
//!   an executor polled with the frame time, and the next deadline schedules
//!   the next repaint.

use std::time::{Duration, Instant};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, ViewportCommand},
};

use crate::{
    action::{ActionRequestQueue, handler},
    camera::CaptureRig,
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct CalorieApp {
    app_state: AppState,
    ui_state: UiState,
}

impl CalorieApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(storage::load_settings)
            .unwrap_or_default();
        Self {
            app_state: AppState::new(settings),
            ui_state: UiState::new(CaptureRig::default()),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }

    fn schedule_repaint(&self, ctx: &Context, now: Instant, handled: bool) {
        if handled {
            ctx.request_repaint();
        } else if let Some(wake) = self.ui_state.executor.next_wake() {
            ctx.request_repaint_after(wake.saturating_duration_since(now));
        }
    }
}

impl App for CalorieApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_settings(storage, self.app_state.settings());
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        let mut handled = handler::run_until_settled(
            &mut self.app_state,
            &mut self.ui_state,
            now,
            &mut action_queue,
        );

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            handled |= handler::run_until_settled(
                &mut self.app_state,
                &mut self.ui_state,
                now,
                &mut action_queue,
            );
        }

        {
            let screen_vm = view_model_builder::build_screen_view_model(&self.app_state);
            CentralPanel::default().show(ctx, |ui| {
                ui::show_screen(ui, &screen_vm, &mut action_queue);
            });
        }

        if let Some(modal_request) = &mut self.ui_state.active_modal {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::modal::show(ctx, &mut action_queue, modal_request, &settings_vm);
        }

        if let Some(toast) = &self.ui_state.toast {
            ui::toast::show(ctx, &toast.message);
        }

        handled |= handler::run_until_settled(
            &mut self.app_state,
            &mut self.ui_state,
            now,
            &mut action_queue,
        );

        if self.ui_state.exit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        self.schedule_repaint(ctx, now, handled);
        self.apply_persistence(frame);
    }
}
