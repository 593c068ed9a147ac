use eframe::egui::{Context, Id, Modal, TextEdit, Ui, widgets};

use crate::{
    action::{ActionRequestQueue, SettingsAction, UiAction},
    state::{ErrorDismissDelay, Settings},
    ui::icon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingsViewModel {
    pub(crate) settings: Settings,
}

fn show_settings(ui: &mut Ui, settings: &mut Settings) -> bool {
    let Settings {
        error_dismiss_delay,
        greeting_name,
    } = settings;
    let mut changed = false;

    ui.label("Hide input errors after");
    ui.horizontal(|ui| {
        for delay in ErrorDismissDelay::ALL {
            changed |= ui
                .radio_value(error_dismiss_delay, delay, delay.label())
                .changed();
        }
    });
    ui.add_space(8.0);

    ui.label("Greeting name");
    changed |= ui.add(TextEdit::singleline(greeting_name)).changed();
    ui.add_space(8.0);

    ui.label("Appearance");
    widgets::global_theme_preference_buttons(ui);

    changed
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings.clone();
    let mut changed = false;
    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.add_space(8.0);
        changed = show_settings(ui, &mut settings);
        ui.add_space(8.0);
        if ui.button(format!("{} Close", icon::CHECK)).clicked() {
            ui.close();
        }
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
    if modal.should_close() {
        action_queue.request(UiAction::CloseModal.into());
    }
}
