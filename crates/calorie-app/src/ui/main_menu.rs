use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    action::{ActionRequestQueue, FlowAction, ModalRequest, NavigationAction, UiAction},
    state::Screen,
    ui::icon,
};

const BUTTON_SIZE: Vec2 = Vec2::new(240.0, 44.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MainMenuViewModel {
    pub(crate) greeting: String,
    pub(crate) version: String,
}

fn menu_button(ui: &mut Ui, label: String) -> bool {
    ui.add_space(8.0);
    ui.add(Button::new(RichText::new(label).size(18.0)).min_size(BUTTON_SIZE))
        .clicked()
}

pub(crate) fn show(ui: &mut Ui, vm: &MainMenuViewModel, action_queue: &mut ActionRequestQueue) {
    let entries = [
        (format!("{} Camera", icon::CAMERA), Screen::Camera),
        (
            format!("{} Calculate with weight", icon::SCALE),
            Screen::CalorieCalculator,
        ),
        (format!("{} Calculator", icon::ABACUS), Screen::Calculator),
    ];

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.heading(RichText::new(&vm.greeting).size(28.0));
        ui.add_space(24.0);

        for (label, screen) in entries {
            if menu_button(ui, label) {
                action_queue.request(NavigationAction::Open(screen).into());
            }
        }
        if menu_button(ui, format!("{} Settings", icon::GEAR)) {
            action_queue.request(UiAction::OpenModal(ModalRequest::Settings).into());
        }
        if menu_button(ui, format!("{} Exit", icon::EXIT)) {
            action_queue.request(FlowAction::ConfirmExit.into());
        }

        ui.add_space(24.0);
        ui.weak(&vm.version);
    });
}
