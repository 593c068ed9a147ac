use eframe::egui::Ui;

use crate::{action::ActionRequestQueue, view_model_builder::ScreenViewModel};

pub(crate) mod calculator_screen;
pub(crate) mod calorie_screen;
pub(crate) mod camera_screen;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod main_menu;
pub(crate) mod modal;
pub(crate) mod toast;

pub(crate) fn show_screen(
    ui: &mut Ui,
    vm: &ScreenViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    match vm {
        ScreenViewModel::MainMenu(vm) => main_menu::show(ui, vm, action_queue),
        ScreenViewModel::CalorieCalculator(vm) => calorie_screen::show(ui, vm, action_queue),
        ScreenViewModel::Calculator(vm) => calculator_screen::show(ui, vm, action_queue),
        ScreenViewModel::Camera(vm) => camera_screen::show(ui, vm, action_queue),
    }
}
