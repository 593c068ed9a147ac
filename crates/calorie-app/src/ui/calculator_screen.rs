use eframe::egui::{Align, Button, Layout, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use calorie_core::CalculatorKey;

use crate::{
    action::{ActionRequestQueue, CalculatorAction, NavigationAction},
    ui::icon,
};

const KEY_ROWS: usize = CalculatorKey::KEYPAD.len() / CalculatorKey::KEYPAD_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CalculatorViewModel {
    pub(crate) display: String,
    pub(crate) pending: Option<String>,
    pub(crate) is_error: bool,
}

fn show_display(ui: &mut Ui, vm: &CalculatorViewModel) {
    ui.with_layout(Layout::top_down(Align::Max), |ui| {
        ui.weak(vm.pending.as_deref().unwrap_or_default());
        let text = RichText::new(&vm.display).size(40.0).monospace();
        let text = if vm.is_error {
            text.color(ui.visuals().error_fg_color)
        } else {
            text
        };
        ui.label(text);
    });
}

fn show_key(ui: &mut Ui, key: CalculatorKey, action_queue: &mut ActionRequestQueue) {
    let size = ui.available_size();
    let text = RichText::new(key.label()).size(size.y.min(size.x) * 0.4);
    let text = if key.is_operation() { text.strong() } else { text };
    let button = Button::new(text).min_size(size).selected(key.is_operation());
    if ui.add(button).clicked() {
        action_queue.request(CalculatorAction::Press(key).into());
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &CalculatorViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::relative(0.25))
        .size(Size::remainder())
        .size(Size::exact(40.0))
        .vertical(|mut strip| {
            strip.cell(|ui| show_display(ui, vm));
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .sizes(Size::remainder(), KEY_ROWS)
                    .vertical(|mut rows| {
                        for row in CalculatorKey::KEYPAD.chunks(CalculatorKey::KEYPAD_COLUMNS) {
                            rows.strip(|builder| {
                                builder
                                    .sizes(Size::remainder(), row.len())
                                    .horizontal(|mut cells| {
                                        for key in row {
                                            cells.cell(|ui| show_key(ui, *key, action_queue));
                                        }
                                    });
                            });
                        }
                    });
            });
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    if ui.button(format!("{} Back to Main", icon::BACK)).clicked() {
                        action_queue.request(NavigationAction::Back.into());
                    }
                });
            });
        });
}
