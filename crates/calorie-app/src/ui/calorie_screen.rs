use eframe::egui::{Button, RichText, TextEdit, Ui};

use calorie_core::FieldId;

use crate::{
    action::{ActionRequestQueue, CalorieAction, NavigationAction},
    ui::icon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldViewModel {
    pub(crate) id: FieldId,
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CalorieScreenViewModel {
    pub(crate) fields: Vec<FieldViewModel>,
    pub(crate) total: Option<String>,
}

fn show_field(ui: &mut Ui, vm: &FieldViewModel, action_queue: &mut ActionRequestQueue) {
    ui.label(vm.id.label());
    let mut text = vm.value.clone();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(vm.id)
            .hint_text(vm.id.label())
            .desired_width(f32::INFINITY),
    );
    // The widget shows the stored value again next frame, so a rejected
    // edit never sticks.
    if response.changed() {
        action_queue.request(
            CalorieAction::Edit {
                field: vm.id,
                proposed: text,
            }
            .into(),
        );
    }
    if let Some(error) = &vm.error {
        ui.label(
            RichText::new(format!("{} {error}", icon::WARNING)).color(ui.visuals().error_fg_color),
        );
    }
    ui.add_space(8.0);
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CalorieScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    ui.vertical(|ui| {
        ui.add_space(16.0);
        for field in &vm.fields {
            show_field(ui, field, action_queue);
        }

        ui.vertical_centered(|ui| {
            if ui
                .add(Button::new(RichText::new("Calculate").size(18.0)))
                .clicked()
            {
                action_queue.request(CalorieAction::Calculate.into());
            }

            if let Some(total) = &vm.total {
                ui.add_space(16.0);
                ui.label(RichText::new(format!("Total calories: {total}")).size(22.0));
            }

            ui.add_space(24.0);
            if ui
                .button(format!("{} Back to Main", icon::BACK))
                .clicked()
            {
                action_queue.request(NavigationAction::Back.into());
            }
        });
    });
}
