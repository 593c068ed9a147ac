use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{
        ActionRequestQueue, ConfirmKind, ConfirmResponder, ConfirmResult, Responder, UiAction,
    },
    ui::icon,
};

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> bool
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });
    modal.should_close()
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn send_response<T>(responder: &mut Option<Responder<T>>, response: T) {
    if let Some(responder) = responder.take() {
        let _ = responder.send(response);
    }
}

struct ConfirmDialogText {
    id: &'static str,
    heading: &'static str,
    label: &'static str,
    confirm_label: &'static str,
    cancel_label: &'static str,
}

impl ConfirmKind {
    fn text(self) -> ConfirmDialogText {
        match self {
            ConfirmKind::ExitApp => ConfirmDialogText {
                id: "exit_app_confirm",
                heading: "Exit App",
                label: "Are you sure you want to exit?",
                confirm_label: "Yes",
                cancel_label: "No",
            },
            ConfirmKind::CameraAccess => ConfirmDialogText {
                id: "camera_access_confirm",
                heading: "Camera Access",
                label: "Allow Calorie Counter to take pictures?",
                confirm_label: "Allow",
                cancel_label: "Deny",
            },
        }
    }
}

pub(crate) fn show_confirm(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: ConfirmKind,
    responder: &mut Option<ConfirmResponder>,
) {
    let text = kind.text();
    let should_close = show_dialog(
        ctx,
        Id::new(text.id),
        text.heading,
        |ui: &mut Ui| {
            ui.label(text.label);
        },
        |ui: &mut Ui| {
            let confirm = ui.button(format!("{} {}", icon::CHECK, text.confirm_label));
            request_focus_if_none(ui, &confirm);
            if confirm.clicked() {
                send_response(responder, ConfirmResult::Confirmed);
                ui.close();
            }

            let cancel = ui.button(format!("{} {}", icon::CANCEL, text.cancel_label));
            if cancel.clicked() {
                send_response(responder, ConfirmResult::Cancelled);
                ui.close();
            }
        },
    );

    if should_close {
        send_response(responder, ConfirmResult::Cancelled);
        action_queue.request(UiAction::CloseModal.into());
    }
}
