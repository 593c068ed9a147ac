use eframe::egui::{self, ColorImage, Image, RichText, TextureOptions, Ui};

use crate::{
    action::{ActionRequestQueue, CameraAction, FlowAction, NavigationAction},
    camera::CapturedPhoto,
    ui::icon,
};

#[derive(Debug)]
pub(crate) enum CameraViewModel<'a> {
    AwaitingPermission,
    Preview,
    Photo(&'a CapturedPhoto),
}

fn show_photo(ui: &mut Ui, photo: &CapturedPhoto, action_queue: &mut ActionRequestQueue) {
    let ctx = ui.ctx().clone();
    let texture = photo.texture(|image| {
        let size = [image.width() as usize, image.height() as usize];
        ctx.load_texture(
            "captured_photo",
            ColorImage::from_rgb(size, image.as_raw()),
            TextureOptions::LINEAR,
        )
    });

    let available = ui.available_size() - egui::vec2(0.0, 96.0);
    ui.add(
        Image::from_texture(texture)
            .max_size(available)
            .maintain_aspect_ratio(true),
    );
    ui.add_space(8.0);
    ui.label(RichText::new(photo.detection().to_string()).size(20.0));
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button(format!("{} Back", icon::BACK)).clicked() {
            action_queue.request(NavigationAction::Back.into());
        }
        if ui.button(format!("{} Take Another", icon::CAMERA)).clicked() {
            action_queue.request(CameraAction::TakeAnother.into());
        }
    });
}

pub(crate) fn show(ui: &mut Ui, vm: &CameraViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        match vm {
            CameraViewModel::AwaitingPermission => {
                ui.label("Camera access is needed to take a picture.");
                if ui.button("Allow camera access").clicked() {
                    action_queue.request(FlowAction::RequestCameraAccess.into());
                }
            }
            CameraViewModel::Preview => {
                ui.label(RichText::new("Point the camera at your meal").weak());
                ui.add_space(8.0);
                if ui
                    .button(RichText::new(format!("{} Take Picture", icon::CAMERA_FLASH)).size(20.0))
                    .clicked()
                {
                    action_queue.request(CameraAction::Capture.into());
                }
            }
            CameraViewModel::Photo(photo) => show_photo(ui, photo, action_queue),
        }

        ui.add_space(16.0);
        if ui.button(format!("{} Back to Main", icon::BACK)).clicked() {
            action_queue.request(NavigationAction::Back.into());
        }
    });
}
