use eframe::egui::{Align2, Area, Context, Frame, Id, Order, RichText};

pub(crate) fn show(ctx: &Context, message: &str) {
    Area::new(Id::new("toast"))
        .order(Order::Tooltip)
        .anchor(Align2::CENTER_BOTTOM, [0.0, -32.0])
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(message).strong());
            });
        });
}
