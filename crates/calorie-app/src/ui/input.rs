use eframe::egui::{InputState, Key};

use crate::action::{ActionRequestQueue, NavigationAction};

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if i.key_pressed(Key::Escape) {
        action_queue.request(NavigationAction::Back.into());
    }
}
