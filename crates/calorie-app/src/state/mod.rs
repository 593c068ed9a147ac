pub(crate) use self::{app_state::*, navigation::*, settings::*, ui_state::*};

mod app_state;
mod navigation;
mod settings;
mod ui_state;
