pub(crate) const CAMERA: &str = "📷";
pub(crate) const CAMERA_FLASH: &str = "📸";
pub(crate) const BACK: &str = "⬅";
pub(crate) const SCALE: &str = "⚖";
pub(crate) const ABACUS: &str = "🖩";
pub(crate) const GEAR: &str = "⚙";
pub(crate) const EXIT: &str = "🚪";
pub(crate) const CHECK: &str = "✔";
pub(crate) const CANCEL: &str = "🗙";
pub(crate) const WARNING: &str = "⚠";
