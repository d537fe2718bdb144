// ABOUTME: Registration descriptor for the display extender
// ABOUTME: Static metadata the host lists in its extender picker

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtenderInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub help: &'static str,
    /// When true the host hides the extender from its settings UI
    pub no_ui: bool,
}

pub const VIZZINI_DISPLAY_EXTENDER: ExtenderInfo = ExtenderInfo {
    id: "vizzini_display_extender",
    title: "Vizzini Display Extender",
    help: "Extra settings for this view.",
    no_ui: false,
};
