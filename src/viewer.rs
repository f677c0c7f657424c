//! Bookkeeping for the page's `<model-viewer>` elements.
//!
//! The viewers render on their own; the controller only tracks what model
//! each one was given, its last known camera pose and whether loading worked.

use serde::{Deserialize, Serialize};

use crate::state::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerId {
    A,
    B,
    Single,
}

impl From<Slot> for ViewerId {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::A => ViewerId::A,
            Slot::B => ViewerId::B,
        }
    }
}

impl ViewerId {
    pub fn slot(self) -> Option<Slot> {
        match self {
            ViewerId::A => Some(Slot::A),
            ViewerId::B => Some(Slot::B),
            ViewerId::Single => None,
        }
    }
}

pub const AUTO: &str = "auto";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraPose {
    pub orbit: String,
    pub field_of_view: String,
}

impl Default for CameraPose {
    fn default() -> Self {
        CameraPose {
            orbit: "auto auto auto".to_string(),
            field_of_view: AUTO.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ViewerPanel {
    pub model: Option<String>,
    pub pose: CameraPose,
    pub status: LoadStatus,
}

impl ViewerPanel {
    pub fn load(&mut self, model: &str) {
        self.model = Some(model.to_string());
        self.status = LoadStatus::Loading;
    }

    pub fn unload(&mut self) {
        self.model = None;
        self.status = LoadStatus::Idle;
    }
}

/// Instruction for the page to apply to one viewer element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerCommand {
    Load { viewer: ViewerId, model: String },
    Unload { viewer: ViewerId },
    SetCamera { viewer: ViewerId, pose: CameraPose },
    /// Orbit, target and field of view back to `auto`.
    ResetCamera { viewer: ViewerId },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Viewers {
    pub a: ViewerPanel,
    pub b: ViewerPanel,
    pub single: ViewerPanel,
}

impl Viewers {
    pub fn get_mut(&mut self, id: ViewerId) -> &mut ViewerPanel {
        match id {
            ViewerId::A => &mut self.a,
            ViewerId::B => &mut self.b,
            ViewerId::Single => &mut self.single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_status_serializes_with_message() {
        let json = serde_json::to_value(LoadStatus::Failed("404".into())).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "404");
        let json = serde_json::to_value(LoadStatus::Idle).unwrap();
        assert_eq!(json["state"], "idle");
    }

    #[test]
    fn commands_are_tagged() {
        let cmd = ViewerCommand::Load { viewer: ViewerId::B, model: "/models/dna.glb".into() };
        let json = serde_json::to_value(cmd).unwrap();
        assert_eq!(json["type"], "load");
        assert_eq!(json["viewer"], "b");
    }

    #[test]
    fn reload_replaces_failure() {
        let mut panel = ViewerPanel::default();
        panel.load("/models/dna.glb");
        panel.status = LoadStatus::Failed("bad".into());
        panel.load("/models/glucose.glb");
        assert_eq!(panel.status, LoadStatus::Loading);
        panel.unload();
        assert_eq!(panel.model, None);
    }
}
