use serde::{Deserialize, Serialize};

use crate::catalog::MoleculeId;
use crate::state::{Slot, View};
use crate::viewer::{CameraPose, ViewerId};

/// Everything the page can report. Serialized as `{"type": "..."}` objects:
/// ```json
/// {"type": "select_molecule", "id": "glucose"}
/// {"type": "camera_changed", "viewer": "a", "pose": {"orbit": "0rad 1rad 2m", "field_of_view": "30deg"}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetView { view: View },
    ToggleView,
    SelectMolecule { id: String },
    ClickSlot { slot: Slot },
    ClearSlot { slot: Slot },
    ToggleSync,
    Reset,
    Key { key: String },
    CameraChanged { viewer: ViewerId, pose: CameraPose },
    ViewerLoaded { viewer: ViewerId, model: String },
    ViewerLoadFailed { viewer: ViewerId, model: String, message: String },
}

/// Keyboard shortcuts: `1`-`4` pick a molecule card, `Tab` flips the view.
pub fn action_for_key(key: &str) -> Option<Action> {
    let index = match key {
        "Tab" => return Some(Action::ToggleView),
        "1" => 0,
        "2" => 1,
        "3" => 2,
        "4" => 3,
        _ => return None,
    };
    Some(Action::SelectMolecule { id: MoleculeId::ALL[index].as_str().to_string() })
}
