//! Top-level UI state machine.
//!
//! [`Controller::dispatch`] applies one [`Action`] and returns the commands
//! the page has to run against its viewer elements. Rendering is separate:
//! [`Controller::snapshot`] derives the page contents from current state.

use log::{debug, error, warn};

use crate::catalog::{self, MoleculeId};
use crate::error::Result;
use crate::input::{action_for_key, Action};
use crate::render::{self, Snapshot};
use crate::slots;
use crate::state::{SelectionState, Slot, View};
use crate::sync::RotationSync;
use crate::viewer::{CameraPose, LoadStatus, ViewerCommand, ViewerId, Viewers};

#[derive(Clone, Debug, Default)]
pub struct Controller {
    state: SelectionState,
    sync: RotationSync,
    viewers: Viewers,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn rotation_sync(&self) -> &RotationSync {
        &self.sync
    }

    pub fn viewers(&self) -> &Viewers {
        &self.viewers
    }

    pub fn snapshot(&self) -> Snapshot {
        render::snapshot(&self.state, &self.viewers)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Vec<ViewerCommand>> {
        debug!("dispatch {action:?}");
        let commands = match action {
            Action::SetView { view } => self.set_view(view),
            Action::ToggleView => self.set_view(self.state.active_view.other()),
            Action::SelectMolecule { id } => self.select_molecule(id.parse()?),
            Action::ClickSlot { slot } => self.place_in_slot(self.state.selected, slot),
            Action::ClearSlot { slot } => self.clear_slot(slot),
            Action::ToggleSync => {
                self.toggle_sync();
                Vec::new()
            }
            Action::Reset => self.reset(),
            Action::Key { key } => match action_for_key(&key) {
                Some(action) => return self.dispatch(action),
                None => Vec::new(),
            },
            Action::CameraChanged { viewer, pose } => {
                self.camera_changed(viewer, pose).into_iter().collect()
            }
            Action::ViewerLoaded { viewer, model } => {
                self.viewer_loaded(viewer, &model);
                Vec::new()
            }
            Action::ViewerLoadFailed { viewer, model, message } => {
                self.viewer_load_failed(viewer, &model, message);
                Vec::new()
            }
        };
        Ok(commands)
    }

    pub fn set_view(&mut self, view: View) -> Vec<ViewerCommand> {
        self.state.active_view = view;
        match view {
            View::Compare => Vec::new(),
            View::Single => vec![self.load(ViewerId::Single, self.state.selected)],
        }
    }

    pub fn select_molecule(&mut self, id: MoleculeId) -> Vec<ViewerCommand> {
        self.state.selected = id;
        match self.state.active_view {
            View::Compare => {
                let slot = slots::auto_fill(&mut self.state, id);
                vec![self.load(slot.into(), id)]
            }
            View::Single => vec![self.load(ViewerId::Single, id)],
        }
    }

    pub fn place_in_slot(&mut self, id: MoleculeId, slot: Slot) -> Vec<ViewerCommand> {
        slots::place_in_slot(&mut self.state, id, slot);
        vec![self.load(slot.into(), id)]
    }

    pub fn clear_slot(&mut self, slot: Slot) -> Vec<ViewerCommand> {
        slots::clear_slot(&mut self.state, slot);
        let viewer = slot.into();
        self.viewers.get_mut(viewer).unload();
        vec![ViewerCommand::Unload { viewer }]
    }

    pub fn toggle_sync(&mut self) -> bool {
        self.state.sync_enabled = self.sync.toggle();
        self.state.sync_enabled
    }

    pub fn reset(&mut self) -> Vec<ViewerCommand> {
        [ViewerId::A, ViewerId::B]
            .into_iter()
            .map(|viewer| {
                self.viewers.get_mut(viewer).pose = CameraPose::default();
                ViewerCommand::ResetCamera { viewer }
            })
            .collect()
    }

    pub fn camera_changed(&mut self, viewer: ViewerId, pose: CameraPose) -> Option<ViewerCommand> {
        let Some(slot) = viewer.slot() else {
            self.viewers.single.pose = pose;
            return None;
        };
        let both_filled = self.state.both_filled();
        self.sync.camera_changed(&mut self.viewers, slot, pose, both_filled)
    }

    pub fn viewer_loaded(&mut self, viewer: ViewerId, model: &str) {
        let panel = self.viewers.get_mut(viewer);
        if panel.model.as_deref() == Some(model) {
            panel.status = LoadStatus::Loaded;
        } else {
            debug!("stale load event on {viewer:?} for {model}");
        }
    }

    /// The slot keeps its molecule; only the panel status records the failure.
    pub fn viewer_load_failed(&mut self, viewer: ViewerId, model: &str, message: String) {
        let panel = self.viewers.get_mut(viewer);
        if panel.model.as_deref() != Some(model) {
            warn!("stale load failure on {viewer:?} for {model}: {message}");
            return;
        }
        error!("viewer {viewer:?} failed to load {model}: {message}");
        panel.status = LoadStatus::Failed(message);
    }

    fn load(&mut self, viewer: ViewerId, id: MoleculeId) -> ViewerCommand {
        let model = catalog::lookup(id).model;
        self.viewers.get_mut(viewer).load(model);
        ViewerCommand::Load { viewer, model: model.to_string() }
    }
}
