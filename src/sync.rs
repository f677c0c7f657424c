//! Camera mirroring between the two comparison viewers.
//!
//! `Disabled` holds nothing. Entering `Enabled` creates a [`MirrorLink`] with
//! one route per direction; leaving drops it, so no route outlives a toggle.
//! Only user-originated camera events are fed in here. Writes made by a
//! mirror never come back as events.

use crate::state::Slot;
use crate::viewer::{CameraPose, ViewerCommand, ViewerId, Viewers};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub from: Slot,
    pub to: Slot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorLink {
    routes: [Route; 2],
}

impl MirrorLink {
    fn new() -> Self {
        MirrorLink {
            routes: [
                Route { from: Slot::A, to: Slot::B },
                Route { from: Slot::B, to: Slot::A },
            ],
        }
    }

    fn target(&self, source: Slot) -> Option<Slot> {
        self.routes.iter().find(|r| r.from == source).map(|r| r.to)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationSync {
    #[default]
    Disabled,
    Enabled(MirrorLink),
}

impl RotationSync {
    pub fn is_enabled(&self) -> bool {
        matches!(self, RotationSync::Enabled(_))
    }

    /// Number of live mirror routes; zero whenever disabled.
    pub fn routes(&self) -> usize {
        match self {
            RotationSync::Disabled => 0,
            RotationSync::Enabled(link) => link.routes.len(),
        }
    }

    pub fn toggle(&mut self) -> bool {
        *self = if self.is_enabled() {
            RotationSync::Disabled
        } else {
            RotationSync::Enabled(MirrorLink::new())
        };
        self.is_enabled()
    }

    /// Record a user camera change on `source` and mirror it when enabled and
    /// both slots hold a molecule.
    pub fn camera_changed(
        &self,
        viewers: &mut Viewers,
        source: Slot,
        pose: CameraPose,
        both_filled: bool,
    ) -> Option<ViewerCommand> {
        viewers.get_mut(source.into()).pose = pose.clone();

        let RotationSync::Enabled(link) = self else {
            return None;
        };
        if !both_filled {
            return None;
        }
        let target: ViewerId = link.target(source)?.into();
        viewers.get_mut(target).pose = pose.clone();
        Some(ViewerCommand::SetCamera { viewer: target, pose })
    }
}
