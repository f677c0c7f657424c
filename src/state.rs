use serde::{Deserialize, Serialize};

use crate::catalog::MoleculeId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Compare,
    Single,
}

impl View {
    pub fn other(self) -> Self {
        match self {
            View::Compare => View::Single,
            View::Single => View::Compare,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    #[default]
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Slot::A => "Molecule A",
            Slot::B => "Molecule B",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub active_view: View,
    pub selected: MoleculeId,
    pub slot_a: Option<MoleculeId>,
    pub slot_b: Option<MoleculeId>,
    pub last_filled: Slot,
    pub sync_enabled: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState {
            active_view: View::Compare,
            selected: MoleculeId::ALL[0],
            slot_a: None,
            slot_b: None,
            last_filled: Slot::A,
            sync_enabled: false,
        }
    }
}

impl SelectionState {
    pub fn slot(&self, slot: Slot) -> Option<MoleculeId> {
        match slot {
            Slot::A => self.slot_a,
            Slot::B => self.slot_b,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Option<MoleculeId> {
        match slot {
            Slot::A => &mut self.slot_a,
            Slot::B => &mut self.slot_b,
        }
    }

    pub fn both_filled(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }
}
