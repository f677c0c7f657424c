use serde::Serialize;

use crate::catalog::{self, MoleculeId};
use crate::detail::{render_detail_for, DetailView};
use crate::slots::next_slot;
use crate::state::{SelectionState, Slot, View};
use crate::viewer::Viewers;

pub const EMPTY_CELL: &str = "—";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotCard {
    pub slot: Slot,
    pub molecule: Option<MoleculeId>,
    pub title: String,
    pub formula: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: &'static str,
    pub values: [String; 2],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub headers: [String; 2],
    pub rows: Vec<TableRow>,
}

/// Everything the page needs to draw itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub view: View,
    pub selected: MoleculeId,
    pub slots: [SlotCard; 2],
    pub next_slot: Slot,
    pub table: Option<ComparisonTable>,
    pub detail: Option<DetailView>,
    pub sync_enabled: bool,
    pub viewers: Viewers,
}

pub fn slot_card(state: &SelectionState, slot: Slot) -> SlotCard {
    match state.slot(slot).map(catalog::lookup) {
        Some(record) => SlotCard {
            slot,
            molecule: Some(record.id),
            title: record.name.to_string(),
            formula: record.formula.to_string(),
        },
        None => SlotCard {
            slot,
            molecule: None,
            title: slot.placeholder().to_string(),
            formula: String::new(),
        },
    }
}

pub fn comparison_table(slot_a: Option<MoleculeId>, slot_b: Option<MoleculeId>) -> ComparisonTable {
    let records = [slot_a.map(catalog::lookup), slot_b.map(catalog::lookup)];
    let headers = [Slot::A, Slot::B].map(|slot| match records[slot.index()] {
        Some(record) => record.name.to_string(),
        None => slot.placeholder().to_string(),
    });

    let entries = records.map(|r| r.map(|r| r.properties.entries()));
    let rows = ["Weight", "Type", "Function", "Location"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| TableRow {
            label,
            values: entries.map(|e| match e {
                Some(pairs) => pairs[i].1.to_string(),
                None => EMPTY_CELL.to_string(),
            }),
        })
        .collect();

    ComparisonTable { headers, rows }
}

pub fn snapshot(state: &SelectionState, viewers: &Viewers) -> Snapshot {
    let (table, detail) = match state.active_view {
        View::Compare => (Some(comparison_table(state.slot_a, state.slot_b)), None),
        View::Single => (None, Some(render_detail_for(state.selected))),
    };
    Snapshot {
        view: state.active_view,
        selected: state.selected,
        slots: [slot_card(state, Slot::A), slot_card(state, Slot::B)],
        next_slot: next_slot(state),
        table,
        detail,
        sync_enabled: state.sync_enabled,
        viewers: viewers.clone(),
    }
}
