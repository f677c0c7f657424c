//! Two-slot comparison placement.
//!
//! Auto-fill takes the first empty slot (A before B). Once both are full it
//! alternates, replacing the slot opposite the one filled last.

use log::debug;

use crate::catalog::MoleculeId;
use crate::state::{SelectionState, Slot};

/// Slot the next auto-fill will write to.
pub fn next_slot(state: &SelectionState) -> Slot {
    if state.slot_a.is_none() {
        Slot::A
    } else if state.slot_b.is_none() {
        Slot::B
    } else {
        state.last_filled.other()
    }
}

/// Auto-fill `id` into the next slot and return that slot.
pub fn auto_fill(state: &mut SelectionState, id: MoleculeId) -> Slot {
    let target = next_slot(state);
    place_in_slot(state, id, target);
    target
}

pub fn place_in_slot(state: &mut SelectionState, id: MoleculeId, slot: Slot) {
    debug!("slot {slot:?} <- {id}");
    *state.slot_mut(slot) = Some(id);
    state.last_filled = slot;
}

pub fn clear_slot(state: &mut SelectionState, slot: Slot) {
    debug!("slot {slot:?} cleared");
    *state.slot_mut(slot) = None;
    if state.last_filled == slot {
        state.last_filled = slot.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MoleculeId::*;

    #[test]
    fn fills_a_then_b_then_alternates() {
        let mut state = SelectionState::default();
        let order: Vec<Slot> = [Dna, Glucose, Caffeine, Hemoglobin, Dna, Glucose]
            .into_iter()
            .map(|id| auto_fill(&mut state, id))
            .collect();
        assert_eq!(order, [Slot::A, Slot::B, Slot::A, Slot::B, Slot::A, Slot::B]);
        assert_eq!(state.slot_a, Some(Dna));
        assert_eq!(state.slot_b, Some(Glucose));
    }

    #[test]
    fn alternation_starts_opposite_explicit_placement() {
        let mut state = SelectionState::default();
        auto_fill(&mut state, Dna);
        auto_fill(&mut state, Glucose);
        place_in_slot(&mut state, Caffeine, Slot::A);
        assert_eq!(state.last_filled, Slot::A);
        assert_eq!(auto_fill(&mut state, Hemoglobin), Slot::B);
    }

    #[test]
    fn cleared_a_is_refilled_first() {
        let starts: [fn(&mut SelectionState); 4] = [
            |_| {},
            |s| {
                auto_fill(s, Dna);
            },
            |s| {
                auto_fill(s, Dna);
                auto_fill(s, Glucose);
            },
            |s| {
                auto_fill(s, Dna);
                auto_fill(s, Glucose);
                auto_fill(s, Caffeine);
            },
        ];
        for setup in starts {
            let mut state = SelectionState::default();
            setup(&mut state);
            clear_slot(&mut state, Slot::A);
            assert_eq!(auto_fill(&mut state, Hemoglobin), Slot::A);
        }
    }

    #[test]
    fn clearing_last_filled_flips_pointer() {
        let mut state = SelectionState::default();
        auto_fill(&mut state, Dna);
        auto_fill(&mut state, Glucose);
        clear_slot(&mut state, Slot::B);
        assert_eq!(state.last_filled, Slot::A);
        clear_slot(&mut state, Slot::A);
        assert_eq!(state.last_filled, Slot::B);
        assert_eq!(next_slot(&state), Slot::A);
    }

    #[test]
    fn clearing_other_slot_keeps_pointer() {
        let mut state = SelectionState::default();
        auto_fill(&mut state, Dna);
        auto_fill(&mut state, Glucose);
        clear_slot(&mut state, Slot::A);
        assert_eq!(state.last_filled, Slot::B);
        assert_eq!(state.slot_b, Some(Glucose));
    }
}
