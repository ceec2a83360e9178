/// Caller-owned log of analyzed thermal states.
///
/// The analyzer itself is stateless; a driver that wants a record of what it
/// analyzed owns one of these and appends explicitly. That keeps growth
/// visible at the call site and leaves nothing shared to synchronize.

use crate::thermal_state::ThermalState;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Append-only, indexable sequence of `ThermalState` snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateHistory {
    states: Vec<ThermalState>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Append an owned copy of `state`.
    ///
    /// Copying is deliberate: the log must not alias buffers the caller may
    /// mutate on later time steps.
    pub fn record(&mut self, state: &ThermalState) {
        self.states.push(state.clone());
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ThermalState> {
        self.states.get(index)
    }

    pub fn first(&self) -> Option<&ThermalState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&ThermalState> {
        self.states.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThermalState> {
        self.states.iter()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl Index<usize> for StateHistory {
    type Output = ThermalState;

    fn index(&self, index: usize) -> &ThermalState {
        &self.states[index]
    }
}
