use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_OPTIONS_TO_SPIN;
use crate::option_list::OptionList;
use crate::wheel::next_rotation;

/// A drawn spin waiting to be revealed. The winner is held by value so later
/// edits to the option list cannot change what gets reported.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PendingSpin {
    pub index: usize,
    pub winner: String,
    pub rotation: f64,
}

/// Full state of the spinner: options, wheel rotation, in-flight spin and result.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpinnerState {
    pub options: OptionList,
    pub rotation: f64,
    pub in_flight: Option<PendingSpin>,
    pub result: Option<String>,
}

impl SpinnerState {
    pub fn new(options: OptionList) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_spin(&self) -> bool {
        !self.is_spinning() && self.options.len() >= MIN_OPTIONS_TO_SPIN
    }

    pub fn add_option(&mut self, text: &str) -> bool {
        self.options.add(text)
    }

    pub fn remove_option(&mut self, index: usize) -> bool {
        self.options.remove(index)
    }

    /// Empties the list and drops any shown result. A spin in flight keeps going.
    pub fn clear(&mut self) {
        self.options.clear();
        self.result = None;
    }

    pub fn dismiss_result(&mut self) {
        self.result = None;
    }

    /// Draws a winner from the current options without changing state.
    pub fn plan_spin<R: Rng>(&self, rng: &mut R) -> Option<PendingSpin> {
        if !self.can_spin() {
            debug!(
                "Spin rejected: spinning={}, options={}",
                self.is_spinning(),
                self.options.len()
            );
            return None;
        }
        let index = rng.gen_range(0..self.options.len());
        self.plan_spin_at(index)
    }

    fn plan_spin_at(&self, index: usize) -> Option<PendingSpin> {
        let winner = self.options.get(index)?.to_string();
        Some(PendingSpin {
            index,
            winner,
            rotation: next_rotation(self.rotation, index, self.options.len()),
        })
    }

    /// Publishes the target rotation and marks the spin in flight.
    pub fn begin_spin(&mut self, pending: PendingSpin) -> bool {
        if !self.can_spin() {
            return false;
        }
        debug!("Spinning to index {} (rotation {})", pending.index, pending.rotation);
        self.rotation = pending.rotation;
        self.result = None;
        self.in_flight = Some(pending);
        true
    }

    /// Draws and begins a spin in one step. Returns the spin to reveal later.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Option<PendingSpin> {
        let pending = self.plan_spin(rng)?;
        if self.begin_spin(pending.clone()) {
            Some(pending)
        } else {
            None
        }
    }

    /// Reveals the winner of `pending` if it is the spin currently in flight.
    pub fn complete_spin(&mut self, pending: &PendingSpin) -> bool {
        if self.in_flight.as_ref() != Some(pending) {
            return false;
        }
        debug!("Spin finished on {:?}", pending.winner);
        self.in_flight = None;
        self.result = Some(pending.winner.clone());
        true
    }
}
