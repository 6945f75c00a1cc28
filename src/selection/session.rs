//! Async driver for the selection state machine
//!
//! Runs the lookups a [`SelectionState`] transition asks for against a
//! [`GeoDirectory`] and applies the results through the generation check.
//! A directory failure is downgraded to an empty option list and a
//! warning; the selection chain itself never fails.

use super::{SelectionStage, SelectionState};
use crate::geo::GeoDirectory;
use crate::models::CallingCodeOption;
use tracing::{info, warn};

/// One editing session's selection chain bound to a directory
pub struct SelectionSession<D> {
    directory: D,
    state: SelectionState,
}

impl<D: GeoDirectory> SelectionSession<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            state: SelectionState::new(),
        }
    }

    /// Fetch the calling-code directory into the session
    ///
    /// Called once when the editing session opens. On failure the picker
    /// simply has no options.
    pub async fn load_calling_codes(&mut self) {
        match self.directory.calling_codes().await {
            Ok(options) => {
                info!("Loaded {} calling codes", options.len());
                self.state.set_calling_codes(options);
            }
            Err(e) => {
                warn!("Calling-code directory unavailable: {}", e);
                self.state.set_calling_codes(Vec::new());
            }
        }
    }

    /// Choose a calling code and resolve the owning country's states
    pub async fn choose_calling_code(&mut self, code: &str) {
        let Some(lookup) = self.state.choose_calling_code(code) else {
            return;
        };

        let states = match self.directory.states(&lookup.country).await {
            Ok(states) => states,
            Err(e) => {
                warn!("States lookup for {} failed: {}", lookup.country, e);
                Vec::new()
            }
        };
        self.state.apply_states(&lookup, states);
    }

    /// Choose a state and resolve its cities
    pub async fn choose_state(&mut self, state: &str) {
        let Some(lookup) = self.state.choose_state(state) else {
            return;
        };

        let cities = match self.directory.cities(&lookup.country, &lookup.state).await {
            Ok(cities) => cities,
            Err(e) => {
                warn!(
                    "Cities lookup for {}/{} failed: {}",
                    lookup.country, lookup.state, e
                );
                Vec::new()
            }
        };
        self.state.apply_cities(&lookup, cities);
    }

    pub fn choose_city(&mut self, city: &str) {
        self.state.choose_city(city);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn stage(&self) -> SelectionStage {
        self.state.stage()
    }

    pub fn calling_codes(&self) -> &[CallingCodeOption] {
        self.state.calling_codes()
    }

    pub fn chosen_code(&self) -> Option<&str> {
        self.state.chosen_code()
    }

    pub fn country(&self) -> Option<&str> {
        self.state.country()
    }

    pub fn states(&self) -> &[String] {
        self.state.states()
    }

    pub fn chosen_state(&self) -> Option<&str> {
        self.state.chosen_state()
    }

    pub fn cities(&self) -> &[String] {
        self.state.cities()
    }

    pub fn chosen_city(&self) -> Option<&str> {
        self.state.chosen_city()
    }

    /// Direct access to the underlying state machine
    pub fn state(&self) -> &SelectionState {
        &self.state
    }
}
