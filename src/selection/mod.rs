//! Dependent location selection
//!
//! The three-stage selection chain behind the contact form: calling code
//! resolves a country, the country loads its states, a state loads its
//! cities. Choosing at any stage clears everything below it.
//!
//! `SelectionState` is the synchronous state machine. Lookups are issued
//! as tokens carrying the generation they were born under; a result is
//! applied only while its generation is still current, so a response that
//! arrives after a newer choice is discarded rather than applied. The
//! async side lives in [`session::SelectionSession`].

pub mod session;

pub use session::SelectionSession;

use crate::models::CallingCodeOption;

/// Observable stage of the selection chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    Empty,
    /// A calling code is chosen but no country in the directory owns it
    CodeChosen,
    CountryResolved,
    StateChosen,
    CityChosen,
}

/// Token for an issued states lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatesLookup {
    pub generation: u64,
    pub country: String,
}

/// Token for an issued cities lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitiesLookup {
    pub generation: u64,
    pub country: String,
    pub state: String,
}

/// The live state of one in-progress location selection
///
/// Invariant: the state option list was fetched for the currently stored
/// country, and the city option list for the currently stored
/// (country, state) pair. Stale lookup results cannot break this because
/// every choice bumps the generation and `apply_states`/`apply_cities`
/// refuse tokens from older generations.
#[derive(Debug, Default)]
pub struct SelectionState {
    calling_codes: Vec<CallingCodeOption>,
    chosen_code: Option<String>,
    country: Option<String>,
    states: Vec<String>,
    chosen_state: Option<String>,
    cities: Vec<String>,
    chosen_city: Option<String>,
    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the calling-code directory for this session
    pub fn set_calling_codes(&mut self, options: Vec<CallingCodeOption>) {
        self.calling_codes = options;
    }

    /// Choose a calling code and invalidate everything below it
    ///
    /// Resolves the owning country by first exact match in the loaded
    /// directory; no match leaves the country unresolved. Chosen state and
    /// city and both option lists are cleared either way. Returns the
    /// states lookup to issue when a country resolved.
    pub fn choose_calling_code(&mut self, code: &str) -> Option<StatesLookup> {
        self.chosen_code = Some(code.to_string());
        self.country = self
            .calling_codes
            .iter()
            .find(|option| option.calling_code == code)
            .map(|option| option.name.clone());

        self.chosen_state = None;
        self.states.clear();
        self.chosen_city = None;
        self.cities.clear();
        self.generation += 1;

        self.country.clone().map(|country| StatesLookup {
            generation: self.generation,
            country,
        })
    }

    /// Apply a resolved states lookup; returns false when the token is
    /// stale and the result was discarded
    pub fn apply_states(&mut self, lookup: &StatesLookup, states: Vec<String>) -> bool {
        if lookup.generation != self.generation {
            return false;
        }
        self.states = states;
        true
    }

    /// Choose a state and invalidate the city stage
    ///
    /// Ignored while no country is resolved (a state cannot belong to
    /// nothing). Returns the cities lookup to issue.
    pub fn choose_state(&mut self, state: &str) -> Option<CitiesLookup> {
        let country = self.country.clone()?;

        self.chosen_state = Some(state.to_string());
        self.chosen_city = None;
        self.cities.clear();
        self.generation += 1;

        Some(CitiesLookup {
            generation: self.generation,
            country,
            state: state.to_string(),
        })
    }

    /// Apply a resolved cities lookup; returns false when the token is
    /// stale and the result was discarded
    pub fn apply_cities(&mut self, lookup: &CitiesLookup, cities: Vec<String>) -> bool {
        if lookup.generation != self.generation {
            return false;
        }
        self.cities = cities;
        true
    }

    /// Choose a city; the chain issues no further lookups
    ///
    /// Ignored while no state is chosen.
    pub fn choose_city(&mut self, city: &str) {
        if self.chosen_state.is_some() {
            self.chosen_city = Some(city.to_string());
        }
    }

    /// Return to `Empty`, discarding selections, option lists and any
    /// in-flight lookup (the generation moves on, orphaning their tokens)
    pub fn reset(&mut self) {
        self.chosen_code = None;
        self.country = None;
        self.chosen_state = None;
        self.states.clear();
        self.chosen_city = None;
        self.cities.clear();
        self.generation += 1;
    }

    pub fn stage(&self) -> SelectionStage {
        if self.chosen_code.is_none() {
            SelectionStage::Empty
        } else if self.country.is_none() {
            SelectionStage::CodeChosen
        } else if self.chosen_state.is_none() {
            SelectionStage::CountryResolved
        } else if self.chosen_city.is_none() {
            SelectionStage::StateChosen
        } else {
            SelectionStage::CityChosen
        }
    }

    pub fn calling_codes(&self) -> &[CallingCodeOption] {
        &self.calling_codes
    }

    pub fn chosen_code(&self) -> Option<&str> {
        self.chosen_code.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn chosen_state(&self) -> Option<&str> {
        self.chosen_state.as_deref()
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn chosen_city(&self) -> Option<&str> {
        self.chosen_city.as_deref()
    }
}
