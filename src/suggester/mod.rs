//! Best-effort dial code suggestion from the user's location.
//!
//! The suggester runs at most once per session:
//!
//! ```text
//! Idle ──(provider available)──▶ Requesting ──(position)──▶ Lookup ──(known country)──▶ Apply ──▶ Done
//!   │                               │                          │
//!   └──(no provider)──▶ Done        └──(denied/unavailable)──▶ Done ◀──(any failure)──┘
//! ```
//!
//! Failures are only logged at `debug` level and never reach the user. `Done` is terminal and
//! [`LocationSuggester::run`] consumes the suggester, so it cannot be retried.
//! The suggestion itself is applied by [`PhoneForm::apply_suggestion`], which
//! refuses to overwrite anything the user has typed.
//!
//! [`PhoneForm::apply_suggestion`]: crate::form::PhoneForm::apply_suggestion

use crate::client::AsyncGeocoder;
use crate::domain::{Coordinates, Country, CountryTable};
use crate::geolocation::PositionProvider;
use std::mem;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// A dial code proposed for the empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub country: Country,
}

impl Suggestion {
    /// Text placed into the input: the dial code followed by a space.
    pub fn prefill(&self) -> String {
        format!("{} ", self.country.dial_code)
    }
}

/// Where the suggester is in its single run.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggesterState {
    Idle,
    Requesting,
    Lookup(Coordinates),
    Apply(Suggestion),
    Done,
}

impl SuggesterState {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// One-shot location-to-dial-code lookup.
pub struct LocationSuggester {
    provider: Option<Arc<dyn PositionProvider>>,
    geocoder: Arc<dyn AsyncGeocoder>,
    countries: &'static CountryTable,
    state: SuggesterState,
}

impl LocationSuggester {
    /// Create a suggester in the `Idle` state.
    ///
    /// `provider` is `None` when the host has no geolocation capability; the
    /// suggester then finishes without doing anything.
    pub fn new(
        provider: Option<Arc<dyn PositionProvider>>,
        geocoder: Arc<dyn AsyncGeocoder>,
    ) -> Self {
        Self {
            provider,
            geocoder,
            countries: CountryTable::global(),
            state: SuggesterState::Idle,
        }
    }

    /// Use a different country table.
    pub fn with_countries(mut self, countries: &'static CountryTable) -> Self {
        self.countries = countries;
        self
    }

    pub fn state(&self) -> &SuggesterState {
        &self.state
    }

    /// Perform one transition and return the new state.
    ///
    /// Stepping from `Apply` hands the suggestion off and moves to `Done`;
    /// stepping from `Done` does nothing.
    pub async fn step(&mut self) -> &SuggesterState {
        let next = match mem::replace(&mut self.state, SuggesterState::Done) {
            SuggesterState::Idle => match self.provider {
                Some(_) => SuggesterState::Requesting,
                None => {
                    debug!("No geolocation capability, skipping dial code suggestion");
                    SuggesterState::Done
                }
            },
            SuggesterState::Requesting => self.request_position().await,
            SuggesterState::Lookup(coordinates) => self.lookup(coordinates).await,
            SuggesterState::Apply(_) | SuggesterState::Done => SuggesterState::Done,
        };

        debug!("Location suggester -> {:?}", next);
        self.state = next;
        &self.state
    }

    async fn request_position(&self) -> SuggesterState {
        let Some(provider) = &self.provider else {
            return SuggesterState::Done;
        };

        match provider.current_position().await {
            Ok(coordinates) => SuggesterState::Lookup(coordinates),
            Err(e) => {
                debug!("{}", e);
                SuggesterState::Done
            }
        }
    }

    async fn lookup(&self, coordinates: Coordinates) -> SuggesterState {
        let code = match self.geocoder.country_code(coordinates).await {
            Ok(code) => code,
            Err(e) => {
                debug!("Failed to fetch country code: {}", e);
                return SuggesterState::Done;
            }
        };

        match self.countries.get(&code) {
            Some(country) => SuggesterState::Apply(Suggestion {
                country: country.clone(),
            }),
            None => {
                debug!("Country code {} is not in the country table", code);
                SuggesterState::Done
            }
        }
    }

    /// Drive the state machine to completion.
    ///
    /// Returns the suggestion if the run reached `Apply`.
    pub async fn run(mut self) -> Option<Suggestion> {
        loop {
            match self.step().await {
                SuggesterState::Apply(suggestion) => return Some(suggestion.clone()),
                SuggesterState::Done => return None,
                _ => {}
            }
        }
    }

    /// Run in the background and deliver at most one suggestion.
    ///
    /// The receiver errors if the run ends without a suggestion.
    pub fn spawn(self) -> oneshot::Receiver<Suggestion> {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            if let Some(suggestion) = self.run().await {
                // Receiver gone means the session already ended.
                let _ = tx.send(suggestion);
            }
        });
        rx
    }
}
