//! wa-direct - open a WhatsApp chat with any international number without
//! saving it as a contact.
//!
//! # Architecture
//!
//! - **domain**: Phone number validation, the country table and coordinates
//! - **form**: Single owner of the number being edited and its error
//! - **suggester**: One-shot location-to-dial-code suggestion
//! - **geolocation**: Source of the user's position
//! - **client**: HTTP client for the reverse-geocoding service
//! - **launcher**: Hands `wa.me` links to the operating system
//! - **session**: Interactive terminal loop
//! - **config** / **cli**: Environment and command-line configuration
//! - **logging**: stderr subscriber setup
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Geocoding request counters

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod geolocation;
pub mod launcher;
pub mod logging;
pub mod metrics;
pub mod session;
pub mod suggester;

pub use client::{AsyncGeocoder, AsyncGeocoderImpl, GeocodingClient};
pub use config::Config;
pub use domain::{Coordinates, Country, CountryTable, DialTarget, ValidationError};
pub use error::{ConfigError, GeocodeError, LaunchError};
pub use form::PhoneForm;
pub use geolocation::{
    provider_for, ConfiguredPosition, Permission, PositionError, PositionProvider,
};
pub use launcher::{LinkOpener, PrintOpener, SystemOpener};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use session::{Flow, SendOutcome, Session};
pub use suggester::{LocationSuggester, SuggesterState, Suggestion};
