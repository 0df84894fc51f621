//! Command-line arguments.

use crate::config::Config;
use crate::error::ConfigResult;
use crate::geolocation::Permission;
use clap::Parser;

/// Open a WhatsApp chat with any international number without saving it as a contact.
#[derive(Parser, Debug, Default)]
#[command(name = "wa-direct", version, about, long_about = None)]
pub struct Cli {
    /// Number to open right away, e.g. +1 555 123 4567 (starts an interactive session when omitted)
    #[arg(value_name = "NUMBER")]
    pub number: Vec<String>,

    /// Latitude used to suggest a dial code (implies --locate)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude used to suggest a dial code (implies --locate)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Allow the location lookup
    #[arg(long, conflicts_with = "no_locate")]
    pub locate: bool,

    /// Never look up the location
    #[arg(long)]
    pub no_locate: bool,

    /// Print the link instead of opening it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// The positional number, if any, with its parts joined by spaces.
    pub fn one_shot_number(&self) -> Option<String> {
        (!self.number.is_empty()).then(|| self.number.join(" "))
    }

    /// Layer command-line overrides on top of the environment configuration.
    pub fn apply(&self, config: &mut Config) -> ConfigResult<()> {
        if self.lat.is_some() || self.lon.is_some() {
            config.position = Config::position_from_parts(self.lat, self.lon)?;
            config.geolocation = Permission::Granted;
        }
        if self.locate {
            config.geolocation = Permission::Granted;
        }
        if self.no_locate {
            config.geolocation = Permission::Denied;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    #[test]
    fn test_parse_one_shot_number() {
        let cli = Cli::parse_from(["wa-direct", "+1", "555", "123", "4567"]);
        assert_eq!(cli.one_shot_number().as_deref(), Some("+1 555 123 4567"));

        let cli = Cli::parse_from(["wa-direct"]);
        assert_eq!(cli.one_shot_number(), None);
    }

    #[test]
    fn test_coordinates_imply_permission() {
        let cli = Cli::parse_from(["wa-direct", "--lat", "-33.87", "--lon", "151.21"]);
        let mut config = Config::default();
        cli.apply(&mut config).unwrap();

        assert_eq!(config.geolocation, Permission::Granted);
        assert_eq!(config.position, Coordinates::new(-33.87, 151.21));
    }

    #[test]
    fn test_no_locate_wins() {
        let cli = Cli::parse_from(["wa-direct", "--lat", "1", "--lon", "2", "--no-locate"]);
        let mut config = Config::default();
        cli.apply(&mut config).unwrap();
        assert_eq!(config.geolocation, Permission::Denied);
    }

    #[test]
    fn test_half_position_rejected() {
        let cli = Cli::parse_from(["wa-direct", "--lat", "1"]);
        let mut config = Config::default();
        assert!(cli.apply(&mut config).is_err());
    }
}
