/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{self, BuildingConfig, Config};
use crate::error::ConfigError;
use crate::output::OutputFormat;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Single cabin elevator simulator.
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(name = "elevator-sim", version, allow_negative_numbers = true)]
pub struct Cli {
    /// Number of floors (5-20), cabin speed (m/s), floor height (m) and door cycle time (s).
    /// Give all four or none.
    #[clap(value_name = "FLOORS SPEED HEIGHT DOOR_TIME")]
    pub building: Vec<String>,

    /// TOML configuration file, overridden by the positional values.
    #[clap(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pause between two dispatcher polls, in milliseconds.
    #[clap(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// How status events are printed.
    #[clap(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File,
    Arguments,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Cli {
    /// Builds the validated configuration: defaults, then the file, then the arguments.
    pub fn resolve_config(&self) -> Result<(Config, ConfigSource), ConfigError> {
        let (mut config, mut source) = match &self.config {
            Some(path) => (config::load_config(path)?, ConfigSource::File),
            None => (Config::default(), ConfigSource::Defaults),
        };

        if !self.building.is_empty() {
            config.building = parse_building(&self.building)?;
            source = ConfigSource::Arguments;
        }
        if let Some(poll_interval_ms) = self.poll_interval {
            config.dispatcher.poll_interval_ms = poll_interval_ms;
        }

        config.validate()?;
        Ok((config, source))
    }
}

pub fn parse_building(args: &[String]) -> Result<BuildingConfig, ConfigError> {
    if args.len() != 4 {
        return Err(ConfigError::ArgumentCount(args.len()));
    }

    Ok(BuildingConfig {
        n_floors: parse_arg("number of floors", &args[0])?,
        cabin_speed: parse_arg("cabin speed", &args[1])?,
        floor_height: parse_arg("floor height", &args[2])?,
        door_time: parse_arg("door cycle time", &args[3])?,
    })
}

/// Startup banner describing the settings in use.
pub fn settings_banner(config: &Config, source: ConfigSource) -> Vec<String> {
    let building = &config.building;
    let header = match source {
        ConfigSource::Defaults => "No arguments given, starting with the default settings:",
        ConfigSource::File => "Starting with the settings from the configuration file:",
        ConfigSource::Arguments => "Starting with the following settings:",
    };

    vec![
        header.to_string(),
        format!("Number of floors - {}", building.n_floors),
        format!("Cabin speed - {} m/s", building.cabin_speed),
        format!("Floor height - {} m", building.floor_height),
        format!("Time between opening and closing the doors - {} s", building.door_time),
    ]
}

fn parse_arg<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod cli_tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("elevator-sim").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = parse(&[]);

        let (config, source) = cli.resolve_config().unwrap();

        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config, Config::default());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_four_arguments() {
        // Arrange
        let cli = parse(&["10", "2", "2.5", "4", "--format", "json"]);

        // Act
        let (config, source) = cli.resolve_config().unwrap();

        // Assert
        assert_eq!(source, ConfigSource::Arguments);
        assert_eq!(
            config.building,
            BuildingConfig {
                n_floors: 10,
                cabin_speed: 2.0,
                floor_height: 2.5,
                door_time: 4,
            }
        );
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_arguments_rejected() {
        let cli = parse(&["10", "2"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::ArgumentCount(2))));
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let cli = parse(&["ten", "2", "2", "4"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::InvalidArgument { name: "number of floors", .. })
        ));

        let cli = parse(&["10", "2", "2", "1.5"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::InvalidArgument { name: "door cycle time", .. })
        ));

        let cli = parse(&["25", "2", "2", "4"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::FloorCount(25))));

        let building = parse_building(&["10".into(), "-2".into(), "2".into(), "4".into()]).unwrap();
        assert!(matches!(building.validate(), Err(ConfigError::CabinSpeed(_))));

        let cli = parse(&["10", "2", "0", "4"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::FloorHeight(_))));

        let cli = parse(&["10", "2", "2", "0"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::DoorTime)));

        let cli = parse(&["5", "1", "1e30", "5"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::TimePerFloor { .. })));
    }

    #[test]
    fn test_arguments_override_file() {
        // Arrange
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[building]\nn_floors = 7\ndoor_time = 2\n[dispatcher]\npoll_interval_ms = 50\n"
        )
        .unwrap();
        let path_str = file.path().to_string_lossy().to_string();

        // Act
        let (from_file, file_source) = parse(&["--config", path_str.as_str()]).resolve_config().unwrap();
        let (overridden, args_source) = parse(&["--config", path_str.as_str(), "--poll-interval", "5", "12", "1", "3", "6"])
            .resolve_config()
            .unwrap();

        // Assert
        assert_eq!(file_source, ConfigSource::File);
        assert_eq!(from_file.building.n_floors, 7);
        assert_eq!(from_file.building.door_time, 2);
        assert_eq!(from_file.dispatcher.poll_interval_ms, 50);

        assert_eq!(args_source, ConfigSource::Arguments);
        assert_eq!(overridden.building.n_floors, 12);
        assert_eq!(overridden.building.door_time, 6);
        assert_eq!(overridden.dispatcher.poll_interval_ms, 5);
    }

    #[test]
    fn test_settings_banner() {
        let lines = settings_banner(&Config::default(), ConfigSource::Defaults);

        assert!(lines[0].contains("default"));
        assert_eq!(lines[1], "Number of floors - 5");
        assert_eq!(lines[2], "Cabin speed - 1 m/s");
        assert_eq!(lines[3], "Floor height - 3 m");
        assert_eq!(lines[4], "Time between opening and closing the doors - 5 s");
    }
}
