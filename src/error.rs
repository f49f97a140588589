/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/

/// Invalid or unreadable startup configuration. Fatal before the simulation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("expected 4 arguments (floors, speed, height, door time), got {0}")]
    ArgumentCount(usize),

    #[error("{name} must be a number, got {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("number of floors must be between 5 and 20, got {0}")]
    FloorCount(u8),

    #[error("cabin speed must be a number greater than zero, got {0}")]
    CabinSpeed(f64),

    #[error("floor height must be a number greater than zero, got {0}")]
    FloorHeight(f64),

    #[error("floor height {floor_height} m at {cabin_speed} m/s gives a time per floor that is too long")]
    TimePerFloor { floor_height: f64, cabin_speed: f64 },

    #[error("door cycle time must be a whole number of seconds greater than zero")]
    DoorTime,

    #[error("poll interval must be greater than zero milliseconds")]
    PollInterval,
}

/// Rejected floor request. Raised at the producer boundary and never seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("floor {floor} is outside 1..={n_floors}")]
    OutOfRange { floor: u8, n_floors: u8 },

    #[error("the elevator is no longer accepting requests")]
    Closed,
}

/// Failure inside the running simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("elevator was interrupted while waiting")]
    Interrupted,
}
