/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel for a signed floor difference. Zero counts as down.
    pub fn from_delta(delta: i16) -> Direction {
        if delta > 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/**
 * Cabin state owned by the dispatcher.
 *
 * `floor` is always within 1..=n_floors. The cabin is busy exactly while
 * `behaviour` is `Moving`, which spans a whole move-and-door cycle.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub behaviour: Behaviour,
    pub floor: u8,
}

impl ElevatorState {
    pub fn new() -> ElevatorState {
        ElevatorState {
            behaviour: Behaviour::Idle,
            floor: 1,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.behaviour == Behaviour::Moving
    }
}

impl Default for ElevatorState {
    fn default() -> Self {
        ElevatorState::new()
    }
}

/// Status reported to the output sink while a request is serviced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StatusEvent {
    PassingFloor { floor: u8 },
    ArrivedAtFloor { floor: u8 },
    DoorsOpened,
    DoorsClosed,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::PassingFloor { floor } => write!(f, "passing floor {}", floor),
            StatusEvent::ArrivedAtFloor { floor } => write!(f, "arrived at floor {}", floor),
            StatusEvent::DoorsOpened => write!(f, "doors opened"),
            StatusEvent::DoorsClosed => write!(f, "doors closed"),
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
