pub mod clock;
pub mod doors;
pub mod fsm;
pub mod movement;
pub mod requests;
#[cfg(test)]
pub mod test_utils;

pub use clock::{Clock, TerminateClock};
pub use fsm::{ElevatorFSM, Poll, RequestSource};
pub use requests::{request_channels, RequestChannels, RequestPanel};
