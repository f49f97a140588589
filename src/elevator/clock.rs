use crate::error::SimError;
use crossbeam_channel as cbc;
use std::time::Duration;

/**
 * Source of the pauses the simulation spends "in motion".
 *
 * The dispatcher thread is blocked for the whole pause. A pause that ends early
 * is an interruption and fails with `SimError::Interrupted`.
 */
pub trait Clock: Send {
    fn pause(&self, duration: Duration) -> Result<(), SimError>;
}

/**
 * Wall clock pause that can be cut short through a terminate channel.
 *
 * Receiving `()` or losing every sender interrupts the pause.
 */
pub struct TerminateClock {
    terminate_rx: cbc::Receiver<()>,
}

impl TerminateClock {
    pub fn new(terminate_rx: cbc::Receiver<()>) -> TerminateClock {
        TerminateClock { terminate_rx }
    }
}

impl Clock for TerminateClock {
    fn pause(&self, duration: Duration) -> Result<(), SimError> {
        match self.terminate_rx.recv_timeout(duration) {
            Err(cbc::RecvTimeoutError::Timeout) => Ok(()),
            Ok(()) | Err(cbc::RecvTimeoutError::Disconnected) => Err(SimError::Interrupted),
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
