/*
 * Test doubles shared by the elevator unit tests.
 */
use crate::elevator::clock::Clock;
use crate::error::SimError;
use crossbeam_channel as cbc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Clock that returns immediately and reports every requested pause on a channel.
pub struct RecordingClock {
    pause_tx: cbc::Sender<Duration>,
    remaining: Option<AtomicUsize>,
}

impl RecordingClock {
    pub fn new() -> (RecordingClock, cbc::Receiver<Duration>) {
        let (pause_tx, pause_rx) = cbc::unbounded::<Duration>();
        (
            RecordingClock {
                pause_tx,
                remaining: None,
            },
            pause_rx,
        )
    }

    /// Clock that completes `pauses` pauses and interrupts the next one.
    pub fn interrupted_after(pauses: usize) -> (RecordingClock, cbc::Receiver<Duration>) {
        let (mut clock, pause_rx) = RecordingClock::new();
        clock.remaining = Some(AtomicUsize::new(pauses));
        (clock, pause_rx)
    }
}

impl Clock for RecordingClock {
    fn pause(&self, duration: Duration) -> Result<(), SimError> {
        if let Some(remaining) = &self.remaining {
            let left = remaining.load(Ordering::SeqCst);
            if left == 0 {
                return Err(SimError::Interrupted);
            }
            remaining.store(left - 1, Ordering::SeqCst);
        }
        let _ = self.pause_tx.send(duration);
        Ok(())
    }
}
