//! ----- DOORS -----
//! Opens the doors, holds them for the door cycle time and closes them again.

use crate::elevator::clock::Clock;
use crate::error::SimError;
use crate::shared::StatusEvent;
use crossbeam_channel as cbc;
use std::time::Duration;

/// Status events sent after the receiver is dropped are discarded; the cycle still runs.
pub fn open_close_doors(
    door_time: Duration,
    clock: &dyn Clock,
    status_tx: &cbc::Sender<StatusEvent>,
) -> Result<(), SimError> {
    let _ = status_tx.send(StatusEvent::DoorsOpened);
    clock.pause(door_time)?;
    let _ = status_tx.send(StatusEvent::DoorsClosed);
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
