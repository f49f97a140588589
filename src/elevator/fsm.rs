use crate::config::Config;
use crate::elevator::clock::Clock;
use crate::elevator::doors;
use crate::elevator::movement;
use crate::elevator::requests::RequestChannels;
use crate::error::SimError;
use crate::shared::{Behaviour, ElevatorState, StatusEvent};
use crossbeam_channel as cbc;
use log::{debug, info};
use std::time::Duration;

/**
 * Dispatches floor requests to the single cabin.
 *
 * The `ElevatorFSM` owns the cabin state and is the only thing that changes it.
 * It polls the two request channels on a fixed cadence and, whenever the cabin
 * is idle, takes one request and services it with a full move-and-door cycle
 * before looking at the channels again. There is no preemption: a dispatched
 * request always runs to the end unless the clock is interrupted.
 *
 * Requests from inside the cabin always go before porch calls, whatever order
 * they arrived in. Passengers already riding take precedence over new callers.
 *
 * # Fields
 * - `cab_request_rx`:      Receives floors selected inside the cabin.
 * - `porch_request_rx`:    Receives floors the cabin is called to.
 * - `status_tx`:           Sends status events to the output sink.
 * - `state_tx`:            Publishes the cabin state on every idle/moving transition.
 * - `clock`:               Source of all pauses, both between polls and while in motion.
 * - `state`:               Current floor and behaviour of the cabin.
 * - `n_floors`:            The total number of floors in the building.
 * - `time_per_floor`:      Time to pass one floor.
 * - `door_time`:           Time the doors stay open.
 * - `poll_interval`:       Pause between two polls.
 */
pub struct ElevatorFSM {
    // Request channels
    cab_request_rx: cbc::Receiver<u8>,
    porch_request_rx: cbc::Receiver<u8>,

    // Output channels
    status_tx: cbc::Sender<StatusEvent>,
    state_tx: cbc::Sender<ElevatorState>,

    // Private fields
    clock: Box<dyn Clock>,
    state: ElevatorState,
    n_floors: u8,
    time_per_floor: Duration,
    door_time: Duration,
    poll_interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    Cabin,
    Porch,
}

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A cycle is in progress, nothing was taken.
    Busy,
    /// Both channels were empty.
    Idle,
    /// One request was taken and serviced.
    Served(RequestSource, u8),
    /// Both channels are empty and every producer is gone.
    Closed,
}

enum NextRequest {
    Pending(RequestSource, u8),
    Empty,
    Closed,
}

impl ElevatorFSM {
    pub fn new(
        config: &Config,
        requests: RequestChannels,
        status_tx: cbc::Sender<StatusEvent>,
        state_tx: cbc::Sender<ElevatorState>,
        clock: Box<dyn Clock>,
    ) -> ElevatorFSM {
        ElevatorFSM {
            cab_request_rx: requests.cab_request_rx,
            porch_request_rx: requests.porch_request_rx,
            status_tx,
            state_tx,
            clock,
            state: ElevatorState::new(),
            n_floors: config.building.n_floors,
            time_per_floor: config.building.time_per_floor(),
            door_time: config.building.door_duration(),
            poll_interval: config.dispatcher.poll_interval(),
        }
    }

    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    /// Polls until every producer is gone and the channels are drained, or the clock is interrupted.
    pub fn run(mut self) -> Result<(), SimError> {
        info!(
            "Elevator started at floor {} ({} floors, {:?} per floor, doors {:?})",
            self.state.floor, self.n_floors, self.time_per_floor, self.door_time
        );

        loop {
            self.clock.pause(self.poll_interval)?;
            if self.poll()? == Poll::Closed {
                info!("All request producers are gone, elevator stopping");
                return Ok(());
            }
        }
    }

    /// Takes at most one request and services it. A no-op while the cabin is busy.
    pub fn poll(&mut self) -> Result<Poll, SimError> {
        if self.state.is_busy() {
            return Ok(Poll::Busy);
        }

        match self.next_request() {
            NextRequest::Pending(source, floor) => {
                debug!("Dispatching {:?} request for floor {}", source, floor);
                self.serve(floor)?;
                Ok(Poll::Served(source, floor))
            }
            NextRequest::Closed => Ok(Poll::Closed),
            NextRequest::Empty => Ok(Poll::Idle),
        }
    }

    /// Cabin channel first, porch second.
    fn next_request(&self) -> NextRequest {
        let cab = match self.cab_request_rx.try_recv() {
            Ok(floor) => return NextRequest::Pending(RequestSource::Cabin, floor),
            Err(e) => e,
        };
        let porch = match self.porch_request_rx.try_recv() {
            Ok(floor) => return NextRequest::Pending(RequestSource::Porch, floor),
            Err(e) => e,
        };

        if cab.is_disconnected() && porch.is_disconnected() {
            NextRequest::Closed
        } else {
            NextRequest::Empty
        }
    }

    fn serve(&mut self, target_floor: u8) -> Result<(), SimError> {
        self.set_behaviour(Behaviour::Moving);

        movement::travel(
            &mut self.state,
            target_floor,
            self.n_floors,
            self.time_per_floor,
            self.clock.as_ref(),
            &self.status_tx,
        )?;
        doors::open_close_doors(self.door_time, self.clock.as_ref(), &self.status_tx)?;

        self.set_behaviour(Behaviour::Idle);
        Ok(())
    }

    fn set_behaviour(&mut self, behaviour: Behaviour) {
        self.state.behaviour = behaviour;
        debug!("Elevator {:?} at floor {}", behaviour, self.state.floor);
        let _ = self.state_tx.send(self.state.clone());
    }
}

/***************************************/
/*           Test helpers              */
/***************************************/
#[cfg(test)]
impl ElevatorFSM {
    pub fn test_set_state(&mut self, state: ElevatorState) {
        self.state = state;
    }
}
