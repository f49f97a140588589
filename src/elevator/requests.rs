use crate::error::RequestError;
use crossbeam_channel as cbc;

/**
 * Receiving ends of the two request channels, handed to the dispatcher.
 *
 * # Fields
 * - `cab_request_rx`:      Floors selected from inside the cabin.
 * - `porch_request_rx`:    Floors the cabin is called to from a porch.
 */
pub struct RequestChannels {
    pub cab_request_rx: cbc::Receiver<u8>,
    pub porch_request_rx: cbc::Receiver<u8>,
}

/**
 * Producer handle for floor requests.
 *
 * Every request is range checked against the building before it is queued, so
 * the dispatcher only ever sees floors in 1..=n_floors. Clone it to give each
 * producer its own handle.
 */
#[derive(Clone)]
pub struct RequestPanel {
    n_floors: u8,
    cab_request_tx: cbc::Sender<u8>,
    porch_request_tx: cbc::Sender<u8>,
}

/// Creates both unbounded request channels for a building with `n_floors` floors.
pub fn request_channels(n_floors: u8) -> (RequestPanel, RequestChannels) {
    let (cab_request_tx, cab_request_rx) = cbc::unbounded::<u8>();
    let (porch_request_tx, porch_request_rx) = cbc::unbounded::<u8>();

    (
        RequestPanel {
            n_floors,
            cab_request_tx,
            porch_request_tx,
        },
        RequestChannels {
            cab_request_rx,
            porch_request_rx,
        },
    )
}

impl RequestPanel {
    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn request_from_cabin(&self, floor: u8) -> Result<(), RequestError> {
        self.check_floor(floor)?;
        self.cab_request_tx
            .send(floor)
            .map_err(|_| RequestError::Closed)
    }

    pub fn request_from_porch(&self, floor: u8) -> Result<(), RequestError> {
        self.check_floor(floor)?;
        self.porch_request_tx
            .send(floor)
            .map_err(|_| RequestError::Closed)
    }

    fn check_floor(&self, floor: u8) -> Result<(), RequestError> {
        if floor == 0 || floor > self.n_floors {
            return Err(RequestError::OutOfRange {
                floor,
                n_floors: self.n_floors,
            });
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
