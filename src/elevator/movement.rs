use crate::elevator::clock::Clock;
use crate::error::SimError;
use crate::shared::{Direction, ElevatorState, StatusEvent};
use crossbeam_channel as cbc;
use std::time::Duration;

/// Signed number of floors between the cabin and `target_floor`. Negative means down.
pub fn floors_to_pass(current_floor: u8, target_floor: u8) -> i16 {
    target_floor as i16 - current_floor as i16
}

/// Floor reached after one step in `direction`. The cabin never leaves 1..=n_floors.
pub fn step_floor(floor: u8, direction: Direction, n_floors: u8) -> u8 {
    match direction {
        Direction::Up if floor < n_floors => floor + 1,
        Direction::Down if floor > 1 => floor - 1,
        _ => floor,
    }
}

/**
 * Moves the cabin floor by floor towards `target_floor`.
 *
 * One pause of `time_per_floor` is taken per floor. A "passing" event names the
 * floor being left, except on the first step of a downward trip. The last step
 * reports the floor actually reached, so a target outside the building stalls
 * at the top or bottom floor. Nothing is emitted when the cabin is already there.
 * Events sent after the status receiver is dropped are discarded and the trip
 * carries on.
 */
pub fn travel(
    state: &mut ElevatorState,
    target_floor: u8,
    n_floors: u8,
    time_per_floor: Duration,
    clock: &dyn Clock,
    status_tx: &cbc::Sender<StatusEvent>,
) -> Result<(), SimError> {
    let delta = floors_to_pass(state.floor, target_floor);
    if delta == 0 {
        return Ok(());
    }

    let direction = Direction::from_delta(delta);
    let steps = delta.unsigned_abs();

    for step in 0..steps {
        if !(direction == Direction::Down && step == 0) {
            let _ = status_tx.send(StatusEvent::PassingFloor { floor: state.floor });
        }

        clock.pause(time_per_floor)?;
        state.floor = step_floor(state.floor, direction, n_floors);

        if step == steps - 1 {
            let _ = status_tx.send(StatusEvent::ArrivedAtFloor { floor: state.floor });
        }
    }

    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod movement_tests {
    use super::*;
    use crate::elevator::test_utils::RecordingClock;
    use crate::shared::StatusEvent::{ArrivedAtFloor, PassingFloor};

    fn state_at(floor: u8) -> ElevatorState {
        ElevatorState {
            floor,
            ..ElevatorState::new()
        }
    }

    #[test]
    fn test_floors_to_pass() {
        assert_eq!(floors_to_pass(1, 5), 4);
        assert_eq!(floors_to_pass(9, 6), -3);
        assert_eq!(floors_to_pass(5, 5), 0);
    }

    #[test]
    fn test_step_floor_clamped() {
        assert_eq!(step_floor(1, Direction::Up, 5), 2);
        assert_eq!(step_floor(5, Direction::Up, 5), 5);
        assert_eq!(step_floor(4, Direction::Down, 5), 3);
        assert_eq!(step_floor(1, Direction::Down, 5), 1);
    }

    #[test]
    fn test_travel_up() {
        // Arrange
        let (clock, pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(1);

        // Act
        travel(&mut state, 4, 10, Duration::from_secs(1), &clock, &status_tx).unwrap();

        // Assert
        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PassingFloor { floor: 1 },
                PassingFloor { floor: 2 },
                PassingFloor { floor: 3 },
                ArrivedAtFloor { floor: 4 },
            ]
        );
        let pauses: Vec<Duration> = pause_rx.try_iter().collect();
        assert_eq!(pauses, vec![Duration::from_secs(1); 3]);
        assert_eq!(state.floor, 4);
    }

    #[test]
    fn test_travel_down_skips_first_passing_event() {
        let (clock, pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(9);

        travel(&mut state, 6, 10, Duration::from_millis(1), &clock, &status_tx).unwrap();

        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PassingFloor { floor: 8 },
                PassingFloor { floor: 7 },
                ArrivedAtFloor { floor: 6 },
            ]
        );
        assert_eq!(pause_rx.try_iter().count(), 3);
        assert_eq!(state.floor, 6);
    }

    #[test]
    fn test_single_step_down_only_arrives() {
        let (clock, _pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(3);

        travel(&mut state, 2, 5, Duration::ZERO, &clock, &status_tx).unwrap();

        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(events, vec![ArrivedAtFloor { floor: 2 }]);
    }

    #[test]
    fn test_no_travel_when_already_there() {
        let (clock, pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(5);

        travel(&mut state, 5, 5, Duration::from_secs(3), &clock, &status_tx).unwrap();

        assert!(status_rx.is_empty());
        assert!(pause_rx.is_empty());
        assert_eq!(state.floor, 5);
    }

    #[test]
    fn test_passing_event_counts() {
        // Moving up emits one passing event per floor, moving down one less
        for (current, target) in [(1u8, 5u8), (5, 1), (2, 3), (3, 2), (1, 10), (10, 1), (4, 7), (7, 4)] {
            let (clock, _pause_rx) = RecordingClock::new();
            let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
            let mut state = state_at(current);

            travel(&mut state, target, 10, Duration::ZERO, &clock, &status_tx).unwrap();

            let events: Vec<StatusEvent> = status_rx.try_iter().collect();
            let distance = (target as i16 - current as i16).unsigned_abs() as usize;
            let expected_passing = if target > current { distance } else { distance - 1 };
            let passing = events
                .iter()
                .filter(|e| matches!(e, PassingFloor { .. }))
                .count();

            assert_eq!(passing, expected_passing, "{} -> {}", current, target);
            assert_eq!(events.last(), Some(&ArrivedAtFloor { floor: target }));
            assert_eq!(
                events.iter().filter(|e| matches!(e, ArrivedAtFloor { .. })).count(),
                1
            );
        }
    }

    #[test]
    fn test_target_above_building_stalls_at_top() {
        // Arrange
        let (clock, pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(4);

        // Act
        travel(&mut state, 7, 5, Duration::ZERO, &clock, &status_tx).unwrap();

        // Assert
        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PassingFloor { floor: 4 },
                PassingFloor { floor: 5 },
                PassingFloor { floor: 5 },
                ArrivedAtFloor { floor: 5 },
            ]
        );
        assert_eq!(pause_rx.try_iter().count(), 3);
        assert_eq!(state.floor, 5);
    }

    #[test]
    fn test_target_below_building_stalls_at_bottom() {
        let (clock, _pause_rx) = RecordingClock::new();
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(2);

        travel(&mut state, 0, 5, Duration::ZERO, &clock, &status_tx).unwrap();

        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(events, vec![PassingFloor { floor: 1 }, ArrivedAtFloor { floor: 1 }]);
        assert_eq!(state.floor, 1);
    }

    #[test]
    fn test_interrupted_travel_stops_early() {
        let (clock, _pause_rx) = RecordingClock::interrupted_after(1);
        let (status_tx, status_rx) = cbc::unbounded::<StatusEvent>();
        let mut state = state_at(1);

        let result = travel(&mut state, 5, 5, Duration::ZERO, &clock, &status_tx);

        assert_eq!(result, Err(SimError::Interrupted));
        assert_eq!(state.floor, 2);
        let events: Vec<StatusEvent> = status_rx.try_iter().collect();
        assert_eq!(events, vec![PassingFloor { floor: 1 }, PassingFloor { floor: 2 }]);
    }
}
