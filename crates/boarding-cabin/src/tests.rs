//! Unit tests for seats, manifests, and the CSV loader.

use boarding_core::{PersonId, RowId, SimRng};

use crate::{BoardingManifest, CabinLayout, Seat, SetupError, load_manifest_reader};

fn seat(row: u16, column: u8) -> Seat {
    Seat::new(RowId(row), column)
}

#[cfg(test)]
mod seats {
    use super::*;

    #[test]
    fn label_roundtrip() {
        let s = seat(12, 2);
        assert_eq!(s.label(), "12C");
        assert_eq!("12C".parse::<Seat>().unwrap(), s);
        assert_eq!(s.column_letter(), 'C');
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Seat>().is_err());
        assert!("C".parse::<Seat>().is_err());
        assert!("12".parse::<Seat>().is_err());
        assert!("12c9".parse::<Seat>().is_err());
    }

    #[test]
    fn layout_inventory() {
        let layout = CabinLayout::new(10, 4);
        assert_eq!(layout.seat_count(), 40);

        let seats: Vec<Seat> = layout.seats().collect();
        assert_eq!(seats.len(), 40);
        assert_eq!(seats[0], seat(1, 0));
        assert_eq!(seats[39], seat(10, 3));
    }

    #[test]
    fn layout_contains() {
        let layout = CabinLayout::new(10, 4);
        assert!(layout.contains(seat(1, 0)));
        assert!(layout.contains(seat(10, 3)));
        assert!(!layout.contains(seat(0, 0)));
        assert!(!layout.contains(seat(11, 0)));
        assert!(!layout.contains(seat(5, 4)));
    }
}

#[cfg(test)]
mod manifests {
    use super::*;

    #[test]
    fn explicit_manifest_validates() {
        let m = BoardingManifest::new(
            vec![seat(1, 0), seat(5, 1)],
            vec![PersonId(1), PersonId(0)],
        )
        .unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.seat(PersonId(0)), seat(1, 0));
        assert_eq!(m.queue(), &[PersonId(1), PersonId(0)]);
    }

    #[test]
    fn count_mismatch_rejected() {
        let err = BoardingManifest::new(vec![seat(1, 0)], vec![]).unwrap_err();
        assert!(matches!(err, SetupError::CountMismatch { seats: 1, queue: 0 }));
    }

    #[test]
    fn duplicate_queue_entry_rejected() {
        let err = BoardingManifest::new(
            vec![seat(1, 0), seat(2, 0)],
            vec![PersonId(0), PersonId(0)],
        )
        .unwrap_err();
        assert!(matches!(err, SetupError::QueueNotPermutation { person } if person == PersonId(0)));
    }

    #[test]
    fn out_of_range_queue_entry_rejected() {
        let err = BoardingManifest::new(
            vec![seat(1, 0), seat(2, 0)],
            vec![PersonId(0), PersonId(7)],
        )
        .unwrap_err();
        assert!(matches!(err, SetupError::QueueNotPermutation { person } if person == PersonId(7)));
    }

    #[test]
    fn duplicate_seat_rejected() {
        let err = BoardingManifest::new(
            vec![seat(3, 1), seat(3, 1)],
            vec![PersonId(0), PersonId(1)],
        )
        .unwrap_err();
        assert!(matches!(err, SetupError::DuplicateSeat { .. }));
    }

    #[test]
    fn row_zero_rejected() {
        let err = BoardingManifest::new(vec![seat(0, 0)], vec![PersonId(0)]).unwrap_err();
        assert!(matches!(err, SetupError::RowOutOfRange { .. }));
    }

    #[test]
    fn random_manifest_is_valid_and_reproducible() {
        let layout = CabinLayout::new(10, 4);
        let a = BoardingManifest::random(&layout, 40, &mut SimRng::new(131)).unwrap();
        let b = BoardingManifest::random(&layout, 40, &mut SimRng::new(131)).unwrap();

        assert_eq!(a.len(), 40);
        assert_eq!(a.seats(), b.seats());
        assert_eq!(a.queue(), b.queue());
        assert!(a.seats().iter().all(|s| layout.contains(*s)));
    }

    #[test]
    fn random_manifest_can_underfill_cabin() {
        let layout = CabinLayout::new(10, 4);
        let m = BoardingManifest::random(&layout, 7, &mut SimRng::new(1)).unwrap();
        assert_eq!(m.len(), 7);
        assert_eq!(m.queue().len(), 7);
    }

    #[test]
    fn random_manifest_rejects_overbooking() {
        let layout = CabinLayout::new(2, 2);
        let err = BoardingManifest::random(&layout, 5, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, SetupError::NotEnoughSeats { seats: 4, passengers: 5 }));
    }
}

#[cfg(test)]
mod loading {
    use std::io::Cursor;

    use super::*;

    const GOOD: &str = "\
person_id,seat_row,seat_column,queue_position
0,3,B,2
1,1,A,0
2,5,D,1
";

    #[test]
    fn loads_manifest_and_queue_order() {
        let m = load_manifest_reader(Cursor::new(GOOD)).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.seat(PersonId(0)), seat(3, 1));
        assert_eq!(m.seat(PersonId(2)), seat(5, 3));
        // queue_position column, not file order, decides the line-up.
        assert_eq!(m.queue(), &[PersonId(1), PersonId(2), PersonId(0)]);
    }

    #[test]
    fn lowercase_column_accepted() {
        let csv = "person_id,seat_row,seat_column,queue_position\n0,1,a,0\n";
        let m = load_manifest_reader(Cursor::new(csv)).unwrap();
        assert_eq!(m.seat(PersonId(0)), seat(1, 0));
    }

    #[test]
    fn duplicate_person_rejected() {
        let csv = "person_id,seat_row,seat_column,queue_position\n0,1,A,0\n0,2,B,1\n";
        let err = load_manifest_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SetupError::Parse(_)));
    }

    #[test]
    fn duplicate_queue_position_rejected() {
        let csv = "person_id,seat_row,seat_column,queue_position\n0,1,A,0\n1,2,B,0\n";
        let err = load_manifest_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SetupError::QueueNotPermutation { .. }));
    }

    #[test]
    fn invalid_column_rejected() {
        let csv = "person_id,seat_row,seat_column,queue_position\n0,1,?,0\n";
        let err = load_manifest_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SetupError::Parse(_)));
    }

    #[test]
    fn malformed_csv_rejected() {
        let csv = "person_id,seat_row,seat_column,queue_position\n0,not_a_row,A,0\n";
        let err = load_manifest_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SetupError::Parse(_)));
    }
}
