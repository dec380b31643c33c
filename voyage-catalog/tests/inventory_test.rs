use proptest::prelude::*;
use voyage_catalog::{
    CarRentalDetails, FlightDetails, HotelDetails, InventoryManager, Money, TravelItem,
};

fn flight(id: &str, base: f64, seats: u32) -> TravelItem {
    TravelItem::flight(
        id,
        "AI-101",
        Money::from_decimal(base).unwrap(),
        FlightDetails {
            airline: "Air India".to_string(),
            source: "Delhi".to_string(),
            destination: "Mumbai".to_string(),
            departure_time: "10:00 AM".to_string(),
            available_seats: seats,
        },
    )
    .unwrap()
}

fn hotel(id: &str, base: f64, rooms: u32, rating: u8) -> TravelItem {
    TravelItem::hotel(
        id,
        "Taj Hotel",
        Money::from_decimal(base).unwrap(),
        HotelDetails {
            location: "Mumbai".to_string(),
            available_rooms: rooms,
            rating,
        },
    )
    .unwrap()
}

fn car(id: &str, base: f64, car_type: &str, cars: u32) -> TravelItem {
    TravelItem::car_rental(
        id,
        "Rental",
        Money::from_decimal(base).unwrap(),
        CarRentalDetails {
            car_type: car_type.to_string(),
            available_cars: cars,
        },
    )
    .unwrap()
}

fn catalog() -> InventoryManager {
    InventoryManager::with_items([
        flight("F001", 200.0, 5),
        flight("F002", 150.0, 0),
        hotel("H001", 100.0, 3, 5),
        car("C002", 80.0, "Luxury", 1),
        car("C003", 30.0, "Sedan", 3),
    ])
    .unwrap()
}

/// Observable state of every item: (id, capacity, booked units)
fn state(manager: &InventoryManager) -> Vec<(String, u32, u32)> {
    manager
        .list_all()
        .iter()
        .map(|item| (item.id().to_string(), item.capacity(), item.booked_units()))
        .collect()
}

#[test]
fn test_reference_prices() {
    let manager = catalog();
    let price = |id: &str| manager.find_by_id(id).unwrap().calculate_price();

    assert_eq!(price("F001").to_string(), "$236.00");
    assert_eq!(price("H001").to_string(), "$150.00");
    assert_eq!(price("C002").to_string(), "$120.00");
    assert_eq!(price("C003").to_string(), "$30.00");
}

#[test]
fn test_book_flight_shows_in_bookings_once() {
    let mut manager = catalog();

    assert!(manager.book("F001"));

    let bookings = manager.list_bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id().as_str(), "F001");

    let row = manager.find_by_id("F001").unwrap().describe();
    assert_eq!(row.capacity, "4");
    assert_eq!(row.status, "Yes");
}

#[test]
fn test_flight_seats_drain_to_sold_out() {
    let mut manager = catalog();

    for seats_left in (1..=4).rev() {
        assert!(manager.book("F001"));
        let row = manager.find_by_id("F001").unwrap().describe();
        assert_eq!(row.capacity, seats_left.to_string());
        assert_eq!(row.status, "Yes");
    }

    assert!(manager.book("F001"));
    let row = manager.find_by_id("F001").unwrap().describe();
    assert_eq!((row.capacity.as_str(), row.status.as_str()), ("0", "No"));

    // Sixth booking is refused and changes nothing
    let before = state(&manager);
    assert!(!manager.book("F001"));
    assert_eq!(state(&manager), before);

    let bookings = manager.list_bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booked_units(), 5);
    assert!(manager.list_available().iter().all(|item| item.id().as_str() != "F001"));
}

#[test]
fn test_sold_out_booking_changes_nothing() {
    let mut manager = catalog();
    let before = state(&manager);

    assert!(!manager.book("F002"));
    assert_eq!(state(&manager), before);
}

#[test]
fn test_cancel_without_booking_changes_nothing() {
    let mut manager = catalog();
    let before = state(&manager);

    assert!(!manager.cancel("H001"));
    assert!(!manager.cancel("UNKNOWN"));
    assert_eq!(state(&manager), before);
}

#[test]
fn test_luxury_car_sells_out() {
    let mut manager = catalog();

    assert!(manager.book("C002"));
    let row = manager.find_by_id("C002").unwrap().describe();
    assert_eq!((row.capacity.as_str(), row.status.as_str()), ("0", "No"));
    assert!(manager.list_available().iter().all(|item| item.id().as_str() != "C002"));

    assert!(manager.cancel("C002"));
    assert!(manager.find_by_id("C002").unwrap().is_available());
}

#[test]
fn test_listing_is_a_separate_vec() {
    let manager = catalog();

    // Callers own the returned Vec and may reshape it freely
    let mut listed = manager.list_all();
    listed.retain(|item| item.is_available());
    listed.reverse();

    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].id().as_str(), "C003");
    assert_eq!(manager.list_all().len(), 5);
    assert_eq!(manager.list_all()[0].id().as_str(), "F001");
}

#[derive(Debug, Clone)]
enum Op {
    Book(usize),
    Cancel(usize),
}

const IDS: [&str; 6] = ["F001", "F002", "H001", "C002", "C003", "MISSING"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len()).prop_map(Op::Book),
        (0..IDS.len()).prop_map(Op::Cancel),
    ]
}

proptest! {
    #[test]
    fn prop_availability_tracks_capacity(ops in proptest::collection::vec(op(), 0..64)) {
        let mut manager = catalog();

        for op in ops {
            match op {
                Op::Book(i) => {
                    let was_available = manager.find_by_id(IDS[i]).map_or(false, |item| item.is_available());
                    prop_assert_eq!(manager.book(IDS[i]), was_available);
                }
                Op::Cancel(i) => {
                    let was_booked = manager.find_by_id(IDS[i]).map_or(false, |item| item.is_booked());
                    prop_assert_eq!(manager.cancel(IDS[i]), was_booked);
                }
            }

            for item in manager.list_all() {
                prop_assert_eq!(item.is_available(), item.capacity() > 0);
            }

            let available: Vec<_> = manager.list_all().into_iter().filter(|item| item.is_available()).collect();
            prop_assert_eq!(manager.list_available(), available);

            let booked: Vec<_> = manager.list_all().into_iter().filter(|item| item.is_booked()).collect();
            prop_assert_eq!(manager.list_bookings(), booked);
        }
    }

    #[test]
    fn prop_book_then_cancel_round_trips(ops in proptest::collection::vec(op(), 0..32), target in 0..5usize) {
        let mut manager = catalog();
        for op in ops {
            match op {
                Op::Book(i) => { manager.book(IDS[i]); }
                Op::Cancel(i) => { manager.cancel(IDS[i]); }
            }
        }

        let id = IDS[target];
        let before = state(&manager);

        let available = manager.find_by_id(id).unwrap().is_available();

        prop_assert_eq!(manager.book(id), available);
        if available {
            prop_assert!(manager.cancel(id));
        }
        prop_assert_eq!(state(&manager), before);
    }
}
