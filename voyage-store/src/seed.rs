use serde::Deserialize;
use tracing::info;
use voyage_catalog::{
    CarRentalDetails, CatalogError, FlightDetails, HotelDetails, InventoryManager, ItemKind,
    Money, TravelItem,
};

use crate::StoreResult;

/// Item definition as written in configuration, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSpec {
    Flight {
        id: String,
        name: String,
        base_price: f64,
        airline: String,
        source: String,
        destination: String,
        departure_time: String,
        available_seats: u32,
    },
    Hotel {
        id: String,
        name: String,
        base_price: f64,
        location: String,
        available_rooms: u32,
        rating: u8,
    },
    CarRental {
        id: String,
        name: String,
        base_price: f64,
        car_type: String,
        available_cars: u32,
    },
}

impl ItemSpec {
    /// Validate the definition and turn it into a catalog item
    pub fn into_item(self) -> Result<TravelItem, CatalogError> {
        match self {
            ItemSpec::Flight {
                id,
                name,
                base_price,
                airline,
                source,
                destination,
                departure_time,
                available_seats,
            } => TravelItem::new(
                id,
                name,
                Money::from_decimal(base_price)?,
                ItemKind::Flight(FlightDetails {
                    airline,
                    source,
                    destination,
                    departure_time,
                    available_seats,
                }),
            ),
            ItemSpec::Hotel {
                id,
                name,
                base_price,
                location,
                available_rooms,
                rating,
            } => TravelItem::new(
                id,
                name,
                Money::from_decimal(base_price)?,
                ItemKind::Hotel(HotelDetails {
                    location,
                    available_rooms,
                    rating,
                }),
            ),
            ItemSpec::CarRental {
                id,
                name,
                base_price,
                car_type,
                available_cars,
            } => TravelItem::new(
                id,
                name,
                Money::from_decimal(base_price)?,
                ItemKind::CarRental(CarRentalDetails {
                    car_type,
                    available_cars,
                }),
            ),
        }
    }
}

/// Starter catalog used when configuration lists no items
pub fn sample_catalog() -> Vec<ItemSpec> {
    fn flight(id: &str, name: &str, price: f64, airline: &str, route: (&str, &str), time: &str, seats: u32) -> ItemSpec {
        ItemSpec::Flight {
            id: id.to_string(),
            name: name.to_string(),
            base_price: price,
            airline: airline.to_string(),
            source: route.0.to_string(),
            destination: route.1.to_string(),
            departure_time: time.to_string(),
            available_seats: seats,
        }
    }

    fn hotel(id: &str, name: &str, price: f64, location: &str, rooms: u32, rating: u8) -> ItemSpec {
        ItemSpec::Hotel {
            id: id.to_string(),
            name: name.to_string(),
            base_price: price,
            location: location.to_string(),
            available_rooms: rooms,
            rating,
        }
    }

    fn car(id: &str, name: &str, price: f64, car_type: &str, cars: u32) -> ItemSpec {
        ItemSpec::CarRental {
            id: id.to_string(),
            name: name.to_string(),
            base_price: price,
            car_type: car_type.to_string(),
            available_cars: cars,
        }
    }

    vec![
        flight("F001", "AI-101", 200.0, "Air India", ("Delhi", "Mumbai"), "10:00 AM", 5),
        flight("F002", "SG-202", 150.0, "SpiceJet", ("Mumbai", "Bangalore"), "02:30 PM", 0),
        hotel("H001", "Taj Hotel", 100.0, "Mumbai", 3, 5),
        hotel("H002", "Ibis Hotel", 50.0, "Delhi", 2, 3),
        hotel("H003", "Grand Plaza", 80.0, "Bangalore", 4, 4),
        car("C001", "Toyota Innova", 40.0, "SUV", 2),
        car("C002", "Mercedes E-Class", 80.0, "Luxury", 1),
        car("C003", "Honda City", 30.0, "Sedan", 3),
    ]
}

/// Build an inventory from item definitions, failing on the first bad one
pub fn build_inventory(specs: impl IntoIterator<Item = ItemSpec>) -> StoreResult<InventoryManager> {
    let mut manager = InventoryManager::new();
    for spec in specs {
        manager.register(spec.into_item()?)?;
    }

    info!("Seeded inventory with {} items", manager.len());
    Ok(manager)
}
