use serde::Serialize;

use crate::product::{ItemKind, TravelItem};

/// Column headers, in the order `DisplayRow::fields` yields them
pub const COLUMN_NAMES: [&str; 10] = [
    "ID",
    "Name",
    "Type",
    "Details",
    "Route/Rating",
    "Time",
    "Available",
    "Base Price",
    "Final Price",
    "Status",
];

const NOT_APPLICABLE: &str = "-";

/// Flat, preformatted view of one item for listing screens.
///
/// Built from the item's state at the time `describe()` is called; it is not
/// updated by later bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub name: String,
    pub item_type: String,
    pub details: String,
    pub secondary: String,
    pub schedule: String,
    pub capacity: String,
    pub base_price: String,
    pub final_price: String,
    pub status: String,
}

impl DisplayRow {
    pub fn fields(&self) -> [&str; 10] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.item_type.as_str(),
            self.details.as_str(),
            self.secondary.as_str(),
            self.schedule.as_str(),
            self.capacity.as_str(),
            self.base_price.as_str(),
            self.final_price.as_str(),
            self.status.as_str(),
        ]
    }
}

impl From<&TravelItem> for DisplayRow {
    fn from(item: &TravelItem) -> Self {
        let (details, secondary, schedule) = match item.kind() {
            ItemKind::Flight(flight) => (
                flight.airline.clone(),
                format!("{} to {}", flight.source, flight.destination),
                flight.departure_time.clone(),
            ),
            ItemKind::Hotel(hotel) => (
                hotel.location.clone(),
                format!("{} Stars", hotel.rating),
                NOT_APPLICABLE.to_string(),
            ),
            ItemKind::CarRental(car) => (
                car.car_type.clone(),
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
            ),
        };

        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            item_type: item.item_type().to_string(),
            details,
            secondary,
            schedule,
            capacity: item.capacity().to_string(),
            base_price: item.base_price().to_string(),
            final_price: item.calculate_price().to_string(),
            status: if item.is_available() { "Yes" } else { "No" }.to_string(),
        }
    }
}
