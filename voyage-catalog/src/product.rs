use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

use crate::display::DisplayRow;
use crate::pricing::{Money, PricingRule, FLIGHT_SURCHARGE_PERCENT};

/// Identifier of a bookable item, unique within one inventory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Product types in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Flight,
    Hotel,
    CarRental,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemType::Flight => "Flight",
            ItemType::Hotel => "Hotel",
            ItemType::CarRental => "Car Rental",
        };
        f.write_str(label)
    }
}

/// Seats on one scheduled flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightDetails {
    pub airline: String,
    pub source: String,
    pub destination: String,
    pub departure_time: String,
    pub available_seats: u32,
}

/// Rooms of one hotel room class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelDetails {
    pub location: String,
    pub available_rooms: u32,
    /// Star rating, 1 to 5
    pub rating: u8,
}

/// Cars of one rental class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarRentalDetails {
    pub car_type: String,
    pub available_cars: u32,
}

/// Variant-specific part of a travel item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Flight(FlightDetails),
    Hotel(HotelDetails),
    CarRental(CarRentalDetails),
}

/// One bookable product: a flight, a hotel room class or a rental car class.
///
/// Identity, name and base price are fixed at construction. Only `book` and
/// `cancel` mutate the item, and both keep `is_available() == (capacity() > 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelItem {
    id: ItemId,
    name: String,
    base_price: Money,
    /// Units taken by active bookings and not yet cancelled
    booked_units: u32,
    #[serde(flatten)]
    kind: ItemKind,
}

impl TravelItem {
    /// Validate and build an item. New items are never booked.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        base_price: Money,
        kind: ItemKind,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let name = name.into();

        if id.as_str().trim().is_empty() {
            return Err(CatalogError::InvalidEntity("item id must not be empty".to_string()));
        }

        if name.trim().is_empty() {
            return Err(CatalogError::InvalidEntity(format!("item {} has an empty name", id)));
        }

        if let ItemKind::Hotel(hotel) = &kind {
            if !(1..=5).contains(&hotel.rating) {
                return Err(CatalogError::InvalidEntity(format!(
                    "hotel {} rating must be between 1 and 5, got {}",
                    id, hotel.rating
                )));
            }
        }

        Ok(Self {
            id,
            name,
            base_price,
            booked_units: 0,
            kind,
        })
    }

    pub fn flight(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        base_price: Money,
        details: FlightDetails,
    ) -> Result<Self, CatalogError> {
        Self::new(id, name, base_price, ItemKind::Flight(details))
    }

    pub fn hotel(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        base_price: Money,
        details: HotelDetails,
    ) -> Result<Self, CatalogError> {
        Self::new(id, name, base_price, ItemKind::Hotel(details))
    }

    pub fn car_rental(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        base_price: Money,
        details: CarRentalDetails,
    ) -> Result<Self, CatalogError> {
        Self::new(id, name, base_price, ItemKind::CarRental(details))
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Flight(_) => ItemType::Flight,
            ItemKind::Hotel(_) => ItemType::Hotel,
            ItemKind::CarRental(_) => ItemType::CarRental,
        }
    }

    /// Whether the inventory currently counts this item among its bookings
    pub fn is_booked(&self) -> bool {
        self.booked_units > 0
    }

    /// Number of units currently held by bookings
    pub fn booked_units(&self) -> u32 {
        self.booked_units
    }

    /// Remaining bookable units (seats, rooms or cars)
    pub fn capacity(&self) -> u32 {
        match &self.kind {
            ItemKind::Flight(flight) => flight.available_seats,
            ItemKind::Hotel(hotel) => hotel.available_rooms,
            ItemKind::CarRental(car) => car.available_cars,
        }
    }

    fn capacity_mut(&mut self) -> &mut u32 {
        match &mut self.kind {
            ItemKind::Flight(flight) => &mut flight.available_seats,
            ItemKind::Hotel(hotel) => &mut hotel.available_rooms,
            ItemKind::CarRental(car) => &mut car.available_cars,
        }
    }

    pub fn is_available(&self) -> bool {
        self.capacity() > 0
    }

    /// Formula used to derive the sale price from the base price
    pub fn pricing_rule(&self) -> PricingRule {
        match &self.kind {
            ItemKind::Flight(_) => PricingRule::FlatSurcharge {
                percent: FLIGHT_SURCHARGE_PERCENT,
            },
            ItemKind::Hotel(hotel) => PricingRule::StarRating { rating: hotel.rating },
            ItemKind::CarRental(car) if car.car_type.eq_ignore_ascii_case("luxury") => {
                PricingRule::LuxuryPremium
            }
            ItemKind::CarRental(_) => PricingRule::Base,
        }
    }

    /// Sale price. Depends only on immutable fields, never on capacity.
    pub fn calculate_price(&self) -> Money {
        self.pricing_rule().apply(self.base_price)
    }

    /// Take one unit. No-op when nothing is left; returns whether a unit was taken.
    pub fn book(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }

        *self.capacity_mut() -= 1;
        self.booked_units += 1;
        true
    }

    /// Give one booked unit back. No-op unless the item holds a booking.
    pub fn cancel(&mut self) -> bool {
        if self.booked_units == 0 {
            return false;
        }

        let capacity = self.capacity_mut();
        *capacity = capacity.saturating_add(1);
        self.booked_units -= 1;
        true
    }

    /// Display projection of the current state
    pub fn describe(&self) -> DisplayRow {
        DisplayRow::from(self)
    }
}

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
}
