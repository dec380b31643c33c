pub mod product;
pub mod pricing;
pub mod display;
pub mod inventory;
pub mod shared;

pub use product::{
    CarRentalDetails, CatalogError, FlightDetails, HotelDetails, ItemId, ItemKind, ItemType,
    TravelItem,
};
pub use pricing::{Money, PricingRule};
pub use display::{DisplayRow, COLUMN_NAMES};
pub use inventory::{BookingError, InventoryManager};
pub use shared::SharedInventory;
