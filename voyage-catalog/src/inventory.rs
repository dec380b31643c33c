use std::collections::HashMap;

use tracing::{debug, info};

use crate::product::{CatalogError, ItemId, TravelItem};

/// In-memory catalog of travel items and their booking state.
///
/// Items keep registration order. The booked-unit count on each item is the
/// only record of active bookings, so `list_bookings` can never drift from it.
#[derive(Debug, Default)]
pub struct InventoryManager {
    catalog: Vec<TravelItem>,
    index: HashMap<ItemId, usize>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a manager preloaded with `items`, in order
    pub fn with_items(items: impl IntoIterator<Item = TravelItem>) -> Result<Self, CatalogError> {
        let mut manager = Self::new();
        for item in items {
            manager.register(item)?;
        }
        Ok(manager)
    }

    /// Add an item to the end of the catalog.
    ///
    /// A second item with an id already present is rejected and nothing changes.
    pub fn register(&mut self, item: TravelItem) -> Result<(), CatalogError> {
        if self.index.contains_key(item.id()) {
            return Err(CatalogError::DuplicateId(item.id().clone()));
        }

        debug!("Registered {} {} ({})", item.item_type(), item.id(), item.name());
        self.index.insert(item.id().clone(), self.catalog.len());
        self.catalog.push(item);
        Ok(())
    }

    /// Book one unit of an item, returning whether the booking was made
    pub fn book(&mut self, id: &str) -> bool {
        self.try_book(id).is_ok()
    }

    /// Cancel an active booking, returning whether anything was cancelled
    pub fn cancel(&mut self, id: &str) -> bool {
        self.try_cancel(id).is_ok()
    }

    /// Like `book`, but says why a booking was refused
    pub fn try_book(&mut self, id: &str) -> Result<(), BookingError> {
        let item = self.get_mut(id)?;

        if !item.book() {
            debug!("Refused booking for {}: no capacity left", id);
            return Err(BookingError::Unavailable(id.to_string()));
        }

        info!("Booked {} {}, {} left", item.item_type(), id, item.capacity());
        Ok(())
    }

    /// Like `cancel`, but says why a cancellation was refused
    pub fn try_cancel(&mut self, id: &str) -> Result<(), BookingError> {
        let item = self.get_mut(id)?;

        if !item.cancel() {
            debug!("Refused cancellation for {}: not booked", id);
            return Err(BookingError::NotBooked(id.to_string()));
        }

        info!("Cancelled booking for {} {}, {} left", item.item_type(), id, item.capacity());
        Ok(())
    }

    /// Every item, in registration order
    pub fn list_all(&self) -> Vec<&TravelItem> {
        self.catalog.iter().collect()
    }

    /// Items with at least one unit left
    pub fn list_available(&self) -> Vec<&TravelItem> {
        self.catalog.iter().filter(|item| item.is_available()).collect()
    }

    /// Items holding at least one booking, each listed once, in registration order
    pub fn list_bookings(&self) -> Vec<&TravelItem> {
        self.catalog.iter().filter(|item| item.is_booked()).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&TravelItem> {
        self.index.get(id).map(|&position| &self.catalog[position])
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut TravelItem, BookingError> {
        match self.index.get(id) {
            Some(&position) => Ok(&mut self.catalog[position]),
            None => {
                debug!("No item registered under {}", id);
                Err(BookingError::NotFound(id.to_string()))
            }
        }
    }
}

/// Reasons a book or cancel command was refused. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item not available: {0}")]
    Unavailable(String),

    #[error("Item not booked: {0}")]
    NotBooked(String),
}
