use std::sync::Arc;

use parking_lot::Mutex;

use crate::display::DisplayRow;
use crate::inventory::{BookingError, InventoryManager};
use crate::product::{CatalogError, TravelItem};

/// Cloneable handle for using one inventory from several threads.
///
/// Every command runs under a single lock, so the availability check and the
/// capacity update of a booking cannot interleave with another caller.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<Mutex<InventoryManager>>,
}

impl SharedInventory {
    pub fn new(manager: InventoryManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn register(&self, item: TravelItem) -> Result<(), CatalogError> {
        self.inner.lock().register(item)
    }

    pub fn book(&self, id: &str) -> bool {
        self.inner.lock().book(id)
    }

    pub fn cancel(&self, id: &str) -> bool {
        self.inner.lock().cancel(id)
    }

    pub fn try_book(&self, id: &str) -> Result<(), BookingError> {
        self.inner.lock().try_book(id)
    }

    pub fn try_cancel(&self, id: &str) -> Result<(), BookingError> {
        self.inner.lock().try_cancel(id)
    }

    pub fn find_by_id(&self, id: &str) -> Option<TravelItem> {
        self.inner.lock().find_by_id(id).cloned()
    }

    pub fn list_all(&self) -> Vec<DisplayRow> {
        Self::rows(self.inner.lock().list_all())
    }

    pub fn list_available(&self) -> Vec<DisplayRow> {
        Self::rows(self.inner.lock().list_available())
    }

    pub fn list_bookings(&self) -> Vec<DisplayRow> {
        Self::rows(self.inner.lock().list_bookings())
    }

    /// Run `f` with exclusive access to the manager
    pub fn with<R>(&self, f: impl FnOnce(&mut InventoryManager) -> R) -> R {
        f(&mut self.inner.lock())
    }

    fn rows(items: Vec<&TravelItem>) -> Vec<DisplayRow> {
        items.into_iter().map(TravelItem::describe).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Money;
    use crate::product::FlightDetails;
    use std::thread;

    fn flight(id: &str, seats: u32) -> TravelItem {
        TravelItem::flight(
            id,
            "AI-101",
            Money::from_decimal(200.0).unwrap(),
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

    #[test]
    fn test_concurrent_bookings_take_one_unit_each() {
        let ids: Vec<String> = (0..8).map(|n| format!("F{:03}", n)).collect();
        let manager = InventoryManager::with_items(ids.iter().map(|id| flight(id, 1))).unwrap();
        let shared = SharedInventory::new(manager);

        // Every thread races for every item; each item has exactly one seat
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let ids = ids.clone();
                thread::spawn(move || ids.iter().filter(|id| shared.book(id)).count())
            })
            .collect();

        let booked: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(booked, 8);
        assert_eq!(shared.list_bookings().len(), 8);
        assert!(shared.list_available().is_empty());
    }

    #[test]
    fn test_snapshots_are_owned() {
        let shared = SharedInventory::default();
        shared.register(flight("F001", 5)).unwrap();

        let before = shared.find_by_id("F001").unwrap();
        assert!(shared.book("F001"));
        let after = shared.find_by_id("F001").unwrap();

        assert_eq!(before.capacity(), 5);
        assert_eq!(after.capacity(), 4);
        assert_eq!(shared.list_all()[0].capacity, "4");
        assert!(shared.cancel("F001"));
        assert_eq!(shared.with(|manager| manager.list_bookings().len()), 0);
    }
}
