//! Events search API port definition.

use crate::domain::{AppError, EventQuery, EventRecord};

/// Port for location-based event searches.
pub trait EventsClient: Send + Sync {
    /// Return matching events in no particular order.
    fn search_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>, AppError>;
}
