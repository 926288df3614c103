use std::sync::{Arc, Mutex};

use crate::domain::{AppError, EventQuery, EventRecord};
use crate::ports::EventsClient;

#[derive(Clone)]
pub struct FakeEventsClient {
    events: Vec<EventRecord>,
    failure: Option<String>,
    pub queries: Arc<Mutex<Vec<EventQuery>>>,
}

impl FakeEventsClient {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events, failure: None, queries: Arc::new(Mutex::new(vec![])) }
    }

    pub fn failing(details: impl Into<String>) -> Self {
        Self { events: vec![], failure: Some(details.into()), queries: Arc::new(Mutex::new(vec![])) }
    }

    pub fn queries(&self) -> Vec<EventQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl EventsClient for FakeEventsClient {
    fn search_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.failure {
            Some(details) => Err(AppError::upstream("events", details.clone())),
            None => Ok(self.events.clone()),
        }
    }
}
