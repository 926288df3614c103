//! PredictHQ events search client implementation using reqwest.

use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

use crate::domain::{ApiCredentials, AppError, EventQuery, EventRecord, EventsApiConfig};
use crate::ports::EventsClient;

const SERVICE: &str = "events";

/// HTTP client for the PredictHQ events API.
#[derive(Clone)]
pub struct HttpEventsClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpEventsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEventsClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpEventsClient {
    pub fn new(credentials: ApiCredentials, config: &EventsApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token: credentials.api_key, api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiEvent>,
}

#[derive(Debug, Deserialize)]
struct ApiEvent {
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    phq_attendance: Option<u64>,
    end: String,
}

impl ApiEvent {
    fn into_record(self) -> Result<EventRecord, AppError> {
        let end_date = parse_event_date(&self.end).ok_or_else(|| {
            AppError::upstream(
                SERVICE,
                format!("Event '{}' has an unreadable end date '{}'", self.title, self.end),
            )
        })?;

        Ok(EventRecord {
            title: self.title,
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            attendance_score: self.phq_attendance.unwrap_or(0),
            end_date,
        })
    }
}

/// Accept RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
fn parse_event_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

impl EventsClient for HttpEventsClient {
    fn search_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>, AppError> {
        tracing::info!("Getting events from PredictHQ for {}", query.query);

        let response = self
            .client
            .get(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json")
            .query(&[
                ("q", query.query.clone()),
                ("active.gte", query.start_date.format("%Y-%m-%d").to_string()),
                ("active.lte", query.end_date.format("%Y-%m-%d").to_string()),
                ("limit", query.limit.to_string()),
            ])
            .send()
            .map_err(|e| {
                tracing::warn!("Events search request failed: {}", e);
                AppError::upstream(SERVICE, format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::upstream(
                SERVICE,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::upstream(SERVICE, format!("Failed to parse response: {}", e)))?;

        tracing::debug!(count = api_response.results.len(), "Received events");
        api_response.results.into_iter().map(ApiEvent::into_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client(server: &mockito::Server) -> HttpEventsClient {
        let config = EventsApiConfig {
            api_url: Url::parse(&format!("{}/v1/events/", server.url())).unwrap(),
            timeout_secs: 1,
            ..Default::default()
        };
        HttpEventsClient::new(ApiCredentials { api_key: "phq-token".to_string() }, &config)
            .unwrap()
    }

    fn query() -> EventQuery {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        EventQuery::for_city("Austin", today, 365, 500).unwrap()
    }

    #[test]
    fn search_events_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/events/")
            .match_header("authorization", "Bearer phq-token")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Austin".into()),
                Matcher::UrlEncoded("active.gte".into(), "2026-10-19".into()),
                Matcher::UrlEncoded("active.lte".into(), "2027-10-19".into()),
                Matcher::UrlEncoded("limit".into(), "500".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"count": 2, "results": [
                    {"title": "ACL Fest", "category": "festivals", "description": "Music",
                     "phq_attendance": 75000, "end": "2026-10-12T23:00:00Z"},
                    {"title": "Farmers Market", "category": "community",
                     "phq_attendance": null, "end": "2026-11-01"}
                ]}"#,
            )
            .create();

        let events = client(&server).search_events(&query()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "ACL Fest");
        assert_eq!(events[0].attendance_score, 75000);
        assert_eq!(events[0].end_date, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(events[1].attendance_score, 0);
        assert_eq!(events[1].description, "");
        mock.assert();
    }

    #[test]
    fn null_text_fields_become_empty() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/v1/events/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"results": [{"title": "Pop-up", "category": null, "description": null,
                    "phq_attendance": 40, "end": "2026-10-30"}]}"#,
            )
            .create();

        let events = client(&server).search_events(&query()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, "");
        assert_eq!(events[0].description, "");
        assert_eq!(events[0].attendance_score, 40);
    }

    #[test]
    fn unreadable_end_date_is_upstream_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/v1/events/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"title": "Odd", "end": "someday"}]}"#)
            .create();

        let err = client(&server).search_events(&query()).unwrap_err();
        assert!(matches!(err, AppError::Upstream { ref details, .. } if details.contains("someday")));
    }

    #[test]
    fn unauthorized_is_upstream_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/v1/events/")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("invalid token")
            .create();

        let err = client(&server).search_events(&query()).unwrap_err();
        assert!(matches!(err, AppError::Upstream { ref service, ref details }
            if service == "events" && details.contains("401")));
    }

    #[test]
    fn parse_event_date_formats() {
        assert_eq!(
            parse_event_date("2026-10-12T23:00:00+02:00"),
            NaiveDate::from_ymd_opt(2026, 10, 12)
        );
        assert_eq!(parse_event_date("2026-01-02"), NaiveDate::from_ymd_opt(2026, 1, 2));
        assert_eq!(parse_event_date("soon"), None);
    }
}
