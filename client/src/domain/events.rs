use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub fn parse(s: &str) -> Result<EventStatus, &'static str> {
        match s {
            "DRAFT" => Ok(EventStatus::Draft),
            "PUBLISHED" => Ok(EventStatus::Published),
            "CANCELLED" => Ok(EventStatus::Cancelled),
            "COMPLETED" => Ok(EventStatus::Completed),
            _ => Err("Could not parse event status. Unexpected value occurred"),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            EventStatus::Draft => write!(f, "DRAFT"),
            EventStatus::Published => write!(f, "PUBLISHED"),
            EventStatus::Cancelled => write!(f, "CANCELLED"),
            EventStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketTypeRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<u32>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_end: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub ticket_types: Vec<CreateTicketTypeRequest>,
}

/// An absent `id` tells the backend to create a new nested record; a present
/// one updates that record. Records left out of the array are deleted.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<u32>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_end: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub ticket_types: Vec<UpdateTicketTypeRequest>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeDetails {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub total_available: Option<u32>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub id: Uuid,
    pub name: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    pub sales_start: Option<DateTime<Utc>>,
    pub sales_end: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub ticket_types: Vec<TicketTypeDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeSummary {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub total_available: Option<u32>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    pub sales_start: Option<DateTime<Utc>>,
    pub sales_end: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub ticket_types: Vec<TicketTypeSummary>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublishedEventSummary {
    pub id: Uuid,
    pub name: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublishedEventTicketTypeDetails {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublishedEventDetails {
    pub id: Uuid,
    pub name: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    pub ticket_types: Vec<PublishedEventTicketTypeDetails>,
}

#[test]
fn display() {
    assert_eq!(EventStatus::Draft.to_string(), "DRAFT");
    assert_eq!(EventStatus::Published.to_string(), "PUBLISHED");
    assert_eq!(EventStatus::Cancelled.to_string(), "CANCELLED");
    assert_eq!(EventStatus::Completed.to_string(), "COMPLETED");
}

#[test]
fn parse() {
    assert_eq!(EventStatus::Draft, EventStatus::parse("DRAFT").unwrap());
    assert_eq!(
        EventStatus::Published,
        EventStatus::parse("PUBLISHED").unwrap()
    );
    assert_eq!(
        EventStatus::Cancelled,
        EventStatus::parse("CANCELLED").unwrap()
    );
    assert_eq!(
        EventStatus::Completed,
        EventStatus::parse("COMPLETED").unwrap()
    );
    assert!(EventStatus::parse("Not status").is_err());
}
