use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Purchased,
    Cancelled,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummaryTicketType {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: Uuid,
    pub status: TicketStatus,
    pub ticket_type: TicketSummaryTicketType,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetails {
    pub id: Uuid,
    pub status: TicketStatus,
    pub price: f64,
    pub description: String,
    pub event_name: String,
    pub event_venue: String,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
}
