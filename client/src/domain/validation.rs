use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketValidationMethod {
    QrScan,
    Manual,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketValidationStatus {
    Valid,
    Invalid,
    Expired,
}

/// The id is either the decoded QR payload or a manually keyed ticket id.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketValidationRequest {
    pub id: Uuid,
    pub method: TicketValidationMethod,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketValidationResponse {
    pub ticket_id: Uuid,
    pub status: TicketValidationStatus,
}
