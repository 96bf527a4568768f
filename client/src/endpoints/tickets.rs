use crate::domain::{TicketDetails, TicketSummary};
use crate::error::*;
use crate::paging::Page;
use crate::ticketing_client::ClientInner;
use crate::util;
use log::Level::Debug;
use logging::jlog;
use snafu::ResultExt;
use std::rc::Rc;
use uuid::Uuid;

// "My tickets" renders a grid of eight QR cards per page.
const PAGE_SIZE: u32 = 8;

pub struct TicketsEndpoint {
    pub client: Rc<ClientInner>,
}

impl TicketsEndpoint {
    /// Payment is handled by the backend; purchasing is a bare POST against
    /// the chosen ticket type.
    pub async fn purchase(
        &self,
        access_token: &str,
        event_id: Uuid,
        ticket_type_id: Uuid,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}api/v1/events/{}/ticket-types/{}/tickets",
            self.client.base_url, event_id, ticket_type_id
        );
        jlog!(Debug, "Purchasing ticket", {
            "event_id": event_id,
            "ticket_type_id": ticket_type_id
        });
        let response = reqwest::Client::new()
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        util::ok_or_error(response).await
    }

    pub async fn list(
        &self,
        access_token: &str,
        page: u32,
    ) -> Result<Page<TicketSummary>, ApiError> {
        let url = format!(
            "{}api/v1/tickets?page={}&size={}",
            self.client.base_url, page, PAGE_SIZE
        );
        let response = reqwest::Client::new()
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }

    pub async fn get(&self, access_token: &str, id: Uuid) -> Result<TicketDetails, ApiError> {
        let url = format!("{}api/v1/tickets/{}", self.client.base_url, id);
        let response = reqwest::Client::new()
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }

    /// Raw PNG bytes for the ticket's QR code; generation happens server
    /// side.
    pub async fn qr_code(&self, access_token: &str, id: Uuid) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}api/v1/tickets/{}/qr-codes", self.client.base_url, id);
        let response = reqwest::Client::new()
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.context(InvalidResponse { status })?;
            return Err(util::error_from_body(status, &body));
        }
        let bytes = response.bytes().await.context(InvalidResponse { status })?;
        Ok(bytes.to_vec())
    }
}
