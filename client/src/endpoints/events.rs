use crate::domain::{CreateEventRequest, EventDetails, EventSummary, UpdateEventRequest};
use crate::error::*;
use crate::paging::Page;
use crate::ticketing_client::ClientInner;
use crate::util;
use log::Level::Debug;
use logging::jlog;
use snafu::ResultExt;
use std::rc::Rc;
use uuid::Uuid;

// The organizer dashboard lists events two to a page.
const PAGE_SIZE: u32 = 2;

pub struct EventsEndpoint {
    pub client: Rc<ClientInner>,
}

impl EventsEndpoint {
    pub async fn create(
        &self,
        access_token: &str,
        request: &CreateEventRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}api/v1/events", self.client.base_url);
        jlog!(Debug, "Creating event", { "request": request });
        let response = reqwest::Client::new()
            .post(&url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .context(HttpError { url })?;
        util::ok_or_error(response).await
    }

    pub async fn update(
        &self,
        access_token: &str,
        id: Uuid,
        request: &UpdateEventRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}api/v1/events/{}", self.client.base_url, id);
        jlog!(Debug, "Updating event", { "event_id": id, "request": request });
        let response = reqwest::Client::new()
            .put(&url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .context(HttpError { url })?;
        util::ok_or_error(response).await
    }

    pub async fn get(&self, access_token: &str, id: Uuid) -> Result<EventDetails, ApiError> {
        let url = format!("{}api/v1/events/{}", self.client.base_url, id);
        let response = reqwest::Client::new()
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }

    pub async fn list(
        &self,
        access_token: &str,
        page: u32,
    ) -> Result<Page<EventSummary>, ApiError> {
        let url = format!(
            "{}api/v1/events?page={}&size={}",
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

    pub async fn delete(&self, access_token: &str, id: Uuid) -> Result<(), ApiError> {
        let url = format!("{}api/v1/events/{}", self.client.base_url, id);
        jlog!(Debug, "Deleting event", { "event_id": id });
        let response = reqwest::Client::new()
            .delete(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context(HttpError { url })?;
        util::ok_or_error(response).await
    }
}
