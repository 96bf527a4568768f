use crate::domain::{PublishedEventDetails, PublishedEventSummary};
use crate::error::*;
use crate::paging::Page;
use crate::ticketing_client::ClientInner;
use crate::util;
use snafu::ResultExt;
use std::rc::Rc;
use url::form_urlencoded;
use uuid::Uuid;

// Public browse shows four event cards per page.
const PAGE_SIZE: u32 = 4;

/// Public reads; no bearer token required.
pub struct PublishedEventsEndpoint {
    pub client: Rc<ClientInner>,
}

impl PublishedEventsEndpoint {
    pub async fn list(&self, page: u32) -> Result<Page<PublishedEventSummary>, ApiError> {
        let url = format!(
            "{}api/v1/published-events?page={}&size={}",
            self.client.base_url, page, PAGE_SIZE
        );
        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }

    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<PublishedEventSummary>, ApiError> {
        let parameters = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .append_pair("page", &page.to_string())
            .append_pair("size", &PAGE_SIZE.to_string())
            .finish();
        let url = format!(
            "{}api/v1/published-events?{}",
            self.client.base_url, parameters
        );
        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }

    pub async fn get(&self, id: Uuid) -> Result<PublishedEventDetails, ApiError> {
        let url = format!("{}api/v1/published-events/{}", self.client.base_url, id);
        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }
}
