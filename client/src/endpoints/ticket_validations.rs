use crate::domain::{TicketValidationRequest, TicketValidationResponse};
use crate::error::*;
use crate::ticketing_client::ClientInner;
use crate::util;
use log::Level::Info;
use logging::jlog;
use snafu::ResultExt;
use std::rc::Rc;

pub struct TicketValidationsEndpoint {
    pub client: Rc<ClientInner>,
}

impl TicketValidationsEndpoint {
    pub async fn validate(
        &self,
        access_token: &str,
        request: &TicketValidationRequest,
    ) -> Result<TicketValidationResponse, ApiError> {
        let url = format!("{}api/v1/ticket-validations", self.client.base_url);
        jlog!(Info, "Validating ticket", { "request": request });
        let response = reqwest::Client::new()
            .post(&url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .context(HttpError { url })?;
        util::json_or_error(response).await
    }
}
