use crate::endpoints::*;
use std::rc::Rc;

/// Entry point for the backend REST API. Endpoint groups share one inner
/// client; the whole structure lives on the single UI thread.
pub struct TicketingClient {
    pub events: EventsEndpoint,
    pub published_events: PublishedEventsEndpoint,
    pub tickets: TicketsEndpoint,
    pub validations: TicketValidationsEndpoint,
    pub inner_client: Rc<ClientInner>,
}

pub struct ClientInner {
    pub base_url: String,
}

impl TicketingClient {
    /// base_url is the site origin; the API lives under `api/v1/` beneath it.
    pub fn new(base_url: String) -> TicketingClient {
        let inner = Rc::new(ClientInner {
            base_url: if base_url.ends_with('/') {
                base_url
            } else {
                format!("{}/", base_url)
            },
        });

        TicketingClient {
            events: EventsEndpoint {
                client: inner.clone(),
            },
            published_events: PublishedEventsEndpoint {
                client: inner.clone(),
            },
            tickets: TicketsEndpoint {
                client: inner.clone(),
            },
            validations: TicketValidationsEndpoint {
                client: inner.clone(),
            },
            inner_client: inner,
        }
    }
}
