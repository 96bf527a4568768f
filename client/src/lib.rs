#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
// Unused results is more often than not an error
#![deny(unused_must_use)]

pub mod auth;
pub mod domain;
mod endpoints;
mod error;
mod paging;
mod response;
mod ticketing_client;
mod util;

pub use crate::endpoints::{
    EventsEndpoint, PublishedEventsEndpoint, TicketValidationsEndpoint, TicketsEndpoint,
};
pub use crate::error::{ApiError, UNKNOWN_ERROR_MESSAGE};
pub use crate::paging::Page;
pub use crate::response::ErrorResponse;
pub use crate::ticketing_client::{ClientInner, TicketingClient};
