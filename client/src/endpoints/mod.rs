mod events;
mod published_events;
mod ticket_validations;
mod tickets;

pub use self::events::EventsEndpoint;
pub use self::published_events::PublishedEventsEndpoint;
pub use self::ticket_validations::TicketValidationsEndpoint;
pub use self::tickets::TicketsEndpoint;
