pub mod event_drafts;
pub mod ticket_type_drafts;

pub use self::event_drafts::*;
pub use self::ticket_type_drafts::*;
