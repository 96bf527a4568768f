mod events;
mod tickets;
mod validation;

pub use self::events::*;
pub use self::tickets::*;
pub use self::validation::*;
