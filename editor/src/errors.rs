use snafu::Snafu;
use validator::ValidationErrors;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum DraftError {
    #[snafu(display("Time of day '{}' is not in HH:MM format: {}", value, source))]
    InvalidTimeOfDay {
        value: String,
        source: chrono::ParseError,
    },
    #[snafu(display(
        "Event draft failed validation: {}",
        crate::validators::validation_messages(errors)
    ))]
    Validation { errors: ValidationErrors },
    #[snafu(display("Event draft has no persisted identifier"))]
    MissingEventId,
    #[snafu(display("Ticket type dialog must be saved or cancelled before submitting"))]
    DialogOpen,
}
