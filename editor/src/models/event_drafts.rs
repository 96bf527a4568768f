use crate::errors::DraftError;
use crate::models::ticket_type_drafts::{self, TicketTypeDraft, TicketTypeFields, TicketTypeId};
use crate::temporal;
use crate::validators;
use attendly_client::domain::{CreateEventRequest, EventDetails, EventStatus, UpdateEventRequest};
use chrono::prelude::*;
use uuid::Uuid;

/// One end of a range as the user assembles it: calendar date and wall-clock
/// time are picked separately and only become an instant when both exist.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BoundDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BoundDraft {
    fn hydrate(instant: Option<DateTime<Utc>>) -> BoundDraft {
        match instant {
            Some(instant) => BoundDraft {
                date: Some(temporal::normalize_date(instant)),
                time: Some(temporal::extract_time_of_day(instant)),
            },
            None => BoundDraft::default(),
        }
    }

    /// A partial bound degrades to absent; only a complete date and time
    /// pair composes into an instant.
    fn instant(&self) -> Result<Option<DateTime<Utc>>, DraftError> {
        match (&self.date, &self.time) {
            (Some(date), Some(time)) => Ok(Some(temporal::combine(*date, time)?)),
            _ => Ok(None),
        }
    }
}

/// A disabled range carries no sub-fields at all, so "switched off but
/// still holding stale values" cannot be expressed. Re-enabling starts from
/// empty bounds.
#[derive(Clone, PartialEq, Debug)]
pub enum DateTimeRange {
    Disabled,
    Enabled { start: BoundDraft, end: BoundDraft },
}

impl DateTimeRange {
    pub fn hydrate(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> DateTimeRange {
        if start.is_none() && end.is_none() {
            DateTimeRange::Disabled
        } else {
            DateTimeRange::Enabled {
                start: BoundDraft::hydrate(start),
                end: BoundDraft::hydrate(end),
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            DateTimeRange::Enabled { .. } => true,
            DateTimeRange::Disabled => false,
        }
    }

    /// The instants this range contributes to an outgoing request. Disabled
    /// ranges contribute none.
    pub fn bounds(&self) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), DraftError> {
        match self {
            DateTimeRange::Disabled => Ok((None, None)),
            DateTimeRange::Enabled { start, end } => Ok((start.instant()?, end.instant()?)),
        }
    }

    fn apply(&self, update: RangeUpdate) -> DateTimeRange {
        match (self, update) {
            (DateTimeRange::Enabled { .. }, RangeUpdate::Enable) => self.clone(),
            (DateTimeRange::Disabled, RangeUpdate::Enable) => DateTimeRange::Enabled {
                start: BoundDraft::default(),
                end: BoundDraft::default(),
            },
            (_, RangeUpdate::Disable) => DateTimeRange::Disabled,
            // The range's controls are not rendered while disabled; a
            // sub-field update can only be a stray and is dropped.
            (DateTimeRange::Disabled, _) => DateTimeRange::Disabled,
            (DateTimeRange::Enabled { start, end }, update) => {
                let (mut start, mut end) = (start.clone(), end.clone());
                match update {
                    RangeUpdate::StartDate(date) => start.date = Some(date),
                    RangeUpdate::StartTime(time) => start.time = Some(time),
                    RangeUpdate::EndDate(date) => end.date = Some(date),
                    RangeUpdate::EndTime(time) => end.time = Some(time),
                    // Enable and Disable are consumed by the arms above.
                    RangeUpdate::Enable | RangeUpdate::Disable => {}
                }
                DateTimeRange::Enabled { start, end }
            }
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum RangeUpdate {
    Enable,
    Disable,
    StartDate(NaiveDate),
    StartTime(String),
    EndDate(NaiveDate),
    EndTime(String),
}

/// Every mutation the editor can make, applied through one transition
/// function.
#[derive(Clone, PartialEq, Debug)]
pub enum FieldUpdate {
    Name(String),
    Venue(String),
    Status(EventStatus),
    Schedule(RangeUpdate),
    SalesWindow(RangeUpdate),
    AddTicketType(TicketTypeFields),
    EditTicketType(TicketTypeId, TicketTypeFields),
    DeleteTicketType(TicketTypeId),
}

#[derive(Clone, PartialEq, Debug)]
pub struct EventDraft {
    /// Absent until the backend has created the event.
    pub id: Option<Uuid>,
    pub name: String,
    pub venue: String,
    pub status: EventStatus,
    pub schedule: DateTimeRange,
    pub sales_window: DateTimeRange,
    pub ticket_types: Vec<TicketTypeDraft>,
    // Audit fields; populated only when editing an existing event.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventDraft {
    pub fn new() -> EventDraft {
        EventDraft {
            id: None,
            name: String::new(),
            venue: String::new(),
            status: EventStatus::Draft,
            schedule: DateTimeRange::Disabled,
            sales_window: DateTimeRange::Disabled,
            ticket_types: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    /// The draft an editor starts from when editing an existing event.
    /// Stored instants split into a date and a time-of-day; a range is
    /// enabled when the stored event has at least one bound for it.
    pub fn hydrate(details: &EventDetails) -> EventDraft {
        EventDraft {
            id: Some(details.id),
            name: details.name.clone(),
            venue: details.venue.clone(),
            status: details.status,
            schedule: DateTimeRange::hydrate(details.start, details.end),
            sales_window: DateTimeRange::hydrate(details.sales_start, details.sales_end),
            ticket_types: details
                .ticket_types
                .iter()
                .map(TicketTypeDraft::hydrate)
                .collect(),
            created_at: Some(details.created_at),
            updated_at: Some(details.updated_at),
        }
    }

    /// Single transition function for every editor mutation. Each call
    /// produces a new draft; a render holding the previous value never
    /// observes a half-applied update.
    pub fn apply(&self, update: FieldUpdate) -> EventDraft {
        let mut next = self.clone();
        match update {
            FieldUpdate::Name(name) => next.name = name,
            FieldUpdate::Venue(venue) => next.venue = venue,
            FieldUpdate::Status(status) => next.status = status,
            FieldUpdate::Schedule(update) => next.schedule = self.schedule.apply(update),
            FieldUpdate::SalesWindow(update) => next.sales_window = self.sales_window.apply(update),
            FieldUpdate::AddTicketType(fields) => {
                next.ticket_types = ticket_type_drafts::add(&self.ticket_types, fields)
            }
            FieldUpdate::EditTicketType(id, fields) => {
                next.ticket_types = ticket_type_drafts::edit(&self.ticket_types, id, fields)
            }
            FieldUpdate::DeleteTicketType(id) => {
                next.ticket_types = ticket_type_drafts::delete(&self.ticket_types, id)
            }
        }
        next
    }

    pub fn to_create_request(&self) -> Result<CreateEventRequest, DraftError> {
        validators::validate_draft(self).map_err(|errors| DraftError::Validation { errors })?;
        let (start, end) = self.schedule.bounds()?;
        let (sales_start, sales_end) = self.sales_window.bounds()?;
        Ok(CreateEventRequest {
            name: self.name.clone(),
            start,
            end,
            venue: self.venue.clone(),
            sales_start,
            sales_end,
            status: self.status,
            ticket_types: ticket_type_drafts::to_create_request(&self.ticket_types),
        })
    }

    /// Identical to the create mapping except for the target identifier and
    /// ticket-type identity preservation.
    pub fn to_update_request(&self) -> Result<UpdateEventRequest, DraftError> {
        let id = self.id.ok_or(DraftError::MissingEventId)?;
        validators::validate_draft(self).map_err(|errors| DraftError::Validation { errors })?;
        let (start, end) = self.schedule.bounds()?;
        let (sales_start, sales_end) = self.sales_window.bounds()?;
        Ok(UpdateEventRequest {
            id,
            name: self.name.clone(),
            start,
            end,
            venue: self.venue.clone(),
            sales_start,
            sales_end,
            status: self.status,
            ticket_types: ticket_type_drafts::to_update_request(&self.ticket_types),
        })
    }
}

impl Default for EventDraft {
    fn default() -> EventDraft {
        EventDraft::new()
    }
}
