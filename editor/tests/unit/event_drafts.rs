use attendly_client::domain::{EventDetails, EventStatus, TicketTypeDetails};
use attendly_editor::models::{
    BoundDraft, DateTimeRange, EventDraft, FieldUpdate, RangeUpdate, TicketTypeFields,
};
use attendly_editor::DraftError;
use chrono::prelude::*;
use uuid::Uuid;

fn ticket_type_details(name: &str, price: f64) -> TicketTypeDetails {
    TicketTypeDetails {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price,
        description: format!("{} ticket", name),
        total_available: Some(250),
    }
}

fn event_details() -> EventDetails {
    EventDetails {
        id: Uuid::new_v4(),
        name: "Summer Festival".to_string(),
        start: Some(Utc.ymd(2024, 6, 1).and_hms(18, 30, 0)),
        end: Some(Utc.ymd(2024, 6, 1).and_hms(23, 0, 0)),
        venue: "Riverside Park, Gate 3".to_string(),
        sales_start: Some(Utc.ymd(2024, 5, 1).and_hms(9, 0, 0)),
        sales_end: Some(Utc.ymd(2024, 5, 31).and_hms(17, 0, 0)),
        status: EventStatus::Published,
        ticket_types: vec![
            ticket_type_details("General Admission", 25.0),
            ticket_type_details("VIP", 100.0),
        ],
        created_at: Utc.ymd(2024, 4, 1).and_hms(8, 0, 0),
        updated_at: Utc.ymd(2024, 4, 2).and_hms(8, 0, 0),
    }
}

fn named_draft(name: &str) -> EventDraft {
    EventDraft::new().apply(FieldUpdate::Name(name.to_string()))
}

#[test]
fn hydrate_splits_instants_into_date_and_time() {
    let details = event_details();
    let draft = EventDraft::hydrate(&details);

    assert_eq!(draft.id, Some(details.id));
    assert_eq!(draft.name, "Summer Festival");
    assert_eq!(draft.status, EventStatus::Published);
    assert_eq!(draft.created_at, Some(details.created_at));
    assert_eq!(draft.updated_at, Some(details.updated_at));

    assert!(draft.schedule.is_enabled());
    match &draft.schedule {
        DateTimeRange::Enabled { start, end } => {
            assert_eq!(start.date, Some(NaiveDate::from_ymd(2024, 6, 1)));
            assert_eq!(start.time.as_deref(), Some("18:30"));
            assert_eq!(end.date, Some(NaiveDate::from_ymd(2024, 6, 1)));
            assert_eq!(end.time.as_deref(), Some("23:00"));
        }
        DateTimeRange::Disabled => panic!("Expected enabled schedule"),
    }
}

#[test]
fn hydrate_enables_range_with_a_single_bound() {
    let mut details = event_details();
    details.start = None;
    details.sales_start = None;
    details.sales_end = None;

    let draft = EventDraft::hydrate(&details);

    match &draft.schedule {
        DateTimeRange::Enabled { start, end } => {
            assert_eq!(*start, BoundDraft::default());
            assert!(end.date.is_some());
        }
        DateTimeRange::Disabled => panic!("Expected enabled schedule"),
    }
    assert_eq!(draft.sales_window, DateTimeRange::Disabled);
}

#[test]
fn hydrate_then_serialize_is_identity() {
    let details = event_details();
    let draft = EventDraft::hydrate(&details);
    let request = draft.to_update_request().unwrap();

    assert_eq!(request.id, details.id);
    assert_eq!(request.name, details.name);
    assert_eq!(request.venue, details.venue);
    assert_eq!(request.status, details.status);
    assert_eq!(request.start, details.start);
    assert_eq!(request.end, details.end);
    assert_eq!(request.sales_start, details.sales_start);
    assert_eq!(request.sales_end, details.sales_end);

    let ids: Vec<_> = request.ticket_types.iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        details
            .ticket_types
            .iter()
            .map(|t| Some(t.id))
            .collect::<Vec<_>>()
    );
}

#[test]
fn disabling_a_range_suppresses_its_bounds() {
    let draft = EventDraft::hydrate(&event_details());
    let draft = draft.apply(FieldUpdate::Schedule(RangeUpdate::Disable));

    let request = draft.to_update_request().unwrap();
    assert_eq!(request.start, None);
    assert_eq!(request.end, None);
    // The untouched sales window still serializes.
    assert!(request.sales_start.is_some());
}

#[test]
fn reenabling_a_range_starts_from_empty_bounds() {
    let draft = EventDraft::hydrate(&event_details());
    let draft = draft
        .apply(FieldUpdate::Schedule(RangeUpdate::Disable))
        .apply(FieldUpdate::Schedule(RangeUpdate::Enable));

    let request = draft.to_update_request().unwrap();
    assert_eq!(request.start, None);
    assert_eq!(request.end, None);
}

#[test]
fn partial_bound_degrades_to_absent() {
    let draft = named_draft("Summer Festival")
        .apply(FieldUpdate::Schedule(RangeUpdate::Enable))
        .apply(FieldUpdate::Schedule(RangeUpdate::StartDate(
            NaiveDate::from_ymd(2024, 6, 1),
        )))
        .apply(FieldUpdate::Schedule(RangeUpdate::EndDate(
            NaiveDate::from_ymd(2024, 6, 2),
        )))
        .apply(FieldUpdate::Schedule(RangeUpdate::EndTime(
            "01:00".to_string(),
        )));

    let request = draft.to_create_request().unwrap();
    assert_eq!(request.start, None);
    assert_eq!(request.end, Some(Utc.ymd(2024, 6, 2).and_hms(1, 0, 0)));
}

#[test]
fn range_updates_are_ignored_while_disabled() {
    let draft = named_draft("Summer Festival").apply(FieldUpdate::Schedule(
        RangeUpdate::StartDate(NaiveDate::from_ymd(2024, 6, 1)),
    ));
    assert_eq!(draft.schedule, DateTimeRange::Disabled);
}

#[test]
fn apply_is_copy_on_write() {
    let original = named_draft("Before");
    let next = original.apply(FieldUpdate::Name("After".to_string()));
    assert_eq!(original.name, "Before");
    assert_eq!(next.name, "After");
}

#[test]
fn create_request_carries_scalar_fields_and_ticket_types() {
    let draft = named_draft("Summer Festival")
        .apply(FieldUpdate::Venue("Riverside Park".to_string()))
        .apply(FieldUpdate::Status(EventStatus::Published))
        .apply(FieldUpdate::AddTicketType(TicketTypeFields {
            name: "General Admission".to_string(),
            price: 25.0,
            description: "Standing".to_string(),
            total_available: None,
        }));

    let request = draft.to_create_request().unwrap();
    assert_eq!(request.name, "Summer Festival");
    assert_eq!(request.venue, "Riverside Park");
    assert_eq!(request.status, EventStatus::Published);
    assert_eq!(request.ticket_types.len(), 1);
    assert_eq!(request.ticket_types[0].name, "General Admission");
    assert_eq!(request.ticket_types[0].total_available, None);
}

#[test]
fn create_request_rejects_unnamed_event() {
    match EventDraft::new().to_create_request() {
        Err(DraftError::Validation { .. }) => {}
        other => panic!("Expected validation failure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn create_request_rejects_negative_price() {
    let draft = named_draft("Summer Festival").apply(FieldUpdate::AddTicketType(
        TicketTypeFields {
            name: "General Admission".to_string(),
            price: -1.0,
            description: String::new(),
            total_available: None,
        },
    ));
    assert!(draft.to_create_request().is_err());
}

#[test]
fn create_request_rejects_nan_price() {
    let draft = named_draft("Summer Festival").apply(FieldUpdate::AddTicketType(
        TicketTypeFields {
            name: "General Admission".to_string(),
            price: std::f64::NAN,
            description: String::new(),
            total_available: None,
        },
    ));
    assert!(draft.to_create_request().is_err());
}

#[test]
fn malformed_time_of_day_is_rejected_not_serialized() {
    let draft = named_draft("Summer Festival")
        .apply(FieldUpdate::Schedule(RangeUpdate::Enable))
        .apply(FieldUpdate::Schedule(RangeUpdate::StartDate(
            NaiveDate::from_ymd(2024, 6, 1),
        )))
        .apply(FieldUpdate::Schedule(RangeUpdate::StartTime(
            "7pm".to_string(),
        )));

    match draft.to_create_request() {
        Err(DraftError::InvalidTimeOfDay { value, .. }) => assert_eq!(value, "7pm"),
        other => panic!("Expected InvalidTimeOfDay, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn update_request_requires_a_persisted_id() {
    match named_draft("Summer Festival").to_update_request() {
        Err(DraftError::MissingEventId) => {}
        other => panic!("Expected MissingEventId, got {:?}", other.map(|_| ())),
    }
}
