use attendly_client::domain::{EventDetails, EventStatus};
use attendly_client::ApiError;
use attendly_editor::models::{FieldUpdate, TicketTypeFields};
use attendly_editor::session::{
    EditorMode, EditorSession, EditorState, SubmissionRequest, TicketTypeDialog,
};
use attendly_editor::DraftError;
use chrono::prelude::*;
use uuid::Uuid;

fn event_details(id: Uuid) -> EventDetails {
    EventDetails {
        id,
        name: "Summer Festival".to_string(),
        start: None,
        end: None,
        venue: "Riverside Park".to_string(),
        sales_start: None,
        sales_end: None,
        status: EventStatus::Draft,
        ticket_types: vec![],
        created_at: Utc.ymd(2024, 4, 1).and_hms(8, 0, 0),
        updated_at: Utc.ymd(2024, 4, 1).and_hms(8, 0, 0),
    }
}

fn fields(name: &str, price: f64) -> TicketTypeFields {
    TicketTypeFields {
        name: name.to_string(),
        price,
        description: String::new(),
        total_available: None,
    }
}

#[test]
fn create_session_starts_editing() {
    let session = EditorSession::create();
    assert_eq!(session.mode(), EditorMode::Create);
    assert_eq!(session.state(), EditorState::Editing);
    assert_eq!(session.draft().name, "");
    assert!(session.error().is_none());
}

#[test]
fn edit_session_loads_then_hydrates() {
    let id = Uuid::new_v4();
    let mut session = EditorSession::edit(id);
    assert_eq!(session.state(), EditorState::Loading);

    session.hydrated(&event_details(id));
    assert_eq!(session.state(), EditorState::Editing);
    assert_eq!(session.draft().name, "Summer Festival");
}

#[test]
fn hydration_for_another_event_is_discarded() {
    let mut session = EditorSession::edit(Uuid::new_v4());
    session.hydrated(&event_details(Uuid::new_v4()));

    assert_eq!(session.state(), EditorState::Loading);
    assert_eq!(session.draft().name, "");
}

#[test]
fn late_hydration_after_leaving_loading_is_discarded() {
    let mut session = EditorSession::create();
    session.apply(FieldUpdate::Name("My Event".to_string()));

    session.hydrated(&event_details(Uuid::new_v4()));
    assert_eq!(session.draft().name, "My Event");
}

#[test]
fn load_failure_surfaces_message_and_unblocks_the_form() {
    let mut session = EditorSession::edit(Uuid::new_v4());
    session.load_failed(&ApiError::ResponseError {
        message: "Event not found".to_string(),
    });

    assert_eq!(session.state(), EditorState::Editing);
    assert_eq!(session.error(), Some("Event not found"));
}

#[test]
fn apply_is_ignored_while_loading() {
    let mut session = EditorSession::edit(Uuid::new_v4());
    session.apply(FieldUpdate::Name("Too early".to_string()));
    assert_eq!(session.draft().name, "");
}

#[test]
fn dialog_add_flow_appends_a_provisional_row() {
    let mut session = EditorSession::create();
    session.open_add_dialog();
    session.update_dialog(fields("General Admission", 25.0));
    session.save_dialog();

    assert_eq!(session.dialog(), &TicketTypeDialog::Closed);
    let ticket_types = &session.draft().ticket_types;
    assert_eq!(ticket_types.len(), 1);
    assert_eq!(ticket_types[0].name, "General Admission");
    assert!(ticket_types[0].id.is_provisional());
}

#[test]
fn dialog_edit_flow_replaces_the_row_in_place() {
    let mut session = EditorSession::create();
    session.open_add_dialog();
    session.update_dialog(fields("General Admission", 25.0));
    session.save_dialog();
    let id = session.draft().ticket_types[0].id;

    session.open_edit_dialog(id);
    session.update_dialog(fields("General Admission", 30.0));
    session.save_dialog();

    let ticket_types = &session.draft().ticket_types;
    assert_eq!(ticket_types.len(), 1);
    assert_eq!(ticket_types[0].id, id);
    assert_eq!(ticket_types[0].price, 30.0);
}

#[test]
fn cancel_dialog_discards_the_form() {
    let mut session = EditorSession::create();
    session.open_add_dialog();
    session.update_dialog(fields("General Admission", 25.0));
    session.cancel_dialog();

    assert_eq!(session.dialog(), &TicketTypeDialog::Closed);
    assert!(session.draft().ticket_types.is_empty());
}

#[test]
fn submission_is_blocked_while_the_dialog_is_open() {
    let mut session = EditorSession::create();
    session.apply(FieldUpdate::Name("Summer Festival".to_string()));
    session.open_add_dialog();

    match session.prepare_submission() {
        Err(DraftError::DialogOpen) => {}
        other => panic!("Expected DialogOpen, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn prepare_submission_dispatches_on_mode() {
    let mut session = EditorSession::create();
    session.apply(FieldUpdate::Name("Summer Festival".to_string()));
    match session.prepare_submission().unwrap() {
        SubmissionRequest::Create(request) => assert_eq!(request.name, "Summer Festival"),
        SubmissionRequest::Update(_) => panic!("Expected a create request"),
    }

    let id = Uuid::new_v4();
    let mut session = EditorSession::edit(id);
    session.hydrated(&event_details(id));
    match session.prepare_submission().unwrap() {
        SubmissionRequest::Update(request) => assert_eq!(request.id, id),
        SubmissionRequest::Create(_) => panic!("Expected an update request"),
    }
}

#[test]
fn successful_submission_completes_the_session() {
    let mut session = EditorSession::create();
    session.apply(FieldUpdate::Name("Summer Festival".to_string()));

    session.resolve_submission(Ok(()));
    assert_eq!(session.state(), EditorState::Completed);
    assert!(session.error().is_none());
}

#[test]
fn failed_submission_surfaces_the_message_and_keeps_the_draft() {
    let mut session = EditorSession::create();
    session.apply(FieldUpdate::Name("Summer Festival".to_string()));
    let draft_before = session.draft().clone();

    session.resolve_submission(Err(ApiError::ResponseError {
        message: "Sales end must be after sales start".to_string(),
    }));

    assert_eq!(session.state(), EditorState::Editing);
    assert_eq!(session.error(), Some("Sales end must be after sales start"));
    assert_eq!(session.draft(), &draft_before);
}
