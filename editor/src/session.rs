use crate::errors::DraftError;
use crate::models::{EventDraft, FieldUpdate, TicketTypeFields, TicketTypeId};
use attendly_client::domain::{CreateEventRequest, EventDetails, UpdateEventRequest};
use attendly_client::{ApiError, EventsEndpoint};
use log::Level::Warn;
use logging::jlog;
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EditorMode {
    Create,
    Edit(Uuid),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EditorState {
    /// Waiting for the detail fetch; edit mode only.
    Loading,
    Editing,
    Submitting,
    /// Terminal; the shell navigates back to the organizer event list.
    Completed,
}

/// Working copy behind the ticket type dialog. `id` is None while adding
/// and the target row's id while editing.
#[derive(Clone, PartialEq, Debug)]
pub struct TicketTypeForm {
    pub id: Option<TicketTypeId>,
    pub fields: TicketTypeFields,
}

#[derive(Clone, PartialEq, Debug)]
pub enum TicketTypeDialog {
    Closed,
    Open(TicketTypeForm),
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionRequest {
    Create(CreateEventRequest),
    Update(UpdateEventRequest),
}

/// One editor instance: the sole owner of its draft from mount to unmount.
pub struct EditorSession {
    mode: EditorMode,
    state: EditorState,
    draft: EventDraft,
    dialog: TicketTypeDialog,
    error: Option<String>,
}

impl EditorSession {
    pub fn create() -> EditorSession {
        EditorSession {
            mode: EditorMode::Create,
            state: EditorState::Editing,
            draft: EventDraft::new(),
            dialog: TicketTypeDialog::Closed,
            error: None,
        }
    }

    pub fn edit(id: Uuid) -> EditorSession {
        EditorSession {
            mode: EditorMode::Edit(id),
            state: EditorState::Loading,
            draft: EventDraft::new(),
            dialog: TicketTypeDialog::Closed,
            error: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn dialog(&self) -> &TicketTypeDialog {
        &self.dialog
    }

    /// The message to render inline, if the last load or submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accepts the hydration fetch result. Responses arriving after the
    /// session left Loading, or for an event other than the session's
    /// target, are discarded.
    pub fn hydrated(&mut self, details: &EventDetails) {
        if self.state != EditorState::Loading || self.mode != EditorMode::Edit(details.id) {
            jlog!(Warn, "Discarding stale event detail response", {
                "event_id": details.id
            });
            return;
        }
        self.draft = EventDraft::hydrate(details);
        self.state = EditorState::Editing;
    }

    /// The hydration fetch failed. The empty draft stays in place so the
    /// form remains usable for a retry.
    pub fn load_failed(&mut self, error: &ApiError) {
        if self.state == EditorState::Loading {
            self.error = Some(error.user_message());
            self.state = EditorState::Editing;
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        if self.state != EditorState::Editing {
            return;
        }
        self.draft = self.draft.apply(update);
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog = TicketTypeDialog::Open(TicketTypeForm {
            id: None,
            fields: TicketTypeFields::default(),
        });
    }

    pub fn open_edit_dialog(&mut self, id: TicketTypeId) {
        if let Some(draft) = self.draft.ticket_types.iter().find(|t| t.id == id) {
            self.dialog = TicketTypeDialog::Open(TicketTypeForm {
                id: Some(id),
                fields: draft.fields(),
            });
        }
    }

    pub fn update_dialog(&mut self, fields: TicketTypeFields) {
        if let TicketTypeDialog::Open(form) = &mut self.dialog {
            form.fields = fields;
        }
    }

    /// Saving routes through the draft store: adds mint a provisional id
    /// and append, edits replace their row in place.
    pub fn save_dialog(&mut self) {
        if let TicketTypeDialog::Open(form) = self.dialog.clone() {
            let update = match form.id {
                Some(id) => FieldUpdate::EditTicketType(id, form.fields),
                None => FieldUpdate::AddTicketType(form.fields),
            };
            self.draft = self.draft.apply(update);
            self.dialog = TicketTypeDialog::Closed;
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = TicketTypeDialog::Closed;
    }

    /// Pure half of submission: validates and serializes the draft into the
    /// create or update request. Refuses while the ticket type dialog is
    /// unresolved.
    pub fn prepare_submission(&self) -> Result<SubmissionRequest, DraftError> {
        if let TicketTypeDialog::Open(_) = self.dialog {
            return Err(DraftError::DialogOpen);
        }
        match self.mode {
            EditorMode::Create => Ok(SubmissionRequest::Create(self.draft.to_create_request()?)),
            EditorMode::Edit(_) => Ok(SubmissionRequest::Update(self.draft.to_update_request()?)),
        }
    }

    /// Applies the dispatch outcome: success completes the session, failure
    /// returns to editing with the message surfaced and the draft intact so
    /// the user can retry without re-entering anything.
    pub fn resolve_submission(&mut self, outcome: Result<(), ApiError>) {
        match outcome {
            Ok(()) => {
                self.error = None;
                self.state = EditorState::Completed;
            }
            Err(error) => {
                jlog!(Warn, "Event submission failed", {
                    "error": error.to_string()
                });
                self.error = Some(error.user_message());
                self.state = EditorState::Editing;
            }
        }
    }

    /// Dispatches the draft to the backend. Holding `&mut self` across the
    /// await point means a second submission cannot start while one is in
    /// flight.
    pub async fn submit(&mut self, events: &EventsEndpoint, access_token: &str) {
        if self.state != EditorState::Editing {
            return;
        }
        self.error = None;
        let request = match self.prepare_submission() {
            Ok(request) => request,
            Err(error) => {
                self.error = Some(error.to_string());
                return;
            }
        };
        self.state = EditorState::Submitting;
        let outcome = match &request {
            SubmissionRequest::Create(request) => events.create(access_token, request).await,
            SubmissionRequest::Update(request) => {
                events.update(access_token, request.id, request).await
            }
        };
        self.resolve_submission(outcome);
    }
}
