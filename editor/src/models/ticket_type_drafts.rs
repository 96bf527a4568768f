use attendly_client::domain::{CreateTicketTypeRequest, TicketTypeDetails, UpdateTicketTypeRequest};
use uuid::Uuid;

/// Identity of one ticket type row in the editor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TicketTypeId {
    /// Minted locally for a row the backend has never seen.
    Provisional(Uuid),
    /// Assigned by the backend; passes through update requests untouched.
    Persisted(Uuid),
}

impl TicketTypeId {
    pub fn fresh() -> TicketTypeId {
        TicketTypeId::Provisional(Uuid::new_v4())
    }

    pub fn is_provisional(self) -> bool {
        match self {
            TicketTypeId::Provisional(_) => true,
            TicketTypeId::Persisted(_) => false,
        }
    }

    /// The identifier the backend may see. Provisional ids never leave the
    /// client; serializing one yields absent, which tells the backend to
    /// create a new nested record.
    pub fn persisted(self) -> Option<Uuid> {
        match self {
            TicketTypeId::Persisted(id) => Some(id),
            TicketTypeId::Provisional(_) => None,
        }
    }
}

/// The dialog-editable attributes of a ticket type row.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TicketTypeFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub total_available: Option<u32>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TicketTypeDraft {
    pub id: TicketTypeId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub total_available: Option<u32>,
}

impl TicketTypeDraft {
    pub fn create(fields: TicketTypeFields) -> TicketTypeDraft {
        TicketTypeDraft::with_fields(TicketTypeId::fresh(), fields)
    }

    pub fn hydrate(details: &TicketTypeDetails) -> TicketTypeDraft {
        TicketTypeDraft {
            id: TicketTypeId::Persisted(details.id),
            name: details.name.clone(),
            price: details.price,
            description: details.description.clone(),
            total_available: details.total_available,
        }
    }

    pub fn fields(&self) -> TicketTypeFields {
        TicketTypeFields {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            total_available: self.total_available,
        }
    }

    fn with_fields(id: TicketTypeId, fields: TicketTypeFields) -> TicketTypeDraft {
        TicketTypeDraft {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            total_available: fields.total_available,
        }
    }
}

/// Appends a new draft row under a fresh provisional identifier. Every
/// operation here returns a new sequence; callers holding the old one never
/// observe a partial mutation.
pub fn add(sequence: &[TicketTypeDraft], fields: TicketTypeFields) -> Vec<TicketTypeDraft> {
    let mut next = sequence.to_vec();
    next.push(TicketTypeDraft::create(fields));
    next
}

/// Replaces the matching row in place, preserving insertion order. An
/// unknown id leaves the sequence unchanged.
pub fn edit(
    sequence: &[TicketTypeDraft],
    id: TicketTypeId,
    fields: TicketTypeFields,
) -> Vec<TicketTypeDraft> {
    sequence
        .iter()
        .map(|draft| {
            if draft.id == id {
                TicketTypeDraft::with_fields(id, fields.clone())
            } else {
                draft.clone()
            }
        })
        .collect()
}

/// Removes the matching row; no-op when absent. The backend later infers
/// deletion of persisted records from their absence in the update request.
pub fn delete(sequence: &[TicketTypeDraft], id: TicketTypeId) -> Vec<TicketTypeDraft> {
    sequence
        .iter()
        .filter(|draft| draft.id != id)
        .cloned()
        .collect()
}

/// Creation always produces new records, so identifiers are stripped
/// entirely.
pub fn to_create_request(sequence: &[TicketTypeDraft]) -> Vec<CreateTicketTypeRequest> {
    sequence
        .iter()
        .map(|draft| CreateTicketTypeRequest {
            name: draft.name.clone(),
            price: draft.price,
            description: draft.description.clone(),
            total_available: draft.total_available,
        })
        .collect()
}

pub fn to_update_request(sequence: &[TicketTypeDraft]) -> Vec<UpdateTicketTypeRequest> {
    sequence
        .iter()
        .map(|draft| UpdateTicketTypeRequest {
            id: draft.id.persisted(),
            name: draft.name.clone(),
            price: draft.price,
            description: draft.description.clone(),
            total_available: draft.total_available,
        })
        .collect()
}
