use serde::Deserialize;

/// Page envelope returned by the backend's list endpoints. The backend also
/// sends `pageable` and `sort` blocks; nothing client-side reads them, so
/// they are left to serde's unknown-field handling.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn has_next(&self) -> bool {
        !self.last
    }

    pub fn has_previous(&self) -> bool {
        !self.first
    }
}
