use attendly_client::domain::PublishedEventSummary;
use attendly_client::Page;
use serde_json::json;
use uuid::Uuid;

#[test]
fn page_deserializes_spring_envelope() {
    let body = json!({
        "content": [{
            "id": Uuid::new_v4(),
            "name": "Summer Festival",
            "venue": "Riverside Park"
        }],
        "pageable": {
            "sort": { "empty": true, "sorted": false, "unsorted": true },
            "offset": 0,
            "pageNumber": 0,
            "pageSize": 4,
            "paged": true,
            "unpaged": false
        },
        "last": false,
        "totalElements": 9,
        "totalPages": 3,
        "size": 4,
        "number": 0,
        "sort": { "empty": true, "sorted": false, "unsorted": true },
        "first": true,
        "numberOfElements": 1,
        "empty": false
    })
    .to_string();

    let page: Page<PublishedEventSummary> = serde_json::from_str(&body).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, "Summer Festival");
    assert_eq!(page.total_elements, 9);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next());
    assert!(!page.has_previous());
    assert!(!page.is_empty());
}

#[test]
fn empty_page() {
    let body = json!({
        "content": [],
        "last": true,
        "totalElements": 0,
        "totalPages": 0,
        "size": 4,
        "number": 0,
        "sort": { "empty": true, "sorted": false, "unsorted": true },
        "first": true,
        "numberOfElements": 0,
        "empty": true
    })
    .to_string();

    let page: Page<PublishedEventSummary> = serde_json::from_str(&body).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next());
}
