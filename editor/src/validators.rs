use crate::models::EventDraft;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}

pub fn append_validation_error(
    validation_errors: Result<(), ValidationErrors>,
    field: &'static str,
    validation_error: Result<(), ValidationError>,
) -> Result<(), ValidationErrors> {
    if let Err(validation_error) = validation_error {
        let mut validation_errors = match validation_errors {
            Ok(_) => ValidationErrors::new(),
            Err(validation_errors) => validation_errors,
        };
        validation_errors.add(field, validation_error);
        Err(validation_errors)
    } else {
        validation_errors
    }
}

pub fn validation_messages(errors: &ValidationErrors) -> String {
    let mut messages = vec![];
    for (_, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(error.code.to_string()),
            }
        }
    }
    messages.join(", ")
}

pub fn validate_name_present(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(create_validation_error("name_required", "Name is required"));
    }
    Ok(())
}

/// Numeric form inputs can produce NaN and negatives; both are rejected
/// here rather than serialized into a request the backend cannot honor.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(create_validation_error(
            "price_not_a_number",
            "Price must be a number",
        ));
    }
    if price < 0.0 {
        let mut validation_error =
            create_validation_error("price_negative", "Price must not be negative");
        validation_error.add_param(Cow::from("price"), &price);
        return Err(validation_error);
    }
    Ok(())
}

/// Runs every pre-dispatch check over the draft. Serialization refuses to
/// build a request from a draft that fails here.
pub fn validate_draft(draft: &EventDraft) -> Result<(), ValidationErrors> {
    let mut result = Ok(());
    result = append_validation_error(result, "name", validate_name_present(&draft.name));
    for ticket_type in &draft.ticket_types {
        result = append_validation_error(
            result,
            "ticket_types",
            validate_name_present(&ticket_type.name),
        );
        result = append_validation_error(result, "ticket_types", validate_price(ticket_type.price));
    }
    result
}

#[test]
fn validate_price_accepts_zero() {
    assert_eq!(validate_price(0.0), Ok(()));
}

#[test]
fn validate_price_rejects_negative() {
    let result = validate_price(-10.0);
    match result {
        Ok(_) => panic!("Unexpected Ok result"),
        Err(e) => assert_eq!(e.code, "price_negative"),
    }
}

#[test]
fn validate_price_rejects_nan() {
    let result = validate_price(std::f64::NAN);
    match result {
        Ok(_) => panic!("Unexpected Ok result"),
        Err(e) => assert_eq!(e.code, "price_not_a_number"),
    }
}

#[test]
fn validate_name_present_rejects_whitespace() {
    assert!(validate_name_present("   ").is_err());
    assert!(validate_name_present("Summer Festival").is_ok());
}
