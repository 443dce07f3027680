//! Integration tests for the sale-create page flow.
//!
//! These tests drive a typed [`FormState`] the way the discounts page does:
//! widget events, submission into the mutation input, and the mutation result
//! fed back into the next render.

use std::cell::RefCell;

use serde_json::json;

use dashboard_rs_core::FormSettings;
use dashboard_rs_forms::sale::{
    handle_sale_create, DiscountValueType, SaleCreateInput, SaleCreateOutcome, SaleCreateResult,
    SaleFormData, SaleType,
};
use dashboard_rs_forms::transition::{mutation_state, ConfirmButtonState};
use dashboard_rs_forms::{ChangeEvent, FormRecord, FormState, RawFieldError};

// ============================================================================
// Shared helpers
// ============================================================================

fn sale_form() -> FormState<SaleFormData, fn(&SaleFormData) -> SaleCreateInput> {
    FormState::new(
        SaleFormData::default(),
        Vec::new(),
        SaleCreateInput::from_form as fn(&SaleFormData) -> SaleCreateInput,
    )
}

// ============================================================================
// Typed form editing
// ============================================================================

#[test]
fn test_typed_form_change_by_wire_name() {
    let mut form = sale_form();
    form.change(ChangeEvent::new("name", "Summer Sale"));
    form.change(ChangeEvent::new("startDate", "2026-06-01"));
    form.change(ChangeEvent::new("type", "FIXED"));

    assert_eq!(form.data().name, "Summer Sale");
    assert_eq!(form.data().start_date, "2026-06-01");
    assert_eq!(form.data().sale_type, SaleType::Fixed);
    assert!(form.has_changed());
}

#[test]
fn test_typed_form_rejects_rust_field_names() {
    let mut form = sale_form();
    form.change(ChangeEvent::new("start_date", "2026-06-01"));
    assert_eq!(form.data(), &SaleFormData::default());
    assert!(!form.has_changed());
}

#[test]
fn test_typed_form_rejects_values_it_cannot_hold() {
    let mut form = sale_form();
    form.change(ChangeEvent::new("type", "BOGUS"));
    assert_eq!(form.data().sale_type, SaleType::Percentage);
    assert!(!form.has_changed());

    let err = form.try_change("type", json!(3)).unwrap_err();
    assert_eq!(err.field(), Some("type"));
}

#[test]
fn test_typed_form_toggle_on_string_field_is_noop() {
    let mut form = sale_form();
    form.toggle_value(ChangeEvent::new("name", "x"));
    assert_eq!(form.data(), &SaleFormData::default());
    assert!(!form.has_changed());
}

#[test]
fn test_typed_record_keys_are_stable() {
    let data = SaleFormData::default();
    let mut sorted: Vec<String> = data.to_fields().unwrap().keys().cloned().collect();
    sorted.sort();
    assert_eq!(sorted, vec!["endDate", "name", "startDate", "type", "value"]);
}

// ============================================================================
// Submit -> mutation -> next render
// ============================================================================

#[test]
fn test_submit_builds_mutation_input() {
    let mut form = sale_form();
    form.change(ChangeEvent::new("name", "Summer Sale"));
    form.change(ChangeEvent::new("value", "15"));

    let input = form.submit();
    assert_eq!(input.name, "Summer Sale");
    assert_eq!(input.value.as_deref(), Some("15"));
    assert_eq!(input.start_date, None);
    assert_eq!(input.value_type, DiscountValueType::Percentage);
    assert!(form.has_changed());
}

#[test]
fn test_rejected_mutation_surfaces_field_errors() {
    let mut form = sale_form();
    form.change(ChangeEvent::new("value", "abc"));
    let _input = form.submit();

    let result: SaleCreateResult = serde_json::from_value(json!({
        "errors": [
            { "field": "name", "message": "This field is required." },
            { "field": "value:amount", "message": "Enter a number." }
        ],
        "sale": null
    }))
    .unwrap();
    let errors = match handle_sale_create(result) {
        SaleCreateOutcome::Rejected(errors) => errors,
        other => panic!("Expected rejection, got {other:?}"),
    };
    assert_eq!(
        mutation_state(true, false, Some(errors.as_slice())),
        ConfirmButtonState::Error
    );

    form.sync(SaleFormData::default(), errors);
    let field_errors = form.errors();
    assert_eq!(field_errors["name"], "This field is required.");
    assert_eq!(field_errors["value"], "Enter a number.");
    // The edit survives the re-render.
    assert_eq!(form.data().value, "abc");
}

#[test]
fn test_created_mutation_navigates() {
    let result = SaleCreateResult {
        errors: Vec::new(),
        sale: Some(dashboard_rs_forms::sale::Sale {
            id: "U2FsZToxMA==".into(),
        }),
    };
    assert_eq!(
        mutation_state(true, false, Some(result.errors.as_slice())),
        ConfirmButtonState::Success
    );
    match handle_sale_create(result) {
        SaleCreateOutcome::Created { sale_id, url } => {
            assert_eq!(sale_id, "U2FsZToxMA==");
            assert_eq!(url, "/discounts/sales/U2FsZToxMA%3D%3D");
        }
        other => panic!("Expected creation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_async_submit_handle() {
    let mut form = FormState::new(SaleFormData::default(), Vec::new(), |data: &SaleFormData| {
        let input = SaleCreateInput::from_form(data);
        async move {
            tokio::task::yield_now().await;
            SaleCreateResult {
                errors: Vec::new(),
                sale: Some(dashboard_rs_forms::sale::Sale {
                    id: format!("sale-{}", input.name.len()),
                }),
            }
        }
    });
    form.change(ChangeEvent::new("name", "Flash"));

    let result = form.submit().await;
    assert_eq!(
        handle_sale_create(result),
        SaleCreateOutcome::Created {
            sale_id: "sale-5".into(),
            url: "/discounts/sales/sale-5".into(),
        }
    );
    assert!(form.has_changed());
}

#[test]
fn test_refetched_snapshot_after_reset() {
    let submitted = RefCell::new(Vec::new());
    let mut form = FormState::new(SaleFormData::default(), Vec::new(), |data: &SaleFormData| {
        submitted.borrow_mut().push(data.clone());
    });

    form.change(ChangeEvent::new("name", "Draft"));
    let fetched = SaleFormData {
        name: "Server".into(),
        ..SaleFormData::default()
    };
    form.sync(fetched.clone(), Vec::new());
    assert!(form.is_stale());
    form.submit();

    form.reset();
    assert_eq!(form.data(), &fetched);
    assert!(!form.has_changed());
    assert!(!form.is_stale());

    assert_eq!(submitted.borrow().len(), 1);
    assert_eq!(submitted.borrow()[0].name, "Draft");
}

#[test]
fn test_custom_separator_from_settings() {
    let settings = dashboard_rs_core::settings_loader::from_toml_str(
        r#"
            error_path_separator = "/"
            log_unknown_fields = false
        "#,
    )
    .unwrap();
    let mut form = sale_form().with_settings(settings);
    form.sync(
        SaleFormData::default(),
        vec![RawFieldError::new("startDate/day", "Invalid date.")],
    );
    assert_eq!(form.errors()["startDate"], "Invalid date.");
    assert_ne!(FormSettings::default().error_path_separator, '/');
}
