//! Unit tests for the submission form.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockTrailStore;

#[fixture]
fn filled_form() -> TrailSubmissionForm {
    let mut form = TrailSubmissionForm::new();
    form.set_field(FieldEdit::Name("Antelope Canyon".to_owned()));
    form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));
    form.set_field(FieldEdit::Difficulty(Difficulty::Easy));
    form.set_field(FieldEdit::Distance("1.5 mi".to_owned()));
    form
}

#[rstest]
fn set_field_updates_the_draft() {
    let mut form = TrailSubmissionForm::new();

    form.set_field(FieldEdit::Name("Torres del Paine".to_owned()));
    form.set_field(FieldEdit::Difficulty(Difficulty::Hard));
    form.set_field(FieldEdit::CampingAllowed(true));
    form.set_field(FieldEdit::CampingDetails("Refugios only".to_owned()));

    assert_eq!(form.draft().name, "Torres del Paine");
    assert_eq!(form.draft().difficulty, Difficulty::Hard);
    assert!(form.draft().camping_allowed);
    assert_eq!(form.draft().camping_details, "Refugios only");
}

#[rstest]
fn set_field_performs_no_validation() {
    let mut form = TrailSubmissionForm::new();

    // Blanking a mandatory field mid-edit is allowed.
    form.set_field(FieldEdit::Name(String::new()));
    form.set_field(FieldEdit::Location("   ".to_owned()));

    assert_eq!(form.draft().name, "");
    assert_eq!(form.draft().location, "   ");
}

#[rstest]
fn submit_rejects_empty_name_first() {
    let mut form = TrailSubmissionForm::new();
    form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));

    let result = form.submit();

    assert!(matches!(
        result,
        Err(SubmissionError::EmptyField { field: "name" })
    ));
}

#[rstest]
fn submit_rejects_whitespace_only_name() {
    let mut form = TrailSubmissionForm::new();
    form.set_field(FieldEdit::Name("   ".to_owned()));
    form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));

    let result = form.submit();

    assert_eq!(result.expect_err("blank name").field(), Some("name"));
}

#[rstest]
fn submit_rejects_empty_location() {
    let mut form = TrailSubmissionForm::new();
    form.set_field(FieldEdit::Name("Antelope Canyon".to_owned()));

    let result = form.submit();

    assert!(matches!(
        result,
        Err(SubmissionError::EmptyField { field: "location" })
    ));
}

#[rstest]
fn submit_reports_name_when_both_mandatory_fields_are_empty() {
    let mut form = TrailSubmissionForm::new();

    let result = form.submit();

    assert!(matches!(
        result,
        Err(SubmissionError::EmptyField { field: "name" })
    ));
}

#[rstest]
fn submit_succeeds_regardless_of_optional_fields(mut filled_form: TrailSubmissionForm) {
    let record = filled_form.submit().expect("mandatory fields are set");

    assert_eq!(record.name(), "Antelope Canyon");
    assert_eq!(record.location(), "Arizona, USA");
    assert_eq!(record.rating(), 0.0);
    assert_eq!(record.review_count(), 0);
    assert!(!record.featured());
    assert!(!record.id().as_str().is_empty());
}

#[rstest]
fn submit_does_not_require_conditional_details(mut filled_form: TrailSubmissionForm) {
    // Toggling a condition on while leaving its details blank is accepted,
    // matching the original form's looseness.
    filled_form.set_field(FieldEdit::PermissionRequired(true));
    filled_form.set_field(FieldEdit::TicketRequired(true));

    let record = filled_form.submit().expect("details are optional");

    assert_eq!(
        record.permission(),
        &Permission::Required {
            details: String::new()
        }
    );
    assert_eq!(record.ticket().price(), Some(""));
}

#[rstest]
fn submit_folds_conditions_into_variants(mut filled_form: TrailSubmissionForm) {
    filled_form.set_field(FieldEdit::WildlifePresent(true));
    filled_form.set_field(FieldEdit::WildlifeDetails("Bighorn sheep".to_owned()));
    filled_form.set_field(FieldEdit::ShopDetails("ignored without the toggle".to_owned()));

    let record = filled_form.submit().expect("valid draft");

    assert_eq!(record.wildlife().details(), Some("Bighorn sheep"));
    // Details without the toggle fold to the off variant.
    assert_eq!(record.shops(), &NearbyShops::Absent);
}

#[rstest]
fn successful_submit_resets_the_draft(mut filled_form: TrailSubmissionForm) {
    let _ = filled_form.submit().expect("valid draft");

    assert_eq!(filled_form.draft(), &DraftTrail::default());
}

#[rstest]
fn failed_submit_preserves_the_draft() {
    let mut form = TrailSubmissionForm::new();
    form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));
    form.set_field(FieldEdit::Description("Slot canyon".to_owned()));
    let before = form.draft().clone();

    let _ = form.submit().expect_err("missing name");

    assert_eq!(form.draft(), &before);
}

#[rstest]
fn each_submission_mints_a_fresh_id() {
    let mut form = TrailSubmissionForm::new();
    let mut ids = Vec::new();

    for _ in 0..2 {
        form.set_field(FieldEdit::Name("Antelope Canyon".to_owned()));
        form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));
        let record = form.submit().expect("valid draft");
        ids.push(record.id().clone());
    }

    assert_eq!(ids.len(), 2);
    assert_ne!(ids.first(), ids.get(1));
}

#[rstest]
fn submit_into_inserts_and_resets(mut filled_form: TrailSubmissionForm) {
    let mut store = MockTrailStore::new();
    store
        .expect_insert()
        .times(1)
        .returning(|_| Ok(()));

    let id = filled_form
        .submit_into(&mut store)
        .expect("store accepts the candidate");

    assert!(!id.as_str().is_empty());
    assert_eq!(filled_form.draft(), &DraftTrail::default());
}

#[rstest]
fn submit_into_preserves_draft_when_store_rejects(mut filled_form: TrailSubmissionForm) {
    let before = filled_form.draft().clone();
    let mut store = MockTrailStore::new();
    store.expect_insert().times(1).returning(|record| {
        Err(CatalogueError::DuplicateTrailId {
            id: record.id().clone(),
        })
    });

    let result = filled_form.submit_into(&mut store);

    assert!(matches!(result, Err(PublishError::Store(_))));
    assert_eq!(filled_form.draft(), &before);
}

#[rstest]
fn submit_into_skips_the_store_on_validation_failure() {
    let mut form = TrailSubmissionForm::new();
    let mut store = MockTrailStore::new();
    store.expect_insert().times(0);

    let result = form.submit_into(&mut store);

    assert!(matches!(
        result,
        Err(PublishError::Validation(SubmissionError::EmptyField {
            field: "name"
        }))
    ));
}
