//! Behavioural tests for the PIN code lookup form.
//!
//! These scenarios drive [`LookupForm`] against a scripted lookup service and
//! check the derived view: validation, error surfacing, the results grid, and
//! the loading window around a request.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pincode_finder::domain::ports::{NOT_FOUND_MESSAGE, PostalLookupError, PostalLookupSource};
use pincode_finder::domain::{
    BadgeTone, DeliveryStatus, INVALID_FORMAT_MESSAGE, LookupForm, LookupView, OutputRegion,
    PostOfficeRecord, PostOffices, PostalCode, ResultsGrid, Submission,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::{Builder, Runtime};

// ============================================================================
// Test doubles
// ============================================================================

/// Lookup service with a scripted answer.
///
/// When `known` is set, only that PIN code gets the scripted outcome and
/// every other code is reported as not found.
struct ScriptedSource {
    known: Option<PostalCode>,
    outcome: Result<PostOffices, PostalLookupError>,
    requests: Mutex<Vec<PostalCode>>,
}

impl ScriptedSource {
    fn new(known: Option<PostalCode>, outcome: Result<PostOffices, PostalLookupError>) -> Self {
        Self {
            known,
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<PostalCode> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl PostalLookupSource for ScriptedSource {
    async fn lookup(&self, code: &PostalCode) -> Result<PostOffices, PostalLookupError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(code.clone());
        match &self.known {
            Some(known) if known != code => Err(PostalLookupError::not_found()),
            _ => self.outcome.clone(),
        }
    }
}

fn office(name: &str, status: DeliveryStatus) -> PostOfficeRecord {
    PostOfficeRecord {
        name: name.to_owned(),
        district: "D".to_owned(),
        state: "S".to_owned(),
        region: "R".to_owned(),
        division: "Dv".to_owned(),
        circle: "C".to_owned(),
        delivery_status: status,
    }
}

fn offices(status: DeliveryStatus) -> PostOffices {
    PostOffices::from_vec(vec![office("Test PO", status)]).expect("one office")
}

// ============================================================================
// Test world
// ============================================================================

/// Wrapper for non-Clone types to enable storage in `Slot`.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

/// Shared handle to the form under test.
#[derive(Clone)]
struct FormHandle(Arc<Mutex<LookupForm>>);

/// Test world holding the form, its scripted service, and any pending request.
#[derive(Default, ScenarioState)]
struct World {
    runtime: Slot<RuntimeHandle>,
    source: Slot<Arc<ScriptedSource>>,
    form: Slot<FormHandle>,
    pending: Slot<Submission>,
}

impl World {
    fn install(
        &self,
        known: Option<PostalCode>,
        outcome: Result<PostOffices, PostalLookupError>,
    ) {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("create runtime");
        let source = Arc::new(ScriptedSource::new(known, outcome));
        let form = LookupForm::new(source.clone());

        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.source.set(source);
        self.form.set(FormHandle(Arc::new(Mutex::new(form))));
    }

    fn with_form<T>(&self, operation: impl FnOnce(&mut LookupForm, &Runtime) -> T) -> T {
        let handle = self.form.get().expect("form should be set");
        let runtime = self.runtime.get().expect("runtime should be set");
        let mut form = handle.0.lock().expect("form lock");
        operation(&mut form, &runtime.0)
    }

    fn view(&self) -> LookupView {
        self.with_form(|form, _| LookupView::from_state(form.state()))
    }

    fn grid(&self) -> ResultsGrid {
        match self.view().output {
            OutputRegion::Results(grid) => grid,
            other => panic!("expected results, got {other:?}"),
        }
    }

    fn error_banner(&self) -> String {
        match self.view().output {
            OutputRegion::Error(message) => message,
            other => panic!("expected an error banner, got {other:?}"),
        }
    }

    fn requests(&self) -> Vec<PostalCode> {
        self.source.get().expect("source should be set").requests()
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a lookup service that knows PIN code {code}")]
fn a_lookup_service_that_knows(world: &World, code: String) {
    let known = PostalCode::parse(code).expect("scenario code should be valid");
    world.install(Some(known), Ok(offices(DeliveryStatus::Delivery)));
}

#[given("a lookup service that fails with message {message}")]
fn a_lookup_service_that_fails(world: &World, message: String) {
    world.install(None, Err(PostalLookupError::upstream(message)));
}

#[given("a lookup service with no post offices")]
fn a_lookup_service_with_no_post_offices(world: &World) {
    world.install(None, Err(PostalLookupError::not_found()));
}

#[given("a lookup service with a non-delivery office")]
fn a_lookup_service_with_a_non_delivery_office(world: &World) {
    world.install(None, Ok(offices(DeliveryStatus::NonDelivery)));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the user submits {raw}")]
fn the_user_submits(world: &World, raw: String) {
    world.with_form(|form, runtime| {
        form.set_input(&raw);
        runtime.block_on(form.submit());
    });
}

#[when("the user starts submitting {raw}")]
fn the_user_starts_submitting(world: &World, raw: String) {
    let submission = world.with_form(|form, _| {
        form.set_input(&raw);
        form.begin_submit().expect("input should be valid")
    });
    world.pending.set(submission);
}

#[when("the lookup completes")]
fn the_lookup_completes(world: &World) {
    let submission = world.pending.get().expect("a submission should be pending");
    let applied = world.with_form(|form, runtime| {
        let outcome = runtime.block_on(form.source().lookup(submission.postal_code()));
        form.complete(submission, outcome)
    });
    assert!(applied, "the latest submission should be applied");
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the error banner shows the invalid format message")]
fn the_error_banner_shows_the_invalid_format_message(world: &World) {
    assert_eq!(world.error_banner(), INVALID_FORMAT_MESSAGE);
}

#[then("the error banner shows the not found message")]
fn the_error_banner_shows_the_not_found_message(world: &World) {
    assert_eq!(world.error_banner(), NOT_FOUND_MESSAGE);
}

#[then("the error banner reads {message}")]
fn the_error_banner_reads(world: &World, message: String) {
    assert_eq!(world.error_banner(), message);
}

#[then("no lookup request was made")]
fn no_lookup_request_was_made(world: &World) {
    assert!(world.requests().is_empty());
}

#[then("exactly one lookup request was made")]
fn exactly_one_lookup_request_was_made(world: &World) {
    assert_eq!(world.requests().len(), 1);
}

#[then("the service was asked for PIN code {code}")]
fn the_service_was_asked_for(world: &World, code: String) {
    let requested: Vec<String> = world.requests().into_iter().map(String::from).collect();
    assert_eq!(requested, [code]);
}

#[then("the results show post office {name}")]
fn the_results_show_post_office(world: &World, name: String) {
    assert_eq!(world.grid().value("Post Office"), Some(name.as_str()));
}

#[then("the results show PIN code {code}")]
fn the_results_show_pin_code(world: &World, code: String) {
    assert_eq!(world.grid().value("PIN Code"), Some(code.as_str()));
}

#[then("the delivery badge is positive")]
fn the_delivery_badge_is_positive(world: &World) {
    let badge = world.grid().badge;
    assert_eq!(badge.tone, BadgeTone::Positive);
    assert_eq!(badge.label, "Delivery");
}

#[then("the delivery badge is negative")]
fn the_delivery_badge_is_negative(world: &World) {
    let badge = world.grid().badge;
    assert_eq!(badge.tone, BadgeTone::Negative);
    assert_eq!(badge.label, "Non-Delivery");
}

#[then("the form is loading")]
fn the_form_is_loading(world: &World) {
    let view = world.view();
    assert!(!view.submit_enabled);
    assert!(matches!(view.output, OutputRegion::Loading(_)));
}

#[then("the form is not loading")]
fn the_form_is_not_loading(world: &World) {
    let view = world.view();
    assert!(view.submit_enabled);
    assert!(!matches!(view.output, OutputRegion::Loading(_)));
}

#[then("the submit button reads {label}")]
fn the_submit_button_reads(world: &World, label: String) {
    assert_eq!(world.view().submit_label, label);
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Malformed PIN code is rejected without a lookup"
)]
fn malformed_pin_code_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Leading zero PIN code is rejected without a lookup"
)]
fn leading_zero_pin_code_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Service error message is shown verbatim"
)]
fn service_error_message_is_shown_verbatim(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Empty post office list reports not found"
)]
fn empty_post_office_list_reports_not_found(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Successful lookup shows the first post office"
)]
fn successful_lookup_shows_the_first_post_office(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Non-delivery offices get a distinct badge"
)]
fn non_delivery_offices_get_a_distinct_badge(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Loading state spans the lookup"
)]
fn loading_state_spans_the_lookup(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lookup_form.feature",
    name = "Codes the service does not know report not found"
)]
fn codes_the_service_does_not_know_report_not_found(world: World) {
    let _ = world;
}
