//! The entity form lifecycle.
//!
//! One controller drives create, update, and delete for a single entity
//! instance: validate the typed schema, send the mutation, reload the
//! caller's view, notify, and always return to an editable idle state.
//! Errors are surfaced transiently through the [`Notifier`]; the controller
//! never holds a persistent failed state.

use std::sync::Arc;

use marquee_core::{FormErrors, FormSchema};

use crate::api::EntityEndpoint;
use crate::notify::{Notifier, ViewContext};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The payload was accepted by the server.
    Saved,
    /// Field constraints failed; no network call was made.
    Invalid(FormErrors),
    /// The request settled with an error.
    Failed,
    /// A request was already outstanding; nothing happened.
    Ignored,
}

/// Result of a confirmed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entity is gone; the view was sent back to the root.
    Deleted,
    /// The request settled with an error; the entity still exists.
    Failed,
    /// The prompt was not open, or a request was outstanding.
    Ignored,
}

/// Drives the create/update/delete lifecycle for one entity instance.
///
/// Constructed with an optional snapshot of the existing entity: absent
/// means create mode, present means edit mode with pre-filled fields.
pub struct FormController<S, E>
where
    S: FormSchema,
    E: EntityEndpoint<S>,
{
    endpoint: E,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ViewContext>,
    initial: Option<S>,
    busy: bool,
    confirm_open: bool,
}

impl<S, E> FormController<S, E>
where
    S: FormSchema,
    E: EntityEndpoint<S>,
{
    /// Create a controller with its injected services.
    pub fn new(
        endpoint: E,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ViewContext>,
        initial: Option<S>,
    ) -> Self {
        Self {
            endpoint,
            notifier,
            view,
            initial,
            busy: false,
            confirm_open: false,
        }
    }

    /// True when an existing entity was supplied at construction.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.initial.is_some()
    }

    /// True while a mutation is outstanding. Hosts disable submit and
    /// delete controls on this flag.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// True while the delete confirmation prompt is open.
    #[must_use]
    pub const fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    /// Heading for the form ("Edit billboard" / "Create billboard").
    #[must_use]
    pub fn title(&self) -> String {
        let entity = S::ENTITY.to_lowercase();
        if self.is_edit() {
            format!("Edit {entity}")
        } else {
            format!("Create {entity}")
        }
    }

    /// Sub-heading for the form.
    #[must_use]
    pub fn description(&self) -> String {
        let entity = S::ENTITY.to_lowercase();
        if self.is_edit() {
            format!("Edit a {entity}.")
        } else {
            format!("Add a new {entity}")
        }
    }

    /// Label for the submit control ("Save changes" / "Create").
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_edit() { "Save changes" } else { "Create" }
    }

    /// Starting field values: the entity snapshot in edit mode, empty
    /// defaults in create mode.
    #[must_use]
    pub fn form_values(&self) -> S
    where
        S: Default,
    {
        self.initial.clone().unwrap_or_default()
    }

    /// Validate and submit the form.
    ///
    /// Invalid values surface per-field errors and issue no network call.
    /// Valid values are sent as one atomic payload: create mode posts to
    /// the collection, edit mode patches the resource. The busy flag is
    /// cleared regardless of outcome.
    pub async fn submit(&mut self, values: S) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Ignored;
        }

        if let Err(errors) = values.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        self.busy = true;
        let result = if self.is_edit() {
            self.endpoint.update(&values).await
        } else {
            self.endpoint.create(&values).await
        };

        let outcome = match result {
            Ok(()) => {
                self.view.refresh();
                self.notifier.success(&self.saved_message());
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(entity = S::ENTITY, error = %e, "form submission failed");
                self.notifier.error("Something went wrong.");
                SubmitOutcome::Failed
            }
        };

        self.busy = false;
        outcome
    }

    /// Open the delete confirmation prompt. No-op while busy; nothing is
    /// mutated until [`Self::confirm_delete`].
    pub fn request_delete(&mut self) {
        if self.busy {
            return;
        }
        self.confirm_open = true;
    }

    /// Close the confirmation prompt without deleting.
    pub fn cancel_delete(&mut self) {
        self.confirm_open = false;
    }

    /// Delete the entity after confirmation.
    ///
    /// The busy flag and the prompt are cleared however the request
    /// settles. Success-only effects (reload, navigation to the root, the
    /// "deleted" notification) fire only when the server confirmed the
    /// delete; a failure surfaces the dependency hint and leaves the view
    /// where it is.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        if !self.confirm_open || self.busy {
            return DeleteOutcome::Ignored;
        }

        self.busy = true;
        let result = self.endpoint.delete().await;
        self.busy = false;
        self.confirm_open = false;

        match result {
            Ok(()) => {
                self.view.refresh();
                self.view.navigate("/");
                self.notifier.success(&format!("{} deleted.", S::ENTITY));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(entity = S::ENTITY, error = %e, "delete failed");
                self.notifier.error(S::DELETE_DEPENDENCY_HINT);
                DeleteOutcome::Failed
            }
        }
    }

    fn saved_message(&self) -> String {
        if self.is_edit() {
            format!("{} updated.", S::ENTITY)
        } else {
            format!("{} created.", S::ENTITY)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use marquee_core::{BillboardDraft, StoreSettings};

    use super::*;
    use crate::api::ApiError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Create(serde_json::Value),
        Update(serde_json::Value),
        Delete,
    }

    /// Endpoint stub that records calls and fails on demand.
    #[derive(Default)]
    struct StubEndpoint {
        calls: Arc<Mutex<Vec<Call>>>,
        fail_save: bool,
        fail_delete: bool,
    }

    impl StubEndpoint {
        fn failing_save(calls: Arc<Mutex<Vec<Call>>>) -> Self {
            Self {
                calls,
                fail_save: true,
                fail_delete: false,
            }
        }

        fn failing_delete(calls: Arc<Mutex<Vec<Call>>>) -> Self {
            Self {
                calls,
                fail_save: false,
                fail_delete: true,
            }
        }

        fn recording(calls: Arc<Mutex<Vec<Call>>>) -> Self {
            Self {
                calls,
                fail_save: false,
                fail_delete: false,
            }
        }
    }

    impl<S: FormSchema> EntityEndpoint<S> for StubEndpoint {
        async fn create(&self, values: &S) -> Result<(), ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(serde_json::to_value(values).unwrap()));
            if self.fail_save {
                return Err(ApiError::Status { status: 500 });
            }
            Ok(())
        }

        async fn update(&self, values: &S) -> Result<(), ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(serde_json::to_value(values).unwrap()));
            if self.fail_save {
                return Err(ApiError::Status { status: 500 });
            }
            Ok(())
        }

        async fn delete(&self) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(Call::Delete);
            if self.fail_delete {
                return Err(ApiError::Status { status: 409 });
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingView {
        refreshes: Mutex<usize>,
        navigations: Mutex<Vec<String>>,
    }

    impl ViewContext for RecordingView {
        fn refresh(&self) {
            *self.refreshes.lock().unwrap() += 1;
        }

        fn navigate(&self, path: &str) {
            self.navigations.lock().unwrap().push(path.to_string());
        }
    }

    struct Harness {
        calls: Arc<Mutex<Vec<Call>>>,
        notifier: Arc<RecordingNotifier>,
        view: Arc<RecordingView>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                notifier: Arc::new(RecordingNotifier::default()),
                view: Arc::new(RecordingView::default()),
            }
        }

        fn controller<S: FormSchema>(
            &self,
            endpoint: StubEndpoint,
            initial: Option<S>,
        ) -> FormController<S, StubEndpoint> {
            FormController::new(endpoint, self.notifier.clone(), self.view.clone(), initial)
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn successes(&self) -> Vec<String> {
            self.notifier.successes.lock().unwrap().clone()
        }

        fn errors(&self) -> Vec<String> {
            self.notifier.errors.lock().unwrap().clone()
        }

        fn refreshes(&self) -> usize {
            *self.view.refreshes.lock().unwrap()
        }

        fn navigations(&self) -> Vec<String> {
            self.view.navigations.lock().unwrap().clone()
        }
    }

    fn store_snapshot() -> StoreSettings {
        StoreSettings {
            name: "Neon Outfitters".to_string(),
        }
    }

    fn draft() -> BillboardDraft {
        BillboardDraft {
            label: "Summer sale".to_string(),
            image_url: "https://cdn.example.com/summer.png".to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_submission_issues_no_network_call() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        let outcome = form.submit(StoreSettings::default()).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert_eq!(errors.message_for("name"), Some("Required"));
        assert!(h.calls().is_empty());
        assert!(h.successes().is_empty());
        assert!(h.errors().is_empty());
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn successful_update_refreshes_and_notifies_once() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        let outcome = form.submit(store_snapshot()).await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(
            h.calls(),
            vec![Call::Update(serde_json::json!({"name": "Neon Outfitters"}))]
        );
        assert_eq!(h.refreshes(), 1);
        assert_eq!(h.successes(), vec!["Store updated.".to_string()]);
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn create_mode_posts_to_collection() {
        let h = Harness::new();
        let mut form =
            h.controller::<BillboardDraft>(StubEndpoint::recording(h.calls.clone()), None);

        let outcome = form.submit(draft()).await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(
            h.calls(),
            vec![Call::Create(serde_json::json!({
                "label": "Summer sale",
                "imageUrl": "https://cdn.example.com/summer.png",
            }))]
        );
        assert_eq!(h.successes(), vec!["Billboard created.".to_string()]);
    }

    #[tokio::test]
    async fn failed_update_emits_generic_error_and_clears_busy() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::failing_save(h.calls.clone()),
            Some(store_snapshot()),
        );

        let outcome = form.submit(store_snapshot()).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(h.errors(), vec!["Something went wrong.".to_string()]);
        assert!(h.successes().is_empty());
        assert_eq!(h.refreshes(), 0);
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn sequential_resubmission_sends_two_identical_requests() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        assert_eq!(form.submit(store_snapshot()).await, SubmitOutcome::Saved);
        assert_eq!(form.submit(store_snapshot()).await, SubmitOutcome::Saved);

        let payload = serde_json::json!({"name": "Neon Outfitters"});
        assert_eq!(
            h.calls(),
            vec![Call::Update(payload.clone()), Call::Update(payload)]
        );
        assert_eq!(h.successes().len(), 2);
    }

    #[tokio::test]
    async fn submit_while_busy_is_ignored() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );
        form.busy = true;

        let outcome = form.submit(store_snapshot()).await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(h.calls().is_empty());
    }

    #[tokio::test]
    async fn create_mode_presentation() {
        let h = Harness::new();
        let form = h.controller::<BillboardDraft>(StubEndpoint::recording(h.calls.clone()), None);

        assert!(!form.is_edit());
        assert_eq!(form.title(), "Create billboard");
        assert_eq!(form.description(), "Add a new billboard");
        assert_eq!(form.action_label(), "Create");
        assert_eq!(form.form_values(), BillboardDraft::default());
    }

    #[tokio::test]
    async fn edit_mode_presentation_prefills_fields() {
        let h = Harness::new();
        let form = h.controller(StubEndpoint::recording(h.calls.clone()), Some(draft()));

        assert!(form.is_edit());
        assert_eq!(form.title(), "Edit billboard");
        assert_eq!(form.description(), "Edit a billboard.");
        assert_eq!(form.action_label(), "Save changes");
        assert_eq!(form.form_values(), draft());
    }

    #[tokio::test]
    async fn request_delete_while_busy_is_a_noop() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );
        form.busy = true;

        form.request_delete();

        assert!(!form.is_confirm_open());
        assert_eq!(form.confirm_delete().await, DeleteOutcome::Ignored);
        assert!(h.calls().is_empty());
    }

    #[tokio::test]
    async fn confirm_without_prompt_is_ignored() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        assert_eq!(form.confirm_delete().await, DeleteOutcome::Ignored);
        assert!(h.calls().is_empty());
    }

    #[tokio::test]
    async fn cancel_closes_the_prompt() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        form.request_delete();
        assert!(form.is_confirm_open());
        form.cancel_delete();
        assert!(!form.is_confirm_open());
        assert!(h.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_delete_navigates_root_after_cleanup() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::recording(h.calls.clone()),
            Some(store_snapshot()),
        );

        form.request_delete();
        let outcome = form.confirm_delete().await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(h.calls(), vec![Call::Delete]);
        assert_eq!(h.refreshes(), 1);
        assert_eq!(h.navigations(), vec!["/".to_string()]);
        assert_eq!(h.successes(), vec!["Store deleted.".to_string()]);
        assert!(!form.is_busy());
        assert!(!form.is_confirm_open());
    }

    // The upstream behavior this was rebuilt from fired the "deleted"
    // notification and root navigation even when the request failed. That
    // convergent cleanup was a bug: failure must keep the user where they
    // are, with the entity intact.
    #[tokio::test]
    async fn failed_delete_does_not_navigate_or_celebrate() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::failing_delete(h.calls.clone()),
            Some(store_snapshot()),
        );

        form.request_delete();
        let outcome = form.confirm_delete().await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert!(h.navigations().is_empty());
        assert!(h.successes().is_empty());
        assert_eq!(h.refreshes(), 0);
        assert_eq!(
            h.errors(),
            vec!["Make sure you removed all products and categories first.".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_delete_still_closes_prompt_and_clears_busy() {
        let h = Harness::new();
        let mut form = h.controller(
            StubEndpoint::failing_delete(h.calls.clone()),
            Some(draft()),
        );

        form.request_delete();
        let outcome = form.confirm_delete().await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert!(!form.is_busy());
        assert!(!form.is_confirm_open());
        assert_eq!(
            h.errors(),
            vec!["Make sure you removed all categories using this billboard first.".to_string()]
        );
    }
}
