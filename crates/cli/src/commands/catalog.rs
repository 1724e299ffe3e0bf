//! Catalog management commands.
//!
//! These drive the same form controllers the admin UIs use, against a
//! running admin service: validation happens locally, then the mutation
//! goes over the JSON API. Success and error toasts land on stdout.
//!
//! # Environment Variables
//!
//! - `MARQUEE_BASE_URL` - Base URL of the admin service
//!   (defaults to `http://localhost:4000`)

use std::io::{BufRead, Write};
use std::sync::Arc;

use thiserror::Error;
use url::Url;

use marquee_client::{
    ApiClient, ApiError, DeleteOutcome, FormController, Notifier, RestEndpoint, SubmitOutcome,
    ViewContext,
};
use marquee_core::{BillboardDraft, BillboardId, FormErrors, FormSchema, StoreId, StoreSettings};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The admin base URL could not be parsed.
    #[error("Invalid MARQUEE_BASE_URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The API endpoint could not be built.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The submitted fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] FormErrors),

    /// The admin service rejected the request.
    #[error("The admin service rejected the request")]
    RequestFailed,

    /// Reading the confirmation prompt failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Notifier that prints toasts to the terminal.
struct TerminalNotifier;

#[allow(clippy::print_stdout)]
impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        println!("error: {message}");
    }
}

/// View context for a one-shot command: there is no screen to reload.
struct TerminalView;

impl ViewContext for TerminalView {
    fn refresh(&self) {
        tracing::debug!("refresh requested (no-op in CLI)");
    }

    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigation requested (no-op in CLI)");
    }
}

fn api_client() -> Result<ApiClient, CatalogError> {
    dotenvy::dotenv().ok();
    let base =
        std::env::var("MARQUEE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());
    Ok(ApiClient::new(Url::parse(&base)?))
}

fn controller<S: FormSchema>(
    endpoint: RestEndpoint,
    initial: Option<S>,
) -> FormController<S, RestEndpoint> {
    FormController::new(
        endpoint,
        Arc::new(TerminalNotifier),
        Arc::new(TerminalView),
        initial,
    )
}

async fn submit<S: FormSchema>(
    mut form: FormController<S, RestEndpoint>,
    values: S,
) -> Result<(), CatalogError> {
    match form.submit(values).await {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid(errors) => Err(errors.into()),
        SubmitOutcome::Failed | SubmitOutcome::Ignored => Err(CatalogError::RequestFailed),
    }
}

async fn delete<S: FormSchema>(
    mut form: FormController<S, RestEndpoint>,
    prompt: &str,
    yes: bool,
) -> Result<(), CatalogError> {
    form.request_delete();

    if !yes && !confirmed(prompt)? {
        form.cancel_delete();
        tracing::info!("Aborted");
        return Ok(());
    }

    match form.confirm_delete().await {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::Failed | DeleteOutcome::Ignored => Err(CatalogError::RequestFailed),
    }
}

/// Ask for confirmation on stdin. Anything but `y`/`yes` declines.
fn confirmed(prompt: &str) -> Result<bool, CatalogError> {
    #[allow(clippy::print_stdout)]
    {
        print!("{prompt} [y/N] ");
    }
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Rename a store.
///
/// # Errors
///
/// Returns an error if validation fails or the admin service rejects the
/// request.
pub async fn update_store(id: i32, name: String) -> Result<(), CatalogError> {
    let endpoint = api_client()?.store(StoreId::new(id))?;
    let settings = StoreSettings { name };
    submit(controller(endpoint, Some(settings.clone())), settings).await
}

/// Delete a store, prompting for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the admin service rejects the request (for example
/// when billboards or categories still reference the store).
pub async fn delete_store(id: i32, yes: bool) -> Result<(), CatalogError> {
    let endpoint = api_client()?.store(StoreId::new(id))?;
    let form = controller(endpoint, Some(StoreSettings::default()));
    delete(form, &format!("Delete store {id}?"), yes).await
}

/// Create a billboard in a store.
///
/// # Errors
///
/// Returns an error if validation fails or the admin service rejects the
/// request.
pub async fn create_billboard(
    store: i32,
    label: String,
    image_url: String,
) -> Result<(), CatalogError> {
    let endpoint = api_client()?.billboards(StoreId::new(store))?;
    let draft = BillboardDraft { label, image_url };
    submit(controller(endpoint, None), draft).await
}

/// Update a billboard's label and image.
///
/// # Errors
///
/// Returns an error if validation fails or the admin service rejects the
/// request.
pub async fn update_billboard(
    store: i32,
    id: i32,
    label: String,
    image_url: String,
) -> Result<(), CatalogError> {
    let endpoint = api_client()?.billboard(StoreId::new(store), BillboardId::new(id))?;
    let draft = BillboardDraft { label, image_url };
    submit(controller(endpoint, Some(draft.clone())), draft).await
}

/// Delete a billboard, prompting for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the admin service rejects the request (for example
/// when categories still reference the billboard).
pub async fn delete_billboard(store: i32, id: i32, yes: bool) -> Result<(), CatalogError> {
    let endpoint = api_client()?.billboard(StoreId::new(store), BillboardId::new(id))?;
    let form = controller(endpoint, Some(BillboardDraft::default()));
    delete(form, &format!("Delete billboard {id}?"), yes).await
}
