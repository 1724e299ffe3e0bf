//! HTTP transport for the admin JSON API.

use url::Url;

use marquee_core::{BillboardId, FormSchema, StoreId};

/// Errors from the admin API transport.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response not read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The endpoint has no saved resource to address (create-mode form
    /// asked to update or delete).
    #[error("no saved entity to address")]
    NoResource,

    /// A URL could not be built from the configured base.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Transport addressing one entity resource.
///
/// `update` carries PATCH semantics against the resource; `create` posts to
/// the enclosing collection. Implementations do not retry.
#[allow(async_fn_in_trait)]
pub trait EntityEndpoint<S: FormSchema> {
    /// Create a new entity from the payload.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn create(&self, values: &S) -> Result<(), ApiError>;

    /// Overwrite the entity's editable fields with the payload.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn update(&self, values: &S) -> Result<(), ApiError>;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn delete(&self) -> Result<(), ApiError>;
}

/// Client for the admin JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the admin service at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Endpoint for the store collection (create-mode store form).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn stores(&self) -> Result<RestEndpoint, ApiError> {
        Ok(RestEndpoint {
            http: self.http.clone(),
            collection: self.base_url.join("api/stores")?,
            resource: None,
        })
    }

    /// Endpoint for one store resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn store(&self, store_id: StoreId) -> Result<RestEndpoint, ApiError> {
        Ok(RestEndpoint {
            http: self.http.clone(),
            collection: self.base_url.join("api/stores")?,
            resource: Some(self.base_url.join(&format!("api/stores/{store_id}"))?),
        })
    }

    /// Endpoint for a store's billboard collection (create-mode form).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn billboards(&self, store_id: StoreId) -> Result<RestEndpoint, ApiError> {
        Ok(RestEndpoint {
            http: self.http.clone(),
            collection: self
                .base_url
                .join(&format!("api/stores/{store_id}/billboards"))?,
            resource: None,
        })
    }

    /// Endpoint for one billboard resource (edit-mode form).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn billboard(
        &self,
        store_id: StoreId,
        billboard_id: BillboardId,
    ) -> Result<RestEndpoint, ApiError> {
        Ok(RestEndpoint {
            http: self.http.clone(),
            collection: self
                .base_url
                .join(&format!("api/stores/{store_id}/billboards"))?,
            resource: Some(self.base_url.join(&format!(
                "api/stores/{store_id}/billboards/{billboard_id}"
            ))?),
        })
    }
}

/// REST endpoint over a collection URL and, for saved entities, a resource
/// URL.
#[derive(Debug, Clone)]
pub struct RestEndpoint {
    http: reqwest::Client,
    collection: Url,
    resource: Option<Url>,
}

impl RestEndpoint {
    fn resource(&self) -> Result<&Url, ApiError> {
        self.resource.as_ref().ok_or(ApiError::NoResource)
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

impl<S: FormSchema> EntityEndpoint<S> for RestEndpoint {
    async fn create(&self, values: &S) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.collection.clone())
            .json(values)
            .send()
            .await?;
        check_status(&response)
    }

    async fn update(&self, values: &S) -> Result<(), ApiError> {
        let response = self
            .http
            .patch(self.resource()?.clone())
            .json(values)
            .send()
            .await?;
        check_status(&response)
    }

    async fn delete(&self) -> Result<(), ApiError> {
        let response = self.http.delete(self.resource()?.clone()).send().await?;
        check_status(&response)
    }
}
