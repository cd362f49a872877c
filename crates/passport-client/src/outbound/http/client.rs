//! Reqwest-backed executor for the passport service.
//!
//! This adapter owns transport details only: URL resolution, credential
//! headers, body serialisation and failure mapping. Every public operation
//! absorbs its failures; callers get an [`ApiResult`] or an absent body.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::codec;
use crate::config::{ClientSettings, DeploymentVariant};
use crate::domain::ports::{ApiCallError, CredentialProbe, PassportApi};
use crate::domain::{
    AdminKey, ApiResult, CareInfo, CircularityInfo, CredentialStore, MaterialDetail,
    ProductSummary, SupplierDetail, SupplierSummary, SustainabilityInfo, TenantKey, resources,
};

/// Header carrying the administrative credential.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";
/// Header carrying a tenant-scoped credential.
pub const TENANT_KEY_HEADER: &str = "X-API-Key";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Errors raised while constructing a [`PassportClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured base endpoint is not an absolute URL.
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// Rejected value.
        url: String,
        /// URL parser diagnostic.
        message: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Which credential an outgoing request carries.
#[derive(Clone, Copy)]
enum CredentialScope<'a> {
    /// Stored admin key if any; header omitted otherwise.
    AdminIfPresent,
    /// Stored admin key; header sent empty when none is stored.
    AdminRequired,
    /// Candidate admin key under validation.
    Probe(&'a AdminKey),
    /// Tenant key supplied for this call only.
    Tenant(&'a TenantKey),
}

impl CredentialScope<'_> {
    const fn label(self) -> &'static str {
        match self {
            Self::AdminIfPresent | Self::AdminRequired => "admin",
            Self::Probe(_) => "probe",
            Self::Tenant(_) => "tenant",
        }
    }
}

/// One completed HTTP exchange.
struct Exchange {
    status: StatusCode,
    body: String,
}

/// Typed request executor bound to one passport service endpoint.
///
/// Clones share the HTTP connection pool and the credential store.
#[derive(Debug, Clone)]
pub struct PassportClient {
    http: Client,
    base_url: Url,
    credentials: Arc<CredentialStore>,
    variant: DeploymentVariant,
}

impl PassportClient {
    /// Build a client for `base_url` with a fresh credential store.
    ///
    /// The client applies no request timeout of its own and does not follow
    /// redirects, so the admin key never reaches another origin. A 3xx
    /// response is reported like any other non-success status.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute URL or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientBuildError> {
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;
        Self::with_client(http, base_url, Arc::new(CredentialStore::new()))
    }

    /// Build a client around a pre-configured HTTP client and a shared store.
    ///
    /// A hosting environment that enforces a timeout injects it here; an
    /// expired timeout then surfaces as a transport failure. The injected
    /// client's redirect policy is used as is.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute URL.
    pub fn with_client(
        http: Client,
        base_url: &str,
        credentials: Arc<CredentialStore>,
    ) -> Result<Self, ClientBuildError> {
        let parsed = Url::parse(base_url).map_err(|error| ClientBuildError::InvalidBaseUrl {
            url: base_url.to_owned(),
            message: error.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: base_url.to_owned(),
                message: "URL cannot carry resource paths".to_owned(),
            });
        }
        Ok(Self {
            http,
            base_url: parsed,
            credentials,
            variant: DeploymentVariant::default(),
        })
    }

    /// Build a client from loaded settings.
    ///
    /// The configured admin key is not validated here; call
    /// [`PassportClient::authenticate`] with it.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured base URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientBuildError> {
        Ok(Self::new(settings.base_url())?.with_variant(settings.variant()))
    }

    /// Select the deployment variant.
    #[must_use]
    pub fn with_variant(mut self, variant: DeploymentVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Deployment variant in effect.
    #[must_use]
    pub const fn variant(&self) -> DeploymentVariant {
        self.variant
    }

    /// Credential store shared by this client.
    #[must_use]
    pub const fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    /// Validate `key` against the admin probe endpoint and retain it on
    /// success. Any failure leaves the client unauthenticated.
    pub async fn authenticate(&self, key: impl Into<AdminKey>) -> bool {
        self.credentials.authenticate(key.into(), self).await
    }

    /// Forget the administrative key. Idempotent.
    pub async fn logout(&self) {
        self.credentials.logout().await;
    }

    /// Whether an administrative key is retained.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// GET `path` and decode the body into `T`.
    ///
    /// Non-2xx statuses, transport errors and undecodable bodies (including
    /// an empty 2xx body) all become [`ApiResult::Failure`].
    pub async fn get_typed<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        match self.fetch_typed(path).await {
            Ok(value) => ApiResult::Success(value),
            Err(error) => {
                warn!(
                    path,
                    transport = error.is_transport(),
                    %error,
                    "typed passport request failed"
                );
                ApiResult::failure(error.to_string())
            }
        }
    }

    /// GET `path` and return the body whatever the status.
    pub async fn get_raw(&self, path: &str) -> Option<String> {
        self.text_exchange(Method::GET, path, CredentialScope::AdminIfPresent, None)
            .await
    }

    /// GET `path` with a tenant key instead of the admin key.
    ///
    /// The admin-only deployment refuses these reads without touching the
    /// network.
    pub async fn get_with_tenant_key(&self, path: &str, tenant_key: &TenantKey) -> Option<String> {
        if !self.variant.allows_tenant_reads() {
            warn!(path, "tenant-scoped read refused in admin-only deployment");
            return None;
        }
        self.text_exchange(Method::GET, path, CredentialScope::Tenant(tenant_key), None)
            .await
    }

    /// POST `body` as JSON and return the response body.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Option<String> {
        self.send_json(Method::POST, path, body).await
    }

    /// PUT `body` as JSON and return the response body.
    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Option<String> {
        self.send_json(Method::PUT, path, body).await
    }

    /// DELETE `path` and return the response body.
    pub async fn delete_resource(&self, path: &str) -> Option<String> {
        self.text_exchange(Method::DELETE, path, CredentialScope::AdminRequired, None)
            .await
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiCallError> {
        let exchange = self
            .exchange(Method::GET, path, CredentialScope::AdminIfPresent, None)
            .await?;
        if !exchange.status.is_success() {
            return Err(ApiCallError::status(
                exchange.status.as_u16(),
                exchange.body,
            ));
        }
        codec::decode(&exchange.body)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Option<String> {
        let payload = match serde_json::to_vec(body) {
            Ok(bytes) => bytes,
            Err(source) => {
                let error = ApiCallError::encode(source.to_string());
                warn!(%method, path, %error, "passport request not sent");
                return None;
            }
        };
        self.text_exchange(method, path, CredentialScope::AdminRequired, Some(payload))
            .await
    }

    async fn text_exchange(
        &self,
        method: Method,
        path: &str,
        scope: CredentialScope<'_>,
        body: Option<Vec<u8>>,
    ) -> Option<String> {
        match self.exchange(method.clone(), path, scope, body).await {
            Ok(exchange) => {
                if !exchange.status.is_success() {
                    debug!(
                        %method,
                        path,
                        status = exchange.status.as_u16(),
                        "passing non-success body through"
                    );
                }
                Some(exchange.body)
            }
            Err(error) => {
                warn!(
                    %method,
                    path,
                    transport = error.is_transport(),
                    %error,
                    "passport request failed"
                );
                None
            }
        }
    }

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        scope: CredentialScope<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<Exchange, ApiCallError> {
        let url = self.resolve(path)?;
        debug!(%method, path, scope = scope.label(), "sending passport request");

        let mut request = self
            .apply_scope(self.http.request(method, url), scope)
            .header(ACCEPT, JSON_MEDIA_TYPE);
        if let Some(payload) = body {
            request = request.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(payload);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;
        Ok(Exchange { status, body: text })
    }

    fn apply_scope(&self, request: RequestBuilder, scope: CredentialScope<'_>) -> RequestBuilder {
        match scope {
            CredentialScope::AdminIfPresent => match self.credentials.current() {
                Some(key) => request.header(ADMIN_KEY_HEADER, key.expose()),
                None => request,
            },
            CredentialScope::AdminRequired => {
                let key = self.credentials.current();
                request.header(ADMIN_KEY_HEADER, key.as_ref().map_or("", AdminKey::expose))
            }
            CredentialScope::Probe(key) => request.header(ADMIN_KEY_HEADER, key.expose()),
            CredentialScope::Tenant(key) => request.header(TENANT_KEY_HEADER, key.expose()),
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiCallError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let relative = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{relative}"))
            .map_err(|error| ApiCallError::invalid_path(path, error.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiCallError {
    if error.is_timeout() {
        ApiCallError::timeout(error.to_string())
    } else {
        ApiCallError::transport(error.to_string())
    }
}

#[async_trait]
impl CredentialProbe for PassportClient {
    async fn probe(&self, key: &AdminKey) -> bool {
        match self
            .exchange(
                Method::GET,
                resources::ADMIN_STATS,
                CredentialScope::Probe(key),
                None,
            )
            .await
        {
            Ok(exchange) => exchange.status.is_success(),
            Err(error) => {
                warn!(%error, "administrative probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl PassportApi for PassportClient {
    async fn authenticate(&self, key: AdminKey) -> bool {
        Self::authenticate(self, key).await
    }

    async fn logout(&self) {
        Self::logout(self).await;
    }

    fn is_authenticated(&self) -> bool {
        Self::is_authenticated(self)
    }

    async fn get_raw(&self, path: &str) -> Option<String> {
        Self::get_raw(self, path).await
    }

    async fn get_with_tenant_key(&self, path: &str, tenant_key: &TenantKey) -> Option<String> {
        Self::get_with_tenant_key(self, path, tenant_key).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Option<String> {
        Self::post_json(self, path, body).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Option<String> {
        Self::put_json(self, path, body).await
    }

    async fn delete_resource(&self, path: &str) -> Option<String> {
        Self::delete_resource(self, path).await
    }

    async fn products(&self) -> ApiResult<Vec<ProductSummary>> {
        self.get_typed(resources::PRODUCTS).await
    }

    async fn product(&self, id: i64) -> ApiResult<ProductSummary> {
        self.get_typed(&resources::product(id)).await
    }

    async fn materials(&self) -> ApiResult<Vec<MaterialDetail>> {
        self.get_typed(resources::MATERIALS).await
    }

    async fn material(&self, id: i64) -> ApiResult<MaterialDetail> {
        self.get_typed(&resources::material(id)).await
    }

    async fn suppliers(&self) -> ApiResult<Vec<SupplierSummary>> {
        self.get_typed(resources::SUPPLIERS).await
    }

    async fn supplier(&self, id: i64) -> ApiResult<SupplierDetail> {
        self.get_typed(&resources::supplier(id)).await
    }

    async fn care_info(&self, product_id: i64) -> ApiResult<CareInfo> {
        self.get_typed(&resources::product_care(product_id)).await
    }

    async fn circularity_info(&self, product_id: i64) -> ApiResult<CircularityInfo> {
        self.get_typed(&resources::product_circularity(product_id))
            .await
    }

    async fn sustainability_info(&self, product_id: i64) -> ApiResult<SustainabilityInfo> {
        self.get_typed(&resources::product_sustainability(product_id))
            .await
    }
}
