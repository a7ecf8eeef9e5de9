// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `reqwest` implementation of `ServicesBackend`.
//
// Every call is a single request: no retries, no timeouts, no caching. Any
// non-2xx status is a failure carrying the code; transport failures and
// malformed bodies are reported separately so callers can log them apart.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use upn_core::AppConfig;
use upn_core::error::{ApiError, ApiResult, Result, UpnError};
use upn_core::types::{Phone, Service, ServiceDraft, ServiceId, UsageRecord};

use crate::backend::ServicesBackend;

/// HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct ServicesClient {
    http: Client,
    base: Url,
}

impl ServicesClient {
    /// Create a client for the configured backend.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base = Url::parse(&config.backend_url)
            .map_err(|e| UpnError::Config(format!("invalid backend URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(UpnError::Config(format!(
                "backend URL cannot carry a path: {base}"
            )));
        }
        let http = Client::builder()
            .build()
            .map_err(|e| UpnError::Config(format!("HTTP client init failed: {e}")))?;
        Ok(Self { http, base })
    }

    /// `{base}/api/{segments..}`, each segment percent-encoded on its own.
    fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    /// `{base}/api/services[/{id}]`.
    fn services_url(&self, id: Option<&ServiceId>) -> Url {
        match id {
            Some(id) => self.api_url(&["services", id.as_str()]),
            None => self.api_url(&["services"]),
        }
    }

    /// Send and classify the response status.
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "backend unreachable");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), url = %response.url(), "backend rejected request");
            return Err(ApiError::Http(status.as_u16()));
        }
        Ok(response)
    }

    /// Read the whole body, then parse it, so a dropped connection and a bad
    /// payload surface as different errors.
    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ServicesBackend for ServicesClient {
    #[instrument(skip(self))]
    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        let response = self.send(self.http.get(self.services_url(None))).await?;
        let services: Vec<Service> = Self::decode(response).await?;
        debug!(count = services.len(), "services fetched");
        Ok(services)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_service(&self, id: &ServiceId) -> ApiResult<Service> {
        let response = self.send(self.http.get(self.services_url(Some(id)))).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_service(&self, draft: &ServiceDraft) -> ApiResult<Service> {
        let request = self.http.post(self.services_url(None)).json(draft);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, draft), fields(id = %id))]
    async fn update_service(&self, id: &ServiceId, draft: &ServiceDraft) -> ApiResult<Service> {
        let request = self.http.put(self.services_url(Some(id))).json(draft);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_service(&self, id: &ServiceId) -> ApiResult<()> {
        self.send(self.http.delete(self.services_url(Some(id))))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    async fn list_usage(&self) -> ApiResult<Vec<UsageRecord>> {
        let response = self.send(self.http.get(self.api_url(&["usage"]))).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn list_phones(&self) -> ApiResult<Vec<Phone>> {
        let response = self.send(self.http.get(self.api_url(&["phones"]))).await?;
        Self::decode(response).await
    }
}
