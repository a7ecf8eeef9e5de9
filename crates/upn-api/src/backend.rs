// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend seam. Screens depend on this trait, not on the HTTP client, so they
// can be driven by in-memory fakes in tests.

use async_trait::async_trait;
use upn_core::error::ApiResult;
use upn_core::types::{Phone, Service, ServiceDraft, ServiceId, UsageRecord};

/// CRUD operations on the services collection, plus the read-only usage
/// and phone listings shown alongside a service.
#[async_trait]
pub trait ServicesBackend: Send + Sync {
    /// `GET /api/services`, in backend order.
    async fn list_services(&self) -> ApiResult<Vec<Service>>;

    /// `GET /api/services/{id}`.
    async fn get_service(&self, id: &ServiceId) -> ApiResult<Service>;

    /// `POST /api/services`.
    async fn create_service(&self, draft: &ServiceDraft) -> ApiResult<Service>;

    /// `PUT /api/services/{id}`.
    async fn update_service(&self, id: &ServiceId, draft: &ServiceDraft) -> ApiResult<Service>;

    /// `DELETE /api/services/{id}`. The response body is ignored.
    async fn delete_service(&self, id: &ServiceId) -> ApiResult<()>;

    /// `GET /api/usage`: every phone-used-service link.
    async fn list_usage(&self) -> ApiResult<Vec<UsageRecord>>;

    /// `GET /api/phones`.
    async fn list_phones(&self) -> ApiResult<Vec<Phone>>;
}
