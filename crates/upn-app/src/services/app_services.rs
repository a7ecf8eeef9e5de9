// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: backend client, platform bridge and screen
// construction, shared with every page through the Dioxus context.

use std::sync::Arc;

use tracing::{info, instrument};
use upn_api::{ServicesBackend, ServicesClient};
use upn_bridge::logo::encode_logo;
use upn_bridge::platform_bridge;
use upn_bridge::traits::{LogoPicker, PlatformBridge, Theme};
use upn_catalog::{Palette, ServicesListScreen, phones_for_service};
use upn_core::error::{ApiResult, Result};
use upn_core::types::{Phone, Service, ServiceDraft, ServiceId};
use upn_core::AppConfig;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    backend: Arc<dyn ServicesBackend>,
    bridge: Arc<dyn PlatformBridge>,
}

impl AppServices {
    /// Read the configuration and build the backend client and bridge.
    /// Call once at startup, after `.env` has been loaded.
    pub fn init() -> Result<Self> {
        let config = AppConfig::from_env()?;
        info!(backend = %config.backend_url, "initialising app services");

        let client = ServicesClient::new(&config)?;
        let bridge: Arc<dyn PlatformBridge> = Arc::from(platform_bridge());
        info!(platform = bridge.platform_name(), "platform bridge ready");

        Ok(Self::with_parts(Arc::new(client), bridge))
    }

    pub fn with_parts(
        backend: Arc<dyn ServicesBackend>,
        bridge: Arc<dyn PlatformBridge>,
    ) -> Self {
        Self { backend, bridge }
    }

    pub fn bridge(&self) -> Arc<dyn PlatformBridge> {
        Arc::clone(&self.bridge)
    }

    /// Colours for the current platform appearance.
    pub fn palette(&self) -> Palette {
        Palette::for_appearance(self.bridge.appearance())
    }

    // -- Services ----------------------------------------------------------

    /// A fresh list screen over the shared backend.
    pub fn list_screen(&self) -> ServicesListScreen {
        ServicesListScreen::new(Arc::clone(&self.backend))
    }

    pub async fn fetch_service(&self, id: &ServiceId) -> ApiResult<Service> {
        self.backend.get_service(id).await
    }

    /// Validate `draft`, then create it (`id == None`) or update service `id`.
    #[instrument(skip_all, fields(id = ?id))]
    pub async fn save_service(
        &self,
        id: Option<&ServiceId>,
        draft: ServiceDraft,
    ) -> Result<Service> {
        let draft = draft.validated()?;
        let saved = match id {
            Some(id) => self.backend.update_service(id, &draft).await?,
            None => self.backend.create_service(&draft).await?,
        };
        info!(id = %saved.id, name = %saved.name, "service saved");
        Ok(saved)
    }

    /// Phones that have used service `id`, fetched from the usage and phone
    /// listings together.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn service_phones(&self, id: &ServiceId) -> ApiResult<Vec<Phone>> {
        let (usage, phones) = tokio::join!(self.backend.list_usage(), self.backend.list_phones());
        Ok(phones_for_service(id, &usage?, &phones?))
    }

    // -- Logos -------------------------------------------------------------

    /// Ask the user for an image file and return it as a logo payload.
    /// `Ok(None)` when the picker was dismissed.
    pub fn import_logo(&self) -> Result<Option<String>> {
        match self.bridge.pick_logo()? {
            Some(bytes) => logo_payload(&bytes).map(Some),
            None => Ok(None),
        }
    }
}

/// Base64 payload for a picked file; fails unless the bytes decode as an image.
fn logo_payload(bytes: &[u8]) -> Result<String> {
    let payload = encode_logo(bytes)?;
    info!(bytes = bytes.len(), "logo imported");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use upn_bridge::stub::StubBridge;
    use upn_core::error::{ApiError, UpnError};
    use upn_core::types::UsageRecord;

    /// Records create/update calls and echoes the draft back.
    #[derive(Default)]
    struct EchoBackend {
        calls: Mutex<Vec<String>>,
        usage: Vec<UsageRecord>,
        phones: Vec<Phone>,
        usage_status: Option<u16>,
    }

    fn echo(id: &str, draft: &ServiceDraft) -> Service {
        Service {
            id: ServiceId::from(id),
            name: draft.name.clone(),
            logo_base64: draft.logo_base64.clone(),
            created_at: String::new(),
        }
    }

    #[async_trait]
    impl ServicesBackend for EchoBackend {
        async fn list_services(&self) -> ApiResult<Vec<Service>> {
            Ok(vec![])
        }

        async fn get_service(&self, _id: &ServiceId) -> ApiResult<Service> {
            Err(ApiError::Http(404))
        }

        async fn create_service(&self, draft: &ServiceDraft) -> ApiResult<Service> {
            self.calls.lock().unwrap().push(format!("create {}", draft.name));
            Ok(echo("new", draft))
        }

        async fn update_service(&self, id: &ServiceId, draft: &ServiceDraft) -> ApiResult<Service> {
            self.calls.lock().unwrap().push(format!("update {id} {}", draft.name));
            Ok(echo(id.as_str(), draft))
        }

        async fn delete_service(&self, _id: &ServiceId) -> ApiResult<()> {
            Ok(())
        }

        async fn list_usage(&self) -> ApiResult<Vec<UsageRecord>> {
            match self.usage_status {
                Some(status) => Err(ApiError::Http(status)),
                None => Ok(self.usage.clone()),
            }
        }

        async fn list_phones(&self) -> ApiResult<Vec<Phone>> {
            Ok(self.phones.clone())
        }
    }

    fn services() -> (AppServices, Arc<EchoBackend>) {
        let backend = Arc::new(EchoBackend::default());
        (
            AppServices::with_parts(backend.clone(), Arc::new(StubBridge)),
            backend,
        )
    }

    #[tokio::test]
    async fn save_without_id_creates() {
        let (svc, backend) = services();
        let saved = svc
            .save_service(None, ServiceDraft::new("  Яндекс  "))
            .await
            .unwrap();
        assert_eq!(saved.name, "Яндекс");
        assert_eq!(*backend.calls.lock().unwrap(), ["create Яндекс"]);
    }

    #[tokio::test]
    async fn save_with_id_updates() {
        let (svc, backend) = services();
        let id = ServiceId::from("42");
        svc.save_service(Some(&id), ServiceDraft::new("acme"))
            .await
            .unwrap();
        assert_eq!(*backend.calls.lock().unwrap(), ["update 42 acme"]);
    }

    #[tokio::test]
    async fn blank_name_never_reaches_backend() {
        let (svc, backend) = services();
        let err = svc
            .save_service(None, ServiceDraft::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, UpnError::Validation(_)));
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    fn usage_backend(usage_status: Option<u16>) -> AppServices {
        let phone = |id: &str, number: &str| Phone {
            id: id.into(),
            number: number.into(),
            operator_id: String::new(),
            created_at: String::new(),
        };
        let used = |phone_id: &str, service_id: &str| UsageRecord {
            id: format!("u-{phone_id}"),
            phone_id: phone_id.into(),
            service_id: ServiceId::from(service_id),
            used_at: String::new(),
        };
        let backend = EchoBackend {
            usage: vec![used("p2", "s1"), used("p1", "s2")],
            phones: vec![phone("p1", "+7 900 000 00 01"), phone("p2", "+7 900 000 00 02")],
            usage_status,
            ..Default::default()
        };
        AppServices::with_parts(Arc::new(backend), Arc::new(StubBridge))
    }

    #[tokio::test]
    async fn service_phones_joins_usage_to_phones() {
        let svc = usage_backend(None);
        let phones = svc.service_phones(&ServiceId::from("s1")).await.unwrap();
        let numbers: Vec<&str> = phones.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, ["+7 900 000 00 02"]);
    }

    #[tokio::test]
    async fn service_phones_reports_usage_failure() {
        let svc = usage_backend(Some(503));
        assert_eq!(
            svc.service_phones(&ServiceId::from("s1")).await,
            Err(ApiError::Http(503))
        );
    }

    #[test]
    fn non_image_file_is_not_a_logo() {
        assert!(matches!(
            logo_payload(b"%PDF-1.7 not an image"),
            Err(UpnError::Image(_))
        ));
    }

    #[test]
    fn stub_bridge_cannot_pick_logos() {
        let (svc, _) = services();
        assert!(matches!(
            svc.import_logo(),
            Err(UpnError::PlatformUnavailable)
        ));
    }

    #[test]
    fn stub_bridge_gives_light_palette() {
        let (svc, _) = services();
        assert_eq!(svc.palette(), Palette::LIGHT);
    }
}
