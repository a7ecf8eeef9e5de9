// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edit service page: fetches the current values, then hands them to the form.

use dioxus::prelude::*;

use upn_core::strings;
use upn_core::types::{ServiceDraft, ServiceId};

use crate::pages::service_form::ServiceForm;
use crate::services::app_services::AppServices;

#[component]
pub fn EditService(id: String) -> Element {
    let svc = use_context::<AppServices>();
    let palette = svc.palette();

    let current = use_resource(move || {
        let svc = svc.clone();
        let id = ServiceId::new(id.clone());
        async move {
            let result = svc.fetch_service(&id).await;
            if let Err(ref e) = result {
                tracing::warn!(%id, error = %e, "failed to load service for editing");
            }
            result
        }
    });

    match &*current.read() {
        None => rsx! {
            p { style: "text-align: center; color: {palette.secondary_text}; margin: 48px 0;",
                "{strings::LOADING}"
            }
        },
        Some(Err(_)) => rsx! {
            p { style: "text-align: center; color: {palette.danger}; margin: 48px 0;",
                "{strings::LOAD_FAILED}"
            }
        },
        Some(Ok(service)) => rsx! {
            ServiceForm {
                key: "{service.id}",
                title: strings::EDIT_SERVICE_TITLE,
                initial: ServiceDraft::from_service(service),
                target: service.id.clone(),
            }
        },
    }
}
