// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service detail page: logo, name and creation date of one service, plus the
// phones that have used it.

use dioxus::prelude::*;

use upn_catalog::Tile;
use upn_core::strings;
use upn_core::types::{Service, ServiceId};

use crate::Route;
use crate::pages::services_list::LogoTile;
use crate::services::app_services::AppServices;

#[component]
pub fn ServiceDetail(id: String) -> Element {
    let svc = use_context::<AppServices>();
    let palette = svc.palette();

    let usage_id = id.clone();
    let svc_fetch = svc.clone();
    let service = use_resource(move || {
        let svc = svc_fetch.clone();
        let id = ServiceId::new(id.clone());
        async move {
            let result = svc.fetch_service(&id).await;
            if let Err(ref e) = result {
                tracing::warn!(%id, error = %e, "failed to load service");
            }
            result
        }
    });

    let svc_usage = svc.clone();
    let phones = use_resource(move || {
        let svc = svc_usage.clone();
        let id = ServiceId::new(usage_id.clone());
        async move {
            let result = svc.service_phones(&id).await;
            if let Err(ref e) = result {
                tracing::warn!(%id, error = %e, "failed to load service usage");
            }
            result
        }
    });

    let used_by = match &*phones.read() {
        None => rsx! {},
        Some(Err(_)) => rsx! {
            p { style: "color: {palette.danger}; font-size: 14px;", "{strings::USAGE_FAILED}" }
        },
        Some(Ok(phones)) if phones.is_empty() => rsx! {
            p { style: "color: {palette.secondary_text}; font-size: 14px;", "{strings::USED_BY_EMPTY}" }
        },
        Some(Ok(phones)) => rsx! {
            ul { style: "list-style: none; padding: 0; margin: 0;",
                for phone in phones.iter() {
                    li { key: "{phone.id}",
                        style: "padding: 10px 0; border-bottom: 1px solid {palette.border}; font-size: 16px;",
                        "{phone.number}"
                    }
                }
            }
        },
    };

    let body = match &*service.read() {
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
        Some(Ok(service)) => {
            let bridge = svc.bridge();
            let tile = Tile::for_service(service, &*bridge);
            let added = created_label(service);
            let edit_to = Route::EditService { id: service.id.to_string() };

            rsx! {
                div { style: "display: flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 24px;",
                    LogoTile { tile: tile, palette: palette, size: "128px".to_string() }
                    h1 { style: "margin: 0; font-size: 24px; text-align: center; word-break: break-word;",
                        "{service.name}"
                    }
                    if let Some(added) = added {
                        p { style: "margin: 0; color: {palette.secondary_text}; font-size: 14px;",
                            "{strings::CREATED_AT}: {added}"
                        }
                    }
                    Link { to: edit_to,
                        style: "margin-top: 12px; padding: 10px 24px; border-radius: 8px; background: {palette.accent}; color: white; text-decoration: none;",
                        "{strings::EDIT}"
                    }
                }
                div { style: "margin-top: 32px;",
                    h2 { style: "font-size: 18px; margin: 0 0 8px;", "{strings::USED_BY_TITLE}" }
                    {used_by}
                }
            }
        }
    };

    rsx! {
        div { style: "padding: 16px;",
            Link { to: Route::ServicesList {},
                style: "text-decoration: none; color: {palette.accent}; font-size: 15px;",
                "‹ {strings::BACK}"
            }
            {body}
        }
    }
}

/// Creation date for display, or `None` when the backend value is unparseable.
fn created_label(service: &Service) -> Option<String> {
    service
        .created_at_utc()
        .map(|t| t.format("%d.%m.%Y %H:%M").to_string())
}
