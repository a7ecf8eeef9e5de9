// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Name/logo form shared by the add and edit pages.

use dioxus::prelude::*;

use upn_bridge::traits::ImageRenderer;
use upn_catalog::Tile;
use upn_catalog::render::placeholder_initial;
use upn_core::error::UpnError;
use upn_core::strings;
use upn_core::types::{ServiceDraft, ServiceId};

use crate::Route;
use crate::pages::services_list::LogoTile;
use crate::services::app_services::AppServices;

/// Edits `initial` and saves it: an update when `target` is set, a create
/// otherwise. Returns to the list once the backend accepts the draft.
#[component]
pub fn ServiceForm(
    title: &'static str,
    initial: ServiceDraft,
    target: Option<ServiceId>,
) -> Element {
    let svc = use_context::<AppServices>();
    let palette = svc.palette();
    let nav = navigator();

    let mut name = use_signal(|| initial.name.clone());
    let mut logo = use_signal(|| initial.logo_base64.clone());
    let mut saving = use_signal(|| false);
    let mut status_msg = use_signal(|| Option::<String>::None);

    let bridge = svc.bridge();
    let rendered = use_memo(move || {
        logo.read()
            .as_deref()
            .and_then(|payload| bridge.render_logo(payload).ok())
    });
    let tile = match rendered() {
        Some(rendered) => Tile::Logo(rendered),
        None => Tile::Placeholder(placeholder_initial(&name.read())),
    };
    let has_logo = logo.read().is_some();

    rsx! {
        div { style: "padding: 16px; max-width: 500px; margin: 0 auto;",
            Link { to: Route::ServicesList {},
                style: "text-decoration: none; color: {palette.accent}; font-size: 15px;",
                "‹ {strings::BACK}"
            }
            h1 { style: "font-size: 24px;", "{title}" }

            div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
                LogoTile { tile: tile, palette: palette, size: "96px".to_string() }
                button {
                    style: "padding: 8px 12px; border-radius: 8px; border: 1px solid {palette.border}; background: transparent; color: {palette.accent};",
                    onclick: {
                        let svc = svc.clone();
                        move |_| match svc.import_logo() {
                            Ok(Some(payload)) => {
                                logo.set(Some(payload));
                                status_msg.set(None);
                            }
                            Ok(None) => {}
                            Err(UpnError::Image(reason)) => {
                                tracing::warn!(%reason, "picked file is not an image");
                                status_msg.set(Some(strings::LOGO_INVALID.into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "logo picker failed");
                                status_msg.set(Some(e.to_string()));
                            }
                        }
                    },
                    "{strings::CHOOSE_LOGO}"
                }
                if has_logo {
                    button {
                        style: "padding: 8px 12px; border-radius: 8px; border: 1px solid {palette.border}; background: transparent; color: {palette.danger};",
                        onclick: move |_| logo.set(None),
                        "{strings::REMOVE_LOGO}"
                    }
                }
            }

            div { style: "margin-bottom: 24px;",
                label { style: "display: block; font-size: 16px; font-weight: bold; margin-bottom: 8px;",
                    "{strings::NAME_LABEL}"
                }
                input {
                    r#type: "text",
                    placeholder: "{strings::NAME_PLACEHOLDER}",
                    value: "{name}",
                    style: "width: 100%; padding: 14px; font-size: 18px; border: 2px solid {palette.border}; border-radius: 12px; box-sizing: border-box; background: transparent; color: {palette.text};",
                    oninput: move |evt| name.set(evt.value().to_string()),
                }
            }

            button {
                style: "width: 100%; padding: 16px; border-radius: 12px; border: none; background: {palette.accent}; color: white; font-size: 18px; font-weight: bold;",
                disabled: *saving.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let draft = ServiceDraft {
                            name: name.read().clone(),
                            logo_base64: logo.read().clone(),
                        };
                        let target = target.clone();
                        let svc = svc.clone();

                        saving.set(true);
                        status_msg.set(None);

                        spawn(async move {
                            let result = svc.save_service(target.as_ref(), draft).await;
                            saving.set(false);
                            match result {
                                Ok(_) => {
                                    nav.push(Route::ServicesList {});
                                }
                                Err(UpnError::Validation(_)) => {
                                    status_msg.set(Some(strings::NAME_REQUIRED.into()));
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to save service");
                                    status_msg.set(Some(strings::SAVE_FAILED.into()));
                                }
                            }
                        });
                    }
                },
                "{strings::SAVE}"
            }

            if let Some(ref msg) = *status_msg.read() {
                p { style: "margin-top: 16px; text-align: center; color: {palette.danger};",
                    "{msg}"
                }
            }
        }
    }
}
