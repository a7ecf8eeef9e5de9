// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UPN: services catalogue client.
//
// Entry point. Loads `.env`, initialises logging and backend services, and
// launches the Dioxus UI.

mod pages;
mod services;

use dioxus::prelude::*;

use pages::add_service::AddService;
use pages::edit_service::EditService;
use pages::service_detail::ServiceDetail;
use pages::services_list::ServicesList;
use upn_core::types::AppRoute;

use services::app_services::AppServices;

fn main() {
    // A missing .env is fine; the variables may come from the real environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("UPN starting");

    let services = match AppServices::init() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "cannot start without a backend");
            eprintln!("upn: {e}");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(services)
        .launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    ServicesList {},
    #[route("/service/:id")]
    ServiceDetail { id: String },
    #[route("/edit-service/:id")]
    EditService { id: String },
    #[route("/add-service")]
    AddService {},
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::ServicesList => Route::ServicesList {},
            AppRoute::ServiceDetail(id) => Route::ServiceDetail { id: id.0 },
            AppRoute::EditService(id) => Route::EditService { id: id.0 },
            AppRoute::AddService => Route::AddService {},
        }
    }
}

/// Root component.
fn app() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Full-height page frame painted with the platform palette.
#[component]
fn AppLayout() -> Element {
    let palette = use_context::<AppServices>().palette();

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: {palette.background}; color: {palette.text};",

            div { class: "page-content",
                style: "flex: 1; overflow-y: auto;",
                Outlet::<Route> {}
            }
        }
    }
}
