// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Add service page.

use dioxus::prelude::*;

use upn_core::strings;
use upn_core::types::ServiceDraft;

use crate::pages::service_form::ServiceForm;

#[component]
pub fn AddService() -> Element {
    rsx! {
        ServiceForm {
            title: strings::ADD_SERVICE_TITLE,
            initial: ServiceDraft::default(),
        }
    }
}
