// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod add_service;
pub mod edit_service;
pub mod service_detail;
pub mod service_form;
pub mod services_list;
