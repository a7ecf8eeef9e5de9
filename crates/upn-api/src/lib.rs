// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UPN: access to the `/api/services` REST surface.

pub mod backend;
pub mod client;

pub use backend::ServicesBackend;
pub use client::ServicesClient;
