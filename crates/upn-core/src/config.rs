// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use crate::error::{Result, UpnError};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "UPN_BACKEND_URL";

/// Runtime settings, read from the process environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the UPN backend, without trailing slash
    /// (e.g. `https://upn.example.com`).
    pub backend_url: String,
}

impl AppConfig {
    /// Build a config from an explicit base URL.
    pub fn new(backend_url: impl AsRef<str>) -> Result<Self> {
        let trimmed = backend_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(UpnError::Config(format!("{BACKEND_URL_VAR} is empty")));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(UpnError::Config(format!(
                "{BACKEND_URL_VAR} must be an http(s) URL, got {trimmed:?}"
            )));
        }
        Ok(Self {
            backend_url: trimmed.to_string(),
        })
    }

    /// Load from the process environment.
    ///
    /// Callers that want `.env` support load it first (the binary does).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(BACKEND_URL_VAR) {
            Some(url) => Self::new(url),
            None => Err(UpnError::Config(format!("{BACKEND_URL_VAR} is not set"))),
        }
    }

    /// Absolute URL for an API path such as `/api/services`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
