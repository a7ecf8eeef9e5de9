// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the UPN services catalogue.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UpnError};

/// Opaque backend identifier of a service (a Mongo ObjectId in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A place or brand as returned by `GET /api/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// The backend serialises by alias, so `_id` shows up on the wire too.
    #[serde(alias = "_id")]
    pub id: ServiceId,
    pub name: String,
    /// Embedded logo: bare base64, or a `data:<mime>;base64,` URI.
    #[serde(default)]
    pub logo_base64: Option<String>,
    /// Creation timestamp exactly as the backend sent it.
    #[serde(default)]
    pub created_at: String,
}

impl Service {
    /// Logo payload, treating an empty string the same as no logo.
    pub fn logo_payload(&self) -> Option<&str> {
        self.logo_base64
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse `created_at`.
    ///
    /// The backend writes naive UTC timestamps (`2025-03-01T10:15:30.123456`);
    /// RFC 3339 values with an offset are accepted as well.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Request body for creating or updating a service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub logo_base64: Option<String>,
}

impl ServiceDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_base64: None,
        }
    }

    pub fn with_logo(mut self, logo_base64: impl Into<String>) -> Self {
        self.logo_base64 = Some(logo_base64.into());
        self
    }

    /// Pre-fill a draft from an existing service (edit flow).
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            logo_base64: service.logo_payload().map(str::to_string),
        }
    }

    /// Trim the name and reject blank ones before anything is sent.
    pub fn validated(mut self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UpnError::Validation("service name must not be empty".into()));
        }
        self.name = name.to_string();
        if self.logo_base64.as_deref().is_some_and(|l| l.trim().is_empty()) {
            self.logo_base64 = None;
        }
        Ok(self)
    }
}

/// A phone number registered with the backend (`GET /api/phones`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(alias = "_id")]
    pub id: String,
    /// Normalised by the backend (`+7 999 888 77 66`).
    pub number: String,
    #[serde(default)]
    pub operator_id: String,
    #[serde(default)]
    pub created_at: String,
}

/// One "phone used service" link (`GET /api/usage`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub phone_id: String,
    pub service_id: ServiceId,
    #[serde(default)]
    pub used_at: String,
}

/// Navigation targets reachable from the services screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    ServicesList,
    ServiceDetail(ServiceId),
    EditService(ServiceId),
    AddService,
}

impl AppRoute {
    /// Router path for this destination.
    pub fn path(&self) -> String {
        match self {
            Self::ServicesList => "/".to_string(),
            Self::ServiceDetail(id) => format!("/service/{id}"),
            Self::EditService(id) => format!("/edit-service/{id}"),
            Self::AddService => "/add-service".to_string(),
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Platform colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Parse `light` / `dark` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
