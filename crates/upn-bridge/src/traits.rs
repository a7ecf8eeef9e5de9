// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use upn_core::error::Result;
use upn_core::types::{AppRoute, Appearance};

/// Unified bridge that groups the capabilities a screen needs from the OS.
///
/// Navigation is not part of it: the router belongs to the UI
/// framework, not the platform, and is handed to screens separately.
pub trait PlatformBridge:
    ImageRenderer + ConfirmationPrompt + LogoPicker + Theme + Send + Sync
{
    /// Human-readable platform name (e.g. "Desktop", "iOS").
    fn platform_name(&self) -> &str;
}

/// Turn an embedded logo payload into something the UI can draw.
pub trait ImageRenderer {
    /// Decode `payload` (bare base64 or a `data:` URI).
    ///
    /// Fails with `UpnError::Image` when the payload is not a decodable
    /// raster image; callers fall back to the placeholder tile.
    fn render_logo(&self, payload: &str) -> Result<RenderedLogo>;
}

/// Modal alert/confirmation dialogs.
pub trait ConfirmationPrompt {
    /// Show a modal with the given buttons and block until the user answers.
    ///
    /// Returns the index into `buttons` of the pressed button, or `None` if
    /// the dialog was dismissed without choosing.
    fn present(&self, title: &str, message: &str, buttons: &[PromptButton])
    -> Result<Option<usize>>;

    /// Show an informational alert with a single acknowledge button.
    fn alert(&self, title: &str, message: &str) -> Result<()>;
}

/// Let the user choose an image file for a logo.
pub trait LogoPicker {
    /// Open the platform file chooser and read the chosen file.
    ///
    /// `Ok(None)` when the user closed the chooser without picking.
    fn pick_logo(&self) -> Result<Option<Vec<u8>>>;
}

/// Current platform colour scheme.
pub trait Theme {
    fn appearance(&self) -> Appearance;
}

/// Route changes requested by screen logic.
pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

/// How a prompt button is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Dismisses the prompt; at most one per prompt.
    Cancel,
    Default,
    /// Irreversible action, drawn in red where the platform supports it.
    Destructive,
}

/// One button of a `ConfirmationPrompt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptButton {
    pub label: String,
    pub role: ButtonRole,
}

impl PromptButton {
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Cancel,
        }
    }

    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Default,
        }
    }

    pub fn destructive(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Destructive,
        }
    }
}

/// A decoded logo ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLogo {
    /// MIME type sniffed from the image bytes.
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
    /// `data:` URI usable directly as an `<img src>`.
    pub data_uri: String,
}
