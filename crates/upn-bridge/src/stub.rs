// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for targets without native dialog bindings (iOS/Android today).
//
// Logo decoding is pure Rust and works everywhere; prompts and the file
// chooser return `PlatformUnavailable`.

use upn_core::error::{Result, UpnError};
use upn_core::types::Appearance;

use crate::logo;
use crate::traits::*;

/// Bridge without native UI primitives.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Mobile (stub)"
    }
}

impl ImageRenderer for StubBridge {
    fn render_logo(&self, payload: &str) -> Result<RenderedLogo> {
        logo::render_logo(payload)
    }
}

impl ConfirmationPrompt for StubBridge {
    fn present(
        &self,
        title: &str,
        _message: &str,
        _buttons: &[PromptButton],
    ) -> Result<Option<usize>> {
        tracing::warn!(title, "ConfirmationPrompt::present called on stub bridge");
        Err(UpnError::PlatformUnavailable)
    }

    fn alert(&self, title: &str, _message: &str) -> Result<()> {
        tracing::warn!(title, "ConfirmationPrompt::alert called on stub bridge");
        Err(UpnError::PlatformUnavailable)
    }
}

impl LogoPicker for StubBridge {
    fn pick_logo(&self) -> Result<Option<Vec<u8>>> {
        tracing::warn!("LogoPicker::pick_logo called on stub bridge");
        Err(UpnError::PlatformUnavailable)
    }
}

impl Theme for StubBridge {
    fn appearance(&self) -> Appearance {
        Appearance::Light
    }
}
