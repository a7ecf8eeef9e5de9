// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge: native message boxes and file picking through `rfd`,
// appearance from the environment or the OS colour scheme.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::debug;
use upn_core::error::{Result, UpnError};
use upn_core::types::Appearance;

use crate::logo;
use crate::traits::*;

/// Bridge used on Linux, macOS and Windows.
pub struct DesktopBridge {
    appearance: Appearance,
}

impl DesktopBridge {
    pub fn new(appearance: Appearance) -> Self {
        Self { appearance }
    }

    /// Appearance from `UPN_APPEARANCE` when set to `light` or `dark`,
    /// otherwise from the operating system setting.
    pub fn from_env() -> Self {
        let forced = std::env::var(crate::APPEARANCE_VAR).ok();
        Self::new(resolve_appearance(forced.as_deref(), detect_system_appearance))
    }
}

/// Explicit override first, then the detected OS scheme, then light.
fn resolve_appearance(
    forced: Option<&str>,
    detect: impl FnOnce() -> Option<Appearance>,
) -> Appearance {
    forced
        .and_then(Appearance::from_name)
        .or_else(detect)
        .unwrap_or_default()
}

fn detect_system_appearance() -> Option<Appearance> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(Appearance::Dark),
        Ok(dark_light::Mode::Light) => Some(Appearance::Light),
        Ok(_) => None,
        Err(e) => {
            debug!(error = ?e, "system appearance unavailable");
            None
        }
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl ImageRenderer for DesktopBridge {
    fn render_logo(&self, payload: &str) -> Result<RenderedLogo> {
        logo::render_logo(payload)
    }
}

impl ConfirmationPrompt for DesktopBridge {
    fn present(
        &self,
        title: &str,
        message: &str,
        buttons: &[PromptButton],
    ) -> Result<Option<usize>> {
        let (layout, native) = DialogLayout::plan(buttons)?;
        let level = if buttons.iter().any(|b| b.role == ButtonRole::Destructive) {
            MessageLevel::Warning
        } else {
            MessageLevel::Info
        };

        let result = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(native)
            .show();
        debug!(title, ?result, "prompt answered");

        Ok(layout.resolve(buttons, result))
    }

    fn alert(&self, title: &str, message: &str) -> Result<()> {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
        Ok(())
    }
}

impl LogoPicker for DesktopBridge {
    fn pick_logo(&self) -> Result<Option<Vec<u8>>> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", logo::PICKER_EXTENSIONS)
            .pick_file()
        else {
            return Ok(None);
        };
        let bytes = std::fs::read(&path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "logo file read");
        Ok(Some(bytes))
    }
}

impl Theme for DesktopBridge {
    fn appearance(&self) -> Appearance {
        self.appearance
    }
}

/// How `PromptButton`s map onto the fixed slots of a native message box.
///
/// Native boxes offer up to two affirmative slots plus one cancel slot, so a
/// prompt may carry at most one `Cancel` button and two others.
struct DialogLayout {
    /// Indices into the prompt's buttons: affirmative slots, then cancel.
    primary: Vec<usize>,
    cancel: Option<usize>,
}

impl DialogLayout {
    fn plan(buttons: &[PromptButton]) -> Result<(Self, MessageButtons)> {
        let cancel_slots: Vec<usize> = indices(buttons, |b| b.role == ButtonRole::Cancel);
        let primary: Vec<usize> = indices(buttons, |b| b.role != ButtonRole::Cancel);
        if cancel_slots.len() > 1 {
            return Err(UpnError::Bridge("prompt has more than one cancel button".into()));
        }
        let cancel = cancel_slots.first().copied();
        let label = |i: usize| buttons[i].label.clone();

        let native = match (primary.as_slice(), cancel) {
            ([], None) => {
                return Err(UpnError::Bridge("prompt needs at least one button".into()));
            }
            ([], Some(c)) => MessageButtons::OkCustom(label(c)),
            ([a], None) => MessageButtons::OkCustom(label(*a)),
            ([a], Some(c)) => MessageButtons::OkCancelCustom(label(*a), label(c)),
            ([a, b], None) => MessageButtons::OkCancelCustom(label(*a), label(*b)),
            ([a, b], Some(c)) => {
                MessageButtons::YesNoCancelCustom(label(*a), label(*b), label(c))
            }
            _ => {
                return Err(UpnError::Bridge(format!(
                    "native dialogs support at most three buttons, got {}",
                    buttons.len()
                )));
            }
        };

        Ok((Self { primary, cancel }, native))
    }

    fn resolve(&self, buttons: &[PromptButton], result: MessageDialogResult) -> Option<usize> {
        match result {
            MessageDialogResult::Custom(label) => buttons.iter().position(|b| b.label == label),
            MessageDialogResult::Ok | MessageDialogResult::Yes => {
                self.primary.first().copied().or(self.cancel)
            }
            MessageDialogResult::No => self.primary.get(1).copied(),
            // Cancel, or the window was closed.
            _ => self.cancel,
        }
    }
}

fn indices(buttons: &[PromptButton], pred: impl Fn(&PromptButton) -> bool) -> Vec<usize> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, b)| pred(b))
        .map(|(i, _)| i)
        .collect()
}
