// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UPN: Platform capability bridges.
//
// Screen logic talks to the platform only through the traits in `traits`:
// logo decoding, modal prompts, colour scheme, and navigation. Desktop builds
// get a working implementation backed by `rfd` dialogs; mobile targets get the
// stub until native dialog bindings land.

pub mod logo;
pub mod stub;
pub mod traits;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

/// Environment variable overriding the reported appearance (`light`/`dark`).
pub const APPEARANCE_VAR: &str = "UPN_APPEARANCE";

/// Bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        Box::new(stub::StubBridge)
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(desktop::DesktopBridge::from_env())
    }
}
