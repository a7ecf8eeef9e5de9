// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour palettes. Appearance changes colours only, never layout or data.

use upn_core::types::Appearance;

/// CSS colours for the services screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    /// Neutral placeholder tile behind the initial letter.
    pub tile: &'static str,
    pub tile_text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        text: "#1c1c1e",
        secondary_text: "#8e8e93",
        tile: "#e5e5ea",
        tile_text: "#3a3a3c",
        border: "#e0e0e0",
        accent: "#007aff",
        danger: "#ff3b30",
    };

    pub const DARK: Palette = Palette {
        background: "#000000",
        text: "#f2f2f7",
        secondary_text: "#98989f",
        tile: "#2c2c2e",
        tile_text: "#d1d1d6",
        border: "#38383a",
        accent: "#0a84ff",
        danger: "#ff453a",
    };

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark => Self::DARK,
        }
    }
}
