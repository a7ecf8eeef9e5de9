// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// View model: what the services screen shows for a given state snapshot.

use tracing::debug;
use upn_bridge::traits::{ImageRenderer, RenderedLogo};
use upn_core::strings;
use upn_core::types::{Service, ServiceId};

use crate::screen::{LoadPhase, ScreenState};

/// Lines of name text under a tile before it is cut with an ellipsis.
pub const NAME_MAX_LINES: usize = 2;

/// Top-level render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading {
        text: &'static str,
    },
    Empty {
        title: &'static str,
        subtitle: &'static str,
    },
    Grid {
        cells: Vec<CellView>,
    },
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub id: ServiceId,
    pub name: String,
    pub tile: Tile,
}

/// Square image area of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tile {
    /// Decoded logo, drawn contained (never cropped).
    Logo(RenderedLogo),
    /// Neutral tile with the name's first character, upper-cased.
    Placeholder(String),
}

impl ScreenView {
    /// Build the view for `state`, decoding logos through `renderer`.
    ///
    /// Loading wins over everything else, and a screen that has not started
    /// its first load counts as loading. An empty list after loading shows
    /// the empty state whether the load succeeded or not.
    pub fn from_state<R: ImageRenderer + ?Sized>(state: &ScreenState, renderer: &R) -> Self {
        if state.is_loading || state.phase == LoadPhase::Idle {
            return Self::Loading {
                text: strings::LOADING,
            };
        }
        if state.services.is_empty() {
            return Self::Empty {
                title: strings::EMPTY_TITLE,
                subtitle: strings::EMPTY_SUBTITLE,
            };
        }
        Self::Grid {
            cells: state
                .services
                .iter()
                .map(|s| CellView::for_service(s, renderer))
                .collect(),
        }
    }
}

impl CellView {
    pub fn for_service<R: ImageRenderer + ?Sized>(service: &Service, renderer: &R) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            tile: Tile::for_service(service, renderer),
        }
    }
}

impl Tile {
    /// Logo when there is a decodable payload, placeholder otherwise.
    pub fn for_service<R: ImageRenderer + ?Sized>(service: &Service, renderer: &R) -> Self {
        match service.logo_payload().map(|p| renderer.render_logo(p)) {
            Some(Ok(logo)) => Self::Logo(logo),
            Some(Err(e)) => {
                debug!(id = %service.id, error = %e, "logo undecodable, using placeholder");
                Self::Placeholder(placeholder_initial(&service.name))
            }
            None => Self::Placeholder(placeholder_initial(&service.name)),
        }
    }
}

/// Upper-cased first character of `name`; `?` for a blank name.
///
/// Upper-casing can expand a character (`ß` becomes `SS`), hence a string.
pub fn placeholder_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
