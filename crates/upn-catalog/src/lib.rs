// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UPN: services list screen, independent of any UI toolkit.
//
// `screen` owns state and operations, `render` turns a state snapshot into a
// view model, `layout` and `theme` hold the grid geometry and colours.
// `usage` joins usage records to phones for the detail view.

pub mod layout;
pub mod render;
pub mod screen;
pub mod theme;
pub mod usage;

pub use layout::GridLayout;
pub use render::{CellView, ScreenView, Tile};
pub use screen::{LoadPhase, LongPressOutcome, ScreenState, ServicesListScreen};
pub use theme::Palette;
pub use usage::phones_for_service;
