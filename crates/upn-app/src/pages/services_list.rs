// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page: five-column logo grid. Tap opens the detail view, long-press
// (or right-click) offers edit and delete.

use std::time::Duration;

use dioxus::prelude::*;

use upn_catalog::render::NAME_MAX_LINES;
use upn_catalog::{CellView, GridLayout, Palette, ScreenView, Tile};
use upn_core::strings;
use upn_core::types::Service;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::services::router::RouterNavigator;

/// Press duration that turns a tap into a long-press.
const LONG_PRESS: Duration = Duration::from_millis(500);

#[component]
pub fn ServicesList() -> Element {
    let svc = use_context::<AppServices>();
    let palette = svc.palette();
    let nav = navigator();

    let screen = use_hook(|| svc.list_screen());
    let mut snapshot = use_signal(|| screen.snapshot());

    // Subscribe before the first load so its loading state is not missed.
    let updates = use_hook(|| screen.subscribe());
    use_future(move || {
        let mut rx = updates.clone();
        async move {
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                snapshot.set(state);
            }
        }
    });

    let screen_load = screen.clone();
    use_hook(move || {
        spawn(async move {
            // Failures are logged by the screen and leave the list as it was.
            let _ = screen_load.load().await;
        });
    });

    let on_tap = {
        let screen = screen.clone();
        move |service: Service| {
            let router = RouterNavigator::new(move |r: Route| {
                nav.push(r);
            });
            screen.select_service(&service, &router);
        }
    };

    let on_long_press = {
        let screen = screen.clone();
        let svc = svc.clone();
        move |service: Service| {
            let screen = screen.clone();
            let bridge = svc.bridge();
            spawn(async move {
                let router = RouterNavigator::new(move |r: Route| {
                    nav.push(r);
                });
                match screen.long_press_service(&service, &router, &*bridge).await {
                    Ok(outcome) => tracing::debug!(id = %service.id, ?outcome, "long-press handled"),
                    Err(e) => tracing::error!(id = %service.id, error = %e, "long-press prompt failed"),
                }
            });
        }
    };

    let bridge = svc.bridge();
    let view = use_memo(move || ScreenView::from_state(&snapshot.read(), &*bridge))();
    let state = snapshot.read().clone();
    let layout = GridLayout::default();
    let cell_width = layout.css_cell_width();
    let padding = layout.padding;
    let row_gap = layout.row_gap;

    rsx! {
        div { style: "padding: {padding}px;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 28px;", "{strings::SERVICES_TITLE}" }
                Link { to: Route::AddService {},
                    style: "font-size: 28px; line-height: 1; text-decoration: none; color: {palette.accent};",
                    "+"
                }
            }

            {match view {
                ScreenView::Loading { text } => rsx! {
                    p { style: "text-align: center; color: {palette.secondary_text}; margin: 48px 0;",
                        "{text}"
                    }
                },
                ScreenView::Empty { title, subtitle } => rsx! {
                    div { style: "text-align: center; margin: 48px 0;",
                        p { style: "font-size: 18px; font-weight: 600; margin: 0 0 8px;", "{title}" }
                        p { style: "color: {palette.secondary_text}; margin: 0;", "{subtitle}" }
                    }
                },
                ScreenView::Grid { cells } => rsx! {
                    for (row_cells, row_services) in layout.rows(&cells).zip(layout.rows(&state.services)) {
                        div { style: "display: flex; justify-content: space-between; margin-bottom: {row_gap}px;",
                            for (cell, service) in row_cells.iter().zip(row_services) {
                                ServiceCell {
                                    key: "{cell.id}",
                                    cell: cell.clone(),
                                    width: cell_width.clone(),
                                    palette: palette,
                                    on_tap: {
                                        let on_tap = on_tap.clone();
                                        let service = service.clone();
                                        move |_| on_tap(service.clone())
                                    },
                                    on_long_press: {
                                        let on_long_press = on_long_press.clone();
                                        let service = service.clone();
                                        move |_| on_long_press(service.clone())
                                    },
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// One grid cell: square tile and a two-line name under it.
///
/// Holding a press for `LONG_PRESS` fires `on_long_press` while still held;
/// releasing earlier fires `on_tap`. The context menu gesture is a long-press
/// too.
#[component]
fn ServiceCell(
    cell: CellView,
    width: String,
    palette: Palette,
    on_tap: EventHandler<()>,
    on_long_press: EventHandler<()>,
) -> Element {
    let mut press = use_signal(Press::default);

    let mut begin = move || {
        let token = press.write().begin();
        spawn(async move {
            tokio::time::sleep(LONG_PRESS).await;
            if press.write().expire(token) {
                on_long_press.call(());
            }
        });
    };

    let mut release = move || {
        if press.write().release() {
            on_tap.call(());
        }
    };

    rsx! {
        div {
            style: "width: {width}; display: flex; flex-direction: column; align-items: center; cursor: pointer; user-select: none;",
            onmousedown: move |_| begin(),
            onmouseup: move |_| release(),
            onmouseleave: move |_| press.write().abort(),
            ontouchstart: move |_| begin(),
            ontouchend: move |evt| {
                evt.prevent_default();
                release()
            },
            ontouchcancel: move |_| press.write().abort(),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                press.write().abort();
                on_long_press.call(());
            },

            LogoTile { tile: cell.tile.clone(), palette: palette, size: "100%".to_string() }

            span {
                style: "margin-top: 6px; width: 100%; font-size: 12px; text-align: center; overflow: hidden; text-overflow: ellipsis; word-break: break-word; display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: {NAME_MAX_LINES};",
                "{cell.name}"
            }
        }
    }
}

/// Press state of one cell. Every press gets a fresh token so a timer left
/// over from an earlier press cannot fire for a later one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Press {
    next: u64,
    active: Option<u64>,
}

impl Press {
    fn begin(&mut self) -> u64 {
        self.next += 1;
        self.active = Some(self.next);
        self.next
    }

    /// The long-press timer for `token` ran out. True when that press is
    /// still held; the press is then consumed.
    fn expire(&mut self, token: u64) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Button or finger lifted. True for a tap, i.e. the timer has not fired.
    fn release(&mut self) -> bool {
        self.active.take().is_some()
    }

    fn abort(&mut self) {
        self.active = None;
    }
}

/// Square logo, contained, or the placeholder initial on a neutral tile.
#[component]
pub fn LogoTile(tile: Tile, palette: Palette, size: String) -> Element {
    let frame = format!(
        "width: {size}; aspect-ratio: 1 / 1; border-radius: 12px; overflow: hidden; display: flex; align-items: center; justify-content: center;"
    );

    match tile {
        Tile::Logo(logo) => rsx! {
            div { style: "{frame}",
                img {
                    src: "{logo.data_uri}",
                    width: "{logo.width}",
                    height: "{logo.height}",
                    style: "width: 100%; height: 100%; object-fit: contain;",
                }
            }
        },
        Tile::Placeholder(initial) => rsx! {
            div { style: "{frame} background: {palette.tile}; color: {palette.tile_text}; font-size: 24px; font-weight: 600;",
                "{initial}"
            }
        },
    }
}
