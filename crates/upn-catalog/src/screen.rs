// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services list screen: state machine and user operations.
//
// State lives in a `watch` channel: operations mutate it, UIs subscribe to
// snapshots. Overlapping loads are not de-duplicated; whichever response
// arrives last is what the screen shows.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, instrument, warn};
use upn_api::ServicesBackend;
use upn_bridge::traits::{ConfirmationPrompt, Navigator, PromptButton};
use upn_core::error::{ApiError, ApiResult, Result};
use upn_core::strings;
use upn_core::types::{AppRoute, Service};

/// Where the most recent load left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last load failed; `services` still holds whatever was there before.
    LoadFailed,
}

/// Snapshot of the screen's view state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenState {
    /// Backend order, never re-sorted.
    pub services: Vec<Service>,
    pub is_loading: bool,
    pub phase: LoadPhase,
}

/// What a long-press ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongPressOutcome {
    /// Menu dismissed or cancelled.
    Cancelled,
    EditOpened,
    /// Delete picked but not confirmed.
    DeleteDeclined,
    /// Backend accepted the delete; the list was reloaded.
    Deleted,
    /// Backend refused or was unreachable; the user saw an alert.
    DeleteFailed(ApiError),
}

// Button positions in the long-press menu.
const MENU_EDIT: usize = 1;
const MENU_DELETE: usize = 2;
// Button position of the destructive choice in the delete confirmation.
const CONFIRM_DELETE: usize = 1;

/// The services grid screen, minus the pixels.
#[derive(Clone)]
pub struct ServicesListScreen {
    backend: Arc<dyn ServicesBackend>,
    state: Arc<watch::Sender<ScreenState>>,
}

impl ServicesListScreen {
    pub fn new(backend: Arc<dyn ServicesBackend>) -> Self {
        let (state, _) = watch::channel(ScreenState::default());
        Self {
            backend,
            state: Arc::new(state),
        }
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn snapshot(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// Fetch the whole collection and replace the list on success.
    ///
    /// Failures are logged and leave `services` untouched. `is_loading` is
    /// cleared whichever way the request ends. Returns the number of services
    /// received.
    #[instrument(skip(self))]
    pub async fn load(&self) -> ApiResult<usize> {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.phase = LoadPhase::Loading;
        });

        match self.backend.list_services().await {
            Ok(services) => {
                let count = services.len();
                info!(count, "services loaded");
                self.state.send_modify(|s| {
                    s.services = services;
                    s.is_loading = false;
                    s.phase = LoadPhase::Loaded;
                });
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "failed to load services");
                self.state.send_modify(|s| {
                    s.is_loading = false;
                    s.phase = LoadPhase::LoadFailed;
                });
                Err(e)
            }
        }
    }

    /// Tap: open the detail view.
    pub fn select_service<N: Navigator + ?Sized>(&self, service: &Service, navigator: &N) {
        navigator.navigate(AppRoute::ServiceDetail(service.id.clone()));
    }

    /// Long-press: offer edit/delete, and carry out the choice.
    ///
    /// Only bridge failures (a prompt that could not be shown) are returned as
    /// errors; backend failures are part of the outcome.
    #[instrument(skip_all, fields(id = %service.id))]
    pub async fn long_press_service<N, P>(
        &self,
        service: &Service,
        navigator: &N,
        prompt: &P,
    ) -> Result<LongPressOutcome>
    where
        N: Navigator + ?Sized,
        P: ConfirmationPrompt + ?Sized,
    {
        let menu = [
            PromptButton::cancel(strings::CANCEL),
            PromptButton::primary(strings::EDIT),
            PromptButton::destructive(strings::DELETE),
        ];
        match prompt.present(&service.name, strings::ACTION_MENU_MESSAGE, &menu)? {
            Some(MENU_EDIT) => {
                navigator.navigate(AppRoute::EditService(service.id.clone()));
                Ok(LongPressOutcome::EditOpened)
            }
            Some(MENU_DELETE) => self.confirm_and_delete(service, prompt).await,
            _ => Ok(LongPressOutcome::Cancelled),
        }
    }

    async fn confirm_and_delete<P: ConfirmationPrompt + ?Sized>(
        &self,
        service: &Service,
        prompt: &P,
    ) -> Result<LongPressOutcome> {
        let buttons = [
            PromptButton::cancel(strings::CANCEL),
            PromptButton::destructive(strings::DELETE),
        ];
        let answer = prompt.present(
            strings::DELETE_TITLE,
            &strings::delete_confirmation(&service.name),
            &buttons,
        )?;
        if answer != Some(CONFIRM_DELETE) {
            return Ok(LongPressOutcome::DeleteDeclined);
        }

        match self.backend.delete_service(&service.id).await {
            Ok(()) => {
                info!(id = %service.id, "service deleted");
                // Reload failures are already logged by `load`.
                let _ = self.load().await;
                Ok(LongPressOutcome::Deleted)
            }
            Err(e) => {
                warn!(id = %service.id, error = %e, "failed to delete service");
                prompt.alert(strings::ERROR_TITLE, strings::DELETE_FAILED)?;
                Ok(LongPressOutcome::DeleteFailed(e))
            }
        }
    }
}
