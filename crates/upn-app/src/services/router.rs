// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screen navigation on top of the Dioxus router.

use tracing::debug;
use upn_bridge::traits::Navigator;
use upn_core::types::AppRoute;

use crate::Route;

/// Forwards screen navigation requests to a router push function.
///
/// Pages build one around `navigator()`; tests can pass any closure.
pub struct RouterNavigator<F: Fn(Route)> {
    push: F,
}

impl<F: Fn(Route)> RouterNavigator<F> {
    pub fn new(push: F) -> Self {
        Self { push }
    }
}

impl<F: Fn(Route)> Navigator for RouterNavigator<F> {
    fn navigate(&self, route: AppRoute) {
        debug!(path = %route, "navigating");
        (self.push)(Route::from(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use upn_core::types::ServiceId;

    #[test]
    fn app_routes_reach_the_router() {
        let pushed = RefCell::new(Vec::new());
        let nav = RouterNavigator::new(|route: Route| pushed.borrow_mut().push(route));

        nav.navigate(AppRoute::ServiceDetail(ServiceId::from("42")));
        nav.navigate(AppRoute::AddService);

        assert_eq!(
            *pushed.borrow(),
            [
                Route::ServiceDetail { id: "42".into() },
                Route::AddService {},
            ]
        );
    }
}
