use std::cell::Cell;

use axum::{response::Redirect, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    login::{
        dto::{Credentials, ValidityResponse},
        services::{Navigation, Navigator},
    },
    state::AppState,
};

pub fn login_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/login/validity", post(validity))
}

/// Turns the last navigation request into a 303.
#[derive(Default)]
pub struct RedirectNavigator {
    target: Cell<Option<Navigation>>,
}

impl Navigator for RedirectNavigator {
    fn go(&self, nav: Navigation) {
        self.target.set(Some(nav));
    }
}

impl RedirectNavigator {
    pub fn into_redirect(self) -> Option<Redirect> {
        self.target.get().map(|nav| Redirect::to(nav.path()))
    }
}

#[instrument(skip(payload))]
pub async fn validity(Json(payload): Json<Credentials>) -> Json<ValidityResponse> {
    Json(ValidityResponse {
        invalid: payload.is_invalid(),
    })
}

/// 303 to the contacts view. Always succeeds.
#[instrument(skip(payload))]
pub async fn login(Json(payload): Json<Credentials>) -> Redirect {
    let navigator = RedirectNavigator::default();
    payload.submit(&navigator);
    navigator
        .into_redirect()
        .unwrap_or_else(|| Redirect::to(Navigation::Nutshells.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::header::LOCATION, http::StatusCode, response::IntoResponse};

    #[test]
    fn redirect_navigator_without_request_gives_nothing() {
        assert!(RedirectNavigator::default().into_redirect().is_none());
    }

    #[test]
    fn redirect_navigator_answers_see_other() {
        let navigator = RedirectNavigator::default();
        navigator.go(Navigation::Nutshells);

        let response = navigator.into_redirect().unwrap().into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/nutshells");
    }
}
