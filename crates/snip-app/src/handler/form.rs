//! Submission form and shorten-result handlers

use chrono::Utc;
use snip_core::{InputError, ShortenResponse};
use tracing::{debug, warn};

use crate::form::FormField;
use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

pub fn handle_input(state: &mut AppState, field: FormField, text: String) -> UpdateResult {
    if state.shorten.loading {
        return UpdateResult::none();
    }
    state.form.set_value(field, text);
    UpdateResult::none()
}

/// Validate the form and start a shorten request
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.shorten.loading {
        debug!("Submit ignored: request already in flight");
        return UpdateResult::none();
    }

    match state.form.build_request(Utc::now()) {
        Ok(request) => {
            state.form.validation_error = None;
            state.shorten.begin();
            UpdateResult::action(UpdateAction::ShortenUrl { request })
        }
        // Nothing to submit; no message either
        Err(InputError::EmptyUrl) => UpdateResult::none(),
        Err(e @ InputError::InvalidCustomCode) => {
            state.form.validation_error = Some(e.to_string());
            UpdateResult::none()
        }
    }
}

/// Apply the backend's answer to a shorten request
///
/// Success clears the form and shows the result; failure leaves the fields
/// as typed and the error on the form.
pub fn handle_completed(
    state: &mut AppState,
    result: Result<ShortenResponse, String>,
) -> UpdateResult {
    match state.shorten.complete(result) {
        Ok(response) => {
            state.form.clear();
            // The user may have moved on while the request was in flight
            if state.view == View::Form {
                state.show_result(response);
            } else {
                state.store_result(response);
            }
        }
        Err(message) => warn!("Shorten failed: {}", message),
    }
    UpdateResult::none()
}
