use crate::config::AppConfig;
use crate::models::{error::AppError, health::HealthResponse};
use crate::services::health_api::HealthClient;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Text shown while the health check is in flight.
pub const PLACEHOLDER_MESSAGE: &str = "Loading...";

/// Text shown for every kind of failure.
pub const FAILURE_MESSAGE: &str = "Backend is not running or unreachable";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HealthState {
    Checking,
    Reachable(String),
    Unreachable,
}

impl HealthState {
    /// Settles a finished health check into its display state.
    pub fn from_result(result: &Result<HealthResponse, AppError>) -> Self {
        match result {
            Ok(response) => Self::Reachable(response.status()),
            Err(_) => Self::Unreachable,
        }
    }

    /// Returns true while the request has not settled
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    /// The string rendered for this state.
    pub fn message(&self) -> &str {
        match self {
            Self::Checking => PLACEHOLDER_MESSAGE,
            Self::Reachable(status) => status,
            Self::Unreachable => FAILURE_MESSAGE,
        }
    }
}

#[hook]
pub fn use_health(config: AppConfig) -> UseStateHandle<HealthState> {
    let state = use_state(|| HealthState::Checking);

    {
        let state = state.clone();

        // Empty deps: runs once per mount
        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = match HealthClient::new(&config) {
                    Ok(client) => {
                        gloo::console::log!(&format!(
                            "Checking backend health at {}",
                            client.url()
                        ));
                        client.check().await
                    }
                    Err(e) => Err(e),
                };

                match &result {
                    Ok(response) => gloo::console::log!(&format!(
                        "Backend healthy: {} ({})",
                        response.status(),
                        response.service().unwrap_or("unknown service")
                    )),
                    Err(e) => gloo::console::warn!(&format!("Health check failed: {e}")),
                }

                // The request is not cancelled on unmount, only its result is dropped
                if !aborted_check.get() {
                    state.set(HealthState::from_result(&result));
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
