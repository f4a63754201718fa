use crate::config::{AppConfig, Config};
use crate::hooks::use_health::{HealthState, use_health};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HealthCheckProps {
    #[prop_or_else(AppConfig::from_build_env)]
    pub config: AppConfig,
}

#[function_component(HealthCheck)]
pub fn health_check(props: &HealthCheckProps) -> Html {
    let state = use_health(props.config);
    health_check_view(&state)
}

/// Markup for a given health state.
pub fn health_check_view(state: &HealthState) -> Html {
    let class = if state.is_checking() {
        "health-status checking"
    } else {
        "health-status settled"
    };

    html! {
        <div class="health-check">
            <h1>{"Yew + FastAPI"}</h1>
            <p class={class}>{format!("Backend health check: {}", state.message())}</p>
            <p class="config-note">{precedence_note()}</p>
        </div>
    }
}

/// Static line describing which environment variable is used.
pub fn precedence_note() -> String {
    format!(
        "The {} environment variable takes precedence ({} is also accepted).",
        Config::PRIMARY_KEY,
        Config::SECONDARY_KEY
    )
}
