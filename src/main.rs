use health_view::components::HealthCheck;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <main class="app-main">
                <HealthCheck />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
