use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Fallback page for unknown console routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-16 space-y-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"This page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::AppRoot} classes="btn btn-primary">
                {"Back to the dashboard"}
            </Link<MainRoute>>
        </div>
    }
}
