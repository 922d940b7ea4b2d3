use crate::{console, models::app_state::AppState};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// `ProfilePage` page component
///
/// The email shown here is looked up from the auth provider rather than
/// local state, so it reflects the remote session even when the locally
/// persisted identifiers are stale.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_selector(|state: &AppState| state.session);
    let remote_email = use_state(|| None::<String>);

    {
        let remote_email = remote_email.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let console = console::shared();
                match console.session().current_email().await {
                    Ok(email) => remote_email.set(Some(email)),
                    Err(err) => log(std::format!("principal lookup failed: {err}").as_str()),
                }
            });
            || ()
        });
    }

    html! {
        <div class="p-4 max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold">{"Profile"}</h1>
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Account"}</h2>
                    <div class="grid grid-cols-2 gap-2 text-sm">
                        <span class="text-base-content/70">{"Email"}</span>
                        <span>{ (*remote_email).clone().unwrap_or_else(|| "—".to_string()) }</span>
                        <span class="text-base-content/70">{"User id"}</span>
                        <span>{ session.user_id.map_or_else(|| "—".to_string(), |id| id.to_string()) }</span>
                        <span class="text-base-content/70">{"Tenant id"}</span>
                        <span>{ session.tenant_id.map_or_else(|| "—".to_string(), |id| id.to_string()) }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
