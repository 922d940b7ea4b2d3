use crate::components::toast::ToastHost;
use crate::console;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::theme;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (_state, store_dispatch) = use_store::<AppState>();

    {
        let store_dispatch = store_dispatch.clone();
        use_effect_with((), move |_| {
            theme::apply_initial_theme();

            // Restore the persisted tenant/user identifiers; the access
            // token is memory-only, so the principal lookup below runs
            // anonymously after a reload and simply stays empty.
            let console = console::shared();
            let session = console.session().session();
            store_dispatch.reduce_mut(|state| state.session = session);

            if session.authenticated {
                let store_dispatch = store_dispatch.clone();
                spawn_local(async move {
                    match console.session().current_email().await {
                        Ok(email) => {
                            store_dispatch.reduce_mut(|state| state.email = Some(email));
                        }
                        Err(err) => {
                            log(std::format!("principal lookup failed: {err}").as_str());
                        }
                    }
                });
            }
            || ()
        });
    }

    let logout_callback = {
        let store_dispatch = store_dispatch.clone();
        Callback::from(move |()| {
            let store_dispatch = store_dispatch.clone();
            spawn_local(async move {
                let console = console::shared();
                console.session().sign_out().await;
                store_dispatch.set(AppState::default());
            });
        })
    };

    html! {
        <>
            <BrowserRouter>
                <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
            </BrowserRouter>
            <ToastHost />
        </>
    }
}
