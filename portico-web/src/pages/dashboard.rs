use crate::{console, routes::AppRoute};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user_total = use_state(|| None::<u64>);
    let role_total = use_state(|| None::<u64>);

    {
        let user_total = user_total.clone();
        let role_total = role_total.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let console = console::shared();
                // Totals only; a one-row window keeps the payload minimal.
                match console.users().list(0, 1).await {
                    Ok(page) => user_total.set(Some(page.total)),
                    Err(err) => log(std::format!("user count failed: {err}").as_str()),
                }
                match console.roles().list(0, 1).await {
                    Ok(page) => role_total.set(Some(page.total)),
                    Err(err) => log(std::format!("role count failed: {err}").as_str()),
                }
            });
            || ()
        });
    }

    let stat = |value: &Option<u64>| -> String {
        value.map_or_else(|| "–".to_string(), |total| total.to_string())
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                // Welcome card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineHome} class="w-6 h-6" />
                            {"Welcome"}
                        </h2>
                        <p>{"Welcome to your administration console."}</p>
                    </div>
                </div>

                // Users card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-6 h-6" />
                            {"Users"}
                        </h2>
                        <p>{"Manage the people in your organisation."}</p>
                        <div class="card-actions justify-end">
                            <Link<AppRoute> to={AppRoute::Users} classes="btn btn-primary">
                                {"Open"}
                            </Link<AppRoute>>
                        </div>
                    </div>
                </div>

                // Roles card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-6 h-6" />
                            {"Roles"}
                        </h2>
                        <p>{"Define what each role is allowed to do."}</p>
                        <div class="card-actions justify-end">
                            <Link<AppRoute> to={AppRoute::Roles} classes="btn btn-secondary">
                                {"Open"}
                            </Link<AppRoute>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Users"}</div>
                    <div class="stat-value text-primary">{ stat(&user_total) }</div>
                    <div class="stat-desc">{"In your tenant"}</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Roles"}</div>
                    <div class="stat-value text-secondary">{ stat(&role_total) }</div>
                    <div class="stat-desc">{"In your tenant"}</div>
                </div>
            </div>
        </div>
    }
}
