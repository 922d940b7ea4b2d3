use crate::{
    models::app_state::AppState,
    routes::AppRoute,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator().unwrap();
    let email = use_selector(|state: &AppState| state.email.clone());

    let profile_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            navigator.push(&AppRoute::Profile);
        });
        html! {
            <li><a {onclick}>{"Profile"}</a></li>
        }
    };

    let settings_button = {
        let navigator = navigator;
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            navigator.push(&AppRoute::Settings);
        });
        html! {
            <li><a {onclick}>{"Settings"}</a></li>
        }
    };

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="h-5 w-5" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-xs text-base-content/70">
                        { (*email).clone().unwrap_or_else(|| "Signed in".to_string()) }
                    </div>
                </li>
                <div class="divider my-0"></div>
                {profile_button}
                {settings_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
