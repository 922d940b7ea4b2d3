use crate::{
    components::{theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown},
    containers::layout::DRAWER_ID,
    routes::{AppRoute, MainRoute},
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: AppRoute,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <nav class="navbar bg-base-300 sticky top-0 z-10">
            <div class="navbar-start">
                <label for={DRAWER_ID} class="btn btn-ghost btn-circle lg:hidden" aria-label="open sidebar">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                </label>
                <Link<MainRoute> to={MainRoute::AppRoot} classes="btn btn-ghost text-lg">
                    {"Portico"}
                </Link<MainRoute>>
            </div>
            <div class="navbar-center hidden sm:flex">
                <span class="text-base-content/70">{props.current_route.title()}</span>
            </div>
            <div class="navbar-end gap-1">
                <ThemeSwitcher />
                <UserDropdown on_logout={props.on_logout.clone()} />
            </div>
        </nav>
    }
}
