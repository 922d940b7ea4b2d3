use crate::{
    containers::layout::Layout, models::app_state::AppState, pages::*,
};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/app")]
    AppRoot,
    #[at("/app/*")]
    App,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The authenticated console routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AppRoute {
    #[at("/app")]
    Dashboard,
    #[at("/app/profile")]
    Profile,
    #[at("/app/settings")]
    Settings,
    #[at("/app/roles")]
    Roles,
    #[at("/app/users")]
    Users,
    #[at("/app/menus")]
    Menus,
    #[not_found]
    #[at("/app/404")]
    NotFound,
}

impl AppRoute {
    /// Sidebar label for the route.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Roles => "Roles",
            Self::Users => "Users",
            Self::Menus => "Menus",
            Self::NotFound => "Not found",
        }
    }

    /// Sidebar icon for the route.
    #[must_use]
    pub fn icon(&self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineHome,
            Self::Profile => IconId::HeroiconsOutlineUserCircle,
            Self::Settings => IconId::HeroiconsOutlineCog6Tooth,
            Self::Roles => IconId::HeroiconsOutlineShieldCheck,
            Self::Users => IconId::HeroiconsOutlineUsers,
            Self::Menus => IconId::HeroiconsOutlineQueueList,
            Self::NotFound => IconId::HeroiconsOutlineQuestionMarkCircle,
        }
    }

    /// The routes offered in the static sidebar, in display order.
    /// Used whenever the menus table has nothing usable to show.
    #[must_use]
    pub fn nav_items() -> Vec<Self> {
        Self::iter()
            .filter(|route| !matches!(route, Self::NotFound | Self::Profile))
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session);
    let is_authenticated = session.authenticated;
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::AppRoot} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Root => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::AppRoot} /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
            }
        }
        MainRoute::AppRoot | MainRoute::App => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Switch<AppRoute> render={move |route| switch_app(route, on_logout.clone())} />
            }
        }
        MainRoute::NotFound => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! { <Redirect<MainRoute> to={MainRoute::AppRoot} /> }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

/// Switch function for the authenticated console routes.
fn switch_app(route: AppRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to app route: {:?}", route).as_str());
    let page = match route {
        AppRoute::Dashboard => html! { <DashboardPage /> },
        AppRoute::Profile => html! { <ProfilePage /> },
        AppRoute::Settings => html! { <SettingsPage /> },
        AppRoute::Roles => html! { <RolesPage /> },
        AppRoute::Users => html! { <UsersPage /> },
        AppRoute::Menus => html! { <MenusPage /> },
        AppRoute::NotFound => html! { <ErrorPage /> },
    };
    html! {
        <Layout current_route={route} on_logout={Some(on_logout)}>
            {page}
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_their_paths() {
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::AppRoot.to_path(), "/app");
        assert_eq!(AppRoute::Dashboard.to_path(), "/app");
        assert_eq!(AppRoute::Profile.to_path(), "/app/profile");
        assert_eq!(AppRoute::Settings.to_path(), "/app/settings");
        assert_eq!(AppRoute::Roles.to_path(), "/app/roles");
        assert_eq!(AppRoute::Users.to_path(), "/app/users");
        assert_eq!(AppRoute::Menus.to_path(), "/app/menus");
    }

    #[test]
    fn every_console_path_is_under_the_guarded_prefix() {
        for route in AppRoute::iter() {
            assert!(route.to_path().starts_with("/app"));
        }
    }

    #[test]
    fn nav_items_skip_profile_and_not_found() {
        let items = AppRoute::nav_items();
        assert!(!items.contains(&AppRoute::NotFound));
        assert!(!items.contains(&AppRoute::Profile));
        assert!(items.contains(&AppRoute::Dashboard));
        assert!(items.contains(&AppRoute::Roles));
        assert!(items.contains(&AppRoute::Users));
        assert!(items.contains(&AppRoute::Menus));
    }

    #[test]
    fn titles_are_distinct_for_nav_routes() {
        let mut titles: Vec<_> = AppRoute::nav_items()
            .iter()
            .map(|route| route.title())
            .collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), AppRoute::nav_items().len());
    }
}
