use crate::containers::header::Header;
use crate::containers::sidebar::Sidebar;
use crate::routes::AppRoute;
use yew::{Callback, Children, Html, Properties, function_component, html};

/// Id of the drawer checkbox shared by the header toggle and the overlay.
pub const DRAWER_ID: &str = "portico-drawer";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: AppRoute,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header current_route={props.current_route.clone()} on_logout={props.on_logout.clone()} />
                <main class="flex-grow p-4">
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"© 2025 Portico · Powered by Rust, Yew and DaisyUI"}</p>
                    </div>
                </footer>
            </div>
            <div class="drawer-side">
                <label for={DRAWER_ID} class="drawer-overlay" aria-label="close sidebar"></label>
                <Sidebar current_route={props.current_route.clone()} on_logout={props.on_logout.clone()} />
            </div>
        </div>
    }
}
