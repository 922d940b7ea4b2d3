use crate::components::theme_switcher::ThemeSwitcher;
use yew::{Html, function_component, html};

/// `SettingsPage` page component
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <div class="p-4 max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold">{"Settings"}</h1>
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Appearance"}</h2>
                    <div class="flex items-center justify-between">
                        <p>{"Switch between the light and dark theme."}</p>
                        <ThemeSwitcher />
                    </div>
                </div>
            </div>
        </div>
    }
}
