use crate::theme;
use yew::{Callback, Classes, Html, Properties, function_component, html, use_state};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let current_theme = use_state(theme::current_theme);

    // Toggle, persist the flag, and re-render with the new icon
    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            current_theme.set(theme::toggle_theme());
        })
    };

    // Show sun in dark mode (to switch to light) and moon in light mode
    let theme_icon = match current_theme.as_str() {
        "light" => IconId::HeroiconsSolidMoon,
        _ => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label="toggle theme"
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
