use crate::{console, models::app_state::AppState, routes::AppRoute};
use shared::models::MenuItem;
use std::collections::HashSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, Routable};
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Window asked of the menus table; the sidebar wants the whole tree.
const MENU_WINDOW: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: AppRoute,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let email = use_selector(|state: &AppState| state.email.clone());
    let items = use_state(Vec::<MenuItem>::new);

    {
        let items = items.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let console = console::shared();
                match console.menus().list(0, MENU_WINDOW).await {
                    Ok(page) => items.set(page.items),
                    // The static fallback below covers an empty fetch.
                    Err(err) => log(std::format!("sidebar menu fetch failed: {err}").as_str()),
                }
            });
            || ()
        });
    }

    let entry = |route: &AppRoute, title: &str, icon: IconId| -> Html {
        let active = if *route == props.current_route {
            "active"
        } else {
            ""
        };
        html! {
            <li>
                <Link<AppRoute> to={route.clone()} classes={classes!("gap-2", active)}>
                    <Icon icon_id={icon} class="h-5 w-5" />
                    {title.to_string()}
                </Link<AppRoute>>
            </li>
        }
    };

    let db_entry = |item: &MenuItem| -> Html {
        match AppRoute::recognize(&item.path) {
            Some(route) if route != AppRoute::NotFound => {
                entry(&route, &item.title, icon_for(&item.icon))
            }
            _ => html! {
                <li>
                    <a href={item.path.clone()} class="gap-2">
                        <Icon icon_id={icon_for(&item.icon)} class="h-5 w-5" />
                        {item.title.clone()}
                    </a>
                </li>
            },
        }
    };

    let tree = build_tree(&items);
    let nav = if tree.is_empty() {
        html! {
            { for AppRoute::nav_items().iter().map(|route| entry(route, route.title(), route.icon())) }
        }
    } else {
        html! {
            { for tree.iter().map(|(parent, children)| {
                if children.is_empty() {
                    db_entry(parent)
                } else {
                    html! {
                        <li>
                            <details open={true}>
                                <summary class="gap-2">
                                    <Icon icon_id={icon_for(&parent.icon)} class="h-5 w-5" />
                                    {parent.title.clone()}
                                </summary>
                                <ul>
                                    { for children.iter().map(db_entry) }
                                </ul>
                            </details>
                        </li>
                    }
                }
            }) }
        }
    };

    let on_logout = props.on_logout.clone();
    let logout_click = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(callback) = &on_logout {
            callback.emit(());
        }
    });

    html! {
        <aside class="menu p-4 w-64 min-h-full bg-base-200 text-base-content flex flex-col">
            <div class="px-2 pb-4 border-b border-base-300">
                <div class="text-lg font-semibold">{"Portico"}</div>
                <div class="text-xs text-base-content/70">
                    { (*email).clone().unwrap_or_default() }
                </div>
            </div>
            <ul class="menu w-full flex-grow p-0 pt-2">
                {nav}
            </ul>
            <ul class="menu w-full p-0 border-t border-base-300 pt-2">
                <li>
                    <a onclick={logout_click} class="gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="h-5 w-5" />
                        {"Sign out"}
                    </a>
                </li>
            </ul>
        </aside>
    }
}

/// Map a stored icon name onto a rendered icon; unknown names get a
/// neutral glyph rather than breaking the sidebar.
fn icon_for(name: &str) -> IconId {
    match name {
        "home" | "dashboard" => IconId::HeroiconsOutlineHome,
        "people" | "users" | "group" => IconId::HeroiconsOutlineUsers,
        "security" | "shield" | "roles" => IconId::HeroiconsOutlineShieldCheck,
        "menu" | "list" => IconId::HeroiconsOutlineQueueList,
        "settings" | "cog" => IconId::HeroiconsOutlineCog6Tooth,
        "person" | "user" | "profile" => IconId::HeroiconsOutlineUserCircle,
        _ => IconId::HeroiconsOutlineDocument,
    }
}

/// Group items into `(parent, children)` pairs in sidebar order.
///
/// A child whose `parent_id` points at a deleted row is promoted to the
/// top level: the store has no cascade rule, so dangling parents are a
/// normal state, not an error.
fn build_tree(items: &[MenuItem]) -> Vec<(MenuItem, Vec<MenuItem>)> {
    let ids: HashSet<i64> = items.iter().map(|item| item.id).collect();

    let mut tops: Vec<MenuItem> = items
        .iter()
        .filter(|item| match item.parent_id {
            None => true,
            Some(parent_id) => !ids.contains(&parent_id),
        })
        .cloned()
        .collect();
    tops.sort_by_key(|item| item.order);

    tops.into_iter()
        .map(|top| {
            let mut children: Vec<MenuItem> = items
                .iter()
                .filter(|item| item.parent_id == Some(top.id))
                .cloned()
                .collect();
            children.sort_by_key(|item| item.order);
            (top, children)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, parent_id: Option<i64>, order: i32) -> MenuItem {
        MenuItem {
            id,
            title: format!("Item {id}"),
            path: format!("/app/item-{id}"),
            icon: "home".to_string(),
            parent_id,
            order,
        }
    }

    #[test]
    fn tree_groups_children_under_their_parent() {
        let items = vec![item(1, None, 0), item(2, Some(1), 1), item(3, Some(1), 0)];
        let tree = build_tree(&items);

        assert_eq!(tree.len(), 1);
        let (parent, children) = &tree[0];
        assert_eq!(parent.id, 1);
        // Children come back in their own sort order.
        assert_eq!(children.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn dangling_parent_promotes_the_child() {
        // Parent 9 was deleted; its child must still render, at top level.
        let items = vec![item(1, None, 0), item(2, Some(9), 1)];
        let tree = build_tree(&items);

        let top_ids: Vec<i64> = tree.iter().map(|(top, _)| top.id).collect();
        assert_eq!(top_ids, vec![1, 2]);
    }

    #[test]
    fn tops_are_ordered_by_the_order_column() {
        let items = vec![item(1, None, 5), item(2, None, 1), item(3, None, 3)];
        let tree = build_tree(&items);

        let top_ids: Vec<i64> = tree.iter().map(|(top, _)| top.id).collect();
        assert_eq!(top_ids, vec![2, 3, 1]);
    }

    #[test]
    fn empty_input_yields_an_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn known_icon_names_resolve() {
        assert_eq!(icon_for("home"), IconId::HeroiconsOutlineHome);
        assert_eq!(icon_for("users"), IconId::HeroiconsOutlineUsers);
        assert_eq!(icon_for("made-up"), IconId::HeroiconsOutlineDocument);
    }
}
