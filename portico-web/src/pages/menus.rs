use crate::components::{loading::Loading, paginator::Paginator};
use crate::console;
use crate::models::toast_state::{self, ToastState};
use shared::models::{DEFAULT_PAGE_SIZE, MenuItem, MenuItemUpdate, NewMenuItem, Page};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Modal editor state; at most one dialog is ever open.
#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Creating,
    Editing(MenuItem),
}

#[function_component(MenusPage)]
pub fn menus_page() -> Html {
    let page = use_state(|| None::<Page<MenuItem>>);
    let page_index = use_state(|| 0_u32);
    let page_size = use_state(|| DEFAULT_PAGE_SIZE);
    let refresh = use_state(|| 0_u32);
    let editor = use_state(|| Editor::Closed);
    let parents = use_state(Vec::<MenuItem>::new);
    let title = use_state(String::new);
    let path = use_state(String::new);
    let icon = use_state(String::new);
    let parent_id = use_state(|| None::<i64>);
    let order = use_state(|| 0_i32);
    let saving = use_state(|| false);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let page = page.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(
            (*page_index, *page_size, *refresh),
            move |(index, size, _)| {
                let index = *index;
                let size = *size;
                spawn_local(async move {
                    let console = console::shared();
                    match console.menus().list(index, size).await {
                        Ok(listed) => page.set(Some(listed)),
                        Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                    }
                });
                || ()
            },
        );
    }

    // Parent choices for the editor select; refreshed with the table so a
    // freshly created top-level entry is immediately selectable.
    {
        let parents = parents.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                let console = console::shared();
                match console.menus().parent_items().await {
                    Ok(items) => parents.set(items),
                    Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                }
            });
            || ()
        });
    }

    let close_editor = {
        let editor = editor.clone();
        let title = title.clone();
        let path = path.clone();
        let icon = icon.clone();
        let parent_id = parent_id.clone();
        let order = order.clone();
        Callback::from(move |()| {
            editor.set(Editor::Closed);
            title.set(String::new());
            path.set(String::new());
            icon.set(String::new());
            parent_id.set(None);
            order.set(0);
        })
    };

    let open_create = {
        let editor = editor.clone();
        let title = title.clone();
        let path = path.clone();
        let icon = icon.clone();
        let parent_id = parent_id.clone();
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            title.set(String::new());
            path.set(String::new());
            icon.set(String::new());
            parent_id.set(None);
            order.set(0);
            editor.set(Editor::Creating);
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let title = title.clone();
        let path = path.clone();
        let icon = icon.clone();
        let parent_id = parent_id.clone();
        let order = order.clone();
        Callback::from(move |item: MenuItem| {
            title.set(item.title.clone());
            path.set(item.path.clone());
            icon.set(item.icon.clone());
            parent_id.set(item.parent_id);
            order.set(item.order);
            editor.set(Editor::Editing(item));
        })
    };

    let on_save = {
        let editor = editor.clone();
        let title = title.clone();
        let path = path.clone();
        let icon = icon.clone();
        let parent_id = parent_id.clone();
        let order = order.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let close_editor = close_editor.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let editor_value = (*editor).clone();
            let title_value = (*title).clone();
            let path_value = (*path).clone();
            let icon_value = (*icon).clone();
            let parent_value = *parent_id;
            let order_value = *order;
            let saving = saving.clone();
            let refresh = refresh.clone();
            let close_editor = close_editor.clone();
            let toast_dispatch = toast_dispatch.clone();
            saving.set(true);
            spawn_local(async move {
                let console = console::shared();
                let result = match editor_value {
                    Editor::Creating => console
                        .menus()
                        .create(NewMenuItem {
                            title: title_value,
                            path: path_value,
                            icon: icon_value,
                            parent_id: parent_value,
                            order: order_value,
                        })
                        .await
                        .map(|_| "Menu entry created"),
                    Editor::Editing(item) => console
                        .menus()
                        .update(
                            item.id,
                            MenuItemUpdate {
                                title: Some(title_value),
                                path: Some(path_value),
                                icon: Some(icon_value),
                                parent_id: Some(parent_value),
                                order: Some(order_value),
                            },
                        )
                        .await
                        .map(|_| "Menu entry updated"),
                    Editor::Closed => return,
                };
                match result {
                    Ok(message) => {
                        toast_state::push_info(&toast_dispatch, message);
                        close_editor.emit(());
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                }
                saving.set(false);
            });
        })
    };

    // Children of a deleted parent stay behind with a dangling parent_id;
    // the sidebar promotes them rather than hiding them.
    let on_delete = {
        let refresh = refresh.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |item: MenuItem| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!(
                            "Are you sure you want to delete the menu entry \"{}\"?",
                            item.title
                        ))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let refresh = refresh.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let console = console::shared();
                match console.menus().delete(item.id).await {
                    Ok(()) => {
                        toast_state::push_info(&toast_dispatch, "Menu entry deleted");
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                }
            });
        })
    };

    let on_page_change = {
        let page_index = page_index.clone();
        let page_size = page_size.clone();
        Callback::from(move |(index, size): (u32, u32)| {
            page_index.set(index);
            page_size.set(size);
        })
    };

    let table = match &*page {
        None => html! { <Loading /> },
        Some(listed) => {
            let rows = listed.items.iter().map(|item| {
                let edit = {
                    let open_edit = open_edit.clone();
                    let item = item.clone();
                    Callback::from(move |_: MouseEvent| open_edit.emit(item.clone()))
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let item = item.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(item.clone()))
                };
                html! {
                    <tr key={item.id}>
                        <td>{item.id}</td>
                        <td>{item.title.clone()}</td>
                        <td><code>{item.path.clone()}</code></td>
                        <td>{item.icon.clone()}</td>
                        <td>{item.parent_id.map_or_else(|| "—".to_string(), |id| id.to_string())}</td>
                        <td>{item.order}</td>
                        <td class="text-right">
                            <button class="btn btn-ghost btn-sm" onclick={edit} aria-label="edit menu entry">
                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="h-4 w-4" />
                            </button>
                            <button class="btn btn-ghost btn-sm text-error" onclick={delete} aria-label="delete menu entry">
                                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-4 w-4" />
                            </button>
                        </td>
                    </tr>
                }
            });
            html! {
                <>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"ID"}</th>
                                    <th>{"Title"}</th>
                                    <th>{"Path"}</th>
                                    <th>{"Icon"}</th>
                                    <th>{"Parent"}</th>
                                    <th>{"Order"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows }
                            </tbody>
                        </table>
                    </div>
                    <Paginator
                        total={listed.total}
                        page_index={listed.page_index}
                        page_size={listed.page_size}
                        on_change={on_page_change.clone()}
                    />
                </>
            }
        }
    };

    let dialog = if *editor == Editor::Closed {
        html! {}
    } else {
        let is_creating = matches!(*editor, Editor::Creating);
        let heading = if is_creating {
            "Create menu entry"
        } else {
            "Edit menu entry"
        };
        let on_title = {
            let title = title.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    title.set(input.value());
                }
            })
        };
        let on_path = {
            let path = path.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    path.set(input.value());
                }
            })
        };
        let on_icon = {
            let icon = icon.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    icon.set(input.value());
                }
            })
        };
        let on_parent = {
            let parent_id = parent_id.clone();
            Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                    parent_id.set(select.value().parse::<i64>().ok());
                }
            })
        };
        let on_order = {
            let order = order.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    order.set(input.value().parse().unwrap_or(0));
                }
            })
        };
        let cancel = {
            let close_editor = close_editor.clone();
            Callback::from(move |_: MouseEvent| close_editor.emit(()))
        };
        // An entry cannot be its own parent.
        let editing_id = match &*editor {
            Editor::Editing(item) => Some(item.id),
            _ => None,
        };
        let disable_save = (*title).is_empty() || (*path).is_empty() || *saving;
        html! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{heading}</h3>
                    <form onsubmit={on_save.clone()}>
                        <div class="form-control">
                            <label class="label" for="menu-title">
                                <span class="label-text">{"Title"}</span>
                            </label>
                            <input
                                id="menu-title"
                                class="input input-bordered"
                                required=true
                                value={(*title).clone()}
                                oninput={on_title}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="menu-path">
                                <span class="label-text">{"Path"}</span>
                            </label>
                            <input
                                id="menu-path"
                                class="input input-bordered"
                                required=true
                                placeholder="/app/..."
                                value={(*path).clone()}
                                oninput={on_path}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="menu-icon">
                                <span class="label-text">{"Icon"}</span>
                            </label>
                            <input
                                id="menu-icon"
                                class="input input-bordered"
                                value={(*icon).clone()}
                                oninput={on_icon}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="menu-parent">
                                <span class="label-text">{"Parent"}</span>
                            </label>
                            <select id="menu-parent" class="select select-bordered" onchange={on_parent}>
                                <option value="" selected={parent_id.is_none()}>{"None"}</option>
                                { for parents.iter().filter(|parent| Some(parent.id) != editing_id).map(|parent| html! {
                                    <option value={parent.id.to_string()} selected={*parent_id == Some(parent.id)}>
                                        {parent.title.clone()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="menu-order">
                                <span class="label-text">{"Order"}</span>
                            </label>
                            <input
                                id="menu-order"
                                class="input input-bordered"
                                type="number"
                                value={order.to_string()}
                                oninput={on_order}
                            />
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn" onclick={cancel}>{"Cancel"}</button>
                            <button type="submit" class="btn btn-primary" disabled={disable_save}>
                                {if is_creating { "Create" } else { "Update" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Menus"}</h1>
                <button class="btn btn-primary" onclick={open_create}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-5 w-5" />
                    {"Add menu entry"}
                </button>
            </div>
            {table}
            {dialog}
        </div>
    }
}
