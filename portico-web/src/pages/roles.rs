use crate::components::{loading::Loading, paginator::Paginator};
use crate::console;
use crate::models::toast_state::{self, ToastState};
use shared::models::{DEFAULT_PAGE_SIZE, NewRole, Page, Role, RoleUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Modal editor state; at most one dialog is ever open.
#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Creating,
    Editing(Role),
}

#[function_component(RolesPage)]
pub fn roles_page() -> Html {
    let page = use_state(|| None::<Page<Role>>);
    let page_index = use_state(|| 0_u32);
    let page_size = use_state(|| DEFAULT_PAGE_SIZE);
    let refresh = use_state(|| 0_u32);
    let editor = use_state(|| Editor::Closed);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    // Re-list on every pagination change and after every mutation (the
    // mutation handlers bump `refresh`); the service never auto-refreshes.
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
                    match console.roles().list(index, size).await {
                        Ok(listed) => page.set(Some(listed)),
                        Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                    }
                });
                || ()
            },
        );
    }

    let close_editor = {
        let editor = editor.clone();
        let name = name.clone();
        let description = description.clone();
        Callback::from(move |()| {
            editor.set(Editor::Closed);
            name.set(String::new());
            description.set(String::new());
        })
    };

    let open_create = {
        let editor = editor.clone();
        let name = name.clone();
        let description = description.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            description.set(String::new());
            editor.set(Editor::Creating);
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let name = name.clone();
        let description = description.clone();
        Callback::from(move |role: Role| {
            name.set(role.name.clone());
            description.set(role.description.clone());
            editor.set(Editor::Editing(role));
        })
    };

    let on_save = {
        let editor = editor.clone();
        let name = name.clone();
        let description = description.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let close_editor = close_editor.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let editor_value = (*editor).clone();
            let name_value = (*name).clone();
            let description_value = (*description).clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let close_editor = close_editor.clone();
            let toast_dispatch = toast_dispatch.clone();
            saving.set(true);
            spawn_local(async move {
                let console = console::shared();
                let result = match editor_value {
                    Editor::Creating => console
                        .roles()
                        .create(NewRole {
                            name: name_value,
                            description: description_value,
                        })
                        .await
                        .map(|_| "Role created"),
                    Editor::Editing(role) => console
                        .roles()
                        .update(
                            role.id,
                            RoleUpdate {
                                name: Some(name_value),
                                description: Some(description_value),
                            },
                        )
                        .await
                        .map(|_| "Role updated"),
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

    let on_delete = {
        let refresh = refresh.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |role: Role| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!(
                            "Are you sure you want to delete the role \"{}\"?",
                            role.name
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
                match console.roles().delete(role.id).await {
                    Ok(()) => {
                        toast_state::push_info(&toast_dispatch, "Role deleted");
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
            let rows = listed.items.iter().map(|role| {
                let edit = {
                    let open_edit = open_edit.clone();
                    let role = role.clone();
                    Callback::from(move |_: MouseEvent| open_edit.emit(role.clone()))
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let role = role.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(role.clone()))
                };
                html! {
                    <tr key={role.id}>
                        <td>{role.id}</td>
                        <td>{role.name.clone()}</td>
                        <td>{role.description.clone()}</td>
                        <td class="text-right">
                            <button class="btn btn-ghost btn-sm" onclick={edit} aria-label="edit role">
                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="h-4 w-4" />
                            </button>
                            <button class="btn btn-ghost btn-sm text-error" onclick={delete} aria-label="delete role">
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
                                    <th>{"Name"}</th>
                                    <th>{"Description"}</th>
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
        let heading = if matches!(*editor, Editor::Creating) {
            "Create role"
        } else {
            "Edit role"
        };
        let on_name = {
            let name = name.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    name.set(input.value());
                }
            })
        };
        let on_description = {
            let description = description.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                    description.set(input.value());
                }
            })
        };
        let cancel = {
            let close_editor = close_editor.clone();
            Callback::from(move |_: MouseEvent| close_editor.emit(()))
        };
        let disable_save = (*name).is_empty() || *saving;
        html! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{heading}</h3>
                    <form onsubmit={on_save.clone()}>
                        <div class="form-control">
                            <label class="label" for="role-name">
                                <span class="label-text">{"Name"}</span>
                            </label>
                            <input
                                id="role-name"
                                class="input input-bordered"
                                required=true
                                value={(*name).clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="role-description">
                                <span class="label-text">{"Description"}</span>
                            </label>
                            <textarea
                                id="role-description"
                                class="textarea textarea-bordered"
                                value={(*description).clone()}
                                oninput={on_description}
                            />
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn" onclick={cancel}>{"Cancel"}</button>
                            <button type="submit" class="btn btn-primary" disabled={disable_save}>
                                {if matches!(*editor, Editor::Creating) { "Create" } else { "Update" }}
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
                <h1 class="text-2xl font-bold">{"Roles"}</h1>
                <button class="btn btn-primary" onclick={open_create}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-5 w-5" />
                    {"Add role"}
                </button>
            </div>
            {table}
            {dialog}
        </div>
    }
}
