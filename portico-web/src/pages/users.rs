use crate::components::{loading::Loading, paginator::Paginator};
use crate::console;
use crate::models::toast_state::{self, ToastState};
use shared::models::{DEFAULT_PAGE_SIZE, NewUser, Page, User, UserUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Modal editor state; at most one dialog is ever open.
#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Creating,
    Editing(User),
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let page = use_state(|| None::<Page<User>>);
    let page_index = use_state(|| 0_u32);
    let page_size = use_state(|| DEFAULT_PAGE_SIZE);
    let refresh = use_state(|| 0_u32);
    let editor = use_state(|| Editor::Closed);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
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
                    match console.users().list(index, size).await {
                        Ok(listed) => page.set(Some(listed)),
                        Err(err) => toast_state::push_error(&toast_dispatch, err.to_string()),
                    }
                });
                || ()
            },
        );
    }

    // Closing by any path resets the form and restores the password
    // requirement (it is keyed off `Editor::Creating` below).
    let close_editor = {
        let editor = editor.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |()| {
            editor.set(Editor::Closed);
            name.set(String::new());
            email.set(String::new());
            password.set(String::new());
        })
    };

    let open_create = {
        let editor = editor.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            email.set(String::new());
            password.set(String::new());
            editor.set(Editor::Creating);
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |user: User| {
            name.set(user.name.clone());
            email.set(user.email.clone());
            // Editing never requires a password; leave the field blank.
            password.set(String::new());
            editor.set(Editor::Editing(user));
        })
    };

    let on_save = {
        let editor = editor.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let close_editor = close_editor.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let editor_value = (*editor).clone();
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let close_editor = close_editor.clone();
            let toast_dispatch = toast_dispatch.clone();
            saving.set(true);
            spawn_local(async move {
                let console = console::shared();
                let result = match editor_value {
                    Editor::Creating => console
                        .users()
                        .create(
                            NewUser {
                                name: name_value,
                                email: email_value,
                            },
                            &password_value,
                        )
                        .await
                        .map(|_| "User created"),
                    Editor::Editing(user) => {
                        let new_password = if password_value.is_empty() {
                            None
                        } else {
                            Some(password_value.as_str())
                        };
                        console
                            .users()
                            .update(
                                user.id,
                                UserUpdate {
                                    name: Some(name_value),
                                    email: Some(email_value),
                                },
                                new_password,
                            )
                            .await
                            .map(|_| "User updated")
                    }
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
        Callback::from(move |user: User| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!(
                            "Are you sure you want to delete the user \"{}\"?",
                            user.name
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
                match console.users().delete(user.id).await {
                    Ok(()) => {
                        toast_state::push_info(&toast_dispatch, "User deleted");
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
            let rows = listed.items.iter().map(|user| {
                let edit = {
                    let open_edit = open_edit.clone();
                    let user = user.clone();
                    Callback::from(move |_: MouseEvent| open_edit.emit(user.clone()))
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let user = user.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(user.clone()))
                };
                html! {
                    <tr key={user.id}>
                        <td>{user.id}</td>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td class="text-right">
                            <button class="btn btn-ghost btn-sm" onclick={edit} aria-label="edit user">
                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="h-4 w-4" />
                            </button>
                            <button class="btn btn-ghost btn-sm text-error" onclick={delete} aria-label="delete user">
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
                                    <th>{"Email"}</th>
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
        let heading = if is_creating { "Create user" } else { "Edit user" };
        let on_name = {
            let name = name.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    name.set(input.value());
                }
            })
        };
        let on_email = {
            let email = email.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    email.set(input.value());
                }
            })
        };
        let on_password = {
            let password = password.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    password.set(input.value());
                }
            })
        };
        let cancel = {
            let close_editor = close_editor.clone();
            Callback::from(move |_: MouseEvent| close_editor.emit(()))
        };
        let missing_password = is_creating && (*password).is_empty();
        let disable_save =
            (*name).is_empty() || (*email).is_empty() || missing_password || *saving;
        html! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{heading}</h3>
                    <form onsubmit={on_save.clone()}>
                        <div class="form-control">
                            <label class="label" for="user-name">
                                <span class="label-text">{"Name"}</span>
                            </label>
                            <input
                                id="user-name"
                                class="input input-bordered"
                                required=true
                                value={(*name).clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="user-email">
                                <span class="label-text">{"Email"}</span>
                            </label>
                            <input
                                id="user-email"
                                class="input input-bordered"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="user-password">
                                <span class="label-text">
                                    {if is_creating { "Password" } else { "Password (leave blank to keep)" }}
                                </span>
                            </label>
                            <input
                                id="user-password"
                                class="input input-bordered"
                                type="password"
                                required={is_creating}
                                value={(*password).clone()}
                                oninput={on_password}
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
                <h1 class="text-2xl font-bold">{"Users"}</h1>
                <button class="btn btn-primary" onclick={open_create}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-5 w-5" />
                    {"Add user"}
                </button>
            </div>
            {table}
            {dialog}
        </div>
    }
}
