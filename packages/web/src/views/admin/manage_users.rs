//! User administration: list, on-demand detail modal, edit, delete.

use api::UserDetail;
use dioxus::prelude::*;
use session::UserRecord;

use ui::components::{
    Button, ButtonVariant, ConfirmDialog, ModalOverlay, StatusBanner, StatusKind,
};
use ui::icons::{FaEye, FaPencil, FaTrash};
use ui::{make_client, Icon};

use crate::Route;

#[component]
pub fn ManageUsers() -> Element {
    let nav = use_navigator();
    let mut users = use_signal(Vec::<UserRecord>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut detail = use_signal(|| Option::<UserDetail>::None);
    let mut confirm_delete = use_signal(|| Option::<u64>::None);
    let mut deleting = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match make_client().users().await {
            Ok(list) => users.set(list),
            Err(err) => {
                tracing::error!("Error fetching users: {err}");
                error.set(Some("Failed to load users. Please try again.".to_string()));
            }
        }
        loading.set(false);
    });

    // Enrolled-course summary is fetched on demand, not with the list.
    let handle_view = move |user_id: u64| {
        spawn(async move {
            match make_client().user_detail(user_id).await {
                Ok(loaded) => detail.set(Some(loaded)),
                Err(err) => {
                    tracing::error!("Error fetching user details: {err}");
                    error.set(Some("Failed to load user details.".to_string()));
                }
            }
        });
    };

    let handle_delete = move |user_id: u64| {
        spawn(async move {
            deleting.set(true);
            match make_client().delete_user(user_id).await {
                Ok(()) => {
                    users.with_mut(|list| list.retain(|user| user.id != user_id));
                }
                Err(err) => {
                    tracing::error!("Error deleting user: {err}");
                    error.set(Some("Failed to delete user.".to_string()));
                }
            }
            deleting.set(false);
            confirm_delete.set(None);
        });
    };

    rsx! {
        div {
            class: "view-page",
            h2 { "Manage Users" }
            p { class: "view-muted", "View and manage users." }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            if loading() {
                p { class: "view-muted", "Loading users..." }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in users() {
                            tr {
                                key: "{user.id}",
                                td { "{user.id}" }
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { span { class: "badge badge-role", "{user.role}" } }
                                td {
                                    class: "cell-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| handle_view(user.id),
                                        Icon { icon: FaEye, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| { nav.push(Route::EditUser { id: user.id }); },
                                        Icon { icon: FaPencil, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: move |_| confirm_delete.set(Some(user.id)),
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(loaded) = detail() {
            ModalOverlay {
                on_close: move |_| detail.set(None),
                div {
                    class: "dialog-body",
                    h3 { class: "dialog-title", "{loaded.user.name}" }
                    p { class: "view-muted", "{loaded.user.email}" }
                    p {
                        "Role: "
                        span { class: "badge badge-role", "{loaded.user.role}" }
                    }

                    h4 { "Enrolled Courses ({loaded.courses.len()})" }
                    if loaded.courses.is_empty() {
                        p { class: "view-muted", "Not enrolled in any courses." }
                    } else {
                        ul {
                            class: "user-list",
                            for course in loaded.courses.iter() {
                                li {
                                    key: "{course.id}",
                                    span { "{course.title}" }
                                    span { class: "view-muted", "${course.price}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| detail.set(None),
                            "Close"
                        }
                    }
                }
            }
        }

        if let Some(user_id) = confirm_delete() {
            ConfirmDialog {
                title: "Delete User",
                message: "Are you sure you want to delete this user? This cannot be undone.",
                confirm_label: "Delete",
                danger: true,
                busy: deleting(),
                on_confirm: move |_| handle_delete(user_id),
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
