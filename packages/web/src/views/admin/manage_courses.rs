//! Course administration: list, create/edit modal, delete confirmation,
//! and the per-course enrolled-users modal.
//!
//! One modal serves both create and edit; the presence of an id in the
//! draft decides which operation the submit performs.

use api::{Course, CourseDraft, ThumbnailFile};
use dioxus::prelude::*;
use session::UserRecord;

use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, StatusBanner, StatusKind,
    Textarea,
};
use ui::icons::{FaPencil, FaPlus, FaTrash, FaUsers};
use ui::{make_client, Icon};

#[component]
pub fn ManageCourses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut draft = use_signal(CourseDraft::default);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<u64>::None);
    let mut deleting = use_signal(|| false);
    let mut enrolled_users = use_signal(|| Option::<(String, Vec<UserRecord>)>::None);

    let refresh = move || async move {
        match make_client().courses().await {
            Ok(list) => {
                courses.set(list);
                error.set(None);
            }
            Err(err) => {
                tracing::error!("Error fetching courses: {err}");
                error.set(Some(
                    "Failed to load courses. Please try again.".to_string(),
                ));
            }
        }
    };

    let _loader = use_resource(refresh);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            match make_client().save_course(&draft()).await {
                Ok(()) => {
                    show_form.set(false);
                    draft.set(CourseDraft::default());
                    refresh().await;
                }
                Err(err) => {
                    tracing::error!("Error saving course: {err}");
                    error.set(Some(err.message()));
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |course_id: u64| {
        spawn(async move {
            deleting.set(true);
            match make_client().delete_course(course_id).await {
                Ok(()) => refresh().await,
                Err(err) => {
                    tracing::error!("Error deleting course: {err}");
                    error.set(Some(
                        "Failed to delete course. Please try again.".to_string(),
                    ));
                }
            }
            deleting.set(false);
            confirm_delete.set(None);
        });
    };

    let handle_show_users = move |course: Course| {
        spawn(async move {
            match make_client().course_users(course.id).await {
                Ok(users) => enrolled_users.set(Some((course.title, users))),
                Err(err) => {
                    tracing::error!("Error fetching course users: {err}");
                    error.set(Some("Failed to load enrolled users.".to_string()));
                }
            }
        });
    };

    let handle_pick_thumbnail = move |evt: FormEvent| {
        spawn(async move {
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(file_name) = engine.files().first().cloned() else {
                return;
            };
            if let Some(bytes) = engine.read_file(&file_name).await {
                draft.with_mut(|d| d.thumbnail = Some(ThumbnailFile { file_name, bytes }));
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            header {
                class: "view-header",
                h2 { "Manage Courses" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        draft.set(CourseDraft::default());
                        show_form.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Course"
                }
            }

            if let Some(err) = error() {
                StatusBanner { kind: StatusKind::Error, message: err }
            }

            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Description" }
                        th { "Price" }
                        th { "Preview Content" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for course in courses() {
                        CourseRow {
                            key: "{course.id}",
                            course: course,
                            on_edit: move |course: Course| {
                                draft.set(CourseDraft::from_course(&course));
                                show_form.set(true);
                            },
                            on_users: move |course: Course| handle_show_users(course),
                            on_delete: move |course_id: u64| confirm_delete.set(Some(course_id)),
                        }
                    }
                }
            }
        }

        // Create/edit modal
        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                form {
                    class: "dialog-body",
                    onsubmit: handle_save,
                    h3 {
                        class: "dialog-title",
                        if draft().id.is_some() { "Edit Course" } else { "Add Course" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "course-title", "Title" }
                        Input {
                            id: "course-title",
                            value: draft().title,
                            required: true,
                            oninput: move |evt: FormEvent| draft.with_mut(|d| d.title = evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "course-description", "Description" }
                        Textarea {
                            id: "course-description",
                            value: draft().description,
                            oninput: move |evt: FormEvent| draft.with_mut(|d| d.description = evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "course-price", "Price" }
                        Input {
                            id: "course-price",
                            r#type: "number",
                            value: draft().price,
                            required: true,
                            oninput: move |evt: FormEvent| draft.with_mut(|d| d.price = evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "course-content", "Course Content" }
                        Textarea {
                            id: "course-content",
                            rows: 6,
                            value: draft().viewer_content,
                            oninput: move |evt: FormEvent| draft.with_mut(|d| d.viewer_content = evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "course-thumbnail", "Thumbnail" }
                        input {
                            id: "course-thumbnail",
                            r#type: "file",
                            accept: "image/*",
                            onchange: handle_pick_thumbnail,
                        }
                        if let Some(ref picked) = draft().thumbnail {
                            p { class: "view-muted", "Selected: {picked.file_name}" }
                        } else if draft().id.is_some() {
                            p { class: "view-muted", "Leave empty to keep the current thumbnail." }
                        }
                    }

                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_form.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() {
                                "Saving..."
                            } else if draft().id.is_some() {
                                "Update Course"
                            } else {
                                "Create Course"
                            }
                        }
                    }
                }
            }
        }

        // Delete confirmation
        if let Some(course_id) = confirm_delete() {
            ConfirmDialog {
                title: "Delete Course",
                message: "Are you sure you want to delete this course?",
                confirm_label: "Delete",
                danger: true,
                busy: deleting(),
                on_confirm: move |_| handle_delete(course_id),
                on_cancel: move |_| confirm_delete.set(None),
            }
        }

        // Enrolled users modal
        if let Some((course_title, users)) = enrolled_users() {
            ModalOverlay {
                on_close: move |_| enrolled_users.set(None),
                div {
                    class: "dialog-body",
                    h3 { class: "dialog-title", "Enrolled Users: {course_title}" }
                    if users.is_empty() {
                        p { class: "view-muted", "No users are enrolled in this course." }
                    } else {
                        ul {
                            class: "user-list",
                            for user in users {
                                li {
                                    key: "{user.id}",
                                    span { "{user.name}" }
                                    span { class: "view-muted", "{user.email}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| enrolled_users.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseRow(
    course: Course,
    on_edit: EventHandler<Course>,
    on_users: EventHandler<Course>,
    on_delete: EventHandler<u64>,
) -> Element {
    let edit_course = course.clone();
    let users_course = course.clone();
    let course_id = course.id;

    rsx! {
        tr {
            td { "{course.title}" }
            td { class: "cell-truncate", "{course.description}" }
            td { "${course.price}" }
            td {
                class: "cell-truncate",
                {course.viewer_content.clone().unwrap_or_default()}
            }
            td {
                class: "cell-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(edit_course.clone()),
                    Icon { icon: FaPencil, width: 14, height: 14 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_users.call(users_course.clone()),
                    Icon { icon: FaUsers, width: 14, height: 14 }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_delete.call(course_id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}
