//! Notification Host Components
//!
//! Render the toast stack and open dialogs of the `NotificationCenter`
//! provided through context.

use leptos::prelude::*;

use crate::center::NotificationCenter;
use crate::dialog::{Dialog, DialogAction, DialogPhase};
use crate::toast::Toast;

/// Toasts and dialogs together; mount once near the root
#[component]
pub fn NotificationHost() -> impl IntoView {
    view! {
        <ToastHost />
        <DialogHost />
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();
    let toasts = center.toasts();

    view! {
        <div id="varon-notifications" class="varon-notification-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast center=center /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, center: NotificationCenter) -> impl IntoView {
    let id = toast.id;
    // Stage changes keep the same node so CSS transitions run
    let class = move || center.toast(id).map(|t| t.class()).unwrap_or_default();

    view! {
        <div class=class role="status">
            <div class="varon-notification-icon">{toast.kind.icon()}</div>
            <div class="varon-notification-message">{toast.message}</div>
            <button
                class="varon-notification-close"
                aria-label="Close"
                on:click=move |_| {
                    center.dismiss(id);
                }
            >
                "×"
            </button>
        </div>
    }
}

#[component]
pub fn DialogHost() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();
    let dialogs = center.dialogs();

    view! {
        <For
            each=move || dialogs.get()
            key=|dialog| dialog.id
            children=move |dialog| view! { <DialogView dialog=dialog center=center /> }
        />
    }
}

#[component]
fn DialogView(dialog: Dialog, center: NotificationCenter) -> impl IntoView {
    let id = dialog.id;
    let icon = dialog.icon();
    let class = move || center.dialog(id).map(|d| d.class()).unwrap_or("varon-modal");
    let icon_class = format!("varon-modal-icon varon-modal-icon-{}", dialog.kind.as_str());
    let confirm_class = format!("varon-modal-btn varon-modal-btn-{}", dialog.confirm_style.as_str());

    let input_ref = NodeRef::<leptos::html::Input>::new();
    // `autofocus` only applies to the first candidate in a document
    Effect::new(move |was_shown: Option<bool>| {
        let shown = center.dialog(id).is_some_and(|d| d.phase == DialogPhase::Shown);
        if just_shown(was_shown, shown) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
        shown
    });

    let input = dialog.prompt.map(|field| {
        view! {
            <input
                node_ref=input_ref
                type=field.input_type
                class="varon-modal-input"
                placeholder=field.placeholder
                prop:value=field.value
                on:input=move |ev| center.set_prompt_value(id, event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        center.respond(id, DialogAction::Enter);
                    }
                }
            />
        }
    });

    view! {
        <div class=class role="dialog" aria-modal="true">
            <div
                class="varon-modal-backdrop"
                on:click=move |_| {
                    center.respond(id, DialogAction::Backdrop);
                }
            ></div>
            <div class="varon-modal-content">
                <div class="varon-modal-header">
                    <div class=icon_class>{icon}</div>
                    <h3>{dialog.title}</h3>
                </div>
                <div class="varon-modal-body">
                    <p>{dialog.message}</p>
                    {input}
                </div>
                <div class="varon-modal-footer">
                    <button
                        class="varon-modal-btn varon-modal-btn-cancel"
                        on:click=move |_| {
                            center.respond(id, DialogAction::Cancel);
                        }
                    >
                        {dialog.cancel_label}
                    </button>
                    <button
                        class=confirm_class
                        on:click=move |_| {
                            center.respond(id, DialogAction::Confirm);
                        }
                    >
                        {dialog.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn just_shown(was_shown: Option<bool>, shown: bool) -> bool {
    shown && was_shown != Some(true)
}
