//! Dismissable error alert component.

use dioxus::prelude::*;

/// A dismissable error alert with an optional retry action. Pages feed it
/// the display form of an `ApiError`.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: EventHandler<()>,
    /// When set, renders a retry button wired to this handler
    #[props(default)]
    on_retry: Option<EventHandler<()>>,
) -> Element {
    let retry = on_retry;

    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            div { class: "alert-actions",
                if retry.is_some() {
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| {
                            if let Some(retry) = &retry {
                                retry.call(());
                            }
                        },
                        "Retry"
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
