//! Toast notifications
//!
//! A [`Toaster`] handle is passed explicitly to every component that reports
//! command outcomes. Success toasts auto-dismiss in the browser; danger
//! toasts stay until dismissed.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
}

/// Handle for pushing and dismissing toasts
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        let id = self.push(ToastVariant::Success, title.into(), None);
        schedule_dismiss(*self, id);
    }

    pub fn danger(&self, title: impl Into<String>, description: Option<String>) {
        self.push(ToastVariant::Danger, title.into(), description);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    fn push(&self, variant: ToastVariant, title: String, description: Option<String>) -> u32 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                variant,
                title,
                description,
            })
        });
        id
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

fn schedule_dismiss(toaster: Toaster, id: u32) {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        const SUCCESS_DISMISS_MS: u32 = 5_000;
        gloo_timers::callback::Timeout::new(SUCCESS_DISMISS_MS, move || toaster.dismiss(id))
            .forget();
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = (toaster, id);
    }
}

/// Renders the toast stack in the top-right corner
#[component]
pub fn ToastList(toaster: Toaster) -> impl IntoView {
    view! {
        <div style="position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 100;">
            {move || {
                toaster
                    .toasts()
                    .into_iter()
                    .map(|toast| {
                        let (color, bg) = match toast.variant {
                            ToastVariant::Success => ("#155724", "#d4edda"),
                            ToastVariant::Danger => ("#721c24", "#f8d7da"),
                        };
                        let style = format!(
                            "padding: 0.75rem 1rem; border-radius: 0.25rem; min-width: 16rem; \
                             color: {}; background-color: {};",
                            color, bg
                        );
                        let id = toast.id;
                        view! {
                            <div style=style>
                                <div style="display: flex; justify-content: space-between; gap: 1rem;">
                                    <span style="font-weight: 600;">{toast.title}</span>
                                    <button
                                        style="border: none; background: none; cursor: pointer; color: inherit;"
                                        on:click=move |_| toaster.dismiss(id)
                                    >
                                        "\u{00d7}"
                                    </button>
                                </div>
                                {toast.description.map(|description| view! {
                                    <p style="margin: 0.25rem 0 0; font-size: 0.85em;">{description}</p>
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
