//! Display command panel
//!
//! Pushes brightness and on/off settings to the claimed device. Commands do
//! not change claim ownership, so no claim refetch follows them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DisplaySettings;
use crate::auth::Auth;
use crate::commands::set_display;
use crate::components::toast::Toaster;
use crate::endpoints::Endpoints;
use crate::io::default_client;

#[component]
pub fn DisplayControl(endpoints: Endpoints, auth: Auth, toaster: Toaster) -> impl IntoView {
    let brightness = RwSignal::new(128u8);
    let enabled = RwSignal::new(true);

    let on_apply = move |_| {
        let endpoints = endpoints.clone();
        let token = auth.token();
        spawn_local(async move {
            let http = default_client(Some(token));
            let display = DisplaySettings {
                brightness: brightness.get_untracked(),
                enabled: enabled.get_untracked(),
            };
            match set_display(&http, &endpoints, &display).await {
                Ok(()) => toaster.success("Display settings applied"),
                Err(e) => {
                    let description = e.description().map(str::to_string);
                    toaster.danger(format!("Failed to apply display settings: {}", e), description);
                }
            }
        });
    };

    view! {
        <div style="display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0;">
            <span style="font-weight: 600;">"Display"</span>
            <label>
                "Brightness "
                <input
                    type="range"
                    min="0"
                    max="255"
                    prop:value=move || brightness.get().to_string()
                    on:input=move |ev| {
                        brightness.set(event_target_value(&ev).parse().unwrap_or_default())
                    }
                />
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || enabled.get()
                    on:change=move |ev| enabled.set(event_target_checked(&ev))
                />
                " Enabled"
            </label>
            <button on:click=on_apply>"Apply"</button>
        </div>
    }
}
