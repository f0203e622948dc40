//! Expandable simulator details card

use leptos::prelude::*;

use crate::api::DeviceClaim;
use crate::browser::open_window;
use crate::claims::simulator_launch_url;

/// Window name shared by every launch action
pub const SIMULATOR_WINDOW: &str = "ece-web-simulator";

/// Open the simulator page for a claim in a named window
pub fn launch_simulator(simulator_url: &str, claim: &DeviceClaim) {
    if let Some(url) = simulator_launch_url(simulator_url, claim) {
        open_window(&url, SIMULATOR_WINDOW);
    }
}

/// Card with a launch action and expandable device credentials
#[component]
pub fn SimulatorCard(simulator_url: String, claim: DeviceClaim) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let device_id = claim.id.clone().unwrap_or_default();
    let password = claim.password.clone().unwrap_or_default();

    let launch = {
        let simulator_url = simulator_url.clone();
        let claim = claim.clone();
        move |_| launch_simulator(&simulator_url, &claim)
    };

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.25rem; max-width: 400px; margin-top: 1rem;">
            <div style="display: flex; align-items: center; gap: 1rem; padding: 0.5rem;">
                <button on:click=move |_| expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "Hide" } else { "Details" }}
                </button>
                <span style="font-weight: 600; flex: 1;">"Simulator"</span>
                <button on:click=launch>"Simulator"</button>
            </div>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        view! {
                            <dl style="padding: 0 0.5rem 0.5rem; margin: 0;">
                                <dt style="font-weight: 600;">"Device"</dt>
                                <dd style="margin: 0 0 0.5rem;">{device_id.clone()}</dd>
                                <dt style="font-weight: 600;">"Password"</dt>
                                <dd style="margin: 0;">{password.clone()}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
