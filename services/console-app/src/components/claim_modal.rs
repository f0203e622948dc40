//! Claim-device modal with device-id validation

use leptos::prelude::*;

/// Validation state of the device-id field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validated {
    Success,
    Error,
}

/// Empty device ids are rejected; anything else passes
pub fn validate_device_id(value: &str) -> Validated {
    if value.is_empty() {
        Validated::Error
    } else {
        Validated::Success
    }
}

/// Modal dialog asking for the id of the device to claim
///
/// The claim action stays disabled while the field fails validation.
#[component]
pub fn ClaimModal(open: RwSignal<bool>, #[prop(into)] on_claim: Callback<String>) -> impl IntoView {
    let device_id = RwSignal::new(String::new());
    let validated = Memo::new(move |_| validate_device_id(&device_id.get()));

    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center;">
                            <div style="background: white; border-radius: 0.25rem; padding: 1.5rem; min-width: 24rem; text-align: left;">
                                <h3 style="margin-top: 0;">"Claim device"</h3>
                                <form on:submit=move |ev| {
                                    ev.prevent_default();
                                    if validated.get() == Validated::Success {
                                        on_claim.run(device_id.get());
                                    }
                                }>
                                    <label for="claim-device-id">"Device ID"</label>
                                    <input
                                        id="claim-device-id"
                                        type="text"
                                        style="display: block; width: 100%; margin: 0.5rem 0; padding: 0.25rem;"
                                        prop:value=move || device_id.get()
                                        on:input=move |ev| device_id.set(event_target_value(&ev))
                                    />
                                    {move || {
                                        (validated.get() == Validated::Error)
                                            .then(|| {
                                                view! {
                                                    <p style="color: #721c24; font-size: 0.85em; margin: 0;">
                                                        "Must not be empty"
                                                    </p>
                                                }
                                            })
                                    }}
                                    <div style="display: flex; gap: 0.5rem; margin-top: 1rem;">
                                        <button
                                            type="submit"
                                            disabled=move || validated.get() != Validated::Success
                                        >
                                            "Claim"
                                        </button>
                                        <button type="button" on:click=move |_| open.set(false)>
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
