//! Device claim dashboard
//!
//! Renders nothing until the claim status is loaded, then either the claimed
//! view or the empty state. Every claim action performs one request, shows a
//! toast, and bumps the reload counter regardless of the outcome so the view
//! converges on server truth instead of optimistic local state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DeviceClaim;
use crate::auth::Auth;
use crate::claims::{claim_device, create_simulator, fetch_claim, release_device};
use crate::components::claim_modal::ClaimModal;
use crate::components::display_control::DisplayControl;
use crate::components::simulator_card::{launch_simulator, SimulatorCard};
use crate::components::toast::Toaster;
use crate::endpoints::Endpoints;
use crate::io::default_client;
use crate::service::Service;

#[component]
pub fn Dashboard(endpoints: Endpoints, auth: Auth, toaster: Toaster) -> impl IntoView {
    let claim = RwSignal::new(Service::<DeviceClaim>::Init);
    let reload = RwSignal::new(0u32);
    let modal_open = RwSignal::new(false);

    {
        let endpoints = endpoints.clone();
        let token = auth.token();
        Effect::new(move |_| {
            reload.track();
            claim.set(Service::Loading);
            let endpoints = endpoints.clone();
            let token = token.clone();
            spawn_local(async move {
                let http = default_client(Some(token));
                claim.set(fetch_claim(&http, &endpoints).await.into());
            });
        });
    }

    let on_claim = {
        let endpoints = endpoints.clone();
        let token = auth.token();
        Callback::new(move |device_id: String| {
            let endpoints = endpoints.clone();
            let token = token.clone();
            spawn_local(async move {
                let http = default_client(Some(token));
                match claim_device(&http, &endpoints, &device_id).await {
                    Ok(()) => toaster.success("Claimed device"),
                    Err(e) => {
                        let description = e.description().map(str::to_string);
                        toaster.danger(format!("Failed to claim device: {}", e), description);
                    }
                }
                modal_open.set(false);
                reload.update(|n| *n += 1);
            });
        })
    };

    let on_release = {
        let endpoints = endpoints.clone();
        let token = auth.token();
        Callback::new(move |()| {
            let endpoints = endpoints.clone();
            let token = token.clone();
            spawn_local(async move {
                let http = default_client(Some(token));
                match release_device(&http, &endpoints).await {
                    Ok(()) => toaster.success("Released device"),
                    Err(e) => {
                        let description = e.description().map(str::to_string);
                        toaster.danger(format!("Failed to release device: {}", e), description);
                    }
                }
                reload.update(|n| *n += 1);
            });
        })
    };

    let on_create_simulator = {
        let endpoints = endpoints.clone();
        let token = auth.token();
        Callback::new(move |()| {
            let endpoints = endpoints.clone();
            let token = token.clone();
            spawn_local(async move {
                let http = default_client(Some(token));
                match create_simulator(&http, &endpoints).await {
                    Ok(()) => toaster.success("Simulator created"),
                    Err(e) => {
                        let description = e.description().map(str::to_string);
                        toaster.danger(format!("Failed to create simulator: {}", e), description);
                    }
                }
                reload.update(|n| *n += 1);
            });
        })
    };

    view! {
        {move || match claim.get() {
            Service::Loaded(claim) if claim.is_claimed() => {
                view! {
                    <ClaimedView
                        claim=claim
                        endpoints=endpoints.clone()
                        auth=auth.clone()
                        toaster=toaster
                        on_release=on_release
                    />
                }
                    .into_any()
            }
            Service::Loaded(_) => {
                view! {
                    <EmptyView
                        modal_open=modal_open
                        on_claim=on_claim
                        on_create_simulator=on_create_simulator
                    />
                }
                    .into_any()
            }
            Service::Init | Service::Loading | Service::Error(_) => ().into_any(),
        }}
    }
}

/// Toolbar, display control, and simulator card for a claimed device
#[component]
fn ClaimedView(
    claim: DeviceClaim,
    endpoints: Endpoints,
    auth: Auth,
    toaster: Toaster,
    #[prop(into)] on_release: Callback<()>,
) -> impl IntoView {
    // Launch actions only exist for simulator-class devices with a
    // configured simulator page
    let simulator_url = claim
        .is_simulator()
        .then(|| endpoints.simulator_url().map(str::to_string))
        .flatten();
    let device_id = claim.id.clone().unwrap_or_default();

    let toolbar_launch = simulator_url.clone().map(|url| {
        let claim = claim.clone();
        view! {
            <button
                style="border: none; background: none; color: #0066cc; cursor: pointer;"
                on:click=move |_| launch_simulator(&url, &claim)
            >
                "Simulator"
            </button>
        }
    });

    let card = simulator_url.map(|url| {
        let claim = claim.clone();
        view! { <SimulatorCard simulator_url=url claim=claim /> }
    });

    view! {
        <section>
            <div style="display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0;">
                <span style="font-weight: 600;">"Claimed"</span>
                <span>{device_id}</span>
                {toolbar_launch}
                <button
                    style="color: #721c24; border: 1px solid #721c24; background: none; cursor: pointer; padding: 0.25rem 0.75rem;"
                    on:click=move |_| on_release.run(())
                >
                    "Release"
                </button>
            </div>
            <DisplayControl endpoints=endpoints auth=auth toaster=toaster />
            {card}
        </section>
    }
}

/// Empty state with the claim modal and the create-simulator action
#[component]
fn EmptyView(
    modal_open: RwSignal<bool>,
    #[prop(into)] on_claim: Callback<String>,
    #[prop(into)] on_create_simulator: Callback<()>,
) -> impl IntoView {
    view! {
        <section style="text-align: center; padding: 3rem 1rem;">
            <h2>"No device claimed"</h2>
            <p>"You have not yet claimed a device."</p>
            <button
                style="padding: 0.5rem 1rem; cursor: pointer;"
                on:click=move |_| modal_open.set(true)
            >
                "Claim device"
            </button>
            <div style="margin-top: 0.5rem;">
                <button
                    style="border: none; background: none; color: #0066cc; cursor: pointer;"
                    on:click=move |_| on_create_simulator.run(())
                >
                    "Create simulator"
                </button>
            </div>
            <ClaimModal open=modal_open on_claim=on_claim />
        </section>
    }
}
