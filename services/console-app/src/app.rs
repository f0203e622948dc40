//! Main App component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::Auth;
use crate::browser::{document_origin, location_fragment};
use crate::components::dashboard::Dashboard;
use crate::components::toast::{ToastList, Toaster};
use crate::endpoints::{resolve_endpoints, Endpoints};
use crate::io::default_client;
use crate::service::Service;

/// Root application component
///
/// Resolves the backend endpoints once at start; nothing is rendered until
/// the document is loaded, and a failed resolution leaves the dashboard
/// blank for the rest of the session.
#[component]
pub fn App() -> impl IntoView {
    let toaster = Toaster::new();
    let auth = Auth::from_fragment(&location_fragment());
    let endpoints = RwSignal::new(Service::<Endpoints>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let http = default_client(None);
            endpoints.set(resolve_endpoints(&http, &document_origin()).await);
        });
    });

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"Device Console"</h1>
            <ToastList toaster=toaster />
            {move || match endpoints.get() {
                Service::Loaded(endpoints) => {
                    view! {
                        <Dashboard endpoints=endpoints auth=auth.clone() toaster=toaster />
                    }
                        .into_any()
                }
                Service::Init | Service::Loading | Service::Error(_) => ().into_any(),
            }}
        </main>
    }
}
