//! Browser side of the rntly client: a `gloo-net` transport, a signal-backed
//! view store and the `window.confirm` prompt.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rntly_client::{
    ApiRequest, ApiResponse, ClientError, Confirm, Method, Properties, PropertyRecord, Resource,
    ResourceClient, ResourceView, Tenants, Transport, ViewState, ViewStore,
};
use rntly_domain::tenant::Tenant;

/// Mount point of the REST API on the serving host.
pub const API_BASE: &str = "/api";

fn network(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

/// [`Transport`] backed by the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let resp = match request.body {
            Some(body) => builder.json(&body).map_err(network)?.send().await,
            None => builder.send().await,
        }
        .map_err(network)?;

        Ok(ApiResponse {
            status: resp.status(),
            body: resp.text().await.map_err(network)?,
        })
    }
}

/// [`ViewStore`] over a Leptos signal, so views re-render on every change.
pub struct SignalStore<R: Resource>(RwSignal<ViewState<R>>);

impl<R: Resource> SignalStore<R> {
    pub fn new() -> Self {
        Self(RwSignal::new(ViewState::default()))
    }

    /// The underlying signal, for tracked reads in views.
    pub fn signal(&self) -> RwSignal<ViewState<R>> {
        self.0
    }
}

impl<R: Resource> Default for SignalStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Clone for SignalStore<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for SignalStore<R> {}

impl<R: Resource> ViewStore<R> for SignalStore<R> {
    fn with<O>(&self, f: impl FnOnce(&ViewState<R>) -> O) -> O {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut ViewState<R>)) {
        self.0.update(f);
    }
}

/// Blocking `window.confirm` prompt. Answers "no" outside a browser window.
#[derive(Debug, Clone, Copy)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// View controller as wired in the browser.
pub type Controller<R> = ResourceView<R, GlooTransport, SignalStore<R>>;

/// Create the controller of a list-and-form screen and start loading.
///
/// The controller is closed when the calling component is cleaned up, so a
/// response arriving after navigation is dropped.
pub fn use_controller<R: Resource>() -> Controller<R> {
    let controller = ResourceView::new(
        ResourceClient::new(GlooTransport::default()),
        SignalStore::new(),
    );

    let loader = controller.clone();
    spawn_local(async move { loader.load().await });

    let scope = controller.clone();
    on_cleanup(move || scope.close());

    controller
}

/// Fetch every property, logging and returning an empty list on failure.
///
/// Used to fill pickers, where a failure should not block the page.
pub async fn fetch_property_options() -> Vec<PropertyRecord> {
    ResourceClient::<Properties, _>::new(GlooTransport::default())
        .list()
        .await
        .unwrap_or_else(|err| {
            leptos::logging::warn!("failed to fetch properties: {err}");
            Vec::new()
        })
}

/// Fetch every tenant, logging and returning an empty list on failure.
pub async fn fetch_tenant_options() -> Vec<Tenant> {
    ResourceClient::<Tenants, _>::new(GlooTransport::default())
        .list()
        .await
        .unwrap_or_else(|err| {
            leptos::logging::warn!("failed to fetch tenants: {err}");
            Vec::new()
        })
}

/// Summary counts for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCounts {
    pub properties: usize,
    pub vacant: usize,
    pub tenants: usize,
    pub leases: usize,
}

/// Fetch record counts for the home page.
///
/// # Errors
///
/// Returns the first failing request's message.
pub async fn fetch_dashboard_counts() -> Result<DashboardCounts, String> {
    let transport = GlooTransport::default();
    let properties = ResourceClient::<Properties, _>::new(transport.clone())
        .list()
        .await
        .map_err(|err| err.to_string())?;
    let tenants = ResourceClient::<Tenants, _>::new(transport.clone())
        .list()
        .await
        .map_err(|err| err.to_string())?;
    let leases = ResourceClient::<rntly_client::Leases, _>::new(transport)
        .list()
        .await
        .map_err(|err| err.to_string())?;

    Ok(DashboardCounts {
        vacant: properties.iter().filter(|p| p.is_vacant()).count(),
        properties: properties.len(),
        tenants: tenants.len(),
        leases: leases.len(),
    })
}
