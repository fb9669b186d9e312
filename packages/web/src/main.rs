use civic::Tab;
use dioxus::prelude::*;

use ui::ConfigProvider;
use views::{About, Awareness, Civic, CivicLens, Complaint, Home, Legal, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/legal")]
        Legal {},
        #[route("/civic")]
        Civic {},
        #[route("/complaint")]
        Complaint {},
        #[route("/awareness")]
        Awareness {},
        #[route("/civic-lens")]
        CivicLens {},
        #[route("/about")]
        About {},
}

impl From<Tab> for Route {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Home => Route::Home {},
            Tab::Legal => Route::Legal {},
            Tab::Civic => Route::Civic {},
            Tab::Complaint => Route::Complaint {},
            Tab::Awareness => Route::Awareness {},
            Tab::CivicLens => Route::CivicLens {},
            Tab::About => Route::About {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => eprintln!("Failed to start the async runtime: {e}"),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    // Incomplete configuration still serves the app; gated tabs explain what is missing.
    let state = gateway::AppState::from_config(gateway::AppConfig::load());

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(axum::Extension(state));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server stopped: {}", e);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider {
            Router::<Route> {}
        }
    }
}
