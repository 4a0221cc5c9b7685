use dioxus::prelude::*;

use ui::{AuthProvider, DraftProvider};
use views::{
    AppLayout, Dashboard, EditPost, Generate, Landing, Login, MyPosts, PostDetail, Posts, Premium,
    Signup, UserPosts, Write,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Landing {},
    #[route("/posts?:query")]
    Posts { query: String },
    #[route("/posts/:id")]
    PostDetail { id: i64 },
    #[route("/write")]
    Write {},
    #[route("/write/:id")]
    EditPost { id: i64 },
    #[route("/generate")]
    Generate {},
    #[route("/me/posts")]
    MyPosts {},
    #[route("/users/:user_id?:query")]
    UserPosts { user_id: i64, query: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/premium")]
    Premium {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::post;
    use dioxus::fullstack::prelude::{DioxusRouterExt, ServeConfigBuilder};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app with custom routes
    let router = axum::Router::new()
        // Payment provider webhook first; it is not a server function
        .route("/webhooks/billing", post(billing_webhook))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

/// Premium subscription webhook. The provider signs the raw body with a
/// shared secret; anything that fails verification is rejected before
/// parsing.
#[cfg(feature = "server")]
async fn billing_webhook(
    headers: axum::http::HeaderMap,
    body: String,
) -> axum::http::StatusCode {
    use axum::http::StatusCode;

    let Ok(secret) = std::env::var("BILLING_WEBHOOK_SECRET") else {
        tracing::error!("BILLING_WEBHOOK_SECRET is not configured");
        return StatusCode::INTERNAL_SERVER_ERROR;
    };

    let signature = headers
        .get("X-FS-Signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !api::billing::verify_signature(secret.as_bytes(), body.as_bytes(), signature) {
        tracing::warn!("rejected billing webhook with bad signature");
        return StatusCode::FORBIDDEN;
    }

    let events = match api::billing::parse_events(&body) {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("unreadable billing webhook: {e}");
            return StatusCode::BAD_REQUEST;
        }
    };

    let pool = match api::db::get_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("database unavailable for billing webhook: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    for event in &events {
        if let Err(e) = api::billing::apply_event(pool, event).await {
            tracing::error!("failed to apply billing event: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    StatusCode::OK
}

#[component]
fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(store::Theme::default()));

    // Restore the persisted theme once the client is up
    use_effect(move || {
        ui::load_theme_from_storage(theme);
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            DraftProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_search_query_survives_the_url() {
        let route = Route::Posts {
            query: "ferris".to_string(),
        };
        let url = route.to_string();
        assert_eq!(Route::from_str(&url).unwrap(), route);
    }

    #[test]
    fn test_routes_round_trip() {
        let routes = [
            Route::Landing {},
            Route::PostDetail { id: 7 },
            Route::UserPosts {
                user_id: 3,
                query: String::new(),
            },
            Route::MyPosts {},
            Route::Premium {},
        ];
        for route in routes {
            let url = route.to_string();
            assert_eq!(Route::from_str(&url).unwrap(), route);
        }
    }
}
