//! Request tests against the `test` environment.
//!
//! ```rust,ignore
//! use notes_api::{app::App, testing};
//!
//! #[tokio::test]
//! async fn can_list_notes() {
//!     testing::request::<App, _, _>(|server, _ctx| async move {
//!         server.get("/api/notes").await.assert_status_ok();
//!     })
//!     .await;
//! }
//! ```

use std::future::Future;

pub use axum_test::TestServer;
use axum_test::TestServerConfig;

use crate::{
    app::{AppContext, Hooks},
    boot::{self, BootResult},
    environment::Environment,
    Result,
};

/// Insta filter replacing note ids, which are random, with `ID`.
pub const NOTE_ID_FILTER: (&str, &str) = (
    r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
    "ID",
);

/// Filters for `insta::with_settings!` that make note bodies stable.
#[must_use]
pub fn cleanup_note_model() -> Vec<(&'static str, &'static str)> {
    vec![NOTE_ID_FILTER]
}

/// Boot the application with `config/test.yaml`.
///
/// # Errors
///
/// When the configuration does not load or the database is unreachable.
pub async fn boot_test<H: Hooks>() -> Result<BootResult> {
    let config = Environment::Test.load()?;
    boot::create_app::<H>(&Environment::Test, config).await
}

/// Boot a fresh application and hand `callback` a server driving its router
/// in-process. Bodies default to `application/json`.
///
/// # Panics
///
/// When the application does not boot.
#[allow(clippy::future_not_send)]
pub async fn request<H: Hooks, F, Fut>(callback: F)
where
    F: FnOnce(TestServer, AppContext) -> Fut,
    Fut: Future<Output = ()>,
{
    let BootResult {
        app_context,
        router,
    } = boot_test::<H>().await.expect("boot the test application");

    let server = TestServer::new_with_config(
        router,
        TestServerConfig {
            default_content_type: Some("application/json".to_string()),
            ..TestServerConfig::default()
        },
    )
    .expect("start the test server");

    callback(server, app_context).await;
}
