use crate::{
    app::{App, AppContext, Hooks},
    boot,
    environment::Environment,
    tests_cfg::config::test_config,
};

/// A context over a fresh in-memory database that already has its tables.
pub async fn get_app_context() -> AppContext {
    let ctx = boot::create_context(&Environment::Test, test_config())
        .await
        .expect("connect to the in-memory database");
    App::migrate(&ctx.db).await.expect("create tables");
    ctx
}
