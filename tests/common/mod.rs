#![allow(dead_code)]
use restaurant_api::db::Storage;

/// Fresh in-memory database with the schema in place. A single connection
/// keeps every query on the same in-memory instance.
pub async fn memory_storage() -> Storage {
    let storage = Storage::connect("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory database");
    storage.ensure_schema().await.expect("failed to create tables");
    storage
}

/// Router as served in production, mounted under `/api`, backed by `$storage`.
macro_rules! spawn_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($storage.clone()))
                .configure(|cfg| restaurant_api::routes::configure(cfg, "/api")),
        )
        .await
    };
}

/// Sends a `TestRequest` and returns the status with the body parsed as
/// JSON (`Value::Null` for empty or non-JSON bodies).
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = actix_web::test::read_body(resp).await;
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }};
}
