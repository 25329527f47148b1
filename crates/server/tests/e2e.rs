use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use models::{Content, Project};
use server::{startup::build_app, state::AppState};
use service::errors::StoreError;
use service::store::MemoryDocumentStore;
use service::{Document, DocumentStore, Filter};

struct TestApp {
    base_url: String,
    store: Option<Arc<dyn DocumentStore>>,
}

async fn serve(state: AppState) -> anyhow::Result<String> {
    let app = build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new("e2e"));
    let base_url = serve(AppState::new(Arc::clone(&store))).await?;
    Ok(TestApp { base_url, store: Some(store) })
}

async fn start_server_with(state: AppState) -> anyhow::Result<TestApp> {
    let store = state.store().cloned();
    let base_url = serve(state).await?;
    Ok(TestApp { base_url, store })
}

/// Refuses every operation as if the database host were down.
struct DownStore;

fn refused() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl DocumentStore for DownStore {
    fn name(&self) -> String { "down".into() }
    async fn ping(&self) -> Result<(), StoreError> { Err(refused()) }
    async fn insert(&self, _: &str, _: Map<String, Value>) -> Result<Uuid, StoreError> { Err(refused()) }
    async fn find_all(&self, _: &str, _: &Filter) -> Result<Vec<Document>, StoreError> { Err(refused()) }
    async fn count(&self, _: &str) -> Result<u64, StoreError> { Err(refused()) }
    async fn collection_names(&self, _: usize) -> Result<Vec<String>, StoreError> { Err(refused()) }
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_root_message() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"message": "ServiceMedia Clone API running"}));
    Ok(())
}

#[tokio::test]
async fn e2e_inquiry_accepted() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Jo", "email": "jo@x.com", "message": "Hello there"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"status": "ok"}));

    let store = app.store.as_ref().unwrap();
    assert_eq!(store.count("inquiry").await?, 1);
    Ok(())
}

#[tokio::test]
async fn e2e_inquiry_short_message_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["detail"][0]["field"], "message");
    assert_eq!(body["detail"][0]["kind"], "too_short");

    assert_eq!(app.store.as_ref().unwrap().count("inquiry").await?, 0);
    Ok(())
}

#[tokio::test]
async fn e2e_inquiry_lists_every_bad_field() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"email": "not-an-email", "phone": 5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    let mut fields: Vec<String> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    fields.sort();
    assert_eq!(fields, vec!["email", "message", "name", "phone"]);
    assert_eq!(app.store.as_ref().unwrap().count("inquiry").await?, 0);
    Ok(())
}

#[tokio::test]
async fn e2e_inquiry_malformed_json_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/inquiry", app.base_url))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Invalid Request Body");
    Ok(())
}

#[tokio::test]
async fn e2e_seed_then_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/api/seed", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"status": "seeded"}));

    let services = c.get(format!("{}/api/services", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(services.len(), 4);
    let mut featured: Vec<bool> = services.iter().map(|s| s["featured"].as_bool().unwrap()).collect();
    featured.sort();
    assert_eq!(featured, vec![false, true, true, true]);
    assert!(services.iter().all(|s| s.get("_id").is_none() && s.get("id").is_none()));

    let projects = c.get(format!("{}/api/projects", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(projects.len(), 2);
    let testimonials = c.get(format!("{}/api/testimonials", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(testimonials.len(), 2);
    Ok(())
}

#[tokio::test]
async fn e2e_seed_twice_no_duplicates() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    for _ in 0..2 {
        let res = c.post(format!("{}/api/seed", app.base_url)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }
    let store = app.store.as_ref().unwrap();
    assert_eq!(store.count("service").await?, 4);
    assert_eq!(store.count("project").await?, 2);
    assert_eq!(store.count("testimonial").await?, 2);
    Ok(())
}

#[tokio::test]
async fn e2e_listed_project_matches_inserted() -> anyhow::Result<()> {
    let app = start_server().await?;
    let project = Project {
        title: "Atlas Rebrand".into(),
        slug: "atlas".into(),
        summary: "New identity".into(),
        image: Some("https://example.com/atlas.png".into()),
        tags: vec!["brand".into()],
        link: Some("https://atlas.example.com".into()),
        featured: true,
    };
    app.store.as_ref().unwrap().insert(Project::COLLECTION, project.to_fields()).await?;

    let res = client().get(format!("{}/api/projects", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let listed = res.json::<Vec<Project>>().await?;
    assert_eq!(listed, vec![project]);
    Ok(())
}

#[tokio::test]
async fn e2e_diagnostics_with_store() -> anyhow::Result<()> {
    let app = start_server().await?;
    client().post(format!("{}/api/seed", app.base_url)).send().await?;

    let res = client().get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "e2e");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["project", "service", "testimonial"]));
    Ok(())
}

#[tokio::test]
async fn e2e_diagnostics_store_unreachable_is_200() -> anyhow::Result<()> {
    let app = start_server_with(AppState::new(Arc::new(DownStore))).await?;
    let res = client().get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["connection_status"], "Not Connected");
    assert!(body["database"].as_str().unwrap().starts_with("❌ Error: "));
    assert_eq!(body["collections"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_diagnostics_without_store_is_200() -> anyhow::Result<()> {
    let app = start_server_with(AppState::without_store(false)).await?;
    let res = client().get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["database_url"], Value::Null);
    assert_eq!(body["database_name"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn e2e_storage_failures_are_500() -> anyhow::Result<()> {
    let app = start_server_with(AppState::new(Arc::new(DownStore))).await?;
    let c = client();

    for path in ["/api/services", "/api/projects", "/api/testimonials"] {
        let res = c.get(format!("{}{}", app.base_url, path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR, "{path}");
        let body = res.json::<Value>().await?;
        assert_eq!(body["error"], "Storage Error");
        assert!(body["detail"].as_str().unwrap().contains("connection refused"));
    }

    let res = c.post(format!("{}/api/seed", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);

    let res = c
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Jo", "email": "jo@x.com", "message": "Hello there"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn e2e_no_store_still_validates_inquiries() -> anyhow::Result<()> {
    let app = start_server_with(AppState::without_store(true)).await?;
    let c = client();

    let res = c
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    let res = c
        .post(format!("{}/api/inquiry", app.base_url))
        .json(&json!({"name": "Jo", "email": "jo@x.com", "message": "Hello there"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["detail"], "database not available");
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_stored_document_is_500() -> anyhow::Result<()> {
    let app = start_server().await?;
    let bad = json!({"author": "Nameless", "avatar": "not a url"});
    app.store.as_ref().unwrap().insert("testimonial", bad.as_object().cloned().unwrap()).await?;

    let res = client().get(format!("{}/api/testimonials", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Invalid Stored Document");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["paths"]["/api/inquiry"]["post"].is_object());
    Ok(())
}
