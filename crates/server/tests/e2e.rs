use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes;
use server::startup;

const FRONTEND_ORIGIN: &str = "http://localhost:5173";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cors = startup::build_cors(FRONTEND_ORIGIN)?;
    let app: Router = routes::build_router(startup::build_state(), cors);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Servidor rodando corretamente!");
    assert!(body["time"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_register_login_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/register", app.base_url))
        .json(&json!({"username": "joana", "email": "Joana@Exemplo.com", "password": "segredo"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["user"]["email"], "joana@exemplo.com");
    assert_eq!(body["token"], "fake-demo-token");

    let res = c
        .post(format!("{}/api/login", app.base_url))
        .json(&json!({"username": "joana", "password": "segredo"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["user"]["role"], "produtor");
    assert_eq!(body["access_token"], "fake-demo-token");
    Ok(())
}

#[tokio::test]
async fn e2e_property_lifecycle_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // starts empty
    let res = c.get(format!("{}/api/properties", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    // create two listings
    let res = c
        .post(format!("{}/api/properties", app.base_url))
        .json(&json!({"name": "Fazenda Sul", "size_ha": 12.5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<serde_json::Value>().await?["id"], 1);

    let res = c
        .post(format!("{}/api/properties", app.base_url))
        .json(&json!({"name": "Sítio Norte", "location": "Minas Gerais"}))
        .send()
        .await?;
    assert_eq!(res.json::<serde_json::Value>().await?["id"], 2);

    // update the first, delete the second
    let res = c
        .put(format!("{}/api/properties/1", app.base_url))
        .json(&json!({"is_available": false}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.delete(format!("{}/api/properties/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/properties", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "name": "Fazenda Sul",
            "location": null,
            "size_ha": 12.5,
            "details": null,
            "is_available": false
        }])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_cors_allows_only_the_configured_origin() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .get(format!("{}/api/health", app.base_url))
        .header("Origin", FRONTEND_ORIGIN)
        .send()
        .await?;
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND_ORIGIN)
    );

    let res = c
        .get(format!("{}/api/health", app.base_url))
        .header("Origin", "http://evil.example.com")
        .send()
        .await?;
    assert!(res.headers().get("access-control-allow-origin").is_none());
    Ok(())
}
