use std::fs;
use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt as _;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt; // for Router::oneshot

use combo_menu_planner::config::PlanConfig;
use combo_menu_planner::server::{AppState, router};

const MENU_JSON: &str = r#"[
    {"item_name": "Classic Cheeseburger", "category": "main", "calories": 500, "taste_profile": "savory", "popularity_score": 8.5},
    {"item_name": "Grilled Chicken Wrap", "category": "main", "calories": 450, "taste_profile": "fresh", "popularity_score": 8.55},
    {"item_name": "Seasoned Fries", "category": "side", "calories": 150, "taste_profile": "savory", "popularity_score": 8.5},
    {"item_name": "Side Salad", "category": "side", "calories": 100, "taste_profile": "fresh", "popularity_score": 8.55},
    {"item_name": "Iced Tea", "category": "drink", "calories": 60, "taste_profile": "fresh", "popularity_score": 8.5},
    {"item_name": "Water", "category": "drink", "calories": 0, "taste_profile": "fresh", "popularity_score": 8.55}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(menu: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("frontend")).unwrap();
        fs::write(
            dir.path().join("frontend/index.html"),
            "<html><body>Weekly Combo Menu</body></html>",
        )
        .unwrap();
        if let Some(menu) = menu {
            fs::write(dir.path().join("master_menu.json"), menu).unwrap();
        }
        Self { dir }
    }

    fn app(&self) -> Router {
        let state = AppState::new(self.path("master_menu.json"), PlanConfig::default());
        router(state, &self.path("frontend"))
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn generate_menu_returns_seven_days() {
    let fixture = Fixture::new(Some(MENU_JSON));

    let (status, body) = send(fixture.app(), "GET", "/generate-menu?seed=3").await;
    assert_eq!(status, StatusCode::OK);

    let v: Value = serde_json::from_slice(&body).unwrap();
    let days = v["menu_plan"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");

    let combo = &days[0]["combos"][0];
    assert_eq!(combo["combo_id"], "combo_1");
    for field in ["main", "side", "drink", "calorie_count", "popularity_score", "reasoning"] {
        assert!(combo.get(field).is_some(), "missing field {}", field);
    }
}

#[tokio::test]
async fn generate_menu_accepts_post_and_is_seeded() {
    let fixture = Fixture::new(Some(MENU_JSON));

    let (_, first) = send(fixture.app(), "POST", "/generate-menu?seed=11").await;
    let (_, second) = send(fixture.app(), "POST", "/generate-menu?seed=11").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn generate_menu_honors_overrides() {
    let fixture = Fixture::new(Some(MENU_JSON));

    let (status, body) = send(fixture.app(), "GET", "/generate-menu?days=2&combos=1&seed=1").await;
    assert_eq!(status, StatusCode::OK);

    let v: Value = serde_json::from_slice(&body).unwrap();
    let days = v["menu_plan"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert!(days.iter().all(|d| d["combos"].as_array().unwrap().len() <= 1));
}

#[tokio::test]
async fn generate_menu_rejects_bad_overrides() {
    let fixture = Fixture::new(Some(MENU_JSON));

    let (status, body) = send(fixture.app(), "GET", "/generate-menu?days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"], "BadRequest");
}

#[tokio::test]
async fn missing_menu_is_a_server_error() {
    let fixture = Fixture::new(None);

    let (status, body) = send(fixture.app(), "GET", "/generate-menu").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"], "MenuUnavailable");
}

#[tokio::test]
async fn empty_menu_is_a_server_error() {
    let fixture = Fixture::new(Some("[]"));

    let (status, body) = send(fixture.app(), "GET", "/generate-menu").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"], "EmptyCatalog");
}

#[tokio::test]
async fn health_and_static_page() {
    let fixture = Fixture::new(Some(MENU_JSON));

    let (status, body) = send(fixture.app(), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["status"], "ok");

    let (status, body) = send(fixture.app(), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Weekly Combo Menu"));
}
