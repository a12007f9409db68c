//! Integration tests for the daily plan aggregator

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn exercise(id: i64) -> Value {
    json!({
        "id": id,
        "category": 10,
        "muscles": [],
        "muscles_secondary": [],
        "equipment": [],
        "images": [{"image": format!("https://img/{id}.png")}],
        "translations": [
            {"language": 2, "name": format!("Exercise {id}"), "description": "Work."}
        ]
    })
}

fn recipe(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Recipe {id}"),
        "nutrition": {"nutrients": [{"name": "Calories", "amount": 400.0}]}
    })
}

fn video(id: &str) -> Value {
    json!({
        "id": {"videoId": id},
        "snippet": {
            "title": format!("Video {id}"),
            "description": "Flow.",
            "thumbnails": {"medium": {"url": format!("https://img/{id}.jpg")}},
            "channelTitle": "Wellness",
            "publishedAt": "2024-03-01T10:00:00Z"
        }
    })
}

async fn mock_all_upstreams() -> (MockServer, MockServer, MockServer) {
    let wger = MockServer::start().await;
    let exercises: Vec<Value> = (1..=8).map(exercise).collect();
    Mock::given(method("GET"))
        .and(path("/exerciseinfo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": exercises})))
        .mount(&wger)
        .await;

    let spoonacular = MockServer::start().await;
    let recipes: Vec<Value> = (1..=5).map(recipe).collect();
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": recipes})))
        .mount(&spoonacular)
        .await;

    let youtube = MockServer::start().await;
    let videos: Vec<Value> = (1..=9).map(|i| video(&format!("v{i}"))).collect();
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": videos})))
        .mount(&youtube)
        .await;

    (wger, spoonacular, youtube)
}

#[tokio::test]
async fn test_daily_plan_is_bounded_and_complete() {
    let (wger, spoonacular, youtube) = mock_all_upstreams().await;
    let app = common::TestApp::new(&wger.uri(), &spoonacular.uri(), &youtube.uri());

    let (status, body) = app
        .post(
            "/api/v1/daily-plan",
            r#"{"userProfile": {
                "height": 170.0,
                "weight": 65.0,
                "age": 28,
                "gender": "female",
                "activityLevel": "moderately_active",
                "goals": ["weight_loss"],
                "fitnessLevel": "beginner",
                "cuisine": "indian",
                "diet": "balanced"
            }}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let plan: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(plan["workouts"].as_array().unwrap().len(), 3);
    assert_eq!(plan["meals"].as_array().unwrap().len(), 3);
    assert_eq!(plan["videos"].as_array().unwrap().len(), 6);
    assert!(plan["quote"].as_str().unwrap().contains("Every step counts"));
}

#[tokio::test]
async fn test_daily_plan_derives_calorie_ceiling_from_metrics() {
    let wger = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&wger)
        .await;

    let spoonacular = MockServer::start().await;
    // 170cm / 65kg / 28y female, moderately active, weight loss -> 1688
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("maxCalories", "1688"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&spoonacular)
        .await;

    let youtube = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&youtube)
        .await;

    let app = common::TestApp::new(&wger.uri(), &spoonacular.uri(), &youtube.uri());
    let (status, _) = app
        .post(
            "/api/v1/daily-plan",
            r#"{"userProfile": {
                "height": 170.0,
                "weight": 65.0,
                "age": 28,
                "gender": "female",
                "activityLevel": "moderately_active",
                "goals": ["weight_loss"]
            }}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_explicit_calories_override_derived_target() {
    let wger = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&wger)
        .await;

    let spoonacular = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("maxCalories", "1500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&spoonacular)
        .await;

    let youtube = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&youtube)
        .await;

    let app = common::TestApp::new(&wger.uri(), &spoonacular.uri(), &youtube.uri());
    let (status, _) = app
        .post(
            "/api/v1/daily-plan",
            r#"{"userProfile": {
                "height": 170.0,
                "weight": 65.0,
                "age": 28,
                "gender": "female",
                "calories": 1500
            }}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_daily_plan_degrades_when_all_upstreams_down() {
    let app = common::TestApp::with_unreachable_upstreams();

    let (status, body) = app
        .post(
            "/api/v1/daily-plan",
            r#"{"userProfile": {"fitnessLevel": "beginner"}}"#,
        )
        .await;

    // Every source failing still yields a complete, empty-but-valid plan
    assert_eq!(status, StatusCode::OK);
    let plan: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(plan["workouts"].as_array().unwrap().len(), 0);
    assert_eq!(plan["meals"].as_array().unwrap().len(), 0);
    assert_eq!(plan["videos"].as_array().unwrap().len(), 0);
    assert!(!plan["quote"].as_str().unwrap().is_empty());
}
