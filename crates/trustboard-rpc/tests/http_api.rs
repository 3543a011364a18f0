// crates/trustboard-rpc/tests/http_api.rs
//
// HTTP-level tests: drive the axum router directly with tower's `oneshot`,
// backed by the in-memory repository and default trust score engine.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trustboard_rpc::{RpcConfig, TrustboardRpcServer};
use trustboard_scoring::TrustScoreEngine;
use trustboard_service::TrustService;
use trustboard_store::InMemoryRepository;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app() -> Router {
    let service = TrustService::new(
        Arc::new(InMemoryRepository::new()),
        Arc::new(TrustScoreEngine::default()),
    );
    TrustboardRpcServer::new(RpcConfig::default(), service).router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn submit(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/claims", Some(body)).await
}

async fn seed_verified(app: &Router, influencer_id: u64, count: usize) {
    for _ in 0..count {
        let (status, _) = submit(
            app,
            json!({"influencer_id": influencer_id, "status": "verified", "weight": 1.0}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

fn leaderboard_ids(body: &Value) -> Vec<u64> {
    body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["influencer_id"].as_u64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_claim_creates_influencer() {
    let app = app();
    let (status, body) = submit(
        &app,
        json!({
            "influencer_id": 1,
            "status": "verified",
            "weight": 2.0,
            "statement": "Creatine is safe at recommended doses",
            "influencer": {"name": "Health Guru", "category": "Nutrition", "followers": 10000}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created_influencer"], json!(true));
    assert_eq!(body["verified_claims"], json!(1));
    assert_eq!(body["claim"]["status"], json!("verified"));

    let (status, inf) = send(&app, Method::GET, "/influencers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inf["name"], json!("Health Guru"));
    assert_eq!(inf["category"], json!("Nutrition"));
    assert_eq!(inf["followers"], json!(10000));
    assert_eq!(inf["rank"], json!(1));
    assert_eq!(inf["trust_score"], body["trust_score"]);
}

#[tokio::test]
async fn leaderboard_orders_by_score_and_direction() {
    let app = app();
    seed_verified(&app, 2, 2).await;
    seed_verified(&app, 1, 20).await;
    seed_verified(&app, 3, 8).await;

    let (status, desc) = send(&app, Method::GET, "/leaderboard?direction=desc&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(desc["total"], json!(3));
    assert_eq!(desc["direction"], json!("desc"));
    assert_eq!(leaderboard_ids(&desc), vec![1, 3, 2]);
    assert_eq!(desc["entries"][0]["rank"], json!(1));

    let (_, asc) = send(&app, Method::GET, "/leaderboard?direction=asc", None).await;
    assert_eq!(leaderboard_ids(&asc), vec![2, 3, 1]);

    let (_, alias) = send(&app, Method::GET, "/leaderboard?direction=lowestFirst&limit=1", None).await;
    assert_eq!(leaderboard_ids(&alias), vec![2]);
    assert_eq!(alias["total"], json!(3));

    // Default direction is descending.
    let (_, default) = send(&app, Method::GET, "/leaderboard", None).await;
    assert_eq!(leaderboard_ids(&default), vec![1, 3, 2]);
}

#[tokio::test]
async fn bad_query_and_path_values_get_error_bodies() {
    let app = app();
    for uri in [
        "/leaderboard?direction=sideways",
        "/leaderboard?limit=-1",
        "/influencers/abc",
        "/influencers/abc/claims",
        "/claims/not-a-uuid",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], json!("invalid_request"), "{}", uri);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{}", uri);
    }

    let (status, body) = send(&app, Method::DELETE, "/influencers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/claims/not-a-uuid",
        Some(json!({"status": "verified"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));
}

#[tokio::test]
async fn malformed_profile_body_is_invalid_request() {
    let app = app();
    seed_verified(&app, 1, 1).await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/influencers/1",
        Some(json!({"followers": "lots"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));
}

#[tokio::test]
async fn unknown_influencer_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/influencers/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("not_found"));
}

#[tokio::test]
async fn negative_weight_is_400_and_changes_nothing() {
    let app = app();
    seed_verified(&app, 1, 1).await;
    let (_, before) = send(&app, Method::GET, "/influencers/1", None).await;

    let (status, body) = submit(
        &app,
        json!({"influencer_id": 1, "status": "verified", "weight": -3.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_claim"));

    let (_, after) = send(&app, Method::GET, "/influencers/1", None).await;
    assert_eq!(after["trust_score"], before["trust_score"]);
    assert_eq!(after["verified_claims"], before["verified_claims"]);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = app();
    let (status, body) = submit(&app, json!({"weight": 1.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_claim"));
}

#[tokio::test]
async fn duplicate_claim_id_is_409() {
    let app = app();
    let claim = json!({
        "id": "01890a5d-ac96-774b-bcce-b302099a8057",
        "influencer_id": 5,
        "status": "verified",
        "weight": 1.0
    });
    let (status, _) = submit(&app, claim.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = submit(&app, claim).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!("conflict"));
}

#[tokio::test]
async fn settle_and_fetch_claim() {
    let app = app();
    let (_, receipt) = submit(&app, json!({"influencer_id": 7, "weight": 3.0})).await;
    assert_eq!(receipt["trust_score"], json!(0));
    let claim_id = receipt["claim"]["id"].as_str().unwrap().to_string();

    let uri = format!("/claims/{}", claim_id);
    let (status, settled) = send(&app, Method::PATCH, &uri, Some(json!({"status": "verified"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settled["verified_claims"], json!(1));

    let (status, claim) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(claim["status"], json!("verified"));

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({"status": "refuted"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, claims) = send(&app, Method::GET, "/influencers/7/claims", None).await;
    assert_eq!(claims["claims"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deactivate_profile_and_stats() {
    let app = app();
    seed_verified(&app, 1, 3).await;
    seed_verified(&app, 2, 1).await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/influencers/2",
        Some(json!({"name": "Fitness Expert", "category": "Fitness", "followers": 5000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], json!("Fitness Expert"));

    let (status, _) = send(&app, Method::DELETE, "/influencers/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, board) = send(&app, Method::GET, "/leaderboard", None).await;
    assert_eq!(leaderboard_ids(&board), vec![2]);

    let (_, inf) = send(&app, Method::GET, "/influencers/1", None).await;
    assert_eq!(inf["active"], json!(false));
    assert_eq!(inf["rank"], Value::Null);

    let (status, stats) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["active_influencers"], json!(1));
    assert_eq!(stats["verified_claims"], json!(1));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
