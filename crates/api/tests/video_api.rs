//! HTTP-level tests for founder video generation and the creator feed.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{
    body_json, create_company, get, post_json_auth, remote_video, signup, FakeVideoAgent,
};
use sqlx::PgPool;

fn generate_body(company_id: i64, use_case: &str) -> serde_json::Value {
    serde_json::json!({
        "company_id": company_id,
        "creator_id": 0,
        "company_name": "Acme",
        "use_case": use_case,
        "founder_name": "Jo",
        "founder_role": "CEO",
        "interesting_context": "",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unchanged_request_is_served_from_cache(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent::default());
    let app = common::build_test_app_with(pool, agent.clone(), None);
    let (token, _) = signup(app.clone(), "cache@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;

    // Scenario A: first request renders a new video.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/videos/generate",
        generate_body(company_id, "U1"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let a = body_json(response).await;
    assert_eq!(a["cached"], false);
    assert_eq!(a["video_url"], "http://agent.test/api/videos/vid-1.mp4");
    assert_eq!(a["input"]["use_case"], "U1");

    // Scenario B: identical request is a cache hit.
    let b = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/videos/generate",
            generate_body(company_id, "U1"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(b["cached"], true);
    assert_eq!(b["post_id"], a["post_id"]);
    assert_eq!(agent.calls(), 1);

    // Scenario C: a new use case replaces the video.
    let c = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/videos/generate",
            generate_body(company_id, "U2"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(c["cached"], false);
    assert_ne!(c["post_id"], a["post_id"]);
    assert_eq!(agent.calls(), 2);

    let feed = body_json(get(app, "/api/v1/videos/creator/1").await).await;
    let items = feed["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1, "the previous video was retired");
    assert_eq!(items[0]["id"], c["post_id"].to_string());
    assert_eq!(feed["data"]["remote"], "merged");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn force_regenerate_calls_the_agent_again(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent::default());
    let app = common::build_test_app_with(pool, agent.clone(), None);
    let (token, _) = signup(app.clone(), "force@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;

    let uri = "/api/v1/videos/generate";
    post_json_auth(app.clone(), uri, generate_body(company_id, "U1"), &token).await;

    let mut body = generate_body(company_id, "U1");
    body["force_regenerate"] = serde_json::json!(true);
    let json = body_json(post_json_auth(app, uri, body, &token).await).await;

    assert_eq!(json["cached"], false);
    assert_eq!(agent.calls(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generating_for_someone_elses_company_is_forbidden(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent::default());
    let app = common::build_test_app_with(pool, agent.clone(), None);
    let (owner, _) = signup(app.clone(), "owner@example.com").await;
    let (intruder, _) = signup(app.clone(), "intruder@example.com").await;
    let company_id = create_company(app.clone(), &owner, "Acme").await;

    let response = post_json_auth(
        app,
        "/api/v1/videos/generate",
        generate_body(company_id, "U1"),
        &intruder,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(agent.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_creator_and_blank_fields_are_validation_errors(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent::default());
    let app = common::build_test_app_with(pool, agent.clone(), None);
    let (token, _) = signup(app.clone(), "invalid@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;

    let mut body = generate_body(company_id, "U1");
    body["creator_id"] = serde_json::json!(17);
    let response = post_json_auth(app.clone(), "/api/v1/videos/generate", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        app,
        "/api/v1/videos/generate",
        generate_body(company_id, " "),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(agent.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_regeneration_keeps_the_previous_video(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent::default());
    let app = common::build_test_app_with(pool, agent.clone(), None);
    let (token, _) = signup(app.clone(), "fail@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;
    let uri = "/api/v1/videos/generate";

    let first =
        body_json(post_json_auth(app.clone(), uri, generate_body(company_id, "U1"), &token).await)
            .await;

    *agent.fail_generate.lock().unwrap() = true;
    let response = post_json_auth(app.clone(), uri, generate_body(company_id, "U2"), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENERATION_FAILED");
    assert!(json["error"].as_str().unwrap().contains("renderer crashed"));

    let feed = body_json(get(app, "/api/v1/videos/creator/1").await).await;
    let items = feed["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], first["post_id"].to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slow_render_outlives_the_general_request_timeout(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent {
        generate_delay: Duration::from_secs(3),
        ..Default::default()
    });
    let mut config = common::test_config();
    config.request_timeout_secs = 1;
    config.video_agent_timeout_secs = 300;
    let app = common::build_test_app_with_config(pool, agent.clone(), None, config);
    let (token, _) = signup(app.clone(), "slow@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;
    let uri = "/api/v1/videos/generate";

    let response = post_json_auth(app.clone(), uri, generate_body(company_id, "U1"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["cached"], false);
    assert_eq!(agent.calls(), 1);

    // The render was stored, so the repeat is a cache hit.
    let again =
        body_json(post_json_auth(app, uri, generate_body(company_id, "U1"), &token).await).await;
    assert_eq!(again["cached"], true);
    assert_eq!(again["post_id"], first["post_id"]);
    assert_eq!(agent.calls(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creator_feed_merges_remote_videos(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent {
        remote_videos: vec![
            remote_video("old", 0, "2000-01-01T00:00:00Z"),
            remote_video("future", 0, "2999-01-01T00:00:00"),
            remote_video("other-creator", 1, "2999-01-01T00:00:00Z"),
        ],
        ..Default::default()
    });
    let app = common::build_test_app_with(pool, agent, None);
    let (token, _) = signup(app.clone(), "feed@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;
    post_json_auth(
        app.clone(),
        "/api/v1/videos/generate",
        generate_body(company_id, "U1"),
        &token,
    )
    .await;

    let feed = body_json(get(app, "/api/v1/videos/creator/1").await).await;
    assert_eq!(feed["data"]["remote"], "merged");
    let items = feed["data"]["items"].as_array().unwrap();
    let ids: Vec<_> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], "remote-future");
    assert_eq!(ids[2], "remote-old");
    assert_eq!(items[0]["source"], "remote");
    assert!(items[0]["user_id"].is_null());
    assert_eq!(items[0]["title"], "Generated Video: Remote Co by Rae");
    assert_eq!(items[1]["source"], "local");
    assert_eq!(items[1]["company_name"], "Acme");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creator_feed_survives_agent_outage(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent {
        fail_listing: true,
        ..Default::default()
    });
    let app = common::build_test_app_with(pool, agent, None);
    let (token, _) = signup(app.clone(), "outage@example.com").await;
    let company_id = create_company(app.clone(), &token, "Acme").await;
    post_json_auth(
        app.clone(),
        "/api/v1/videos/generate",
        generate_body(company_id, "U1"),
        &token,
    )
    .await;

    let response = get(app.clone(), "/api/v1/videos/creator/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let feed = body_json(response).await;
    assert_eq!(feed["data"]["remote"], "unavailable");
    assert_eq!(feed["data"]["items"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/videos/remote").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_UNAVAILABLE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unmapped_creator_feed_is_local_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let feed = body_json(get(app, "/api/v1/videos/creator/unknown").await).await;
    assert_eq!(feed["data"]["remote"], "unmapped");
    assert!(feed["data"]["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pass_through_listings(pool: PgPool) {
    let agent = Arc::new(FakeVideoAgent {
        remote_videos: vec![remote_video("r1", 2, "2025-03-01T10:00:00Z")],
        ..Default::default()
    });
    let app = common::build_test_app_with(pool, agent, None);

    let creators = body_json(get(app.clone(), "/api/v1/videos/creators").await).await;
    assert_eq!(creators["data"][0]["name"], "Samantha Hayes");

    let videos = body_json(get(app, "/api/v1/videos/remote").await).await;
    assert_eq!(videos["data"][0]["video_url"], "http://agent.test/api/videos/r1.mp4");
}
