//! Wire shape of the response envelope and DTOs

use integration_tests::{fixtures::*, to_json, TestApp};
use murmur_client::dto::{JoinCircleRequest, PageRequest, ReactionRequest};
use murmur_client::ApiResponse;
use murmur_core::TargetType;
use serde_json::json;

#[tokio::test]
async fn test_success_envelope() {
    let app = TestApp::start().await.unwrap();
    let response = app.api.circles().get_circle_by_id(UNJOINED_CIRCLE_ID).await;
    let value = to_json(&response).unwrap();

    assert_eq!(value["success"], true);
    assert!(value.get("error").is_none());
    assert!(value.get("message").is_none());
    assert_eq!(
        value["data"],
        json!({
            "id": "1",
            "name": "程序员吐槽大会",
            "description": "程序员们的日常吐槽，代码bug、产品需求、加班生活...",
            "memberCount": 89,
            "createdAt": "2024-01-15T10:00:00Z",
            "isJoined": false
        })
    );
}

#[tokio::test]
async fn test_failure_envelope() {
    let app = TestApp::start().await.unwrap();
    let response = app.api.circles().get_circle_by_id("31337").await;
    assert_eq!(
        to_json(&response).unwrap(),
        json!({ "success": false, "error": "Circle not found: 31337" })
    );
}

#[tokio::test]
async fn test_informational_message() {
    let app = TestApp::start().await.unwrap();
    let response = app
        .api
        .circles()
        .join_circle(JoinCircleRequest::new(JOINED_CIRCLE_ID))
        .await;
    let value = to_json(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "already a member");
    assert_eq!(value["data"]["memberCount"], 890);
}

#[tokio::test]
async fn test_murmur_shape() {
    let app = TestApp::start().await.unwrap();
    let response = app.api.murmurs().get_murmur_by_id("1").await;
    let value = to_json(&response).unwrap();
    let murmur = &value["data"];

    assert_eq!(murmur["circleId"], "1");
    assert_eq!(murmur["authorId"], "1");
    assert_eq!(murmur["author"]["nickname"], "吐槽达人");
    assert_eq!(murmur["likeCount"], 15);
    assert_eq!(murmur["dislikeCount"], 2);
    assert_eq!(murmur["commentCount"], 2);
    assert_eq!(murmur["userReaction"], "like");
    assert_eq!(murmur["comments"][0]["murmurId"], "1");
    assert_eq!(murmur["comments"][0]["userReaction"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_page_shape() {
    let app = TestApp::start().await.unwrap();
    let response = app
        .api
        .circles()
        .list_circles(PageRequest::new(2, 4))
        .await;
    let value = to_json(&response).unwrap();
    let page = &value["data"];
    assert_eq!(page["total"], 20);
    assert_eq!(page["limit"], 2);
    assert_eq!(page["offset"], 4);
    assert_eq!(page["items"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_reaction_request_from_json() {
    let app = TestApp::start().await.unwrap();
    let request: ReactionRequest = serde_json::from_value(json!({
        "targetId": "4",
        "targetType": "comment",
        "reaction": null
    }))
    .unwrap();
    assert_eq!(request.target_type, TargetType::Comment);

    let response = app.api.reactions().set_reaction(request).await;
    assert_eq!(
        to_json(&response).unwrap(),
        json!({ "success": true, "data": { "likeCount": 11, "dislikeCount": 2 } })
    );
}

#[test]
fn test_envelope_round_trips_through_json() {
    let raw = json!({ "success": false, "error": "Transport error: timeout" });
    let response: ApiResponse<Vec<String>> = serde_json::from_value(raw).unwrap();
    assert!(!response.success);
    assert_eq!(
        response.into_result(),
        Err("Transport error: timeout".to_string())
    );
}
