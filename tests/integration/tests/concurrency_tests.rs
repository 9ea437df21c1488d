//! Concurrent operations against one store
//!
//! Read-modify-write operations must not lose updates even when many of
//! them are suspended inside the simulated round-trip at once.

use std::time::Duration;

use futures::future::join_all;
use integration_tests::{assert_failure, assert_success, fixtures::*, TestApp};
use murmur_client::dto::{JoinCircleRequest, ReactionRequest};
use murmur_client::MurmurApi;
use murmur_core::{ReactionKind, TargetType};

const LATENCY: Duration = Duration::from_millis(10);

async fn sessions(app: &TestApp, count: usize) -> Vec<MurmurApi> {
    let mut sessions = Vec::with_capacity(count);
    for _ in 0..count {
        sessions.push(app.session(&unique_address()).await.unwrap());
    }
    sessions
}

#[tokio::test]
async fn test_concurrent_joins_by_different_viewers() {
    let app = TestApp::start_with_latency(LATENCY).await.unwrap();
    let viewers = sessions(&app, 25).await;

    let joins = viewers.iter().map(|api| async move {
        api.circles()
            .join_circle(JoinCircleRequest::new(UNJOINED_CIRCLE_ID))
            .await
    });
    for response in join_all(joins).await {
        assert_success(response).unwrap();
    }

    let circle =
        assert_success(app.api.circles().get_circle_by_id(UNJOINED_CIRCLE_ID).await).unwrap();
    assert_eq!(circle.member_count, UNJOINED_CIRCLE_MEMBERS + 25);
}

#[tokio::test]
async fn test_concurrent_duplicate_joins_count_once() {
    let app = TestApp::start_with_latency(LATENCY).await.unwrap();
    let api = &app.api;

    let joins = (0..10).map(|_| async move {
        api.circles()
            .join_circle(JoinCircleRequest::new(UNJOINED_CIRCLE_ID))
            .await
    });
    let responses = join_all(joins).await;

    let first_joins = responses.iter().filter(|r| r.message.is_none()).count();
    assert_eq!(first_joins, 1);
    for response in responses {
        assert_eq!(
            assert_success(response).unwrap().member_count,
            UNJOINED_CIRCLE_MEMBERS + 1
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_across_threads() {
    let app = TestApp::start_with_latency(LATENCY).await.unwrap();
    let viewers = sessions(&app, 40).await;
    let before = assert_success(app.api.murmurs().get_murmur_by_id("5").await).unwrap();

    let handles: Vec<_> = viewers
        .into_iter()
        .map(|api| {
            tokio::spawn(async move {
                api.reactions()
                    .set_reaction(ReactionRequest::new(
                        "5",
                        TargetType::Murmur,
                        Some(ReactionKind::Like),
                    ))
                    .await
            })
        })
        .collect();
    for handle in join_all(handles).await {
        assert_success(handle.unwrap()).unwrap();
    }

    let after = assert_success(app.api.murmurs().get_murmur_by_id("5").await).unwrap();
    assert_eq!(after.like_count, before.like_count + 40);
    assert_eq!(after.dislike_count, before.dislike_count);
}

#[tokio::test]
async fn test_concurrent_posts_all_land() {
    let app = TestApp::start_with_latency(LATENCY).await.unwrap();
    let api = &app.api;

    let posts = (0..15).map(|_| async move {
        api.murmurs()
            .create_murmur(murmur_request(JOINED_CIRCLE_ID))
            .await
    });
    let created: Vec<_> = join_all(posts)
        .await
        .into_iter()
        .map(|r| assert_success(r).unwrap().id)
        .collect();

    let listed =
        assert_success(api.murmurs().get_murmurs_by_circle_id(JOINED_CIRCLE_ID).await).unwrap();
    for id in &created {
        assert!(listed.iter().any(|m| &m.id == id), "missing murmur {id}");
    }
}

#[tokio::test]
async fn test_simultaneous_first_connects_resolve_to_one_viewer() {
    let app = TestApp::start_with_latency(LATENCY).await.unwrap();
    let address = unique_address();

    let connects = (0..5).map(|_| MurmurApi::connect(app.store.clone(), &address));
    let sessions: Vec<MurmurApi> = join_all(connects)
        .await
        .into_iter()
        .map(|session| session.unwrap())
        .collect();

    let first = sessions[0].viewer().id;
    assert!(sessions.iter().all(|api| api.viewer().id == first));

    let again = app.session(&address.to_uppercase().replace("0X", "0x")).await.unwrap();
    assert_eq!(again.viewer().id, first);
}

#[tokio::test]
async fn test_connection_lost_during_post_comment_leaves_no_orphan() {
    let app = TestApp::start_with_latency(Duration::from_millis(50)).await.unwrap();

    let (response, _) = tokio::join!(
        app.api.post_comment(comment_request("5")),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            app.store.set_offline(true);
        }
    );
    let error = assert_failure(response).unwrap();
    assert!(error.starts_with("Transport error"), "{error}");
    app.store.set_offline(false);

    let comments =
        assert_success(app.api.comments().get_comments_by_murmur_id("5").await).unwrap();
    assert!(comments.is_empty());
    let murmur = assert_success(app.api.murmurs().get_murmur_by_id("5").await).unwrap();
    assert_eq!(murmur.comment_count, 0);
}
