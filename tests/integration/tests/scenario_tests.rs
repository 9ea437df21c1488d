//! End-to-end scenarios across all four clients
//!
//! Run with: cargo test -p integration-tests --test scenario_tests

use integration_tests::{assert_failure, assert_success, fixtures::*, TestApp};
use murmur_client::dto::{
    CreateMurmurRequest, JoinCircleRequest, ReactionRequest, SearchCirclesRequest,
};
use murmur_client::MurmurApi;
use murmur_common::AppConfig;
use murmur_core::{ReactionKind, TargetType};

// ============================================================================
// Search -> join -> post -> react
// ============================================================================

#[tokio::test]
async fn test_search_join_post_react() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;

    let found = assert_success(
        api.circles()
            .search_circles(SearchCirclesRequest::new("程序员"))
            .await,
    )
    .unwrap();
    let circle = found
        .iter()
        .find(|c| c.id == UNJOINED_CIRCLE_ID)
        .expect("seeded circle should match");
    assert_eq!(circle.name, "程序员吐槽大会");
    assert_eq!(circle.member_count, UNJOINED_CIRCLE_MEMBERS);
    assert!(!circle.is_joined);

    let joined = assert_success(
        api.circles()
            .join_circle(JoinCircleRequest::new(UNJOINED_CIRCLE_ID))
            .await,
    )
    .unwrap();
    assert!(joined.is_joined);
    assert_eq!(joined.member_count, UNJOINED_CIRCLE_MEMBERS + 1);

    let rejoined = api
        .circles()
        .join_circle(JoinCircleRequest::new(UNJOINED_CIRCLE_ID))
        .await;
    assert!(rejoined.message.is_some());
    assert_eq!(
        assert_success(rejoined).unwrap().member_count,
        UNJOINED_CIRCLE_MEMBERS + 1
    );

    let murmur = assert_success(
        api.murmurs()
            .create_murmur(CreateMurmurRequest::new(UNJOINED_CIRCLE_ID, "hello"))
            .await,
    )
    .unwrap();
    assert_eq!(murmur.circle_id, UNJOINED_CIRCLE_ID);
    assert_eq!(murmur.content, "hello");
    assert_eq!(
        (murmur.like_count, murmur.dislike_count, murmur.comment_count),
        (0, 0, 0)
    );
    assert!(murmur.comments.is_empty());

    let counts = assert_success(
        api.reactions()
            .set_reaction(ReactionRequest::new(
                murmur.id.clone(),
                TargetType::Murmur,
                Some(ReactionKind::Like),
            ))
            .await,
    )
    .unwrap();
    assert_eq!(counts.like_count, murmur.like_count + 1);
    assert_eq!(counts.dislike_count, murmur.dislike_count);

    let reloaded = assert_success(api.murmurs().get_murmur_by_id(&murmur.id).await).unwrap();
    assert_eq!(reloaded.user_reaction, Some(ReactionKind::Like));
    assert_eq!(reloaded.like_count, 1);

    let joined_now = assert_success(api.circles().get_joined_circles().await).unwrap();
    assert!(joined_now.iter().any(|c| c.id == UNJOINED_CIRCLE_ID));
}

// ============================================================================
// Reaction state machine
// ============================================================================

#[tokio::test]
async fn test_like_dislike_clear_restores_counts() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;

    let murmur =
        assert_success(api.murmurs().create_murmur(murmur_request(JOINED_CIRCLE_ID)).await)
            .unwrap();
    let comment = assert_success(
        api.comments()
            .create_comment(comment_request(&murmur.id))
            .await,
    )
    .unwrap();

    for (target_type, id) in [
        (TargetType::Murmur, murmur.id.clone()),
        (TargetType::Comment, comment.id.clone()),
        (TargetType::Murmur, "2".to_string()),
    ] {
        let original = assert_success(
            api.reactions()
                .set_reaction(ReactionRequest::new(id.clone(), target_type, None))
                .await,
        )
        .unwrap();

        let mut last = original;
        for reaction in [Some(ReactionKind::Like), Some(ReactionKind::Dislike), None] {
            last = assert_success(
                api.reactions()
                    .set_reaction(ReactionRequest::new(id.clone(), target_type, reaction))
                    .await,
            )
            .unwrap();
        }
        assert_eq!(last, original, "{target_type} {id}");
    }
}

#[tokio::test]
async fn test_reactions_are_scoped_per_viewer() {
    let app = TestApp::start().await.unwrap();
    let other = app.session(&unique_address()).await.unwrap();

    let liked = ReactionRequest::new("2", TargetType::Murmur, Some(ReactionKind::Like));
    let first = assert_success(app.api.reactions().set_reaction(liked.clone()).await).unwrap();
    let second = assert_success(other.reactions().set_reaction(liked).await).unwrap();
    assert_eq!(second.like_count, first.like_count + 1);

    let seen_by_other = assert_success(other.murmurs().get_murmur_by_id("2").await).unwrap();
    assert_eq!(seen_by_other.user_reaction, Some(ReactionKind::Like));
    let seen_by_fresh = assert_success(
        app.session(&unique_address())
            .await
            .unwrap()
            .murmurs()
            .get_murmur_by_id("2")
            .await,
    )
    .unwrap();
    assert_eq!(seen_by_fresh.user_reaction, None);
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_thread() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;

    let murmur =
        assert_success(api.murmurs().create_murmur(murmur_request(JOINED_CIRCLE_ID)).await)
            .unwrap();

    // a bare comment is stored but not attached
    let loose = assert_success(api.comments().create_comment(comment_request(&murmur.id)).await)
        .unwrap();
    let listed =
        assert_success(api.comments().get_comments_by_murmur_id(&murmur.id).await).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, loose.id);
    let unchanged = assert_success(api.murmurs().get_murmur_by_id(&murmur.id).await).unwrap();
    assert_eq!(unchanged.comment_count, 0);

    // the orchestrated path keeps the murmur in sync
    let updated = assert_success(api.post_comment(comment_request(&murmur.id)).await).unwrap();
    assert_eq!(updated.comment_count, 1);
    assert_eq!(updated.comments.len(), updated.comment_count);

    let newest = comment_request(&murmur.id);
    let content = newest.content.clone();
    let updated = assert_success(api.post_comment(newest).await).unwrap();
    assert_eq!(updated.comment_count, 2);
    assert_eq!(updated.comments[0].content, content);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unknown_ids_fail_softly() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;

    let circle = assert_failure(api.circles().get_circle_by_id("999999").await).unwrap();
    assert!(circle.contains("not found"));
    let murmur = assert_failure(api.murmurs().get_murmur_by_id("999999").await).unwrap();
    assert!(murmur.contains("not found"));
    assert_failure(api.circles().join_circle(JoinCircleRequest::new("999999")).await).unwrap();
    assert_failure(api.comments().get_comments_by_murmur_id("999999").await).unwrap();
}

#[tokio::test]
async fn test_validation_failures() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;

    assert_failure(api.circles().get_circle_by_id("").await).unwrap();
    assert_failure(api.circles().join_circle(JoinCircleRequest::new("")).await).unwrap();
    assert_failure(
        api.murmurs()
            .create_murmur(CreateMurmurRequest::new("1", "  "))
            .await,
    )
    .unwrap();
    assert_failure(
        api.reactions()
            .set_reaction(ReactionRequest::new("abc", TargetType::Comment, None))
            .await,
    )
    .unwrap();

    let empty = assert_success(
        api.circles()
            .search_circles(SearchCirclesRequest::new("  "))
            .await,
    )
    .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_offline_store_fails_every_operation() {
    let app = TestApp::start().await.unwrap();
    let api = &app.api;
    app.store.set_offline(true);

    let errors = [
        assert_failure(api.circles().get_joined_circles().await).unwrap(),
        assert_failure(api.circles().get_circle_by_id("1").await).unwrap(),
        assert_failure(api.murmurs().get_murmurs_by_circle_id("1").await).unwrap(),
        assert_failure(api.comments().get_comments_by_murmur_id("1").await).unwrap(),
        assert_failure(
            api.reactions()
                .set_reaction(ReactionRequest::new("1", TargetType::Murmur, None))
                .await,
        )
        .unwrap(),
    ];
    for error in errors {
        assert!(error.starts_with("Transport error"), "{error}");
    }

    app.store.set_offline(false);
    assert_success(api.circles().get_joined_circles().await).unwrap();
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_configured_api() {
    let mut config = AppConfig::default();
    config.session.viewer_address = unique_address();
    config.store.latency_ms = 1;
    config.limits.max_murmur_length = 10;

    let api = MurmurApi::from_config(&config).await.unwrap();
    assert_eq!(api.viewer().address, config.session.viewer_address);

    let circles = assert_success(api.circles().get_joined_circles().await).unwrap();
    assert!(circles.is_empty());

    assert_success(
        api.murmurs()
            .create_murmur(CreateMurmurRequest::new(UNJOINED_CIRCLE_ID, "0123456789"))
            .await,
    )
    .unwrap();
    let error = assert_failure(
        api.murmurs()
            .create_murmur(CreateMurmurRequest::new(UNJOINED_CIRCLE_ID, "0123456789!"))
            .await,
    )
    .unwrap();
    assert!(error.contains("max 10"), "{error}");
}
