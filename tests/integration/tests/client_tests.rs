//! Client integration tests
//!
//! Exercise the composer send flow and reaction handling end to end with an
//! in-process mock transport. The last test posts against a live server and
//! runs only when `CHATKIT_TEST_API_URL` is set.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use std::sync::Arc;

use integration_tests::{fixtures, live_api_url, test_context, MockTransport};

use chatkit_client::{
    ChannelTarget, ClientError, Composer, ComposerEvent, ComposerService, HttpTransport,
    ModalKind, NullModalDispatcher, ReactionService, RecordingModalDispatcher,
    SendMessageRequest,
};
use chatkit_core::{DomainError, ReactionEvent, Snowflake, ToggleOutcome};

fn channel_target() -> ChannelTarget {
    ChannelTarget::new("/api/messages").with_query("channelId", "42")
}

// ============================================================================
// Composer Tests
// ============================================================================

#[tokio::test]
async fn test_compose_and_send() {
    let transport = MockTransport::new();
    let ctx = test_context(
        transport.clone(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ComposerService::new(&ctx);
    let mut composer = Composer::new();

    composer.apply(ComposerEvent::Input("hello there".to_string()));
    let sent = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap();

    assert!(sent);
    assert_eq!(composer.draft(), "");
    assert!(!composer.is_sending());

    let posts = transport.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, channel_target());
    assert_eq!(posts[0].1, "hello there");
}

#[tokio::test]
async fn test_send_failure_keeps_draft_for_retry() {
    let transport = MockTransport::new();
    let ctx = test_context(
        transport.clone(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ComposerService::new(&ctx);
    let mut composer = Composer::new();

    composer.apply(ComposerEvent::Input("important message".to_string()));
    transport.fail_next(503, "service unavailable");

    let err = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(composer.draft(), "important message");

    // Retry goes through untouched
    let sent = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap();
    assert!(sent);
    assert_eq!(transport.sent_contents(), vec!["important message"]);
    assert_eq!(composer.draft(), "");
}

#[tokio::test]
async fn test_permission_failure_is_not_retryable() {
    let transport = MockTransport::new();
    let ctx = test_context(
        transport.clone(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ComposerService::new(&ctx);
    let mut composer = Composer::new();

    composer.apply(ComposerEvent::Input("hi".to_string()));
    transport.fail_next(403, "missing permissions");

    let err = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_blank_draft_is_not_sent() {
    let transport = MockTransport::new();
    let ctx = test_context(
        transport.clone(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ComposerService::new(&ctx);
    let mut composer = Composer::new();

    composer.apply(ComposerEvent::Input("   \n ".to_string()));
    let sent = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap();

    assert!(!sent);
    assert!(transport.posts().is_empty());
}

#[tokio::test]
async fn test_multiline_and_emoji_composition() {
    let transport = MockTransport::new();
    let ctx = test_context(
        transport.clone(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ComposerService::new(&ctx);
    let mut composer = Composer::new();

    // Shift+Enter inserts the break, Enter submits
    composer.apply(ComposerEvent::Input("first line".to_string()));
    composer.apply(ComposerEvent::from_enter_key(true));
    composer.apply(ComposerEvent::Input("first line\nsecond line".to_string()));
    composer.apply(ComposerEvent::InsertEmoji("🎉".to_string()));

    let sent = service
        .submit(&mut composer, &channel_target())
        .await
        .unwrap();
    assert!(sent);
    assert_eq!(
        transport.sent_contents(),
        vec!["first line\nsecond line 🎉"]
    );
}

#[tokio::test]
async fn test_attachment_modal_dispatch() {
    let transport = MockTransport::new();
    let modal = Arc::new(RecordingModalDispatcher::new());
    let ctx = test_context(transport, modal.clone(), fixtures::member("ada"));
    let service = ComposerService::new(&ctx);

    service.open_attachment_modal(&channel_target());

    let requests = modal.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].kind, ModalKind::MessageFile);
    assert_eq!(requests[0].context, channel_target());
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[test]
fn test_reaction_lifecycle_two_members() {
    let ada = fixtures::member("ada");
    let grace = fixtures::member("grace");
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    let ada_ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        ada.clone(),
    );
    let grace_ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        grace.clone(),
    );

    // First reaction creates the entry
    ReactionService::new(&ada_ctx).toggle(&mut msg, "👍").unwrap();
    assert_eq!(msg.reactions.get("👍").unwrap().members, vec![ada.id]);

    // Second member appends
    ReactionService::new(&grace_ctx)
        .toggle(&mut msg, "👍")
        .unwrap();
    assert_eq!(
        msg.reactions.get("👍").unwrap().members,
        vec![ada.id, grace.id]
    );

    // First member un-reacts, the other keeps their place
    let outcome = ReactionService::new(&ada_ctx).toggle(&mut msg, "👍").unwrap();
    assert_eq!(outcome, ToggleOutcome::Removed);
    assert_eq!(msg.reactions.get("👍").unwrap().members, vec![grace.id]);

    // Last member un-reacts: the entry disappears entirely
    ReactionService::new(&grace_ctx)
        .toggle(&mut msg, "👍")
        .unwrap();
    assert!(msg.reactions.is_empty());
}

#[test]
fn test_reaction_display_order_across_emoji() {
    let ada = fixtures::member("ada");
    let ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        ada.clone(),
    );
    let service = ReactionService::new(&ctx);
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    service.toggle(&mut msg, "👍").unwrap();
    service.toggle(&mut msg, "😂").unwrap();

    let pills = msg.reaction_pills(ada.id);
    assert_eq!(pills.len(), 2);
    assert_eq!(pills[0].emoji, "👍");
    assert_eq!(pills[1].emoji, "😂");
    assert!(pills.iter().all(|p| p.count == 1 && p.me));
}

#[test]
fn test_pill_click_roundtrip() {
    let ada = fixtures::member("ada");
    let grace = fixtures::member("grace");
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    let grace_ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        grace.clone(),
    );
    ReactionService::new(&grace_ctx)
        .toggle(&mut msg, "🔥")
        .unwrap();

    // Ada clicks the pill grace created: same emoji, toggled for ada
    let ada_ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        ada.clone(),
    );
    let service = ReactionService::new(&ada_ctx);

    let pills = msg.reaction_pills(ada.id);
    assert_eq!(pills[0].count, 1);
    assert!(!pills[0].me);

    let clicked = pills[0].emoji.clone();
    service.toggle(&mut msg, &clicked).unwrap();
    let pills = msg.reaction_pills(ada.id);
    assert_eq!(pills[0].count, 2);
    assert!(pills[0].me);

    // Clicking again returns to the prior state
    service.toggle(&mut msg, "🔥").unwrap();
    let pills = msg.reaction_pills(ada.id);
    assert_eq!(pills[0].count, 1);
    assert!(!pills[0].me);
}

#[test]
fn test_remote_events_interleave_with_local_toggles() {
    let ada = fixtures::member("ada");
    let remote_member = fixtures::member("remote");
    let ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        ada.clone(),
    );
    let service = ReactionService::new(&ctx);
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    service.toggle(&mut msg, "👍").unwrap();

    // A delivery for another member lands on the same entry
    let added = ReactionEvent::reaction_added(msg.id, remote_member.id, "👍");
    assert!(service.apply_event(&mut msg, &added));
    assert_eq!(msg.reactions.get("👍").unwrap().count(), 2);

    // Duplicate delivery changes nothing
    assert!(!service.apply_event(&mut msg, &added));

    // The remote member un-reacts; ada's reaction survives
    let removed = ReactionEvent::reaction_removed(msg.id, remote_member.id, "👍");
    assert!(service.apply_event(&mut msg, &removed));
    assert_eq!(msg.reactions.get("👍").unwrap().members, vec![ada.id]);

    // Moderator clears everything
    let cleared = ReactionEvent::reactions_cleared(msg.id);
    assert!(service.apply_event(&mut msg, &cleared));
    assert!(msg.reactions.is_empty());
}

#[test]
fn test_events_for_other_messages_are_ignored() {
    let ada = fixtures::member("ada");
    let ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        ada.clone(),
    );
    let service = ReactionService::new(&ctx);
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    let other = ReactionEvent::reaction_added(Snowflake::new(999_999), ada.id, "👍");
    assert!(!service.apply_event(&mut msg, &other));
    assert!(msg.reactions.is_empty());
}

#[test]
fn test_empty_emoji_is_a_caller_error() {
    let ctx = test_context(
        MockTransport::new(),
        Arc::new(NullModalDispatcher),
        fixtures::member("ada"),
    );
    let service = ReactionService::new(&ctx);
    let mut msg = fixtures::message(fixtures::member("author"), "hello");

    let err = service.toggle(&mut msg, "").unwrap_err();
    assert!(matches!(
        err,
        ClientError::Domain(DomainError::EmptyEmoji)
    ));
}

// ============================================================================
// Live Server Test (env-gated)
// ============================================================================

#[tokio::test]
async fn test_live_server_send() -> anyhow::Result<()> {
    let Some(base_url) = live_api_url() else {
        return Ok(());
    };

    let transport = HttpTransport::new(base_url);
    let target = ChannelTarget::new("/api/messages").with_query("channelId", "1");
    let request = SendMessageRequest::new(format!(
        "integration test message {}",
        fixtures::unique_id()
    ));

    use chatkit_client::MessageTransport;
    transport.post_message(&target, &request).await?;
    Ok(())
}
