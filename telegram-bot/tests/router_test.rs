//! Router behavior against a recording bot and a scripted LLM: command/button parity, session
//! lifecycle, usage counters and failure replies.

mod common;

use common::{button, router, text_message, MockBot, MockLlm};
use llm_client::CompletionError;
use prompt::{ChatMessage, MessageRole};
use telegram_relay_bot::{ModelTier, TextFormat, MAX_TURNS};

/// **Test: /start greets by first name with the four-button menu and creates no session.**
#[tokio::test]
async fn test_start_sends_welcome_menu() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("unused"));

    router.handle_message(&text_message(1, "/start")).await;

    let replies = bot.replies();
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("Namaste Asha!"));
    assert_eq!(replies[0].format, TextFormat::Html);
    assert_eq!(replies[0].menu.as_ref().unwrap().buttons().count(), 4);
    assert!(router.sessions().is_empty().await);
}

/// **Test: a command and its button produce the same reply.**
#[tokio::test]
async fn test_command_and_button_share_replies() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("unused"));

    router.handle_message(&text_message(1, "/help")).await;
    router.handle_button(&button(1, "help")).await;
    router.handle_message(&text_message(1, "/model")).await;
    router.handle_button(&button(1, "models")).await;

    let replies = bot.replies();
    assert_eq!(replies.len(), 4);
    assert_eq!(replies[0], replies[1]);
    assert_eq!(replies[2], replies[3]);
}

/// **Test: the model query lazily creates a balanced session with empty history.**
#[tokio::test]
async fn test_model_query_creates_default_session() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("unused"));

    router.handle_message(&text_message(5, "/model")).await;

    let session = router.sessions().get(5).await.unwrap();
    assert_eq!(session.model_tier, ModelTier::Balanced);
    assert!(session.turns.is_empty());
    assert!(bot
        .last_text()
        .unwrap()
        .contains("Meta-Llama-3.1-70B-Instruct"));
}

/// **Test: a successful exchange shows typing, replies with the model text and records both turns.**
#[tokio::test]
async fn test_free_text_success() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("Hello!"));

    router.handle_message(&text_message(1, "Hi there")).await;

    let replies = bot.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "Hello!");
    assert_eq!(replies[0].format, TextFormat::Plain);
    assert!(replies[0].menu.is_none());
    assert_eq!(bot.typing_count(), 1);

    let session = router.sessions().get(1).await.unwrap();
    assert_eq!(
        session.turns,
        vec![ChatMessage::user("Hi there"), ChatMessage::assistant("Hello!")]
    );
    assert_eq!(router.counters().total_messages(), 1);
    assert_eq!(router.counters().distinct_users().await, 1);
    assert_eq!(router.counters().total_errors(), 0);
}

/// **Test: selecting the fast tier changes the model sent with the next request.**
#[tokio::test]
async fn test_select_model_applies_to_next_request() {
    let bot = MockBot::new();
    let llm = MockLlm::replying("ok");
    let router = router(bot.clone(), llm.clone());

    router.handle_button(&button(1, "model_fast")).await;
    assert!(bot
        .last_text()
        .unwrap()
        .contains("Meta-Llama-3.1-8B-Instruct"));

    router.handle_message(&text_message(1, "hello")).await;
    assert_eq!(llm.models(), vec!["Meta-Llama-3.1-8B-Instruct".to_string()]);

    // Other users keep the default tier.
    router.handle_message(&text_message(2, "hello")).await;
    assert_eq!(llm.models()[1], "Meta-Llama-3.1-70B-Instruct");
}

/// **Test: reset reports the cleared turn count, drops the session and restores the default tier.**
#[tokio::test]
async fn test_reset_clears_session() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("ok"));

    router.handle_button(&button(1, "model_powerful")).await;
    router.handle_message(&text_message(1, "one")).await;
    router.handle_message(&text_message(1, "/reset")).await;

    assert!(bot.last_text().unwrap().contains("Cleared 2 messages"));
    assert!(router.sessions().get(1).await.is_none());

    router.handle_message(&text_message(1, "/model")).await;
    assert!(bot
        .last_text()
        .unwrap()
        .contains("Meta-Llama-3.1-70B-Instruct"));
}

/// **Test: reset without a session is not an error and creates no entry.**
#[tokio::test]
async fn test_reset_without_session() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("ok"));

    router.handle_message(&text_message(3, "/reset")).await;

    assert_eq!(
        bot.last_text().unwrap(),
        "💭 No conversation history found. Start chatting!"
    );
    assert!(router.sessions().is_empty().await);
    assert_eq!(router.counters().total_errors(), 0);
}

/// **Test: the request history never exceeds the cap and keeps the most recent turns.**
#[tokio::test]
async fn test_history_window_over_many_exchanges() {
    let bot = MockBot::new();
    let llm = MockLlm::replying("a");
    let router = router(bot.clone(), llm.clone());

    for n in 1..=25usize {
        router
            .handle_message(&text_message(1, &format!("q{}", n)))
            .await;
        let requests = llm.requests.lock().unwrap();
        let sent = &requests.last().unwrap().1;
        assert_eq!(sent.len(), (2 * n - 1).min(MAX_TURNS));
        assert_eq!(sent.last().unwrap(), &ChatMessage::user(format!("q{}", n)));
    }

    let session = router.sessions().get(1).await.unwrap();
    assert_eq!(session.turns.len(), MAX_TURNS + 1);
    assert_eq!(session.turns[0], ChatMessage::assistant("a"));
    assert_eq!(session.turns[1], ChatMessage::user("q16"));
}

/// **Test: a timeout yields the timeout text, counts one error and keeps only the user turn.**
#[tokio::test]
async fn test_completion_timeout() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::failing(CompletionError::Timeout));

    router.handle_message(&text_message(1, "slow?")).await;

    assert!(bot.last_text().unwrap().starts_with("⏱️ Request timeout!"));
    assert_eq!(router.counters().total_errors(), 1);
    let session = router.sessions().get(1).await.unwrap();
    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].role, MessageRole::User);
}

/// **Test: API and unexpected failures get distinct texts.**
#[tokio::test]
async fn test_completion_failure_texts() {
    let bot = MockBot::new();
    let llm = MockLlm::scripted(
        vec![
            Err(CompletionError::Api { status: 503 }),
            Err(CompletionError::unexpected("bad json")),
        ],
        Ok("ok".to_string()),
    );
    let router = router(bot.clone(), llm);

    router.handle_message(&text_message(1, "first")).await;
    router.handle_message(&text_message(1, "second")).await;
    router.handle_message(&text_message(1, "third")).await;

    let texts: Vec<String> = bot.replies().into_iter().map(|r| r.text).collect();
    assert!(texts[0].contains("error 503"));
    assert!(texts[1].starts_with("❌ Something went wrong while contacting the AI"));
    assert_eq!(texts[2], "ok");
    assert_eq!(router.counters().total_errors(), 2);

    // Failed user turns stay in history.
    let session = router.sessions().get(1).await.unwrap();
    assert_eq!(session.turns.len(), 4);
}

/// **Test: a failed delivery is caught, counted and answered with the generic apology.**
#[tokio::test]
async fn test_delivery_failure_is_handler_fault() {
    let bot = MockBot::failing(1);
    let router = router(bot.clone(), MockLlm::replying("Hello!"));

    router.handle_message(&text_message(1, "hi")).await;

    assert_eq!(
        bot.last_text().unwrap(),
        "❌ Oops! Something went wrong. Please try again or use /help for assistance."
    );
    assert_eq!(router.counters().total_errors(), 1);
}

/// **Test: when even the apology cannot be delivered the router still returns normally.**
#[tokio::test]
async fn test_undeliverable_apology_is_swallowed() {
    let bot = MockBot::failing(2);
    let router = router(bot.clone(), MockLlm::replying("unused"));

    router.handle_message(&text_message(1, "/help")).await;

    assert!(bot.replies().is_empty());
    assert_eq!(router.counters().total_errors(), 1);
}

/// **Test: a blank message is a handler fault and never reaches the LLM.**
#[tokio::test]
async fn test_blank_text_is_rejected() {
    let bot = MockBot::new();
    let llm = MockLlm::replying("unused");
    let router = router(bot.clone(), llm.clone());

    router.handle_message(&text_message(1, "   ")).await;

    assert_eq!(llm.request_count(), 0);
    assert_eq!(router.counters().total_errors(), 1);
    assert!(bot.last_text().unwrap().starts_with("❌ Oops!"));
}

/// **Test: unknown commands and button tokens produce no delivery and touch no state.**
#[tokio::test]
async fn test_unknown_inputs_are_ignored() {
    let bot = MockBot::new();
    let llm = MockLlm::replying("unused");
    let router = router(bot.clone(), llm.clone());

    router.handle_message(&text_message(1, "/weather")).await;
    router.handle_button(&button(1, "model_turbo")).await;
    router.handle_button(&button(1, "")).await;

    assert!(bot.replies().is_empty());
    assert_eq!(llm.request_count(), 0);
    assert!(router.sessions().is_empty().await);
    assert_eq!(router.counters().total_messages(), 0);
    assert_eq!(router.counters().total_errors(), 0);
}

/// **Test: commands addressed to another bot are ignored once the username is known.**
#[tokio::test]
async fn test_command_addressed_by_username() {
    let bot = MockBot::new();
    let router = router(bot.clone(), MockLlm::replying("unused"));
    router.set_bot_username("relay_bot").await;

    router.handle_message(&text_message(1, "/help@other_bot")).await;
    assert!(bot.replies().is_empty());

    router.handle_message(&text_message(1, "/help@relay_bot")).await;
    assert_eq!(bot.replies().len(), 1);
}

/// **Test: the chat button prompts without calling the LLM.**
#[tokio::test]
async fn test_chat_button_prompts() {
    let bot = MockBot::new();
    let llm = MockLlm::replying("unused");
    let router = router(bot.clone(), llm.clone());

    router.handle_button(&button(1, "chat")).await;

    assert!(bot.last_text().unwrap().contains("Let's chat!"));
    assert_eq!(llm.request_count(), 0);
}

/// **Test: stats reflect distinct users, messages, active sessions and errors.**
#[tokio::test]
async fn test_stats_snapshot() {
    let bot = MockBot::new();
    let llm = MockLlm::scripted(
        vec![Ok("a".to_string()), Err(CompletionError::Timeout)],
        Ok("b".to_string()),
    );
    let router = router(bot.clone(), llm);

    router.handle_message(&text_message(1, "hi")).await;
    router.handle_message(&text_message(2, "hi")).await;
    router.handle_message(&text_message(1, "again")).await;
    router.handle_message(&text_message(2, "/reset")).await;
    router.handle_button(&button(3, "stats")).await;

    let text = bot.last_text().unwrap();
    assert!(text.contains("<b>Total Users:</b> 2"));
    assert!(text.contains("<b>Messages Processed:</b> 3"));
    assert!(text.contains("<b>Active Conversations:</b> 1"));
    assert!(text.contains("<b>Errors:</b> 1"));
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}
