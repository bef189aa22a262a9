//! Conversation Context Builder.
//!
//! The generation endpoint remembers nothing between requests, so each reply
//! rebuilds the conversation from scratch: counselor instructions, then the
//! trailing history, then the new message. Older turns stay in the session
//! but are not replayed.

use thiserror::Error;
use tracing::{debug, warn};

use crate::chat::models::ChatTurn;
use crate::chat::prompts::{apology, counselor_instructions};
use crate::llm_client::{Conversation, LlmError, TextGenerator};

/// Prior turns replayed per reply: three user/assistant exchanges.
pub const MAX_REPLAYED_TURNS: usize = 6;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Empty response from context")]
    EmptyInstructionReply,

    #[error("Empty response from message: {0}")]
    EmptyHistoryReply(String),

    #[error("Empty response from API")]
    EmptyReply,

    #[error("{0}")]
    Llm(LlmError),
}

/// Trailing window of the history that gets replayed.
pub fn replay_window(prior_turns: &[ChatTurn]) -> &[ChatTurn] {
    &prior_turns[prior_turns.len().saturating_sub(MAX_REPLAYED_TURNS)..]
}

/// Runs one full reconstruction against the generator and returns the
/// formatted reply. Any empty reply along the way aborts the whole call.
pub async fn generate_reply(
    generator: &dyn TextGenerator,
    new_message: &str,
    career_topic: &str,
    prior_turns: &[ChatTurn],
) -> Result<String, ChatError> {
    let mut conversation = Conversation::start(generator);

    conversation
        .send(&counselor_instructions(career_topic))
        .await
        .map_err(|e| on_empty(e, || ChatError::EmptyInstructionReply))?;

    let window = replay_window(prior_turns);
    debug!(
        "Replaying {} of {} prior turns for '{career_topic}'",
        window.len(),
        prior_turns.len()
    );

    for turn in window {
        conversation
            .send(&turn.content)
            .await
            .map_err(|e| on_empty(e, || ChatError::EmptyHistoryReply(turn.content.clone())))?;
    }

    let reply = conversation
        .send(new_message)
        .await
        .map_err(|e| on_empty(e, || ChatError::EmptyReply))?;

    Ok(format_response(&reply))
}

/// Reply text for the user: the generated reply, or the apology on failure.
/// Never fails.
pub async fn chat_reply(
    generator: &dyn TextGenerator,
    new_message: &str,
    career_topic: &str,
    prior_turns: &[ChatTurn],
) -> String {
    match generate_reply(generator, new_message, career_topic, prior_turns).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Chat reply for '{career_topic}' failed: {e}");
            apology(&e.to_string())
        }
    }
}

fn on_empty(error: LlmError, empty: impl FnOnce() -> ChatError) -> ChatError {
    match error {
        LlmError::EmptyContent => empty(),
        other => ChatError::Llm(other),
    }
}

/// Strips `*`, `_` and backticks, drops blank lines, and separates the
/// remaining trimmed lines with one blank line.
pub fn format_response(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect();

    cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::ChatRole;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::llm_client::MessageRole;

    fn history(n: usize) -> Vec<ChatTurn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("turn {i}"))
                } else {
                    ChatTurn::assistant(format!("turn {i}"))
                }
            })
            .collect()
    }

    fn user_messages(call: &[crate::llm_client::Message]) -> Vec<String> {
        call.iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .collect()
    }

    #[test]
    fn test_format_response_strips_markup_and_collapses_blank_lines() {
        let raw = "**Great question!**\n\n\n  Try `rustlings`  \n_Next:_ build a CLI\n";
        assert_eq!(
            format_response(raw),
            "Great question!\n\nTry rustlings\n\nNext: build a CLI"
        );
    }

    #[test]
    fn test_replay_window_keeps_last_six() {
        let turns = history(9);
        let window = replay_window(&turns);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].content, "turn 3");
        assert_eq!(window[5].content, "turn 8");
    }

    #[test]
    fn test_replay_window_short_history_untouched() {
        let turns = history(4);
        assert_eq!(replay_window(&turns).len(), 4);
    }

    #[tokio::test]
    async fn test_empty_history_sends_instructions_then_message() {
        let generator = ScriptedGenerator::with_replies(["Understood.", "*Start* with Python."]);

        let reply = generate_reply(&generator, "How do I start?", "Software Development", &[])
            .await
            .unwrap();
        assert_eq!(reply, "Start with Python.");

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0][0].content.contains("careers in Software Development"));
        assert_eq!(calls[1].last().unwrap().content, "How do I start?");
    }

    #[tokio::test]
    async fn test_long_history_replays_only_last_six_in_order() {
        let generator = ScriptedGenerator::always("ok");
        let turns = history(10);

        generate_reply(&generator, "new question", "Cybersecurity", &turns)
            .await
            .unwrap();

        // instructions + 6 replayed + new message
        let calls = generator.calls();
        assert_eq!(calls.len(), 8);

        let sent = user_messages(calls.last().unwrap());
        assert_eq!(sent.len(), 8);
        assert!(sent[0].starts_with("You are a friendly high school career counselor"));
        assert_eq!(
            &sent[1..7],
            &["turn 4", "turn 5", "turn 6", "turn 7", "turn 8", "turn 9"]
        );
        assert_eq!(sent[7], "new question");
    }

    #[tokio::test]
    async fn test_assistant_turns_are_replayed_as_submitted_content() {
        let generator = ScriptedGenerator::always("ok");
        let turns = vec![ChatTurn::user("q1"), ChatTurn::assistant("a1")];
        assert_eq!(turns[1].role, ChatRole::Assistant);

        generate_reply(&generator, "q2", "Cloud Computing", &turns)
            .await
            .unwrap();

        let sent = user_messages(generator.calls().last().unwrap());
        assert_eq!(&sent[1..], &["q1", "a1", "q2"]);
    }

    #[tokio::test]
    async fn test_empty_instruction_reply_aborts() {
        let generator = ScriptedGenerator::with_replies([""]);

        let err = generate_reply(&generator, "hello", "AI", &[]).await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyInstructionReply));
        assert_eq!(generator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_history_reply_aborts_with_turn_content() {
        let generator = ScriptedGenerator::with_replies(["Understood.", "  "]);
        let turns = vec![ChatTurn::user("What is SQL?")];

        let err = generate_reply(&generator, "hello", "Data", &turns)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Empty response from message: What is SQL?");
        assert_eq!(generator.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_chat_reply_substitutes_apology() {
        let generator = ScriptedGenerator::with_replies(["Understood.", ""]);

        let reply = chat_reply(&generator, "hello", "Game Development", &[]).await;
        assert_eq!(reply, apology("Empty response from API"));
    }

    #[tokio::test]
    async fn test_chat_reply_apology_carries_api_error() {
        let generator = ScriptedGenerator::default();
        generator.push_error(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });

        let reply = chat_reply(&generator, "hello", "Web Development", &[]).await;
        assert!(reply.contains("API error (status 401): invalid x-api-key"));
    }
}
