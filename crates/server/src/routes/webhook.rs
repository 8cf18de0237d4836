use std::sync::Arc;

use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
    Extension,
};

use crate::clients::{line::LineClient, puzzle::PuzzleClient};
use crate::config::Config;
use crate::error::AppError;
use crate::line::events::{OutgoingMessage, WebhookPayload};
use crate::line::signature;
use crate::sessions::Sessions;

const CORRECT_REPLY: &str = "Correct! Say the trigger word for another puzzle.";
const INCORRECT_REPLY: &str = "That's not it. Try again!";
const PROMPT_REPLY: &str = "Your move! Answer in algebraic notation, e.g. Nf3.";
const FALLBACK_REPLY: &str = "Sorry, I didn't understand that.";
const ERROR_REPLY: &str = "Something went wrong. Please try again later.";

/// POST /callback — LINE webhook endpoint.
///
/// The signature is computed over the raw body, so the body is taken as
/// bytes and parsed only after validation.
pub async fn callback(
    Extension(config): Extension<Config>,
    Extension(line_client): Extension<LineClient>,
    Extension(puzzle_client): Extension<PuzzleClient>,
    Extension(sessions): Extension<Arc<Sessions>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let signature = headers
        .get("x-line-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    if !signature::validate_signature(&config.channel_secret, &body, signature) {
        return Err(AppError::InvalidSignature);
    }

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {e}")))?;

    for event in &payload.events {
        if event.kind != "message" {
            continue;
        }
        let Some(reply_token) = event.reply_token.as_deref() else {
            continue;
        };
        let Some(text) = event
            .message
            .as_ref()
            .filter(|m| m.kind == "text")
            .and_then(|m| m.text.as_deref())
        else {
            continue;
        };
        let chat_id = event.source.as_ref().and_then(|s| s.chat_id());

        let messages = handle_text(&config, &puzzle_client, &sessions, chat_id, text).await;

        if let Err(e) = line_client.reply(reply_token, &messages).await {
            tracing::warn!("Failed to deliver reply: {e}");
        }
    }

    Ok(StatusCode::OK)
}

/// Decide the reply for one text message.
async fn handle_text(
    config: &Config,
    puzzle_client: &PuzzleClient,
    sessions: &Sessions,
    chat_id: Option<&str>,
    text: &str,
) -> Vec<OutgoingMessage> {
    let Some(chat_id) = chat_id else {
        return vec![OutgoingMessage::text(FALLBACK_REPLY)];
    };

    if text.trim() == config.puzzle_trigger {
        return match puzzle_client.fetch_random().await {
            Ok(puzzle) => {
                sessions.set_puzzle(chat_id, puzzle.pgn).await;
                vec![
                    OutgoingMessage::image(puzzle.image),
                    OutgoingMessage::text(PROMPT_REPLY),
                ]
            }
            Err(e) => {
                tracing::warn!("Puzzle fetch failed: {e}");
                vec![OutgoingMessage::text(ERROR_REPLY)]
            }
        };
    }

    let Some(pgn) = sessions.active_pgn(chat_id).await else {
        return vec![OutgoingMessage::text(FALLBACK_REPLY)];
    };

    match chess_notation::check_answer(&pgn, text) {
        Ok(true) => {
            sessions.clear(chat_id).await;
            vec![OutgoingMessage::text(CORRECT_REPLY)]
        }
        Ok(false) => vec![OutgoingMessage::text(INCORRECT_REPLY)],
        Err(e) => {
            // Bad data from the puzzle source, not a wrong answer.
            tracing::warn!("Could not extract answer from puzzle PGN: {e}");
            sessions.clear(chat_id).await;
            vec![OutgoingMessage::text(ERROR_REPLY)]
        }
    }
}
