use std::pin::Pin;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::{stream, Stream, StreamExt};
use shared_types::{GenerationPlan, GenerationRequest};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::sse::{SseDecoder, SseEvent};
use crate::AppState;

/// POST /api/ai-model: stream generated HTML as plain text chunks.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Response, ApiError> {
    let plan = request
        .into_plan()
        .ok_or_else(|| ApiError::BadRequest("messages or userInput is required".to_string()))?;

    let upstream = open_upstream(&state, &plan).await?;

    let body = Body::from_stream(relay_deltas(upstream.bytes_stream()));
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}

async fn open_upstream(
    state: &AppState,
    plan: &GenerationPlan,
) -> Result<reqwest::Response, ApiError> {
    let config = &state.generation.config;
    let api_key = config.api_key.as_deref().ok_or(ApiError::Unconfigured)?;

    info!(
        messages = plan.messages.len(),
        replace_mode = plan.replace_mode,
        model = %config.model,
        "forwarding generation request"
    );

    let response = state
        .generation
        .client
        .post(&config.upstream_url)
        .bearer_auth(api_key)
        .header("HTTP-Referer", &config.referer)
        .header("X-Title", &config.title)
        .json(&serde_json::json!({
            "model": config.model,
            "messages": plan.messages,
            "stream": true,
        }))
        .send()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        warn!(%status, detail = %truncate(&detail, 200), "generation upstream rejected request");
        return Err(ApiError::Upstream(format!("upstream returned {status}")));
    }

    Ok(response)
}

type Upstream<S> = Pin<Box<S>>;

/// Turn an upstream SSE byte stream into a stream of generated text.
///
/// Ends at `[DONE]` or when the upstream closes; a transport error ends the
/// body with an error so the client sees a truncated response.
pub fn relay_deltas<S, E>(upstream: S) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let state: Option<(Upstream<S>, SseDecoder)> = Some((Box::pin(upstream), SseDecoder::new()));

    stream::unfold(state, |state| async move {
        let (mut upstream, mut decoder) = state?;
        loop {
            let events = match upstream.next().await {
                Some(Ok(chunk)) => decoder.push(&chunk),
                Some(Err(e)) => {
                    warn!(error = %e, "generation upstream stream failed");
                    let err = std::io::Error::new(std::io::ErrorKind::Other, e.to_string());
                    return Some((Err(err), None));
                }
                None => decoder.finish(),
            };

            let text = collect_text(&events);
            let next = if decoder.is_finished() {
                debug!("generation stream finished");
                None
            } else {
                Some((upstream, decoder))
            };

            match (text.is_empty(), next) {
                (false, next) => return Some((Ok(Bytes::from(text)), next)),
                (true, None) => return None,
                (true, Some(state)) => {
                    (upstream, decoder) = state;
                }
            }
        }
    })
}

fn collect_text(events: &[SseEvent]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            SseEvent::Delta(text) => Some(text.as_str()),
            SseEvent::Done => None,
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sse(text: &str) -> Bytes {
        Bytes::from(format!(
            "data: {}\n\n",
            serde_json::json!({ "choices": [{ "delta": { "content": text } }] })
        ))
    }

    async fn collect(chunks: Vec<Result<Bytes, String>>) -> (String, bool) {
        let mut relayed = Box::pin(relay_deltas(stream::iter(chunks)));
        let mut out = String::new();
        let mut failed = false;
        while let Some(item) = relayed.next().await {
            match item {
                Ok(bytes) => out.push_str(std::str::from_utf8(&bytes).unwrap()),
                Err(_) => failed = true,
            }
        }
        (out, failed)
    }

    #[tokio::test]
    async fn relays_text_until_done() {
        let (text, failed) = collect(vec![
            Ok(sse("<section>")),
            Ok(Bytes::from_static(b"data: {oops\n")),
            Ok(sse("</section>")),
            Ok(Bytes::from_static(b"data: [DONE]\n")),
            Ok(sse("ignored")),
        ])
        .await;

        assert_eq!(text, "<section></section>");
        assert!(!failed);
    }

    #[tokio::test]
    async fn ends_cleanly_when_upstream_closes_without_done() {
        let (text, failed) = collect(vec![Ok(sse("a")), Ok(sse("b"))]).await;
        assert_eq!(text, "ab");
        assert!(!failed);
    }

    #[tokio::test]
    async fn surfaces_transport_errors() {
        let (text, failed) = collect(vec![Ok(sse("partial")), Err("reset".to_string())]).await;
        assert_eq!(text, "partial");
        assert!(failed);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
