//! Incremental decoder for OpenAI-style `text/event-stream` completions.
//!
//! Network chunks do not respect line boundaries, so bytes are buffered until
//! a newline arrives. Only `data:` lines are interpreted; anything that is not
//! valid JSON with a `choices[0].delta.content` string is dropped.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A fragment of generated text
    Delta(String),
    /// The upstream sent `data: [DONE]`
    Done,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    finished: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one network chunk, returning the events completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        if self.finished {
            return Vec::new();
        }
        self.pending.extend_from_slice(chunk);

        let Some(last_newline) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return Vec::new();
        };
        let complete: Vec<u8> = self.pending.drain(..=last_newline).collect();
        self.decode_lines(&String::from_utf8_lossy(&complete))
    }

    /// Flush a trailing line that was never newline-terminated.
    pub fn finish(&mut self) -> Vec<SseEvent> {
        if self.finished || self.pending.is_empty() {
            self.finished = true;
            return Vec::new();
        }
        let rest = std::mem::take(&mut self.pending);
        let events = self.decode_lines(&String::from_utf8_lossy(&rest));
        self.finished = true;
        events
    }

    fn decode_lines(&mut self, text: &str) -> Vec<SseEvent> {
        let mut events = Vec::new();
        for line in text.lines() {
            match parse_line(line) {
                Some(SseEvent::Done) => {
                    self.finished = true;
                    self.pending.clear();
                    events.push(SseEvent::Done);
                    break;
                }
                Some(event) => events.push(event),
                None => {}
            }
        }
        events
    }
}

fn parse_line(line: &str) -> Option<SseEvent> {
    let payload = line.trim_end_matches('\r').strip_prefix("data:")?.trim();
    if payload == "[DONE]" {
        return Some(SseEvent::Done);
    }

    let parsed: Value = serde_json::from_str(payload).ok()?;
    let text = parsed
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()?;

    (!text.is_empty()).then(|| SseEvent::Delta(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_line(text: &str) -> String {
        format!(
            "data: {}\n",
            serde_json::json!({ "choices": [{ "delta": { "content": text } }] })
        )
    }

    #[test]
    fn decodes_complete_lines() {
        let mut decoder = SseDecoder::new();
        let input = format!("{}{}", delta_line("<div>"), delta_line("hi</div>"));

        assert_eq!(
            decoder.push(input.as_bytes()),
            vec![
                SseEvent::Delta("<div>".to_string()),
                SseEvent::Delta("hi</div>".to_string())
            ]
        );
    }

    #[test]
    fn buffers_lines_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("split");
        let (head, tail) = line.split_at(10);

        assert!(decoder.push(head.as_bytes()).is_empty());
        assert_eq!(
            decoder.push(tail.as_bytes()),
            vec![SseEvent::Delta("split".to_string())]
        );
    }

    #[test]
    fn keeps_multibyte_characters_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("héllo");
        let bytes = line.as_bytes();
        let cut = line.find('é').unwrap() + 1; // inside the two-byte sequence

        assert!(decoder.push(&bytes[..cut]).is_empty());
        assert_eq!(
            decoder.push(&bytes[cut..]),
            vec![SseEvent::Delta("héllo".to_string())]
        );
    }

    #[test]
    fn drops_malformed_and_non_data_lines() {
        let mut decoder = SseDecoder::new();
        let input = format!(
            ": keep-alive\nevent: ping\ndata: {{not json\ndata: {{\"choices\":[]}}\n{}",
            delta_line("ok")
        );

        assert_eq!(
            decoder.push(input.as_bytes()),
            vec![SseEvent::Delta("ok".to_string())]
        );
    }

    #[test]
    fn stops_at_done_marker() {
        let mut decoder = SseDecoder::new();
        let input = format!("{}data: [DONE]\n{}", delta_line("a"), delta_line("late"));

        assert_eq!(
            decoder.push(input.as_bytes()),
            vec![SseEvent::Delta("a".to_string()), SseEvent::Done]
        );
        assert!(decoder.is_finished());
        assert!(decoder.push(delta_line("more").as_bytes()).is_empty());
    }

    #[test]
    fn finish_flushes_unterminated_line() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("tail");
        let unterminated = line.trim_end();

        assert!(decoder.push(unterminated.as_bytes()).is_empty());
        assert_eq!(decoder.finish(), vec![SseEvent::Delta("tail".to_string())]);
        assert!(decoder.is_finished());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("crlf").replace('\n', "\r\n");
        assert_eq!(
            decoder.push(line.as_bytes()),
            vec![SseEvent::Delta("crlf".to_string())]
        );
    }
}
