//! Client side of the generation stream.
//!
//! The server relays plain text, but chunk boundaries may fall inside a UTF-8
//! sequence or inside the code fence, so both are reassembled here.

/// Marker the model puts in front of the page markup
pub const CODE_FENCE: &str = "```html";

/// Assistant message recorded once a reply produced code
pub const CODE_READY_MESSAGE: &str = "Your code is ready!";

/// Decodes UTF-8 across chunk boundaries.
#[derive(Debug, Default)]
pub struct Utf8Accumulator {
    pending: Vec<u8>,
}

impl Utf8Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of the buffered input as possible. An incomplete
    /// trailing sequence is kept for the next chunk; invalid bytes become
    /// U+FFFD.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    return out;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match e.error_len() {
                        None => {
                            self.pending.drain(..valid);
                            return out;
                        }
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                    }
                }
            }
        }
    }

    /// Flush whatever is left at end of stream.
    pub fn finish(&mut self) -> String {
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        rest
    }
}

/// Splits a streamed reply into the chat preface and the generated code.
///
/// Text before the first ```` ```html ```` fence belongs to the chat; everything
/// after it is page markup, delivered live as it grows.
#[derive(Debug, Default)]
pub struct GenerationStream {
    raw: String,
    code_start: Option<usize>,
    scanned: usize,
}

impl GenerationStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str) {
        self.raw.push_str(text);
        if self.code_start.is_some() {
            return;
        }

        // Re-scan the tail in case the fence straddles two chunks.
        let from = floor_char_boundary(&self.raw, self.scanned.saturating_sub(CODE_FENCE.len()));
        if let Some(offset) = self.raw[from..].find(CODE_FENCE) {
            self.code_start = Some(from + offset + CODE_FENCE.len());
        }
        self.scanned = self.raw.len();
    }

    pub fn has_code(&self) -> bool {
        self.code_start.is_some()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Chat text seen so far
    pub fn chat(&self) -> &str {
        match self.code_start {
            Some(start) => &self.raw[..start - CODE_FENCE.len()],
            None => &self.raw,
        }
    }

    /// Markup after the fence; empty until the fence has arrived
    pub fn code(&self) -> &str {
        match self.code_start {
            Some(start) => &self.raw[start..],
            None => "",
        }
    }

    /// Message to record for the assistant once the stream has ended.
    pub fn final_message(&self) -> String {
        if self.has_code() {
            CODE_READY_MESSAGE.to_string()
        } else {
            self.raw.trim().to_string()
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
