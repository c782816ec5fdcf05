//! Auxiliary word segmentation for languages without
//! whitespace-delimited tokens.
//!
//! Japanese, Chinese and Thai text reaches the tokenizer as unbroken
//! runs of script characters. The segmenter breaks such runs into
//! single-character tokens (the classic unigram fallback) while
//! leaving embedded Latin/numeric spans whole. Support is registered
//! once, idempotently, in a process-wide registry before first use.

use once_cell::sync::OnceCell;

static REGISTRY: OnceCell<Segmenter> = OnceCell::new();

/// Register the segmenter, returning the shared instance.
///
/// Idempotent: repeated calls return the same instance.
pub fn register() -> &'static Segmenter {
    REGISTRY.get_or_init(Segmenter::new)
}

/// Whether the segmenter has been registered
pub fn is_registered() -> bool {
    REGISTRY.get().is_some()
}

/// Unigram segmenter for scripts without word delimiters
#[derive(Debug)]
pub struct Segmenter {
    _private: (),
}

impl Segmenter {
    fn new() -> Self {
        Self { _private: () }
    }

    /// Split one whitespace-delimited run into tokens.
    ///
    /// Characters of unsegmented scripts become single-character
    /// tokens; everything else is grouped into contiguous spans.
    pub fn segment(&self, run: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut span = String::new();

        for ch in run.chars() {
            if is_unsegmented_script(ch) {
                if !span.is_empty() {
                    tokens.push(std::mem::take(&mut span));
                }
                tokens.push(ch.to_string());
            } else {
                span.push(ch);
            }
        }
        if !span.is_empty() {
            tokens.push(span);
        }

        tokens
    }
}

/// Scripts whose words are not whitespace-delimited
fn is_unsegmented_script(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{30FF}'   // Hiragana and Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Unified Ideographs Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
        | '\u{FF66}'..='\u{FF9D}' // Halfwidth Katakana
        | '\u{0E00}'..='\u{0E7F}' // Thai
    )
}
