/// ElevenLabs stays reliable well under its request-size ceiling at
/// 10,000 characters per call
pub const MAX_CHUNK_CHARS: usize = 10_000;

/// Split text into ordered chunks that respect sentence boundaries.
/// Each chunk is at most `max_chars` characters, except when a single
/// word is itself longer than the bound (it is emitted whole rather
/// than truncated).
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.len() <= max_chars {
        return vec![text.to_string()];
    }

    // Split on sentence-ending punctuation; the remainder after the last
    // boundary (or the whole text when no boundary exists) is one unit.
    let sentence_pattern = regex::Regex::new(r"[.!?]+\s+").unwrap();
    let mut sentences: Vec<&str> = Vec::new();
    let mut last_end = 0;

    for mat in sentence_pattern.find_iter(text) {
        sentences.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        // A sentence longer than the bound is re-split at word
        // granularity; flush whatever accumulated before it.
        if sentence.len() > max_chars {
            if !current.is_empty() {
                chunks.push(current.trim().to_string());
                current = String::new();
            }
            pack_words(sentence, max_chars, &mut chunks);
            continue;
        }

        // If adding this sentence would exceed the limit, save current chunk
        if !current.is_empty() && current.len() + sentence.len() > max_chars {
            chunks.push(current.trim().to_string());
            current = String::new();
        }

        current.push_str(sentence);
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks.retain(|c| !c.is_empty());
    chunks
}

/// Greedily pack whitespace-separated words into chunks. Words are never
/// split further, so a single word longer than `max_chars` becomes one
/// oversized chunk.
fn pack_words(sentence: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };

        if !current.is_empty() && needed > max_chars {
            chunks.push(current);
            current = String::new();
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_small_text() {
        let text = "This is a short text.";
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_chunk_text_exactly_max_size() {
        let text = "a".repeat(MAX_CHUNK_CHARS);
        let chunks = chunk_text(&text, MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), MAX_CHUNK_CHARS);
    }

    #[test]
    fn test_chunk_text_respects_max_size() {
        let sentence = "This is a sentence. ";
        let text = sentence.repeat(800); // 16,000 chars
        let chunks = chunk_text(&text, MAX_CHUNK_CHARS);

        assert!(chunks.len() > 1, "Text should be split into multiple chunks");
        for chunk in &chunks {
            assert!(
                chunk.len() <= MAX_CHUNK_CHARS,
                "Chunk size {} exceeds bound {}",
                chunk.len(),
                MAX_CHUNK_CHARS
            );
        }
    }

    #[test]
    fn test_chunk_text_combines_sentences_greedily() {
        // Two 4,000-char sentences fit one 10,000-char chunk; the third
        // starts a new one.
        let sentence = format!("{}. ", "b".repeat(3998));
        let text = sentence.repeat(3);
        let chunks = chunk_text(&text, 10_000);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].len() > 7000, "first chunk should hold two sentences");
        assert!(chunks[1].len() < 5000, "second chunk should hold one sentence");
    }

    #[test]
    fn test_chunk_text_oversized_sentence_splits_on_words() {
        let word = "word";
        let sentence = vec![word; 4000].join(" "); // ~20,000 chars, no punctuation
        let chunks = chunk_text(&sentence, MAX_CHUNK_CHARS);

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.len() <= MAX_CHUNK_CHARS);
            // Word-granular split never leaves partial words
            for w in chunk.split_whitespace() {
                assert_eq!(w, word);
            }
        }
    }

    #[test]
    fn test_chunk_text_single_long_word_exceeds_bound() {
        // No punctuation, no spaces: nothing to split on, the oversized
        // chunk is an accepted limitation rather than a truncation.
        let text = "a".repeat(15_000);
        let chunks = chunk_text(&text, 10_000);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 15_000);
    }

    #[test]
    fn test_chunk_text_no_empty_chunks() {
        let sentence = "Short. ";
        let text = sentence.repeat(2000);
        let chunks = chunk_text(&text, 50);
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_chunk_text_preserves_content() {
        let sentence = "This is sentence number X. ";
        let text = sentence.repeat(500);
        let chunks = chunk_text(&text, MAX_CHUNK_CHARS);

        // Trimming at chunk boundaries may drop whitespace but never words
        let reconstructed = chunks.join(" ");
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let reconstructed_words: Vec<&str> = reconstructed.split_whitespace().collect();

        assert_eq!(
            original_words.len(),
            reconstructed_words.len(),
            "Word count should be preserved"
        );
    }

    #[test]
    fn test_chunk_text_multiple_punctuation() {
        let text = "Question? Answer! Statement. Exclamation!";
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_chunk_text_oversized_sentence_flushes_pending_buffer() {
        let normal = "A normal sentence here. ";
        let huge = "x ".repeat(60); // 120 chars of words, no terminator
        let text = format!("{}{}", normal, huge);
        let chunks = chunk_text(&text, 100);

        assert!(chunks.len() >= 2);
        assert!(chunks[0].contains("normal sentence"));
        assert!(!chunks[0].contains("x x"));
    }
}
