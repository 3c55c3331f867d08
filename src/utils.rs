use tracing::debug;

/// Default maximum characters per segment sent to the speech service.
pub const MAX_CHUNK_CHARS: usize = 2000;

/// Greedily splits `text` into segments of at most `max_chars` characters,
/// breaking on the last whitespace that fits and hard-splitting words that don't.
///
/// Segments are trimmed and never empty. Whitespace-only input yields no segments.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        // Byte offset of the first character past the limit.
        let Some((limit, next)) = remaining.char_indices().nth(max_chars) else {
            chunks.push(remaining.to_string());
            break;
        };

        let window = &remaining[..limit + next.len_utf8()];
        let before = remaining.len();
        match window.rfind(char::is_whitespace) {
            Some(split) if split > 0 => {
                chunks.push(remaining[..split].trim_end().to_string());
                remaining = remaining[split..].trim();
            }
            _ => {
                debug!("No whitespace within {} chars; hard splitting", max_chars);
                chunks.push(remaining[..limit].to_string());
                remaining = remaining[limit..].trim();
            }
        }
        assert!(remaining.len() < before, "segmenter made no progress");
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_text_is_single_trimmed_chunk() {
        let chunks = chunk_text("  Hello world!  \n", 2000);
        assert_eq!(chunks, vec!["Hello world!"]);
    }

    #[test]
    fn test_exactly_max_chars_is_single_chunk() {
        let text = "a".repeat(10);
        assert_eq!(chunk_text(&text, 10), vec![text]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(chunk_text("", 10).is_empty());
        assert!(chunk_text(" \t\n ", 10).is_empty());
    }

    #[test]
    fn test_breaks_on_last_space() {
        let chunks = chunk_text("one two three four", 9);
        assert_eq!(chunks, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_space_right_at_limit_is_used() {
        // The space sits at index 5, exactly max_chars.
        let chunks = chunk_text("abcde fgh", 5);
        assert_eq!(chunks, vec!["abcde", "fgh"]);
    }

    #[test]
    fn test_hard_split_without_whitespace() {
        let chunks = chunk_text("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_scenario_2050_chars_space_at_1990() {
        let mut text = "x".repeat(1990);
        text.push(' ');
        text.push_str(&"y".repeat(59));
        assert_eq!(text.chars().count(), 2050);

        let chunks = chunk_text(&text, 2000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "x".repeat(1990));
        assert_eq!(chunks[1], "y".repeat(59));
    }

    #[test]
    fn test_long_whitespace_runs_terminate() {
        let text = format!("a{}b{}c", " ".repeat(50), "\n".repeat(50));
        let chunks = chunk_text(&text, 3);
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_max_is_treated_as_one() {
        assert_eq!(chunk_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "سلام دنیا خوب";
        let chunks = chunk_text(text, 9);
        assert_eq!(chunks, vec!["سلام دنیا", "خوب"]);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 9);
        }
    }

    #[test]
    fn test_multibyte_hard_split() {
        let chunks = chunk_text("ééééé", 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_chunks_bounded_ordered_and_rejoinable() {
        let text = "The quick brown fox jumps over the lazy dog.\n\n  \
                    Pack my box with   five dozen liquor jugs. \
                    Supercalifragilisticexpialidocious is quite long indeed!";
        for max in [1, 3, 7, 12, 25, 80, 500] {
            let chunks = chunk_text(text, max);
            for chunk in &chunks {
                assert!(!chunk.is_empty());
                assert!(chunk.chars().count() <= max, "{:?} exceeds {}", chunk, max);
            }
            let rejoined: String = chunks.concat();
            let source: String = text.split_whitespace().collect();
            assert_eq!(rejoined.replace(char::is_whitespace, ""), source);
            if max >= 34 {
                // No word is split once every word fits.
                assert_eq!(normalized(&chunks.join(" ")), normalized(text));
            }
        }
    }
}
