//! # Line Segmenter Trait

/// A trait for line-level subword segmenters.
///
/// Input lines are whitespace-tokenized text; tokens are separated
/// by literal spaces.
pub trait LineSegmenter: Send + Sync {
    /// Segment a line into output tokens.
    ///
    /// Every subword of a word except the last carries the separator.
    ///
    /// ## Arguments
    /// * `line` - the whitespace-tokenized line.
    ///
    /// ## Returns
    /// The output tokens; repeated spaces produce no empty tokens.
    fn segment_tokens(
        &self,
        line: &str,
    ) -> Vec<String>;

    /// Segment a line, joining the output tokens with single spaces.
    fn segment_line(
        &self,
        line: &str,
    ) -> String {
        self.segment_tokens(line).join(" ")
    }

    /// Segment a raw text line.
    ///
    /// Leading and trailing whitespace (including any line terminator)
    /// is preserved verbatim around the segmented content.
    /// Whitespace-only lines are returned unchanged.
    fn segment_text_line(
        &self,
        line: &str,
    ) -> String {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return line.to_string();
        }

        let start = line.len() - line.trim_start().len();
        let end = start + trimmed.len();

        let mut out = String::with_capacity(line.len() * 2);
        out.push_str(&line[..start]);
        out.push_str(&self.segment_line(trimmed));
        out.push_str(&line[end..]);
        out
    }

    /// Segment a batch of raw text lines.
    ///
    /// ## Returns
    /// ``self.segment_text_line(line)`` for each line, in order.
    fn segment_batch(
        &self,
        lines: &[String],
    ) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.segment_text_line(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits every token into single characters.
    struct CharSegmenter;

    impl LineSegmenter for CharSegmenter {
        fn segment_tokens(
            &self,
            line: &str,
        ) -> Vec<String> {
            let mut out = Vec::new();
            for token in line.split(' ').filter(|t| !t.is_empty()) {
                let chars: Vec<char> = token.chars().collect();
                for (idx, c) in chars.iter().enumerate() {
                    if idx + 1 < chars.len() {
                        out.push(format!("{c}@@"));
                    } else {
                        out.push(c.to_string());
                    }
                }
            }
            out
        }
    }

    #[test]
    fn test_segment_line() {
        let seg = CharSegmenter;
        assert_eq!(seg.segment_line("ab  c"), "a@@ b c");
        assert_eq!(seg.segment_line(""), "");
    }

    #[test]
    fn test_segment_text_line_preserves_whitespace() {
        let seg = CharSegmenter;
        assert_eq!(seg.segment_text_line("  ab c\t\n"), "  a@@ b c\t\n");
        assert_eq!(seg.segment_text_line(" \n"), " \n");
        assert_eq!(seg.segment_text_line(""), "");
    }

    #[test]
    fn test_segment_batch() {
        let seg = CharSegmenter;
        let lines = vec!["ab\n".to_string(), "c".to_string()];
        assert_eq!(seg.segment_batch(&lines), vec!["a@@ b\n", "c"]);
    }
}
