//! Sentence segmentation.

/// Splits text into sentences.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Characters that always end a sentence.
const SENTENCE_ENDINGS: &[char] = &['。', '！', '？', '!', '?'];

/// Closing marks that stay attached to the sentence they close.
const CLOSERS: &[char] = &['”', '’', '"', '\'', '）', ')', '」', '』', '》', ']'];

/// Splits after sentence-ending punctuation.
///
/// A half-width `.` only ends a sentence when whitespace or the end of the
/// text follows it, so `12.5` stays whole. A line break always ends a
/// sentence, so paragraphs never run together.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl PunctuationSplitter {
    fn ends_sentence(c: char, next: Option<char>) -> bool {
        SENTENCE_ENDINGS.contains(&c) || (c == '.' && next.is_none_or(char::is_whitespace))
    }
}

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if c == '\n' {
                push_trimmed(&mut sentences, &text[start..i]);
                start = i + c.len_utf8();
                continue;
            }
            let next = chars.peek().map(|&(_, n)| n);
            if !Self::ends_sentence(c, next) {
                continue;
            }
            // swallow runs like "?!" and trailing closing quotes
            while let Some(&(_, n)) = chars.peek() {
                if SENTENCE_ENDINGS.contains(&n) || n == '.' || CLOSERS.contains(&n) {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map_or(text.len(), |&(i, _)| i);
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        PunctuationSplitter.split(text)
    }

    #[test]
    fn test_split_full_width() {
        assert_eq!(
            split("卡尔普陪外孙玩滑梯。 假语村言别再拥抱我。"),
            vec!["卡尔普陪外孙玩滑梯。", "假语村言别再拥抱我。"]
        );
    }

    #[test]
    fn test_split_keeps_decimals() {
        assert_eq!(
            split("这个房间面积是12.5平方米。总共是98.76%。"),
            vec!["这个房间面积是12.5平方米。", "总共是98.76%。"]
        );
    }

    #[test]
    fn test_split_half_width_period() {
        assert_eq!(split("Hello there. Bye."), vec!["Hello there.", "Bye."]);
    }

    #[test]
    fn test_split_runs_and_closers() {
        assert_eq!(
            split("真的吗？！」他问。"),
            vec!["真的吗？！」", "他问。"]
        );
    }

    #[test]
    fn test_split_trailing_fragment() {
        assert_eq!(split("第一句。第二句没有句号"), vec!["第一句。", "第二句没有句号"]);
    }

    #[test]
    fn test_split_paragraphs() {
        assert_eq!(split("第一段\n\n第二段"), vec!["第一段", "第二段"]);
        assert_eq!(
            split("第一句。\r\n第二句\n第三句！"),
            vec!["第一句。", "第二句", "第三句！"]
        );
    }

    #[test]
    fn test_split_empty_and_whitespace() {
        assert!(split("").is_empty());
        assert!(split("  \n ").is_empty());
    }
}
