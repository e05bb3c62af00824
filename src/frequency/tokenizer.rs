use unicode_segmentation::UnicodeSegmentation;

/// What to do with the empty tokens produced at text boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTokenPolicy {
    /// Keep them; `""` becomes `[""]` and a trailing delimiter yields a final `""`.
    #[default]
    Keep,
    Drop,
}

pub trait Tokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Letters, digits, underscore and apostrophe form words.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// A grapheme takes the class of its base character, so combining marks stay
/// attached to the letter they modify.
fn is_word_grapheme(g: &str) -> bool {
    g.chars().next().map_or(false, is_word_char)
}

/// Splits on every maximal run of non-word characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    empty_tokens: EmptyTokenPolicy,
}

impl WordTokenizer {
    pub fn new(empty_tokens: EmptyTokenPolicy) -> Self {
        Self { empty_tokens }
    }

    pub fn empty_tokens(&self) -> EmptyTokenPolicy {
        self.empty_tokens
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut in_delimiter = false;

        for (idx, g) in text.grapheme_indices(true) {
            if is_word_grapheme(g) {
                if in_delimiter {
                    start = idx;
                    in_delimiter = false;
                }
            } else if !in_delimiter {
                tokens.push(&text[start..idx]);
                in_delimiter = true;
            }
        }

        // The piece after the last delimiter run, empty if the text ends on one.
        if in_delimiter {
            tokens.push("");
        } else {
            tokens.push(&text[start..]);
        }

        if self.empty_tokens == EmptyTokenPolicy::Drop {
            tokens.retain(|t| !t.is_empty());
        }

        tokens
    }
}
