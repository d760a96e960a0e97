//! Case-sensitive SQL `LIKE` patterns.
//!
//! `%` matches any run of characters (including none), `_` matches exactly
//! one character and every other character matches itself. There is no
//! escape character.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    AnyRun,
    AnyOne,
    Literal(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    source: String,
    tokens: Vec<Token>,
}

impl LikePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let tokens = source
            .chars()
            .map(|c| match c {
                '%' => Token::AnyRun,
                '_' => Token::AnyOne,
                other => Token::Literal(other),
            })
            .collect();

        Self { source, tokens }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        let tokens = &self.tokens;

        let (mut t, mut p) = (0, 0);
        // Last `%` seen and the text position it is currently absorbing up to
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            if p < tokens.len() {
                match tokens[p] {
                    Token::AnyRun => {
                        backtrack = Some((p, t));
                        p += 1;
                        continue;
                    }
                    Token::AnyOne => {
                        p += 1;
                        t += 1;
                        continue;
                    }
                    Token::Literal(c) if c == text[t] => {
                        p += 1;
                        t += 1;
                        continue;
                    }
                    Token::Literal(_) => {}
                }
            }

            match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            }
        }

        tokens[p..].iter().all(|token| *token == Token::AnyRun)
    }

    /// Equivalent SQLite `GLOB` pattern.
    ///
    /// `GLOB` is case-sensitive regardless of connection pragmas, which plain
    /// `LIKE` is not for ASCII letters.
    pub fn to_glob(&self) -> String {
        let mut glob = String::with_capacity(self.source.len());
        for token in &self.tokens {
            match token {
                Token::AnyRun => glob.push('*'),
                Token::AnyOne => glob.push('?'),
                Token::Literal(c @ ('*' | '?' | '[')) => {
                    glob.push('[');
                    glob.push(*c);
                    glob.push(']');
                }
                Token::Literal(c) => glob.push(*c),
            }
        }
        glob
    }
}

impl From<&str> for LikePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl std::fmt::Display for LikePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
