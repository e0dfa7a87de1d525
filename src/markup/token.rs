//! Splits raw markup into alternating literal runs and bracketed directives.
//!
//! The split is purely positional: a directive runs up to the next `]`, a
//! literal run up to the next `[`. The scan starts in directive mode only when
//! the text begins with `[`. Because every token begins right at the
//! delimiter that ended the previous one, a directive carries a leading `[`
//! and a literal a leading `]`; exactly one such character is stripped.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One piece of tokenized markup.
pub enum Token<'a> {
    /// Plain characters to be laid out.
    Literal(&'a str),
    /// The inside of one bracket pair, e.g. `COLOUR=#FF0000`.
    Directive(&'a str),
}

/// Iterator over the [`Token`]s of a markup string.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a str,
    in_directive: bool,
    last_delim: Option<char>,
}

/// Tokenize `text` lazily.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        rest: text,
        in_directive: text.starts_with('['),
        last_delim: None,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // A tail made only of the previous closing delimiter carries no token.
        let remaining = match self.last_delim {
            Some(d) => self.rest.trim_start_matches(d),
            None => self.rest,
        };
        if remaining.is_empty() {
            self.rest = remaining;
            return None;
        }

        let (delim, stray) = if self.in_directive {
            (']', '[')
        } else {
            ('[', ']')
        };

        let end = self.rest.find(delim).unwrap_or(self.rest.len());
        let (raw, tail) = self.rest.split_at(end);
        self.rest = tail;
        self.last_delim = Some(delim);

        let body = raw.strip_prefix(stray).unwrap_or(raw);
        let token = if self.in_directive {
            Token::Directive(body)
        } else {
            Token::Literal(body)
        };
        self.in_directive = !self.in_directive;
        Some(token)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/token.rs"]
mod tests;
