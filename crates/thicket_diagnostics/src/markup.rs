//! The inline style markup used in diagnostic messages.
//!
//! Messages carry style as `{{name}}` tokens embedded in plain text, for
//! example `"{{bold}}[It]{{/}} node"`. The vocabulary is closed: see
//! [`Style`]. Expansion to terminal escapes happens only at render time, so
//! diagnostics stay plain data until then.
//!
//! Anything that looks like a token but names no known style is kept
//! literally, and an unterminated `{{` is ordinary text. None of the
//! functions here can fail.

/// A named style token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Style {
    /// `{{/}}`: resets all styling.
    Reset,
    /// `{{bold}}`
    Bold,
    /// `{{underline}}`
    Underline,
    /// `{{red}}`
    Red,
    /// `{{orange}}`
    Orange,
    /// `{{coral}}`
    Coral,
    /// `{{magenta}}`
    Magenta,
    /// `{{green}}`
    Green,
    /// `{{dark-green}}`
    DarkGreen,
    /// `{{yellow}}`
    Yellow,
    /// `{{light-yellow}}`
    LightYellow,
    /// `{{cyan}}`
    Cyan,
    /// `{{gray}}`
    Gray,
    /// `{{light-gray}}`
    LightGray,
    /// `{{blue}}`
    Blue,
}

impl Style {
    /// Looks up a style by its token name.
    pub fn from_name(name: &str) -> Option<Style> {
        let style = match name {
            "/" => Style::Reset,
            "bold" => Style::Bold,
            "underline" => Style::Underline,
            "red" => Style::Red,
            "orange" => Style::Orange,
            "coral" => Style::Coral,
            "magenta" => Style::Magenta,
            "green" => Style::Green,
            "dark-green" => Style::DarkGreen,
            "yellow" => Style::Yellow,
            "light-yellow" => Style::LightYellow,
            "cyan" => Style::Cyan,
            "gray" => Style::Gray,
            "light-gray" => Style::LightGray,
            "blue" => Style::Blue,
            _ => return None,
        };
        Some(style)
    }

    /// Returns the token name, without delimiters.
    pub fn name(self) -> &'static str {
        match self {
            Style::Reset => "/",
            Style::Bold => "bold",
            Style::Underline => "underline",
            Style::Red => "red",
            Style::Orange => "orange",
            Style::Coral => "coral",
            Style::Magenta => "magenta",
            Style::Green => "green",
            Style::DarkGreen => "dark-green",
            Style::Yellow => "yellow",
            Style::LightYellow => "light-yellow",
            Style::Cyan => "cyan",
            Style::Gray => "gray",
            Style::LightGray => "light-gray",
            Style::Blue => "blue",
        }
    }

    /// Returns the ANSI SGR escape sequence for this style.
    pub fn ansi(self) -> &'static str {
        match self {
            Style::Reset => "\x1b[0m",
            Style::Bold => "\x1b[1m",
            Style::Underline => "\x1b[4m",
            Style::Red => "\x1b[38;5;9m",
            Style::Orange => "\x1b[38;5;214m",
            Style::Coral => "\x1b[38;5;204m",
            Style::Magenta => "\x1b[38;5;13m",
            Style::Green => "\x1b[38;5;10m",
            Style::DarkGreen => "\x1b[38;5;28m",
            Style::Yellow => "\x1b[38;5;11m",
            Style::LightYellow => "\x1b[38;5;228m",
            Style::Cyan => "\x1b[38;5;14m",
            Style::Gray => "\x1b[38;5;243m",
            Style::LightGray => "\x1b[38;5;246m",
            Style::Blue => "\x1b[38;5;12m",
        }
    }

    /// Returns the token as it appears in markup, e.g. `{{bold}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

/// One piece of tokenized markup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    /// Plain text, including any unterminated `{{`.
    Text(&'a str),
    /// A recognized style token.
    Style(Style),
    /// A delimited token with an unrecognized name, kept verbatim with its delimiters.
    Unknown(&'a str),
}

/// Iterator over the [`Token`]s of a markup string. Created by [`tokenize`].
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(open) = self.rest.find("{{") else {
            let text = self.rest;
            self.rest = "";
            return Some(Token::Text(text));
        };
        if open > 0 {
            let text = &self.rest[..open];
            self.rest = &self.rest[open..];
            return Some(Token::Text(text));
        }

        let Some(close) = self.rest[2..].find("}}").map(|i| i + 2) else {
            let text = self.rest;
            self.rest = "";
            return Some(Token::Text(text));
        };

        // `{{ {{bold}}`: the first opener is text, restart at the inner one.
        if let Some(inner) = self.rest[2..close].rfind("{{") {
            let split = inner + 2;
            let text = &self.rest[..split];
            self.rest = &self.rest[split..];
            return Some(Token::Text(text));
        }

        let raw = &self.rest[..close + 2];
        let name = &self.rest[2..close];
        self.rest = &self.rest[close + 2..];
        Some(match Style::from_name(name) {
            Some(style) => Token::Style(style),
            None => Token::Unknown(raw),
        })
    }
}

/// Splits markup into text and style tokens.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Expands style tokens into ANSI escapes, or removes them when `color` is off.
pub fn expand(text: &str, color: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            Token::Text(s) | Token::Unknown(s) => out.push_str(s),
            Token::Style(style) if color => out.push_str(style.ansi()),
            Token::Style(_) => {}
        }
    }
    out
}

/// Removes every recognized style token, leaving the plain text.
pub fn strip(text: &str) -> String {
    expand(text, false)
}

/// Returns the number of characters `text` occupies once styling is removed.
pub fn visible_width(text: &str) -> usize {
    tokenize(text)
        .map(|token| match token {
            Token::Text(s) | Token::Unknown(s) => s.chars().count(),
            Token::Style(_) => 0,
        })
        .sum()
}

/// Wraps `text` in the given styles followed by a reset.
pub fn styled(styles: &[Style], text: impl AsRef<str>) -> String {
    let mut out = String::new();
    for style in styles {
        out.push_str(&style.token());
    }
    out.push_str(text.as_ref());
    out.push_str(&Style::Reset.token());
    out
}

/// Shorthand for `styled(&[Style::Bold], text)`.
pub fn bold(text: impl AsRef<str>) -> String {
    styled(&[Style::Bold], text)
}

/// Shorthand for `styled(&[Style::Gray], text)`.
pub fn gray(text: impl AsRef<str>) -> String {
    styled(&[Style::Gray], text)
}
