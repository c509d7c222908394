// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.

const ARBITRARY_PREFIX: &str = "bg-[";
const HEX_PREFIX: &str = "bg-#";
const UTILITY_PREFIX: &str = "bg-";

/// A background colour class as written in the source, e.g. `bg-[#A385E9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourToken<'a> {
    /// `bg-[...]`, holding the bracketed value.
    Arbitrary(&'a str),
    /// `bg-#...`, holding the text after the hash.
    Hex(&'a str),
    /// `bg-...`, holding the utility name, e.g. `purple-100`.
    Utility(&'a str),
    /// Anything without a recognised prefix.
    Verbatim(&'a str),
}

impl<'a> ColourToken<'a> {
    /// Classifies a token. Earlier rules win, so `bg-[#ABCDEF]` is `Arbitrary`.
    pub fn parse(token: &'a str) -> Self {
        if let Some(inner) = token
            .strip_prefix(ARBITRARY_PREFIX)
            .and_then(|t| t.strip_suffix(']'))
        {
            Self::Arbitrary(inner)
        } else if let Some(hex) = token.strip_prefix(HEX_PREFIX) {
            Self::Hex(hex)
        } else if let Some(name) = token.strip_prefix(UTILITY_PREFIX) {
            Self::Utility(name)
        } else {
            Self::Verbatim(token)
        }
    }

    /// The value the generated table stores for this token.
    pub fn normalized(&self) -> String {
        match *self {
            Self::Arbitrary(value) | Self::Utility(value) | Self::Verbatim(value) => {
                value.to_owned()
            }
            Self::Hex(hex) => format!("#{hex}"),
        }
    }
}

/// Normalises a colour token: `bg-[#ABCDEF]` and `bg-#ABCDEF` become `#ABCDEF`,
/// `bg-red-500` becomes `red-500`, anything else is returned unchanged.
pub fn normalize_colour(token: &str) -> String {
    ColourToken::parse(token).normalized()
}
