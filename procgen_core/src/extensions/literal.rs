// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.

/// Conversions between raw script string literal text and plain strings.
pub trait ScriptLiteral {
    /// Decodes backslash escapes into the characters they stand for.
    ///
    /// Handles `\uXXXX` (including surrogate pairs), `\u{X..}`, `\UXXXXXXXX`,
    /// `\xNN` and the single character escapes. Anything unrecognised is
    /// left as written, backslash included.
    fn unescape(&self) -> String;

    /// Prefixes every `'` with a backslash so the text fits inside a
    /// single-quoted literal.
    fn escape_single_quotes(&self) -> String;
}

impl ScriptLiteral for str {
    fn unescape(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut rest = self;

        while let Some(pos) = rest.find('\\') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];
            match decode_escape(tail) {
                Some((c, consumed)) => {
                    out.push(c);
                    rest = &tail[consumed..];
                }
                None => {
                    out.push('\\');
                    rest = tail;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn escape_single_quotes(&self) -> String {
        self.replace('\'', "\\'")
    }
}

/// Decodes the escape at the start of `tail`, the text following a backslash.
///
/// Returns the character and how many bytes of `tail` it used.
fn decode_escape(tail: &str) -> Option<(char, usize)> {
    let c = tail.chars().next()?;
    let simple = match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    };
    if let Some(decoded) = simple {
        return Some((decoded, 1));
    }

    match c {
        'x' => hex_char(tail.get(1..3)?).map(|decoded| (decoded, 3)),
        'U' => hex_char(tail.get(1..9)?).map(|decoded| (decoded, 9)),
        'u' => decode_unicode(&tail[1..]).map(|(decoded, used)| (decoded, used + 1)),
        _ => None,
    }
}

/// Decodes the part of a `\u` escape after the `u`.
fn decode_unicode(after_u: &str) -> Option<(char, usize)> {
    if let Some(braced) = after_u.strip_prefix('{') {
        let end = braced.find('}')?;
        let hex = &braced[..end];
        if hex.len() > 6 {
            return None;
        }
        return hex_char(hex).map(|decoded| (decoded, end + 2));
    }

    let unit = hex_u32(after_u.get(..4)?)?;
    if (0xD800..0xDC00).contains(&unit) {
        // High surrogate, only valid when a `\uDC00`..`\uDFFF` follows.
        if let Some(low) = after_u
            .get(4..10)
            .and_then(|s| s.strip_prefix("\\u"))
            .and_then(hex_u32)
            && (0xDC00..0xE000).contains(&low)
        {
            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).map(|decoded| (decoded, 10));
        }
        return None;
    }

    char::from_u32(unit).map(|decoded| (decoded, 4))
}

fn hex_u32(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn hex_char(digits: &str) -> Option<char> {
    hex_u32(digits).and_then(char::from_u32)
}
