//! HTML entity decoding for provider text.
//!
//! Open Trivia DB delivers prompts and answers HTML-entity encoded
//! (`&quot;`, `&#039;`, …). Decoding is infallible: anything that does not
//! parse as an entity passes through unchanged.

/// Decodes HTML character entities into their literal characters.
///
/// Handles the five standard XML entities, a small set of named entities the
/// provider commonly emits, and decimal (`&#039;`) and hexadecimal (`&#x27;`)
/// numeric character references. Malformed sequences are left as-is.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // `&` and `;` are ASCII, so the byte offsets below are char boundaries.
        let decoded = tail[1..]
            .find(';')
            .and_then(|semi| decode_entity(&tail[1..=semi]).map(|ch| (ch, semi + 2)));

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decodes a single entity name (the text between `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }

    let ch = match name {
        "quot" => '"',
        "amp" => '&',
        "apos" => '\'',
        "lt" => '<',
        "gt" => '>',
        "nbsp" => '\u{a0}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "deg" => '\u{b0}',
        "eacute" => '\u{e9}',
        "ouml" => '\u{f6}',
        "uuml" => '\u{fc}',
        "ntilde" => '\u{f1}',
        _ => return None,
    };
    Some(ch)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
