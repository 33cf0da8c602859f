//! Verse text cleanup
//!
//!     Steps run in a fixed order, each relying on the previous one:
//!
//!     1. Line breaks and tabs become spaces, whitespace runs collapse, ends are trimmed.
//!     2. One leading verse marker is removed: `(3)`, or digits with optional square
//!        brackets on either side (`[3]`, `[3`, `3]`, `3`).
//!     3. `<b>`, `<strong>` and `<i>` in any case fold to `<i>`; every other tag is
//!        removed and its content kept.
//!     4. The text is XML-escaped. Ampersands that already start one of the five
//!        predefined entities are left alone. The escaped forms of `<i>` and `</i>` are
//!        turned back into markup.
//!     5. Italic tags are balanced: stray closers are dropped and open tags are closed.
//!
//!     After step 3 the only markup left is `<i>`, so nothing else can come back in step 4.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LEADING_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\[?[0-9]+\]?|\([0-9]+\))\s*").expect("leading marker pattern")
});

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9:_.-]*)(?:\s[^<>]*?)?(/?)>").expect("tag pattern")
});

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?i>").expect("italic pattern"));

const ENTITIES: [&str; 5] = ["amp;", "lt;", "gt;", "quot;", "apos;"];

/// Clean raw verse text into Zefania element content.
pub fn clean(raw: &str) -> String {
    let text = collapse_whitespace(raw);
    let text = LEADING_MARKER.replace(&text, "");
    let text = reduce_tags(&text);
    let text = escape_text(&text);
    balance_italics(&text)
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn reduce_tags(text: &str) -> String {
    TAG.replace_all(text, |caps: &Captures| {
        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();
        let name = &caps[2];
        let italic = ["i", "b", "strong"]
            .iter()
            .any(|tag| name.eq_ignore_ascii_case(tag));

        match (italic && !self_closing, closing) {
            (true, false) => "<i>",
            (true, true) => "</i>",
            (false, _) => "",
        }
    })
    .into_owned()
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        match ch {
            '&' => {
                let rest = &text[idx + 1..];
                if ENTITIES.iter().any(|entity| rest.starts_with(entity)) {
                    escaped.push('&');
                } else {
                    escaped.push_str("&amp;");
                }
            }
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
        .replace("&lt;i&gt;", "<i>")
        .replace("&lt;/i&gt;", "</i>")
}

fn balance_italics(text: &str) -> String {
    let mut balanced = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut last = 0;

    for tag in ITALIC.find_iter(text) {
        balanced.push_str(&text[last..tag.start()]);
        last = tag.end();
        if tag.as_str() == "<i>" {
            depth += 1;
            balanced.push_str("<i>");
        } else if depth > 0 {
            depth -= 1;
            balanced.push_str("</i>");
        }
    }
    balanced.push_str(&text[last..]);
    for _ in 0..depth {
        balanced.push_str("</i>");
    }
    balanced
}
