//! Formula markup: a small LaTeX-like subset rendered to inline HTML.
//!
//! Supported input:
//! - `\frac{num}{den}` with nested braces,
//! - `^{..}` / `_{..}` groups,
//! - a closed table of escape tokens (`\times`, `\cdot`, Greek letters, trig
//!   names, `\pm`, `\propto`, `\cdots`).
//!
//! Malformed input never fails: anything that cannot be parsed is emitted as
//! written.

const FRAC: &str = "\\frac";

/// Escape tokens and their replacements. Matching is by full command name, so
/// table order does not matter.
const TOKENS: &[(&str, &str)] = &[
    ("times", "&times;"),
    ("cdot", "&middot;"),
    ("cdots", "⋯"),
    ("Delta", "Δ"),
    ("alpha", "α"),
    ("beta", "β"),
    ("omega", "ω"),
    ("theta", "θ"),
    ("varphi", "φ"),
    ("varepsilon", "ε"),
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("pm", "±"),
    ("propto", "∝"),
];

/// Render a formula source string as display markup.
pub fn format_formula(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }
    let escaped = escape_html(source);
    let with_fracs = replace_fractions(&escaped);
    let with_tokens = replace_tokens(&with_fracs);
    replace_scripts(&with_tokens)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns the inner text of the balanced `{..}` group starting at byte
/// `start`, and the byte index just past its closing brace.
fn brace_group(s: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = s.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[start + 1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

fn replace_fractions(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 32);
    let mut i = 0;
    while i < s.len() {
        if s[i..].starts_with(FRAC) {
            let after = i + FRAC.len();
            let groups = brace_group(s, after)
                .and_then(|(num, end)| brace_group(s, end).map(|(den, end)| (num, den, end)));
            match groups {
                Some((num, den, end)) => {
                    out.push_str("<span class=\"math-frac\"><span class=\"top\">");
                    out.push_str(num);
                    out.push_str("</span><span class=\"bottom\">");
                    out.push_str(den);
                    out.push_str("</span></span>");
                    i = end;
                }
                None => {
                    out.push_str(FRAC);
                    i = after;
                }
            }
        } else if let Some(c) = s[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }
    out
}

fn replace_tokens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .char_indices()
            .find(|(_, c)| !c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        let name = &after[..name_len];
        match TOKENS.iter().find(|(k, _)| *k == name) {
            Some((_, replacement)) => out.push_str(replacement),
            None => {
                out.push('\\');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }
    out.push_str(rest);
    out
}

/// `^{..}` → `<sup>..</sup>`, `_{..}` → `<sub>..</sub>`. The group ends at the
/// first `}`; an unterminated group is left as written.
fn replace_scripts(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 16);
    let mut rest = s;
    loop {
        let next = rest.find(|c| c == '^' || c == '_');
        let Some(pos) = next else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..pos]);
        let marker = &rest[pos..pos + 1];
        let tail = &rest[pos + 1..];
        let tag = if marker == "^" { "sup" } else { "sub" };
        match tail.strip_prefix('{').and_then(|t| t.find('}').map(|end| (t, end))) {
            Some((group, end)) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&group[..end]);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                rest = &group[end + 1..];
            }
            None => {
                out.push_str(marker);
                rest = tail;
            }
        }
    }
    out
}
