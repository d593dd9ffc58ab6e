//! Human-friendly text formatting helpers.
//!
//! Stateless, deterministic transforms for display text and small HTML
//! fragments:
//!
//! - sentence-style list joining with an optional Oxford comma,
//! - HTML tag filtering against a fixed known-tag universe,
//! - case/slug/title conversions,
//! - human-readable byte-count and duration rendering,
//! - widow prevention (`&nbsp;` before the last word of a block),
//! - a named-transform pipeline with an explicit registry,
//! - Tailwind-style width-fraction class lookup.
//!
//! Every function is a pure computation over in-memory strings and is
//! total over its documented input domain. The single failure mode in
//! the crate is a pipeline step naming a transform that is not
//! registered, surfaced as [`Error::UnknownTransform`].

use memchr::{memchr, memmem};
use thiserror::Error;

/* ================================ Errors ================================ */

/// The only failure the crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pipeline step named a transform that is not in the registry.
    #[error("unknown transform `{0}`")]
    UnknownTransform(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/* ============================ Sentence lists ============================ */

/// Joins `items` into a human-readable sentence fragment.
///
/// Zero or one items concatenate trivially; two items are joined by the
/// glue word alone; three or more get `", "` separators with an
/// optional Oxford comma before the glue.
pub fn join_sentence_list<S: AsRef<str>>(items: &[S], glue: &str, oxford_comma: bool) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [a, b] => format!("{} {glue} {}", a.as_ref(), b.as_ref()),
        [head @ .., last] => {
            let mut out = String::new();
            for (i, item) in head.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(item.as_ref());
            }
            if oxford_comma {
                out.push(',');
            }
            out.push(' ');
            out.push_str(glue);
            out.push(' ');
            out.push_str(last.as_ref());
            out
        }
    }
}

/// [`join_sentence_list`] with the conventional English defaults:
/// `"and"` as the glue word and the Oxford comma enabled.
///
/// ```
/// assert_eq!(humantext::sentence_list(&["a", "b", "c"]), "a, b, and c");
/// ```
pub fn sentence_list<S: AsRef<str>>(items: &[S]) -> String {
    join_sentence_list(items, "and", true)
}

/* ============================= Tag scanning ============================= */

#[inline]
fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

/// Find the '>' closing a tag that starts at `start` (`s[start] == '<'`),
/// skipping over quoted attribute values.
fn find_tag_end(s: &[u8], start: usize) -> Option<usize> {
    let mut quote = 0u8;
    for (i, &b) in s.iter().enumerate().skip(start + 1) {
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
    }
    None
}

/// Tag name and end-tag flag for raw `<...>` bytes. The name is empty
/// for markup that carries none (`<>`, `<!doctype ...>`).
fn tag_name(tag: &[u8]) -> (&[u8], bool) {
    let is_end = tag.get(1) == Some(&b'/');
    let mut i = if is_end { 2 } else { 1 };
    while i < tag.len() && tag[i].is_ascii_whitespace() {
        i += 1;
    }
    let start = i;
    while i < tag.len() && is_name_char(tag[i]) {
        i += 1;
    }
    (&tag[start..i], is_end)
}

/* ============================== Tag filter ============================== */

/// Canonical universe of tag names recognised by [`strip_tags`].
const KNOWN_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b", "base",
    "basefont", "bdi", "bdo", "big", "blockquote", "body", "br", "button", "canvas", "caption",
    "center", "cite", "code", "col", "colgroup", "command", "data", "datagrid", "datalist", "dd",
    "del", "details", "dfn", "dir", "div", "dl", "dt", "em", "embed", "eventsource", "fieldset",
    "figcaption", "figure", "font", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "isindex",
    "ins", "kbd", "keygen", "label", "legend", "li", "link", "main", "mark", "map", "menu", "meta",
    "meter", "nav", "noframes", "noscript", "object", "ol", "optgroup", "option", "output", "p",
    "param", "pre", "progress", "q", "ruby", "rp", "rt", "s", "samp", "script", "section",
    "select", "small", "source", "span", "strike", "strong", "style", "sub", "summary", "sup",
    "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track",
    "tt", "u", "ul", "var", "video", "wbr",
];

/// Strips tags from `html`, keeping content text.
///
/// `excluded` names tags to remove from the otherwise-fixed known-tag
/// universe: with an empty `excluded` every tag is stripped; otherwise
/// tags still in the universe pass through verbatim, attributes and
/// all. Comments are always removed. Matching is ASCII
/// case-insensitive. Not a sanitizer: no entity decoding, no attribute
/// inspection.
pub fn strip_tags(html: &str, excluded: &[&str]) -> String {
    let keep = |name: &[u8]| {
        !excluded.is_empty()
            && !name.is_empty()
            && !excluded.iter().any(|x| name.eq_ignore_ascii_case(x.as_bytes()))
            && KNOWN_TAGS.iter().any(|t| name.eq_ignore_ascii_case(t.as_bytes()))
    };

    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;
    loop {
        let Some(lt) = memchr(b'<', &bytes[i..]).map(|off| i + off) else {
            out.push_str(&html[i..]);
            break;
        };
        out.push_str(&html[i..lt]);

        if bytes[lt..].starts_with(b"<!--") {
            // unterminated comments discard the remainder, as do
            // unterminated tags below
            match memmem::find(&bytes[lt + 4..], b"-->") {
                Some(end) => i = lt + 4 + end + 3,
                None => break,
            }
            continue;
        }

        let Some(gt) = find_tag_end(bytes, lt) else {
            break;
        };
        let tag = &html[lt..=gt];
        let (name, _) = tag_name(tag.as_bytes());
        if keep(name) {
            out.push_str(tag);
        }
        i = gt + 1;
    }
    out
}

/* =========================== Case conversions =========================== */

/// Studly/camel case to `snake_case`.
///
/// Whitespace-separated words are capitalised and fused first, so
/// `"foo bar"` becomes `"foo_bar"`; a `_` then lands before every
/// remaining uppercase letter.
pub fn snake(input: &str) -> String {
    let mut fused = String::with_capacity(input.len());
    let mut boundary = true;
    for c in input.chars() {
        if c.is_whitespace() {
            boundary = true;
        } else if boundary {
            fused.extend(c.to_uppercase());
            boundary = false;
        } else {
            fused.push(c);
        }
    }

    let mut out = String::with_capacity(fused.len() + 4);
    for (i, c) in fused.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lower-cases `input` and collapses every run of non-alphanumeric
/// characters into a single `-`, trimming separators from both ends.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Title-cases each whitespace-separated word: first letter upper-cased,
/// the rest lower-cased. Whitespace is preserved as-is.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut boundary = true;
    for c in input.chars() {
        if c.is_whitespace() {
            boundary = true;
            out.push(c);
        } else if boundary {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Replaces `-` and `_` with spaces. No case changes.
pub fn deslugify(input: &str) -> String {
    input.replace(['-', '_'], " ")
}

/// `"FooBar"` → `"foo-bar"`.
pub fn studly_to_slug(input: &str) -> String {
    slugify(&snake(input))
}

/// `"FooBar"` → `"Foo Bar"`.
pub fn studly_to_title(input: &str) -> String {
    slug_to_title(&snake(input))
}

/// `"foo-bar_baz"` → `"Foo Bar Baz"`.
pub fn slug_to_title(input: &str) -> String {
    title_case(&deslugify(input))
}

/// True when the string points somewhere a browser could follow: an
/// absolute http(s) URL or a root-relative path.
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with('/')
}

/* ============================ Human formatting ========================== */

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Renders a byte count with binary-unit tiers.
///
/// Sub-kilobyte values print as whole bytes; the `KB`, `MB` and `GB`
/// tiers carry `decimals` fractional digits.
///
/// ```
/// assert_eq!(humantext::file_size_for_humans(1_073_741_824, 2), "1.00 GB");
/// ```
pub fn file_size_for_humans(bytes: u64, decimals: usize) -> String {
    if bytes >= GIB {
        format!("{:.decimals$} GB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.decimals$} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.decimals$} KB", bytes as f64 / KIB as f64)
    } else if bytes >= 1 {
        format!("{bytes} B")
    } else {
        "0 B".to_string()
    }
}

/// Renders a millisecond count: raw milliseconds under one second,
/// seconds with two decimals from there up (`1500` → `"1.50s"`).
pub fn time_for_humans(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

/* =========================== Widow prevention =========================== */

const WIDONT_BLOCKS: &[&[u8]] = &[
    b"p",
    b"li",
    b"h1",
    b"h2",
    b"h3",
    b"h4",
    b"h5",
    b"h6",
    b"div",
    b"figcaption",
];

fn is_widont_block(name: &[u8]) -> bool {
    WIDONT_BLOCKS.iter().any(|t| name.eq_ignore_ascii_case(t))
}

/// Tag span containing byte position `pos`, if any. `spans` holds
/// half-open `[start, end)` ranges sorted by start.
fn span_containing(spans: &[(usize, usize)], pos: usize) -> Option<(usize, usize)> {
    let idx = spans.partition_point(|&(start, _)| start <= pos);
    if idx == 0 {
        return None;
    }
    let (start, end) = spans[idx - 1];
    (pos < end).then_some((start, end))
}

/// The space/tab run separating the final two tokens before the closing
/// tag at `close`. Embedded tags count as part of a token, so spaces
/// inside markup are never candidates.
fn trailing_space_run(
    bytes: &[u8],
    spans: &[(usize, usize)],
    close: usize,
) -> Option<(usize, usize)> {
    // whitespace between the last word and its closing tag
    let mut p = close;
    while p > 0 && span_containing(spans, p - 1).is_none() && bytes[p - 1].is_ascii_whitespace() {
        p -= 1;
    }

    // the word itself: non-whitespace text bytes and whole embedded tags
    let word_end = p;
    loop {
        if p == 0 {
            break;
        }
        if let Some((start, _)) = span_containing(spans, p - 1) {
            p = start;
        } else if !bytes[p - 1].is_ascii_whitespace() {
            p -= 1;
        } else {
            break;
        }
    }
    if p == word_end {
        return None;
    }

    // the separating run: spaces and tabs only, never crossing markup
    let run_end = p;
    while p > 0
        && span_containing(spans, p - 1).is_none()
        && (bytes[p - 1] == b' ' || bytes[p - 1] == b'\t')
    {
        p -= 1;
    }
    if p == run_end || p == 0 {
        return None;
    }

    // a preceding token must exist
    if span_containing(spans, p - 1).is_none() && bytes[p - 1].is_ascii_whitespace() {
        return None;
    }
    Some((p, run_end))
}

/// No-markup branch: replace the last whitespace run separating the
/// final two tokens of the (already right-trimmed) string.
fn widont_plain(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut p = bytes.len();
    while p > 0 && !bytes[p - 1].is_ascii_whitespace() {
        p -= 1;
    }
    if p == 0 {
        return src.to_string();
    }
    let run_end = p;
    while p > 0 && bytes[p - 1].is_ascii_whitespace() {
        p -= 1;
    }
    if p == 0 {
        return src.to_string();
    }
    format!("{}&nbsp;{}", &src[..p], &src[run_end..])
}

/// Prevents widows: replaces the space between the final two words of
/// each block element (`p`, `li`, `h1`–`h6`, `div`, `figcaption`) with
/// a `&nbsp;` entity so the last word cannot wrap onto its own line.
///
/// When the input carries none of those closing tags the whole string
/// is treated as one block. Trailing whitespace is trimmed first; a
/// zero- or one-word input comes back unchanged. Attribute text inside
/// markup is never altered.
///
/// ```
/// assert_eq!(humantext::widont("one two three"), "one two&nbsp;three");
/// ```
pub fn widont(html: &str) -> String {
    let src = html.trim_end();
    let bytes = src.as_bytes();

    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut closes: Vec<usize> = Vec::new();
    let mut i = 0;
    while let Some(off) = memchr(b'<', &bytes[i..]) {
        let lt = i + off;
        let Some(gt) = find_tag_end(bytes, lt) else {
            break;
        };
        spans.push((lt, gt + 1));
        let (name, is_end) = tag_name(&bytes[lt..=gt]);
        if is_end && is_widont_block(name) {
            closes.push(lt);
        }
        i = gt + 1;
    }

    if closes.is_empty() {
        return widont_plain(src);
    }

    // every qualifying block gets protection at its own boundary;
    // nested blocks sharing a run collapse to one replacement
    let mut runs: Vec<(usize, usize)> = closes
        .iter()
        .filter_map(|&close| trailing_space_run(bytes, &spans, close))
        .collect();
    runs.sort_unstable();
    runs.dedup();

    let mut out = String::with_capacity(src.len() + runs.len() * 6);
    let mut prev = 0;
    for &(start, end) in &runs {
        out.push_str(&src[prev..start]);
        out.push_str("&nbsp;");
        prev = end;
    }
    out.push_str(&src[prev..]);
    out
}

/* ========================== Transform pipeline ========================== */

/// One step of [`apply_modifications`]: either the registry name of a
/// built-in transform or an arbitrary function.
#[derive(Debug, Clone, Copy)]
pub enum Modification<'a> {
    Named(&'a str),
    Callable(fn(&str) -> String),
}

/// Registry of named transforms. Names mirror the public
/// single-string functions.
fn lookup_transform(name: &str) -> Option<fn(&str) -> String> {
    Some(match name {
        "snake" => snake,
        "slugify" => slugify,
        "title_case" => title_case,
        "deslugify" => deslugify,
        "slug_to_title" => slug_to_title,
        "studly_to_slug" => studly_to_slug,
        "studly_to_title" => studly_to_title,
        "widont" => widont,
        _ => return None,
    })
}

/// Applies `steps` to `input` left to right, each step consuming the
/// previous step's output.
///
/// # Errors
///
/// [`Error::UnknownTransform`] when a named step does not resolve to a
/// registered transform.
pub fn apply_modifications(input: &str, steps: &[Modification<'_>]) -> Result<String> {
    let mut value = input.to_string();
    for step in steps {
        value = match step {
            Modification::Named(name) => match lookup_transform(name) {
                Some(f) => f(&value),
                None => return Err(Error::UnknownTransform((*name).to_string())),
            },
            Modification::Callable(f) => f(&value),
        };
    }
    Ok(value)
}

/* ============================= Width classes ============================ */

/// Maps a percentage column width onto a Tailwind width utility class.
/// Unrecognised widths fall back to `"w-full"`.
pub fn tailwind_width_class(percent: u32) -> String {
    let token = match percent {
        25 => "1/4",
        33 => "1/3",
        50 => "1/2",
        66 => "2/3",
        75 => "3/4",
        _ => "full",
    };
    format!("w-{token}")
}

/// Renders a boolean as its literal `"true"`/`"false"` string.
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/* ================================= Tests ================================ */

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentence_list_empty_and_single() {
        let empty: [&str; 0] = [];
        assert_eq!(sentence_list(&empty), "");
        assert_eq!(sentence_list(&["apples"]), "apples");
    }

    #[test]
    fn sentence_list_two_items() {
        assert_eq!(sentence_list(&["apples", "pears"]), "apples and pears");
        assert_eq!(
            join_sentence_list(&["apples", "pears"], "or", true),
            "apples or pears"
        );
    }

    #[test]
    fn sentence_list_three_or_more() {
        assert_eq!(
            sentence_list(&["apples", "pears", "plums"]),
            "apples, pears, and plums"
        );
        assert_eq!(
            join_sentence_list(&["a", "b", "c", "d"], "and", true),
            "a, b, c, and d"
        );
    }

    #[test]
    fn sentence_list_without_oxford_comma() {
        assert_eq!(
            join_sentence_list(&["apples", "pears", "plums"], "or", false),
            "apples, pears or plums"
        );
    }

    #[test]
    fn strip_tags_removes_everything_by_default() {
        assert_eq!(strip_tags("<b>hi</b><i>x</i>", &[]), "hix");
        assert_eq!(strip_tags("plain", &[]), "plain");
    }

    #[test]
    fn strip_tags_excluded_only() {
        assert_eq!(strip_tags("<a>A</a><b>B</b>", &["a"]), "A<b>B</b>");
        assert_eq!(strip_tags("<b>hi</b><i>x</i>", &["b"]), "hi<i>x</i>");
    }

    #[test]
    fn strip_tags_is_case_insensitive() {
        assert_eq!(strip_tags("<B>hi</B><I>x</I>", &["b"]), "hi<I>x</I>");
    }

    #[test]
    fn strip_tags_drops_comments() {
        assert_eq!(strip_tags("x<!-- note -->y", &["b"]), "xy");
        assert_eq!(strip_tags("x<!-- a > b -->y", &[]), "xy");
    }

    #[test]
    fn strip_tags_keeps_attributes_on_allowed_tags() {
        assert_eq!(
            strip_tags(r#"<a href="/x">go</a><script>bad()</script>"#, &["script"]),
            r#"<a href="/x">go</a>bad()"#
        );
    }

    #[test]
    fn strip_tags_discards_unterminated_tail() {
        assert_eq!(strip_tags("a <b", &[]), "a ");
        assert_eq!(strip_tags("a <!-- open", &[]), "a ");
    }

    #[test]
    fn snake_cases() {
        assert_eq!(snake("FooBar"), "foo_bar");
        assert_eq!(snake("fooBar"), "foo_bar");
        assert_eq!(snake("foo bar"), "foo_bar");
        assert_eq!(snake("foobar"), "foobar");
        assert_eq!(snake(""), "");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("Foo  Bar!"), "foo-bar");
        assert_eq!(slugify("foo_bar"), "foo-bar");
        assert_eq!(slugify("--x--"), "x");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("foo bar"), "Foo Bar");
        assert_eq!(title_case("FOO BAR"), "Foo Bar");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn deslugify_replaces_separators() {
        assert_eq!(deslugify("foo-bar_baz"), "foo bar baz");
    }

    #[test]
    fn deslugify_is_idempotent_once_clean() {
        let once = deslugify("foo-bar_baz");
        assert_eq!(deslugify(&once), once);
    }

    #[test]
    fn studly_conversions() {
        assert_eq!(studly_to_slug("FooBar"), "foo-bar");
        assert_eq!(studly_to_title("FooBar"), "Foo Bar");
        assert_eq!(slug_to_title("foo-bar_baz"), "Foo Bar Baz");
    }

    #[test]
    fn is_url_matches() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com"));
        assert!(is_url("/relative/path"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("example.com"));
        assert!(!is_url(""));
    }

    #[test]
    fn file_size_tiers() {
        assert_eq!(file_size_for_humans(0, 2), "0 B");
        assert_eq!(file_size_for_humans(1, 2), "1 B");
        assert_eq!(file_size_for_humans(500, 2), "500 B");
        assert_eq!(file_size_for_humans(1023, 2), "1023 B");
        assert_eq!(file_size_for_humans(1024, 2), "1.00 KB");
        assert_eq!(file_size_for_humans(1_048_576, 2), "1.00 MB");
        assert_eq!(file_size_for_humans(1_073_741_824, 2), "1.00 GB");
        assert_eq!(file_size_for_humans(1_610_612_736, 1), "1.5 GB");
    }

    #[test]
    fn time_tiers() {
        assert_eq!(time_for_humans(0), "0ms");
        assert_eq!(time_for_humans(500), "500ms");
        assert_eq!(time_for_humans(999), "999ms");
        assert_eq!(time_for_humans(1000), "1.00s");
        assert_eq!(time_for_humans(1500), "1.50s");
    }

    #[test]
    fn widont_plain_text() {
        assert_eq!(widont("one two three"), "one two&nbsp;three");
        assert_eq!(widont("one two\tthree"), "one two&nbsp;three");
    }

    #[test]
    fn widont_short_inputs_unchanged() {
        assert_eq!(widont(""), "");
        assert_eq!(widont("hello"), "hello");
        assert_eq!(widont("  hello"), "  hello");
    }

    #[test]
    fn widont_trims_trailing_whitespace() {
        assert_eq!(widont("one two three  \n"), "one two&nbsp;three");
    }

    #[test]
    fn widont_paragraph() {
        assert_eq!(widont("<p>a b c</p>"), "<p>a b&nbsp;c</p>");
    }

    #[test]
    fn widont_each_block_element() {
        assert_eq!(
            widont("<p>a b</p><p>c d</p>"),
            "<p>a&nbsp;b</p><p>c&nbsp;d</p>"
        );
        assert_eq!(
            widont("<h2>Hello big world</h2>\n<li>stay together</li>"),
            "<h2>Hello big&nbsp;world</h2>\n<li>stay&nbsp;together</li>"
        );
    }

    #[test]
    fn widont_keeps_attribute_spaces() {
        assert_eq!(
            widont(r#"<p class="intro lead">tiny example</p>"#),
            r#"<p class="intro lead">tiny&nbsp;example</p>"#
        );
    }

    #[test]
    fn widont_inline_markup_in_last_word() {
        assert_eq!(
            widont("<p>stay <b>together</b></p>"),
            "<p>stay&nbsp;<b>together</b></p>"
        );
    }

    #[test]
    fn widont_nested_blocks_single_replacement() {
        assert_eq!(
            widont("<div><p>a b</p></div>"),
            "<div><p>a&nbsp;b</p></div>"
        );
    }

    #[test]
    fn widont_single_word_block_unchanged() {
        assert_eq!(widont("<p>one</p>"), "<p>one</p>");
    }

    #[test]
    fn widont_uppercase_tags() {
        assert_eq!(widont("<P>a b</P>"), "<P>a&nbsp;b</P>");
    }

    #[test]
    fn widont_plain_branch_with_inline_markup() {
        assert_eq!(
            widont("hello <span>world</span>"),
            "hello&nbsp;<span>world</span>"
        );
    }

    #[test]
    fn pipeline_named_chain() {
        let steps = [Modification::Named("snake"), Modification::Named("slug_to_title")];
        assert_eq!(apply_modifications("FooBar", &steps).unwrap(), "Foo Bar");
    }

    #[test]
    fn pipeline_callable() {
        let steps = [
            Modification::Named("deslugify"),
            Modification::Callable(|s: &str| s.to_uppercase()),
        ];
        assert_eq!(apply_modifications("foo-bar", &steps).unwrap(), "FOO BAR");
    }

    #[test]
    fn pipeline_unknown_transform_errors() {
        let err = apply_modifications("Foo", &[Modification::Named("unknownStep")]).unwrap_err();
        assert_eq!(err, Error::UnknownTransform("unknownStep".to_string()));
        assert_eq!(err.to_string(), "unknown transform `unknownStep`");
    }

    #[test]
    fn pipeline_empty_is_identity() {
        assert_eq!(apply_modifications("as is", &[]).unwrap(), "as is");
    }

    #[test]
    fn width_class_lookup() {
        assert_eq!(tailwind_width_class(25), "w-1/4");
        assert_eq!(tailwind_width_class(33), "w-1/3");
        assert_eq!(tailwind_width_class(50), "w-1/2");
        assert_eq!(tailwind_width_class(66), "w-2/3");
        assert_eq!(tailwind_width_class(75), "w-3/4");
        assert_eq!(tailwind_width_class(100), "w-full");
        assert_eq!(tailwind_width_class(10), "w-full");
    }

    #[test]
    fn bool_str_values() {
        assert_eq!(bool_str(true), "true");
        assert_eq!(bool_str(false), "false");
    }
}
