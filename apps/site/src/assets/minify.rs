//! Stylesheet minifier. Regex passes, applied in order:
//! 1. strip `/* ... */` comments
//! 2. drop whitespace around `:` `;` `{` `}`
//! 3. drop line breaks
//! 4. collapse whitespace runs to one space
//! 5. drop the last `;` before `}`

use std::sync::LazyLock;

use regex::Regex;

static COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("comment pattern is valid"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([:;{}])\s*").expect("punctuation pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

pub fn minify_css(css: &str) -> String {
    let css = COMMENTS.replace_all(css, "");
    let css = PUNCTUATION.replace_all(&css, "$1");
    let css = css.replace('\n', "").replace('\r', "");
    let css = WHITESPACE.replace_all(&css, " ");
    css.replace(";}", "}")
}
