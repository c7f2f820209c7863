use std::sync::LazyLock;

use regex::Regex;

const REPLACEMENT: &str = "!";
const MAX_LENGTH: usize = 100;
const FALLBACK_NAME: &str = "untitled";

// Characters no common filesystem accepts, plus C0/C1 control characters
static RESERVED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F\x7F-\x9F]"#).unwrap());
static LEADING_DOTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.+").unwrap());
static REPEATED_REPLACEMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").unwrap());
static WINDOWS_DEVICE_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(con|prn|aux|nul|com[0-9]|lpt[0-9])$").unwrap());

/// Make `title` safe to use as a file name.
///
/// Characters that are illegal in file names become `!`, then spaces become
/// `-`, `&` becomes `n`, and commas, apostrophes and `#` are dropped. The
/// rules are reapplied until nothing changes, so the result is stable under a
/// second pass.
pub fn sanitize_title(title: &str) -> String {
    let mut name = title.to_string();
    // Converges within a couple of passes; the bound only guards the loop.
    for _ in 0..8 {
        let next = sanitize_once(&name);
        if next == name {
            break;
        }
        name = next;
    }

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

fn sanitize_once(name: &str) -> String {
    let mut name = RESERVED_CHARS.replace_all(name, REPLACEMENT).into_owned();
    name = LEADING_DOTS.replace(&name, REPLACEMENT).into_owned();
    name = REPEATED_REPLACEMENT
        .replace_all(&name, REPLACEMENT)
        .into_owned();
    if name.chars().count() > 1 {
        name = name
            .strip_prefix(REPLACEMENT)
            .unwrap_or(&name)
            .to_string();
        name = name
            .strip_suffix(REPLACEMENT)
            .unwrap_or(&name)
            .to_string();
    }
    if WINDOWS_DEVICE_NAMES.is_match(&name) {
        name.push_str(REPLACEMENT);
    }
    name = name.chars().take(MAX_LENGTH).collect();

    name.replace(' ', "-")
        .replace(',', "")
        .replace('\'', "")
        .replace('&', "n")
        .replace('#', "")
}
