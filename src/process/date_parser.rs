use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY/MM/DD HH:MM:SS`, anchored at the start only. Purely lexical.
static RECEIVE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}").expect("static regex"));

/// Does `s` start with something shaped like a PAN-OS receive time?
pub fn looks_like_receive_time(s: &str) -> bool {
    RECEIVE_TIME_RE.is_match(s)
}
