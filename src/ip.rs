//! IPv4 and IPv6 literal recognizers.
//!
//! Standalone parsers instead of `std::net`: the extractor must accept
//! the internationalized label separators in dotted-decimal literals
//! (and in the embedded IPv4 tail of an IPv6 literal), which the standard
//! library parsers reject.

use crate::labels::is_label_separator;

/// Check if the string is a dotted-decimal IPv4 literal.
///
/// Exactly four separator-delimited octets in `0-255`, decimal digits
/// only, no leading zeros except for the octet `"0"` itself.
pub fn is_ipv4(host: &str) -> bool {
    let mut octets = 0u32;
    for octet in host.split(is_label_separator) {
        octets += 1;
        if octets > 4 || !is_octet(octet) {
            return false;
        }
    }
    octets == 4
}

fn is_octet(s: &str) -> bool {
    if s.is_empty() || s.len() > 3 {
        return false;
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if s.len() > 1 && s.starts_with('0') {
        return false;
    }
    // At most three digits, fits easily
    s.parse::<u16>().is_ok_and(|v| v <= 255)
}

/// Check if the string is an IPv6 literal (RFC 4291/5952 colon-hex).
///
/// At most one `::` ellipsis; groups must account for exactly 128 bits,
/// with an optional embedded IPv4 literal in the last 32 bits.
pub fn is_ipv6(addr: &str) -> bool {
    if addr.is_empty() {
        return false;
    }
    match addr.find("::") {
        Some(idx) => {
            let head = &addr[..idx];
            let tail = &addr[idx + 2..];
            if tail.contains("::") {
                return false;
            }
            let head_groups = match count_groups(head, false) {
                Some(n) => n,
                None => return false,
            };
            let tail_groups = match count_groups(tail, true) {
                Some(n) => n,
                None => return false,
            };
            // The ellipsis expands to at least one zero group
            head_groups + tail_groups <= 7
        }
        None => count_groups(addr, true) == Some(8),
    }
}

/// Count 16-bit groups in a colon-separated run, or None if malformed.
/// An embedded IPv4 literal is only legal as the final piece and counts
/// as two groups.
fn count_groups(part: &str, allow_v4_tail: bool) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }
    let mut groups = 0usize;
    let mut pieces = part.split(':').peekable();
    while let Some(piece) = pieces.next() {
        let last = pieces.peek().is_none();
        if piece.is_empty() {
            return None;
        }
        if last && allow_v4_tail && piece.chars().any(is_label_separator) {
            if !is_ipv4(piece) {
                return None;
            }
            groups += 2;
        } else {
            if piece.len() > 4 || !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            groups += 1;
        }
    }
    Some(groups)
}
