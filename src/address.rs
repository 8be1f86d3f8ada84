//! Address and host name syntax checks.
//!
//! These are advisory: records read from a hosts file keep whatever address
//! text they had. Callers run [`is_valid_address`] before committing a new
//! record and report a failure back to the user.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Four dot-separated decimal octets, each 0-255, nothing around them.
///
/// Octets with a leading zero (`"01"`) are rejected.
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// Full or `::`-compressed IPv6 literal, optionally ending in a dotted IPv4
/// quad in the last 32 bits. Zone ids (`%eth0`) and brackets are rejected.
pub fn is_valid_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Either an IPv4 or an IPv6 literal.
pub fn is_valid_address(s: &str) -> bool {
    is_valid_ipv4(s) || is_valid_ipv6(s)
}

/// Address family name for display, or `None` if `s` is not an address.
pub fn address_family(s: &str) -> Option<&'static str> {
    if is_valid_ipv4(s) {
        Some("IPv4")
    } else if is_valid_ipv6(s) {
        Some("IPv6")
    } else {
        None
    }
}

/// Host names as they may appear in a hosts file: dot-separated labels of
/// ASCII letters, digits and hyphens, no label starting or ending with a
/// hyphen, at most 253 characters overall and 63 per label.
pub fn is_valid_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
