//! Locating IPv4 addresses in free text

use once_cell::sync::Lazy;
use regex::Regex;

/// IPv4 address regex
/// Matches standard IPv4 addresses like 192.168.1.1
pub static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)"
    )
    .expect("Failed to compile IPv4 regex")
});

/// Find all IPv4 addresses in text with their byte positions
pub fn find_ipv4(text: &str) -> Vec<(usize, usize, &str)> {
    IPV4_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_regex() {
        let text = "Server IP: 192.168.1.1 and 8.8.8.8";
        let matches = find_ipv4(text);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0], (11, 22, "192.168.1.1"));
        assert_eq!(matches[1].2, "8.8.8.8");
    }

    #[test]
    fn test_invalid_ipv4() {
        let text = "Invalid: 999.999.999.999";
        let matches = find_ipv4(text);
        assert_eq!(matches.len(), 0);
    }

    #[test]
    fn test_ipv6_text_has_no_ipv4() {
        assert!(find_ipv4("2001:db8::1 fe80::1").is_empty());
    }
}
