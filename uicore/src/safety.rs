//! Keep a bad frame or an odd file name from taking the window down.

use tracing::error;

/// Nearest char boundary at or before `byte_pos`.
pub fn snap_to_char_boundary(s: &str, byte_pos: usize) -> usize {
    if byte_pos >= s.len() {
        return s.len();
    }
    // a UTF-8 char is at most 4 bytes, so this finds one within 3 steps back
    (0..=byte_pos).rev().find(|&p| s.is_char_boundary(p)).unwrap_or(0)
}

/// Shorten `s` to at most `max_bytes`, appending "..." when cut.
/// Never splits a character.
pub fn truncate_display(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let cut = snap_to_char_boundary(s, max_bytes.saturating_sub(3));
    format!("{}...", &s[..cut])
}

/// Run `f`, returning `fallback` if it panics. Used to isolate one frame's
/// rendering so a single bad entry can't crash the browser.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(_) => {
            error!("caught panic in frame, recovered");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_ascii() {
        let s = "hello";
        assert_eq!(snap_to_char_boundary(s, 0), 0);
        assert_eq!(snap_to_char_boundary(s, 3), 3);
        assert_eq!(snap_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn test_snap_multibyte() {
        // 'é' is 2 bytes, '😀' is 4
        let s = "é😀";
        assert_eq!(snap_to_char_boundary(s, 1), 0);
        assert_eq!(snap_to_char_boundary(s, 2), 2);
        assert_eq!(snap_to_char_boundary(s, 4), 2);
        assert_eq!(snap_to_char_boundary(s, 6), 6);
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short.txt", 20), "short.txt");
        assert_eq!(truncate_display("a_rather_long_name.txt", 10), "a_rathe...");
        // cut lands inside '中' and snaps back
        assert_eq!(truncate_display("ab中文中文", 7), "ab...");
    }

    #[test]
    fn test_catch_or() {
        assert_eq!(catch_or(0, || 7), 7);
        assert_eq!(catch_or(0, || -> i32 { panic!("boom") }), 0);
    }
}
