//! String drills: reversal three ways, last-word length, palindrome check.

// ============================================================================
// Drill 1: Reverse a string
// ============================================================================

/// Reverses a string with the iterator adapters.
pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverses a string by walking the characters back to front and pushing
/// each one — the explicit-loop rendering of the same drill.
pub fn reversed_pushing(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().rev() {
        out.push(c);
    }
    out
}

/// Reverses a string recursively: reverse the tail, then append the head.
/// Quadratic and allocation-happy; kept as the recursion exercise.
pub fn reversed_recursive(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = reversed_recursive(chars.as_str());
            out.push(first);
            out
        }
    }
}

// ============================================================================
// Drill 4: Length of the last word
// ============================================================================

/// Length of the last whitespace-separated word, or 0 when there is none.
///
/// "Hello world" -> 5, "    fly me    to the moon    " -> 4.
pub fn length_of_last_word(s: &str) -> usize {
    s.split_whitespace().last().map_or(0, str::len)
}

// ============================================================================
// Drill 5: Palindrome check in O(1) extra space
// ============================================================================

/// Whether `s` reads the same forwards and backwards. The empty string is a
/// palindrome. Compares from both ends without building a reversed copy.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_variants_agree() {
        let input = "I love Rust";
        assert_eq!(reversed(input), "tsuR evol I");
        assert_eq!(reversed_pushing(input), reversed(input));
        assert_eq!(reversed_recursive(input), reversed(input));
    }

    #[test]
    fn reversing_empty_and_single() {
        assert_eq!(reversed(""), "");
        assert_eq!(reversed_recursive(""), "");
        assert_eq!(reversed("x"), "x");
    }

    #[test]
    fn last_word_lengths() {
        assert_eq!(length_of_last_word("Hello world"), 5);
        assert_eq!(length_of_last_word("    fly me    to the moon    "), 4);
        assert_eq!(length_of_last_word(""), 0);
        assert_eq!(length_of_last_word("   "), 0);
        assert_eq!(length_of_last_word("single"), 6);
    }

    #[test]
    fn palindrome_checks() {
        assert!(!is_palindrome("abc"));
        assert!(!is_palindrome("112233"));
        assert!(is_palindrome("aba"));
        assert!(is_palindrome("112211"));
        assert!(is_palindrome("I love RustsuR evol I"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
    }

    #[test]
    fn even_length_palindrome() {
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("abca"));
    }
}
