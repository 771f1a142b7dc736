//! Sensitive-data masking for displayed list results.
//!
//! Only ASCII letters and digits are maskable. Every other character
//! (spaces, punctuation, accented letters) keeps its position untouched.
//! How much of the maskable run stays visible depends on its length:
//!
//! | maskable chars | kept prefix | kept suffix |
//! |----------------|-------------|-------------|
//! | 0..=4          | 0           | 0           |
//! | 5..=6          | 2           | 2           |
//! | 7..=9          | 3           | 2           |
//! | 10..           | 5           | 2           |

/// Default redaction character.
pub const REDACTION_CHAR: char = 'X';

/// How many maskable characters stay visible at each end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskPolicy {
    pub prefix: usize,
    pub suffix: usize,
}

impl MaskPolicy {
    /// Policy for a string with `len` maskable characters.
    pub fn for_len(len: usize) -> Self {
        let (prefix, suffix) = match len {
            0..=4 => (0, 0),
            5..=6 => (2, 2),
            7..=9 => (3, 2),
            _ => (5, 2),
        };
        Self { prefix, suffix }
    }

    /// Number of maskable characters replaced for a run of `len`.
    pub fn masked_len(&self, len: usize) -> usize {
        len.saturating_sub(self.prefix + self.suffix)
    }
}

#[inline(always)]
fn is_maskable(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Mask `text` with the default redaction character.
pub fn mask(text: &str) -> String {
    mask_with(text, REDACTION_CHAR)
}

/// Mask `text`, replacing hidden characters with `redaction`.
///
/// The output has the same number of characters as the input, in the same
/// order. A string without maskable characters comes back unchanged.
pub fn mask_with(text: &str, redaction: char) -> String {
    let len = text.chars().filter(|&c| is_maskable(c)).count();
    if len == 0 {
        return text.to_owned();
    }

    let policy = MaskPolicy::for_len(len);
    let hidden_end = len - policy.suffix;

    let mut out = String::with_capacity(text.len());
    let mut seen = 0;
    for c in text.chars() {
        if !is_maskable(c) {
            out.push(c);
            continue;
        }
        if seen >= policy.prefix && seen < hidden_end {
            out.push(redaction);
        } else {
            out.push(c);
        }
        seen += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_fully_masked() {
        assert_eq!(mask("AB"), "XX");
        assert_eq!(mask("A"), "X");
        assert_eq!(mask("ABCD"), "XXXX");
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(mask("ABCDE"), "ABXDE");
        assert_eq!(mask("ABCDEF"), "ABXXEF");
        assert_eq!(mask("ABCDEFG"), "ABCXXFG");
        assert_eq!(mask("ABCDEFGH"), "ABCXXXGH");
        assert_eq!(mask("ABCDEFGHI"), "ABCXXXXHI");
        assert_eq!(mask("ABCDEFGHIJ"), "ABCDEXXXIJ");
        assert_eq!(mask("ABCDEFGHIJK"), "ABCDEXXXXJK");
    }

    #[test]
    fn test_passthrough_positions_kept() {
        assert_eq!(mask("AB-CD"), "XX-XX");
        assert_eq!(mask("a b"), "X X");
    }

    #[test]
    fn test_cpf_like_value() {
        // 11 digits: keep 5 + 2
        assert_eq!(mask("123.456.789-09"), "123.45X.XXX-09");
    }

    #[test]
    fn test_email_like_value() {
        // "joao.silva@mail.com" has 16 maskable chars
        assert_eq!(mask("joao.silva@mail.com"), "joao.sXXXX@XXXX.Xom");
    }

    #[test]
    fn test_no_maskable_is_noop() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("--- !!"), "--- !!");
    }

    #[test]
    fn test_non_ascii_letters_pass_through() {
        // Only the trailing 'o' is maskable
        assert_eq!(mask("ção"), "çãX");
    }

    #[test]
    fn test_char_count_preserved() {
        for text in ["Maria José", "a-b-c-d-e-f", "R$ 1.250,00", "x"] {
            assert_eq!(mask(text).chars().count(), text.chars().count());
        }
    }

    #[test]
    fn test_custom_redaction_char() {
        assert_eq!(mask_with("ABCDE", '*'), "AB*DE");
    }

    #[test]
    fn test_policy_masked_len() {
        assert_eq!(MaskPolicy::for_len(4).masked_len(4), 4);
        assert_eq!(MaskPolicy::for_len(5).masked_len(5), 1);
        assert_eq!(MaskPolicy::for_len(8).masked_len(8), 3);
        assert_eq!(MaskPolicy::for_len(11).masked_len(11), 4);
    }
}
