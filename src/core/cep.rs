/// Number of digits in a Brazilian postal code
pub const CEP_LENGTH: usize = 8;

/// Check that a postal code is exactly eight ASCII digits
///
/// No trimming or normalization is applied: `"01310-100"`, `" 1310100"`
/// and `"0131010a"` are all rejected.
#[inline]
pub fn is_valid_cep(cep: &str) -> bool {
    cep.len() == CEP_LENGTH && cep.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ceps() {
        assert!(is_valid_cep("29902555"));
        assert!(is_valid_cep("01310100"));
        assert!(is_valid_cep("00000000"));
        assert!(is_valid_cep("99999999"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_cep(""));
        assert!(!is_valid_cep("123"));
        assert!(!is_valid_cep("1234567"));
        assert!(!is_valid_cep("123456789"));
    }

    #[test]
    fn test_non_digit_characters() {
        assert!(!is_valid_cep("1234567a"));
        assert!(!is_valid_cep("12345-67"));
        assert!(!is_valid_cep("        "));
        assert!(!is_valid_cep("123 5678"));
        assert!(!is_valid_cep(" 1234567"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_valid_cep("١٢٣٤٥٦٧٨"));
        // Eight chars but more than eight bytes
        assert!(!is_valid_cep("1234567é"));
    }

    #[test]
    fn test_matches_definition_for_generated_inputs() {
        let alphabet = ['0', '5', '9', 'a', '-', ' '];
        for len in 0..=9usize {
            for seed in 0..64usize {
                let s: String = (0..len)
                    .map(|i| alphabet[(seed + i * 7) % alphabet.len()])
                    .collect();
                let expected = s.chars().count() == 8 && s.chars().all(|c| c.is_ascii_digit());
                assert_eq!(is_valid_cep(&s), expected, "mismatch for {:?}", s);
            }
        }
    }
}
