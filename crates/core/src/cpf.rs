//! CPF checksum validation and canonicalization.
//!
//! A CPF is the 11-digit Brazilian individual taxpayer identifier. The
//! last two digits are check digits computed with weighted mod-11 sums.
//! Storage and lookup always use the canonical digits-only form.

/// Strips every non-digit character, returning the canonical form.
///
/// No validation is performed; `clean("529.982.247-25")` and
/// `clean("52998224725")` both yield `"52998224725"`.
#[must_use]
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a CPF for display as `###.###.###-##`.
///
/// Presentation only, never authoritative. Input that does not clean to
/// 11 digits is returned in cleaned form unchanged.
#[must_use]
pub fn format(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != 11 {
        return digits;
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Validates a CPF, tolerating punctuation in the input.
///
/// Returns `false` for anything that does not clean to exactly 11
/// digits, for the trivially-invalid repeated-digit sequences
/// (`000.000.000-00` through `999.999.999-99`), and for check-digit
/// mismatches. Never panics on malformed input.
#[must_use]
pub fn validate(raw: &str) -> bool {
    let digits = clean(raw);
    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    // "111.111.111-11" and friends satisfy the checksum but are not valid CPFs.
    if d.iter().all(|&digit| digit == d[0]) {
        return false;
    }

    check_digit(&d[..9], 10) == d[9] && check_digit(&d[..10], 11) == d[10]
}

/// Computes one check digit: weighted sum with weights counting down
/// from `first_weight` to 2, then `11 - (sum mod 11)`, mapping 10 and
/// 11 to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = 11 - (sum % 11);
    if remainder >= 10 { 0 } else { remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("52998224725")]
    #[case("529.982.247-25")]
    #[case("11144477735")]
    #[case("111.444.777-35")]
    fn test_valid_cpf(#[case] cpf: &str) {
        assert!(validate(cpf));
    }

    #[rstest]
    #[case("52998224726")] // wrong second check digit
    #[case("52998224735")] // wrong first check digit
    #[case("5299822472")] // too short
    #[case("529982247250")] // too long
    #[case("")]
    #[case("not-a-cpf")]
    fn test_invalid_cpf(#[case] cpf: &str) {
        assert!(!validate(cpf));
    }

    #[test]
    fn test_repeated_digit_sequences_rejected() {
        for digit in 0..=9 {
            let cpf: String = std::iter::repeat_n(char::from_digit(digit, 10).unwrap(), 11).collect();
            assert!(!validate(&cpf), "CPF {cpf} should be rejected");
        }
    }

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(clean("529.982.247-25"), "52998224725");
        assert_eq!(clean("  529 982 247 25 "), "52998224725");
        assert_eq!(clean("abc"), "");
    }

    #[test]
    fn test_format_display_form() {
        assert_eq!(format("52998224725"), "529.982.247-25");
        assert_eq!(format("529.982.247-25"), "529.982.247-25");
    }

    #[test]
    fn test_format_leaves_short_input_cleaned() {
        assert_eq!(format("1234"), "1234");
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    /// Straight-line reference port of the mod-11 checksum, kept
    /// independent of the production implementation.
    fn reference_validate(cpf: &str) -> bool {
        let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != 11 {
            return false;
        }
        if digits.iter().all(|&d| d == digits[0]) {
            return false;
        }

        let mut sum = 0;
        for (i, d) in digits.iter().take(9).enumerate() {
            sum += d * (10 - u32::try_from(i).unwrap());
        }
        let mut remainder = 11 - (sum % 11);
        if remainder == 10 || remainder == 11 {
            remainder = 0;
        }
        if remainder != digits[9] {
            return false;
        }

        let mut sum = 0;
        for (i, d) in digits.iter().take(10).enumerate() {
            sum += d * (11 - u32::try_from(i).unwrap());
        }
        let mut remainder = 11 - (sum % 11);
        if remainder == 10 || remainder == 11 {
            remainder = 0;
        }
        remainder == digits[10]
    }

    proptest! {
        #[test]
        fn validate_agrees_with_reference(cpf in "[0-9]{11}") {
            prop_assert_eq!(validate(&cpf), reference_validate(&cpf));
        }

        #[test]
        fn repeated_digits_always_rejected(digit in 0u32..=9) {
            let cpf: String = std::iter::repeat_n(
                char::from_digit(digit, 10).unwrap(),
                11,
            )
            .collect();
            prop_assert!(!validate(&cpf));
        }

        #[test]
        fn clean_format_clean_is_identity(cpf in "[0-9]{11}") {
            prop_assert_eq!(clean(&format(&clean(&cpf))), clean(&cpf));
        }

        #[test]
        fn validate_never_panics(raw in ".{0,64}") {
            let _ = validate(&raw);
        }
    }
}
