//! String similarity primitive shared by every comparator

/// Normalized Jaro-Winkler similarity in [0, 1]
///
/// Symmetric, `similarity(x, x) == 1.0`, and an empty string only matches
/// another empty string.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity("Kind of Blue", "Kind of Blue"), 1.0);
    }

    #[test]
    fn test_empty_against_text() {
        assert_eq!(similarity("", "Blue"), 0.0);
        assert_eq!(similarity("Blue", ""), 0.0);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let ab = similarity("Miles Davis", "Miles Davies");
        let ba = similarity("Miles Davies", "Miles Davis");
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.9 && ab < 1.0);
    }
}
