//! CSV header normalization.

/// Strips a UTF-8 byte-order mark from the first header cell.
///
/// Header names are otherwise kept verbatim so the backup reproduces them.
pub(super) fn normalize_header(index: usize, value: &str) -> String {
    if index == 0 {
        value.trim_start_matches('\u{feff}').to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header(0, "\u{feff}Drug Name"), "Drug Name");
    }

    #[test]
    fn test_normalize_header_keeps_spacing() {
        assert_eq!(normalize_header(1, " ATC Code"), " ATC Code");
    }
}
