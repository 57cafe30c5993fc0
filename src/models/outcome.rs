use std::path::PathBuf;

/// Result of a successful optimizer run
///
/// Sizes are `None` when the file could not be stat'ed at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub target: PathBuf,
    pub original_size: Option<u64>,
    pub optimized_size: Option<u64>,
}

impl Outcome {
    /// Bytes saved by optimization. Negative when the file grew.
    pub fn savings(&self) -> Option<i64> {
        let before = self.original_size?;
        let after = self.optimized_size?;
        Some(before as i64 - after as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(original_size: Option<u64>, optimized_size: Option<u64>) -> Outcome {
        Outcome {
            target: PathBuf::from("a.png"),
            original_size,
            optimized_size,
        }
    }

    #[test]
    fn test_savings() {
        assert_eq!(outcome(Some(2048), Some(1024)).savings(), Some(1024));
        assert_eq!(outcome(Some(100), Some(100)).savings(), Some(0));
    }

    #[test]
    fn test_growth_is_negative() {
        assert_eq!(outcome(Some(100), Some(150)).savings(), Some(-50));
    }

    #[test]
    fn test_unknown_size_has_no_savings() {
        assert_eq!(outcome(Some(100), None).savings(), None);
        assert_eq!(outcome(None, Some(100)).savings(), None);
    }
}
