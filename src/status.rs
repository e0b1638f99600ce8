//! Process exit status
//!
//! The status is a fold over emission codes where the first non-zero code
//! wins and is never replaced, whatever comes after it.

/// Accumulated exit status of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Keeps the current status once it is non-zero, otherwise takes `code`
    pub fn combine(self, code: i32) -> Self {
        if self.0 != 0 { self } else { ExitStatus(code) }
    }

    /// Reduces a sequence of codes in order
    pub fn fold(codes: impl IntoIterator<Item = i32>) -> Self {
        codes.into_iter().fold(Self::SUCCESS, Self::combine)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_success() {
        assert_eq!(ExitStatus::fold([]), ExitStatus::SUCCESS);
        assert!(ExitStatus::fold([0, 0, 0]).is_success());
    }

    #[test]
    fn test_first_nonzero_wins() {
        assert_eq!(ExitStatus::fold([1, 0, 1]).code(), 1);
        assert_eq!(ExitStatus::fold([0, 3, 1, 7]).code(), 3);
        assert_eq!(ExitStatus::fold([0, 0, 2]).code(), 2);
    }

    #[test]
    fn test_combine_is_not_an_accumulation() {
        let status = ExitStatus::SUCCESS.combine(1).combine(1).combine(1);
        assert_eq!(status.code(), 1);
        assert_eq!(ExitStatus::SUCCESS.combine(0).code(), 0);
    }
}
