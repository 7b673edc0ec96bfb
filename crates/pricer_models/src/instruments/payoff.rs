//! Payoff type definitions.

use std::fmt;

/// Type of option payoff.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::ALL, [PayoffType::Call, PayoffType::Put]);
/// assert_eq!(PayoffType::Put.label(), "Put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Both payoff types, call first.
    pub const ALL: [PayoffType; 2] = [PayoffType::Call, PayoffType::Put];

    /// Display label ("Call" / "Put").
    pub fn label(&self) -> &'static str {
        match self {
            PayoffType::Call => "Call",
            PayoffType::Put => "Put",
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(PayoffType::ALL[0], PayoffType::Call);
        assert_eq!(PayoffType::ALL[1], PayoffType::Put);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PayoffType::Call.label(), "Call");
        assert_eq!(PayoffType::Put.label(), "Put");
    }

    #[test]
    fn test_display() {
        assert_eq!(PayoffType::Put.to_string(), "Put");
    }
}
