//! Last-communicated report used for deduplication.

/// What the bot said (or would say) about the latest poll cycle.
///
/// Two reports are equal only when both the homework name and the message
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Homework name last seen in a response
    pub name: Option<String>,

    /// Verdict, "no change" text or error description
    pub message: String,
}

impl Report {
    pub fn new(name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_both_fields() {
        let a = Report::new(Some("hw1".into()), "approved");
        assert_eq!(a, Report::new(Some("hw1".into()), "approved"));
        assert_ne!(a, Report::new(Some("hw2".into()), "approved"));
        assert_ne!(a, Report::new(Some("hw1".into()), "rejected"));
        assert_ne!(a, Report::new(None, "approved"));
    }
}
