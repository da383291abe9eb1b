//! Declarative field constraints

/// A single validation rule attached to a form field.
///
/// Rules are checked in order on submit; the first failing rule supplies
/// the field's error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must parse as an email address
    Email,
    /// Value must be at least this many characters
    MinLength(usize),
}

impl Constraint {
    /// Check a value against this rule, returning an error message on failure.
    ///
    /// `label` is the field's display label and is interpolated into
    /// length messages ("Password must be at least 8 characters.").
    pub fn check(&self, label: &str, value: &str) -> Option<String> {
        match self {
            Constraint::Email => {
                if is_valid_email(value) {
                    None
                } else {
                    Some("Invalid email address.".to_string())
                }
            }
            Constraint::MinLength(min) => {
                if value.chars().count() >= *min {
                    None
                } else {
                    Some(format!("{label} must be at least {min} characters."))
                }
            }
        }
    }
}

/// Minimal address grammar: non-empty local part, a single separating `@`,
/// a domain with at least one dot and non-empty labels, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut count = 0;
    for label in domain.split('.') {
        if label.is_empty() {
            return false;
        }
        count += 1;
    }
    count >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("u+tag@example.org"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_rejects_empty_domain_labels() {
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@exa..mple.com"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@ex@ample.com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@example.com "));
    }

    #[test]
    fn test_email_constraint_message() {
        let err = Constraint::Email.check("Email Address", "nope");
        assert_eq!(err.as_deref(), Some("Invalid email address."));
        assert!(Constraint::Email
            .check("Email Address", "user@example.com")
            .is_none());
    }

    #[test]
    fn test_min_length_constraint_message() {
        let err = Constraint::MinLength(8).check("Password", "short");
        assert_eq!(
            err.as_deref(),
            Some("Password must be at least 8 characters.")
        );
        assert!(Constraint::MinLength(8).check("Password", "longenough").is_none());
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 6 characters, more than 6 bytes
        assert!(Constraint::MinLength(6).check("Password", "pässwd").is_none());
    }
}
