// src/services/identifier.rs
use std::sync::LazyLock;

use regex::Regex;

// Constant patterns; `Regex::new` only fails on invalid syntax.

static EMPLOYEE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bE[0-9]{3,}\b").expect("employee id pattern is valid"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Picks an employee identifier out of free text.
///
/// An `E<digits>` token wins over an email address. Employee ids come back
/// uppercased, emails lowercased. Returns `None` when neither is present.
pub fn extract_employee_id(text: &str) -> Option<String> {
    if let Some(m) = EMPLOYEE_ID.find(text) {
        return Some(m.as_str().to_uppercase());
    }
    EMAIL.find(text).map(|m| m.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_is_uppercased() {
        assert_eq!(extract_employee_id("my id is e001").as_deref(), Some("E001"));
        assert_eq!(extract_employee_id("E12345 here").as_deref(), Some("E12345"));
    }

    #[test]
    fn email_is_lowercased() {
        assert_eq!(
            extract_employee_id("contact me at Jane.Doe@example.com").as_deref(),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn employee_id_takes_precedence_over_email() {
        assert_eq!(
            extract_employee_id("bob@corp.io, id e042").as_deref(),
            Some("E042")
        );
    }

    #[test]
    fn short_or_embedded_ids_do_not_match() {
        assert_eq!(extract_employee_id("hello there"), None);
        assert_eq!(extract_employee_id("room E12"), None);
        assert_eq!(extract_employee_id("codeE001x"), None);
    }
}
