use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::Profile;

/// A single problem found in a profile document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub reason: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Checks a profile before it is served. All issues are collected, not just the first.
///
/// Rules:
/// - name and role are non-blank and free of control characters
/// - email has exactly one `@` with text on both sides
/// - job ids are unique (they key the experience timeline)
/// - social links, when set, are absolute http(s) URLs
pub fn validate_profile(profile: &Profile) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let personal = &profile.personal;

    if personal.name.trim().is_empty() {
        issues.push(ValidationIssue::new("personal.name", "must not be blank"));
    }
    if personal.role.trim().is_empty() {
        issues.push(ValidationIssue::new("personal.role", "must not be blank"));
    }
    for (field, value) in [("personal.name", &personal.name), ("personal.role", &personal.role)] {
        if value.chars().any(char::is_control) {
            issues.push(ValidationIssue::new(
                field,
                "must not contain control characters",
            ));
        }
    }
    if !is_plausible_email(&personal.email) {
        issues.push(ValidationIssue::new(
            "personal.email",
            format!("'{}' is not an email address", personal.email),
        ));
    }

    for (field, link) in [
        ("personal.github", &personal.github),
        ("personal.linkedin", &personal.linkedin),
    ] {
        if !link.is_empty() && !is_http_url(link) {
            issues.push(ValidationIssue::new(
                field,
                format!("'{link}' must start with http:// or https://"),
            ));
        }
    }

    let mut seen = HashSet::new();
    for job in &profile.experience {
        if !seen.insert(job.id) {
            issues.push(ValidationIssue::new(
                "experience",
                format!("duplicate job id {}", job.id),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.trim().is_empty() && !domain.trim().is_empty(),
        _ => false,
    }
}

fn is_http_url(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
