use vitrine_types::api::{FieldError, SubmitFormRequest};
use vitrine_types::models::NewInquiry;

/// Validate and normalize a raw form submission.
///
/// Every rule is checked before reporting, so a caller with a missing
/// name and a bad email sees both problems in one response.
pub fn validate_submission(req: &SubmitFormRequest) -> Result<NewInquiry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = req.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        errors.push(FieldError::new("name", "Name is required."));
    }

    let email = req.email.as_deref().unwrap_or("").trim().to_string();
    if !is_valid_email(&email) {
        errors.push(FieldError::new("email", "A valid email is required."));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewInquiry {
        name,
        email,
        phone: normalize_optional(req.phone.as_deref()),
        user_message: normalize_optional(req.user_message.as_deref()),
        budget: normalize_optional(req.budget.as_deref()),
        employment: normalize_optional(req.employment.as_deref()),
    })
}

/// Optional free-text fields pass through untouched when absent,
/// otherwise they are trimmed and escaped for the dashboard.
fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.map(|s| escape_html(s.trim()))
}

/// Accepts local-part "@" domain, where the domain contains at least
/// one interior dot. Deliberately a shape check, not RFC 5321.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Escape characters unsafe for HTML rendering, matching what the admin
/// dashboard expects for free-text fields.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
