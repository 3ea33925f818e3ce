/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate a date field: required, `YYYY-MM-DD` with an optional ` HH:MM:SS`
/// time part.
pub fn validate_date(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    let date_part = trimmed.split(' ').next().unwrap_or("");
    let time_part = trimmed.splitn(2, ' ').nth(1);
    let date_ok = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").is_ok();
    let time_ok = match time_part {
        None => true,
        Some(t) => chrono::NaiveTime::parse_from_str(t, "%H:%M:%S").is_ok(),
    };
    if !date_ok || !time_ok {
        return Some(format!("{field_name} must be a valid date (YYYY-MM-DD)"));
    }
    None
}

/// Validate a URL field: required, must be http or https.
pub fn validate_url(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Some(format!("{field_name} must start with http:// or https://"));
    }
    None
}
