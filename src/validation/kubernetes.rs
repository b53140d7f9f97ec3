//! Kubernetes object-name and metadata syntax checks

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length of a DNS-1123 label.
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of a DNS-1123 subdomain.
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of the name part of a qualified name.
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

/// Maximum length of a label value.
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;

/// Maximum combined size of all annotation keys and values.
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

lazy_static! {
    static ref DNS1123_LABEL: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid regex");
    static ref DNS1123_SUBDOMAIN: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
            .expect("valid regex");
    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("valid regex");
    static ref LABEL_VALUE: Regex =
        Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").expect("valid regex");
}

/// Validate a DNS-1123 label (namespaces, most names that end up in DNS).
pub fn validate_dns1123_label(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_LABEL_MAX_LENGTH
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        return Err(
            "must consist of lower case alphanumeric characters or '-', and must start and end \
             with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Validate a DNS-1123 subdomain (object names).
pub fn validate_dns1123_subdomain(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Err(
            "must consist of lower case alphanumeric characters, '-' or '.', and must start and \
             end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Validate a qualified name such as `app.kubernetes.io/name` (label and annotation keys).
pub fn validate_qualified_name(value: &str) -> Result<(), String> {
    let (prefix, name) = match value.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    };

    if let Some(prefix) = prefix {
        validate_dns1123_subdomain(prefix).map_err(|e| format!("prefix part {}", e))?;
    }

    if name.is_empty() {
        return Err("name part must not be empty".to_string());
    }
    if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        return Err(format!(
            "name part must be no more than {} characters",
            QUALIFIED_NAME_MAX_LENGTH
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(
            "name part must consist of alphanumeric characters, '-', '_' or '.', and must start \
             and end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Validate a label value. Empty values are allowed.
pub fn validate_label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            LABEL_VALUE_MAX_LENGTH
        ));
    }
    if !LABEL_VALUE.is_match(value) {
        return Err(
            "must be empty or consist of alphanumeric characters, '-', '_' or '.', and must start \
             and end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Validate a set of annotations: qualified-name keys and a bounded total size.
pub fn validate_annotations<'a>(
    annotations: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Vec<String> {
    let mut errors = Vec::new();
    let mut total = 0usize;

    for (key, value) in annotations {
        total += key.len() + value.len();
        if let Err(e) = validate_qualified_name(key) {
            errors.push(format!("key '{}': {}", key, e));
        }
    }

    if total > TOTAL_ANNOTATION_SIZE_LIMIT {
        errors.push(format!(
            "total size of annotations must be no more than {} bytes, got {}",
            TOTAL_ANNOTATION_SIZE_LIMIT, total
        ));
    }

    errors
}
