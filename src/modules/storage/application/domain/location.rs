/// Location columns hold either a bucket-relative key or a full URL.
/// These helpers normalize between the two forms at the storage boundary.

fn base(public_base_url: &str) -> &str {
    public_base_url.trim_end_matches('/')
}

/// Normalize a location for persistence: URLs under our public base are
/// stripped back to bucket keys, foreign URLs are kept verbatim, and bare
/// keys lose any leading slash.
pub fn normalize_location(raw: &str, public_base_url: &str) -> String {
    let trimmed = raw.trim();
    let base = base(public_base_url);

    if let Some(rest) = trimmed.strip_prefix(base) {
        return rest.trim_start_matches('/').to_string();
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }

    trimmed.trim_start_matches('/').to_string()
}

/// Expand a stored location for clients: bucket keys become public URLs,
/// full URLs pass through untouched.
pub fn public_url(stored: &str, public_base_url: &str) -> String {
    let trimmed = stored.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }

    format!("{}/{}", base(public_base_url), trimmed.trim_start_matches('/'))
}

/// True when the stored location is a key in our bucket (and can therefore
/// be deleted alongside its row).
pub fn is_bucket_relative(stored: &str) -> bool {
    let trimmed = stored.trim();
    !(trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://"))
}
