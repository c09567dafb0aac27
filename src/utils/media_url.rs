use url::Url;

const API_PATH_SEGMENT: &str = "/api";

/// Turns a media reference returned by the API into a URL the browser can
/// load directly. Relative references resolve against the site root, not
/// against the API namespace.
///
/// Returns an empty string when there is no reference, which callers
/// render as "no image".
pub fn resolve_media_url(api_base_url: &Url, reference: Option<&str>) -> String {
    let Some(reference) = reference.filter(|reference| !reference.trim().is_empty()) else {
        return String::new();
    };

    if is_absolute(reference) {
        return reference.to_string();
    }

    let site_root = site_root(api_base_url);
    if reference.starts_with('/') {
        format!("{site_root}{reference}")
    } else {
        format!("{site_root}/{reference}")
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("//") || Url::parse(reference).is_ok()
}

fn site_root(api_base_url: &Url) -> &str {
    let base = api_base_url.as_str().trim_end_matches('/');
    base.strip_suffix(API_PATH_SEGMENT).unwrap_or(base)
}
