//! Cache busting for model URLs.

/// Query parameter carrying the cache-busting stamp.
pub const CACHE_BUST_PARAM: &str = "v";

/// Append `v=<stamp>` to `src`, replacing an existing `v` parameter and
/// keeping any other query parameters and the fragment in place.
///
/// Example: `"assets/a.glb?lod=1#top"` with stamp 42 ->
/// `"assets/a.glb?lod=1&v=42#top"`
pub fn cache_busted(src: &str, stamp: i64) -> String {
    let (rest, fragment) = match src.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (src, None),
    };
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut pairs: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(CACHE_BUST_PARAM))
        .collect();
    let stamp_pair = format!("{}={}", CACHE_BUST_PARAM, stamp);
    pairs.push(&stamp_pair);

    let mut url = format!("{}?{}", path, pairs.join("&"));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(cache_busted("assets/a.glb", 1700), "assets/a.glb?v=1700");
    }

    #[test]
    fn test_keeps_other_params_and_fragment() {
        assert_eq!(
            cache_busted("assets/a.glb?lod=1#top", 42),
            "assets/a.glb?lod=1&v=42#top"
        );
    }

    #[test]
    fn test_replaces_previous_stamp() {
        assert_eq!(
            cache_busted("/m/b.glb?v=1&lod=2", 9),
            "/m/b.glb?lod=2&v=9"
        );
    }

    #[test]
    fn test_does_not_touch_similar_names() {
        assert_eq!(cache_busted("b.glb?version=3", 5), "b.glb?version=3&v=5");
    }
}
