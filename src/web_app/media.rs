// web_app/media.rs - Media URL resolution
//
// Product images and avatars are stored either as full CDN URLs or as
// paths relative to the media root. The client always receives a URL
// it can put straight into an <img src>.

/// Turn a stored media reference into a URL
///
/// Values already starting with `http` pass through untouched. Relative
/// paths are joined to `base` when one is configured, otherwise they are
/// returned as stored.
pub fn absolute_url(raw: &str, base: Option<&str>) -> String {
    if raw.starts_with("http") {
        return raw.to_string();
    }

    match base {
        Some(base) if !base.is_empty() => {
            format!("{}/{}", base.trim_end_matches('/'), raw.trim_start_matches('/'))
        }
        _ => raw.to_string(),
    }
}

/// Like [`absolute_url`], treating a missing or empty reference as no image
pub fn resolve(raw: Option<&str>, base: Option<&str>) -> Option<String> {
    raw.filter(|r| !r.trim().is_empty())
        .map(|r| absolute_url(r, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdn_url_passes_through() {
        let url = "https://res.cloudinary.com/demo/image/upload/products/mug.jpg";
        assert_eq!(absolute_url(url, Some("http://localhost:3000/media")), url);
        assert_eq!(absolute_url("http://cdn.test/a.png", None), "http://cdn.test/a.png");
    }

    #[test]
    fn test_relative_path_joined_to_base() {
        let cases = [
            ("products/mug.jpg", "http://shop.test/media", "http://shop.test/media/products/mug.jpg"),
            ("/products/mug.jpg", "http://shop.test/media/", "http://shop.test/media/products/mug.jpg"),
            ("products/mug.jpg", "/media", "/media/products/mug.jpg"),
        ];
        for (raw, base, expected) in cases {
            assert_eq!(absolute_url(raw, Some(base)), expected, "raw={} base={}", raw, base);
        }
    }

    #[test]
    fn test_relative_path_without_base() {
        assert_eq!(absolute_url("products/mug.jpg", None), "products/mug.jpg");
        assert_eq!(absolute_url("products/mug.jpg", Some("")), "products/mug.jpg");
    }

    #[test]
    fn test_resolve_empty_is_none() {
        assert_eq!(resolve(None, Some("/media")), None);
        assert_eq!(resolve(Some(""), Some("/media")), None);
        assert_eq!(resolve(Some("  "), None), None);
        assert_eq!(resolve(Some("a.png"), Some("/media")), Some("/media/a.png".to_string()));
    }
}
