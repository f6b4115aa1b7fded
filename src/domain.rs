use url::Url;

/// Network-location portion of `url`: the host, plus `:port` when the URL
/// names a non-default port. Anything that does not parse to a host lands in
/// the empty-string bucket.
///
/// Keys are normalised by the URL parser: hosts are lowercased, userinfo is
/// dropped and a port equal to the scheme default is omitted. Chromium stores
/// history URLs in this canonical form already, so real history data keys the
/// same as the raw netloc would.
pub fn extract_host(url: &str) -> String {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_network_location() {
        assert_eq!(extract_host("https://github.com/a?tab=repos#top"), "github.com");
        assert_eq!(extract_host("http://www.google.com/search?q=rust"), "www.google.com");
        assert_eq!(extract_host("http://localhost:8080/admin"), "localhost:8080");
        assert_eq!(extract_host("https://example.org:443/"), "example.org");
    }

    #[test]
    fn keys_are_normalised() {
        assert_eq!(extract_host("https://GitHub.com/a"), "github.com");
        assert_eq!(extract_host("https://user:pw@github.com/a"), "github.com");
        assert_eq!(extract_host("https://github.com:443/a"), "github.com");
        assert_eq!(extract_host("http://github.com:443/a"), "github.com:443");
    }

    #[test]
    fn malformed_urls_map_to_empty_host() {
        assert_eq!(extract_host("not a url"), "");
        assert_eq!(extract_host(""), "");
        assert_eq!(extract_host("file:///home/user/notes.txt"), "");
        assert_eq!(extract_host("data:text/plain,hello"), "");
    }
}
