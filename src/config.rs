// Site assets live under the repo root in development but behind a base
// path on the production host.

#[cfg(debug_assertions)]
pub fn asset_path(path: &str) -> String {
    normalize(path)
}

#[cfg(not(debug_assertions))]
pub fn asset_path(path: &str) -> String {
    format!("/terravita{}", normalize(path))
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_leading_slash() {
        assert_eq!(normalize("/videos/hero-loop.mp4"), "/videos/hero-loop.mp4");
    }

    #[test]
    fn adds_missing_leading_slash() {
        assert_eq!(normalize("images/logo.png"), "/images/logo.png");
    }

    #[test]
    fn dev_paths_have_no_base_prefix() {
        // Tests run with debug_assertions, so asset_path is the dev variant.
        assert_eq!(asset_path("fonts/Halcyon.woff2"), "/fonts/Halcyon.woff2");
    }
}
