//! Active-section resolution for the header nav.
//!
//! The header samples each section's bounding box on every scroll event and
//! asks this module which nav target should be highlighted. Keeping the
//! decision separate from the DOM reads lets it run under plain `cargo test`.

/// Vertical line, in px from the viewport top, a section must straddle to be
/// considered in view. Sits just below the fixed header.
pub const PROBE_LINE_PX: f64 = 150.0;

/// Below this scroll offset the page counts as "at the top" and the first nav
/// target wins even if no section straddles the probe line.
pub const TOP_REGION_PX: f64 = 100.0;

/// A nav target's section geometry, in viewport coordinates.
pub struct SectionProbe<'a> {
    pub href: &'a str,
    pub top: f64,
    pub bottom: f64,
}

impl<'a> SectionProbe<'a> {
    fn straddles_probe_line(&self) -> bool {
        self.top <= PROBE_LINE_PX && self.bottom >= PROBE_LINE_PX
    }
}

/// Picks the active nav target for the current scroll position.
///
/// The first probe (declaration order) straddling the probe line wins. With no
/// match, the first target wins while the page is near the top; otherwise
/// `None` is returned and the caller keeps its previous selection.
pub fn resolve_active<'a>(probes: &[SectionProbe<'a>], scroll_y: f64) -> Option<&'a str> {
    if let Some(probe) = probes.iter().find(|p| p.straddles_probe_line()) {
        return Some(probe.href);
    }
    if scroll_y < TOP_REGION_PX {
        return probes.first().map(|p| p.href);
    }
    None
}

/// Maps a location hash ("#brands") to a registered nav target, if any.
pub fn match_hash<'a>(hash: &str, hrefs: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    if hash.is_empty() {
        return None;
    }
    hrefs.into_iter().find(|href| *href == hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(href: &str, top: f64, bottom: f64) -> SectionProbe<'_> {
        SectionProbe { href, top, bottom }
    }

    #[test]
    fn section_straddling_probe_line_is_active() {
        let probes = [probe("#home", -400.0, 120.0), probe("#about", 120.0, 900.0)];
        assert_eq!(resolve_active(&probes, 600.0), Some("#about"));
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // Adjacent sections can both straddle the line for a frame; the
        // earlier one must win so exactly one target is published.
        let probes = [probe("#about", 100.0, 800.0), probe("#brands", 140.0, 1200.0)];
        assert_eq!(resolve_active(&probes, 600.0), Some("#about"));
    }

    #[test]
    fn top_of_page_falls_back_to_first_target() {
        let probes = [probe("#home", 200.0, 1000.0), probe("#about", 1000.0, 1800.0)];
        assert_eq!(resolve_active(&probes, 0.0), Some("#home"));
    }

    #[test]
    fn no_match_away_from_top_keeps_previous_selection() {
        // Between sections (e.g. inside a tall gap) nothing straddles the
        // line; the caller should not change its highlight.
        let probes = [probe("#home", -900.0, -200.0), probe("#about", 400.0, 1200.0)];
        assert_eq!(resolve_active(&probes, 500.0), None);
    }

    #[test]
    fn empty_probe_list_at_top_yields_nothing() {
        assert_eq!(resolve_active(&[], 0.0), None);
    }

    #[test]
    fn hash_matching() {
        let hrefs = ["#home", "#brands", "#contact"];
        assert_eq!(match_hash("#brands", hrefs), Some("#brands"));
        assert_eq!(match_hash("#missing", hrefs), None);
        assert_eq!(match_hash("", hrefs), None);
    }
}
