/// Height of the sticky header; the top of the viewport it covers never counts
/// as visible.
pub const HEADER_OFFSET: f64 = 80.0;

/// Fraction of its own height a section must show to win outright.
pub const DOMINANCE_RATIO: f64 = 0.6;

/// Document-relative vertical extent of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    fn overlap(&self, lo: f64, hi: f64) -> f64 {
        (self.bottom.min(hi) - self.top.max(lo)).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// Anything that can report where a section currently sits in the document.
///
/// Implementations must measure on every call; the tracker never caches.
pub trait SectionGeometry {
    /// `None` when the section is not mounted.
    fn bounds(&self) -> Option<Bounds>;
}

impl SectionGeometry for Bounds {
    fn bounds(&self) -> Option<Bounds> {
        Some(*self)
    }
}

impl<G: SectionGeometry> SectionGeometry for Option<G> {
    fn bounds(&self) -> Option<Bounds> {
        self.as_ref().and_then(SectionGeometry::bounds)
    }
}

#[derive(Debug, Clone)]
pub struct Section<G> {
    pub id: String,
    pub label: String,
    geometry: G,
}

impl<G: SectionGeometry> Section<G> {
    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }
}

/// Result of a nav click: the new active id and where to scroll to.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub active: String,
    /// `None` when the target has no measurable geometry yet.
    pub scroll_to: Option<f64>,
}

/// Picks the index of the section that should be active, or `None` if no
/// section is visible at all.
///
/// Candidates must be given in registration order. The largest visible height
/// wins, with ties going to the earlier candidate. A candidate showing more than
/// [`DOMINANCE_RATIO`] of its own height beats that, and among several such
/// candidates the earliest one wins.
pub fn select_active<I>(viewport: Viewport, header_offset: f64, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, Bounds)>,
{
    let lo = viewport.scroll_top + header_offset;
    let hi = viewport.scroll_top + viewport.height;

    let mut best: Option<(usize, f64)> = None;
    let mut dominant: Option<usize> = None;

    for (index, bounds) in candidates {
        let visible = bounds.overlap(lo, hi);

        if visible > best.map_or(0.0, |(_, v)| v) {
            best = Some((index, visible));
        }
        if dominant.is_none() && visible > bounds.height() * DOMINANCE_RATIO {
            dominant = Some(index);
        }
    }

    dominant.or(best.map(|(index, _)| index))
}

/// Registry of page sections plus the currently highlighted one.
#[derive(Debug)]
pub struct SectionTracker<G> {
    sections: Vec<Section<G>>,
    active: Option<usize>,
    header_offset: f64,
}

impl<G> Default for SectionTracker<G> {
    fn default() -> Self {
        Self::new(HEADER_OFFSET)
    }
}

impl<G> SectionTracker<G> {
    pub fn new(header_offset: f64) -> Self {
        Self {
            sections: Vec::new(),
            active: None,
            header_offset,
        }
    }

    /// Adds a section, or replaces the geometry of an already registered id.
    /// The first section registered becomes the active one.
    pub fn register(&mut self, id: impl Into<String>, label: impl Into<String>, geometry: G) {
        let id = id.into();
        if let Some(existing) = self.sections.iter_mut().find(|s| s.id == id) {
            existing.label = label.into();
            existing.geometry = geometry;
            return;
        }
        self.sections.push(Section {
            id,
            label: label.into(),
            geometry,
        });
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    pub fn sections(&self) -> &[Section<G>] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

impl<G: SectionGeometry> SectionTracker<G> {
    /// Re-measures every section against `viewport` and updates the active
    /// section. Returns the active id afterwards.
    pub fn recompute(&mut self, viewport: Viewport) -> Option<&str> {
        let candidates = self
            .sections
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.bounds().map(|b| (i, b)));

        if let Some(winner) = select_active(viewport, self.header_offset, candidates) {
            if self.active != Some(winner) {
                log::debug!("active section -> {}", self.sections[winner].id);
                self.active = Some(winner);
            }
        }
        self.active()
    }

    /// Marks `id` active right away and works out the scroll offset that puts
    /// it just below the header. Unknown ids leave the tracker untouched.
    pub fn navigate(&mut self, id: &str) -> Option<Navigation> {
        let index = self.position(id)?;
        self.active = Some(index);

        let section = &self.sections[index];
        Some(Navigation {
            active: section.id.clone(),
            scroll_to: section.bounds().map(|b| b.top - self.header_offset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(layout: &[(&str, f64, f64)]) -> SectionTracker<Bounds> {
        let mut t = SectionTracker::new(HEADER_OFFSET);
        for (id, top, bottom) in layout {
            t.register(*id, id.to_uppercase(), Bounds::new(*top, *bottom));
        }
        t
    }

    fn at(scroll_top: f64, height: f64) -> Viewport {
        Viewport { scroll_top, height }
    }

    #[test]
    fn test_second_section_wins_past_header() {
        let mut t = tracker(&[("a", 0.0, 800.0), ("b", 800.0, 1600.0)]);
        assert_eq!(t.recompute(at(750.0, 800.0)), Some("b"));
    }

    #[test]
    fn test_first_registered_is_initially_active() {
        let t = tracker(&[("home", 0.0, 900.0), ("about", 900.0, 1800.0)]);
        assert_eq!(t.active(), Some("home"));
    }

    #[test]
    fn test_empty_registry_is_noop() {
        let mut t: SectionTracker<Bounds> = SectionTracker::default();
        assert_eq!(t.recompute(at(0.0, 800.0)), None);
        assert_eq!(t.navigate("home"), None);
        assert_eq!(t.active(), None);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut t = tracker(&[
            ("home", 0.0, 700.0),
            ("about", 700.0, 1500.0),
            ("stack", 1500.0, 2100.0),
        ]);
        let first = t.recompute(at(1100.0, 900.0)).map(str::to_owned);
        let second = t.recompute(at(1100.0, 900.0)).map(str::to_owned);
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("stack"));
    }

    #[test]
    fn test_active_is_always_registered() {
        let mut t = tracker(&[
            ("home", 0.0, 800.0),
            ("about", 800.0, 1300.0),
            ("stack", 1300.0, 1500.0),
            ("projects", 1500.0, 2600.0),
            ("contact", 2600.0, 3400.0),
        ]);
        let ids: Vec<String> = t.sections().iter().map(|s| s.id.clone()).collect();
        let mut scroll = 0.0;
        while scroll < 3400.0 {
            let active = t.recompute(at(scroll, 768.0)).map(str::to_owned);
            assert!(ids.contains(&active.expect("tracker has sections")));
            scroll += 37.0;
        }
    }

    #[test]
    fn test_zero_height_section_never_wins() {
        let mut t = tracker(&[("empty", 500.0, 500.0), ("real", 0.0, 1000.0)]);
        assert_eq!(t.active(), Some("empty"));
        assert_eq!(t.recompute(at(0.0, 1000.0)), Some("real"));
    }

    #[test]
    fn test_nothing_visible_keeps_active() {
        let mut t = tracker(&[("a", 0.0, 100.0), ("b", 100.0, 200.0)]);
        t.navigate("b");
        assert_eq!(t.recompute(at(5000.0, 800.0)), Some("b"));
    }

    #[test]
    fn test_ties_keep_earliest() {
        // both show 500px of [80, 1080) and neither passes the dominance ratio
        let winner = select_active(
            at(0.0, 1080.0),
            HEADER_OFFSET,
            [
                (0, Bounds::new(-2000.0, 580.0)),
                (1, Bounds::new(580.0, 3000.0)),
            ],
        );
        assert_eq!(winner, Some(0));
    }

    #[test]
    fn test_dominant_short_section_overrides_larger_visible() {
        // "short" is fully visible (100% of 200px) while "tall" shows more pixels
        // but well under 60% of its height
        let mut t = tracker(&[("tall", 0.0, 3000.0), ("short", 900.0, 1100.0)]);
        t.navigate("tall");
        assert_eq!(t.recompute(at(400.0, 900.0)), Some("short"));
    }

    #[test]
    fn test_multiple_dominant_sections_topmost_wins() {
        let winner = select_active(
            at(0.0, 1000.0),
            HEADER_OFFSET,
            [
                (0, Bounds::new(100.0, 300.0)),
                (1, Bounds::new(300.0, 900.0)),
                (2, Bounds::new(900.0, 950.0)),
            ],
        );
        assert_eq!(winner, Some(0));
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut t: SectionTracker<Option<Bounds>> = SectionTracker::new(HEADER_OFFSET);
        t.register("home", "Home", None);
        t.register("about", "About", Some(Bounds::new(0.0, 900.0)));
        assert_eq!(t.recompute(at(0.0, 800.0)), Some("about"));
    }

    #[test]
    fn test_navigate_sets_active_immediately() {
        let mut t = tracker(&[
            ("home", 0.0, 800.0),
            ("projects", 800.0, 1600.0),
            ("contact", 1600.0, 2400.0),
        ]);
        let nav = t.navigate("contact").expect("contact is registered");
        assert_eq!(nav.active, "contact");
        assert_eq!(nav.scroll_to, Some(1600.0 - HEADER_OFFSET));
        assert_eq!(t.active(), Some("contact"));
    }

    #[test]
    fn test_navigate_unknown_is_ignored() {
        let mut t = tracker(&[("home", 0.0, 800.0)]);
        assert_eq!(t.navigate("blog"), None);
        assert_eq!(t.active(), Some("home"));
    }

    #[test]
    fn test_navigate_without_geometry() {
        let mut t: SectionTracker<Option<Bounds>> = SectionTracker::default();
        t.register("home", "Home", None);
        t.register("contact", "Contact", None);
        let nav = t.navigate("contact").expect("contact is registered");
        assert_eq!(nav.scroll_to, None);
        assert_eq!(t.active(), Some("contact"));
    }

    #[test]
    fn test_register_replaces_geometry() {
        let mut t = tracker(&[("home", 0.0, 800.0)]);
        t.register("home", "Start", Bounds::new(100.0, 400.0));
        assert_eq!(t.sections().len(), 1);
        assert_eq!(t.sections()[0].label, "Start");
        assert_eq!(t.sections()[0].bounds(), Some(Bounds::new(100.0, 400.0)));
    }
}
