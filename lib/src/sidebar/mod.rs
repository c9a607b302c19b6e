//! Per-page sidebar state: the current entry, section expansion, toggle
//! flips, and scroll persistence.

mod item;
mod session;

pub use item::*;
pub use session::*;

use crate::config::SidebarConfig;
use crate::outline::Outline;
use crate::url::UrlBuf;

/// What the host page supplies about the current load.
///
/// `location` may be an absolute URL or a site-root-relative path; either
/// way, `path_to_root` must be the relative prefix (`""`, `"../"`, ...) from
/// the page back to the book root, exactly as the embedding page computes it.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub location: UrlBuf,
    pub path_to_root: UrlBuf,
    pub config: SidebarConfig,
}

impl PageContext {
    pub fn new(location: impl Into<UrlBuf>, path_to_root: impl Into<UrlBuf>) -> Self {
        PageContext {
            location: location.into(),
            path_to_root: path_to_root.into(),
            config: SidebarConfig::default(),
        }
    }
}

/// What the host should do with the container's scroll position after a
/// mount.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scroll {
    /// Re-apply a stored offset: the reader navigated via a sidebar link and
    /// the list should not appear to move.
    To(f64),
    /// No stored offset: bring the active entry into the vertical center of
    /// the container.
    CenterActive,
    /// No stored offset and no active entry: leave the container alone.
    None,
}

/// The sidebar as mounted on one page.
///
/// Mounting flattens the outline, rebases every link for the page, and marks
/// the entry matching the current location along with its ancestors. All
/// failure modes at this level (no match, unknown toggle id, missing stored
/// offset) are silent no-ops; the sidebar is navigation, not content.
#[derive(Debug)]
pub struct Sidebar {
    items: Vec<Item>,
    active: Option<usize>,
    scroll_key: String,
}

impl Sidebar {
    pub fn mount(outline: &Outline, context: &PageContext) -> Sidebar {
        let mut items = flatten(outline, context);
        let active = mark_current(&mut items, context);

        Sidebar {
            items,
            active,
            scroll_key: context.config.scroll_key.clone(),
        }
    }

    /// Rows in document order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The entry matching the current page, if any.
    pub fn active(&self) -> Option<&Item> {
        self.active.map(|i| &self.items[i])
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Flip the expanded mark on the identified item. Returns whether the id
    /// was known; unknown ids change nothing.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.expanded = !item.expanded;
                true
            }
            None => false,
        }
    }

    /// Record the container's scroll offset on a sidebar link click. The
    /// write is fire-and-forget; navigation proceeds regardless.
    pub fn record_click<S: Session>(&self, session: &mut S, offset: f64) {
        session.set(&self.scroll_key, &offset.to_string());
    }

    /// Consume any stored scroll offset and decide what to do with the
    /// container. The stored value is removed as it is read, so it applies
    /// to exactly one load.
    pub fn restore_scroll<S: Session>(&self, session: &mut S) -> Scroll {
        let stored = session.remove(&self.scroll_key);
        match stored.and_then(|value| value.parse().ok()) {
            Some(offset) => Scroll::To(offset),
            None if self.active.is_some() => Scroll::CenterActive,
            None => Scroll::None,
        }
    }
}

/// Find and mark the entry for the current location.
///
/// The location is normalized (fragment and query stripped, directory URLs
/// aliased to the default document), then links are scanned in document
/// order. The first link whose rebased href resolves to the location wins.
/// The book root aliases the first link even when its href differs.
fn mark_current(items: &mut [Item], context: &PageContext) -> Option<usize> {
    let mut current = context.location.resource().to_url_buf();
    current.ensure_document(&context.config.default_document);

    let root_alias = context.path_to_root.is_empty()
        && current.names(&context.config.default_document);

    let mut first_link = true;
    let mut active = None;
    for (i, item) in items.iter().enumerate() {
        let ItemKind::Link { href, .. } = &item.kind else { continue };

        let matched = (first_link && root_alias)
            || (!href.is_fragment() && current.join(href) == current);

        first_link = false;
        if matched {
            active = Some(i);
            break;
        }
    }

    if let Some(i) = active {
        items[i].active = true;
        items[i].expanded = true;

        let mut parent = items[i].parent;
        while let Some(p) = parent {
            items[p].expanded = true;
            parent = items[p].parent;
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SidebarConfig;
    use crate::outline::Outline;

    const SUMMARY: &str = "\
[Introduction](intro.html)

- [Navigation](navigation/intro.html)
  - [By topic](navigation/topics.html)
    - [Deep dive](navigation/deep/dive.html)
  - FAQs
- [Async and await](part-guide/async-await.html)
";

    fn outline() -> Outline {
        Outline::from_summary(SUMMARY).unwrap()
    }

    fn folded() -> SidebarConfig {
        let mut config = SidebarConfig::default();
        config.fold.enable = true;
        config
    }

    #[test]
    fn marks_active_and_expands_ancestors() {
        let outline = outline();
        let mut context = PageContext::new("navigation/deep/dive.html", "../../");
        context.config = folded();

        let sidebar = Sidebar::mount(&outline, &context);
        let active = sidebar.active().unwrap();
        assert_eq!(active.label(), "Deep dive");
        assert!(active.expanded);

        assert!(sidebar.get("by-topic").unwrap().expanded);
        assert!(sidebar.get("navigation").unwrap().expanded);

        // Unrelated sections stay folded, and only one row is active.
        assert!(!sidebar.get("async-and-await").unwrap().expanded);
        let actives = sidebar.items().iter().filter(|item| item.active).count();
        assert_eq!(actives, 1);
    }

    #[test]
    fn matches_against_absolute_locations() {
        let outline = outline();
        let context = PageContext::new("https://example.com/book/navigation/topics.html", "../");
        let sidebar = Sidebar::mount(&outline, &context);
        assert_eq!(sidebar.active().unwrap().label(), "By topic");
    }

    #[test]
    fn normalizes_query_and_fragment() {
        let outline = outline();
        let context = PageContext::new("navigation/intro.html?q=1#section-2", "../");
        let sidebar = Sidebar::mount(&outline, &context);
        assert_eq!(sidebar.active().unwrap().label(), "Navigation");
    }

    #[test]
    fn directory_location_aliases_default_document() {
        let outline = Outline::from_summary("- [Nav](navigation/index.html)\n").unwrap();
        let context = PageContext::new("https://example.com/book/navigation/", "../");
        let sidebar = Sidebar::mount(&outline, &context);
        assert_eq!(sidebar.active().unwrap().label(), "Nav");
    }

    #[test]
    fn root_aliases_first_link() {
        let outline = outline();

        // The root index activates the first link even though its href is
        // `intro.html`, but only at the root.
        let sidebar = Sidebar::mount(&outline, &PageContext::new("index.html", ""));
        assert_eq!(sidebar.active().unwrap().label(), "Introduction");

        let sidebar = Sidebar::mount(&outline, &PageContext::new("https://x.y/", ""));
        assert_eq!(sidebar.active().unwrap().label(), "Introduction");

        let sidebar = Sidebar::mount(&outline, &PageContext::new("navigation/index.html", "../"));
        assert!(sidebar.active().is_none());
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let outline = Outline::from_summary(
            "- [First](page.html)\n- [Second](page.html)\n"
        ).unwrap();

        let sidebar = Sidebar::mount(&outline, &PageContext::new("page.html", ""));
        assert_eq!(sidebar.active().unwrap().label(), "First");
        assert!(!sidebar.get("second").unwrap().active);
    }

    #[test]
    fn missing_page_leaves_nothing_active() {
        let outline = outline();
        let sidebar = Sidebar::mount(&outline, &PageContext::new("not/in/outline.html", "../../../"));
        assert!(sidebar.active().is_none());
        assert!(!sidebar.items().iter().any(|item| item.active));
    }

    #[test]
    fn toggle_flips_every_time() {
        let outline = outline();
        let mut sidebar = Sidebar::mount(&outline, &PageContext::new("intro.html", ""));

        let before = sidebar.get("navigation").unwrap().expanded;
        assert!(sidebar.toggle("navigation"));
        assert_eq!(sidebar.get("navigation").unwrap().expanded, !before);
        assert!(sidebar.toggle("navigation"));
        assert_eq!(sidebar.get("navigation").unwrap().expanded, before);

        assert!(!sidebar.toggle("no-such-item"));
    }

    #[test]
    fn scroll_offset_is_consumed_once() {
        let outline = outline();
        let sidebar = Sidebar::mount(&outline, &PageContext::new("intro.html", ""));
        let mut store = MemoryStore::new();

        sidebar.record_click(&mut store, 125.5);
        assert_eq!(sidebar.restore_scroll(&mut store), Scroll::To(125.5));

        // Consumed: the next load falls back to centering the active entry.
        assert_eq!(store.get(SCROLL_KEY), None);
        assert_eq!(sidebar.restore_scroll(&mut store), Scroll::CenterActive);
    }

    #[test]
    fn no_offset_and_no_active_leaves_scroll_alone() {
        let outline = outline();
        let sidebar = Sidebar::mount(&outline, &PageContext::new("elsewhere.html", ""));
        let mut store = MemoryStore::new();
        assert_eq!(sidebar.restore_scroll(&mut store), Scroll::None);
    }

    #[test]
    fn unreadable_offset_is_treated_as_absent() {
        let outline = outline();
        let sidebar = Sidebar::mount(&outline, &PageContext::new("intro.html", ""));
        let mut store = MemoryStore::new();

        store.set(SCROLL_KEY, "not a number");
        assert_eq!(sidebar.restore_scroll(&mut store), Scroll::CenterActive);
        assert_eq!(store.get(SCROLL_KEY), None);
    }
}
