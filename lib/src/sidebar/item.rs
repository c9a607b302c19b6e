use rustc_hash::FxHashMap;

use crate::outline::{Chapter, Entry, Outline, SectionNumber};
use crate::sidebar::PageContext;
use crate::url::UrlBuf;
use crate::util::slugify;

/// One row of the rendered sidebar, flattened in document order with a
/// parent pointer back into the row list.
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    /// Stable identifier derived from the label; toggle controls address
    /// items by it.
    pub id: String,
    /// Index of the containing chapter's row, if any.
    pub parent: Option<usize>,
    pub depth: usize,
    pub expanded: bool,
    pub active: bool,
    pub has_children: bool,
}

#[derive(Debug, Clone)]
pub enum ItemKind {
    /// A navigable chapter; `href` has already been rebased for the page.
    Link {
        label: String,
        number: Option<SectionNumber>,
        href: UrlBuf,
    },
    /// An unwritten chapter: listed, not navigable.
    Draft {
        label: String,
        number: Option<SectionNumber>,
    },
    /// A part heading.
    Part { label: String },
}

impl Item {
    pub fn label(&self) -> &str {
        match &self.kind {
            ItemKind::Link { label, .. } => label,
            ItemKind::Draft { label, .. } => label,
            ItemKind::Part { label } => label,
        }
    }
}

/// Flatten the outline into rows for one page: hrefs rebased with the page's
/// path to root, initial expansion from the fold config, nothing active yet.
pub(crate) fn flatten(outline: &Outline, context: &PageContext) -> Vec<Item> {
    let mut items = Vec::new();
    let mut ids = FxHashMap::default();

    for entry in &outline.entries {
        match entry {
            Entry::Part(label) => items.push(Item {
                kind: ItemKind::Part { label: label.clone() },
                id: unique_id(label, &mut ids),
                parent: None,
                depth: 0,
                expanded: true,
                active: false,
                has_children: false,
            }),
            Entry::Chapter(chapter) => {
                flatten_chapter(chapter, None, 0, context, &mut items, &mut ids);
            }
        }
    }

    items
}

fn flatten_chapter(
    chapter: &Chapter,
    parent: Option<usize>,
    depth: usize,
    context: &PageContext,
    items: &mut Vec<Item>,
    ids: &mut FxHashMap<String, usize>,
) {
    let kind = match &chapter.target {
        Some(target) => ItemKind::Link {
            label: chapter.label.clone(),
            number: chapter.number.clone(),
            href: target.rebase(&context.path_to_root),
        },
        None => ItemKind::Draft {
            label: chapter.label.clone(),
            number: chapter.number.clone(),
        },
    };

    let fold = &context.config.fold;
    let index = items.len();
    items.push(Item {
        kind,
        id: unique_id(&chapter.label, ids),
        parent,
        depth,
        expanded: !fold.enable || depth < fold.level,
        active: false,
        has_children: !chapter.children.is_empty(),
    });

    for child in &chapter.children {
        flatten_chapter(child, Some(index), depth + 1, context, items, ids);
    }
}

fn unique_id(label: &str, ids: &mut FxHashMap<String, usize>) -> String {
    let mut slug = slugify(label);
    if slug.is_empty() {
        slug = "chapter".into();
    }

    let seen = ids.entry(slug.clone()).or_insert(0);
    *seen += 1;

    match *seen {
        1 => slug,
        n => format!("{slug}-{n}"),
    }
}
