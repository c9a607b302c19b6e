use std::fmt;

use serde::Serialize;
use derive_more::{Deref, From};

use crate::url::UrlBuf;

/// A hierarchical chapter number, rendered in the `1.2.` style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref, From)]
#[serde(transparent)]
pub struct SectionNumber(pub Vec<u32>);

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.0 {
            write!(f, "{part}.")?;
        }

        Ok(())
    }
}

/// One chapter of the book.
///
/// A chapter without a target is a placeholder for an unwritten chapter: it
/// is listed but not navigable. A chapter without a number is an "affix"
/// chapter, listed outside the numbered sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chapter {
    pub label: String,
    pub number: Option<SectionNumber>,
    pub target: Option<UrlBuf>,
    pub children: Vec<Chapter>,
}

impl Chapter {
    pub fn is_draft(&self) -> bool {
        self.target.is_none()
    }
}

/// A top-level outline entry: a chapter subtree or a part heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Entry {
    Chapter(Chapter),
    Part(String),
}

/// The full outline: an ordered tree of entries, fixed at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    pub entries: Vec<Entry>,
}

impl Outline {
    /// Every chapter, depth-first in document order. This is the order the
    /// sidebar lists chapters in and the order the active-entry scan runs in.
    pub fn chapters(&self) -> Chapters<'_> {
        let stack: Vec<&Chapter> = self.entries.iter()
            .rev()
            .filter_map(|entry| match entry {
                Entry::Chapter(chapter) => Some(chapter),
                Entry::Part(_) => None,
            })
            .collect();

        Chapters { stack }
    }

    /// The first navigable chapter, the one the book root aliases.
    pub fn first_link(&self) -> Option<&Chapter> {
        self.chapters().find(|chapter| chapter.target.is_some())
    }
}

/// Depth-first iterator over chapters. See [`Outline::chapters`].
pub struct Chapters<'o> {
    stack: Vec<&'o Chapter>,
}

impl<'o> Iterator for Chapters<'o> {
    type Item = &'o Chapter;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
