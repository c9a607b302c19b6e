use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::err;
use crate::error::Result;
use crate::outline::{Chapter, Entry, Outline};
use crate::url::UrlBuf;

impl Outline {
    /// Parse a `SUMMARY.md`-style outline file.
    ///
    /// Headings after the first become part titles. List items become
    /// chapters: a linked item is navigable, a bare or empty-linked item is a
    /// draft placeholder, and nested lists nest chapters. Links outside any
    /// list are unnumbered prefix/suffix chapters. Numbering is hierarchical
    /// and runs across parts in document order.
    pub fn from_summary(input: &str) -> Result<Outline> {
        let mut summary = SummaryParser::default();
        let options = Options::all().difference(Options::ENABLE_SMART_PUNCTUATION);
        for event in Parser::new_ext(input, options) {
            summary.event(event)?;
        }

        Ok(summary.outline)
    }
}

#[derive(Default)]
struct SummaryParser {
    outline: Outline,
    /// Open list items, innermost last.
    open: Vec<Chapter>,
    /// Finished chapters of each open list, innermost last.
    frames: Vec<Vec<Chapter>>,
    /// A bare link outside any list: a prefix or suffix chapter.
    affix: Option<Chapter>,
    /// Text accumulates here while a heading is open.
    heading: Option<String>,
    /// The first heading is the outline's own title, not a part.
    titled: bool,
    /// Top-level chapter numbering, running across lists and parts.
    next_number: u32,
}

impl SummaryParser {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                if !self.frames.is_empty() {
                    return err!("found a part heading inside a chapter list");
                }

                self.heading = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                let title = self.heading.take().unwrap_or_default();
                match self.titled {
                    true => self.outline.entries.push(Entry::Part(title.trim().into())),
                    false => self.titled = true,
                }
            }
            Event::Start(Tag::List(_)) => self.frames.push(Vec::new()),
            Event::End(TagEnd::List(_)) => {
                let mut chapters = self.frames.pop().expect("balanced list events");
                match self.open.last_mut() {
                    Some(parent) => parent.children.extend(chapters),
                    None => {
                        self.number(&mut chapters);
                        let entries = chapters.into_iter().map(Entry::Chapter);
                        self.outline.entries.extend(entries);
                    }
                }
            }
            Event::Start(Tag::Item) => self.open.push(Chapter::default()),
            Event::End(TagEnd::Item) => {
                let mut chapter = self.open.pop().expect("balanced item events");
                chapter.label = chapter.label.trim().into();
                match self.frames.last_mut() {
                    Some(frame) => frame.push(chapter),
                    None => return err!("found a chapter item outside a list"),
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                let target = match dest_url.is_empty() {
                    true => None,
                    false => Some(UrlBuf::from(dest_url.as_ref())),
                };

                match self.open.last_mut() {
                    Some(chapter) if chapter.target.is_none() => chapter.target = target,
                    Some(_) => { }
                    None if self.heading.is_none() => {
                        self.affix = Some(Chapter { target, ..Chapter::default() });
                    }
                    None => { }
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(mut chapter) = self.affix.take() {
                    chapter.label = chapter.label.trim().into();
                    self.outline.entries.push(Entry::Chapter(chapter));
                }
            }
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.text(&code),
            Event::SoftBreak | Event::HardBreak => self.text(" "),
            _ => { }
        }

        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.push_str(text);
        } else if let Some(affix) = self.affix.as_mut() {
            affix.label.push_str(text);
        } else if let Some(chapter) = self.open.last_mut() {
            chapter.label.push_str(text);
        }
    }

    /// Number a finished top-level list and its subtrees.
    fn number(&mut self, chapters: &mut [Chapter]) {
        for chapter in chapters {
            self.next_number += 1;
            Self::number_subtree(chapter, vec![self.next_number]);
        }
    }

    fn number_subtree(chapter: &mut Chapter, path: Vec<u32>) {
        for (i, child) in chapter.children.iter_mut().enumerate() {
            let mut child_path = path.clone();
            child_path.push(i as u32 + 1);
            Self::number_subtree(child, child_path);
        }

        chapter.number = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "\
# Summary

[Introduction](intro.html)

# Part 1: guide

- [Navigation](navigation/intro.html)
  - [By topic](navigation/topics.html)
  - FAQs
- [Async and await](part-guide/async-await.html)

# Part 2: reference

- Implementing futures

[Appendix: Translations](appendix/translations.html)
";

    #[test]
    fn parses_structure() {
        let outline = Outline::from_summary(SUMMARY).unwrap();

        let labels: Vec<_> = outline.chapters().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, &[
            "Introduction",
            "Navigation", "By topic", "FAQs",
            "Async and await",
            "Implementing futures",
            "Appendix: Translations",
        ]);

        let parts: Vec<_> = outline.entries.iter()
            .filter_map(|entry| match entry {
                Entry::Part(title) => Some(title.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(parts, &["Part 1: guide", "Part 2: reference"]);
    }

    #[test]
    fn numbers_run_across_parts() {
        let outline = Outline::from_summary(SUMMARY).unwrap();
        let numbers: Vec<_> = outline.chapters()
            .map(|c| c.number.as_ref().map(|n| n.to_string()))
            .collect();

        assert_eq!(numbers, &[
            None,
            Some("1.".into()), Some("1.1.".into()), Some("1.2.".into()),
            Some("2.".into()),
            Some("3.".into()),
            None,
        ]);
    }

    #[test]
    fn drafts_have_no_target() {
        let outline = Outline::from_summary(SUMMARY).unwrap();
        let faq = outline.chapters().find(|c| c.label == "FAQs").unwrap();
        assert!(faq.is_draft());

        let outline = Outline::from_summary("- [Empty]()\n").unwrap();
        assert!(outline.chapters().next().unwrap().is_draft());
    }

    #[test]
    fn first_link_skips_drafts() {
        let outline = Outline::from_summary("- Draft\n- [Real](real.html)\n").unwrap();
        assert_eq!(outline.first_link().unwrap().label, "Real");
    }

    #[test]
    fn heading_inside_list_is_an_error() {
        assert!(Outline::from_summary("- # not a part\n").is_err());
    }
}
