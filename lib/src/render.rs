//! Sidebar markup emission.
//!
//! The rendered string is the container's entire content: rendering is pure,
//! so re-rendering the same sidebar always produces the same markup.

use crate::sidebar::{Item, ItemKind, Sidebar};

impl Sidebar {
    /// Render the sidebar to its container markup.
    pub fn to_html(&self) -> String {
        let items = self.items();

        let mut roots = Vec::new();
        let mut children = vec![Vec::new(); items.len()];
        for (i, item) in items.iter().enumerate() {
            match item.parent {
                Some(parent) => children[parent].push(i),
                None => roots.push(i),
            }
        }

        let mut out = String::from("<ol class=\"chapter\">");
        render_level(&mut out, items, &children, &roots);
        out.push_str("</ol>");
        out
    }
}

fn render_level(out: &mut String, items: &[Item], children: &[Vec<usize>], level: &[usize]) {
    for &i in level {
        render_item(out, &items[i]);
        if !children[i].is_empty() {
            out.push_str("<li><ol class=\"section\">");
            render_level(out, items, children, &children[i]);
            out.push_str("</ol></li>");
        }
    }
}

fn render_item(out: &mut String, item: &Item) {
    let (label, number) = match &item.kind {
        ItemKind::Part { label } => {
            out.push_str("<li class=\"part-title\">");
            escape(out, label);
            out.push_str("</li>");
            return;
        }
        ItemKind::Link { label, number, .. } => (label, number),
        ItemKind::Draft { label, number } => (label, number),
    };

    out.push_str("<li class=\"chapter-item");
    if item.expanded {
        out.push_str(" expanded");
    }

    if number.is_none() {
        out.push_str(" affix");
    }

    out.push_str("\" id=\"");
    escape(out, &item.id);
    out.push_str("\">");

    match &item.kind {
        ItemKind::Link { href, .. } => {
            out.push_str("<a href=\"");
            escape(out, href.as_str());
            out.push('"');
            if item.active {
                out.push_str(" class=\"active\"");
            }

            out.push('>');
            render_title(out, label, number);
            out.push_str("</a>");
        }
        _ => {
            out.push_str("<div>");
            render_title(out, label, number);
            out.push_str("</div>");
        }
    }

    if item.has_children {
        out.push_str("<a class=\"toggle\"><div>\u{2771}</div></a>");
    }

    out.push_str("</li>");
}

fn render_title(out: &mut String, label: &str, number: &Option<crate::outline::SectionNumber>) {
    if let Some(number) = number {
        out.push_str("<strong aria-hidden=\"true\">");
        out.push_str(&number.to_string());
        out.push_str("</strong> ");
    }

    escape(out, label);
}

fn escape(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::outline::Outline;
    use crate::sidebar::{PageContext, Sidebar};

    #[test]
    fn renders_structure_and_marks() {
        let outline = Outline::from_summary(
            "# Summary\n\n[Intro](intro.html)\n\n# Guide\n\n- [One](one.html)\n  - Draft\n"
        ).unwrap();

        let sidebar = Sidebar::mount(&outline, &PageContext::new("one.html", ""));
        assert_eq!(sidebar.to_html(), concat!(
            "<ol class=\"chapter\">",
            "<li class=\"chapter-item expanded affix\" id=\"intro\">",
            "<a href=\"intro.html\">Intro</a></li>",
            "<li class=\"part-title\">Guide</li>",
            "<li class=\"chapter-item expanded\" id=\"one\">",
            "<a href=\"one.html\" class=\"active\">",
            "<strong aria-hidden=\"true\">1.</strong> One</a>",
            "<a class=\"toggle\"><div>\u{2771}</div></a></li>",
            "<li><ol class=\"section\">",
            "<li class=\"chapter-item expanded\" id=\"draft\">",
            "<div><strong aria-hidden=\"true\">1.1.</strong> Draft</div></li>",
            "</ol></li>",
            "</ol>",
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let outline = Outline::from_summary("- [A](a.html)\n- [B](b.html)\n").unwrap();
        let sidebar = Sidebar::mount(&outline, &PageContext::new("b.html", ""));
        assert_eq!(sidebar.to_html(), sidebar.to_html());
    }

    #[test]
    fn escapes_labels_and_hrefs() {
        let outline = Outline::from_summary(
            "- [Ampersands & \"angles\"](a&b.html)\n"
        ).unwrap();

        let sidebar = Sidebar::mount(&outline, &PageContext::new("x.html", ""));
        let html = sidebar.to_html();
        assert!(html.contains("href=\"a&amp;b.html\""));
        assert!(html.contains("Ampersands &amp; &quot;angles&quot;"));
    }
}
