use std::path::Path;

use once_cell::sync::Lazy;
use minijinja::{context, Environment};

use waxwing::{PageContext, Sidebar};
use waxwing::error::{Chainable, Error, Result};
use waxwing::url::UrlBuf;

use crate::discover::Book;

static PREVIEW: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("preview", include_str!("preview.html"))
        .expect("preview template parses");
    env
});

/// Write one sidebar fragment per navigable chapter, plus the outline as
/// JSON for other build tooling.
pub fn render_book(book: &Book, output: &Path) -> Result<()> {
    std::fs::create_dir_all(output)?;

    let json = serde_json::to_string_pretty(&book.outline)?;
    std::fs::write(output.join("outline.json"), json)?;

    for chapter in book.outline.chapters() {
        let Some(target) = &chapter.target else { continue };
        if target.is_external() || target.is_fragment() {
            continue;
        }

        let sidebar = mount_for(book, target);
        let path = output.join(target.as_str()).with_extension("toc.html");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, sidebar.to_html()).chain_with(|| waxwing::error! {
            "failed to write sidebar fragment",
            "chapter" => chapter.label,
            "path" => path.display(),
        })?;
    }

    Ok(())
}

/// Write a standalone page wrapping one chapter's sidebar fragment, for
/// eyeballing the markup without a built book around it.
pub fn render_preview(book: &Book, target: &str, output: &Path) -> Result<()> {
    let chapter = book.outline.chapters()
        .find(|chapter| chapter.target.as_deref().map(|t| t.as_str()) == Some(target));

    let Some(chapter) = chapter else {
        return waxwing::err! {
            "no chapter has the requested target",
            "target" => target,
        };
    };

    let sidebar = mount_for(book, &UrlBuf::from(target));
    let page = PREVIEW.get_template("preview")
        .and_then(|template| template.render(context! {
            title => &chapter.label,
            sidebar => sidebar.to_html(),
        }))
        .map_err(Error::from_std)
        .chain_with(|| "failed to render the preview page")?;

    std::fs::write(output.join("preview.html"), page)?;
    Ok(())
}

/// Mount the sidebar as the page at `target` would see it, deriving the
/// path back to the book root from the target's depth.
fn mount_for(book: &Book, target: &UrlBuf) -> Sidebar {
    let depth = target.as_str().matches('/').count();
    let mut context = PageContext::new(target.clone(), "../".repeat(depth));
    context.config = book.config.clone();
    Sidebar::mount(&book.outline, &context)
}
