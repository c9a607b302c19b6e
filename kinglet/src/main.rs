mod config;
mod discover;
mod render;

pub const CONFIG_FILE: &str = "config.toml";
pub const SUMMARY_FILE: &str = "summary.md";

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Generate per-page sidebar fragments for a book.
        cmd kinglet {
            /// Book directory containing summary.md and an optional config.toml.
            required input: PathBuf
            /// Directory to write the fragments into.
            required output: PathBuf
            /// Also write a standalone preview page for this chapter target.
            optional --preview target: String
        }
    }
}

pub fn main() {
    let flags = flags::Kinglet::from_env_or_exit();

    let start = std::time::SystemTime::now();
    let result = discover::Book::discover(&flags.input)
        .and_then(|book| {
            println!("discovery time: {}ms", start.elapsed().unwrap().as_millis());
            let render = std::time::SystemTime::now();
            let result = render::render_book(&book, &flags.output)
                .and_then(|()| match flags.preview.as_deref() {
                    Some(target) => render::render_preview(&book, target, &flags.output),
                    None => Ok(()),
                });

            println!("render time: {}ms", render.elapsed().unwrap().as_millis());
            println!("total time: {}ms", start.elapsed().unwrap().as_millis());
            result
        });

    if let Err(e) = result {
        println!("error: {e}");
    }
}
