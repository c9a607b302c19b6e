/// Reduce a label to a stable, URL-safe identifier: transliterate to ASCII,
/// lowercase, keep alphanumerics and underscores, and collapse everything
/// else into single hyphens.
///
/// ```rust
/// use waxwing::util::slugify;
///
/// assert_eq!(slugify("Async and await"), "async-and-await");
/// assert_eq!(slugify("  IO -- and blocking!  "), "io-and-blocking");
/// assert_eq!(slugify("Fähre über Öl"), "fahre-uber-ol");
/// assert_eq!(slugify("snake_case stays"), "snake_case-stays");
/// ```
pub fn slugify(string: &str) -> String {
    let ascii = deunicode::deunicode(string);
    let mut slug = String::with_capacity(ascii.len());

    let mut gap = false;
    for byte in ascii.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'_' => {
                if gap && !slug.is_empty() {
                    slug.push('-');
                }

                gap = false;
                slug.push(byte as char);
            }
            b'A'..=b'Z' => {
                if gap && !slug.is_empty() {
                    slug.push('-');
                }

                gap = false;
                slug.push(byte.to_ascii_lowercase() as char);
            }
            _ => gap = true,
        }
    }

    slug
}
