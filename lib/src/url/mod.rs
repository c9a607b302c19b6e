//! Link classification, normalization, and resolution.
//!
//! The sidebar deals exclusively in page-relative URLs: outline targets are
//! written relative to the book root and rebased per page, and the current
//! location is normalized before it is compared against them. [`Url`] is the
//! borrowed view, [`UrlBuf`] the owned buffer, mirroring `str`/`String`.

mod url;
mod url_buf;

pub use url::*;
pub use url_buf::*;

#[cfg(test)] static_assertions::assert_eq_size!(*const Url, *const str);
#[cfg(test)] static_assertions::assert_eq_align!(*const Url, *const str);
#[cfg(test)] static_assertions::assert_eq_size!(&Url, &str);
#[cfg(test)] static_assertions::assert_eq_align!(&Url, &str);
