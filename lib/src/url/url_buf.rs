use std::fmt;
use std::ops::Deref;
use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

pub use super::Url;

/// An owned URL buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct UrlBuf(String);

impl UrlBuf {
    pub fn new() -> UrlBuf {
        UrlBuf(String::new())
    }

    pub fn as_url(&self) -> &Url {
        Url::new(self.0.as_str())
    }

    /// Treat a directory URL as its index document: if the URL is empty or
    /// ends in `/`, append `document`.
    ///
    /// ```rust
    /// use waxwing::url::UrlBuf;
    ///
    /// let mut url = UrlBuf::from("guide/");
    /// url.ensure_document("index.html");
    /// assert_eq!(url.as_str(), "guide/index.html");
    ///
    /// let mut url = UrlBuf::from("");
    /// url.ensure_document("index.html");
    /// assert_eq!(url.as_str(), "index.html");
    ///
    /// let mut url = UrlBuf::from("guide/io.html");
    /// url.ensure_document("index.html");
    /// assert_eq!(url.as_str(), "guide/io.html");
    /// ```
    pub fn ensure_document(&mut self, document: &str) -> &mut Self {
        if self.0.is_empty() || self.0.ends_with('/') {
            self.0.push_str(document);
        }

        self
    }

    /// Resolve `rel` against this URL's directory and collapse dot segments.
    /// An external `rel` replaces `self` entirely.
    ///
    /// ```rust
    /// use waxwing::url::{Url, UrlBuf};
    ///
    /// let page = UrlBuf::from("guide/io.html");
    /// assert_eq!(page.join(Url::new("../intro.html")).as_str(), "intro.html");
    /// assert_eq!(page.join(Url::new("sync.html")).as_str(), "guide/sync.html");
    /// assert_eq!(page.join(Url::new("./sync.html")).as_str(), "guide/sync.html");
    ///
    /// let page = UrlBuf::from("https://x.y/book/guide/io.html");
    /// assert_eq!(
    ///     page.join(Url::new("../nav/topics.html")).as_str(),
    ///     "https://x.y/book/nav/topics.html",
    /// );
    ///
    /// assert_eq!(
    ///     page.join(Url::new("https://other.example/z")).as_str(),
    ///     "https://other.example/z",
    /// );
    /// ```
    pub fn join(&self, rel: &Url) -> UrlBuf {
        if rel.is_external() {
            return rel.to_url_buf();
        }

        let mut joined = self.directory().to_url_buf();
        joined.0.push_str(rel.as_str());
        joined.collapse()
    }

    /// Remove `.` and `..` segments without touching a scheme or authority.
    ///
    /// ```rust
    /// use waxwing::url::UrlBuf;
    ///
    /// let url = UrlBuf::from("guide/../nav/./topics.html");
    /// assert_eq!(url.collapse().as_str(), "nav/topics.html");
    ///
    /// let url = UrlBuf::from("https://x.y/a/../b.html");
    /// assert_eq!(url.collapse().as_str(), "https://x.y/b.html");
    /// ```
    pub fn collapse(&self) -> UrlBuf {
        let (site, path) = self.split_site();

        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "." => continue,
                ".." => { segments.pop(); }
                _ => segments.push(segment),
            }
        }

        let mut url = String::from(site);
        url.push_str(&segments.join("/"));
        UrlBuf(url)
    }

    /// Split into `(scheme + authority, path)`; the first part is empty for
    /// anything that is not external.
    fn split_site(&self) -> (&str, &str) {
        if !self.is_external() {
            return ("", self.0.as_str());
        }

        let start = match self.scheme() {
            Some(scheme) => scheme.len() + 3,
            None => 2,
        };

        match memchr::memchr(b'/', &self.0.as_bytes()[start..]) {
            Some(i) => self.0.split_at(start + i),
            None => (self.0.as_str(), ""),
        }
    }
}

impl From<String> for UrlBuf {
    fn from(value: String) -> Self {
        UrlBuf(value)
    }
}

impl From<&str> for UrlBuf {
    fn from(value: &str) -> Self {
        UrlBuf(value.into())
    }
}

impl From<&Url> for UrlBuf {
    fn from(value: &Url) -> Self {
        value.to_url_buf()
    }
}

impl From<UrlBuf> for String {
    fn from(value: UrlBuf) -> Self {
        value.0
    }
}

impl Deref for UrlBuf {
    type Target = Url;

    fn deref(&self) -> &Self::Target {
        self.as_url()
    }
}

impl AsRef<Url> for UrlBuf {
    fn as_ref(&self) -> &Url {
        self.as_url()
    }
}

impl Borrow<Url> for UrlBuf {
    fn borrow(&self) -> &Url {
        self.as_url()
    }
}

impl AsRef<str> for UrlBuf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for UrlBuf {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UrlBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
