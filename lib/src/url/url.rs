use std::ops::Deref;
use std::borrow::Borrow;

pub use super::UrlBuf;

/// A borrowed URL slice.
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Url(str);

impl Url {
    pub const fn new(from: &str) -> &Url {
        unsafe { &*(from as *const str as *const Url) }
    }

    pub const fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_url_buf(&self) -> UrlBuf {
        UrlBuf::from(self.0.to_owned())
    }

    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// assert_eq!(Url::new("https://rwf2.org").scheme(), Some("https"));
    /// assert_eq!(Url::new("mailto:foo@bar.com").scheme(), Some("mailto"));
    /// assert_eq!(Url::new("foo/bar.html").scheme(), None);
    /// assert_eq!(Url::new("foo?bar:baz").scheme(), None);
    /// assert_eq!(Url::new("foo#bar:baz").scheme(), None);
    /// ```
    pub fn scheme(&self) -> Option<&str> {
        let bytes = self.as_bytes();
        match memchr::memchr3(b':', b'/', b'?', bytes) {
            Some(i) if bytes[i] == b':' => match memchr::memchr(b'#', &bytes[..i]) {
                Some(_) => None,
                None => Some(&self[..i]),
            }
            _ => None,
        }
    }

    /// A fragment-only reference into the current document.
    pub fn is_fragment(&self) -> bool {
        self.starts_with('#')
    }

    /// Whether the URL points outside the book: an optional scheme followed
    /// by an authority (`//`), or a protocol-relative `//`. A `mailto:`-style
    /// URL has a scheme but no authority and is *not* external; it gets
    /// rebased like any other relative link.
    ///
    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// assert!(Url::new("https://example.com/x").is_external());
    /// assert!(Url::new("//cdn.example.com/x.css").is_external());
    /// assert!(!Url::new("mailto:foo@bar.com").is_external());
    /// assert!(!Url::new("part-guide/io.html").is_external());
    /// assert!(!Url::new("#overview").is_external());
    /// ```
    pub fn is_external(&self) -> bool {
        let rest = match self.scheme() {
            Some(scheme) => &self[scheme.len() + 1..],
            None => self.as_str(),
        };

        rest.starts_with("//")
    }

    /// The resource part: everything before the first `#` or `?`.
    ///
    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// assert_eq!(Url::new("a.html?q=1#top").resource().as_str(), "a.html");
    /// assert_eq!(Url::new("a.html#top?x").resource().as_str(), "a.html");
    /// assert_eq!(Url::new("a.html").resource().as_str(), "a.html");
    /// ```
    pub fn resource(&self) -> &Url {
        match memchr::memchr2(b'#', b'?', self.as_bytes()) {
            Some(i) => Url::new(&self[..i]),
            None => self,
        }
    }

    /// The directory portion, up to and including the final `/`.
    ///
    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// assert_eq!(Url::new("guide/io.html").directory().as_str(), "guide/");
    /// assert_eq!(Url::new("io.html").directory().as_str(), "");
    /// assert_eq!(Url::new("guide/").directory().as_str(), "guide/");
    /// ```
    pub fn directory(&self) -> &Url {
        match memchr::memrchr(b'/', self.as_bytes()) {
            Some(i) => Url::new(&self[..=i]),
            None => Url::new(""),
        }
    }

    /// Whether the URL names `document` as its final path segment.
    ///
    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// assert!(Url::new("index.html").names("index.html"));
    /// assert!(Url::new("https://x.y/index.html").names("index.html"));
    /// assert!(!Url::new("guide/my-index.html").names("index.html"));
    /// assert!(!Url::new("guide/io.html").names("index.html"));
    /// ```
    pub fn names(&self, document: &str) -> bool {
        if !self.ends_with(document) {
            return false;
        }

        let head = &self[..self.len() - document.len()];
        head.is_empty() || head.ends_with('/')
    }

    /// Prefix a book-relative URL with the path back to the book root.
    /// Fragment references and external URLs are returned untouched.
    ///
    /// ```rust
    /// use waxwing::url::Url;
    ///
    /// let root = Url::new("../../");
    /// assert_eq!(Url::new("guide/io.html").rebase(root).as_str(), "../../guide/io.html");
    /// assert_eq!(Url::new("#overview").rebase(root).as_str(), "#overview");
    /// assert_eq!(Url::new("https://example.com/x").rebase(root).as_str(), "https://example.com/x");
    /// assert_eq!(Url::new("//cdn.example.com/x").rebase(root).as_str(), "//cdn.example.com/x");
    ///
    /// // No authority means not external, so a `mailto:` gets rebased too.
    /// assert_eq!(Url::new("mailto:a@b.c").rebase(root).as_str(), "../../mailto:a@b.c");
    /// ```
    pub fn rebase(&self, path_to_root: &Url) -> UrlBuf {
        if self.is_fragment() || self.is_external() {
            return self.to_url_buf();
        }

        let mut url = String::with_capacity(path_to_root.len() + self.len());
        url.push_str(path_to_root.as_str());
        url.push_str(self.as_str());
        UrlBuf::from(url)
    }
}

impl<'a> From<&'a str> for &'a Url {
    fn from(value: &'a str) -> Self {
        Url::new(value)
    }
}

impl Deref for Url {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Borrow<str> for Url {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<Url> for str {
    fn as_ref(&self) -> &Url {
        Url::new(self)
    }
}

impl AsRef<Url> for Url {
    fn as_ref(&self) -> &Url {
        self
    }
}

impl ToOwned for Url {
    type Owned = UrlBuf;

    fn to_owned(&self) -> Self::Owned {
        self.to_url_buf()
    }
}
