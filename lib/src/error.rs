use std::{fmt, io};
use std::panic::Location;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A chainable, context-carrying error.
///
/// Each link holds a message, a set of `key: value` context pairs, and
/// optionally the error that preceded it. Links are created with the
/// [`error!`] and [`err!`] macros and joined with [`Chainable`].
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    context: Vec<(Option<String>, String)>,
    prev: Option<Box<Error>>,
    _location: &'static Location<'static>,
}

impl Error {
    #[track_caller]
    pub fn new(message: String, context: Vec<(Option<String>, String)>) -> Self {
        Error {
            message,
            context,
            prev: None,
            _location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn from_std<E>(error: E) -> Self
        where E: StdError + Send + Sync + 'static
    {
        let mut context = vec![];
        let mut source = error.source();
        while let Some(e) = source {
            context.push((None, e.to_string()));
            source = e.source();
        }

        Error::new(error.to_string(), context)
    }

    /// Makes `self` the deepest cause of `other`, returning `other`.
    pub fn chain(self, mut other: Error) -> Self {
        #[inline]
        fn _chain(error: Error, behind: &mut Error) {
            match behind.prev.as_mut() {
                Some(prev) => _chain(error, prev),
                None => behind.prev = Some(Box::new(error)),
            }
        }

        _chain(self, &mut other);
        other
    }
}

macro_rules! impl_from_std_error {
    ($T:ty) => {
        impl From<$T> for Error {
            #[track_caller]
            fn from(error: $T) -> Self {
                Error::from_std(error)
            }
        }
    }
}

impl_from_std_error!(io::Error);
impl_from_std_error!(toml::de::Error);
impl_from_std_error!(serde_json::Error);

impl From<String> for Error {
    #[track_caller]
    fn from(message: String) -> Self {
        Error::new(message, vec![])
    }
}

impl From<&str> for Error {
    #[track_caller]
    fn from(message: &str) -> Self {
        Error::new(message.into(), vec![])
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[derive(Copy, Clone)] struct Indent(usize);

        impl fmt::Display for Indent {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for _ in 0..(self.0 * 4) { write!(f, " ")? }
                Ok(())
            }
        }

        fn _fmt(error: &Error, indent: Indent, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let indent_line = format!("\n{indent}");
            writeln!(f, "{indent}{}", error.message.replace('\n', &indent_line))?;

            for (key, value) in &error.context {
                let value = value.replace('\n', &indent_line);
                match key {
                    Some(key) => writeln!(f, "{indent}{key}: {value}")?,
                    None => writeln!(f, "{indent}{value}")?,
                }
            }

            if std::env::var_os("RUST_BACKTRACE").is_some() {
                writeln!(f, "{indent}[{}]", error._location)?;
            }

            match &error.prev {
                Some(prev) => _fmt(prev, Indent(indent.0 + 1), f),
                None => Ok(())
            }
        }

        _fmt(self, Indent(0), f)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($msg:expr $(, $($rest:tt)*)?) => (
        $crate::error::Error::new($msg.to_string(), {
            #[allow(unused_mut)]
            let mut context: Vec<(Option<String>, String)> = Vec::new();
            $($crate::error!(@context context $($rest)*);)?
            context
        })
    );

    (@context $v:ident $key:expr => $value:expr, $($rest:tt)*) => {
        $crate::error!(@context $v $key => $value);
        $crate::error!(@context $v $($rest)*);
    };

    (@context $v:ident $key:expr => $value:expr) => {
        $v.push((Some($key.to_string()), $value.to_string()));
    };

    (@context $v:ident $value:expr, $($rest:tt)*) => {
        $crate::error!(@context $v $value);
        $crate::error!(@context $v $($rest)*);
    };

    (@context $v:ident $value:expr) => {
        $v.push((None, $value.to_string()));
    };

    (@context $v:ident $(,)?) => { };
}

pub trait Chainable<T> {
    fn chain(self, other: impl Into<Error>) -> Result<T>;

    fn chain_with<F, E>(self, f: F) -> Result<T>
        where F: FnOnce() -> E, E: Into<Error>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    #[track_caller]
    fn chain(self, other: impl Into<Error>) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().chain(other.into()))
        }
    }

    fn chain_with<F, C>(self, f: F) -> Result<T>
        where F: FnOnce() -> C, C: Into<Error>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().chain(f().into()))
        }
    }
}
