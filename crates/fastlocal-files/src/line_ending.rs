//! Line terminators.

use std::borrow::Cow;
use std::fmt;

/// A line terminator.
///
/// # Examples
///
/// ```
/// use fastlocal_files::LineEnding;
///
/// assert_eq!(LineEnding::Lf.terminate("hello"), "hello\n");
/// assert_eq!(LineEnding::Lf.terminate("hello\n"), "hello\n");
/// assert_eq!(LineEnding::CrLf.terminate("hello\n"), "hello\n\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the terminator of the compilation target: `\r\n` on Windows,
    /// `\n` everywhere else.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    /// Returns the terminator bytes as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Appends the terminator to `content` unless it already ends with it.
    ///
    /// Applying this twice gives the same result as applying it once.
    #[must_use]
    pub fn terminate(self, content: &str) -> Cow<'_, str> {
        let terminator = self.as_str();
        if content.ends_with(terminator) {
            Cow::Borrowed(content)
        } else {
            let mut owned = String::with_capacity(content.len() + terminator.len());
            owned.push_str(content);
            owned.push_str(terminator);
            Cow::Owned(owned)
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::CrLf => f.write_str("CRLF"),
        }
    }
}
