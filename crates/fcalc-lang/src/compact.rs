use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::Deref,
};

/// Number of bytes a [`CompactString`] keeps inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = mem::size_of::<usize>();

#[derive(Clone)]
enum Repr {
    Inline { len: u8, buf: [u8; INLINE_CAPACITY] },
    Heap(Box<str>),
}

/// An owned string that stores short content inline and longer content in
/// an exactly-sized heap buffer.
///
/// Content of up to [`INLINE_CAPACITY`] bytes never allocates. Equality,
/// ordering and hashing only look at the content, so two strings holding the
/// same text compare equal whatever storage they use.
#[derive(Clone)]
pub struct CompactString(Repr);

impl CompactString {
    /// Creates a string by copying `s`, choosing inline or heap storage by length.
    pub fn new(s: &str) -> Self {
        if s.len() <= INLINE_CAPACITY {
            let mut buf = [0u8; INLINE_CAPACITY];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            Self(Repr::Inline {
                len: s.len() as u8,
                buf,
            })
        } else {
            Self(Repr::Heap(Box::from(s)))
        }
    }

    /// Returns the content as a string slice.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            // Inline bytes are always copied whole from a `&str`.
            Repr::Inline { len, buf } => std::str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
            Repr::Heap(s) => s,
        }
    }

    /// Alias of [`CompactString::as_str`].
    #[inline]
    pub fn view(&self) -> &str {
        self.as_str()
    }

    /// Returns the content length in bytes.
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap(s) => s.len(),
        }
    }

    /// Alias of [`CompactString::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the string has no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the content lives inside the value itself.
    pub fn is_inline(&self) -> bool {
        matches!(self.0, Repr::Inline { .. })
    }

    /// Moves the content out, leaving an empty string behind.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl Default for CompactString {
    fn default() -> Self {
        Self(Repr::Inline {
            len: 0,
            buf: [0u8; INLINE_CAPACITY],
        })
    }
}

impl Deref for CompactString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for CompactString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CompactString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for CompactString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CompactString {
    fn from(s: String) -> Self {
        if s.len() <= INLINE_CAPACITY {
            Self::new(&s)
        } else {
            Self(Repr::Heap(s.into_boxed_str()))
        }
    }
}

impl From<&CompactString> for String {
    fn from(s: &CompactString) -> Self {
        s.as_str().to_string()
    }
}

impl PartialEq for CompactString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CompactString {}

impl PartialEq<str> for CompactString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CompactString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for CompactString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CompactString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for CompactString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl fmt::Display for CompactString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CompactString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
