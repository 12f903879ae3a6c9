use std::fmt;

/// One step of a [`Path`]: an object key or an array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Key of an object member.
    Key(&'a str),
    /// Zero-based position of an array element.
    Index(usize),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        Segment::Key(value)
    }
}

impl From<usize> for Segment<'_> {
    fn from(value: usize) -> Self {
        Segment::Index(value)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => f.write_str(itoa::Buffer::new().format(*index)),
        }
    }
}

/// Key/index trail from the root of a document to one of its nodes.
///
/// A path is an immutable value: descending into a child extends the chain
/// by borrowing the parent link, so no accumulator is shared or mutated
/// across recursion. Predicates passed to
/// [`filter_with_path`](crate::JsonValue::filter_with_path) inspect the
/// trail through [`segments`](Path::segments), [`tokens`](Path::tokens),
/// [`last`](Path::last), or the `/`-separated `Display` form (`/a/0/b`; the
/// root renders as an empty string).
#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    segment: Option<Segment<'a>>,
    parent: Option<&'a Path<'a>>,
}

impl<'a> Path<'a> {
    pub(crate) fn root() -> Self {
        Self {
            segment: None,
            parent: None,
        }
    }

    pub(crate) fn push(&'a self, segment: impl Into<Segment<'a>>) -> Path<'a> {
        Path {
            segment: Some(segment.into()),
            parent: Some(self),
        }
    }

    /// Typed segments in root-first order.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(path) = current {
            if let Some(segment) = path.segment {
                segments.push(segment);
            }
            current = path.parent;
        }
        segments.reverse();
        segments
    }

    /// String tokens in root-first order: keys verbatim, indexes in decimal.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.segments().iter().map(ToString::to_string).collect()
    }

    /// The innermost segment, or `None` at the root.
    #[must_use]
    pub fn last(&self) -> Option<Segment<'a>> {
        self.segment
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            parent.fmt(f)?;
        }
        if let Some(segment) = self.segment {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
