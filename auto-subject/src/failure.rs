use std::fmt;

/// Where an assertion is looking: the value under test and the path of
/// properties leading to the checked one.
///
/// Generated subjects receive one from [`assert_about`](crate::assert_about)
/// and hand a child to every nested subject, so a failure deep inside a value
/// reports the full path (`User.roles`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMetadata {
    path: Vec<String>,
}

impl FailureMetadata {
    /// Metadata for a value described by `root`.
    pub fn new(root: impl Into<String>) -> Self {
        FailureMetadata {
            path: vec![root.into()],
        }
    }

    /// Metadata for a value of type `T`, described by its short type name.
    pub fn for_type<T: ?Sized>() -> Self {
        FailureMetadata::new(short_type_name(std::any::type_name::<T>()))
    }

    /// Metadata for a property of the current value.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(name.into());
        FailureMetadata { path }
    }

    /// The dotted path, e.g. `User.roles`.
    pub fn path(&self) -> String {
        self.path.join(".")
    }

    /// Panics with a formatted failure at this path.
    #[track_caller]
    pub fn fail(&self, kind: FailureKind, actual: impl Into<String>, expected: impl Into<String>) -> ! {
        let failure = Failure {
            kind,
            path: self.path(),
            actual: actual.into(),
            expected: expected.into(),
        };
        panic!("{failure}")
    }
}

/// `alloc::vec::Vec<i32>` → `Vec`, `my_crate::model::User` → `User`.
fn short_type_name(name: &str) -> &str {
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}

/// What kind of check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Value,
    Boolean,
    Variant,
    Membership,
    Presence,
    Size,
    Type,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Value => write!(f, "value"),
            FailureKind::Boolean => write!(f, "boolean"),
            FailureKind::Variant => write!(f, "enum variant"),
            FailureKind::Membership => write!(f, "membership"),
            FailureKind::Presence => write!(f, "presence"),
            FailureKind::Size => write!(f, "size"),
            FailureKind::Type => write!(f, "type"),
        }
    }
}

/// A failed assertion. Its `Display` output is the panic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub path: String,
    pub actual: String,
    pub expected: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "auto_subject assertion failed:\n\n{} mismatch:\n  --> `{}`\n  actual: {}\n  expected: {}",
            self.kind,
            truncate_path(&self.path, 60),
            self.actual,
            self.expected
        )
    }
}

/// Shortens a dotted path to at most `max_len` bytes, cutting at property
/// boundaries and keeping the root and the innermost properties.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let ellipsis = "...";
    let parts: Vec<&str> = path.split('.').collect();

    if parts.len() <= 2 {
        let available = max_len.saturating_sub(ellipsis.len());
        let mut start = path.len().saturating_sub(available);
        while !path.is_char_boundary(start) {
            start += 1;
        }
        return format!("{ellipsis}{}", &path[start..]);
    }

    let first = parts[0];
    let mut length = first.len() + ellipsis.len();
    let mut tail = Vec::new();

    for part in parts[1..].iter().rev() {
        let part_len = part.len() + 1;
        if length + part_len > max_len {
            break;
        }
        length += part_len;
        tail.push(*part);
    }

    if tail.is_empty() {
        tail.push(parts[parts.len() - 1]);
    }
    tail.reverse();

    format!("{first}{ellipsis}{}", tail.join("."))
}
