//! Source files and the map that owns them.
//!
//! Spans refer to a file by [`SourceId`] so that they stay `Copy`; the file
//! name and text live here and are looked up when a diagnostic is rendered.

use std::fmt;

/// Index of a file in a [`SourceMap`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct SourceId(u32);

impl SourceId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SourceId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({})", self.0)
    }
}

/// A named chunk of program text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Text of the zero-based line `line`, without its terminator.
    pub fn line_text(&self, line: u32) -> &str {
        self.text.split('\n').nth(line as usize).unwrap_or("")
    }
}

/// Every file seen during a run, including ones loaded by `RUN`.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return its id.
    pub fn add(&mut self, file: SourceFile) -> SourceId {
        let id = SourceId(self.files.len() as u32);
        self.files.push(file);
        id
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceFile> {
        self.files.get(id.0 as usize)
    }

    /// Name of a file, or `<unknown>` for an id from another map.
    pub fn name(&self, id: SourceId) -> &str {
        self.get(id).map_or("<unknown>", |file| file.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests;
