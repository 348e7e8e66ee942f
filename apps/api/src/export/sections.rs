//! Section Parser — splits the generated markdown into titled sections.
//!
//! Only lines starting (at column 0) with two or more `#` open a section.
//! A level-1 `# Title` line is ordinary body text. Text ahead of the first
//! section heading is discarded; a document without any section heading
//! becomes a single section titled [`FALLBACK_TITLE`].
//!
//! Titles act as keys: a repeated title replaces the earlier body but keeps
//! the position where the title first appeared.

use std::slice;

/// Title used when the document contains no section heading.
pub const FALLBACK_TITLE: &str = "Estimate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Sections in first-seen order, unique by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<Section>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section, or replaces the body of an existing one with the same title.
    pub fn insert(&mut self, title: &str, body: &str) {
        match self.entries.iter_mut().find(|s| s.title == title) {
            Some(existing) => existing.body = body.to_string(),
            None => self.entries.push(Section {
                title: title.to_string(),
                body: body.to_string(),
            }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.body.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Section> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

enum ParseState<'a> {
    AwaitingHeading,
    /// `body_start` is the byte offset just past the heading line.
    InBody { title: &'a str, body_start: usize },
}

/// Parses `markdown` into ordered sections with a single forward scan.
pub fn parse_sections(markdown: &str) -> Sections {
    let mut sections = Sections::new();
    let mut state = ParseState::AwaitingHeading;
    let mut offset = 0;

    for line in markdown.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(title) = heading_title(line) else {
            continue;
        };

        if let ParseState::InBody {
            title: open_title,
            body_start,
        } = state
        {
            sections.insert(open_title, markdown[body_start..line_start].trim());
        }
        state = ParseState::InBody {
            title,
            body_start: offset,
        };
    }

    if let ParseState::InBody { title, body_start } = state {
        sections.insert(title, markdown[body_start..].trim());
    }

    if sections.is_empty() {
        sections.insert(FALLBACK_TITLE, markdown.trim());
    }

    sections
}

/// Returns the title if `line` is a level-2-or-deeper heading with a non-empty title.
fn heading_title(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    if line.len() - rest.len() < 2 {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}
