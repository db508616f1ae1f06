//! Per-node detail content for the secondary pane.

use serde::Deserialize;

/// Inspection modes available for the node selected in the primary pane.
///
/// Each mode displays a different slice of the node's detail content; the
/// secondary pane remembers its position independently per (node, mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailMode {
    /// File metadata and direct dependencies
    #[default]
    FileInfo,
    /// Dynamic and regular symbol tables
    Symbols,
    /// Dynamic-table entries
    Dynamic,
    /// Section headers
    Sections,
}

impl DetailMode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FileInfo => "File Info",
            Self::Symbols => "Symbols",
            Self::Dynamic => "Dynamic",
            Self::Sections => "Sections",
        }
    }

    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::FileInfo => 'f',
            Self::Symbols => 'y',
            Self::Dynamic => 'd',
            Self::Sections => 's',
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::FileInfo, Self::Symbols, Self::Dynamic, Self::Sections]
    }
}

/// One titled block of pre-formatted detail rows.
///
/// Rows are opaque strings; the viewer clips and draws them but never
/// interprets their contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailSection {
    pub title: String,
    #[serde(default)]
    pub rows: Vec<String>,
}

impl DetailSection {
    #[must_use]
    pub fn new(title: impl Into<String>, rows: Vec<String>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// All detail content supplied for one graph node, one list of sections per
/// inspection mode. Missing lists simply render as an empty detail pane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeDetails {
    pub file: Vec<DetailSection>,
    pub symbols: Vec<DetailSection>,
    pub dynamic: Vec<DetailSection>,
    pub sections: Vec<DetailSection>,
}

impl NodeDetails {
    #[must_use]
    pub fn for_mode(&self, mode: DetailMode) -> &[DetailSection] {
        match mode {
            DetailMode::FileInfo => &self.file,
            DetailMode::Symbols => &self.symbols,
            DetailMode::Dynamic => &self.dynamic,
            DetailMode::Sections => &self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_titles_and_shortcuts_unique() {
        let titles: Vec<_> = DetailMode::all().iter().map(|m| m.title()).collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles, deduped);

        let shortcuts: Vec<_> = DetailMode::all().iter().map(|m| m.shortcut()).collect();
        assert_eq!(shortcuts, vec!['f', 'y', 'd', 's']);
    }

    #[test]
    fn test_for_mode_selects_matching_sections() {
        let details = NodeDetails {
            file: vec![DetailSection::new("File Info", vec!["  Path: /bin/ls".into()])],
            symbols: vec![],
            dynamic: vec![DetailSection::new("Dynamic Info", vec![])],
            sections: vec![],
        };

        assert_eq!(details.for_mode(DetailMode::FileInfo).len(), 1);
        assert_eq!(details.for_mode(DetailMode::Symbols).len(), 0);
        assert_eq!(details.for_mode(DetailMode::Dynamic)[0].title, "Dynamic Info");
    }

    #[test]
    fn test_deserialize_partial_details() {
        let details: NodeDetails = serde_json::from_str(
            r#"{"file": [{"title": "File Info", "rows": ["  Type: DYN"]}]}"#,
        )
        .expect("valid details");

        assert_eq!(details.file.len(), 1);
        assert!(details.symbols.is_empty());
    }
}
