//! Feed types handed to the highlight pipeline.

use serde::{Deserialize, Serialize};

/// The account behind a credential. Only its presence matters to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
}

/// A quoted excerpt and the labels attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub quote: String,
    pub labels: Vec<String>,
}

impl Highlight {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub highlights: Vec<Highlight>,
}

impl Article {
    /// True iff at least one highlight carries `label`. No highlights means false.
    pub fn qualifies(&self, label: &str) -> bool {
        self.highlights.iter().any(|h| h.has_label(label))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Cursor for the following page; None when the feed reports no next page.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// One page of search results, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesPage {
    pub articles: Vec<Article>,
    pub page_info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(highlights: Vec<Highlight>) -> Article {
        Article {
            id: "a1".to_string(),
            title: "Title".to_string(),
            highlights,
        }
    }

    fn highlight(labels: &[&str]) -> Highlight {
        Highlight {
            quote: "quote".to_string(),
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_qualifies_with_matching_label() {
        let a = article(vec![highlight(&["misc"]), highlight(&["reading", "x"])]);
        assert!(a.qualifies("reading"));
    }

    #[test]
    fn test_does_not_qualify_without_label() {
        let a = article(vec![highlight(&["misc"]), highlight(&[])]);
        assert!(!a.qualifies("reading"));
    }

    #[test]
    fn test_no_highlights_never_qualifies() {
        assert!(!article(vec![]).qualifies("reading"));
        assert!(!article(vec![]).qualifies(""));
    }

    #[test]
    fn test_label_match_is_exact() {
        let a = article(vec![highlight(&["Reading"])]);
        assert!(!a.qualifies("reading"));
    }

    #[test]
    fn test_next_cursor() {
        let more = PageInfo {
            has_next_page: true,
            end_cursor: Some("20".to_string()),
        };
        let last = PageInfo {
            has_next_page: false,
            end_cursor: Some("30".to_string()),
        };
        assert_eq!(more.next_cursor(), Some("20"));
        assert_eq!(last.next_cursor(), None);
        assert_eq!(PageInfo::default().next_cursor(), None);
    }
}
