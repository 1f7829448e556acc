//! GraphQL documents and wire shapes for the Omnivore API.

use serde::{Deserialize, Serialize};

use crate::types::{Article, ArticlesPage, Highlight, PageInfo, Profile};

pub(crate) const VIEWER_QUERY: &str = r#"
query Viewer {
  me {
    id
    name
    profile {
      username
    }
  }
}
"#;

pub(crate) const SEARCH_QUERY: &str = r#"
query Search($after: String, $first: Int, $query: String) {
  search(after: $after, first: $first, query: $query, includeContent: false) {
    ... on SearchSuccess {
      edges {
        cursor
        node {
          id
          title
          highlights {
            quote
            labels {
              name
            }
          }
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
    ... on SearchError {
      errorCodes
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub(crate) struct NoVariables {}

#[derive(Debug, Serialize)]
pub(crate) struct SearchVariables<'a> {
    pub after: Option<&'a str>,
    pub first: u32,
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewerData {
    pub me: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireUser {
    pub id: String,
    pub name: Option<String>,
    pub profile: Option<WireProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProfile {
    pub username: Option<String>,
}

impl From<WireUser> for Profile {
    fn from(u: WireUser) -> Self {
        Profile {
            id: u.id,
            name: u.name,
            username: u.profile.and_then(|p| p.username),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    pub search: SearchResult,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResult {
    Success {
        edges: Vec<WireEdge>,
        #[serde(rename = "pageInfo")]
        page_info: WirePageInfo,
    },
    Error {
        #[serde(rename = "errorCodes")]
        error_codes: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireEdge {
    pub node: WireArticle,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireArticle {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<WireHighlight>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireHighlight {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<WireLabel>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(a: WireArticle) -> Self {
        Article {
            id: a.id,
            title: a.title.unwrap_or_default(),
            highlights: a
                .highlights
                .unwrap_or_default()
                .into_iter()
                .map(|h| Highlight {
                    quote: h.quote.unwrap_or_default(),
                    labels: h
                        .labels
                        .unwrap_or_default()
                        .into_iter()
                        .map(|l| l.name)
                        .collect(),
                })
                .collect(),
        }
    }
}

pub(crate) fn into_page(edges: Vec<WireEdge>, page_info: WirePageInfo) -> ArticlesPage {
    ArticlesPage {
        articles: edges.into_iter().map(|e| e.node.into()).collect(),
        page_info: PageInfo {
            has_next_page: page_info.has_next_page,
            end_cursor: page_info.end_cursor,
        },
    }
}
