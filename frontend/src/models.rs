use serde::{Deserialize, Serialize};

/// A playable short, normalized from the query node's record.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawChannel {
    pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawMedia {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawVideo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel: Option<RawChannel>,
    pub media: Option<RawMedia>,
}

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoShortsData {
    pub videos: Vec<RawVideo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}
