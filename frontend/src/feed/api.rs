use crate::catalog::normalize;
use crate::config::{configured_media_url, FEED_BATCH_SIZE};
use crate::env_variable_utils::GRAPHQL_URL;
use crate::error::FeedError;
use crate::models::{GraphqlRequest, GraphqlResponse, RawVideo, Video, VideoShortsData};
use gloo_net::http::Request;

const GET_VIDEO_SHORTS: &str = "query GetVideoShorts {
  videos(
    where: {isShort_eq: true, isPublic_eq: true, media: {isAccepted_eq: true}}
    orderBy: [createdAt_DESC]
    limit: 15
  ) {
    id
    title
    description
    channel {
      title
    }
    media {
      id
    }
  }
}";

/// Fetches the newest public, accepted shorts from the query node.
pub async fn fetch_video_shorts() -> Result<Vec<RawVideo>, FeedError> {
    let request_body = GraphqlRequest {
        query: GET_VIDEO_SHORTS,
        operation_name: "GetVideoShorts",
    };

    let graphql_url = &*GRAPHQL_URL;
    let response = Request::post(graphql_url)
        .json(&request_body)?
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !response.ok() {
        return Err(FeedError::FetchFailed(format!("HTTP {status} - {text}")));
    }

    let mut records = parse_video_shorts(&text)?;
    records.truncate(FEED_BATCH_SIZE);
    Ok(records)
}

/// Fetches and normalizes the feed in one go.
pub async fn load_videos() -> Result<Vec<Video>, FeedError> {
    let records = fetch_video_shorts().await?;
    log::info!("Fetched {} shorts", records.len());
    Ok(normalize(records, configured_media_url))
}

pub fn parse_video_shorts(body: &str) -> Result<Vec<RawVideo>, FeedError> {
    let response: GraphqlResponse<VideoShortsData> = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(FeedError::FetchFailed(messages.join("; ")));
    }

    response
        .data
        .map(|data| data.videos)
        .ok_or_else(|| FeedError::FetchFailed("Response contained no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_successful_response() {
        let body = r#"{
            "data": {
                "videos": [
                    {"id": "1", "title": "One", "description": null, "channel": {"title": "Chan"}, "media": {"id": "m1"}},
                    {"id": "2", "title": null, "description": "Two", "channel": {"title": null}, "media": null}
                ]
            }
        }"#;

        let records = parse_video_shorts(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].channel.as_ref().unwrap().title.as_deref(), Some("Chan"));
        assert_eq!(records[1].description.as_deref(), Some("Two"));
        assert!(records[1].media.is_none());
    }

    #[test]
    fn graphql_errors_fail_the_fetch() {
        let body = r#"{"data": null, "errors": [{"message": "bad field"}, {"message": "boom"}]}"#;

        assert_eq!(
            parse_video_shorts(body),
            Err(FeedError::FetchFailed("bad field; boom".to_string()))
        );
    }

    #[test]
    fn missing_data_fails_the_fetch() {
        assert!(matches!(
            parse_video_shorts("{}"),
            Err(FeedError::FetchFailed(_))
        ));
    }

    #[test]
    fn malformed_body_fails_the_fetch() {
        let err = parse_video_shorts("<html>gateway timeout</html>").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load videos: Failed to parse response"));
    }

    #[test]
    fn query_asks_for_the_batch_size() {
        assert!(GET_VIDEO_SHORTS.contains(&format!("limit: {FEED_BATCH_SIZE}")));
    }
}
