use crate::models::{RawVideo, Video};

/// Maps query node records onto [`Video`]s, keeping their order.
///
/// Missing display fields become empty strings; `media_url` turns an id into
/// the playback address.
pub fn normalize<F>(records: Vec<RawVideo>, media_url: F) -> Vec<Video>
where
    F: Fn(&str) -> String,
{
    records
        .into_iter()
        .map(|record| Video {
            url: media_url(&record.id),
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            channel_name: record
                .channel
                .and_then(|channel| channel.title)
                .unwrap_or_default(),
            id: record.id,
        })
        .collect()
}

/// Shortens a description for the card overlay.
pub fn description_preview(description: &str, max_chars: usize) -> String {
    if description.chars().count() > max_chars {
        let head: String = description.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::media_url;
    use crate::models::RawChannel;

    fn raw(id: &str) -> RawVideo {
        RawVideo {
            id: id.to_string(),
            title: None,
            description: None,
            channel: None,
            media: None,
        }
    }

    #[test]
    fn fills_every_field_from_a_complete_record() {
        let record = RawVideo {
            title: Some("Sunset".to_string()),
            description: Some("Timelapse".to_string()),
            channel: Some(RawChannel {
                title: Some("Skies".to_string()),
            }),
            ..raw("7")
        };

        let videos = normalize(vec![record], |id| media_url("http://cdn", id));

        assert_eq!(
            videos,
            vec![Video {
                id: "7".to_string(),
                url: "http://cdn/video/7/media".to_string(),
                title: "Sunset".to_string(),
                description: "Timelapse".to_string(),
                channel_name: "Skies".to_string(),
            }]
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let untitled_channel = RawVideo {
            channel: Some(RawChannel { title: None }),
            ..raw("b")
        };

        let videos = normalize(vec![raw("a"), untitled_channel], |id| id.to_uppercase());

        for video in &videos {
            assert!(video.title.is_empty());
            assert!(video.description.is_empty());
            assert!(video.channel_name.is_empty());
        }
        assert_eq!(videos[0].url, "A");
    }

    #[test]
    fn preserves_input_order() {
        let ids: Vec<String> = normalize(vec![raw("3"), raw("1"), raw("2")], str::to_string)
            .into_iter()
            .map(|video| video.id)
            .collect();

        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(normalize(Vec::new(), str::to_string).is_empty());
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let long = "x".repeat(101);
        let preview = description_preview(&long, 100);
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));

        let exact = "y".repeat(100);
        assert_eq!(description_preview(&exact, 100), exact);
    }
}
