use crate::config::VISIBLE_STACK_SIZE;
use crate::error::FeedError;
use crate::models::{SwipeDirection, Video};
use std::rc::Rc;
use yew::functional::Reducible;

/// The fetched feed, the cursor into it and what has been liked so far.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    videos: Vec<Video>,
    current_index: usize,
    liked_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedVideo {
    pub video: Video,
    /// 0 is the interactive card in front, higher values sit behind it.
    pub position: usize,
}

impl FeedState {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos,
            current_index: 0,
            liked_ids: Vec::new(),
        }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn liked_ids(&self) -> &[String] {
        &self.liked_ids
    }

    pub fn current(&self) -> Option<&Video> {
        self.videos.get(self.current_index)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.videos.len()
    }

    pub fn remaining(&self) -> usize {
        self.videos.len() - self.current_index
    }

    pub fn visible_stack(&self) -> Vec<StackedVideo> {
        self.videos
            .iter()
            .skip(self.current_index)
            .take(VISIBLE_STACK_SIZE)
            .enumerate()
            .map(|(position, video)| StackedVideo {
                video: video.clone(),
                position,
            })
            .collect()
    }

    /// Records a finished swipe on the head of the feed and advances past it.
    ///
    /// A report for anything other than the current head (typically a second
    /// completion signal for a card that was already consumed) leaves the
    /// state untouched.
    pub fn on_swipe_completed(
        &mut self,
        direction: SwipeDirection,
        video_id: &str,
    ) -> Result<(), FeedError> {
        let expected = self.current().map(|video| video.id.clone());
        if expected.as_deref() != Some(video_id) {
            return Err(FeedError::InvariantViolation {
                reported: video_id.to_string(),
                expected,
            });
        }

        if direction == SwipeDirection::Right {
            self.liked_ids.push(video_id.to_string());
        }
        self.current_index += 1;
        Ok(())
    }
}

/// What the feed page shows: the outcome of the one-shot fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedLoad {
    #[default]
    Pending,
    Loaded(FeedState),
    Failed(FeedError),
}

pub enum FeedAction {
    Fetched(Result<Vec<Video>, FeedError>),
    SwipeCompleted {
        direction: SwipeDirection,
        video_id: String,
    },
}

impl Reducible for FeedLoad {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FeedAction::Fetched(result) => {
                // The fetch is one-shot, a late second result changes nothing.
                if !matches!(*self, FeedLoad::Pending) {
                    return self;
                }
                Rc::new(match result {
                    Ok(videos) => FeedLoad::Loaded(FeedState::new(videos)),
                    Err(e) => {
                        log::error!("{e}");
                        FeedLoad::Failed(e)
                    }
                })
            }
            FeedAction::SwipeCompleted {
                direction,
                video_id,
            } => {
                let FeedLoad::Loaded(state) = &*self else {
                    return self;
                };
                let mut next = state.clone();
                match next.on_swipe_completed(direction, &video_id) {
                    Ok(()) => {
                        log::debug!(
                            "Swiped {:?} on {}, {} left",
                            direction,
                            video_id,
                            next.remaining()
                        );
                        Rc::new(FeedLoad::Loaded(next))
                    }
                    Err(e) => {
                        log::warn!("Ignoring swipe: {e}");
                        self
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SwipeDirection::{Left, Right};

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            url: format!("http://cdn/video/{id}/media"),
            title: String::new(),
            description: String::new(),
            channel_name: String::new(),
        }
    }

    fn feed(ids: &[&str]) -> FeedState {
        FeedState::new(ids.iter().map(|id| video(id)).collect())
    }

    fn stack_ids(state: &FeedState) -> Vec<String> {
        state
            .visible_stack()
            .into_iter()
            .map(|stacked| stacked.video.id)
            .collect()
    }

    #[test]
    fn walks_the_example_feed_to_the_end() {
        let mut state = feed(&["a", "b", "c"]);
        assert_eq!(stack_ids(&state), vec!["a", "b", "c"]);

        state.on_swipe_completed(Right, "a").unwrap();
        assert_eq!(state.liked_ids(), ["a"]);
        assert_eq!(state.current_index(), 1);
        assert_eq!(stack_ids(&state), vec!["b", "c"]);

        state.on_swipe_completed(Left, "b").unwrap();
        assert_eq!(state.liked_ids(), ["a"]);
        assert_eq!(state.current_index(), 2);
        assert_eq!(stack_ids(&state), vec!["c"]);

        state.on_swipe_completed(Right, "c").unwrap();
        assert_eq!(state.liked_ids(), ["a", "c"]);
        assert_eq!(state.current_index(), 3);
        assert!(state.is_exhausted());
        assert!(state.visible_stack().is_empty());
    }

    #[test]
    fn cursor_counts_completed_swipes() {
        let ids = ["1", "2", "3", "4", "5", "6", "7"];
        let mut state = feed(&ids);

        for (k, id) in ids.iter().enumerate() {
            assert_eq!(state.current_index(), k);
            assert!(!state.is_exhausted());
            let direction = if k % 3 == 0 { Right } else { Left };
            state.on_swipe_completed(direction, id).unwrap();
        }

        assert_eq!(state.current_index(), ids.len());
        assert!(state.is_exhausted());
        assert_eq!(state.liked_ids(), ["1", "4", "7"]);
    }

    #[test]
    fn visible_stack_is_a_window_of_three_from_the_cursor() {
        let ids = ["1", "2", "3", "4", "5"];
        let mut state = feed(&ids);

        for id in ids {
            let stack = state.visible_stack();
            assert!(stack.len() <= VISIBLE_STACK_SIZE);
            for (offset, stacked) in stack.iter().enumerate() {
                assert_eq!(stacked.position, offset);
                assert_eq!(stacked.video.id, ids[state.current_index() + offset]);
            }
            state.on_swipe_completed(Left, id).unwrap();
        }
    }

    #[test]
    fn duplicate_completion_does_not_double_advance() {
        let mut state = feed(&["a", "b"]);

        state.on_swipe_completed(Right, "a").unwrap();
        let err = state.on_swipe_completed(Right, "a").unwrap_err();

        assert_eq!(
            err,
            FeedError::InvariantViolation {
                reported: "a".to_string(),
                expected: Some("b".to_string()),
            }
        );
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.liked_ids(), ["a"]);
    }

    #[test]
    fn swipes_after_the_end_are_ignored() {
        let mut state = feed(&["a"]);
        state.on_swipe_completed(Left, "a").unwrap();

        assert!(state.on_swipe_completed(Right, "a").is_err());
        assert_eq!(state.current_index(), 1);
        assert!(state.liked_ids().is_empty());
    }

    #[test]
    fn empty_feed_starts_exhausted() {
        let state = feed(&[]);
        assert!(state.is_exhausted());
        assert!(state.visible_stack().is_empty());
    }

    #[test]
    fn reducer_loads_once_and_advances_on_swipes() {
        let load = Rc::new(FeedLoad::Pending);
        let load = load.reduce(FeedAction::Fetched(Ok(vec![video("a"), video("b")])));
        let load = load.reduce(FeedAction::Fetched(Ok(Vec::new())));

        let load = load.reduce(FeedAction::SwipeCompleted {
            direction: Right,
            video_id: "a".to_string(),
        });
        let load = load.reduce(FeedAction::SwipeCompleted {
            direction: Right,
            video_id: "a".to_string(),
        });

        match &*load {
            FeedLoad::Loaded(state) => {
                assert_eq!(state.videos().len(), 2);
                assert_eq!(state.current_index(), 1);
                assert_eq!(state.liked_ids(), ["a"]);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn reducer_keeps_a_failed_fetch_terminal() {
        let error = FeedError::FetchFailed("HTTP 502".to_string());
        let load = Rc::new(FeedLoad::Pending).reduce(FeedAction::Fetched(Err(error.clone())));
        let load = load.reduce(FeedAction::SwipeCompleted {
            direction: Left,
            video_id: "a".to_string(),
        });

        assert_eq!(*load, FeedLoad::Failed(error));
    }
}
