//! Community feed stories.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use super::error::{ActionError, required};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: u32,
    pub author: String,
    /// Free-form label shown under the author ("Food Donor", "Recipient", ...).
    pub author_role: String,
    pub title: String,
    pub content: String,
    pub posted: String,
    pub likes: u32,
    pub comments: u32,
    pub liked_by_me: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityState {
    stories: Vec<Story>,
    next_id: u32,
}

impl Default for CommunityState {
    fn default() -> Self {
        let stories = fixtures();
        let next_id = stories.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self { stories, next_id }
    }
}

impl CommunityState {
    /// Stories, newest first.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Flip the viewer's like on a story, returning the new like count.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown story id.
    pub fn toggle_like(&mut self, id: u32) -> Result<u32, ActionError> {
        let story = self.stories.iter_mut().find(|s| s.id == id).ok_or(ActionError::NotFound(id))?;
        if story.liked_by_me {
            story.likes = story.likes.saturating_sub(1);
        } else {
            story.likes += 1;
        }
        story.liked_by_me = !story.liked_by_me;
        Ok(story.likes)
    }

    /// Publish a story at the top of the feed.
    ///
    /// # Errors
    ///
    /// `Validation(MissingField)` for a blank title or content.
    pub fn post(&mut self, author: &str, author_role: &str, title: &str, content: &str) -> Result<Story, ActionError> {
        let story = Story {
            id: self.next_id,
            author: author.trim().to_owned(),
            author_role: author_role.to_owned(),
            title: required("title", title)?,
            content: required("content", content)?,
            posted: "just now".to_owned(),
            likes: 0,
            comments: 0,
            liked_by_me: false,
        };
        self.next_id += 1;
        self.stories.insert(0, story.clone());
        log::info!("story {} posted", story.id);
        Ok(story)
    }
}

#[allow(clippy::too_many_arguments)]
fn story(id: u32, author: &str, author_role: &str, title: &str, content: &str, posted: &str, likes: u32, comments: u32) -> Story {
    Story {
        id,
        author: author.to_owned(),
        author_role: author_role.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        posted: posted.to_owned(),
        likes,
        comments,
        liked_by_me: false,
    }
}

#[must_use]
pub fn fixtures() -> Vec<Story> {
    vec![
        story(
            1,
            "Sarah M.",
            "Community Member",
            "Helped 50 families this month!",
            "Distributing fresh produce from Green Valley Market to families in need was an amazing experience.",
            "2 hours ago",
            24,
            8,
        ),
        story(
            2,
            "Mike's Bakery",
            "Food Donor",
            "Daily bread donations making a difference",
            "Six months of donating day-old bread and pastries. Nothing goes to waste and families get fresh baked goods.",
            "1 day ago",
            45,
            12,
        ),
        story(
            3,
            "Community Center",
            "Food Recipient",
            "Grateful for the consistent support",
            "Regular donations help our shelter provide nutritious meals to 100+ people daily.",
            "2 days ago",
            67,
            15,
        ),
    ]
}
