//! Content model – the record shapes the pages render, plus the built-in
//! fixture snapshot standing in for a real data source.
//!
//! Counts and timestamps are pre-formatted display strings; nothing here
//! parses or does arithmetic on them.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ContentError, Result};

// ─── Identifiers ─────────────────────────────────────────────────────────────

// Ids are scoped to the list that owns them. The same number may show up in
// two lists, so each list gets its own id type.

/// Id of a [`SuggestedUser`], unique within the suggested-users list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestedUserId(pub u32);

/// Id of a [`VideoEntry`], unique within the profile-videos list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileVideoId(pub u32);

/// Id of a [`LikedVideoEntry`], unique within the liked-videos list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedVideoId(pub u32);

macro_rules! display_id {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_id!(SuggestedUserId, ProfileVideoId, LikedVideoId);

// ─── Records ─────────────────────────────────────────────────────────────────

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub handle: String,
    pub display_name: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub location: String,
    pub joined: String,
    pub website: String,
    pub avatar_url: String,
}

/// A "who to follow" entry on the explore page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedUser {
    pub id: SuggestedUserId,
    pub handle: String,
    pub display_name: String,
    /// Shown when the avatar image cannot be loaded.
    pub avatar_initial: char,
    pub avatar_url: String,
    pub followers: String,
    pub category: String,
}

/// A video posted by the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: ProfileVideoId,
    pub title: String,
    pub views: String,
    pub timestamp: String,
    pub thumbnail_url: String,
}

/// A video the profile owner liked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedVideoEntry {
    pub id: LikedVideoId,
    pub title: String,
    pub views: String,
    pub timestamp: String,
    pub thumbnail_url: String,
    /// Creator handle; not checked against any user list.
    pub creator: String,
}

/// Fields of a liked video before it is assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedVideoDraft {
    pub title: String,
    pub views: String,
    pub timestamp: String,
    pub thumbnail_url: String,
    pub creator: String,
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// All content the pages consume, as one immutable value.
///
/// Changes never happen in place: [`ContentSnapshot::with_liked_video`] and
/// [`ContentSnapshot::without_liked_video`] return a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub profile: UserProfile,
    pub suggested_users: Vec<SuggestedUser>,
    pub profile_videos: Vec<VideoEntry>,
    pub liked_videos: Vec<LikedVideoEntry>,
}

impl ContentSnapshot {
    /// Parse a snapshot document and validate it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let snapshot: ContentSnapshot = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn profile_video(&self, id: ProfileVideoId) -> Option<&VideoEntry> {
        self.profile_videos.iter().find(|v| v.id == id)
    }

    pub fn liked_video(&self, id: LikedVideoId) -> Option<&LikedVideoEntry> {
        self.liked_videos.iter().find(|v| v.id == id)
    }

    pub fn suggested_user(&self, id: SuggestedUserId) -> Option<&SuggestedUser> {
        self.suggested_users.iter().find(|u| u.id == id)
    }

    /// Distinct suggested-user categories, in order of first appearance.
    /// The first label seen for a slug wins.
    pub fn categories(&self) -> Vec<&str> {
        // Labels that share a slug share an `/explore/:category` path.
        let mut seen = HashSet::new();
        self.suggested_users
            .iter()
            .map(|u| u.category.as_str())
            .filter(|c| seen.insert(category_slug(c)))
            .collect()
    }

    /// Suggested users whose category slug equals `slug`.
    pub fn users_in_category<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a SuggestedUser> {
        self.suggested_users
            .iter()
            .filter(move |u| category_slug(&u.category) == slug)
    }

    /// A copy of this snapshot with `draft` appended to the liked videos.
    ///
    /// The new entry gets the id after the current maximum; fails when that
    /// maximum is already `u32::MAX`.
    pub fn with_liked_video(&self, draft: LikedVideoDraft) -> Result<Self> {
        let next_id = match self.liked_videos.iter().map(|v| v.id.0).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or(ContentError::IdSpaceExhausted { list: "liked_videos" })?,
        };

        let mut next = self.clone();
        next.liked_videos.push(LikedVideoEntry {
            id: LikedVideoId(next_id),
            title: draft.title,
            views: draft.views,
            timestamp: draft.timestamp,
            thumbnail_url: draft.thumbnail_url,
            creator: draft.creator,
        });
        Ok(next)
    }

    /// A copy of this snapshot without the liked video `id`.
    pub fn without_liked_video(&self, id: LikedVideoId) -> Self {
        let mut next = self.clone();
        next.liked_videos.retain(|v| v.id != id);
        next
    }

    /// Check field presence, URI syntax, handles, and per-list id uniqueness.
    pub fn validate(&self) -> Result<()> {
        let p = &self.profile;
        let record = format!("profile {}", p.handle);
        check_handle(&record, &p.handle)?;
        for (field, value) in [
            ("display_name", &p.display_name),
            ("followers", &p.followers),
            ("following", &p.following),
            ("joined", &p.joined),
        ] {
            check_not_empty(&record, field, value)?;
        }
        check_uri(&record, &p.avatar_url)?;
        if !p.website.is_empty() {
            check_uri(&record, &p.website)?;
        }

        let mut ids = HashSet::new();
        let mut handles = HashSet::new();
        for u in &self.suggested_users {
            let record = format!("suggested user {}", u.id);
            if !ids.insert(u.id) {
                return Err(ContentError::DuplicateId {
                    list: "suggested_users",
                    id: u.id.0,
                });
            }
            check_handle(&record, &u.handle)?;
            if !handles.insert(u.handle.as_str()) {
                return Err(ContentError::DuplicateHandle(u.handle.clone()));
            }
            check_not_empty(&record, "display_name", &u.display_name)?;
            check_not_empty(&record, "followers", &u.followers)?;
            check_not_empty(&record, "category", &u.category)?;
            check_uri(&record, &u.avatar_url)?;
        }

        let mut ids = HashSet::new();
        for v in &self.profile_videos {
            if !ids.insert(v.id) {
                return Err(ContentError::DuplicateId {
                    list: "profile_videos",
                    id: v.id.0,
                });
            }
            check_video(&format!("profile video {}", v.id), &v.title, &v.views, &v.timestamp, &v.thumbnail_url)?;
        }

        let mut ids = HashSet::new();
        for v in &self.liked_videos {
            if !ids.insert(v.id) {
                return Err(ContentError::DuplicateId {
                    list: "liked_videos",
                    id: v.id.0,
                });
            }
            let record = format!("liked video {}", v.id);
            check_video(&record, &v.title, &v.views, &v.timestamp, &v.thumbnail_url)?;
            check_not_empty(&record, "creator", &v.creator)?;
        }

        Ok(())
    }
}

/// Lower-cased, hyphen-separated form of a category label, used in
/// `/explore/:category` paths.
pub fn category_slug(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn check_not_empty(record: &str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            record: record.to_string(),
            field,
        });
    }
    Ok(())
}

fn check_uri(record: &str, value: &str) -> Result<()> {
    Url::parse(value).map(|_| ()).map_err(|e| ContentError::InvalidUri {
        record: record.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn check_handle(record: &str, handle: &str) -> Result<()> {
    if handle.len() < 2 || !handle.starts_with('@') {
        return Err(ContentError::InvalidHandle {
            record: record.to_string(),
            handle: handle.to_string(),
        });
    }
    Ok(())
}

fn check_video(record: &str, title: &str, views: &str, timestamp: &str, thumbnail: &str) -> Result<()> {
    check_not_empty(record, "title", title)?;
    check_not_empty(record, "views", views)?;
    check_not_empty(record, "timestamp", timestamp)?;
    check_uri(record, thumbnail)
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

static FIXTURES: Lazy<ContentSnapshot> = Lazy::new(build_fixtures);

/// The built-in snapshot. Initialised on first use and never modified.
pub fn fixtures() -> &'static ContentSnapshot {
    &FIXTURES
}

fn image(id: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{id}?w={width}&fit=crop")
}

fn build_fixtures() -> ContentSnapshot {
    let profile = UserProfile {
        handle: "@design_wizard".into(),
        display_name: "Maya Lindqvist".into(),
        bio: "Motion designer turning everyday moments into loops. New tutorial every Tuesday.".into(),
        followers: "128.4K".into(),
        following: "312".into(),
        location: "Lisbon, Portugal".into(),
        joined: "Joined March 2021".into(),
        website: "https://mayalindqvist.design".into(),
        avatar_url: image("photo-1494790108377-be9c29b29330", 200),
    };

    let suggested = [
        (1, "@pixel_chef", "Tomás Rivera", "photo-1507003211169-0a1dd7228f2d", "89.2K", "Food"),
        (2, "@trailmix", "Aiko Tanaka", "photo-1438761681033-6461ffad8d80", "241K", "Travel"),
        (3, "@code_and_coffee", "Dev Patel", "photo-1500648767791-00dcc994a43e", "56.7K", "Tech"),
        (4, "@studio_lumen", "Léa Moreau", "photo-1544005313-94ddf0286df2", "1.2M", "Design"),
        (5, "@stackoverflowers", "Sam Okafor", "photo-1506794778202-cad84cf45f1d", "18.9K", "Tech"),
    ];
    let suggested_users = suggested
        .into_iter()
        .map(|(id, handle, name, photo, followers, category)| SuggestedUser {
            id: SuggestedUserId(id),
            handle: handle.into(),
            display_name: name.into(),
            avatar_initial: name.chars().next().unwrap_or('?'),
            avatar_url: image(photo, 120),
            followers: followers.into(),
            category: category.into(),
        })
        .collect();

    let posted = [
        (1, "Morning light, one loop", "24.1K", "2 days ago", "photo-1470071459604-3b5ec3a7fe05"),
        (2, "Kinetic type in 60 seconds", "112K", "1 week ago", "photo-1550745165-9bc0b252726f"),
        (3, "Tram 28 timelapse", "8.3K", "2 weeks ago", "photo-1555881400-74d7acaacd8b"),
        (4, "Easing curves explained", "67.9K", "3 weeks ago", "photo-1558655146-9f40138edfeb"),
        (5, "Rain on the studio window", "15.5K", "1 month ago", "photo-1501691223387-dd0500403074"),
        (6, "Color grading a sunset", "41K", "2 months ago", "photo-1495616811223-4d98c6e9c869"),
    ];
    let profile_videos = posted
        .into_iter()
        .map(|(id, title, views, timestamp, photo)| VideoEntry {
            id: ProfileVideoId(id),
            title: title.into(),
            views: views.into(),
            timestamp: timestamp.into(),
            thumbnail_url: image(photo, 480),
        })
        .collect();

    // Ids 1..=4 also exist in the profile-videos list; that overlap is allowed.
    let liked = [
        (1, "Ramen from scratch", "503K", "3 days ago", "photo-1569718212165-3a8278d5f624", "@pixel_chef"),
        (2, "Kyoto at dawn", "1.1M", "5 days ago", "photo-1493976040374-85c8e12f0c0e", "@trailmix"),
        (3, "Rust in 100 seconds", "87K", "1 week ago", "photo-1515879218367-8466d910aaa4", "@code_and_coffee"),
        (4, "Paper textures for motion", "34.6K", "2 weeks ago", "photo-1513364776144-60967b0f800f", "@studio_lumen"),
    ];
    let liked_videos = liked
        .into_iter()
        .map(|(id, title, views, timestamp, photo, creator)| LikedVideoEntry {
            id: LikedVideoId(id),
            title: title.into(),
            views: views.into(),
            timestamp: timestamp.into(),
            thumbnail_url: image(photo, 480),
            creator: creator.into(),
        })
        .collect();

    ContentSnapshot {
        profile,
        suggested_users,
        profile_videos,
        liked_videos,
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LikedVideoDraft {
        LikedVideoDraft {
            title: "Tram 28 timelapse".into(),
            views: "8.3K".into(),
            timestamp: "just now".into(),
            thumbnail_url: image("photo-1555881400-74d7acaacd8b", 480),
            creator: "@design_wizard".into(),
        }
    }

    #[test]
    fn test_fixtures_validate() {
        fixtures().validate().unwrap();
        assert_eq!(fixtures().profile.handle, "@design_wizard");
        assert_eq!(fixtures().suggested_users.len(), 5);
        assert_eq!(fixtures().profile_videos.len(), 6);
        assert_eq!(fixtures().liked_videos.len(), 4);
    }

    #[test]
    fn test_video_entries_are_displayable() {
        let content = fixtures();
        let posted = content
            .profile_videos
            .iter()
            .map(|v| (&v.title, &v.views, &v.timestamp, &v.thumbnail_url));
        let liked = content
            .liked_videos
            .iter()
            .map(|v| (&v.title, &v.views, &v.timestamp, &v.thumbnail_url));

        for (title, views, timestamp, thumbnail) in posted.chain(liked) {
            assert!(!title.is_empty());
            assert!(!views.is_empty());
            assert!(!timestamp.is_empty());
            let url = Url::parse(thumbnail).unwrap();
            assert_eq!(url.scheme(), "https");
        }
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let first: Vec<SuggestedUser> = fixtures().suggested_users.clone();
        let second: Vec<SuggestedUser> = fixtures().suggested_users.clone();
        assert_eq!(first, second);
        assert!(std::ptr::eq(fixtures(), fixtures()));
    }

    #[test]
    fn test_ids_are_scoped_per_list() {
        let content = fixtures();
        let posted = content.profile_video(ProfileVideoId(1)).unwrap();
        let liked = content.liked_video(LikedVideoId(1)).unwrap();
        assert_eq!(posted.id.0, liked.id.0);
        assert_ne!(posted.title, liked.title);
        assert!(content.profile_video(ProfileVideoId(6)).is_some());
        assert!(content.liked_video(LikedVideoId(6)).is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(fixtures().categories(), ["Food", "Travel", "Tech", "Design"]);

        let tech: Vec<_> = fixtures()
            .users_in_category("tech")
            .map(|u| u.handle.as_str())
            .collect();
        assert_eq!(tech, ["@code_and_coffee", "@stackoverflowers"]);
        assert_eq!(fixtures().users_in_category("trending").count(), 0);
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Tech"), "tech");
        assert_eq!(category_slug("Arts & Crafts"), "arts-crafts");
        assert_eq!(category_slug("  DIY  Home "), "diy-home");
    }

    #[test]
    fn test_with_liked_video_returns_new_snapshot() {
        let base = fixtures();
        let next = base.with_liked_video(draft()).unwrap();

        assert_eq!(base.liked_videos.len(), 4);
        assert_eq!(next.liked_videos.len(), 5);
        assert_eq!(next.liked_videos.last().unwrap().id, LikedVideoId(5));
        next.validate().unwrap();

        let trimmed = next.without_liked_video(LikedVideoId(2));
        assert_eq!(trimmed.liked_videos.len(), 4);
        assert!(trimmed.liked_video(LikedVideoId(2)).is_none());
        assert_eq!(next.liked_videos.len(), 5);
    }

    #[test]
    fn test_with_liked_video_fails_when_ids_run_out() {
        let mut doc = serde_json::to_value(fixtures()).unwrap();
        doc["liked_videos"][3]["id"] = serde_json::Value::from(u32::MAX);
        let full = ContentSnapshot::from_json_str(&doc.to_string()).unwrap();

        let err = full.with_liked_video(draft()).unwrap_err();
        assert!(
            matches!(err, ContentError::IdSpaceExhausted { list: "liked_videos" }),
            "{err}"
        );
        assert_eq!(full.liked_videos.len(), 4);

        // Dropping the top id frees the space again.
        let next = full
            .without_liked_video(LikedVideoId(u32::MAX))
            .with_liked_video(draft())
            .unwrap();
        assert_eq!(next.liked_videos.last().unwrap().id, LikedVideoId(4));
    }

    #[test]
    fn test_categories_merge_labels_with_the_same_slug() {
        let mut content = fixtures().clone();
        content.suggested_users[0].category = "Arts & Crafts".into();
        content.suggested_users[1].category = "Arts Crafts".into();

        assert_eq!(content.categories(), ["Arts & Crafts", "Tech", "Design"]);
        assert_eq!(content.users_in_category("arts-crafts").count(), 2);
    }

    #[test]
    fn test_from_json_str_accepts_serialised_fixtures() {
        let text = serde_json::to_string(fixtures()).unwrap();
        let parsed = ContentSnapshot::from_json_str(&text).unwrap();
        assert_eq!(&parsed, fixtures());
    }

    #[test]
    fn test_validate_rejects_relative_thumbnail() {
        let mut bad = fixtures().clone();
        bad.profile_videos[0].thumbnail_url = "thumbs/1.jpg".into();
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, ContentError::InvalidUri { .. }), "{err}");
    }

    #[test]
    fn test_validate_rejects_duplicate_ids_within_a_list() {
        let mut bad = fixtures().clone();
        bad.liked_videos[1].id = LikedVideoId(1);
        assert!(matches!(
            bad.validate(),
            Err(ContentError::DuplicateId { list: "liked_videos", id: 1 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_handles() {
        let mut bad = fixtures().clone();
        bad.suggested_users[1].handle = "@pixel_chef".into();
        assert!(matches!(bad.validate(), Err(ContentError::DuplicateHandle(_))));

        let mut bad = fixtures().clone();
        bad.profile.handle = "design_wizard".into();
        assert!(matches!(bad.validate(), Err(ContentError::InvalidHandle { .. })));
    }

    #[test]
    fn test_from_json_str_rejects_empty_title() {
        let mut doc = serde_json::to_value(fixtures()).unwrap();
        doc["profile_videos"][0]["title"] = serde_json::Value::String(String::new());
        let err = ContentSnapshot::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyField { field: "title", .. }), "{err}");

        let err = ContentSnapshot::from_json_str("{\"profile\": 1}").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
