//! Preset creator personas and the mapping between local and video-agent ids.
//!
//! The catalog is the single source of truth for both numbering schemes:
//! locally a creator is addressed by a string id (`"1"`..`"5"`), while the
//! video agent numbers the same personas `0`..`4`. [`CreatorDirectory`] is
//! the seam the generation pipeline uses to translate between them.

use serde::Serialize;

use crate::types::{CreatorId, ExternalCreatorId};

/// A creator persona offered for founder videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatorProfile {
    pub id: &'static str,
    #[serde(skip)]
    pub external_id: ExternalCreatorId,
    pub name: &'static str,
    pub photo_url: &'static str,
    pub bio: &'static str,
    pub platform: &'static str,
    pub followers: &'static str,
    pub created_at: &'static str,
}

/// All preset creators, ordered by external id.
pub const CREATORS: [CreatorProfile; 5] = [
    CreatorProfile {
        id: "1",
        external_id: 0,
        name: "Samantha Hayes",
        photo_url: "/creator_media/samantha.jpg",
        bio: "Tech journalist and startup enthusiast covering YC companies. Passionate about \
              uncovering the stories behind innovative founders building the future.",
        platform: "samanthahayes_yc",
        followers: "125K",
        created_at: "2024-01-01T00:00:00Z",
    },
    CreatorProfile {
        id: "2",
        external_id: 1,
        name: "Grace Mitchell",
        photo_url: "/creator_media/grace.jpg",
        bio: "AI researcher turned content creator exploring the intersection of technology \
              and entrepreneurship. Love spotting early-stage startups solving real problems.",
        platform: "Agent_grace_mail",
        followers: "98K",
        created_at: "2024-01-02T00:00:00Z",
    },
    CreatorProfile {
        id: "3",
        external_id: 2,
        name: "Ava Reynolds",
        photo_url: "/creator_media/ava.jpg",
        bio: "Silicon Valley reporter documenting the startup ecosystem. Always hunting for \
              the next breakthrough idea and the brilliant minds behind them.",
        platform: "ava_browser_brown",
        followers: "210K",
        created_at: "2024-01-03T00:00:00Z",
    },
    CreatorProfile {
        id: "4",
        external_id: 3,
        name: "Madison Brooks",
        photo_url: "/creator_media/madison.jpg",
        bio: "Venture capital analyst and startup interviewer. Fascinated by founders who are \
              bold enough to tackle the world's toughest challenges.",
        platform: "madison_ai_brooks",
        followers: "156K",
        created_at: "2024-01-04T00:00:00Z",
    },
    CreatorProfile {
        id: "5",
        external_id: 4,
        name: "Emily Carter",
        photo_url: "/creator_media/emily.jpg",
        bio: "Y Combinator community advocate and tech storyteller. On a mission to showcase \
              founders who are building companies that matter.",
        platform: "emily_combinator_yc",
        followers: "187K",
        created_at: "2024-01-05T00:00:00Z",
    },
];

/// Look up a preset creator by local id.
pub fn find_creator(id: &str) -> Option<&'static CreatorProfile> {
    CREATORS.iter().find(|c| c.id == id)
}

/// Translates creator ids between the local catalog and the video agent.
pub trait CreatorDirectory: Send + Sync {
    /// Local id -> video agent id. `None` if the creator is unknown.
    fn to_external(&self, local: &str) -> Option<ExternalCreatorId>;

    /// Video agent id -> local id. `None` if the id is outside the table.
    fn to_local(&self, external: ExternalCreatorId) -> Option<CreatorId>;
}

/// [`CreatorDirectory`] backed by the static [`CREATORS`] catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCreators;

impl CreatorDirectory for PresetCreators {
    fn to_external(&self, local: &str) -> Option<ExternalCreatorId> {
        find_creator(local).map(|c| c.external_id)
    }

    fn to_local(&self, external: ExternalCreatorId) -> Option<CreatorId> {
        CREATORS
            .iter()
            .find(|c| c.external_id == external)
            .map(|c| c.id.to_string())
    }
}
