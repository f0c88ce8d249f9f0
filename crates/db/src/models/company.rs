//! Company profile model and DTOs.

use foundercast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub use_case: String,
    pub interesting_fact: Option<String>,
    pub video_url: Option<String>,
    pub founder_name: Option<String>,
    pub founder_bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company. The owner comes from the authenticated session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub use_case: String,
    pub interesting_fact: Option<String>,
    pub video_url: Option<String>,
    pub founder_name: Option<String>,
    pub founder_bio: Option<String>,
}

/// DTO for updating an existing company. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub use_case: Option<String>,
    pub interesting_fact: Option<String>,
    pub video_url: Option<String>,
    pub founder_name: Option<String>,
    pub founder_bio: Option<String>,
}
