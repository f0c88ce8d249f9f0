//! Repository for the `posts` table, including generated founder videos.

use foundercast_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreateGeneratedPost, CreatePost, Post, PostWithCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, company_id, creator_id, title, description, video_url, \
                        content_fingerprint, created_at, updated_at";

/// Same columns qualified for queries joining `companies c` on `posts p`.
const JOINED_COLUMNS: &str = "p.id, p.user_id, p.company_id, p.creator_id, p.title, \
                               p.description, p.video_url, p.content_fingerprint, \
                               p.created_at, p.updated_at, c.name AS company_name";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a hand-written post on `company_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        company_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (user_id, company_id, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .bind(company_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's posts, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the posts on a company profile, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE company_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Generated founder videos
    // -----------------------------------------------------------------------

    /// Find the most recent generated video for a (company, creator, user) slot.
    pub async fn find_latest_generated(
        pool: &PgPool,
        company_id: DbId,
        creator_id: &str,
        user_id: DbId,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE company_id = $1 AND creator_id = $2 AND user_id = $3
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(company_id)
            .bind(creator_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a generated video and retire every other video in the same
    /// (company, creator, user) slot, atomically.
    ///
    /// The transaction holds an advisory lock on the slot so concurrent
    /// regenerations serialize here: whichever commits last leaves exactly
    /// one row behind. Returns the new row and the number of retired rows.
    pub async fn create_generated_replacing(
        pool: &PgPool,
        input: &CreateGeneratedPost,
    ) -> Result<(Post, u64), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slot_key = format!("{}:{}:{}", input.company_id, input.creator_id, input.user_id);
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(&slot_key)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO posts
                (user_id, company_id, creator_id, title, description, video_url, content_fingerprint)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(input.user_id)
            .bind(input.company_id)
            .bind(&input.creator_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.content_fingerprint)
            .fetch_one(&mut *tx)
            .await?;

        let retired = sqlx::query(
            "DELETE FROM posts
             WHERE company_id = $1 AND creator_id = $2 AND user_id = $3 AND id <> $4",
        )
        .bind(input.company_id)
        .bind(&input.creator_id)
        .bind(input.user_id)
        .bind(post.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        if retired > 0 {
            tracing::debug!(
                post_id = post.id,
                retired,
                slot = %slot_key,
                "Retired superseded generated videos",
            );
        }
        Ok((post, retired))
    }

    /// List every generated video for a creator across all users, newest first,
    /// with the owning company's name.
    pub async fn list_generated_by_creator(
        pool: &PgPool,
        creator_id: &str,
    ) -> Result<Vec<PostWithCompany>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM posts p
             JOIN companies c ON c.id = p.company_id
             WHERE p.creator_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostWithCompany>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }
}
