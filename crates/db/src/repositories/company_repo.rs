//! Repository for the `companies` table.

use foundercast_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, website_url, use_case, \
                        interesting_fact, video_url, founder_name, founder_bio, \
                        created_at, updated_at";

/// Provides CRUD operations for company profiles.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company owned by `user_id`, returning the created row.
    ///
    /// Fails with a `uq_companies_user_id` violation if the user already has one.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies
                (user_id, name, description, website_url, use_case,
                 interesting_fact, video_url, founder_name, founder_bio)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.website_url)
            .bind(&input.use_case)
            .bind(&input.interesting_fact)
            .bind(&input.video_url)
            .bind(&input.founder_name)
            .bind(&input.founder_bio)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the company owned by a user, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE user_id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve the owning user of a company. `None` if the company does not exist.
    pub async fn find_owner(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT user_id FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.0))
    }

    /// List all companies ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Update a company. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                website_url = COALESCE($4, website_url),
                use_case = COALESCE($5, use_case),
                interesting_fact = COALESCE($6, interesting_fact),
                video_url = COALESCE($7, video_url),
                founder_name = COALESCE($8, founder_name),
                founder_bio = COALESCE($9, founder_bio)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.website_url)
            .bind(&input.use_case)
            .bind(&input.interesting_fact)
            .bind(&input.video_url)
            .bind(&input.founder_name)
            .bind(&input.founder_bio)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company (and, by cascade, its posts). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
