//! Handlers for the `/companies` resource.
//!
//! Each user owns at most one company. Update and delete are restricted to
//! the owner. The two LLM helpers draft copy for the company form.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use foundercast_core::error::CoreError;
use foundercast_core::types::DbId;
use foundercast_core::validation::{non_empty, require_non_blank, validate_url};
use foundercast_db::models::company::{Company, CreateCompany, UpdateCompany};
use foundercast_db::repositories::CompanyRepo;
use foundercast_llm::prompts::{interesting_fact_prompt, use_case_prompt, CompanyContext};
use foundercast_llm::PerplexityApi;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the LLM helper endpoints.
#[derive(Debug, Deserialize)]
pub struct CompanyContextRequest {
    pub website_url: String,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub use_case: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UseCaseResponse {
    pub use_case: String,
}

#[derive(Debug, Serialize)]
pub struct InterestingFactResponse {
    pub interesting_fact: String,
}

/// GET /api/v1/companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Company>>>> {
    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: companies }))
}

/// POST /api/v1/companies
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    require_non_blank("name", &input.name)?;
    require_non_blank("description", &input.description)?;
    require_non_blank("use_case", &input.use_case)?;
    validate_url("website_url", &input.website_url)?;

    if CompanyRepo::find_by_user(&state.pool, auth_user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already has a company".into(),
        )));
    }

    let input = CreateCompany {
        interesting_fact: non_empty(input.interesting_fact),
        video_url: non_empty(input.video_url),
        founder_name: non_empty(input.founder_name),
        founder_bio: non_empty(input.founder_bio),
        ..input
    };
    let company = CompanyRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(company_id = company.id, user_id = auth_user.user_id, "Company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies/mine
pub async fn mine(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_user(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Company", auth_user.user_id)))?;
    Ok(Json(company))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Company", id)))?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    ensure_owner(&state, id, auth_user.user_id).await?;

    let input = UpdateCompany {
        name: non_empty(input.name),
        description: non_empty(input.description),
        website_url: non_empty(input.website_url),
        use_case: non_empty(input.use_case),
        interesting_fact: non_empty(input.interesting_fact),
        video_url: non_empty(input.video_url),
        founder_name: non_empty(input.founder_name),
        founder_bio: non_empty(input.founder_bio),
    };
    if let Some(url) = &input.website_url {
        validate_url("website_url", url)?;
    }

    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Company", id)))?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_owner(&state, id, auth_user.user_id).await?;

    if CompanyRepo::delete(&state.pool, id).await? {
        tracing::info!(company_id = id, user_id = auth_user.user_id, "Company deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Company", id)))
    }
}

/// POST /api/v1/companies/use-case
pub async fn generate_use_case(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<CompanyContextRequest>,
) -> AppResult<Json<UseCaseResponse>> {
    let llm = require_llm(&state)?;
    validate_url("website_url", &input.website_url)?;

    let prompt = use_case_prompt(&context(&input));
    let use_case = llm.complete(&prompt).await?;
    Ok(Json(UseCaseResponse { use_case }))
}

/// POST /api/v1/companies/interesting-fact
pub async fn generate_interesting_fact(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<CompanyContextRequest>,
) -> AppResult<Json<InterestingFactResponse>> {
    let llm = require_llm(&state)?;
    validate_url("website_url", &input.website_url)?;

    let prompt = interesting_fact_prompt(&context(&input));
    let interesting_fact = llm.complete(&prompt).await?;
    Ok(Json(InterestingFactResponse { interesting_fact }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_owner(state: &AppState, company_id: DbId, user_id: DbId) -> AppResult<()> {
    match CompanyRepo::find_owner(&state.pool, company_id).await? {
        None => Err(AppError::Core(CoreError::not_found("Company", company_id))),
        Some(owner) if owner != user_id => Err(AppError::Core(CoreError::Forbidden(
            "You can only modify your own company".into(),
        ))),
        Some(_) => Ok(()),
    }
}

fn require_llm(state: &AppState) -> AppResult<&PerplexityApi> {
    state
        .llm
        .as_deref()
        .ok_or_else(|| AppError::NotConfigured("Perplexity API key not configured".into()))
}

fn context(input: &CompanyContextRequest) -> CompanyContext<'_> {
    CompanyContext {
        website_url: &input.website_url,
        company_name: input.company_name.as_deref().filter(|s| !s.is_empty()),
        description: input.description.as_deref().filter(|s| !s.is_empty()),
        use_case: input.use_case.as_deref().filter(|s| !s.is_empty()),
    }
}
