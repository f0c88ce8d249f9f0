//! Integration tests for the generated-video slot operations on `PostRepo`.
//!
//! - `find_latest_generated` only looks at the exact (company, creator, user) slot
//! - `create_generated_replacing` leaves exactly one row per slot
//! - `list_generated_by_creator` joins company names and orders newest first

use foundercast_db::models::company::CreateCompany;
use foundercast_db::models::post::{CreateGeneratedPost, CreatePost};
use foundercast_db::models::user::CreateUser;
use foundercast_db::repositories::{CompanyRepo, PostRepo, UserRepo};
use sqlx::PgPool;

async fn seed_owner(pool: &PgPool, email: &str, company: &str) -> (i64, i64) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: "Founder".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .await
    .unwrap();
    let company = CompanyRepo::create(
        pool,
        user.id,
        &CreateCompany {
            name: company.to_string(),
            description: "desc".to_string(),
            website_url: "https://example.com".to_string(),
            use_case: "use".to_string(),
            interesting_fact: None,
            video_url: None,
            founder_name: None,
            founder_bio: None,
        },
    )
    .await
    .unwrap();
    (user.id, company.id)
}

fn generated(user_id: i64, company_id: i64, creator_id: &str, fp: &str) -> CreateGeneratedPost {
    CreateGeneratedPost {
        user_id,
        company_id,
        creator_id: creator_id.to_string(),
        title: "Generated Video".to_string(),
        description: "Video generated".to_string(),
        video_url: format!("https://cdn.example.com/{fp}.mp4"),
        content_fingerprint: fp.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacing_leaves_one_row_per_slot(pool: PgPool) {
    let (user_id, company_id) = seed_owner(&pool, "slot@example.com", "Acme").await;

    let (first, retired) =
        PostRepo::create_generated_replacing(&pool, &generated(user_id, company_id, "1", "f1"))
            .await
            .unwrap();
    assert_eq!(retired, 0);

    let (second, retired) =
        PostRepo::create_generated_replacing(&pool, &generated(user_id, company_id, "1", "f2"))
            .await
            .unwrap();
    assert_eq!(retired, 1);

    assert!(PostRepo::find_by_id(&pool, first.id).await.unwrap().is_none());

    let latest = PostRepo::find_latest_generated(&pool, company_id, "1", user_id)
        .await
        .unwrap()
        .expect("slot should be filled");
    assert_eq!(latest.id, second.id);
    assert_eq!(latest.content_fingerprint.as_deref(), Some("f2"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacing_does_not_touch_other_slots_or_plain_posts(pool: PgPool) {
    let (user_id, company_id) = seed_owner(&pool, "other@example.com", "Acme").await;

    let (other_creator, _) =
        PostRepo::create_generated_replacing(&pool, &generated(user_id, company_id, "2", "f1"))
            .await
            .unwrap();
    let plain = PostRepo::create(
        &pool,
        user_id,
        company_id,
        &CreatePost {
            title: "hello".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    PostRepo::create_generated_replacing(&pool, &generated(user_id, company_id, "1", "f1"))
        .await
        .unwrap();

    assert!(PostRepo::find_by_id(&pool, other_creator.id).await.unwrap().is_some());
    assert!(PostRepo::find_by_id(&pool, plain.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_replacements_leave_a_single_row(pool: PgPool) {
    let (user_id, company_id) = seed_owner(&pool, "race@example.com", "Acme").await;

    let a = generated(user_id, company_id, "3", "fa");
    let b = generated(user_id, company_id, "3", "fb");
    let (ra, rb) = tokio::join!(
        PostRepo::create_generated_replacing(&pool, &a),
        PostRepo::create_generated_replacing(&pool, &b),
    );
    ra.unwrap();
    rb.unwrap();

    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM posts WHERE company_id = $1 AND creator_id = '3' AND user_id = $2",
    )
    .bind(company_id)
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_creator_spans_users_with_company_names(pool: PgPool) {
    let (u1, c1) = seed_owner(&pool, "a@example.com", "Alpha").await;
    let (u2, c2) = seed_owner(&pool, "b@example.com", "Beta").await;

    let (p1, _) = PostRepo::create_generated_replacing(&pool, &generated(u1, c1, "4", "x"))
        .await
        .unwrap();
    let (p2, _) = PostRepo::create_generated_replacing(&pool, &generated(u2, c2, "4", "y"))
        .await
        .unwrap();
    PostRepo::create_generated_replacing(&pool, &generated(u2, c2, "5", "z"))
        .await
        .unwrap();

    let feed = PostRepo::list_generated_by_creator(&pool, "4").await.unwrap();
    let ids: Vec<_> = feed.iter().map(|p| p.post.id).collect();
    assert_eq!(ids, vec![p2.id, p1.id]);
    assert_eq!(feed[0].company_name, "Beta");
    assert_eq!(feed[1].company_name, "Alpha");
}
