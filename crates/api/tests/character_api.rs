//! HTTP-level integration tests for the `/api/personagens` resource:
//! filtered search, autocomplete-friendly accent folding, and the
//! authenticated CRUD surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json, post_json_auth, put_json_auth};
use narutodex_api::auth::jwt::generate_access_token;
use narutodex_api::auth::password::hash_password;
use narutodex_db::models::user::CreateUser;
use narutodex_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a user row and mint a valid access token for it.
async fn auth_token(pool: &PgPool) -> String {
    let hashed = hash_password("editor-password").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "editor@test.com".to_string(),
            password_hash: hashed,
            name: "Editor".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    generate_access_token(user.id, &user.email, &common::test_config().jwt)
        .expect("token generation should succeed")
}

/// Insert one village, clan, and rank; return their ids.
async fn seed_refs(pool: &PgPool) -> (i64, i64, i64) {
    let village_id: i64 =
        sqlx::query_scalar("INSERT INTO villages (name) VALUES ('Konoha') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    let clan_id: i64 = sqlx::query_scalar("INSERT INTO clans (name) VALUES ('Uchiha') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap();
    let rank_id: i64 =
        sqlx::query_scalar("INSERT INTO ranks (name, level) VALUES ('Genin', 1) RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    (village_id, clan_id, rank_id)
}

/// Insert a character directly, bypassing the API.
async fn insert_character(
    pool: &PgPool,
    name: &str,
    village_id: i64,
    clan_id: i64,
    rank_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO characters (name, village_id, clan_id, rank_id) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(village_id)
    .bind(clan_id)
    .bind(rank_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Search & filters
// ---------------------------------------------------------------------------

/// Accent- and case-insensitive search finds a character by any
/// diacritic-equivalent spelling of its name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_is_accent_and_case_insensitive(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    insert_character(&pool, "José Andrés", v, c, r).await;
    insert_character(&pool, "Sakura", v, c, r).await;

    // Accented terms are percent-encoded: "Jos%C3%A9" is precomposed "José",
    // "Jose%CC%81" is its NFD spelling ("Jose" + combining acute).
    for query in ["jose", "JOSE", "Jos%C3%A9", "Jose%CC%81", "ANDR%C3%89S", "andres"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/personagens?q={query}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let results = json.as_array().unwrap();
        assert_eq!(results.len(), 1, "query {query:?} should match exactly one");
        assert_eq!(results[0]["name"], "José Andrés");
    }
}

/// The free-text term also matches description and primary jutsu.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_matches_description_and_primary_jutsu(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    sqlx::query(
        "INSERT INTO characters (name, village_id, clan_id, rank_id, description, primary_jutsu) \
         VALUES ('Sasuke', $1, $2, $3, 'Último sobrevivente', 'Chidori')",
    )
    .bind(v)
    .bind(c)
    .bind(r)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/personagens?q=ultimo").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/personagens?q=chidori").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// The `alive` and `active` parameters only assert true for the literal
/// string "true"; anything else filters on false.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_boolean_filters_use_literal_true(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    insert_character(&pool, "Living", v, c, r).await;
    sqlx::query(
        "INSERT INTO characters (name, village_id, clan_id, rank_id, is_alive) \
         VALUES ('Fallen', $1, $2, $3, FALSE)",
    )
    .bind(v)
    .bind(c)
    .bind(r)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/personagens?alive=true").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Living");

    // "yes" is not "true", so it selects the dead.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/personagens?alive=yes").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Fallen");
}

/// The `elements` filter matches on element-set overlap.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_elements_filter_matches_overlap(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    sqlx::query(
        "INSERT INTO characters (name, village_id, clan_id, rank_id, element_ids) \
         VALUES ('Fire user', $1, $2, $3, ARRAY[1, 2]::BIGINT[]), \
                ('Water user', $1, $2, $3, ARRAY[3]::BIGINT[])",
    )
    .bind(v)
    .bind(c)
    .bind(r)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/personagens?elements=2,9").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Fire user");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/personagens?elements=7").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// Malformed numeric filters are rejected with a 400 in the standard shape.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_numeric_filter_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/personagens?village_id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/personagens?elements=1,x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// List rows carry the joined display names from the reference tables.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_enriches_reference_names(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    insert_character(&pool, "Itachi", v, c, r).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/personagens").await).await;
    assert_eq!(json[0]["village_name"], "Konoha");
    assert_eq!(json[0]["clan_name"], "Uchiha");
    assert_eq!(json[0]["rank_name"], "Genin");
    assert_eq!(json[0]["rank_level"], 1);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

/// A missing character id yields a 404, never a 500.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_character_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/personagens/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Create succeeds with defaults: omitted booleans come back true.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_character_defaults(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Naruto",
        "village_id": v,
        "clan_id": c,
        "rank_id": r,
    });
    let response = post_json_auth(app, "/api/personagens", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Naruto");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["is_alive"], true);
}

/// Creating without a required field returns 400 and inserts nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_required_field_is_400(pool: PgPool) {
    let (_, c, r) = seed_refs(&pool).await;
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Orphan", "clan_id": c, "rank_id": r });
    let response = post_json_auth(app, "/api/personagens", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "rejected payloads must not insert a row");
}

/// A duplicate character name is classified as a 409 conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_name_is_409(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    insert_character(&pool, "Shikamaru", v, c, r).await;
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Shikamaru",
        "village_id": v,
        "clan_id": c,
        "rank_id": r,
    });
    let response = post_json_auth(app, "/api/personagens", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// A partial update only touches the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update_preserves_other_fields(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    let id = insert_character(&pool, "Choji", v, c, r).await;
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "age": 30 });
    let response = put_json_auth(app, &format!("/api/personagens/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["age"], 30);
    assert_eq!(json["name"], "Choji");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["is_alive"], true);
}

/// Updating a missing character yields a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_character_is_404(pool: PgPool) {
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "age": 99 });
    let response = put_json_auth(app, "/api/personagens/12345", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Delete returns 204 and the character is gone afterwards.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_character(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    let id = insert_character(&pool, "Doomed", v, c, r).await;
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/personagens/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/personagens/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a mentor succeeds and detaches the mentee instead of failing
/// on the self-referencing foreign key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_mentor_detaches_mentee(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;
    let mentor_id = insert_character(&pool, "Jiraiya", v, c, r).await;
    let mentee_id: i64 = sqlx::query_scalar(
        "INSERT INTO characters (name, village_id, clan_id, rank_id, mentor_id) \
         VALUES ('Naruto', $1, $2, $3, $4) RETURNING id",
    )
    .bind(v)
    .bind(c)
    .bind(r)
    .bind(mentor_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/personagens/{mentor_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/personagens/{mentee_id}")).await).await;
    assert!(
        json["mentor_id"].is_null(),
        "mentee must survive with its mentor link cleared"
    );
}

/// Deleting a missing character yields a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_character_is_404(pool: PgPool) {
    let token = auth_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/personagens/4242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Auth enforcement
// ---------------------------------------------------------------------------

/// Mutations without a bearer token are rejected with 401 before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mutations_require_auth(pool: PgPool) {
    let (v, c, r) = seed_refs(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Intruder",
        "village_id": v,
        "clan_id": c,
        "rank_id": r,
    });
    let response = post_json(app, "/api/personagens", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "unauthenticated create must not reach the database");
}
