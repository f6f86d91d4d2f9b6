//! Repository for the `characters` table, including the filterable search
//! query that backs `GET /api/personagens`.

use narutodex_core::text;
use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{
    Character, CharacterDetail, CharacterFilters, CreateCharacter, UpdateCharacter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.name, p.alternate_name, p.description, p.backstory, \
    p.village_id, p.clan_id, p.rank_id, p.team_id, p.mentor_id, \
    p.age, p.height_cm, p.weight_kg, p.birthday, p.element_ids, \
    p.primary_jutsu, p.secondary_jutsu, p.bloodline_trait, \
    p.is_active, p.is_alive, p.photo_url, p.wiki_url, p.created_at, p.updated_at";

/// Enrichment columns pulled in via LEFT JOINs.
const ENRICHMENT: &str = "v.name AS village_name, v.symbol AS village_symbol, \
    c.name AS clan_name, c.symbol AS clan_symbol, \
    r.name AS rank_name, r.level AS rank_level, \
    t.name AS team_name, m.name AS mentor_name";

/// LEFT JOINs so unlinked characters still appear with null enrichment.
const JOINS: &str = "FROM characters p \
    LEFT JOIN villages v ON v.id = p.village_id \
    LEFT JOIN clans c ON c.id = p.clan_id \
    LEFT JOIN ranks r ON r.id = p.rank_id \
    LEFT JOIN teams t ON t.id = p.team_id \
    LEFT JOIN characters m ON m.id = p.mentor_id";

/// Build the fixed WHERE clause for the list query.
///
/// Parameter positions never change; absent filters arrive as SQL NULL and
/// are neutralized by the `($n::TYPE IS NULL OR …)` guards, so the statement
/// text is identical for every filter combination.
fn filter_clause() -> String {
    let name = text::folded_column("p.name");
    let description = text::folded_column("p.description");
    let primary_jutsu = text::folded_column("p.primary_jutsu");
    format!(
        "WHERE ($1::TEXT IS NULL OR ({name} LIKE $1 OR {description} LIKE $1 OR {primary_jutsu} LIKE $1)) \
           AND ($2::BIGINT IS NULL OR p.village_id = $2) \
           AND ($3::BIGINT IS NULL OR p.clan_id = $3) \
           AND ($4::BIGINT IS NULL OR p.rank_id = $4) \
           AND ($5::BIGINT IS NULL OR p.team_id = $5) \
           AND ($6::BOOLEAN IS NULL OR p.is_alive = $6) \
           AND ($7::BOOLEAN IS NULL OR p.is_active = $7) \
           AND ($8::BIGINT[] IS NULL OR p.element_ids && $8)"
    )
}

/// Provides CRUD and filtered search for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// List characters matching the given filters, enriched with reference
    /// display names, ordered by name ascending.
    pub async fn list(
        pool: &PgPool,
        filters: &CharacterFilters,
    ) -> Result<Vec<CharacterDetail>, sqlx::Error> {
        let pattern = filters.q.as_deref().map(text::contains_pattern);
        let query = format!(
            "SELECT {COLUMNS}, {ENRICHMENT} {JOINS} {} ORDER BY p.name ASC",
            filter_clause()
        );
        sqlx::query_as::<_, CharacterDetail>(&query)
            .bind(pattern)
            .bind(filters.village_id)
            .bind(filters.clan_id)
            .bind(filters.rank_id)
            .bind(filters.team_id)
            .bind(filters.alive)
            .bind(filters.active)
            .bind(filters.elements.as_deref())
            .fetch_all(pool)
            .await
    }

    /// Find a single character by id, with the same enrichment as [`Self::list`].
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {ENRICHMENT} {JOINS} WHERE p.id = $1");
        sqlx::query_as::<_, CharacterDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new character, returning the created row.
    ///
    /// Required fields must have been validated by the caller; `is_active`
    /// and `is_alive` default to true when omitted.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = "INSERT INTO characters (\
                name, alternate_name, description, backstory, \
                village_id, clan_id, rank_id, team_id, mentor_id, \
                age, height_cm, weight_kg, birthday, \
                element_ids, primary_jutsu, secondary_jutsu, bloodline_trait, \
                is_active, is_alive, photo_url, wiki_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                     $14, $15, $16, $17, \
                     COALESCE($18, TRUE), COALESCE($19, TRUE), $20, $21) \
             RETURNING *";
        sqlx::query_as::<_, Character>(query)
            .bind(&input.name)
            .bind(&input.alternate_name)
            .bind(&input.description)
            .bind(&input.backstory)
            .bind(input.village_id)
            .bind(input.clan_id)
            .bind(input.rank_id)
            .bind(input.team_id)
            .bind(input.mentor_id)
            .bind(input.age)
            .bind(input.height_cm)
            .bind(input.weight_kg)
            .bind(&input.birthday)
            .bind(input.element_ids.as_deref())
            .bind(&input.primary_jutsu)
            .bind(&input.secondary_jutsu)
            .bind(&input.bloodline_trait)
            .bind(input.is_active)
            .bind(input.is_alive)
            .bind(&input.photo_url)
            .bind(&input.wiki_url)
            .fetch_one(pool)
            .await
    }

    /// Coalesce-merge update: non-`None` fields replace stored values,
    /// everything else is kept. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = "UPDATE characters SET \
                name = COALESCE($2, name), \
                alternate_name = COALESCE($3, alternate_name), \
                description = COALESCE($4, description), \
                backstory = COALESCE($5, backstory), \
                village_id = COALESCE($6, village_id), \
                clan_id = COALESCE($7, clan_id), \
                rank_id = COALESCE($8, rank_id), \
                team_id = COALESCE($9, team_id), \
                mentor_id = COALESCE($10, mentor_id), \
                age = COALESCE($11, age), \
                height_cm = COALESCE($12, height_cm), \
                weight_kg = COALESCE($13, weight_kg), \
                birthday = COALESCE($14, birthday), \
                element_ids = COALESCE($15, element_ids), \
                primary_jutsu = COALESCE($16, primary_jutsu), \
                secondary_jutsu = COALESCE($17, secondary_jutsu), \
                bloodline_trait = COALESCE($18, bloodline_trait), \
                is_active = COALESCE($19, is_active), \
                is_alive = COALESCE($20, is_alive), \
                photo_url = COALESCE($21, photo_url), \
                wiki_url = COALESCE($22, wiki_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *";
        sqlx::query_as::<_, Character>(query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.alternate_name)
            .bind(&input.description)
            .bind(&input.backstory)
            .bind(input.village_id)
            .bind(input.clan_id)
            .bind(input.rank_id)
            .bind(input.team_id)
            .bind(input.mentor_id)
            .bind(input.age)
            .bind(input.height_cm)
            .bind(input.weight_kg)
            .bind(&input.birthday)
            .bind(input.element_ids.as_deref())
            .bind(&input.primary_jutsu)
            .bind(&input.secondary_jutsu)
            .bind(&input.bloodline_trait)
            .bind(input.is_active)
            .bind(input.is_alive)
            .bind(&input.photo_url)
            .bind(&input.wiki_url)
            .fetch_optional(pool)
            .await
    }

    /// Physically delete a character. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
