use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::organization::validation::{format_address, ValidOrganization};
use crate::kernel::traits::BoundingBox;

/// Geographic boundaries of San Mateo County (southwest/northeast corners).
/// The directory serves organizations in this county, so geocode searches
/// are hinted toward it.
pub const SMC_BOUNDS: BoundingBox = BoundingBox {
    southwest: (37.1074, -122.521),
    northeast: (37.7084, -122.085),
};

/// A social-service organization in the directory.
///
/// `coordinates` is always a `[latitude, longitude]` pair and is written
/// only by the geocode path, never from client input.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub agency: Option<String>,
    pub description: Option<String>,
    pub eligibility_requirements: Option<String>,
    pub fees: Option<String>,
    pub how_to_apply: Option<String>,
    pub service_hours: Option<String>,
    pub service_wait: Option<String>,
    pub services_provided: Option<String>,
    pub target_group: Option<String>,
    pub transportation_availability: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub coordinates: Option<Vec<f64>>,
    pub accessibility_options: Vec<String>,
    pub ask_for: Vec<String>,
    pub emails: Vec<String>,
    pub faxes: Vec<String>,
    pub funding_sources: Vec<String>,
    pub keywords: Vec<String>,
    pub languages_spoken: Vec<String>,
    pub leaders: Vec<String>,
    pub payments_accepted: Vec<String>,
    pub phones: Vec<String>,
    pub products_sold: Vec<String>,
    pub service_areas: Vec<String>,
    pub ttys: Vec<String>,
    pub urls: Vec<String>,
    pub market_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Combines address fields together into one string, the input contract
    /// for the geocode resolver.
    pub fn address(&self) -> String {
        format_address(
            self.street_address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zipcode.as_deref(),
        )
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Organization {
    /// Find organization by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// All organizations, name order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM organizations ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Insert a validated organization. The store stamps `created_at` and
    /// `updated_at`; `coordinates` starts unset.
    pub async fn insert(valid: &ValidOrganization, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO organizations (
                id, name, agency, description, eligibility_requirements, fees,
                how_to_apply, service_hours, service_wait, services_provided,
                target_group, transportation_availability, street_address, city,
                state, zipcode, accessibility_options, ask_for, emails, faxes,
                funding_sources, keywords, languages_spoken, leaders,
                payments_accepted, phones, products_sold, service_areas, ttys,
                urls, market_match
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                $27, $28, $29, $30, $31
            )
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&valid.name)
        .bind(&valid.agency)
        .bind(&valid.description)
        .bind(&valid.eligibility_requirements)
        .bind(&valid.fees)
        .bind(&valid.how_to_apply)
        .bind(&valid.service_hours)
        .bind(&valid.service_wait)
        .bind(&valid.services_provided)
        .bind(&valid.target_group)
        .bind(&valid.transportation_availability)
        .bind(&valid.street_address)
        .bind(&valid.city)
        .bind(&valid.state)
        .bind(&valid.zipcode)
        .bind(&valid.accessibility_options)
        .bind(&valid.ask_for)
        .bind(&valid.emails)
        .bind(&valid.faxes)
        .bind(&valid.funding_sources)
        .bind(&valid.keywords)
        .bind(&valid.languages_spoken)
        .bind(&valid.leaders)
        .bind(&valid.payments_accepted)
        .bind(&valid.phones)
        .bind(&valid.products_sold)
        .bind(&valid.service_areas)
        .bind(&valid.ttys)
        .bind(&valid.urls)
        .bind(valid.market_match)
        .fetch_one(pool)
        .await
    }

    /// Update all client-writable fields. `coordinates` is preserved; the
    /// store refreshes `updated_at`.
    pub async fn update(
        id: Uuid,
        valid: &ValidOrganization,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE organizations
            SET name = $2,
                agency = $3,
                description = $4,
                eligibility_requirements = $5,
                fees = $6,
                how_to_apply = $7,
                service_hours = $8,
                service_wait = $9,
                services_provided = $10,
                target_group = $11,
                transportation_availability = $12,
                street_address = $13,
                city = $14,
                state = $15,
                zipcode = $16,
                accessibility_options = $17,
                ask_for = $18,
                emails = $19,
                faxes = $20,
                funding_sources = $21,
                keywords = $22,
                languages_spoken = $23,
                leaders = $24,
                payments_accepted = $25,
                phones = $26,
                products_sold = $27,
                service_areas = $28,
                ttys = $29,
                urls = $30,
                market_match = $31,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&valid.name)
        .bind(&valid.agency)
        .bind(&valid.description)
        .bind(&valid.eligibility_requirements)
        .bind(&valid.fees)
        .bind(&valid.how_to_apply)
        .bind(&valid.service_hours)
        .bind(&valid.service_wait)
        .bind(&valid.services_provided)
        .bind(&valid.target_group)
        .bind(&valid.transportation_availability)
        .bind(&valid.street_address)
        .bind(&valid.city)
        .bind(&valid.state)
        .bind(&valid.zipcode)
        .bind(&valid.accessibility_options)
        .bind(&valid.ask_for)
        .bind(&valid.emails)
        .bind(&valid.faxes)
        .bind(&valid.funding_sources)
        .bind(&valid.keywords)
        .bind(&valid.languages_spoken)
        .bind(&valid.leaders)
        .bind(&valid.payments_accepted)
        .bind(&valid.phones)
        .bind(&valid.products_sold)
        .bind(&valid.service_areas)
        .bind(&valid.ttys)
        .bind(&valid.urls)
        .bind(valid.market_match)
        .fetch_one(pool)
        .await
    }

    /// The only write path for `coordinates`: stores the resolved
    /// [latitude, longitude] pair.
    pub async fn set_coordinates(
        id: Uuid,
        latitude: f64,
        longitude: f64,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE organizations
            SET coordinates = ARRAY[$2, $3]::float8[], updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(pool)
        .await
    }

    /// Explicit delete; no cascading entities
    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Organizations whose `keywords` contain a case-insensitive substring
    /// match for the (trimmed) category
    pub async fn find_by_category(category: &str, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        Self::find_by_collection_match("keywords", category, pool).await
    }

    /// Same contract as `find_by_category`, matched against
    /// `languages_spoken`
    pub async fn find_by_language(language: &str, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        Self::find_by_collection_match("languages_spoken", language, pool).await
    }

    async fn find_by_collection_match(
        column: &str,
        term: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        // `column` is one of two hardcoded callers, never client input
        let sql = format!(
            r#"
            SELECT * FROM organizations
            WHERE EXISTS (
                SELECT 1 FROM unnest({}) AS entry WHERE entry ILIKE $1
            )
            ORDER BY name
            "#,
            column
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(format!("%{}%", term.trim()))
            .fetch_all(pool)
            .await
    }

    /// Full-text match across name, agency, description and keywords,
    /// best-ranked first
    pub async fn search(query: &str, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM organizations
            WHERE to_tsvector('english',
                      name || ' ' || coalesce(agency, '') || ' ' ||
                      coalesce(description, '') || ' ' || array_to_string(keywords, ' '))
                  @@ websearch_to_tsquery('english', $1)
            ORDER BY ts_rank(
                to_tsvector('english',
                    name || ' ' || coalesce(agency, '') || ' ' ||
                    coalesce(description, '') || ' ' || array_to_string(keywords, ' ')),
                websearch_to_tsquery('english', $1)) DESC
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await
    }

    /// Geocoded organizations within `radius_miles` of a point, nearest
    /// first (haversine, coordinates stored as [lat, lon])
    pub async fn find_within_radius(
        latitude: f64,
        longitude: f64,
        radius_miles: f64,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM (
                SELECT o.*,
                       3959 * acos(least(1.0,
                           cos(radians($1)) * cos(radians(o.coordinates[1]))
                             * cos(radians(o.coordinates[2]) - radians($2))
                           + sin(radians($1)) * sin(radians(o.coordinates[1]))
                       )) AS distance
                FROM organizations o
                WHERE o.coordinates IS NOT NULL
            ) nearby
            WHERE distance <= $3
            ORDER BY distance
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(radius_miles)
        .fetch_all(pool)
        .await
    }
}
