//! Database operations for lofts.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, instrument};

use loftline_core::{LoftId, UtilityType};

use super::RepositoryError;
use crate::models::{CreateLoft, Loft, UpdateLoft};

const LOFT_COLUMNS: &str = "\
    id, name, description, address, price_per_month, status, owner_id, \
    company_percentage, owner_percentage, \
    frequence_paiement_eau, prochaine_echeance_eau, \
    frequence_paiement_energie, prochaine_echeance_energie, \
    frequence_paiement_telephone, prochaine_echeance_telephone, \
    frequence_paiement_internet, prochaine_echeance_internet, \
    created_at, updated_at";

/// List all lofts ordered by name.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_lofts(pool: &PgPool) -> Result<Vec<Loft>, RepositoryError> {
    let lofts = sqlx::query_as::<_, Loft>(&format!(
        "SELECT {LOFT_COLUMNS} FROM lofts ORDER BY name"
    ))
    .fetch_all(pool)
    .await?;

    Ok(lofts)
}

/// Fetch a single loft by ID.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn get_loft(pool: &PgPool, id: LoftId) -> Result<Option<Loft>, RepositoryError> {
    let loft = sqlx::query_as::<_, Loft>(&format!(
        "SELECT {LOFT_COLUMNS} FROM lofts WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(loft)
}

/// Insert a new loft.
///
/// # Errors
///
/// Returns error if the database insert fails (including frequency values
/// outside the schema's closed set).
#[instrument(skip(pool, params), fields(name = %params.name))]
pub async fn create_loft(pool: &PgPool, params: CreateLoft) -> Result<Loft, RepositoryError> {
    let loft = sqlx::query_as::<_, Loft>(&format!(
        "
        INSERT INTO lofts (
            name, description, address, price_per_month, status, owner_id,
            company_percentage, owner_percentage,
            frequence_paiement_eau, prochaine_echeance_eau,
            frequence_paiement_energie, prochaine_echeance_energie,
            frequence_paiement_telephone, prochaine_echeance_telephone,
            frequence_paiement_internet, prochaine_echeance_internet
        )
        VALUES (
            $1, $2, $3, $4, $5, $6,
            COALESCE($7, 50), COALESCE($8, 50),
            $9, $10, $11, $12, $13, $14, $15, $16
        )
        RETURNING {LOFT_COLUMNS}
        "
    ))
    .bind(&params.name)
    .bind(&params.description)
    .bind(&params.address)
    .bind(params.price_per_month)
    .bind(params.status)
    .bind(params.owner_id)
    .bind(params.company_percentage)
    .bind(params.owner_percentage)
    .bind(&params.frequence_paiement_eau)
    .bind(params.prochaine_echeance_eau)
    .bind(&params.frequence_paiement_energie)
    .bind(params.prochaine_echeance_energie)
    .bind(&params.frequence_paiement_telephone)
    .bind(params.prochaine_echeance_telephone)
    .bind(&params.frequence_paiement_internet)
    .bind(params.prochaine_echeance_internet)
    .fetch_one(pool)
    .await
    .map_err(map_constraint_error)?;

    debug!(id = %loft.id, "Created loft");
    Ok(loft)
}

/// Update a loft. Fields left out of the payload keep their stored value.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no loft matches the ID.
#[instrument(skip(pool, params))]
pub async fn update_loft(
    pool: &PgPool,
    id: LoftId,
    params: UpdateLoft,
) -> Result<Loft, RepositoryError> {
    let loft = sqlx::query_as::<_, Loft>(&format!(
        "
        UPDATE lofts SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            address = COALESCE($4, address),
            price_per_month = COALESCE($5, price_per_month),
            status = COALESCE($6, status),
            owner_id = COALESCE($7, owner_id),
            company_percentage = COALESCE($8, company_percentage),
            owner_percentage = COALESCE($9, owner_percentage),
            frequence_paiement_eau = COALESCE($10, frequence_paiement_eau),
            prochaine_echeance_eau = COALESCE($11, prochaine_echeance_eau),
            frequence_paiement_energie = COALESCE($12, frequence_paiement_energie),
            prochaine_echeance_energie = COALESCE($13, prochaine_echeance_energie),
            frequence_paiement_telephone = COALESCE($14, frequence_paiement_telephone),
            prochaine_echeance_telephone = COALESCE($15, prochaine_echeance_telephone),
            frequence_paiement_internet = COALESCE($16, frequence_paiement_internet),
            prochaine_echeance_internet = COALESCE($17, prochaine_echeance_internet),
            updated_at = now()
        WHERE id = $1
        RETURNING {LOFT_COLUMNS}
        "
    ))
    .bind(id)
    .bind(&params.name)
    .bind(&params.description)
    .bind(&params.address)
    .bind(params.price_per_month)
    .bind(params.status)
    .bind(params.owner_id)
    .bind(params.company_percentage)
    .bind(params.owner_percentage)
    .bind(&params.frequence_paiement_eau)
    .bind(params.prochaine_echeance_eau)
    .bind(&params.frequence_paiement_energie)
    .bind(params.prochaine_echeance_energie)
    .bind(&params.frequence_paiement_telephone)
    .bind(params.prochaine_echeance_telephone)
    .bind(&params.frequence_paiement_internet)
    .bind(params.prochaine_echeance_internet)
    .fetch_optional(pool)
    .await
    .map_err(map_constraint_error)?;

    loft.ok_or(RepositoryError::NotFound)
}

/// Delete a loft.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no loft matches the ID.
#[instrument(skip(pool))]
pub async fn delete_loft(pool: &PgPool, id: LoftId) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM lofts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    debug!(%id, "Deleted loft");
    Ok(())
}

/// Advance the stored next-due-date for one utility of a loft.
///
/// Only ever called with a date computed by the recurrence calculator, so
/// the column moves strictly forward.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no loft matches the ID.
#[instrument(skip(pool))]
pub async fn advance_due_date(
    pool: &PgPool,
    id: LoftId,
    utility: UtilityType,
    next_due: NaiveDate,
) -> Result<(), RepositoryError> {
    // Column names come from the closed UtilityType enum, not user input.
    let query = format!(
        "UPDATE lofts SET {} = $1, updated_at = now() WHERE id = $2",
        utility.due_date_column()
    );

    let result = sqlx::query(&query)
        .bind(next_due)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    debug!(%id, %utility, %next_due, "Advanced due date");
    Ok(())
}

/// Map check-constraint violations to `Conflict` instead of a bare database
/// error, so callers can surface them as client errors.
fn map_constraint_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_check_violation() || db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_string());
        }
    }
    RepositoryError::Database(err)
}
