//! Company CRUD operations.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::{date_from_sql, datetime_from_sql, datetime_to_sql, Store};
use crate::error::StoreError;
use crate::models::company::{Company, CompanyInput, CompanyUpdate};

const COLUMNS: &str = "id, company_name, business_number, representative_name, address, \
     business_type, business_item, credit_rating, risk_rating, memo, established_at, \
     loan_status, business_license_path, created_at, updated_at";

impl Store {
    /// Insert a new company and return the stored record.
    pub fn create_company(&self, input: &CompanyInput) -> Result<Company, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        self.conn.execute(
            "INSERT INTO companies (id, company_name, business_number, representative_name, \
             address, business_type, business_item, credit_rating, risk_rating, memo, \
             established_at, loan_status, business_license_path, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                id,
                input.company_name,
                input.business_number,
                input.representative_name,
                input.address,
                input.business_type,
                input.business_item,
                input.credit_rating,
                input.risk_rating,
                input.memo,
                input.established_at.map(|d| d.to_string()),
                input.loan_status,
                input.business_license_path,
                datetime_to_sql(&now),
                datetime_to_sql(&now),
            ],
        )?;

        self.get_company(&id)
    }

    /// All companies, newest first.
    pub fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM companies ORDER BY created_at DESC"
        ))?;
        let rows = stmt.query_map([], company_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Fetch one company by id.
    pub fn get_company(&self, id: &str) -> Result<Company, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM companies WHERE id = ?1"),
                params![id],
                company_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound {
                entity: "company",
                id: id.to_string(),
            })
    }

    /// Partially update a company and bump `updated_at`. Fields absent from
    /// the update keep their stored value.
    pub fn update_company(&self, id: &str, update: &CompanyUpdate) -> Result<Company, StoreError> {
        let mut company = self.get_company(id)?;
        update.apply(&mut company);

        self.conn.execute(
            "UPDATE companies SET company_name = ?1, business_number = ?2, \
             representative_name = ?3, address = ?4, business_type = ?5, business_item = ?6, \
             credit_rating = ?7, risk_rating = ?8, memo = ?9, established_at = ?10, \
             loan_status = ?11, business_license_path = ?12, updated_at = ?13 \
             WHERE id = ?14",
            params![
                company.company_name,
                company.business_number,
                company.representative_name,
                company.address,
                company.business_type,
                company.business_item,
                company.credit_rating,
                company.risk_rating,
                company.memo,
                company.established_at.map(|d| d.to_string()),
                company.loan_status,
                company.business_license_path,
                datetime_to_sql(&Utc::now()),
                id,
            ],
        )?;

        self.get_company(id)
    }

    /// Delete a company together with its file rows.
    pub fn delete_company(&self, id: &str) -> Result<(), StoreError> {
        // File rows go first so the foreign key never dangles.
        self.conn
            .execute("DELETE FROM files WHERE company_id = ?1", params![id])?;
        let changed = self
            .conn
            .execute("DELETE FROM companies WHERE id = ?1", params![id])?;

        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "company",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// True when a company with this id exists.
    pub fn company_exists(&self, id: &str) -> Result<bool, StoreError> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM companies WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    let established_at = row
        .get::<_, Option<String>>(10)?
        .map(|s| date_from_sql(10, &s))
        .transpose()?;
    let created_at: String = row.get(13)?;
    let updated_at: String = row.get(14)?;

    Ok(Company {
        id: row.get(0)?,
        company_name: row.get(1)?,
        business_number: row.get(2)?,
        representative_name: row.get(3)?,
        address: row.get(4)?,
        business_type: row.get(5)?,
        business_item: row.get(6)?,
        credit_rating: row.get(7)?,
        risk_rating: row.get(8)?,
        memo: row.get(9)?,
        established_at,
        loan_status: row.get(11)?,
        business_license_path: row.get(12)?,
        created_at: datetime_from_sql(13, &created_at)?,
        updated_at: datetime_from_sql(14, &updated_at)?,
    })
}
