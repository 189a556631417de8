//! File metadata operations.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use super::{datetime_from_sql, datetime_to_sql, Store};
use crate::error::StoreError;
use crate::models::file::{FileKind, FileRecord, NewFileRecord};

const COLUMNS: &str =
    "id, company_id, file_type, original_name, stored_name, path, extracted_text, status, created_at";

impl Store {
    /// Insert a file row and return the stored record.
    pub fn insert_file(&self, new: &NewFileRecord) -> Result<FileRecord, StoreError> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO files (company_id, file_type, original_name, stored_name, path, \
             extracted_text, status, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                new.company_id,
                new.file_type.as_str(),
                new.original_name,
                new.stored_name,
                new.path,
                new.extracted_text,
                new.status,
                datetime_to_sql(&now),
            ],
        )?;

        self.get_file(self.conn.last_insert_rowid())
    }

    /// Fetch one file row by id.
    pub fn get_file(&self, id: i64) -> Result<FileRecord, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM files WHERE id = ?1"),
                params![id],
                file_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound {
                entity: "file",
                id: id.to_string(),
            })
    }

    /// Every stored file, newest first.
    pub fn list_files(&self) -> Result<Vec<FileRecord>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM files ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], file_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Files attached to one company, newest first.
    pub fn files_for_company(&self, company_id: &str) -> Result<Vec<FileRecord>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM files WHERE company_id = ?1 ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![company_id], file_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn file_from_row(row: &Row<'_>) -> rusqlite::Result<FileRecord> {
    let file_type: String = row.get(2)?;
    let created_at: String = row.get(8)?;

    Ok(FileRecord {
        id: row.get(0)?,
        company_id: row.get(1)?,
        file_type: FileKind::from_raw(&file_type),
        original_name: row.get(3)?,
        stored_name: row.get(4)?,
        path: row.get(5)?,
        extracted_text: row.get(6)?,
        status: row.get(7)?,
        created_at: datetime_from_sql(8, &created_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::CompanyInput;
    use crate::models::file::FILE_STATUS_ACTIVE;
    use pretty_assertions::assert_eq;

    fn new_record(company_id: &str, stored: &str) -> NewFileRecord {
        NewFileRecord {
            company_id: company_id.to_string(),
            file_type: FileKind::BusinessLicense,
            original_name: "사업자등록증.jpg".to_string(),
            stored_name: stored.to_string(),
            path: format!("/uploads/{stored}"),
            extracted_text: Some("상호: 테스트".to_string()),
            status: Some(FILE_STATUS_ACTIVE.to_string()),
        }
    }

    #[test]
    fn test_insert_and_list_for_company() {
        let store = Store::in_memory().unwrap();
        let company = store.create_company(&CompanyInput::default()).unwrap();

        let first = store.insert_file(&new_record(&company.id, "a.jpg")).unwrap();
        let second = store.insert_file(&new_record(&company.id, "b.jpg")).unwrap();

        assert_eq!(first.file_type, FileKind::BusinessLicense);
        assert_eq!(first.extracted_text.as_deref(), Some("상호: 테스트"));

        let files = store.files_for_company(&company.id).unwrap();
        assert_eq!(files.len(), 2);
        // Newest first.
        assert_eq!(files[0].id, second.id);
    }

    #[test]
    fn test_get_missing_file() {
        let store = Store::in_memory().unwrap();
        assert!(matches!(
            store.get_file(42),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_all() {
        let store = Store::in_memory().unwrap();
        let a = store.create_company(&CompanyInput::default()).unwrap();
        let b = store.create_company(&CompanyInput::default()).unwrap();
        store.insert_file(&new_record(&a.id, "a.jpg")).unwrap();
        store.insert_file(&new_record(&b.id, "b.jpg")).unwrap();

        assert_eq!(store.list_files().unwrap().len(), 2);
    }
}
