use crate::Database;
use crate::models::InquiryRow;
use anyhow::Result;
use vitrine_types::models::NewInquiry;

impl Database {
    /// Insert a validated inquiry and return the id SQLite assigned.
    /// Single INSERT, so the write either fully commits or fully fails.
    pub fn insert_inquiry(&self, inquiry: &NewInquiry, created_at: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO inquiries (created_at, name, email, phone, user_message, budget, employment)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    created_at,
                    inquiry.name,
                    inquiry.email,
                    inquiry.phone,
                    inquiry.user_message,
                    inquiry.budget,
                    inquiry.employment
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// All inquiries, newest first. Ties in `created_at` break by id
    /// descending so repeated listings are deterministic.
    pub fn list_inquiries(&self) -> Result<Vec<InquiryRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, created_at, name, email, phone, user_message, budget, employment
                 FROM inquiries
                 ORDER BY created_at DESC, id DESC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(InquiryRow {
                        id: row.get(0)?,
                        created_at: row.get(1)?,
                        name: row.get(2)?,
                        email: row.get(3)?,
                        phone: row.get(4)?,
                        user_message: row.get(5)?,
                        budget: row.get(6)?,
                        employment: row.get(7)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(name: &str, email: &str) -> NewInquiry {
        NewInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            user_message: None,
            budget: None,
            employment: None,
        }
    }

    #[test]
    fn insert_assigns_strictly_increasing_ids() {
        let db = Database::open_in_memory().unwrap();

        let a = db
            .insert_inquiry(&inquiry("Jane Doe", "jane@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();
        let b = db
            .insert_inquiry(&inquiry("John Doe", "john@example.com"), "2026-08-30T10:00:01Z")
            .unwrap();
        let c = db
            .insert_inquiry(&inquiry("Ada", "ada@example.com"), "2026-08-30T10:00:02Z")
            .unwrap();

        assert_eq!(a, 1);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn list_returns_newest_first() {
        let db = Database::open_in_memory().unwrap();

        db.insert_inquiry(&inquiry("Old", "old@example.com"), "2026-08-30T09:00:00Z")
            .unwrap();
        db.insert_inquiry(&inquiry("Mid", "mid@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();
        db.insert_inquiry(&inquiry("New", "new@example.com"), "2026-08-30T11:00:00Z")
            .unwrap();

        let rows = db.list_inquiries().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["New", "Mid", "Old"]);
    }

    #[test]
    fn list_breaks_timestamp_ties_by_id_descending() {
        let db = Database::open_in_memory().unwrap();

        db.insert_inquiry(&inquiry("First", "a@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();
        db.insert_inquiry(&inquiry("Second", "b@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();

        let rows = db.list_inquiries().unwrap();
        assert_eq!(rows[0].name, "Second");
        assert_eq!(rows[1].name, "First");
    }

    #[test]
    fn optional_fields_round_trip() {
        let db = Database::open_in_memory().unwrap();

        let full = NewInquiry {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            user_message: Some("Hello there".to_string()),
            budget: Some("5k-10k".to_string()),
            employment: Some("freelance".to_string()),
        };
        db.insert_inquiry(&full, "2026-08-30T10:00:00Z").unwrap();
        db.insert_inquiry(&inquiry("Bare", "bare@example.com"), "2026-08-30T10:00:01Z")
            .unwrap();

        let rows = db.list_inquiries().unwrap();
        assert_eq!(rows.len(), 2);

        let bare = &rows[0];
        assert_eq!(bare.phone, None);
        assert_eq!(bare.user_message, None);

        let stored = &rows[1];
        assert_eq!(stored.name, "Jane Doe");
        assert_eq!(stored.phone.as_deref(), Some("555-0100"));
        assert_eq!(stored.user_message.as_deref(), Some("Hello there"));
        assert_eq!(stored.budget.as_deref(), Some("5k-10k"));
        assert_eq!(stored.employment.as_deref(), Some("freelance"));
    }

    #[test]
    fn migrations_are_idempotent() {
        let db = Database::open_in_memory().unwrap();

        db.insert_inquiry(&inquiry("Jane Doe", "jane@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();

        // Re-running schema setup must neither fail nor drop data.
        db.with_conn(crate::migrations::run).unwrap();

        let rows = db.list_inquiries().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn list_is_idempotent() {
        let db = Database::open_in_memory().unwrap();

        db.insert_inquiry(&inquiry("Jane Doe", "jane@example.com"), "2026-08-30T10:00:00Z")
            .unwrap();

        let first = db.list_inquiries().unwrap();
        let second = db.list_inquiries().unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].created_at, second[0].created_at);
    }
}
