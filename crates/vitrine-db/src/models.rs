/// Database row types — these map directly to SQLite rows.
/// Distinct from the vitrine-types API models to keep the DB layer
/// independent; timestamps stay as the stored text here.
#[derive(Debug)]
pub struct InquiryRow {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_message: Option<String>,
    pub budget: Option<String>,
    pub employment: Option<String>,
}
