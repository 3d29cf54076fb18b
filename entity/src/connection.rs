use sea_orm::{Database, DatabaseConnection, DbErr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://words.db?mode=rwc";

/// `DATABASE_URL` from the environment or `.env`.
pub fn database_url() -> String {
    dotenv::dotenv().ok();
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned())
}

pub async fn get_connection() -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url()).await
}
