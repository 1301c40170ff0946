use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;

use crate::config::Settings;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn init_connection_pool(settings: &Settings) -> Result<Pool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(settings.database_url.as_str());
    r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .build(manager)
}

#[cfg(test)]
pub fn init_test_connection_pool() -> Pool {
    dotenv::dotenv().ok();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set");

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create test db pool")
}
