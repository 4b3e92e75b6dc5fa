//! # PostgreSQL Course Catalog Backend
//!
//! Implements the `course_catalog` stores on top of a `sqlx` PostgreSQL pool.
mod category_store;
mod course_store;
mod error;
mod row;

pub use crate::course_store::PgCatalogStore;
pub use error::Error;

/// Initializes the PostgreSQL DB
///
/// It creates the catalog tables and their indexes if they do not exist yet.
pub async fn setup(pool: &sqlx::PgPool) -> Result<(), Error> {
    const STATEMENTS: &[&str] = &[
        include_str!("sql/table_course_category.sql"),
        include_str!("sql/table_course.sql"),
        include_str!("sql/table_review.sql"),
        include_str!("sql/table_session_details.sql"),
        include_str!("sql/idx_course_category_id.sql"),
        include_str!("sql/idx_review_course_id.sql"),
        include_str!("sql/idx_session_details_course_id.sql"),
    ];

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
