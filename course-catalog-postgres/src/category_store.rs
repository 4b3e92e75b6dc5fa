//! PostgreSQL Category Store
use async_trait::async_trait;
use course_catalog::{CategoryId, CategoryRecord, CategoryStore};
use tracing::instrument;

use crate::{row, Error, PgCatalogStore};

#[async_trait]
impl CategoryStore for PgCatalogStore {
    type Error = Error;

    #[instrument(skip(self))]
    async fn category_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<CategoryRecord>, Self::Error> {
        Ok(sqlx::query(
            "SELECT category_id, category_name, description FROM course_category WHERE category_id = $1",
        )
        .bind(id)
        .try_map(row::category)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<CategoryRecord>, Self::Error> {
        Ok(sqlx::query(
            "SELECT category_id, category_name, description FROM course_category ORDER BY category_id",
        )
        .try_map(row::category)
        .fetch_all(&self.pool)
        .await?)
    }
}
