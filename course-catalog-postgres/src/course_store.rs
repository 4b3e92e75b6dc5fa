//! PostgreSQL Course Store
//!
//! This module provides an implementation of the `CourseStore` trait using PostgreSQL as the
//! underlying storage.
//!
//! Course snapshots are read inside a read-only `REPEATABLE READ` transaction: the course,
//! its category, its reviews and its sessions all come from the same database snapshot.
//! Dropping an in-flight query drops its transaction, which is rolled back and gives the
//! connection back to the pool.
mod query;

use std::collections::HashMap;

use async_trait::async_trait;
use course_catalog::{
    CategoryId, CourseFilter, CourseId, CourseListing, CourseSnapshot, CourseStore, ReviewRecord,
    SessionRecord,
};
use query::{CourseQueryBuilder, CourseSelection};
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use crate::{row, Error};

/// PostgreSQL catalog store.
///
/// Implements both `CategoryStore` and `CourseStore`.
#[derive(Clone, Debug)]
pub struct PgCatalogStore {
    pub(crate) pool: PgPool,
}

impl PgCatalogStore {
    /// Initializes the PostgreSQL DB and returns a new instance of `PgCatalogStore`.
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool.
    pub async fn try_new(pool: PgPool) -> Result<Self, Error> {
        crate::setup(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Creates a new instance of `PgCatalogStore`.
    ///
    /// This constructor does not create the catalog tables. Use `PgCatalogStore::try_new`
    /// or `setup` if the database is not initialized yet.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn snapshots(&self, selection: CourseSelection) -> Result<Vec<CourseSnapshot>, Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        let snapshots = read_snapshots(&mut tx, selection).await?;
        tx.commit().await?;
        Ok(snapshots)
    }
}

async fn read_snapshots(
    conn: &mut PgConnection,
    selection: CourseSelection,
) -> Result<Vec<CourseSnapshot>, Error> {
    let listings = CourseQueryBuilder::courses(selection)
        .build()
        .try_map(row::course_listing)
        .fetch_all(&mut *conn)
        .await?;
    if listings.is_empty() {
        return Ok(vec![]);
    }

    let course_ids: Vec<CourseId> = listings
        .iter()
        .map(|listing| listing.course.course_id)
        .collect();
    let reviews = CourseQueryBuilder::reviews(&course_ids)
        .build()
        .try_map(row::review)
        .fetch_all(&mut *conn)
        .await?;
    let sessions = CourseQueryBuilder::sessions(&course_ids)
        .build()
        .try_map(row::session)
        .fetch_all(&mut *conn)
        .await?;

    let mut reviews = group_by_course(reviews, |review: &ReviewRecord| review.course_id);
    let mut sessions = group_by_course(sessions, |session: &SessionRecord| session.course_id);

    Ok(listings
        .into_iter()
        .map(|CourseListing { course, category }| CourseSnapshot {
            reviews: reviews.remove(&course.course_id).unwrap_or_default(),
            sessions: sessions.remove(&course.course_id).unwrap_or_default(),
            course,
            category,
        })
        .collect())
}

fn group_by_course<T>(
    records: Vec<T>,
    course_id: impl Fn(&T) -> CourseId,
) -> HashMap<CourseId, Vec<T>> {
    let mut grouped: HashMap<CourseId, Vec<T>> = HashMap::new();
    for record in records {
        grouped.entry(course_id(&record)).or_default().push(record);
    }
    grouped
}

#[async_trait]
impl CourseStore for PgCatalogStore {
    type Error = Error;

    #[instrument(skip(self))]
    async fn courses(&self, filter: CourseFilter) -> Result<Vec<CourseListing>, Self::Error> {
        Ok(CourseQueryBuilder::courses(filter.into())
            .build()
            .try_map(row::course_listing)
            .fetch_all(&self.pool)
            .await?)
    }

    #[instrument(skip(self))]
    async fn course_snapshot(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseSnapshot>, Self::Error> {
        let snapshots = self.snapshots(CourseSelection::Course(course_id)).await?;
        Ok(snapshots.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn course_snapshots_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CourseSnapshot>, Self::Error> {
        self.snapshots(CourseSelection::Category(category_id)).await
    }
}
