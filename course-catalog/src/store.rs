//! Catalog stores provide read access to the catalog records.
//!
//! They are designed to be implemented by different storage backends. Implementations
//! must not mutate the records and must not retry failed reads: failures are returned
//! to the caller as they are.
use crate::record::{CategoryId, CategoryRecord, CourseId, CourseListing, CourseSnapshot};
use async_trait::async_trait;
use std::error::Error as StdError;

/// Read access to the course categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Returns the category with the given id, or `None` if it does not exist.
    async fn category_by_id(&self, id: CategoryId)
        -> Result<Option<CategoryRecord>, Self::Error>;

    /// Returns every category. The order is not significant.
    async fn categories(&self) -> Result<Vec<CategoryRecord>, Self::Error>;
}

/// Read access to the courses and to their reviews and sessions.
#[async_trait]
pub trait CourseStore: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Returns the courses matching the filter, each joined with its category.
    ///
    /// Courses are returned ordered by id.
    async fn courses(&self, filter: CourseFilter) -> Result<Vec<CourseListing>, Self::Error>;

    /// Returns the snapshot of one course, or `None` if the course does not exist.
    ///
    /// The course, its category, its reviews and its sessions must be read from a single
    /// consistent view of the store.
    async fn course_snapshot(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseSnapshot>, Self::Error>;

    /// Returns the snapshots of every course of a category, ordered by course id.
    async fn course_snapshots_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CourseSnapshot>, Self::Error>;
}

/// Selects the courses returned by [`CourseStore::courses`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CourseFilter {
    category_id: Option<CategoryId>,
}

impl CourseFilter {
    /// Matches every course.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the courses of the given category.
    pub fn category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns true if the course record with the given category passes the filter.
    pub fn matches(&self, category_id: CategoryId) -> bool {
        self.category_id.map_or(true, |id| id == category_id)
    }
}

impl From<Option<CategoryId>> for CourseFilter {
    fn from(category_id: Option<CategoryId>) -> Self {
        Self { category_id }
    }
}
