//! In-memory catalog store.
//!
//! `InMemoryCatalog` implements both [`CategoryStore`] and [`CourseStore`] over plain
//! vectors. It is meant for tests and demos: it never fails, and a course whose category
//! is missing is skipped, the same way an inner join would drop it.
use std::convert::Infallible;

use async_trait::async_trait;

use crate::record::{
    CategoryId, CategoryRecord, CourseId, CourseListing, CourseRecord, CourseSnapshot,
    ReviewRecord, SessionRecord,
};
use crate::store::{CategoryStore, CourseFilter, CourseStore};

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    categories: Vec<CategoryRecord>,
    courses: Vec<CourseRecord>,
    reviews: Vec<ReviewRecord>,
    sessions: Vec<SessionRecord>,
}

impl InMemoryCatalog {
    pub fn with_category(mut self, category: CategoryRecord) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_course(mut self, course: CourseRecord) -> Self {
        self.courses.push(course);
        self
    }

    pub fn with_review(mut self, review: ReviewRecord) -> Self {
        self.reviews.push(review);
        self
    }

    pub fn with_session(mut self, session: SessionRecord) -> Self {
        self.sessions.push(session);
        self
    }

    fn category(&self, category_id: CategoryId) -> Option<&CategoryRecord> {
        self.categories
            .iter()
            .find(|category| category.category_id == category_id)
    }

    fn sorted_courses(&self, filter: CourseFilter) -> Vec<&CourseRecord> {
        let mut courses: Vec<_> = self
            .courses
            .iter()
            .filter(|course| filter.matches(course.category_id))
            .collect();
        courses.sort_by_key(|course| course.course_id);
        courses
    }

    fn snapshot(&self, course: &CourseRecord) -> Option<CourseSnapshot> {
        let category = self.category(course.category_id)?;
        Some(CourseSnapshot {
            course: course.clone(),
            category: category.clone(),
            reviews: self
                .reviews
                .iter()
                .filter(|review| review.course_id == course.course_id)
                .cloned()
                .collect(),
            sessions: self
                .sessions
                .iter()
                .filter(|session| session.course_id == course.course_id)
                .cloned()
                .collect(),
        })
    }
}

#[async_trait]
impl CategoryStore for InMemoryCatalog {
    type Error = Infallible;

    async fn category_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<CategoryRecord>, Self::Error> {
        Ok(self.category(id).cloned())
    }

    async fn categories(&self) -> Result<Vec<CategoryRecord>, Self::Error> {
        Ok(self.categories.clone())
    }
}

#[async_trait]
impl CourseStore for InMemoryCatalog {
    type Error = Infallible;

    async fn courses(&self, filter: CourseFilter) -> Result<Vec<CourseListing>, Self::Error> {
        Ok(self
            .sorted_courses(filter)
            .into_iter()
            .filter_map(|course| {
                let category = self.category(course.category_id)?;
                Some(CourseListing {
                    course: course.clone(),
                    category: category.clone(),
                })
            })
            .collect())
    }

    async fn course_snapshot(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseSnapshot>, Self::Error> {
        Ok(self
            .courses
            .iter()
            .find(|course| course.course_id == course_id)
            .and_then(|course| self.snapshot(course)))
    }

    async fn course_snapshots_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CourseSnapshot>, Self::Error> {
        Ok(self
            .sorted_courses(CourseFilter::category(category_id))
            .into_iter()
            .filter_map(|course| self.snapshot(course))
            .collect())
    }
}
