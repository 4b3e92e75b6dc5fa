//! Catalog service: the entry point of the catalog queries.
//!
//! The service validates the caller arguments, delegates to the stores and logs the
//! context of every store failure before returning it. It keeps no state between calls.
use tracing::{debug, error, Span};

use crate::aggregate::CourseDetailAggregator;
use crate::error::Error;
use crate::read_model::{Category, Course, CourseDetail};
use crate::record::{CategoryId, CourseId};
use crate::store::{CategoryStore, CourseFilter, CourseStore};

#[derive(Clone)]
pub struct CatalogService<C, S> {
    categories: C,
    courses: CourseDetailAggregator<S>,
    span: Span,
}

impl<C, S> CatalogService<C, S>
where
    C: CategoryStore,
    S: CourseStore,
{
    /// Creates a new `CatalogService`.
    ///
    /// # Arguments
    ///
    /// * `categories` - The store of the course categories.
    /// * `courses` - The aggregator building the course read-models.
    /// * `span` - The span every log event of the service is recorded in.
    pub fn new(categories: C, courses: CourseDetailAggregator<S>, span: Span) -> Self {
        Self {
            categories,
            courses,
            span,
        }
    }

    /// Returns the category with the given id, or `None` if it does not exist.
    pub async fn get_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Option<Category>, Error> {
        debug!(parent: &self.span, category_id, "get category");
        self.categories
            .category_by_id(category_id)
            .await
            .map(|category| category.map(Category::from))
            .map_err(|err| {
                error!(
                    parent: &self.span,
                    operation = "get_category",
                    category_id,
                    error = %err,
                    "catalog query failed",
                );
                Error::store("get_category", err)
            })
    }

    /// Returns every category. No categories is an empty list, not an error.
    pub async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        debug!(parent: &self.span, "list categories");
        self.categories
            .categories()
            .await
            .map(|categories| categories.into_iter().map(Category::from).collect())
            .map_err(|err| {
                error!(
                    parent: &self.span,
                    operation = "list_categories",
                    error = %err,
                    "catalog query failed",
                );
                Error::store("list_categories", err)
            })
    }

    /// Returns every course, or only the courses of `category_id` when given.
    pub async fn list_courses(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Course>, Error> {
        debug!(parent: &self.span, ?category_id, "list courses");
        self.courses
            .courses(CourseFilter::from(category_id))
            .await
            .map_err(|err| {
                error!(
                    parent: &self.span,
                    operation = "list_courses",
                    ?category_id,
                    error = %err,
                    "catalog query failed",
                );
                Error::store("list_courses", err)
            })
    }

    /// Returns the detail of a course, or `None` if it does not exist.
    ///
    /// A non-positive `course_id` is rejected without querying the store.
    pub async fn get_course_detail(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseDetail>, Error> {
        ensure_positive("course_id", course_id)?;
        debug!(parent: &self.span, course_id, "get course detail");
        self.courses.course_detail(course_id).await.map_err(|err| {
            error!(
                parent: &self.span,
                operation = "get_course_detail",
                course_id,
                error = %err,
                "catalog query failed",
            );
            Error::store("get_course_detail", err)
        })
    }

    /// Returns the detail of every course in a category.
    ///
    /// A non-positive `category_id` is rejected without querying the store.
    pub async fn list_course_details(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CourseDetail>, Error> {
        ensure_positive("category_id", category_id)?;
        debug!(parent: &self.span, category_id, "list course details");
        self.courses
            .course_details_by_category(category_id)
            .await
            .map_err(|err| {
                error!(
                    parent: &self.span,
                    operation = "list_course_details",
                    category_id,
                    error = %err,
                    "catalog query failed",
                );
                Error::store("list_course_details", err)
            })
    }
}

fn ensure_positive(name: &'static str, id: i32) -> Result<(), Error> {
    if id > 0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            name,
            reason: format!("must be a positive id, got {id}"),
        })
    }
}
