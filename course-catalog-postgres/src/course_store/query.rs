use course_catalog::{CategoryId, CourseFilter, CourseId};
use sqlx::Postgres;

const COURSE_SELECT: &str = "SELECT c.course_id, c.title, c.description, c.price, c.course_type, \
c.seats_available, c.duration, c.category_id, c.instructor_id, c.start_date, c.end_date, \
c.thumbnail, cc.category_name, cc.description AS category_description \
FROM course c JOIN course_category cc ON cc.category_id = c.category_id";

const REVIEW_SELECT: &str =
    "SELECT review_id, course_id, user_id, rating, review_date, comments FROM review";

const SESSION_SELECT: &str =
    "SELECT session_id, course_id, title, description, video_url, video_order FROM session_details";

/// The courses a course query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSelection {
    All,
    Category(CategoryId),
    Course(CourseId),
}

impl From<CourseFilter> for CourseSelection {
    fn from(filter: CourseFilter) -> Self {
        match filter.category_id() {
            Some(category_id) => Self::Category(category_id),
            None => Self::All,
        }
    }
}

/// SQL Query Builder
///
/// Builds the queries reading the courses, joined with their category, and the
/// reviews and sessions of a set of courses.
pub struct CourseQueryBuilder;

impl CourseQueryBuilder {
    /// Builds the query of the selected courses, ordered by course id.
    pub fn courses(selection: CourseSelection) -> sqlx::QueryBuilder<'static, Postgres> {
        let mut builder = sqlx::QueryBuilder::new(COURSE_SELECT);
        match selection {
            CourseSelection::All => {}
            CourseSelection::Category(category_id) => {
                builder.push(" WHERE c.category_id = ").push_bind(category_id);
            }
            CourseSelection::Course(course_id) => {
                builder.push(" WHERE c.course_id = ").push_bind(course_id);
            }
        }
        builder.push(" ORDER BY c.course_id");
        builder
    }

    /// Builds the query of the reviews of the given courses.
    ///
    /// Within a course, reviews come highest rating first, then newest first, then by id.
    pub fn reviews(course_ids: &[CourseId]) -> sqlx::QueryBuilder<'static, Postgres> {
        let mut builder = sqlx::QueryBuilder::new(REVIEW_SELECT);
        builder
            .push(" WHERE course_id = ANY(")
            .push_bind(course_ids.to_vec())
            .push(") ORDER BY course_id, rating DESC, review_date DESC, review_id");
        builder
    }

    /// Builds the query of the sessions of the given courses.
    ///
    /// Within a course, sessions come by video order, then by id.
    pub fn sessions(course_ids: &[CourseId]) -> sqlx::QueryBuilder<'static, Postgres> {
        let mut builder = sqlx::QueryBuilder::new(SESSION_SELECT);
        builder
            .push(" WHERE course_id = ANY(")
            .push_bind(course_ids.to_vec())
            .push(") ORDER BY course_id, video_order, session_id");
        builder
    }
}
