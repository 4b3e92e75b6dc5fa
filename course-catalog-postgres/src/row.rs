//! Decoding of the catalog rows into store records.
use course_catalog::{
    CategoryRecord, CourseListing, CourseRecord, ReviewRecord, SessionRecord,
};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub(crate) fn category(row: PgRow) -> Result<CategoryRecord, sqlx::Error> {
    Ok(CategoryRecord {
        category_id: row.try_get("category_id")?,
        category_name: row.try_get("category_name")?,
        description: row.try_get("description")?,
    })
}

/// Decodes a course row joined with its category.
///
/// The category description is expected under the `category_description` alias.
pub(crate) fn course_listing(row: PgRow) -> Result<CourseListing, sqlx::Error> {
    let course = CourseRecord {
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        course_type: row.try_get("course_type")?,
        seats_available: row.try_get("seats_available")?,
        duration: row.try_get("duration")?,
        category_id: row.try_get("category_id")?,
        instructor_id: row.try_get("instructor_id")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        thumbnail: row.try_get("thumbnail")?,
    };
    let category = CategoryRecord {
        category_id: course.category_id,
        category_name: row.try_get("category_name")?,
        description: row.try_get("category_description")?,
    };
    Ok(CourseListing { course, category })
}

pub(crate) fn review(row: PgRow) -> Result<ReviewRecord, sqlx::Error> {
    Ok(ReviewRecord {
        review_id: row.try_get("review_id")?,
        course_id: row.try_get("course_id")?,
        user_id: row.try_get("user_id")?,
        rating: row.try_get("rating")?,
        review_date: row.try_get("review_date")?,
        comments: row.try_get("comments")?,
    })
}

pub(crate) fn session(row: PgRow) -> Result<SessionRecord, sqlx::Error> {
    Ok(SessionRecord {
        session_id: row.try_get("session_id")?,
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        video_url: row.try_get("video_url")?,
        video_order: row.try_get("video_order")?,
    })
}
