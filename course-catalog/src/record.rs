//! Records as they are read from a catalog store.
//!
//! Records are plain data. They carry no knowledge of the read-models built from them:
//! the mapping from record to read-model is one-way and lives in the aggregation layer.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

pub type CategoryId = i32;
pub type CourseId = i32;
pub type ReviewId = i32;
pub type SessionId = i32;
pub type UserId = i32;
pub type InstructorId = i32;

/// A course category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
}

/// A course, referencing its category and instructor by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub course_type: String,
    pub seats_available: Option<i32>,
    pub duration: Decimal,
    pub category_id: CategoryId,
    pub instructor_id: InstructorId,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub thumbnail: Option<String>,
}

/// A user review of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub review_id: ReviewId,
    pub course_id: CourseId,
    pub user_id: UserId,
    pub rating: i32,
    pub review_date: NaiveDateTime,
    pub comments: Option<String>,
}

/// One video session of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub course_id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_order: i32,
}

/// A course joined with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListing {
    pub course: CourseRecord,
    pub category: CategoryRecord,
}

/// Every record needed to build the detail of one course.
///
/// A store must read all the records of a snapshot from the same consistent view of
/// its data, so that a concurrent write cannot produce a torn detail.
/// `reviews` and `sessions` are complete and in no particular order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSnapshot {
    pub course: CourseRecord,
    pub category: CategoryRecord,
    pub reviews: Vec<ReviewRecord>,
    pub sessions: Vec<SessionRecord>,
}
