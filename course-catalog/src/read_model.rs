//! Read-models returned to the callers of the catalog.
//!
//! Field names are serialized in camelCase, absent optional values as `null`.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::{CategoryId, CourseId, InstructorId, ReviewId, SessionId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
}

/// A course with its category embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub course_type: String,
    pub seats_available: Option<i32>,
    #[serde(with = "rust_decimal::serde::float")]
    pub duration: Decimal,
    pub category_id: CategoryId,
    pub instructor_id: InstructorId,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub thumbnail: Option<String>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: ReviewId,
    pub course_id: CourseId,
    pub user_id: UserId,
    pub rating: i32,
    pub review_date: NaiveDateTime,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub session_id: SessionId,
    pub course_id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_order: i32,
}

/// The detail view of a course.
///
/// Built fresh for every request: the course fields are flattened next to the ranked
/// `reviews` and the ordered `sessionDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub reviews: Vec<Review>,
    pub session_details: Vec<SessionDetail>,
}
