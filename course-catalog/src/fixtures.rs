use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::record::{
    CategoryId, CategoryRecord, CourseId, CourseRecord, ReviewId, ReviewRecord, SessionId,
    SessionRecord,
};

pub fn category(category_id: CategoryId, name: &str) -> CategoryRecord {
    CategoryRecord {
        category_id,
        category_name: name.to_string(),
        description: Some(format!("{name} courses")),
    }
}

pub fn course(course_id: CourseId, category_id: CategoryId, title: &str) -> CourseRecord {
    CourseRecord {
        course_id,
        title: title.to_string(),
        description: format!("Learn {title}"),
        price: Decimal::new(4999, 2),
        course_type: "video".to_string(),
        seats_available: Some(30),
        duration: Decimal::new(1250, 2),
        category_id,
        instructor_id: 7,
        start_date: None,
        end_date: None,
        thumbnail: None,
    }
}

pub fn reviewed_at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.checked_add_days(chrono::Days::new(day.into())))
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

pub fn review(
    review_id: ReviewId,
    course_id: CourseId,
    rating: i32,
    review_date: NaiveDateTime,
) -> ReviewRecord {
    ReviewRecord {
        review_id,
        course_id,
        user_id: 100 + review_id,
        rating,
        review_date,
        comments: None,
    }
}

pub fn session(session_id: SessionId, course_id: CourseId, video_order: i32) -> SessionRecord {
    SessionRecord {
        session_id,
        course_id,
        title: format!("Session {session_id}"),
        description: None,
        video_url: Some(format!("https://videos.example.com/{course_id}/{session_id}")),
        video_order,
    }
}
