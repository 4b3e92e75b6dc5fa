#![doc = include_str!("../README.md")]

mod aggregate;
mod error;
#[cfg(test)]
mod fixtures;
mod read_model;
mod record;
mod service;
mod store;
pub mod testing;

#[doc(inline)]
pub use crate::aggregate::{
    aggregate, order_sessions, rank_reviews, CourseDetailAggregator, ReviewPolicy,
    DEFAULT_REVIEW_LIMIT,
};
#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::read_model::{Category, Course, CourseDetail, Review, SessionDetail};
#[doc(inline)]
pub use crate::record::{
    CategoryId, CategoryRecord, CourseId, CourseListing, CourseRecord, CourseSnapshot,
    InstructorId, ReviewId, ReviewRecord, SessionId, SessionRecord, UserId,
};
#[doc(inline)]
pub use crate::service::CatalogService;
#[doc(inline)]
pub use crate::store::{CategoryStore, CourseFilter, CourseStore};

pub type BoxDynError = Box<dyn std::error::Error + 'static + Send + Sync>;
