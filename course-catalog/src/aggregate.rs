//! Course detail aggregation.
//!
//! The aggregator turns the records of a course snapshot into a [`CourseDetail`]:
//! it embeds the category, ranks and truncates the reviews, and orders the sessions.
//! Given the same records, in any order, the output is always the same.
use std::cmp::Ordering;

use tracing::instrument;

use crate::read_model::{Category, Course, CourseDetail, Review, SessionDetail};
use crate::record::{
    CategoryId, CategoryRecord, CourseId, CourseListing, CourseRecord, CourseSnapshot,
    ReviewRecord, SessionRecord,
};
use crate::store::{CourseFilter, CourseStore};

/// The number of reviews kept in a course detail.
pub const DEFAULT_REVIEW_LIMIT: usize = 10;

/// Controls how many reviews are kept in a course detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPolicy {
    limit: usize,
}

impl ReviewPolicy {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self::with_limit(DEFAULT_REVIEW_LIMIT)
    }
}

/// Ranks the reviews and keeps the first `policy.limit()` of them.
///
/// Reviews are ordered by rating descending, then by review date descending
/// (newest first), then by review id ascending. Ratings are not validated.
pub fn rank_reviews(mut reviews: Vec<ReviewRecord>, policy: ReviewPolicy) -> Vec<ReviewRecord> {
    reviews.sort_by(review_rank);
    reviews.truncate(policy.limit());
    reviews
}

/// Orders the sessions by video order ascending, then by session id ascending.
///
/// Every session is kept. Video orders may repeat or have gaps.
pub fn order_sessions(mut sessions: Vec<SessionRecord>) -> Vec<SessionRecord> {
    sessions.sort_by_key(|session| (session.video_order, session.session_id));
    sessions
}

fn review_rank(a: &ReviewRecord, b: &ReviewRecord) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| b.review_date.cmp(&a.review_date))
        .then_with(|| a.review_id.cmp(&b.review_id))
}

/// Builds the detail of a course from its snapshot.
pub fn aggregate(snapshot: CourseSnapshot, policy: ReviewPolicy) -> CourseDetail {
    let CourseSnapshot {
        course,
        category,
        reviews,
        sessions,
    } = snapshot;

    CourseDetail {
        course: course_with_category(course, category),
        reviews: rank_reviews(reviews, policy)
            .into_iter()
            .map(Review::from)
            .collect(),
        session_details: order_sessions(sessions)
            .into_iter()
            .map(SessionDetail::from)
            .collect(),
    }
}

fn course_with_category(course: CourseRecord, category: CategoryRecord) -> Course {
    Course {
        course_id: course.course_id,
        title: course.title,
        description: course.description,
        price: course.price,
        course_type: course.course_type,
        seats_available: course.seats_available,
        duration: course.duration,
        category_id: course.category_id,
        instructor_id: course.instructor_id,
        start_date: course.start_date,
        end_date: course.end_date,
        thumbnail: course.thumbnail,
        category: category.into(),
    }
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            category_id: record.category_id,
            category_name: record.category_name,
            description: record.description,
        }
    }
}

impl From<CourseListing> for Course {
    fn from(listing: CourseListing) -> Self {
        course_with_category(listing.course, listing.category)
    }
}

impl From<ReviewRecord> for Review {
    fn from(record: ReviewRecord) -> Self {
        Self {
            review_id: record.review_id,
            course_id: record.course_id,
            user_id: record.user_id,
            rating: record.rating,
            review_date: record.review_date,
            comments: record.comments,
        }
    }
}

impl From<SessionRecord> for SessionDetail {
    fn from(record: SessionRecord) -> Self {
        Self {
            session_id: record.session_id,
            course_id: record.course_id,
            title: record.title,
            description: record.description,
            video_url: record.video_url,
            video_order: record.video_order,
        }
    }
}

/// Reads courses from a [`CourseStore`] and builds their read-models.
#[derive(Debug, Clone)]
pub struct CourseDetailAggregator<S> {
    store: S,
    policy: ReviewPolicy,
}

impl<S: CourseStore> CourseDetailAggregator<S> {
    /// Creates an aggregator keeping [`DEFAULT_REVIEW_LIMIT`] reviews per course.
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ReviewPolicy::default(),
        }
    }

    pub fn with_review_policy(mut self, policy: ReviewPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Lists the courses matching the filter with their category embedded.
    #[instrument(skip(self))]
    pub async fn courses(&self, filter: CourseFilter) -> Result<Vec<Course>, S::Error> {
        let listings = self.store.courses(filter).await?;
        Ok(listings.into_iter().map(Course::from).collect())
    }

    /// Builds the detail of a course, or returns `None` if the course does not exist.
    #[instrument(skip(self))]
    pub async fn course_detail(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseDetail>, S::Error> {
        let snapshot = self.store.course_snapshot(course_id).await?;
        Ok(snapshot.map(|snapshot| aggregate(snapshot, self.policy)))
    }

    /// Builds the detail of every course in a category, ordered by course id.
    #[instrument(skip(self))]
    pub async fn course_details_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<CourseDetail>, S::Error> {
        let snapshots = self.store.course_snapshots_by_category(category_id).await?;
        Ok(snapshots
            .into_iter()
            .map(|snapshot| aggregate(snapshot, self.policy))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{category, course, review, reviewed_at, session};
    use crate::testing::InMemoryCatalog;
    use assert2::{check, let_assert};

    fn ratings(detail: &CourseDetail) -> Vec<i32> {
        detail.reviews.iter().map(|r| r.rating).collect()
    }

    fn video_orders(detail: &CourseDetail) -> Vec<i32> {
        detail.session_details.iter().map(|s| s.video_order).collect()
    }

    fn go_basics() -> CourseSnapshot {
        CourseSnapshot {
            course: course(10, 1, "Go Basics"),
            category: category(1, "Programming"),
            reviews: vec![
                review(1, 10, 5, reviewed_at(1)),
                review(2, 10, 3, reviewed_at(2)),
                review(3, 10, 5, reviewed_at(3)),
                review(4, 10, 1, reviewed_at(4)),
            ],
            sessions: vec![session(1, 10, 3), session(2, 10, 1), session(3, 10, 2)],
        }
    }

    #[test]
    fn it_ranks_reviews_by_rating_and_orders_sessions() {
        let detail = aggregate(go_basics(), ReviewPolicy::default());

        check!(ratings(&detail) == vec![5, 5, 3, 1]);
        check!(video_orders(&detail) == vec![1, 2, 3]);
    }

    #[test]
    fn it_breaks_rating_ties_with_the_newest_review_first() {
        let detail = aggregate(go_basics(), ReviewPolicy::default());

        let ids: Vec<_> = detail.reviews.iter().map(|r| r.review_id).collect();
        check!(ids == vec![3, 1, 2, 4]);
    }

    #[test]
    fn it_breaks_full_ties_by_review_id() {
        let reviews = vec![
            review(9, 10, 4, reviewed_at(1)),
            review(2, 10, 4, reviewed_at(1)),
            review(5, 10, 4, reviewed_at(1)),
        ];

        let ranked = rank_reviews(reviews, ReviewPolicy::default());

        let ids: Vec<_> = ranked.iter().map(|r| r.review_id).collect();
        check!(ids == vec![2, 5, 9]);
    }

    #[test]
    fn it_keeps_the_ten_highest_rated_reviews() {
        let reviews = (1..=15)
            .map(|id| review(id, 10, (id % 5) + 1, reviewed_at(id as u32)))
            .collect::<Vec<_>>();
        let mut expected = reviews.iter().map(|r| r.rating).collect::<Vec<_>>();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(10);

        let ranked = rank_reviews(reviews, ReviewPolicy::default());

        check!(ranked.len() == 10);
        check!(ranked.iter().map(|r| r.rating).collect::<Vec<_>>() == expected);
    }

    #[test]
    fn it_honors_a_custom_review_limit() {
        let ranked = rank_reviews(go_basics().reviews, ReviewPolicy::with_limit(2));

        check!(ranked.iter().map(|r| r.rating).collect::<Vec<_>>() == vec![5, 5]);
    }

    #[test]
    fn it_keeps_every_session_with_duplicated_and_sparse_orders() {
        let sessions = vec![
            session(4, 10, 7),
            session(3, 10, 2),
            session(1, 10, 7),
            session(2, 10, 40),
        ];

        let ordered = order_sessions(sessions);

        let ids: Vec<_> = ordered.iter().map(|s| s.session_id).collect();
        check!(ids == vec![3, 1, 4, 2]);
    }

    #[test]
    fn it_embeds_the_full_category() {
        let detail = aggregate(go_basics(), ReviewPolicy::default());

        check!(
            detail.course.category
                == Category {
                    category_id: 1,
                    category_name: "Programming".to_string(),
                    description: Some("Programming courses".to_string()),
                }
        );
        check!(detail.course.category_id == detail.course.category.category_id);
    }

    #[test]
    fn it_produces_the_same_detail_regardless_of_record_order() {
        let mut shuffled = go_basics();
        shuffled.reviews.reverse();
        shuffled.sessions.rotate_left(1);

        check!(
            aggregate(go_basics(), ReviewPolicy::default())
                == aggregate(shuffled, ReviewPolicy::default())
        );
    }

    #[tokio::test]
    async fn it_returns_none_for_a_missing_course() {
        let aggregator = CourseDetailAggregator::new(InMemoryCatalog::default());

        let_assert!(Ok(detail) = aggregator.course_detail(999).await);
        check!(detail.is_none());
    }

    #[tokio::test]
    async fn it_applies_the_review_policy_to_course_details() {
        let catalog = InMemoryCatalog::default()
            .with_category(category(1, "Programming"))
            .with_course(course(10, 1, "Go Basics"))
            .with_review(review(1, 10, 5, reviewed_at(1)))
            .with_review(review(2, 10, 3, reviewed_at(2)))
            .with_review(review(3, 10, 5, reviewed_at(3)))
            .with_review(review(4, 10, 1, reviewed_at(4)));
        let aggregator =
            CourseDetailAggregator::new(catalog).with_review_policy(ReviewPolicy::with_limit(2));

        let_assert!(Ok(Some(detail)) = aggregator.course_detail(10).await);
        let_assert!(Ok(details) = aggregator.course_details_by_category(1).await);

        check!(detail.reviews.iter().map(|r| r.review_id).collect::<Vec<_>>() == vec![3, 1]);
        check!(ratings(&details[0]) == vec![5, 5]);
    }

    #[tokio::test]
    async fn it_builds_the_details_of_a_category() {
        let catalog = InMemoryCatalog::default()
            .with_category(category(1, "Programming"))
            .with_category(category(2, "Design"))
            .with_course(course(11, 1, "Rust Basics"))
            .with_course(course(10, 1, "Go Basics"))
            .with_course(course(20, 2, "Figma"))
            .with_review(review(1, 10, 2, reviewed_at(1)))
            .with_review(review(2, 10, 4, reviewed_at(2)))
            .with_session(session(1, 11, 2))
            .with_session(session(2, 11, 1));
        let aggregator = CourseDetailAggregator::new(catalog);

        let_assert!(Ok(details) = aggregator.course_details_by_category(1).await);

        let ids: Vec<_> = details.iter().map(|d| d.course.course_id).collect();
        check!(ids == vec![10, 11]);
        check!(ratings(&details[0]) == vec![4, 2]);
        check!(video_orders(&details[1]) == vec![1, 2]);
    }

    #[test]
    fn it_serializes_the_detail_with_camel_case_fields() {
        let detail = aggregate(go_basics(), ReviewPolicy::default());

        let json = serde_json::to_value(&detail).unwrap();

        check!(json["courseId"] == 10);
        check!(json["category"]["categoryName"] == "Programming");
        check!(json["reviews"][0]["reviewId"] == 3);
        check!(json["sessionDetails"][0]["videoOrder"] == 1);
        check!(json["thumbnail"].is_null());
    }

    #[test]
    fn it_serializes_price_and_duration_as_numbers() {
        let detail = aggregate(go_basics(), ReviewPolicy::default());

        let json = serde_json::to_value(&detail).unwrap();

        check!(json["price"] == 49.99);
        check!(json["duration"] == 12.5);
        check!(json["category"].get("price").is_none());
    }
}
