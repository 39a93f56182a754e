//! Property tests for histogram ordering and snapshot immutability

use proptest::prelude::*;
use sentira_series::{
    HistogramHeader, RequestId, SentimentHistogram, SentimentPoint, SentimentTopic, Timestamp,
    TopicId, ValidationError,
};

fn points_at(millis: &[i64]) -> Vec<SentimentPoint> {
    millis
        .iter()
        .map(|&at| SentimentPoint::new(Timestamp::from_millis(at), [0.5, 0.3, 0.2]))
        .collect()
}

fn histogram_at(millis: &[i64]) -> SentimentHistogram {
    SentimentHistogram::new(HistogramHeader::standard(), points_at(millis)).unwrap()
}

fn topic_at(millis: &[i64]) -> SentimentTopic {
    SentimentTopic::from_parts(
        TopicId::new("topic"),
        "Topic",
        ["positive", "neutral", "negative"],
        points_at(millis),
        Timestamp::from_millis(0),
        RequestId::new("req-0"),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_sorted_view_is_ascending(
        millis in proptest::collection::vec(-1_000_000i64..1_000_000, 0..40),
    ) {
        let histogram = histogram_at(&millis);
        let ordered: Vec<i64> = histogram
            .sorted_by_time()
            .map(|point| point.timestamp().as_millis())
            .collect();
        prop_assert!(ordered.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_sorted_view_is_a_permutation(
        millis in proptest::collection::vec(-1_000_000i64..1_000_000, 0..40),
    ) {
        let histogram = histogram_at(&millis);
        let mut ordered: Vec<i64> = histogram
            .sorted_by_time()
            .map(|point| point.timestamp().as_millis())
            .collect();
        ordered.sort_unstable();
        let mut expected = millis.clone();
        expected.sort_unstable();
        prop_assert_eq!(ordered, expected);
    }

    #[test]
    fn prop_sorting_twice_changes_nothing(
        millis in proptest::collection::vec(-1_000_000i64..1_000_000, 0..40),
    ) {
        let histogram = histogram_at(&millis);
        let once = histogram.to_sorted();
        let twice = once.to_sorted();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.is_time_ordered());
    }

    #[test]
    fn prop_construction_checks_arity(arity in 1..6usize, value_count in 0..8usize) {
        let labels: Vec<String> = (0..arity).map(|i| format!("label{i}")).collect();
        let header = HistogramHeader::new(labels).unwrap();
        let points = vec![SentimentPoint::new(
            Timestamp::from_millis(0),
            vec![0.5; value_count],
        )];
        let result = SentimentHistogram::new(header, points);
        if value_count == arity {
            prop_assert!(result.is_ok());
        } else {
            let is_arity_mismatch = matches!(
                result,
                Err(ValidationError::ArityMismatch { point_index: 0, .. })
            );
            prop_assert!(is_arity_mismatch);
        }
    }

    #[test]
    fn prop_merge_update_never_mutates_existing(
        before in proptest::collection::vec(-1_000_000i64..1_000_000, 1..20),
        after in proptest::collection::vec(-1_000_000i64..1_000_000, 1..20),
    ) {
        let original = topic_at(&before);
        let snapshot = original.clone();

        let refreshed = original.merge_update(
            histogram_at(&after),
            Timestamp::from_millis(1),
            RequestId::new("req-1"),
        );

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(refreshed.id(), original.id());
        prop_assert_eq!(refreshed.histogram().len(), after.len());
    }
}

#[test]
fn test_out_of_order_points_sort_ascending() {
    let histogram = histogram_at(&[5_000, 1_000, 3_000]);
    let ordered: Vec<i64> = histogram
        .sorted_by_time()
        .map(|point| point.timestamp().as_millis())
        .collect();
    assert_eq!(ordered, vec![1_000, 3_000, 5_000]);
}

#[test]
fn test_label_count_matches_every_point() {
    let topic = topic_at(&[1_000, 2_000]);
    for point in topic.histogram().data() {
        assert_eq!(point.arity(), topic.label_count());
    }
}
