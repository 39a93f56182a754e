//! Legacy wire encoding
//!
//! Snapshots travel as the JSON shape the dashboard protocol has always
//! used:
//!
//! ```text
//! {
//!   "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
//!   "topic_id": "rust",
//!   "topic_name": "Rust",
//!   "last_updated": 2000,
//!   "histogram": {
//!     "header": { "v": ["positive", "neutral", "negative"] },
//!     "data": [ { "t": 1000, "v": [0.7, 0.2, 0.1] } ]
//!   },
//!   "request_id": "req-42"
//! }
//! ```
//!
//! Deserialization funnels through the validating constructors, so a
//! decoded value upholds the same invariants as a constructed one.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::histogram::{HistogramHeader, SentimentHistogram};
use crate::ids::{RecordId, RequestId, TopicId};
use crate::point::SentimentPoint;
use crate::timestamp::Timestamp;
use crate::topic::SentimentTopic;

#[derive(Serialize)]
struct WireHeaderRef<'a> {
    v: &'a [String],
}

#[derive(Serialize)]
struct WirePointRef<'a> {
    t: Timestamp,
    v: &'a [f64],
}

#[derive(Serialize)]
struct WireHistogramRef<'a> {
    header: WireHeaderRef<'a>,
    data: Vec<WirePointRef<'a>>,
}

#[derive(Serialize)]
struct WireTopicRef<'a> {
    id: RecordId,
    topic_id: &'a TopicId,
    topic_name: &'a str,
    last_updated: Timestamp,
    histogram: &'a SentimentHistogram,
    request_id: &'a RequestId,
}

#[derive(Deserialize)]
struct WireHeader {
    v: Vec<String>,
}

#[derive(Deserialize)]
struct WirePoint {
    t: Timestamp,
    v: Vec<f64>,
}

#[derive(Deserialize)]
struct WireHistogram {
    header: WireHeader,
    data: Vec<WirePoint>,
}

#[derive(Deserialize)]
struct WireTopic {
    id: RecordId,
    topic_id: TopicId,
    topic_name: String,
    last_updated: Timestamp,
    histogram: SentimentHistogram,
    request_id: RequestId,
}

impl Serialize for SentimentHistogram {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = WireHistogramRef {
            header: WireHeaderRef {
                v: self.header().labels(),
            },
            data: self
                .data()
                .iter()
                .map(|point| WirePointRef {
                    t: point.timestamp(),
                    v: point.values(),
                })
                .collect(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SentimentHistogram {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireHistogram::deserialize(deserializer)?;
        let header = HistogramHeader::new(wire.header.v).map_err(serde::de::Error::custom)?;
        let points = wire
            .data
            .into_iter()
            .map(|point| SentimentPoint::new(point.t, point.v))
            .collect();
        SentimentHistogram::new(header, points).map_err(serde::de::Error::custom)
    }
}

impl Serialize for SentimentTopic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = WireTopicRef {
            id: self.id(),
            topic_id: self.topic_id(),
            topic_name: self.topic_name(),
            last_updated: self.last_updated(),
            histogram: self.histogram(),
            request_id: self.request_id(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SentimentTopic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireTopic::deserialize(deserializer)?;
        Ok(SentimentTopic::with_id(
            wire.id,
            wire.topic_id,
            wire.topic_name,
            wire.last_updated,
            wire.histogram,
            wire.request_id,
        ))
    }
}
