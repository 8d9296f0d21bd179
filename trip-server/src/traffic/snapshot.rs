//! One generation of the traffic snapshot and its spatial indexes.

use geo_types::{Coord, Line};
use rstar::{AABB, RTree, RTreeObject};

use crate::geometry::{BoundingBox, to_web_mercator};

use super::types::{Alert, Jam, TrafficFeed};

/// A projected alert position, tagged with the alert's index in the
/// snapshot's alert list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPoint {
    pub alert_idx: usize,
    pub point: Coord<f64>,
}

impl RTreeObject for AlertPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.x, self.point.y])
    }
}

/// One consecutive vertex pair of a jam's line, in projected coordinates.
///
/// `line_order` is the pair's position within the owning jam's line,
/// indexed from 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JamSegment {
    pub jam_idx: usize,
    pub line_order: usize,
    pub line: Line<f64>,
}

impl RTreeObject for JamSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.line.start.x, self.line.start.y],
            [self.line.end.x, self.line.end.y],
        )
    }
}

/// An immutable generation of traffic data with its derived indexes.
///
/// Snapshots are built once per feed refresh and replaced wholesale; readers
/// hold an `Arc` to whichever generation they started with and never observe
/// a partially rebuilt index.
#[derive(Debug)]
pub struct TrafficSnapshot {
    pub alerts: Vec<Alert>,
    pub jams: Vec<Jam>,
    alert_index: RTree<AlertPoint>,
    jam_index: RTree<JamSegment>,
}

impl TrafficSnapshot {
    /// The empty snapshot used before the first successful feed fetch.
    pub fn empty() -> Self {
        Self {
            alerts: Vec::new(),
            jams: Vec::new(),
            alert_index: RTree::new(),
            jam_index: RTree::new(),
        }
    }

    /// Build a snapshot generation from a fetched feed document.
    ///
    /// Every jam's `road_closed` is reset here: the flag is owned by closure
    /// reconciliation during matching, never taken from the feed.
    pub fn from_feed(mut feed: TrafficFeed) -> Self {
        for jam in &mut feed.jams {
            jam.road_closed = false;
        }

        let alert_index = build_alert_index(&feed.alerts);
        let jam_index = build_jam_index(&feed.jams);

        Self {
            alerts: feed.alerts,
            jams: feed.jams,
            alert_index,
            jam_index,
        }
    }

    /// Alerts whose projected position falls inside `bbox`.
    pub fn alerts_in(&self, bbox: &BoundingBox) -> impl Iterator<Item = &AlertPoint> {
        let envelope = AABB::from_corners([bbox.min_x, bbox.min_y], [bbox.max_x, bbox.max_y]);
        self.alert_index.locate_in_envelope_intersecting(&envelope)
    }

    /// Jam segments whose envelope intersects `bbox`.
    pub fn jam_segments_in(&self, bbox: &BoundingBox) -> impl Iterator<Item = &JamSegment> {
        let envelope = AABB::from_corners([bbox.min_x, bbox.min_y], [bbox.max_x, bbox.max_y]);
        self.jam_index.locate_in_envelope_intersecting(&envelope)
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub fn jam_count(&self) -> usize {
        self.jams.len()
    }
}

/// Index all alert positions, projected to EPSG:3857.
fn build_alert_index(alerts: &[Alert]) -> RTree<AlertPoint> {
    let points = alerts
        .iter()
        .enumerate()
        .map(|(alert_idx, alert)| AlertPoint {
            alert_idx,
            point: to_web_mercator(alert.location.x, alert.location.y),
        })
        .collect();
    RTree::bulk_load(points)
}

/// Index every consecutive vertex pair of every jam line, projected to
/// EPSG:3857. Zero-length segments contribute no entry.
fn build_jam_index(jams: &[Jam]) -> RTree<JamSegment> {
    let mut segments = Vec::new();
    for (jam_idx, jam) in jams.iter().enumerate() {
        let projected: Vec<Coord<f64>> = jam
            .line
            .iter()
            .map(|vertex| to_web_mercator(vertex.x, vertex.y))
            .collect();

        for (line_order, pair) in projected.windows(2).enumerate() {
            if pair[0] == pair[1] {
                continue;
            }
            segments.push(JamSegment {
                jam_idx,
                line_order,
                line: Line::new(pair[0], pair[1]),
            });
        }
    }
    RTree::bulk_load(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic::types::{AlertKind, FeedLocation};
    use uuid::Uuid;

    fn alert(n: u128, x: f64, y: f64) -> Alert {
        Alert {
            uuid: Uuid::from_u128(n),
            location: FeedLocation { x, y },
            kind: AlertKind::Hazard,
            subtype: String::new(),
            street: None,
            city: String::new(),
            report_rating: 0,
            reliability: 0,
            confidence: 0,
            pub_millis: 0,
        }
    }

    fn jam(uuid: i64, line: Vec<(f64, f64)>) -> Jam {
        Jam {
            uuid,
            line: line.into_iter().map(|(x, y)| FeedLocation { x, y }).collect(),
            speed: 0.0,
            speed_kmh: 0.0,
            length: 0.0,
            delay: 0.0,
            level: 2,
            street: String::new(),
            city: String::new(),
            blocking_alert_uuid: None,
            road_closed: false,
            pub_millis: 0,
        }
    }

    fn feed(alerts: Vec<Alert>, jams: Vec<Jam>) -> TrafficFeed {
        TrafficFeed {
            alerts,
            jams,
            ..TrafficFeed::default()
        }
    }

    #[test]
    fn empty_snapshot_has_no_entries() {
        let snapshot = TrafficSnapshot::empty();
        assert_eq!(snapshot.alert_count(), 0);
        assert_eq!(snapshot.jam_count(), 0);
    }

    #[test]
    fn alert_query_finds_points_in_box() {
        let snapshot = TrafficSnapshot::from_feed(feed(
            vec![alert(1, 0.0, 0.0), alert(2, 1.0, 0.0)],
            vec![],
        ));

        // Box around the origin, a few hundred meters wide
        let bbox = BoundingBox {
            min_x: -500.0,
            min_y: -500.0,
            max_x: 500.0,
            max_y: 500.0,
        };
        let found: Vec<usize> = snapshot.alerts_in(&bbox).map(|p| p.alert_idx).collect();
        assert_eq!(found, vec![0]);
    }

    #[test]
    fn jam_segments_carry_order_within_their_line() {
        let snapshot = TrafficSnapshot::from_feed(feed(
            vec![],
            vec![jam(7, vec![(0.0, 0.0), (0.001, 0.0), (0.002, 0.0)])],
        ));

        let bbox = BoundingBox {
            min_x: -1.0,
            min_y: -1.0,
            max_x: 1e6,
            max_y: 1.0,
        };
        let mut orders: Vec<usize> = snapshot
            .jam_segments_in(&bbox)
            .map(|s| s.line_order)
            .collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn degenerate_jam_segments_are_skipped() {
        // Repeated vertex produces a zero-length pair which must not be
        // indexed; a single-point jam produces nothing at all.
        let snapshot = TrafficSnapshot::from_feed(feed(
            vec![],
            vec![
                jam(1, vec![(0.0, 0.0), (0.0, 0.0), (0.001, 0.0)]),
                jam(2, vec![(0.5, 0.5)]),
            ],
        ));

        let bbox = BoundingBox {
            min_x: -1e7,
            min_y: -1e7,
            max_x: 1e7,
            max_y: 1e7,
        };
        let segments: Vec<&JamSegment> = snapshot.jam_segments_in(&bbox).collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].jam_idx, 0);
        assert_eq!(segments[0].line_order, 1);
    }

    #[test]
    fn feed_road_closed_flags_are_reset() {
        let mut closed_jam = jam(3, vec![(0.0, 0.0), (0.001, 0.0)]);
        closed_jam.road_closed = true;

        let snapshot = TrafficSnapshot::from_feed(feed(vec![], vec![closed_jam]));
        assert!(!snapshot.jams[0].road_closed);
    }
}
