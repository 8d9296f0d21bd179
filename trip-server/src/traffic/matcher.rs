//! Matching traffic events against itinerary route geometry.
//!
//! Works entirely on one immutable [`TrafficSnapshot`] generation. Route
//! legs are decoded from their encoded polylines, reprojected to EPSG:3857
//! and compared segment by segment against the snapshot's indexes.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use geo_types::{Coord, Line};
use tracing::debug;

use crate::domain::{TripLeg, TripResult};
use crate::geometry::{
    direction_cosine, point_segment_distance_sq, segment_bounding_box, segment_min_distance,
    to_web_mercator,
};

use super::snapshot::TrafficSnapshot;
use super::types::{Alert, AlertKind, FeedLocation, Jam, TrafficOverlay};

/// Lateral tolerance in meters for route-leg query boxes.
pub const QUERY_TOLERANCE_METERS: f64 = 10.0;

/// Distance tolerance for accepting a candidate event.
///
/// The alert path compares this against a squared distance in square meters
/// (10 m × 10 m). The jam path compares it against the cross-product-ratio
/// segment distance, which is not squared; the shared constant is part of
/// the matching contract and is deliberately not "corrected" per path.
pub const MATCH_DISTANCE_TOLERANCE: f64 = 100.0;

/// Minimum |cos| between a jam segment and a route segment for the two to
/// count as heading the same way (~10 degrees).
pub const HEADING_COSINE_THRESHOLD: f64 = 0.985;

/// Precision of the encoded leg polylines.
const POLYLINE_PRECISION: u32 = 5;

/// Attach matched traffic events to every itinerary in the batch.
pub fn attach_traffic(snapshot: &TrafficSnapshot, trips: &mut [TripResult]) {
    for trip in trips {
        trip.traffic_events = match_trip(snapshot, trip);
    }
}

/// Matched-order range bookkeeping for one jam: the smallest and largest
/// segment order seen across all of the itinerary's legs.
#[derive(Debug, Clone, Copy)]
struct OrderRange {
    min: usize,
    max: usize,
}

impl OrderRange {
    fn widen(&mut self, order: usize) {
        self.min = self.min.min(order);
        self.max = self.max.max(order);
    }
}

/// Match one itinerary against the snapshot.
fn match_trip(snapshot: &TrafficSnapshot, trip: &TripResult) -> TrafficOverlay {
    let mut alert_indices: BTreeSet<usize> = BTreeSet::new();
    let mut matched_jams: BTreeMap<usize, OrderRange> = BTreeMap::new();
    let mut candidate_jams: HashSet<usize> = HashSet::new();

    for leg in &trip.legs {
        // Road traffic is irrelevant to rail legs
        if !leg.mode_of_transport.is_road_based() {
            continue;
        }
        match_leg(
            snapshot,
            leg,
            &mut alert_indices,
            &mut matched_jams,
            &mut candidate_jams,
        );
    }

    let mut alerts: Vec<Alert> = alert_indices
        .iter()
        .map(|&idx| snapshot.alerts[idx].clone())
        .collect();

    let mut jams: Vec<Jam> = matched_jams
        .iter()
        .map(|(&jam_idx, range)| materialize_jam(&snapshot.jams[jam_idx], *range))
        .collect();

    reconcile_closures(
        snapshot,
        &mut alerts,
        &mut jams,
        &candidate_jams,
        &matched_jams,
    );

    TrafficOverlay { alerts, jams }
}

/// Match one leg's geometry against both indexes, accumulating into the
/// per-itinerary sets.
fn match_leg(
    snapshot: &TrafficSnapshot,
    leg: &TripLeg,
    alert_indices: &mut BTreeSet<usize>,
    matched_jams: &mut BTreeMap<usize, OrderRange>,
    candidate_jams: &mut HashSet<usize>,
) {
    let Ok(decoded) = polyline::decode_polyline(&leg.route, POLYLINE_PRECISION) else {
        debug!("skipping leg with undecodable route geometry");
        return;
    };

    let projected: Vec<Coord<f64>> = decoded
        .coords()
        .map(|c| to_web_mercator(c.x, c.y))
        .collect();

    for pair in projected.windows(2) {
        let leg_segment = Line::new(pair[0], pair[1]);
        let Some(bbox) = segment_bounding_box(leg_segment, QUERY_TOLERANCE_METERS) else {
            // Zero-length route segment: nothing to match against
            continue;
        };

        for alert_point in snapshot.alerts_in(&bbox) {
            let distance_sq = point_segment_distance_sq(alert_point.point, leg_segment);
            if distance_sq <= MATCH_DISTANCE_TOLERANCE {
                alert_indices.insert(alert_point.alert_idx);
            }
        }

        for jam_segment in snapshot.jam_segments_in(&bbox) {
            let distance = segment_min_distance(jam_segment.line, leg_segment);
            let heading = direction_cosine(jam_segment.line, leg_segment);

            if distance <= MATCH_DISTANCE_TOLERANCE && heading >= HEADING_COSINE_THRESHOLD {
                matched_jams
                    .entry(jam_segment.jam_idx)
                    .and_modify(|range| range.widen(jam_segment.line_order))
                    .or_insert(OrderRange {
                        min: jam_segment.line_order,
                        max: jam_segment.line_order,
                    });
            } else {
                candidate_jams.insert(jam_segment.jam_idx);
            }
        }
    }
}

/// Produce the output jam for a matched order range: the original jam with
/// its line cut down to the matched stretch.
///
/// Segment order k spans vertices k and k+1, so the matched run covers
/// vertices `min ..= max + 1`; the slice below is exactly that, clamped to
/// the line's length.
fn materialize_jam(jam: &Jam, range: OrderRange) -> Jam {
    let end = (range.max + 2).min(jam.line.len());
    let line: Vec<FeedLocation> = jam.line[range.min..end].to_vec();
    Jam {
        line,
        ..jam.clone()
    }
}

/// Resolve road-closure links between matched jams and matched alerts.
///
/// A `ROAD_CLOSED` alert that only entered the matched set through a jam the
/// route merely came near (candidate but unmatched) is spurious and dropped.
/// A matched jam with a closure link consumes its alert from the output and
/// carries `road_closed = true` instead; when the alert was not matched
/// locally, the full snapshot decides the flag without adding an alert.
fn reconcile_closures(
    snapshot: &TrafficSnapshot,
    alerts: &mut Vec<Alert>,
    jams: &mut [Jam],
    candidate_jams: &HashSet<usize>,
    matched_jams: &BTreeMap<usize, OrderRange>,
) {
    let road_closed_position = |alerts: &[Alert], uuid: uuid::Uuid| {
        alerts
            .iter()
            .position(|a| a.uuid == uuid && a.kind == AlertKind::RoadClosed)
    };

    for &jam_idx in candidate_jams {
        if matched_jams.contains_key(&jam_idx) {
            continue;
        }
        if let Some(blocking) = snapshot.jams[jam_idx].blocking_alert_uuid
            && let Some(pos) = road_closed_position(alerts, blocking)
        {
            alerts.remove(pos);
        }
    }

    for jam in jams {
        let Some(blocking) = jam.blocking_alert_uuid else {
            continue;
        };
        if let Some(pos) = road_closed_position(alerts, blocking) {
            alerts.remove(pos);
            jam.road_closed = true;
        } else if snapshot
            .alerts
            .iter()
            .any(|a| a.uuid == blocking && a.kind == AlertKind::RoadClosed)
        {
            jam.road_closed = true;
        }
    }
}
