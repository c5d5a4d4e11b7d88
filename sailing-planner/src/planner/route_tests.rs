//! Unit tests for the route finder.

use super::route::{RouteError, RouteQuery, Segment};

/// Minimal schedule entry with hour-granularity times.
#[derive(Debug, Clone)]
struct Hop {
    id: u32,
    from: &'static str,
    to: &'static str,
    depart: u32,
    arrive: u32,
    price: u32,
}

impl Segment for Hop {
    type Id = u32;
    type Location = &'static str;
    type Time = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn origin(&self) -> &&'static str {
        &self.from
    }

    fn destination(&self) -> &&'static str {
        &self.to
    }

    fn departure(&self) -> u32 {
        self.depart
    }

    fn arrival(&self) -> u32 {
        self.arrive
    }
}

fn hop(id: u32, from: &'static str, to: &'static str, depart: u32, arrive: u32, price: u32) -> Hop {
    Hop {
        id,
        from,
        to,
        depart,
        arrive,
        price,
    }
}

fn price(hop: &Hop) -> u32 {
    hop.price
}

fn find(hops: &[Hop], from: &'static str, to: &'static str, min_start: u32) -> Vec<u32> {
    RouteQuery::new()
        .segments(hops)
        .origin(&from)
        .destination(&to)
        .min_start(min_start)
        .cost_of(&price)
        .find()
        .unwrap()
}

#[test]
fn direct_path() {
    let hops = vec![hop(1, "A", "B", 5, 10, 500)];
    assert_eq!(find(&hops, "A", "B", 0), vec![1]);
}

#[test]
fn two_hop_path_beats_expensive_direct() {
    // A->B (day 0-3, 300), A->C (day 0-5, 700), B->C (day 3-5, 300)
    let hops = vec![
        hop(1, "A", "B", 0, 3, 300),
        hop(2, "A", "C", 0, 5, 700),
        hop(3, "B", "C", 3, 5, 300),
    ];
    assert_eq!(find(&hops, "A", "C", 0), vec![1, 3]);
}

#[test]
fn custom_objects_cheapest_via_intermediate() {
    // Mirrors a same-day schedule: direct A->C is dearer than A->B->C,
    // and a cheap A->C before the start time is ignored.
    let hops = vec![
        hop(1, "A", "C", 12, 14, 100),
        hop(2, "A", "B", 12, 13, 30),
        hop(3, "B", "C", 13, 14, 30),
        hop(4, "A", "C", 2, 4, 20),
    ];
    assert_eq!(find(&hops, "A", "C", 10), vec![2, 3]);
    assert_eq!(find(&hops, "A", "B", 10), vec![2]);
    assert!(find(&hops, "A", "C", 0).contains(&4));
}

#[test]
fn departures_before_min_start_are_ignored() {
    let hops = vec![hop(1, "A", "B", 1, 5, 100), hop(2, "A", "B", 8, 12, 500)];
    assert_eq!(find(&hops, "A", "B", 6), vec![2]);
    assert!(find(&hops, "A", "B", 9).is_empty());
}

#[test]
fn overlapping_connection_is_not_taken() {
    // B->C leaves before A->B arrives
    let hops = vec![hop(1, "A", "B", 5, 10, 300), hop(2, "B", "C", 8, 15, 200)];
    assert!(find(&hops, "A", "C", 0).is_empty());
}

#[test]
fn zero_layover_connection_is_legal() {
    let hops = vec![hop(1, "A", "B", 0, 5, 1), hop(2, "B", "C", 5, 9, 1)];
    assert_eq!(find(&hops, "A", "C", 0), vec![1, 2]);
}

#[test]
fn unreachable_destination_is_empty() {
    let hops = vec![hop(1, "A", "B", 0, 5, 1), hop(2, "C", "D", 6, 9, 1)];
    assert!(find(&hops, "A", "D", 0).is_empty());
    assert!(find(&hops, "A", "Z", 0).is_empty());
    assert!(find(&hops, "Z", "A", 0).is_empty());
}

#[test]
fn equal_cost_direct_prefers_first_in_collection() {
    let hops = vec![hop(1, "A", "B", 0, 7, 200), hop(2, "A", "B", 1, 9, 200)];
    assert_eq!(find(&hops, "A", "B", 0), vec![1]);
}

#[test]
fn equal_total_cost_prefers_cheaper_first_leg() {
    let hops = vec![
        hop(1, "A", "D", 0, 2, 4),
        hop(2, "D", "C", 2, 3, 6),
        hop(3, "A", "B", 0, 1, 1),
        hop(4, "B", "C", 1, 2, 9),
    ];
    assert_eq!(find(&hops, "A", "C", 0), vec![3, 4]);
}

#[test]
fn shared_timestamps_collide_across_destinations() {
    // A->B and A->D share (0, 2). A->B is popped first, so A->D is skipped
    // and the only route to C (through D) is never explored.
    let hops = vec![
        hop(1, "A", "B", 0, 2, 1),
        hop(2, "A", "D", 0, 2, 5),
        hop(3, "D", "C", 2, 4, 1),
    ];
    assert!(find(&hops, "A", "C", 0).is_empty());

    // With distinct timestamps the same network is searchable.
    let hops = vec![
        hop(1, "A", "B", 0, 2, 1),
        hop(2, "A", "D", 0, 3, 5),
        hop(3, "D", "C", 3, 4, 1),
    ];
    assert_eq!(find(&hops, "A", "C", 0), vec![2, 3]);
}

#[test]
fn first_popped_path_to_a_segment_wins() {
    // Two routes reach M->D. The dearer one is queued first and claims the
    // (5, 6) key, so the cheaper route through E is skipped at M->D.
    let hops = vec![
        hop(1, "A", "B", 0, 1, 1),
        hop(2, "A", "E", 0, 2, 2),
        hop(3, "B", "M", 1, 2, 100),
        hop(4, "E", "M", 2, 3, 1),
        hop(5, "M", "D", 5, 6, 1),
    ];
    assert_eq!(find(&hops, "A", "D", 0), vec![1, 3, 5]);
}

#[test]
fn only_non_improving_destination_candidates_are_expanded() {
    // Hop 3 carries a rebate. The improving arrival via hop 1 is not
    // expanded, so the loop B->Y->B is only reached from hop 4, which
    // arrived at B without improving on the best.
    let hops = vec![
        hop(1, "A", "B", 0, 1, 5),
        hop(4, "A", "B", 0, 2, 7),
        hop(2, "B", "Y", 2, 3, 0),
        hop(3, "Y", "B", 3, 4, 0),
    ];
    let rebated = |hop: &Hop| i64::from(hop.price) - if hop.id == 3 { 10 } else { 0 };

    let ids = RouteQuery::new()
        .segments(&hops)
        .origin(&"A")
        .destination(&"B")
        .min_start(0)
        .cost_of(&rebated)
        .find()
        .unwrap();
    assert_eq!(ids, vec![4, 2, 3]);
}

#[test]
fn repeated_calls_are_identical() {
    let hops = vec![
        hop(1, "A", "B", 0, 3, 300),
        hop(2, "A", "C", 0, 5, 700),
        hop(3, "B", "C", 3, 5, 300),
    ];
    let first = find(&hops, "A", "C", 0);
    for _ in 0..5 {
        assert_eq!(find(&hops, "A", "C", 0), first);
    }
}

#[test]
fn missing_inputs_are_rejected() {
    let hops = vec![hop(1, "A", "B", 0, 5, 1)];
    let origin = "A";
    let destination = "B";

    let err = RouteQuery::<Hop, u32>::new()
        .origin(&origin)
        .destination(&destination)
        .min_start(0)
        .cost_of(&price)
        .find()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidInput { field: "segments" });

    let err = RouteQuery::new()
        .segments(&hops)
        .destination(&destination)
        .min_start(0)
        .cost_of(&price)
        .find()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidInput { field: "origin" });

    let err = RouteQuery::new()
        .segments(&hops)
        .origin(&origin)
        .min_start(0)
        .cost_of(&price)
        .find()
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidInput {
            field: "destination"
        }
    );

    let err = RouteQuery::new()
        .segments(&hops)
        .origin(&origin)
        .destination(&destination)
        .cost_of(&price)
        .find()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidInput { field: "min_start" });

    let err = RouteQuery::<Hop, u32>::new()
        .segments(&hops)
        .origin(&origin)
        .destination(&destination)
        .min_start(0)
        .find()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidInput { field: "cost_of" });
    assert_eq!(err.to_string(), "invalid input: cost_of is required");
}

#[test]
fn empty_segments_are_invalid_input() {
    let err = RouteQuery::<Hop, u32>::new()
        .segments(&[])
        .origin(&"A")
        .destination(&"B")
        .min_start(0)
        .cost_of(&price)
        .find()
        .unwrap_err();
    assert_eq!(err, RouteError::InvalidInput { field: "segments" });
}

#[test]
fn cost_accessor_selects_metric() {
    // Cheapest by price is the two-hop route; by duration the direct one.
    let hops = vec![
        hop(1, "A", "C", 0, 4, 700),
        hop(2, "A", "B", 0, 3, 100),
        hop(3, "B", "C", 3, 8, 100),
    ];
    assert_eq!(find(&hops, "A", "C", 0), vec![2, 3]);

    let duration = |hop: &Hop| hop.arrive - hop.depart;
    let ids = RouteQuery::new()
        .segments(&hops)
        .origin(&"A")
        .destination(&"C")
        .min_start(0)
        .cost_of(&duration)
        .find()
        .unwrap();
    assert_eq!(ids, vec![1]);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const PLACES: [&str; 4] = ["A", "B", "C", "D"];

    fn hops() -> impl Strategy<Value = Vec<Hop>> {
        prop::collection::vec((0usize..4, 0usize..4, 0u32..20, 1u32..6, 0u32..50), 0..12).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (from, to, depart, len, price))| {
                        hop(i as u32, PLACES[from], PLACES[to], depart, depart + len, price)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Any returned path starts at the origin, respects the start time,
        /// chains departure >= previous arrival, and ends at the destination.
        #[test]
        fn returned_paths_are_valid(
            hops in hops(),
            from in 0usize..4,
            to in 0usize..4,
            min_start in 0u32..10,
        ) {
            prop_assume!(!hops.is_empty());
            let ids = find(&hops, PLACES[from], PLACES[to], min_start);
            let path: Vec<&Hop> = ids.iter().map(|id| &hops[*id as usize]).collect();

            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                prop_assert_eq!(first.from, PLACES[from]);
                prop_assert!(first.depart >= min_start);
                prop_assert_eq!(last.to, PLACES[to]);
                for pair in path.windows(2) {
                    prop_assert_eq!(pair[0].to, pair[1].from);
                    prop_assert!(pair[1].depart >= pair[0].arrive);
                }
            }
        }

        /// Searching twice over the same schedule gives the same answer.
        #[test]
        fn search_is_deterministic(hops in hops(), from in 0usize..4, to in 0usize..4) {
            prop_assume!(!hops.is_empty());
            let first = find(&hops, PLACES[from], PLACES[to], 0);
            let second = find(&hops, PLACES[from], PLACES[to], 0);
            prop_assert_eq!(first, second);
        }
    }
}
