use std::collections::HashMap;

use treecables::cables::{connect, Merge};
use treecables::Error;

/// Replays `merges` against the input multiset: each join must consume two cables
/// that are currently available and produce one. Returns whether exactly one cable,
/// of length `expected_final`, is left at the end.
fn replays(lengths: &[u64], merges: &[Merge], expected_final: u64) -> bool {
    let mut available: HashMap<u64, usize> = HashMap::new();
    for length in lengths {
        *available.entry(*length).or_default() += 1;
    }

    for merge in merges {
        if merge.a + merge.b != merge.cost
            || !take(&mut available, merge.a)
            || !take(&mut available, merge.b)
        {
            return false;
        }
        *available.entry(merge.cost).or_default() += 1;
    }

    let left: Vec<_> = available
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    left == vec![(expected_final, 1)]
}

/// Removes one cable of `length`, if there is one.
fn take(available: &mut HashMap<u64, usize>, length: u64) -> bool {
    match available.get_mut(&length) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[test]
fn sample_lengths() {
    let lengths = [8, 4, 6, 12];
    let connection = connect(&lengths).unwrap();

    assert_eq!(connection.total_cost, 58);
    assert_eq!(connection.merges.len(), 3);
    assert!(replays(&lengths, &connection.merges, 30));
}

#[test]
fn too_few_cables() {
    for lengths in [&[][..], &[5][..]] {
        let connection = connect(lengths).unwrap();
        assert_eq!(connection.total_cost, 0);
        assert!(connection.merges.is_empty());
    }
}

#[test]
fn overflow_is_an_error() {
    let err = connect(&[u64::MAX, 1]).unwrap_err();

    assert_eq!(err, Error::CostOverflow { a: 1, b: u64::MAX });
    assert_eq!(
        err.to_string(),
        format!("joining cables of length 1 and {} overflows u64", u64::MAX)
    );
}

quickcheck::quickcheck! {
    fn merge_tree_rebuilds_inputs(lengths: Vec<u16>) -> bool {
        let lengths: Vec<u64> = lengths.into_iter().map(u64::from).collect();
        if lengths.len() < 2 {
            return true;
        }
        let connection = connect(&lengths).unwrap();

        replays(&lengths, &connection.merges, lengths.iter().sum())
    }

    fn deterministic_total(lengths: Vec<u16>) -> bool {
        let lengths: Vec<u64> = lengths.into_iter().map(u64::from).collect();
        let mut shuffled = lengths.clone();
        shuffled.rotate_left(lengths.len() / 2);

        let first = connect(&lengths).map(|c| c.total_cost);
        (0..3).all(|_| connect(&shuffled).map(|c| c.total_cost) == first)
    }
}
