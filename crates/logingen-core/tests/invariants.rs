//! Block invariants of the generated fixture.
//!
//! For any `N ≥ 1` and `L ≥ 0`:
//! - the first `N` lines are the sorted login block,
//! - the last `N` lines are the sorted logout block,
//! - the middle `L` lines are logins with ids in `0..N`,
//! - the total is `2N + L`.
//!
//! The sorted blocks are identical across runs regardless of the RNG.

use logingen_core::{
    generator::fixture_lines,
    io::write_fixture,
    params::FixtureParams,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Parse `User <id> logged in|out` into `(id, is_login)`.
#[track_caller]
fn parse(line: &str) -> (u64, bool) {
    let rest = line.strip_prefix("User ").expect("line prefix");
    let (id, tail) = rest.split_once(' ').expect("id separator");
    assert!(id.len() >= 5, "id not padded: {line}");
    let login = match tail {
        "logged in" => true,
        "logged out" => false,
        other => panic!("unexpected suffix {other:?} in {line}"),
    };
    (id.parse().expect("numeric id"), login)
}

fn generate(n: u64, l: u64, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    fixture_lines(FixtureParams::new(n, l), &mut rng)
        .expect("valid params")
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn blocks_have_expected_shape(n in 1u64..200, l in 0u64..300, seed in any::<u64>()) {
        let lines = generate(n, l, seed);
        let (n_us, l_us) = (usize::try_from(n).unwrap(), usize::try_from(l).unwrap());
        prop_assert_eq!(lines.len(), 2 * n_us + l_us);

        for (i, line) in lines[..n_us].iter().enumerate() {
            prop_assert_eq!(parse(line), (u64::try_from(i).unwrap(), true));
        }
        for line in &lines[n_us..n_us + l_us] {
            let (id, login) = parse(line);
            prop_assert!(login);
            prop_assert!(id < n);
        }
        for (i, line) in lines[n_us + l_us..].iter().enumerate() {
            prop_assert_eq!(parse(line), (u64::try_from(i).unwrap(), false));
        }
    }

    #[test]
    fn sorted_blocks_do_not_depend_on_rng(n in 1u64..100, l in 0u64..50, a in any::<u64>(), b in any::<u64>()) {
        let x = generate(n, l, a);
        let y = generate(n, l, b);
        let (n_us, l_us) = (usize::try_from(n).unwrap(), usize::try_from(l).unwrap());
        prop_assert_eq!(&x[..n_us], &y[..n_us]);
        prop_assert_eq!(&x[n_us + l_us..], &y[n_us + l_us..]);
    }
}

#[test]
fn three_users_two_lines() {
    let lines = generate(3, 2, 11);
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[..3],
        ["User 00000 logged in", "User 00001 logged in", "User 00002 logged in"]
    );
    for line in &lines[3..5] {
        assert!(matches!(
            line.as_str(),
            "User 00000 logged in" | "User 00001 logged in" | "User 00002 logged in"
        ));
    }
    assert_eq!(
        lines[5..],
        ["User 00000 logged out", "User 00001 logged out", "User 00002 logged out"]
    );
}

#[test]
fn wide_ids_keep_their_digits() {
    let lines = generate(100_001, 0, 0);
    assert_eq!(lines[100_000], "User 100000 logged in");
    assert_eq!(lines[200_001], "User 100000 logged out");
}

#[test]
fn second_run_overwrites_the_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(logingen_core::DEFAULT_OUTPUT);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..2 {
        let n = write_fixture(&path, FixtureParams::new(5, 7), &mut rng).expect("write");
        assert_eq!(n, 17);
    }
    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(text.lines().count(), 17);
}
