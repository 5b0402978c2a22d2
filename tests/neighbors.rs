use planar_neighbors::{Metric, NeighborFinder, PlanarNeighborsFinder, PlanarPoints, PointSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn random_points(rng: &mut StdRng, count: usize, extent: f64) -> Vec<[f64; 2]> {
    (0..count)
        .map(|_| [rng.gen_range(-extent..extent), rng.gen_range(-extent..extent)])
        .collect()
}

fn near_in_model(points: &PlanarPoints, model: &BTreeSet<usize>, u: usize, r: f64) -> Vec<usize> {
    model
        .iter()
        .copied()
        .filter(|&v| points.distance(u, v) <= r)
        .collect()
}

#[test]
fn test_pull_all_near_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for metric in [Metric::Euclidean, Metric::Chebyshev] {
        let u = random_points(&mut rng, 40, 10.0);
        let v = random_points(&mut rng, 400, 10.0);
        let points = PlanarPoints::with_metric(u, v, metric);
        let r = 1.3;

        let mut finder = PlanarNeighborsFinder::new(&points, r).unwrap();
        finder.add_all(0..points.v_len());
        let mut model: BTreeSet<usize> = (0..points.v_len()).collect();

        for u in 0..points.u_len() {
            let expected = near_in_model(&points, &model, u, r);
            let pulled = finder.pull_all_near(u);

            for &v in &pulled {
                assert!(points.distance(u, v) <= r, "v{} is too far from u{}", v, u);
                assert!(!finder.contains(v));
                assert!(model.remove(&v), "v{} pulled twice", v);
            }

            let mut sorted = pulled.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, expected, "u{} missed near points", u);
            assert!(near_in_model(&points, &model, u, r).is_empty());
            assert_eq!(finder.len(), model.len());
        }
    }
}

#[test]
fn test_random_operations_against_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let u = random_points(&mut rng, 50, 5.0);
    let v = random_points(&mut rng, 200, 5.0);
    let points = PlanarPoints::new(u, v);
    let r = 0.75;

    let mut finder = PlanarNeighborsFinder::new(&points, r).unwrap();
    let mut model = BTreeSet::new();

    for _ in 0..5_000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let v = rng.gen_range(0..points.v_len());
                if model.insert(v) {
                    finder.add(v);
                }
            }
            2 => {
                let v = rng.gen_range(0..points.v_len());
                model.remove(&v);
                finder.remove(v);
            }
            _ => {
                let u = rng.gen_range(0..points.u_len());
                match finder.pull_near(u) {
                    Some(v) => {
                        assert!(points.distance(u, v) <= r);
                        assert!(model.remove(&v));
                    }
                    None => assert!(near_in_model(&points, &model, u, r).is_empty()),
                }
            }
        }

        let v = rng.gen_range(0..points.v_len());
        assert_eq!(finder.contains(v), model.contains(&v));
        assert_eq!(finder.len(), model.len());
    }
}

#[test]
fn test_clustered_points_around_origin() {
    // Every coordinate falls in (-r, r), where truncation puts everything in one bin.
    let mut rng = StdRng::seed_from_u64(3);
    let u = random_points(&mut rng, 10, 0.99);
    let v = random_points(&mut rng, 100, 0.99);
    let points = PlanarPoints::new(u, v);
    let r = 1.0;

    let mut finder = PlanarNeighborsFinder::new(&points, r).unwrap();
    finder.add_all(0..points.v_len());
    assert_eq!(finder.bin_count(), 1);

    let mut model: BTreeSet<usize> = (0..points.v_len()).collect();
    for u in 0..points.u_len() {
        let expected = near_in_model(&points, &model, u, r);
        let mut pulled = finder.pull_all_near(u);
        pulled.sort_unstable();
        assert_eq!(pulled, expected);
        for v in pulled {
            model.remove(&v);
        }
    }
}
