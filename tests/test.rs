use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matrix_graph::generators::{
    bridged_complete, complete, complete_bipartite, cycle, path, star,
};
use matrix_graph::{Edge, MatrixGraph, NO_EDGE};

/// Tests the algorithms against graphs whose bridges, articulation
/// points and centers are known, and cross-checks them on random
/// graphs.

fn random_graph(rng: &mut StdRng, n: usize, density: f64) -> MatrixGraph {
    let mut graph = MatrixGraph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                let w = rng.gen_range(1..10) as f64;
                graph.insert_weighted_edge(i, j, w).unwrap();
            }
        }
    }
    graph
}

fn random_graphs() -> Vec<MatrixGraph> {
    let mut rng = StdRng::seed_from_u64(0x3ec);
    let mut graphs = Vec::new();
    for n in 1..12 {
        for &density in &[0.1, 0.25, 0.5, 0.8] {
            graphs.push(random_graph(&mut rng, n, density));
        }
    }
    graphs
}

/// The path 0 - 1 - 2 - 3
#[test]
fn path_4() {
    let mut graph = MatrixGraph::from_weighted_edges(
        4,
        vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
    )
    .unwrap();

    let shortest = graph.shortest_path(0, 3).unwrap().unwrap();
    assert_eq!(shortest.vertices, vec![0, 1, 2, 3]);
    assert_eq!(shortest.distance, 3.0);

    assert_eq!(
        graph.bridges(),
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
    );
    assert_eq!(graph.articulation_points(), vec![1, 2]);
    assert_eq!(graph.articulation_points_by_components(), vec![1, 2]);

    assert_eq!(graph.eccentricities(), vec![3.0, 2.0, 2.0, 3.0]);
    assert_eq!(graph.radius(), 2.0);
    assert_eq!(graph.centers(), vec![1, 2]);

    assert_eq!(graph, path(4));
}

/// The complete graph with 3 vertices has no critical edges or
/// vertices
#[test]
fn k_3() {
    let mut graph =
        MatrixGraph::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]).unwrap();

    assert!(graph.bridges().is_empty());
    assert!(graph.articulation_points().is_empty());
    assert!(graph.articulation_points_by_components().is_empty());
    assert_eq!(graph.centers(), vec![0, 1, 2]);
}

#[test]
fn two_k_4() {
    // two K4 graphs connected by the single bridge (3, 4)
    let mut graph = bridged_complete(4, 4);

    assert_eq!(graph.bridges(), vec![Edge::new(3, 4)]);
    assert_eq!(graph.articulation_points(), vec![3, 4]);
    assert_eq!(graph.articulation_points_by_components(), vec![3, 4]);

    let center = graph.center();
    assert_eq!(center.radius, 2.0);
    assert_eq!(center.vertices, vec![3, 4]);
}

#[test]
fn cycles_and_complete_graphs_are_biconnected() {
    for n in 3..8 {
        for mut graph in vec![cycle(n), complete(n), complete_bipartite(2, n)] {
            assert!(graph.bridges().is_empty());
            assert!(graph.articulation_points().is_empty());
            assert!(graph.articulation_points_by_components().is_empty());
        }
    }
}

#[test]
fn star_center() {
    let mut graph = star(6);

    assert_eq!(graph.bridges().len(), 5);
    assert_eq!(graph.articulation_points(), vec![0]);
    assert_eq!(graph.centers(), vec![0]);
    assert_eq!(graph.radius(), 1.0);
}

#[test]
fn weights_are_symmetric() {
    for graph in random_graphs() {
        let n = graph.num_vertices();
        for a in 0..n {
            for b in 0..n {
                assert_eq!(
                    graph.edge_exists(a, b).unwrap(),
                    graph.edge_exists(b, a).unwrap()
                );
                assert_eq!(
                    graph.weight(a, b).unwrap(),
                    graph.weight(b, a).unwrap()
                );
            }
        }
        assert_eq!(graph.edges().count(), graph.num_edges());
    }
}

#[test]
fn dijkstra_agrees_with_floyd() {
    for graph in random_graphs() {
        let all = graph.all_pairs();
        for s in 0..graph.num_vertices() {
            let paths = graph.shortest_paths(s).unwrap();
            for d in 0..graph.num_vertices() {
                let expected = all.distance(s, d).unwrap();
                assert_eq!(paths.distance(d).unwrap(), expected);

                match paths.path_to(d).unwrap() {
                    Some(found) => {
                        assert_eq!(found.vertices.first(), Some(&s));
                        assert_eq!(found.vertices.last(), Some(&d));
                        let total: f64 = found
                            .vertices
                            .windows(2)
                            .map(|hop| graph.weight(hop[0], hop[1]).unwrap())
                            .sum();
                        assert_eq!(total, expected);
                    }
                    None => assert_eq!(expected, NO_EDGE),
                }

                let rebuilt = all.path(s, d).unwrap().map(|p| p.distance);
                let found = paths.path_to(d).unwrap().map(|p| p.distance);
                assert_eq!(rebuilt, found);
            }
        }
    }
}

#[test]
fn bridges_increase_component_count() {
    for mut graph in random_graphs() {
        let before = graph.clone();
        let baseline = graph.component_count();
        let bridges = graph.bridges();
        assert_eq!(graph, before);

        for (i, j, _) in before.edges() {
            // rebuild without the edge, through the public API only
            let without = MatrixGraph::from_weighted_edges(
                before.num_vertices(),
                before.edges().filter(|&(a, b, _)| (a, b) != (i, j)),
            )
            .unwrap();
            if bridges.contains(&Edge::new(i, j)) {
                assert!(without.component_count() > baseline);
            } else {
                assert_eq!(without.component_count(), baseline);
            }
        }
    }
}

#[test]
fn articulation_variants_agree() {
    for mut graph in random_graphs() {
        let before = graph.clone();
        let by_exclusion = graph.articulation_points();
        let by_components = graph.articulation_points_by_components();

        assert_eq!(by_exclusion, by_components);
        assert_eq!(graph, before);
    }
}

#[test]
fn centers_have_minimum_eccentricity() {
    for graph in random_graphs() {
        let ecc = graph.eccentricities();
        let center = graph.center();

        for &v in center.vertices.iter() {
            assert_eq!(ecc[v], center.radius);
        }
        for (v, &e) in ecc.iter().enumerate() {
            if !center.vertices.contains(&v) && e != 0.0 {
                assert!(e > center.radius);
            }
        }
        if graph.is_connected() {
            assert!(!center.vertices.is_empty());
        }
    }
}
