use crate::types::ProximityEdge;

/// Connect nearby centers under a per-node degree limit.
///
/// Greedy over all unordered pairs sorted by ascending distance, with the
/// pair's (a, b) index order as tie-break so equal distances resolve
/// deterministically. A pair is accepted iff neither endpoint has reached
/// `degree_limit`; skipped pairs are never reconsidered. This is a
/// connect-the-dots heuristic, NOT a degree-constrained minimum-weight
/// matching; upgrading it would change visible output.
pub fn build_graph(centers: &[(f32, f32)], degree_limit: usize) -> Vec<ProximityEdge> {
    if centers.len() < 2 || degree_limit == 0 {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(centers.len() * (centers.len() - 1) / 2);
    for (a, &(xa, ya)) in centers.iter().enumerate() {
        for (b, &(xb, yb)) in centers.iter().enumerate().skip(a + 1) {
            let dx = xa - xb;
            let dy = ya - yb;
            pairs.push((dx * dx + dy * dy, a, b));
        }
    }
    pairs.sort_by(|(d1, a1, b1), (d2, a2, b2)| {
        d1.total_cmp(d2).then(a1.cmp(a2)).then(b1.cmp(b2))
    });

    let mut degree = vec![0usize; centers.len()];
    let mut edges = Vec::new();
    for (d2, a, b) in pairs {
        if degree[a] >= degree_limit || degree[b] >= degree_limit {
            continue;
        }
        degree[a] += 1;
        degree[b] += 1;
        edges.push(ProximityEdge {
            a,
            b,
            distance: d2.sqrt(),
        });
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_centers_yield_no_edges() {
        assert!(build_graph(&[], 2).is_empty());
        assert!(build_graph(&[(5.0, 5.0)], 2).is_empty());
    }

    #[test]
    fn zero_degree_limit_yields_no_edges() {
        assert!(build_graph(&[(0.0, 0.0), (1.0, 0.0)], 0).is_empty());
    }

    #[test]
    fn two_centers_form_one_edge() {
        let edges = build_graph(&[(10.0, 10.0), (90.0, 90.0)], 1);
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].a, edges[0].b), (0, 1));
        assert!((edges[0].distance - 113.137).abs() < 1e-2);
    }

    #[test]
    fn equal_distances_resolve_by_index_order() {
        // Three collinear centers with equal gaps. (0,1) wins the tie, the
        // middle center saturates, and both remaining pairs are skipped.
        let edges = build_graph(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)], 1);
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].a, edges[0].b), (0, 1));
    }

    #[test]
    fn no_node_exceeds_the_degree_limit() {
        let centers: Vec<(f32, f32)> = (0..10)
            .map(|i| ((i * 7 % 10) as f32 * 13.0, (i * 3 % 10) as f32 * 11.0))
            .collect();
        for limit in 1..4usize {
            let edges = build_graph(&centers, limit);
            let mut degree = vec![0usize; centers.len()];
            for e in &edges {
                degree[e.a] += 1;
                degree[e.b] += 1;
            }
            assert!(degree.iter().all(|&d| d <= limit), "limit {limit}");
        }
    }

    #[test]
    fn skipped_pairs_are_never_revisited() {
        // Four centers on a line: 0-1 and 2-3 are the short pairs; with
        // degree 1 the middle pair 1-2 is skipped for good.
        let edges = build_graph(&[(0.0, 0.0), (10.0, 0.0), (22.0, 0.0), (32.0, 0.0)], 1);
        let pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn identical_input_gives_identical_edges() {
        let centers = vec![(3.0, 4.0), (10.0, 0.0), (0.0, 9.0), (7.0, 7.0)];
        let first = build_graph(&centers, 2);
        let second = build_graph(&centers, 2);
        assert_eq!(first, second);
    }
}
