use super::CooccurrenceGraph;
use std::collections::BTreeMap;

struct Community {
    members: Vec<usize>,
    degree: f64,
}

/// Greedy modularity maximization (CNM-style agglomeration). Every node
/// starts as a singleton; the connected pair of communities with the
/// largest positive modularity gain merges until no positive merge
/// remains. Tie-break: the first pair in ascending `(rep_a, rep_b)` order
/// wins, where a community's representative is its smallest node index.
///
/// The returned partition covers every node exactly once. Isolated nodes
/// stay singleton; an empty graph yields an empty partition.
pub fn detect_communities(graph: &CooccurrenceGraph) -> Vec<Vec<String>> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let m = graph.total_weight();
    let degrees = graph.weighted_degrees();

    // Representative = smallest node index of the community, which keeps
    // merge keys stable and the final ordering deterministic.
    let mut communities: Vec<Option<Community>> = (0..n)
        .map(|i| {
            Some(Community {
                members: vec![i],
                degree: degrees[i],
            })
        })
        .collect();

    // Total weight between each pair of communities, keyed (rep_a, rep_b).
    let mut between: BTreeMap<(usize, usize), f64> =
        graph.edges().map(|(key, w)| (key, w as f64)).collect();

    while m > 0.0 {
        let mut best: Option<((usize, usize), f64)> = None;
        for (&(a, b), &weight) in &between {
            let da = communities[a].as_ref().map(|c| c.degree).unwrap_or(0.0);
            let db = communities[b].as_ref().map(|c| c.degree).unwrap_or(0.0);
            let gain = weight / m - (da * db) / (2.0 * m * m);
            // Strict comparison keeps the first-seen pair on ties.
            match best {
                Some((_, current)) if gain <= current => {}
                _ => best = Some(((a, b), gain)),
            }
        }

        let Some(((a, b), gain)) = best else { break };
        if gain <= 0.0 {
            break;
        }

        // Merge b into a (a < b by key construction).
        let Some(absorbed) = communities[b].take() else {
            break;
        };
        if let Some(target) = communities[a].as_mut() {
            target.members.extend(absorbed.members);
            target.degree += absorbed.degree;
        }

        // Re-key all edges touching b onto a; intra-community weight drops out.
        let mut rekeyed: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        for ((x, y), w) in between {
            let nx = if x == b { a } else { x };
            let ny = if y == b { a } else { y };
            if nx == ny {
                continue;
            }
            *rekeyed.entry((nx.min(ny), nx.max(ny))).or_insert(0.0) += w;
        }
        between = rekeyed;
    }

    let nodes = graph.nodes();
    communities
        .into_iter()
        .flatten()
        .map(|mut community| {
            community.members.sort_unstable();
            community
                .members
                .into_iter()
                .map(|i| nodes[i].clone())
                .collect()
        })
        .collect()
}
