use crate::math::Point2;

/// Squared distance under which two run endpoints are joined.
const JOIN_TOL_SQ: f64 = 1e-8;

/// Stitches kept runs back into closed loops by matching endpoints.
///
/// Greedy: each chain is extended with the unused run whose start lies
/// closest to the chain's current end, until the chain closes on itself.
#[must_use]
pub fn connect(runs: &[&[Point2]]) -> Vec<Vec<Point2>> {
    let n = runs.len();
    let mut used = vec![false; n];
    let mut results = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut chain: Vec<Point2> = runs[start].to_vec();

        while !is_closed(&chain) {
            let Some(end_pt) = chain.last().copied() else {
                break;
            };
            let mut best: Option<usize> = None;
            let mut best_dist_sq = JOIN_TOL_SQ;

            for (candidate, run) in runs.iter().enumerate() {
                if used[candidate] {
                    continue;
                }
                let dist_sq = (run[0] - end_pt).norm_squared();
                if dist_sq < best_dist_sq {
                    best_dist_sq = dist_sq;
                    best = Some(candidate);
                }
            }

            let Some(next) = best else { break };
            used[next] = true;
            // The next run's first vertex duplicates our end.
            chain.extend_from_slice(&runs[next][1..]);
        }

        if !is_closed(&chain) {
            tracing::debug!(vertices = chain.len(), "dropping unclosed offset run");
            continue;
        }
        chain.pop();

        if chain.len() >= 3 {
            results.push(chain);
        }
    }

    results
}

fn is_closed(chain: &[Point2]) -> bool {
    chain.len() > 2 && (chain[chain.len() - 1] - chain[0]).norm_squared() < JOIN_TOL_SQ
}
