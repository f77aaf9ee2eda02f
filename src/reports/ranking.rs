use std::collections::BTreeMap;

/// How ties advance the rank counter.
///
/// `Competition` is SQL `RANK()` (1, 1, 3); `Dense` is `DENSE_RANK()`
/// (1, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMethod {
    Competition,
    Dense,
}

/// One ranked row: a sub-key's aggregate value and its rank within the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<G, K, V> {
    pub rank: u32,
    pub group: G,
    pub key: K,
    pub value: V,
}

/// Ranks sub-keys within each group by aggregate value descending and keeps
/// ranks up to `limit`.
///
/// Equal values share a rank; the tie is broken by sub-key ascending only for
/// output order, never for the rank itself. Groups are emitted in ascending
/// key order. Rows whose rank exceeds `limit` are dropped, which with
/// competition ranking can keep more than `limit` rows when a tie straddles
/// the cutoff (matching `RANK() <= k` semantics).
pub fn rank_within_groups<G, K, V>(
    entries: impl IntoIterator<Item = ((G, K), V)>,
    limit: u32,
    method: RankMethod,
) -> Vec<Ranked<G, K, V>>
where
    G: Ord + Clone,
    K: Ord,
    V: Ord + Copy,
{
    let mut groups: BTreeMap<G, Vec<(K, V)>> = BTreeMap::new();

    for ((group, key), value) in entries {
        groups.entry(group).or_default().push((key, value));
    }

    let mut ranked = Vec::new();

    for (group, mut members) in groups {
        members.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut rank = 0u32;
        let mut previous: Option<V> = None;

        for (position, (key, value)) in members.into_iter().enumerate() {
            if previous != Some(value) {
                rank = match method {
                    RankMethod::Competition => position as u32 + 1,
                    RankMethod::Dense => rank + 1,
                };
            }

            previous = Some(value);

            // Values are sorted descending, so the rank never decreases again.
            if rank > limit {
                break;
            }

            ranked.push(Ranked {
                rank,
                group: group.clone(),
                key,
                value,
            });
        }
    }

    ranked
}
