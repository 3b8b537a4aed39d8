//! Ready-made rule tables.
//!
//! Life-like rules use two states, `0` dead and `1` alive, and are
//! usually named by their `B/S` rulestring: the neighbour counts on which
//! a dead cell is born and a live cell survives.

use tessera_core::StateId;

use crate::error::RuleError;
use crate::predicate::Predicate;
use crate::table::RuleTable;

const ALIVE: StateId = StateId(1);

/// Largest neighbour count a Moore neighbourhood can produce.
pub const MAX_LIFE_COUNT: u32 = 8;

fn membership(values: &[u32]) -> Predicate {
    match values {
        [] => Predicate::Never,
        [n] => Predicate::count_eq(ALIVE, *n),
        _ => Predicate::count_in(ALIVE, values),
    }
}

/// A two-state table born on `birth` and surviving on `survive` live
/// neighbours.
pub fn life_like(birth: &[u32], survive: &[u32]) -> RuleTable {
    let death = if survive.is_empty() {
        Predicate::Always
    } else {
        !membership(survive)
    };
    RuleTable::from_entries(
        2,
        vec![Predicate::Never, membership(birth), death, Predicate::Never],
    )
}

/// Conway's Game of Life, B3/S23.
///
/// Spelled the way it is usually written by hand: birth on exactly three,
/// death below two or above three.
pub fn conway() -> RuleTable {
    let birth = Predicate::count_eq(ALIVE, 3);
    let death = Predicate::count_lt(ALIVE, 2).or(Predicate::count_gt(ALIVE, 3));
    RuleTable::from_entries(2, vec![Predicate::Never, birth, death, Predicate::Never])
}

/// HighLife, B36/S23.
pub fn highlife() -> RuleTable {
    life_like(&[3, 6], &[2, 3])
}

/// Seeds, B2/S. Every live cell dies each generation.
pub fn seeds() -> RuleTable {
    life_like(&[2], &[])
}

/// Day & Night, B3678/S34678.
pub fn day_and_night() -> RuleTable {
    life_like(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
}

/// Brian's Brain: `0` ready, `1` firing, `2` refractory.
///
/// A ready cell fires when exactly two neighbours are firing; firing
/// cells always become refractory and refractory cells always recover.
pub fn brians_brain() -> RuleTable {
    let firing = StateId(1);
    let n = Predicate::Never;
    RuleTable::from_entries(
        3,
        vec![
            n.clone(),
            Predicate::count_eq(firing, 2),
            n.clone(),
            n.clone(),
            n.clone(),
            Predicate::Always,
            Predicate::Always,
            n.clone(),
            n,
        ],
    )
}

/// Parse a `B.../S...` rulestring such as `"B3/S23"`.
///
/// The two halves may appear in either order and are case-insensitive.
/// Digits must lie in `0..=8`; repeats are ignored.
pub fn parse_life_rulestring(rulestring: &str) -> Result<RuleTable, RuleError> {
    let invalid = |reason: &str| RuleError::InvalidRulestring {
        rulestring: rulestring.to_string(),
        reason: reason.to_string(),
    };

    let mut birth: Option<Vec<u32>> = None;
    let mut survive: Option<Vec<u32>> = None;
    let mut parts = rulestring.trim().split('/');
    let halves = [parts.next(), parts.next()];
    if parts.next().is_some() {
        return Err(invalid("expected exactly one '/'"));
    }

    for half in halves {
        let half = half.ok_or_else(|| invalid("expected exactly one '/'"))?.trim();
        let mut chars = half.chars();
        let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('B') => &mut birth,
            Some('S') => &mut survive,
            _ => return Err(invalid("each half must start with 'B' or 'S'")),
        };
        if slot.is_some() {
            return Err(invalid("'B' or 'S' given twice"));
        }
        let mut counts = Vec::new();
        for c in chars {
            let n = c
                .to_digit(10)
                .filter(|&n| n <= MAX_LIFE_COUNT)
                .ok_or_else(|| invalid(&format!("'{c}' is not a neighbour count in 0..=8")))?;
            if !counts.contains(&n) {
                counts.push(n);
            }
        }
        counts.sort_unstable();
        *slot = Some(counts);
    }

    match (birth, survive) {
        (Some(b), Some(s)) => Ok(life_like(&b, &s)),
        _ => Err(invalid("expected one 'B' half and one 'S' half")),
    }
}
