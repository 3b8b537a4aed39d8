//! Transition predicates over a neighbour count vector.
//!
//! A [`Predicate`] decides whether one `[from][to]` transition fires for
//! a cell, given `counts[k]` = number of bucket neighbours in state `k`.
//! Predicates are pure: they read only the count slice passed in and
//! hold no mutable state, so the same tree can be evaluated for every
//! cell of every tick.

use smallvec::SmallVec;
use std::fmt;
use tessera_core::StateId;

// ── CmpOp ───────────────────────────────────────────────────────────

/// Comparison operator between two count expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CmpOp {
    /// Apply the operator to two evaluated counts.
    #[inline]
    pub fn apply(self, a: u32, b: u32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => a < b,
            Self::Le => a <= b,
            Self::Gt => a > b,
            Self::Ge => a >= b,
        }
    }

    /// Source-text symbol for the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ── CountExpr ───────────────────────────────────────────────────────

/// An unsigned integer expression over the count vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CountExpr {
    /// A constant.
    Literal(u32),
    /// `counts[k]`. A state beyond the vector reads as 0.
    Count(StateId),
    /// Sum of all counts (number of in-bounds neighbours).
    Total,
    /// Saturating sum of two expressions.
    Sum(Box<CountExpr>, Box<CountExpr>),
}

impl CountExpr {
    /// Evaluate against a count vector.
    pub fn eval(&self, counts: &[u32]) -> u32 {
        match self {
            Self::Literal(n) => *n,
            Self::Count(s) => counts.get(s.index()).copied().unwrap_or(0),
            Self::Total => counts.iter().fold(0u32, |acc, &c| acc.saturating_add(c)),
            Self::Sum(a, b) => a.eval(counts).saturating_add(b.eval(counts)),
        }
    }

    /// Highest state index referenced, if any.
    pub fn max_state(&self) -> Option<StateId> {
        match self {
            Self::Literal(_) | Self::Total => None,
            Self::Count(s) => Some(*s),
            Self::Sum(a, b) => a.max_state().max(b.max_state()),
        }
    }
}

impl From<u32> for CountExpr {
    fn from(n: u32) -> Self {
        Self::Literal(n)
    }
}

impl From<StateId> for CountExpr {
    fn from(s: StateId) -> Self {
        Self::Count(s)
    }
}

impl fmt::Display for CountExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Count(s) => write!(f, "surrounding[{s}]"),
            Self::Total => f.write_str("total"),
            Self::Sum(a, b) => write!(f, "{a} + {b}"),
        }
    }
}

// ── Predicate ───────────────────────────────────────────────────────

/// A boolean function of the neighbour count vector.
///
/// # Examples
///
/// ```
/// use tessera_core::StateId;
/// use tessera_rule::Predicate;
///
/// let alive = StateId(1);
/// // A live cell dies of loneliness or overcrowding.
/// let dies = Predicate::count_lt(alive, 2).or(Predicate::count_gt(alive, 3));
/// assert!(dies.eval(&[7, 1]));
/// assert!(!dies.eval(&[6, 2]));
/// assert!(dies.eval(&[4, 4]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Never fires. Marks the diagonal and deliberately inert entries.
    #[default]
    Never,
    /// Always fires.
    Always,
    /// `lhs op rhs`.
    Compare {
        /// Left operand.
        lhs: CountExpr,
        /// Operator.
        op: CmpOp,
        /// Right operand.
        rhs: CountExpr,
    },
    /// `expr` equals one of `values`.
    In {
        /// The tested expression.
        expr: CountExpr,
        /// Accepted values.
        values: SmallVec<[u32; 8]>,
    },
    /// Negation.
    Not(Box<Predicate>),
    /// Conjunction. Empty is `true`.
    All(Vec<Predicate>),
    /// Disjunction. Empty is `false`.
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against a count vector.
    pub fn eval(&self, counts: &[u32]) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Compare { lhs, op, rhs } => op.apply(lhs.eval(counts), rhs.eval(counts)),
            Self::In { expr, values } => values.contains(&expr.eval(counts)),
            Self::Not(p) => !p.eval(counts),
            Self::All(ps) => ps.iter().all(|p| p.eval(counts)),
            Self::Any(ps) => ps.iter().any(|p| p.eval(counts)),
        }
    }

    /// `true` for the [`Never`](Self::Never) marker.
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Highest state index referenced anywhere in the tree.
    pub fn max_state(&self) -> Option<StateId> {
        match self {
            Self::Never | Self::Always => None,
            Self::Compare { lhs, rhs, .. } => lhs.max_state().max(rhs.max_state()),
            Self::In { expr, .. } => expr.max_state(),
            Self::Not(p) => p.max_state(),
            Self::All(ps) | Self::Any(ps) => ps.iter().filter_map(Self::max_state).max(),
        }
    }

    /// `lhs op rhs` over arbitrary count expressions.
    pub fn compare(lhs: impl Into<CountExpr>, op: CmpOp, rhs: impl Into<CountExpr>) -> Self {
        Self::Compare {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    /// `counts[state] == n`
    pub fn count_eq(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Eq, n)
    }

    /// `counts[state] != n`
    pub fn count_ne(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Ne, n)
    }

    /// `counts[state] < n`
    pub fn count_lt(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Lt, n)
    }

    /// `counts[state] <= n`
    pub fn count_le(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Le, n)
    }

    /// `counts[state] > n`
    pub fn count_gt(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Gt, n)
    }

    /// `counts[state] >= n`
    pub fn count_ge(state: StateId, n: u32) -> Self {
        Self::compare(state, CmpOp::Ge, n)
    }

    /// `counts[state]` is one of `values`.
    pub fn count_in(state: StateId, values: &[u32]) -> Self {
        Self::In {
            expr: CountExpr::Count(state),
            values: values.iter().copied().collect(),
        }
    }

    /// Conjunction, flattening nested `All`s.
    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Self::All(mut a), Self::All(b)) => {
                a.extend(b);
                Self::All(a)
            }
            (Self::All(mut a), p) => {
                a.push(p);
                Self::All(a)
            }
            (p, Self::All(mut b)) => {
                b.insert(0, p);
                Self::All(b)
            }
            (a, b) => Self::All(vec![a, b]),
        }
    }

    /// Disjunction, flattening nested `Any`s.
    pub fn or(self, other: Predicate) -> Self {
        match (self, other) {
            (Self::Any(mut a), Self::Any(b)) => {
                a.extend(b);
                Self::Any(a)
            }
            (Self::Any(mut a), p) => {
                a.push(p);
                Self::Any(a)
            }
            (p, Self::Any(mut b)) => {
                b.insert(0, p);
                Self::Any(b)
            }
            (a, b) => Self::Any(vec![a, b]),
        }
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        match self {
            Self::Not(inner) => *inner,
            p => Self::Not(Box::new(p)),
        }
    }
}

/// `true` if `p` prints with an `or` at its top level.
fn prints_top_level_or(p: &Predicate) -> bool {
    match p {
        Predicate::Any(v) if v.len() == 1 => prints_top_level_or(&v[0]),
        Predicate::Any(v) => v.len() > 1,
        _ => false,
    }
}

/// Writes `p`, parenthesised when it would otherwise bind looser than
/// the surrounding operator.
fn write_operand(f: &mut fmt::Formatter<'_>, p: &Predicate, loose: bool) -> fmt::Result {
    if loose {
        write!(f, "({p})")
    } else {
        write!(f, "{p}")
    }
}

impl fmt::Display for Predicate {
    /// Prints in the textual predicate language, so that
    /// `Predicate::parse(&p.to_string())` evaluates like `p`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("def"),
            Self::Always => f.write_str("true"),
            Self::Compare { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Self::In { expr, values } => {
                write!(f, "{expr} in {{")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
            Self::Not(p) => {
                f.write_str("not ")?;
                let loose = matches!(
                    **p,
                    Self::Compare { .. } | Self::In { .. } | Self::All(_) | Self::Any(_)
                );
                write_operand(f, p, loose)
            }
            Self::All(ps) if ps.is_empty() => f.write_str("true"),
            Self::Any(ps) if ps.is_empty() => f.write_str("false"),
            Self::All(ps) => {
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write_operand(f, p, prints_top_level_or(p))?;
                }
                Ok(())
            }
            Self::Any(ps) => {
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write_operand(f, p, false)?;
                }
                Ok(())
            }
        }
    }
}
