//! Edit-distance alignment with full operation trace reconstruction.
//!
//! Classic dynamic-programming Levenshtein over an (m+1)×(n+1) table. Each
//! cell stores a backpointer instead of its full operation list; one O(m+n)
//! backtrace at the end yields the same ordered trace the list-per-cell
//! formulation would produce, at O(1) extra space per cell.

use serde::{Deserialize, Serialize};

/// A single edit operation in an alignment trace.
///
/// Matched positions are never recorded: the trace length equals the edit
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Insertion,
    Deletion,
    Substitution,
}

impl std::fmt::Display for EditOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditOp::Insertion => write!(f, "insertion"),
            EditOp::Deletion => write!(f, "deletion"),
            EditOp::Substitution => write!(f, "substitution"),
        }
    }
}

/// Result of aligning a source sequence onto a target sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Minimum number of edit operations.
    pub distance: usize,
    /// One optimal operation sequence, in left-to-right application order.
    pub trace: Vec<EditOp>,
}

/// Backpointer for a DP cell.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    /// Diagonal move; `edited` is false when the tokens matched.
    Diag { edited: bool },
    /// Move from the left neighbor (insertion of a target token).
    Left,
    /// Move from the upper neighbor (deletion of a source token).
    Up,
}

/// Align `source` onto `target`, returning the edit distance and one optimal
/// trace.
///
/// Tie-break is fixed: substitution wins when it attains the minimum (a
/// zero-cost match records no operation), then insertion, then deletion.
/// Total over any two finite sequences, empty ones included.
pub fn align<T: PartialEq>(source: &[T], target: &[T]) -> Alignment {
    let m = source.len();
    let n = target.len();

    let mut cost = vec![vec![0usize; n + 1]; m + 1];
    let mut step = vec![vec![Step::Start; n + 1]; m + 1];

    for j in 1..=n {
        cost[0][j] = j;
        step[0][j] = Step::Left;
    }
    for i in 1..=m {
        cost[i][0] = i;
        step[i][0] = Step::Up;
    }

    for i in 1..=m {
        for j in 1..=n {
            let edited = source[i - 1] != target[j - 1];
            let substitution = cost[i - 1][j - 1] + usize::from(edited);
            let insertion = cost[i][j - 1] + 1;
            let deletion = cost[i - 1][j] + 1;

            let best = substitution.min(insertion).min(deletion);
            cost[i][j] = best;
            step[i][j] = if best == substitution {
                Step::Diag { edited }
            } else if best == insertion {
                Step::Left
            } else {
                Step::Up
            };
        }
    }

    // Backtrace to the origin, then reverse into application order.
    let mut trace = Vec::with_capacity(cost[m][n]);
    let (mut i, mut j) = (m, n);
    loop {
        match step[i][j] {
            Step::Start => break,
            Step::Diag { edited } => {
                if edited {
                    trace.push(EditOp::Substitution);
                }
                i -= 1;
                j -= 1;
            }
            Step::Left => {
                trace.push(EditOp::Insertion);
                j -= 1;
            }
            Step::Up => {
                trace.push(EditOp::Deletion);
                i -= 1;
            }
        }
    }
    trace.reverse();

    Alignment {
        distance: cost[m][n],
        trace,
    }
}

/// Character-level alignment of two strings.
pub fn align_chars(s1: &str, s2: &str) -> Alignment {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    align(&a, &b)
}
