//! Residue invariants via the Havel-Hakimi elimination process.
use crate::degree::degree_sequence;
use crate::graph::Graph;

/// The completed Havel-Hakimi elimination process on a degree sequence.
///
/// The process repeatedly removes the largest remaining degree `d` and
/// decrements the next `d` entries, stopping when every remaining entry is
/// zero or the sequence is shown not to be graphic. The removed degrees,
/// followed by the final zeros, form the elimination sequence.
///
/// # Example
///
/// ```
/// # use graphinv::residue::HavelHakimi;
/// let process = HavelHakimi::new([2, 2, 2]);
/// assert!(process.is_graphic());
/// assert_eq!(process.residue(), 1);
/// assert_eq!(process.elimination_sequence(), &[2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HavelHakimi {
    initial: Vec<usize>,
    elimination: Vec<usize>,
    residue: usize,
    graphic: bool,
}

impl HavelHakimi {
    /// Runs the process to completion on a degree sequence.
    pub fn new(sequence: impl IntoIterator<Item = usize>) -> Self {
        let initial: Vec<usize> = sequence.into_iter().collect();
        let mut remaining = initial.clone();
        let mut elimination = Vec::with_capacity(initial.len());

        loop {
            remaining.sort_unstable_by(|a, b| b.cmp(a));

            match remaining.first().copied() {
                None | Some(0) => {
                    let residue = remaining.len();
                    elimination.extend(remaining);
                    return Self {
                        initial,
                        elimination,
                        residue,
                        graphic: true,
                    };
                }
                Some(largest) if largest >= remaining.len() => {
                    // More neighbours demanded than nodes remain.
                    return Self {
                        initial,
                        elimination,
                        residue: 0,
                        graphic: false,
                    };
                }
                Some(largest) => {
                    remaining.remove(0);
                    elimination.push(largest);
                    for entry in remaining.iter_mut().take(largest) {
                        if *entry == 0 {
                            return Self {
                                initial,
                                elimination,
                                residue: 0,
                                graphic: false,
                            };
                        }
                        *entry -= 1;
                    }
                }
            }
        }
    }

    /// The degree sequence the process started from, in the order given.
    pub fn initial_sequence(&self) -> &[usize] {
        &self.initial
    }

    /// The removed degrees followed by the zeros of the final sequence.
    pub fn elimination_sequence(&self) -> &[usize] {
        &self.elimination
    }

    /// The number of zeros in the final sequence.
    ///
    /// Zero when the sequence is not graphic.
    pub fn residue(&self) -> usize {
        self.residue
    }

    /// Whether the sequence is realizable by a simple graph.
    pub fn is_graphic(&self) -> bool {
        self.graphic
    }
}

/// The residue of a graph: the number of zeros left when the Havel-Hakimi
/// process finishes on its degree sequence. A lower bound for the
/// independence number.
///
/// # Example
///
/// ```
/// # use graphinv::residue::residue;
/// # use graphinv::Graph;
/// assert_eq!(residue(&Graph::complete(6)), 1);
/// assert_eq!(residue(&Graph::cycle(6)), 2);
/// ```
pub fn residue(graph: &Graph) -> usize {
    HavelHakimi::new(degree_sequence(graph)).residue()
}

/// The k-residue: (1/k) Σ_{i<k} (k-i)·f(i), where f(i) counts occurrences
/// of `i` in the elimination sequence.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn k_residue(graph: &Graph, k: usize) -> f64 {
    assert!(k >= 1, "k must be a positive integer");

    let process = HavelHakimi::new(degree_sequence(graph));
    let elimination = process.elimination_sequence();

    let weighted: usize = (0..k)
        .map(|i| (k - i) * elimination.iter().filter(|&&d| d == i).count())
        .sum();

    weighted as f64 / k as f64
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[test]
    fn elimination_of_complete_graph_counts_down() {
        let process = HavelHakimi::new(degree_sequence(&Graph::complete(4)));
        assert_eq!(process.elimination_sequence(), &[3, 2, 1, 0]);
        assert_eq!(process.initial_sequence(), &[3, 3, 3, 3]);
        assert!(process.is_graphic());
    }

    #[test]
    fn non_graphic_sequences_are_detected() {
        assert!(!HavelHakimi::new([3, 1, 1]).is_graphic());
        assert!(!HavelHakimi::new([5, 1, 1, 1]).is_graphic());
        assert!(HavelHakimi::new([1, 1]).is_graphic());
    }

    #[test]
    fn empty_sequence_is_graphic_with_zero_residue() {
        let process = HavelHakimi::new([]);
        assert!(process.is_graphic());
        assert_eq!(process.residue(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(7)]
    #[case(10)]
    fn residue_of_complete_graph_is_one(#[case] n: usize) {
        assert_eq!(residue(&Graph::complete(n)), 1);
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(7)]
    #[case(12)]
    fn residue_of_cycle_is_a_third_of_the_order(#[case] n: usize) {
        assert_eq!(residue(&Graph::cycle(n)), (n + 2) / 3);
    }

    #[rstest]
    #[case(3)]
    #[case(6)]
    #[case(12)]
    fn two_residue_of_complete_graph_is_three_halves(#[case] n: usize) {
        assert_eq!(k_residue(&Graph::complete(n), 2), 1.5);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_k_residue_panics() {
        k_residue(&Graph::complete(3), 0);
    }
}
