//! Cut-list packing onto stock boards
//!
//! First-fit-decreasing: sort cuts longest first, place each on the first
//! board with room, open a new board when none fits. Each cut consumes its
//! length plus one saw kerf. Not optimal, but within a board or two of it,
//! and crews can read the resulting layouts top to bottom.

use serde::{Deserialize, Serialize};

/// Default saw kerf allowance per cut, inches
pub const DEFAULT_KERF_IN: f64 = 0.125;

/// Cut-list errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CutError {
    /// A requested cut cannot come out of the stock length
    #[error("cut {label:?} ({length_in}\") exceeds stock length {stock_in}\"")]
    CutExceedsStock {
        label: String,
        length_in: f64,
        stock_in: f64,
    },

    /// Lengths must be positive
    #[error("cut {label:?} has non-positive length {length_in}\"")]
    NonPositiveCut { label: String, length_in: f64 },

    /// Stock length must be positive
    #[error("stock length must be positive, got {0}\"")]
    NonPositiveStock(f64),
}

/// One requested cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Label for the layout printout ("header", "cripple A")
    pub label: String,
    /// Length, inches
    pub length_in: f64,
}

impl Cut {
    /// Create a cut
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, length_in: f64) -> Self {
        Self {
            label: label.into(),
            length_in,
        }
    }
}

/// One stock board and the cuts assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Cuts in placement order
    pub cuts: Vec<Cut>,
    /// Unused length after all cuts and kerfs, inches
    pub waste_in: f64,
}

/// A packed cut plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Stock length the plan was packed against, inches
    pub stock_length_in: f64,
    /// Kerf allowance used per cut, inches
    pub kerf_in: f64,
    /// Boards in packing order
    pub boards: Vec<Board>,
}

impl CutPlan {
    /// Number of stock boards to buy
    #[inline]
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.boards.len()
    }

    /// Total waste across all boards, inches
    #[must_use]
    pub fn total_waste_in(&self) -> f64 {
        self.boards.iter().map(|b| b.waste_in).sum()
    }

    /// Total number of cuts placed
    #[must_use]
    pub fn cut_count(&self) -> usize {
        self.boards.iter().map(|b| b.cuts.len()).sum()
    }
}

/// Pack cuts onto stock boards with the default kerf
///
/// # Errors
/// See [`pack_cuts_with_kerf`].
pub fn pack_cuts(cuts: &[Cut], stock_length_in: f64) -> Result<CutPlan, CutError> {
    pack_cuts_with_kerf(cuts, stock_length_in, DEFAULT_KERF_IN)
}

/// Pack cuts onto stock boards, first-fit-decreasing
///
/// Every cut consumes `length + kerf` of board. Every input cut appears in
/// exactly one board of the returned plan.
///
/// # Errors
/// Rejects non-positive stock or cut lengths, and any cut that cannot come
/// out of a full board.
pub fn pack_cuts_with_kerf(
    cuts: &[Cut],
    stock_length_in: f64,
    kerf_in: f64,
) -> Result<CutPlan, CutError> {
    if stock_length_in <= 0.0 {
        return Err(CutError::NonPositiveStock(stock_length_in));
    }
    for cut in cuts {
        if cut.length_in <= 0.0 {
            return Err(CutError::NonPositiveCut {
                label: cut.label.clone(),
                length_in: cut.length_in,
            });
        }
        if cut.length_in + kerf_in > stock_length_in {
            return Err(CutError::CutExceedsStock {
                label: cut.label.clone(),
                length_in: cut.length_in,
                stock_in: stock_length_in,
            });
        }
    }

    let mut ordered: Vec<&Cut> = cuts.iter().collect();
    ordered.sort_by(|a, b| {
        b.length_in
            .partial_cmp(&a.length_in)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // (remaining length, cuts) per open board
    let mut boards: Vec<(f64, Vec<Cut>)> = Vec::new();

    for cut in ordered {
        let needed = cut.length_in + kerf_in;
        match boards.iter_mut().find(|(remaining, _)| *remaining >= needed) {
            Some((remaining, placed)) => {
                *remaining -= needed;
                placed.push(cut.clone());
            }
            None => {
                boards.push((stock_length_in - needed, vec![cut.clone()]));
            }
        }
    }

    Ok(CutPlan {
        stock_length_in,
        kerf_in,
        boards: boards
            .into_iter()
            .map(|(remaining, cuts)| Board {
                cuts,
                waste_in: remaining,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_board_when_everything_fits() {
        let cuts = vec![Cut::new("a", 30.0), Cut::new("b", 40.0), Cut::new("c", 20.0)];
        let plan = pack_cuts(&cuts, 96.0).unwrap();
        assert_eq!(plan.stock_count(), 1);
        assert_eq!(plan.cut_count(), 3);
    }

    #[test]
    fn longest_cuts_place_first() {
        let cuts = vec![Cut::new("short", 20.0), Cut::new("long", 90.0)];
        let plan = pack_cuts(&cuts, 96.0).unwrap();
        // 90 + 20 + kerfs > 96, so two boards; the long cut leads board one.
        assert_eq!(plan.stock_count(), 2);
        assert_eq!(plan.boards[0].cuts[0].label, "long");
    }

    #[test]
    fn oversize_cut_is_an_error() {
        let cuts = vec![Cut::new("ridge", 120.0)];
        let result = pack_cuts(&cuts, 96.0);
        assert!(matches!(result, Err(CutError::CutExceedsStock { .. })));
    }

    #[test]
    fn exact_fit_without_kerf() {
        let cuts = vec![Cut::new("a", 48.0), Cut::new("b", 48.0)];
        let plan = pack_cuts_with_kerf(&cuts, 96.0, 0.0).unwrap();
        assert_eq!(plan.stock_count(), 1);
        assert!(plan.total_waste_in().abs() < 1e-9);
    }

    #[test]
    fn kerf_forces_second_board() {
        let cuts = vec![Cut::new("a", 48.0), Cut::new("b", 48.0)];
        let plan = pack_cuts(&cuts, 96.0).unwrap();
        assert_eq!(plan.stock_count(), 2);
    }

    #[test]
    fn empty_cut_list_needs_no_stock() {
        let plan = pack_cuts(&[], 96.0).unwrap();
        assert_eq!(plan.stock_count(), 0);
        assert_eq!(plan.cut_count(), 0);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(matches!(
            pack_cuts(&[Cut::new("a", 0.0)], 96.0),
            Err(CutError::NonPositiveCut { .. })
        ));
        assert!(matches!(
            pack_cuts(&[Cut::new("a", 10.0)], 0.0),
            Err(CutError::NonPositiveStock(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_no_cut_dropped_and_no_board_overflows(
            lengths in proptest::collection::vec(1.0f64..90.0, 0..40)
        ) {
            let cuts: Vec<Cut> = lengths
                .iter()
                .enumerate()
                .map(|(i, len)| Cut::new(format!("c{i}"), *len))
                .collect();

            let plan = pack_cuts(&cuts, 96.0).unwrap();

            prop_assert_eq!(plan.cut_count(), cuts.len());
            for board in &plan.boards {
                let used: f64 = board
                    .cuts
                    .iter()
                    .map(|c| c.length_in + plan.kerf_in)
                    .sum();
                prop_assert!(used <= plan.stock_length_in + 1e-9);
                prop_assert!((used + board.waste_in - plan.stock_length_in).abs() < 1e-6);
            }
        }
    }
}
