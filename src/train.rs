use log::debug;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::TrainError;
use crate::model::PriceModel;

/// Fixed seed for the train/holdout shuffle; re-runs over the same dataset
/// ordering produce the same partitions and the same model.
pub const SPLIT_SEED: u64 = 42;

/// Fraction of rows withheld from fitting.
pub const HOLDOUT_FRACTION: f64 = 0.2;

/// Fits ordinary least squares on the training partition.
///
/// Rows are shuffled with a seeded rng and the holdout fraction is set
/// aside; the model sees only the remaining rows. No regularization and no
/// feature scaling. The holdout partition is not evaluated here; see
/// [`holdout_mse`].
///
/// # Errors
/// - [`TrainError::ShapeMismatch`] when `x` and `y` disagree on row count.
/// - [`TrainError::EmptyTrainingSet`] when the split leaves nothing to fit.
pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<PriceModel, TrainError> {
    if x.nrows() != y.len() {
        return Err(TrainError::ShapeMismatch {
            x_rows: x.nrows(),
            y_rows: y.len(),
        });
    }

    let (train_idx, holdout_idx) = split_indices(x.nrows());
    if train_idx.is_empty() {
        return Err(TrainError::EmptyTrainingSet { rows: x.nrows() });
    }
    debug!(
        "fitting on {} rows, {} held out",
        train_idx.len(),
        holdout_idx.len()
    );

    let cols = x.ncols();
    // Design matrix with a leading column of ones for the intercept.
    let mut design = Array2::<f64>::ones((train_idx.len(), cols + 1));
    let mut targets = Array1::<f64>::zeros(train_idx.len());
    for (r, &i) in train_idx.iter().enumerate() {
        for c in 0..cols {
            design[[r, c + 1]] = x[[i, c]];
        }
        targets[r] = y[i];
    }

    let beta = solve_normal_equations(&design, &targets);
    let intercept = beta[0];
    let coefficients = beta.iter().skip(1).copied().collect();
    Ok(PriceModel::new(coefficients, intercept))
}

/// Mean squared error of `model` over the holdout partition of `(x, y)`.
///
/// Recomputes the same seeded split as [`fit`], so calling it on the data
/// the model was fitted from scores exactly the rows the model never saw.
/// Returns `None` when the holdout partition is empty.
pub fn holdout_mse(model: &PriceModel, x: &Array2<f64>, y: &Array1<f64>) -> Option<f64> {
    let (_, holdout_idx) = split_indices(x.nrows());
    if holdout_idx.is_empty() {
        return None;
    }

    let sum: f64 = holdout_idx
        .iter()
        .map(|&i| {
            let row: Vec<f64> = x.row(i).to_vec();
            let err = model.apply(&row) - y[i];
            err * err
        })
        .sum();
    Some(sum / holdout_idx.len() as f64)
}

/// Deterministic shuffled split of `0..rows` into (train, holdout).
fn split_indices(rows: usize) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    indices.shuffle(&mut rng);

    let holdout = ((rows as f64) * HOLDOUT_FRACTION).ceil() as usize;
    let holdout_idx = indices[..holdout].to_vec();
    let train_idx = indices[holdout..].to_vec();
    (train_idx, holdout_idx)
}

/// Solves `(DᵀD) β = Dᵀt` by Gaussian elimination with partial pivoting.
///
/// Columns whose pivot falls below a scale-relative tolerance are treated as
/// free and their coefficient resolves to zero, so rank-deficient systems
/// (tiny or degenerate datasets) still yield a finite, reproducible model
/// instead of dividing by noise.
fn solve_normal_equations(design: &Array2<f64>, targets: &Array1<f64>) -> Array1<f64> {
    let n = design.ncols();
    let mut a = design.t().dot(design);
    let mut b = design.t().dot(targets);

    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let tol = (1e-9 * scale).max(f64::MIN_POSITIVE);

    let mut pivot_row = vec![None; n];
    let mut row = 0;
    for col in 0..n {
        if row == n {
            break;
        }

        // Partial pivoting: bring the largest remaining entry up.
        let mut best = row;
        for r in row + 1..n {
            if a[[r, col]].abs() > a[[best, col]].abs() {
                best = r;
            }
        }
        if a[[best, col]].abs() <= tol {
            continue; // free column
        }
        if best != row {
            for c in 0..n {
                a.swap([row, c], [best, c]);
            }
            b.swap(row, best);
        }

        for r in row + 1..n {
            let factor = a[[r, col]] / a[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                a[[r, c]] -= factor * a[[row, c]];
            }
            b[r] -= factor * b[row];
        }

        pivot_row[col] = Some(row);
        row += 1;
    }

    let mut beta = Array1::<f64>::zeros(n);
    for col in (0..n).rev() {
        if let Some(r) = pivot_row[col] {
            let mut sum = b[r];
            for c in col + 1..n {
                sum -= a[[r, c]] * beta[c];
            }
            beta[col] = sum / a[[r, col]];
        }
    }
    beta
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Noiseless linear data with enough independent rows to be full rank.
    fn full_rank_data() -> (Array2<f64>, Array1<f64>) {
        let x = array![
            [0.0, 1000.0, 1.0, 1.0],
            [1.0, 1200.0, 2.0, 2.0],
            [2.0, 1500.0, 2.0, 3.0],
            [0.0, 1800.0, 3.0, 3.0],
            [1.0, 2100.0, 3.0, 4.0],
            [2.0, 900.0, 1.0, 2.0],
            [0.0, 1350.0, 2.0, 3.0],
            [1.0, 1650.0, 2.0, 2.0],
            [2.0, 2400.0, 4.0, 4.0],
            [0.0, 1100.0, 1.0, 2.0],
            [1.0, 1900.0, 3.0, 3.0],
            [2.0, 1250.0, 2.0, 1.0],
        ];
        // price = 20 + 5*code + 0.05*sqft + 3*bath + 7*bhk
        let y = x.rows().into_iter().map(|r| {
            20.0 + 5.0 * r[0] + 0.05 * r[1] + 3.0 * r[2] + 7.0 * r[3]
        });
        let y = Array1::from_iter(y);
        (x, y)
    }

    #[test]
    fn recovers_exact_coefficients_on_noiseless_data() {
        let (x, y) = full_rank_data();
        let model = fit(&x, &y).unwrap();

        assert!((model.intercept() - 20.0).abs() < 1e-4);
        let expected = [5.0, 0.05, 3.0, 7.0];
        for (got, want) in model.coefficients().iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "got {got}, want {want}");
        }
    }

    #[test]
    fn fit_is_reproducible_across_runs() {
        let (x, y) = full_rank_data();
        let a = fit(&x, &y).unwrap();
        let b = fit(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rank_deficient_data_still_yields_a_finite_model() {
        // Two identical rows: the training partition cannot determine all
        // five parameters.
        let x = array![[1.0, 1200.0, 2.0, 2.0], [1.0, 1200.0, 2.0, 2.0]];
        let y = array![85.0, 85.0];

        let model = fit(&x, &y).unwrap();
        assert!(model.intercept().is_finite());
        assert!(model.coefficients().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn single_row_cannot_be_split() {
        let x = array![[1.0, 1200.0, 2.0, 2.0]];
        let y = array![85.0];
        assert!(matches!(
            fit(&x, &y),
            Err(TrainError::EmptyTrainingSet { rows: 1 })
        ));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let x = array![[1.0, 1200.0, 2.0, 2.0]];
        let y = array![85.0, 90.0];
        assert!(matches!(fit(&x, &y), Err(TrainError::ShapeMismatch { .. })));
    }

    #[test]
    fn holdout_mse_is_zero_for_a_perfect_model() {
        let (x, y) = full_rank_data();
        let model = fit(&x, &y).unwrap();
        let mse = holdout_mse(&model, &x, &y).unwrap();
        assert!(mse.abs() < 1e-6, "mse was {mse}");
    }

    #[test]
    fn split_is_deterministic_and_sized_by_fraction() {
        let (train_a, holdout_a) = split_indices(10);
        let (train_b, holdout_b) = split_indices(10);
        assert_eq!(train_a, train_b);
        assert_eq!(holdout_a, holdout_b);
        assert_eq!(holdout_a.len(), 2);
        assert_eq!(train_a.len(), 8);
    }
}
