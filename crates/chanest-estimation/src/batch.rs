use chanest_linalg::CMat;
use rayon::prelude::*;

use crate::error::EstimationError;
use crate::pilots::Pilots;

/// Apply a single-realization estimator to every realization of a batch in parallel.
///
/// Realization `i` is paired with the shared pilot sequence or with `seqs[i]`.
/// The output keeps the input order; the first failing realization aborts the batch.
/// Every realization must share the receive antenna count of the first one, and every
/// per-realization pilot sequence the stream count of the first sequence.
pub(crate) fn estimate_batch<F>(
    y_p: &[CMat],
    pilots: Pilots<'_>,
    estimate: F,
) -> Result<Vec<CMat>, EstimationError>
where
    F: Fn(&CMat, &CMat) -> Result<CMat, EstimationError> + Send + Sync,
{
    pilots.check_realizations(y_p.len())?;
    check_same_rows(y_p)?;
    if let Pilots::PerRealization(seqs) = pilots {
        check_same_rows(seqs)?;
    }

    log::debug!("estimating {} channel realizations", y_p.len());

    match pilots {
        Pilots::Shared(s) => y_p.par_iter().map(|y_i| estimate(y_i, s)).collect(),
        Pilots::PerRealization(seqs) => y_p
            .par_iter()
            .zip(seqs.par_iter())
            .map(|(y_i, s_i)| estimate(y_i, s_i))
            .collect(),
    }
}

/// Check that every matrix has as many rows as the first one.
fn check_same_rows(mats: &[CMat]) -> Result<(), EstimationError> {
    let Some(first) = mats.first() else {
        return Ok(());
    };
    match mats.iter().find(|m| m.nrows() != first.nrows()) {
        Some(m) => Err(EstimationError::ShapeMismatch(
            [first.nrows(), first.ncols()],
            [m.nrows(), m.ncols()],
        )),
        None => Ok(()),
    }
}
