use chanest_linalg::CMat;

use crate::error::EstimationError;

/// Pilot sequences used across a batch of channel realizations.
///
/// Each sequence has shape (Nt, num_pilots).
#[derive(Debug, Clone, Copy)]
pub enum Pilots<'a> {
    /// The same pilot sequence is transmitted in every realization.
    Shared(&'a CMat),
    /// `seqs[i]` is the pilot sequence transmitted in realization `i`.
    PerRealization(&'a [CMat]),
}

impl<'a> Pilots<'a> {
    /// Check that the pilots can be paired with `num_realizations` received signals.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationError::RealizationCountMismatch`] if per-realization pilots
    /// do not hold exactly one sequence per realization.
    pub fn check_realizations(&self, num_realizations: usize) -> Result<(), EstimationError> {
        match self {
            Pilots::Shared(_) => Ok(()),
            Pilots::PerRealization(seqs) if seqs.len() == num_realizations => Ok(()),
            Pilots::PerRealization(seqs) => Err(EstimationError::RealizationCountMismatch(
                num_realizations,
                seqs.len(),
            )),
        }
    }

    /// Iterate over the distinct pilot sequences.
    pub fn sequences(&self) -> impl Iterator<Item = &'a CMat> {
        let seqs: &'a [CMat] = match *self {
            Pilots::Shared(s) => std::slice::from_ref(s),
            Pilots::PerRealization(seqs) => seqs,
        };
        seqs.iter()
    }
}

/// Check that the received signal (Nr, num_pilots) spans the same pilots as `s` (Nt, num_pilots).
pub(crate) fn check_pilot_count(y_p: &CMat, s: &CMat) -> Result<(), EstimationError> {
    if y_p.ncols() != s.ncols() {
        return Err(EstimationError::PilotCountMismatch(y_p.ncols(), s.ncols()));
    }
    Ok(())
}
