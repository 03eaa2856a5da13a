use chanest::estimation::LinkParams;
use chanest::linalg::{c64, CMat};
use faer::Side;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// Exponential receive correlation `C[i][j] = rho^|i - j|`.
pub fn exponential_covariance(num_rx: usize, rho: f64) -> CMat {
    CMat::from_fn(num_rx, num_rx, |i, j| {
        c64::new(rho.powi((i as i32 - j as i32).abs()), 0.0)
    })
}

/// Lower Cholesky factor `L` of a Hermitian positive definite covariance, `c = L L^H`.
pub fn cholesky_lower(c: &CMat) -> Result<CMat, Box<dyn std::error::Error>> {
    Ok(c.cholesky(Side::Lower)?.compute_l())
}

/// Draw a circularly-symmetric complex Gaussian sample with the given variance.
pub fn complex_gaussian<R: Rng>(rng: &mut R, variance: f64) -> Result<c64, NormalError> {
    let normal = Normal::new(0.0, (variance / 2.0).sqrt())?;
    Ok(c64::new(normal.sample(rng), normal.sample(rng)))
}

/// Draw a (Nr, 1) channel `L z` with covariance `L L^H`.
pub fn draw_channel<R: Rng>(rng: &mut R, chol: &CMat) -> Result<CMat, NormalError> {
    let z = (0..chol.ncols())
        .map(|_| complex_gaussian(rng, 1.0))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(chol * &CMat::from_fn(z.len(), 1, |i, _| z[i]))
}

/// Constant-envelope chirp pilots `sqrt(P) exp(j pi k^2 / N)` with shape (1, num_pilots).
pub fn chirp_pilots(params: &LinkParams) -> CMat {
    let amp = params.pilot_power.sqrt();
    let n = params.num_pilots as f64;
    CMat::from_fn(1, params.num_pilots, |_, k| {
        let phase = std::f64::consts::PI * (k * k) as f64 / n;
        c64::new(amp * phase.cos(), amp * phase.sin())
    })
}

/// Received pilot block `alpha * h * s + N`.
pub fn receive<R: Rng>(
    rng: &mut R,
    h: &CMat,
    s: &CMat,
    params: &LinkParams,
) -> Result<CMat, NormalError> {
    let normal = Normal::new(0.0, (params.noise_power / 2.0).sqrt())?;
    let clean = h * s;
    Ok(CMat::from_fn(clean.nrows(), clean.ncols(), |i, j| {
        clean.read(i, j) * c64::new(params.alpha, 0.0)
            + c64::new(normal.sample(rng), normal.sample(rng))
    }))
}
