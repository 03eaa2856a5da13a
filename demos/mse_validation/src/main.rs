use argh::FromArgs;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;

use chanest::estimation::{self as est, LinkParams, Pilots};
use chanest::linalg::scale_real;

mod simulation;

#[derive(FromArgs)]
/// Compare the empirical and theoretical MSE of the LS and MMSE channel estimators
struct Args {
    /// number of receive antennas
    #[argh(option, default = "4")]
    num_rx: usize,

    /// number of pilots in the estimation window
    #[argh(option, default = "16")]
    num_pilots: usize,

    /// number of channel realizations per SNR point
    #[argh(option, default = "2000")]
    realizations: usize,

    /// linear path loss
    #[argh(option, default = "1.0")]
    alpha: f64,

    /// power of each pilot symbol
    #[argh(option, default = "1.0")]
    pilot_power: f64,

    /// correlation between neighbouring receive antennas, in [0, 1)
    #[argh(option, default = "0.7")]
    correlation: f64,

    /// received pilot SNR in dB, can be repeated
    #[argh(option)]
    snr_db: Vec<f64>,

    /// seed of the random generator
    #[argh(option, default = "0")]
    seed: u64,

    /// path to a JSON file with the link parameters, overrides the scalar options
    #[argh(option)]
    config: Option<PathBuf>,

    /// print the report as JSON
    #[argh(switch)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SnrPoint {
    snr_db: f64,
    noise_power: f64,
    ls_empirical: f64,
    ls_theoretical: f64,
    mmse_empirical: f64,
    mmse_theoretical: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let base = match &args.config {
        Some(path) => {
            let file = std::io::BufReader::new(std::fs::File::open(path)?);
            serde_json::from_reader::<_, LinkParams>(file)?
        }
        None => LinkParams {
            num_rx: args.num_rx,
            alpha: args.alpha,
            pilot_power: args.pilot_power,
            num_pilots: args.num_pilots,
            ..Default::default()
        },
    };
    base.validate()?;

    if !(0.0..1.0).contains(&args.correlation) {
        return Err(format!("correlation must be in [0, 1), got {}", args.correlation).into());
    }

    let snr_points = match (args.snr_db.is_empty(), &args.config) {
        (false, _) => args.snr_db.clone(),
        (true, Some(_)) => vec![base.snr_db()],
        (true, None) => vec![-5.0, 0.0, 5.0, 10.0, 15.0, 20.0],
    };

    let cov = simulation::exponential_covariance(base.num_rx, args.correlation);
    let chol = simulation::cholesky_lower(&cov)?;
    let s = simulation::chirp_pilots(&base);
    let mut rng = StdRng::seed_from_u64(args.seed);

    log::info!(
        "num_rx: {}, num_pilots: {}, realizations: {}, correlation: {}",
        base.num_rx,
        base.num_pilots,
        args.realizations,
        args.correlation
    );

    let mut report = Vec::with_capacity(snr_points.len());
    for snr_db in snr_points {
        let params = base.with_snr_db(snr_db);

        let channels = (0..args.realizations)
            .map(|_| simulation::draw_channel(&mut rng, &chol))
            .collect::<Result<Vec<_>, _>>()?;
        // received blocks referred to the unit-gain channel
        let received = channels
            .iter()
            .map(|h| {
                let y_p = simulation::receive(&mut rng, h, &s, &params)?;
                Ok(scale_real(&y_p, 1.0 / params.alpha))
            })
            .collect::<Result<Vec<_>, rand_distr::NormalError>>()?;

        let ls = est::ls_estimate_batch(&received, Pilots::Shared(&s))?;
        let mmse = est::mmse_estimate_batch(
            &received,
            Pilots::Shared(&s),
            params.combined_noise_power(),
            &cov,
        )?;

        let point = SnrPoint {
            snr_db,
            noise_power: params.noise_power,
            ls_empirical: est::empirical_mse(&ls, &channels)?,
            ls_theoretical: params.ls_theoretical_mse(),
            mmse_empirical: est::empirical_mse(&mmse, &channels)?,
            mmse_theoretical: params.mmse_theoretical_mse(&cov)?,
        };
        log::debug!("{:?}", point);
        report.push(point);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14}",
        "SNR[dB]", "LS emp[dB]", "LS th[dB]", "MMSE emp[dB]", "MMSE th[dB]"
    );
    for point in &report {
        println!(
            "{:>8.1} {:>14.3} {:>14.3} {:>14.3} {:>14.3}",
            point.snr_db,
            est::to_db(point.ls_empirical),
            est::to_db(point.ls_theoretical),
            est::to_db(point.mmse_empirical),
            est::to_db(point.mmse_theoretical),
        );
    }

    Ok(())
}
