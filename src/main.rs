use anyhow::Context;
use gridlife::{FillMode, Grid, Simulation, SourceError, stats::SwitchRecorder};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

mod console;
mod options;

fn args_to_grid(args: &options::Args, fill: &FillMode, rng: &mut StdRng) -> anyhow::Result<Grid> {
    let (rows, columns) = (args.rows()?, args.columns()?);

    if let Some(path) = args.input_file() {
        match gridlife::load_grid(&path) {
            Ok(grid) => return Ok(grid),
            Err(err @ SourceError::Unavailable { .. }) => {
                log::error!("{}, falling back to {:?} fill", err, fill);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        }
    } else if args.manual() {
        let grid = gridlife::read_manual_grid(io::stdin().lock(), rows, columns, io::stdout())?;
        return Ok(grid);
    }

    Ok(fill.create_grid(rows, columns, rng)?)
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    // console mode owns the screen, keep logs to warnings and up
    let default_filter = if args.console() { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let fill = args.fill_mode()?;
    let mut rng = match args.seed()? {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = args_to_grid(&args, &fill, &mut rng)?;
    log::info!("alive: {}", grid.alive_count());

    // setup the driver and reporting metrics
    let stats = SwitchRecorder::new(grid.alive_count(), args.stats_file().is_some());
    let mut sim = Simulation::new(args.driver_options()?, stats);
    let reseed = |rows: usize, columns: usize| fill.create_grid(rows, columns, &mut rng);

    let last = if args.console() {
        // restores the terminal when dropped, also on the error path
        let mut console = console::ConsoleRender::new()?;
        sim.run(grid, &mut console, reseed)?
    } else {
        sim.run(grid, &mut console::PlainRender::new(), reseed)?
    };

    if let Some(path) = args.output_file() {
        gridlife::save_grid(&path, &last)?;
    }
    if let Some(path) = args.stats_file() {
        if sim.stats().save(&path).context("writing stats")? {
            log::info!("wrote stats to {}", path.display());
        }
    }

    Ok(())
}
