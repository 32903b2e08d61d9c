use std::{path::PathBuf, time::Duration};

use gridlife::{DriverOptions, FillMode};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    const DEFAULT_ROWS: usize = 30;
    const DEFAULT_COLUMNS: usize = 80;
    const DEFAULT_SLEEP_MILLIS: u64 = 100;
    const DEFAULT_RESET: usize = 25;

    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in full-screen console mode");
        opts.optflag("m", "manual", "type the starting grid row by row");
        opts.optflag("", "step", "wait for a key between generations, 'x' quits");
        opts.optopt("i", "input", "read the starting grid from a file", "FILE");
        opts.optopt("o", "output", "write the last grid to a file", "FILE");
        opts.optopt("r", "rows", "set grid rows", "ROWS");
        opts.optopt("w", "columns", "set grid columns", "COLUMNS");
        opts.optopt("f", "fill", "set fill type (random, alternating, all, empty)", "TYPE");
        opts.optopt("p", "probability", "chance of a random cell being alive", "P");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "reset", "reseed after this many generations, 0 never", "COUNT");
        opts.optopt("", "seed", "seed for the random fill", "N");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses the arguments, `Ok(None)` means help was printed
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: gridlife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed numbers up front rather than mid-run
        args.rows()?;
        args.columns()?;
        args.fill_mode()?;
        args.driver_options()?;
        args.seed()?;
        Ok(Some(args))
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn manual(&self) -> bool {
        self.matches.opt_present("manual")
    }

    pub fn rows(&self) -> anyhow::Result<usize> {
        Ok(self.matches.opt_get_default("rows", Self::DEFAULT_ROWS)?)
    }
    pub fn columns(&self) -> anyhow::Result<usize> {
        Ok(self.matches.opt_get_default("columns", Self::DEFAULT_COLUMNS)?)
    }
    pub fn seed(&self) -> anyhow::Result<Option<u64>> {
        Ok(self.matches.opt_get("seed")?)
    }

    pub fn fill_mode(&self) -> anyhow::Result<FillMode> {
        let probability = self
            .matches
            .opt_get_default("probability", FillMode::DEFAULT_PROBABILITY)?;
        let mode_str = self.matches.opt_str("fill");
        let name = mode_str.as_deref().unwrap_or("random");
        FillMode::new(name, probability)?
            .ok_or_else(|| anyhow::anyhow!("unknown fill mode {:?}", name))
    }

    pub fn driver_options(&self) -> anyhow::Result<DriverOptions> {
        let sleep = self
            .matches
            .opt_get_default("sleep", Self::DEFAULT_SLEEP_MILLIS)?;
        let reset = self.matches.opt_get_default("reset", Self::DEFAULT_RESET)?;
        Ok(DriverOptions {
            max_generations_before_reset: (reset > 0).then_some(reset),
            interactive: self.matches.opt_present("step"),
            tick_delay: Duration::from_millis(sleep),
            max_generations: self.matches.opt_get("gens")?,
        })
    }

    pub fn output_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("output").map(PathBuf::from)
    }
    pub fn input_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("input").map(PathBuf::from)
    }
    pub fn stats_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("stats").map(PathBuf::from)
    }
}
