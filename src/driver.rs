//! The tick loop that shows a generation, paces, and derives the next one.

use crate::{
    Grid,
    engine::next_generation,
    source::SourceError,
    stats::Recorder,
};
use std::{io, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("frontend failed: {0}")]
    Io(#[from] io::Error),
    #[error("unable to reseed the grid: {0}")]
    Reseed(#[from] SourceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Exit,
}

/// Whatever shows generations to the user and collects their input
pub trait Frontend {
    fn render(&mut self, grid: &Grid, generation: usize) -> io::Result<()>;

    /// Paces the loop between two generations
    ///
    /// Interactive frontends block until the user asks for the next
    /// generation, others sleep for `delay` while watching for a quit key.
    fn wait(&mut self, interactive: bool, delay: Duration) -> io::Result<Command>;

    fn report(&mut self, report: &str) -> io::Result<()>;

    /// Whether a report should be produced on every tick
    fn live_report(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    /// Generations derived from one seed before the grid is replaced by a
    /// fresh one, [`None`] never resets
    pub max_generations_before_reset: Option<usize>,
    pub interactive: bool,
    pub tick_delay: Duration,
    /// Total generations to derive, [`None`] runs until the user exits
    pub max_generations: Option<usize>,
}
impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            max_generations_before_reset: Some(25),
            interactive: false,
            tick_delay: Duration::from_millis(100),
            max_generations: None,
        }
    }
}

pub struct Simulation<R> {
    options: DriverOptions,
    stats: R,
}

impl<R: Recorder> Simulation<R> {
    pub fn new(options: DriverOptions, stats: R) -> Self {
        Self { options, stats }
    }

    #[inline]
    pub fn stats(&self) -> &R {
        &self.stats
    }

    #[inline]
    pub fn into_stats(self) -> R {
        self.stats
    }

    #[inline]
    fn reached_max(&self, derived: usize) -> bool {
        self.options.max_generations.is_some_and(|max| derived >= max)
    }

    /// Runs generations starting from `initial` until the frontend exits or
    /// `max_generations` have been derived, returning the last grid
    ///
    /// `reseed` builds a new generation 0 of the given `(rows, columns)`
    /// whenever `max_generations_before_reset` is exceeded, unless that
    /// generation is also the last one.
    pub fn run<F, S>(
        &mut self,
        initial: Grid,
        frontend: &mut F,
        mut reseed: S,
    ) -> Result<Grid, SimulationError>
    where
        F: Frontend,
        S: FnMut(usize, usize) -> Result<Grid, SourceError>,
    {
        let mut grid = initial;
        let mut derived = 0;
        let mut since_reset = 0;
        log::info!(
            "starting simulation on {}x{} grid, {} alive",
            grid.rows(),
            grid.columns(),
            grid.alive_count()
        );

        loop {
            if self.reached_max(derived) {
                log::info!("reached {} generations", derived);
                break;
            }

            frontend.render(&grid, derived)?;
            if self.stats.has_report(frontend.live_report()) {
                let report = self.stats.report();
                frontend.report(report.as_ref())?;
            }

            if frontend.wait(self.options.interactive, self.options.tick_delay)? == Command::Exit {
                log::info!("exit requested after {} generations", derived);
                break;
            }

            // the previous generation is dropped as soon as the next exists
            grid = next_generation(&grid);
            derived += 1;
            since_reset += 1;
            self.stats.record(grid.alive_count());
            log::trace!("generation {}: {} alive", derived, grid.alive_count());

            // the last derived generation is the result, never a fresh seed
            if self.reached_max(derived) {
                log::info!("reached {} generations", derived);
                break;
            }
            if self
                .options
                .max_generations_before_reset
                .is_some_and(|limit| since_reset > limit)
            {
                grid = reseed(grid.rows(), grid.columns())?;
                since_reset = 0;
                self.stats.reset(grid.alive_count());
                log::info!(
                    "reset grid after generation {}, {} alive",
                    derived,
                    grid.alive_count()
                );
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, stats::SimpleRecord};

    /// Records what it is shown and exits after a fixed number of waits
    #[derive(Default)]
    struct ScriptedFrontend {
        shown: Vec<(usize, Grid)>,
        reports: Vec<String>,
        waits: usize,
        exit_after: Option<usize>,
        interactive_waits: usize,
    }
    impl Frontend for ScriptedFrontend {
        fn render(&mut self, grid: &Grid, generation: usize) -> io::Result<()> {
            self.shown.push((generation, grid.clone()));
            Ok(())
        }
        fn wait(&mut self, interactive: bool, _delay: Duration) -> io::Result<Command> {
            self.waits += 1;
            if interactive {
                self.interactive_waits += 1;
            }
            Ok(match self.exit_after {
                Some(n) if self.waits >= n => Command::Exit,
                _ => Command::Continue,
            })
        }
        fn report(&mut self, report: &str) -> io::Result<()> {
            self.reports.push(report.to_owned());
            Ok(())
        }
        fn live_report(&self) -> bool {
            true
        }
    }

    fn blinker() -> Grid {
        Grid::from_alive(5, 5, [Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]).unwrap()
    }

    fn options(reset: Option<usize>, max: Option<usize>) -> DriverOptions {
        DriverOptions {
            max_generations_before_reset: reset,
            interactive: false,
            tick_delay: Duration::ZERO,
            max_generations: max,
        }
    }

    fn no_reseed(_: usize, _: usize) -> Result<Grid, SourceError> {
        panic!("unexpected reseed")
    }

    #[test]
    fn stops_after_max_generations() {
        let mut sim = Simulation::new(options(None, Some(3)), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        let last = sim.run(blinker(), &mut frontend, no_reseed).unwrap();

        let generations: Vec<_> = frontend.shown.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2]);
        assert_eq!(sim.stats().generations(), 3);
        // odd number of blinker steps ends vertical
        assert_eq!(last, blinker().next_generation());
    }

    #[test]
    fn exit_command_stops_before_deriving() {
        let mut sim = Simulation::new(options(None, None), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend {
            exit_after: Some(2),
            ..Default::default()
        };
        let last = sim.run(blinker(), &mut frontend, no_reseed).unwrap();

        assert_eq!(frontend.shown.len(), 2);
        assert_eq!(sim.stats().generations(), 1);
        assert_eq!(last, frontend.shown[1].1);
    }

    #[test]
    fn reseeds_once_the_limit_is_exceeded() {
        let mut sim = Simulation::new(options(Some(2), Some(7)), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        let mut reseeds = Vec::new();
        let last = sim
            .run(blinker(), &mut frontend, |rows, columns| {
                reseeds.push((rows, columns));
                Ok(Grid::dead(rows, columns)?)
            })
            .unwrap();

        // derived 3 and 6 exceed the limit of 2 since the last seed
        assert_eq!(reseeds, vec![(5, 5), (5, 5)]);
        assert_eq!(sim.stats().resets(), 2);
        assert_eq!(frontend.shown[3].1.alive_count(), 0);
        assert_eq!(frontend.shown[2].1, blinker());
        assert_eq!(last.alive_count(), 0);
    }

    #[test]
    fn last_generation_is_not_replaced_by_a_reseed() {
        let mut sim = Simulation::new(options(Some(2), Some(3)), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        let last = sim.run(blinker(), &mut frontend, no_reseed).unwrap();

        assert_eq!(last, blinker().next_generation());
        assert_eq!(sim.stats().resets(), 0);
        assert_eq!(frontend.shown.len(), 3);
    }

    #[test]
    fn reseed_failure_is_reported() {
        let mut sim = Simulation::new(options(Some(0), Some(5)), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        let result = sim.run(blinker(), &mut frontend, |_, _| {
            Err(SourceError::InvalidProbability(2.0))
        });

        assert!(matches!(result, Err(SimulationError::Reseed(_))));
    }

    #[test]
    fn interactive_flag_reaches_frontend() {
        let mut opts = options(None, Some(2));
        opts.interactive = true;
        let mut sim = Simulation::new(opts, SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        sim.run(blinker(), &mut frontend, no_reseed).unwrap();

        assert_eq!(frontend.interactive_waits, 2);
    }

    #[test]
    fn live_frontends_get_a_report_every_tick() {
        let mut sim = Simulation::new(options(None, Some(3)), SimpleRecord::new(3));
        let mut frontend = ScriptedFrontend::default();
        sim.run(blinker(), &mut frontend, no_reseed).unwrap();

        assert_eq!(frontend.reports.len(), 3);
        assert!(frontend.reports[2].contains("gens:2"));
    }
}
