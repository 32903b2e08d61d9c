use std::time::{Duration, Instant};

pub trait Recorder {
    type Str: AsRef<str>;

    /// Records one derived generation with `alive` live cells
    fn record(&mut self, alive: usize);
    /// Records that the grid was replaced by a fresh generation 0
    fn reset(&mut self, alive: usize);

    fn has_report(&self, force: bool) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    resets: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    const REPORT_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            resets: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.gens
    }
    #[inline]
    pub fn resets(&self) -> usize {
        self.resets
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }
    fn reset(&mut self, alive: usize) {
        self.resets += 1;
        self.alive = alive;
    }

    fn has_report(&self, force: bool) -> bool {
        force || self.last_report.elapsed() >= Self::REPORT_INTERVAL
    }
    fn report(&mut self) -> Self::Str {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, resets:{}, alive:{}",
            gens_per_sec, self.gens, self.resets, self.alive
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_csv<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i + 1, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }
    fn reset(&mut self, alive: usize) {
        self.inner.reset(alive);
    }

    fn has_report(&self, force: bool) -> bool {
        self.inner.has_report(force)
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }

    /// Saves the CSV statistics, if this recorder keeps any
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<bool> {
        match self {
            Self::Csv(r) => r.save(path).map(|()| true),
            Self::Simple(_) => Ok(false),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.record(alive),
            Self::Simple(r) => r.record(alive),
        }
    }
    fn reset(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.reset(alive),
            Self::Simple(r) => r.reset(alive),
        }
    }
    fn has_report(&self, force: bool) -> bool {
        match self {
            Self::Csv(r) => r.has_report(force),
            Self::Simple(r) => r.has_report(force),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_record_counts_generations() {
        let mut stats = SimpleRecord::new(10);
        stats.record(8);
        stats.record(6);
        stats.reset(12);

        assert_eq!(stats.generations(), 2);
        assert_eq!(stats.resets(), 1);
        assert!(stats.has_report(true));
        assert!(stats.report().ends_with("gens:2, resets:1, alive:12"));
    }

    #[test]
    fn fresh_record_waits_for_interval() {
        let stats = SimpleRecord::new(0);

        assert!(!stats.has_report(false));
    }

    #[test]
    fn csv_lists_every_generation() {
        let mut stats = CsvRecord::new(3);
        stats.record(2);
        stats.record(0);

        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "gen,delta_t,alive");
        assert!(lines[1].starts_with("1,") && lines[1].ends_with(",2"));
        assert!(lines[2].starts_with("2,") && lines[2].ends_with(",0"));
    }

    #[test]
    fn simple_switch_has_nothing_to_save() {
        let stats = SwitchRecorder::new(0, false);
        let path = std::env::temp_dir().join("gridlife-unused-stats.csv");

        assert!(!stats.save(&path).unwrap());
    }
}
