//! Runs several sorts on copies of the same input and reports which one was fastest.
//!
//! This is a diagnostic tool, a single timed run per contender says little about how the
//! routines compare in general. Use the criterion benchmarks for that.

use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::radix::{self, GroupWidth, RadixKey};
use crate::select::Algorithm;
use crate::stable::{insertion_sort, merge_sort};
use crate::unstable::{bubble_sort, heapsort, quicksort, selection_sort};

pub type SortFn<T> = fn(&mut [T]);

/// One named sort routine taking part in a race.
pub struct Contender<T> {
    name: &'static str,
    sort: SortFn<T>,
}

impl<T> Contender<T> {
    pub fn new(name: &'static str, sort: SortFn<T>) -> Self {
        Self { name, sort }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Contender<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            sort: self.sort,
        }
    }
}

impl<T> fmt::Debug for Contender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contender").field("name", &self.name).finish()
    }
}

/// Timing of one contender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceEntry {
    pub name: &'static str,
    pub elapsed: Duration,
}

impl RaceEntry {
    /// Elapsed time in ticks, one tick is one nanosecond.
    pub fn ticks(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for RaceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Sort Time : {} ticks", self.name, self.ticks())
    }
}

/// Outcome of [`SortRace::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceReport {
    fastest: RaceEntry,
    history: Vec<RaceEntry>,
}

impl RaceReport {
    pub fn fastest(&self) -> &'static str {
        self.fastest.name
    }

    pub fn ticks(&self) -> u64 {
        self.fastest.ticks()
    }

    pub fn elapsed(&self) -> Duration {
        self.fastest.elapsed
    }

    /// Every contender in the order it ran.
    pub fn entries(&self) -> &[RaceEntry] {
        &self.history
    }

    /// One `"<Name> Sort Time : <ticks> ticks"` line per contender, each terminated by a newline.
    pub fn history(&self) -> String {
        self.history
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for RaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The fastest sort is {} and cost {} ticks.",
            self.fastest(),
            self.ticks()
        )?;
        writeln!(f, "*****History*****")?;
        f.write_str(&self.history())
    }
}

/// An ordered list of contenders, run one after another on copies of the same input.
#[derive(Debug, Clone)]
pub struct SortRace<T> {
    contenders: Vec<Contender<T>>,
}

impl<T> Default for SortRace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortRace<T> {
    /// A race without contenders.
    pub fn new() -> Self {
        Self {
            contenders: Vec::new(),
        }
    }

    pub fn with_contender(mut self, name: &'static str, sort: SortFn<T>) -> Self {
        self.contenders.push(Contender::new(name, sort));
        self
    }

    pub fn contenders(&self) -> &[Contender<T>] {
        &self.contenders
    }
}

impl<T: Ord> SortRace<T> {
    /// Merge, Quick, Heap, Bubble, Insertion and Selection, in that order.
    pub fn generic() -> Self {
        Self::new().with_generic_contenders()
    }

    fn with_generic_contenders(mut self) -> Self {
        for algorithm in Algorithm::GENERIC {
            let sort: SortFn<T> = match algorithm {
                Algorithm::Merge => merge_sort::sort,
                Algorithm::Quick => quicksort::sort,
                Algorithm::Heap => heapsort::sort,
                Algorithm::Bubble => bubble_sort::sort,
                Algorithm::Insertion => insertion_sort::sort,
                Algorithm::Selection => selection_sort::sort,
                Algorithm::Radix(_) => continue,
            };
            self.contenders.push(Contender::new(algorithm.name(), sort));
        }

        self
    }
}

impl<T: RadixKey + Ord> SortRace<T> {
    /// The radix sort at every group width, followed by the [`generic`](Self::generic)
    /// contenders.
    pub fn integer() -> Self {
        let mut race = Self::new();
        for width in GroupWidth::ALL {
            let sort: SortFn<T> = match width {
                GroupWidth::Four => |v| radix::sort_with_width(v, GroupWidth::Four),
                GroupWidth::Eight => |v| radix::sort_with_width(v, GroupWidth::Eight),
                GroupWidth::Sixteen => |v| radix::sort_with_width(v, GroupWidth::Sixteen),
                GroupWidth::ThirtyTwo => |v| radix::sort_with_width(v, GroupWidth::ThirtyTwo),
            };
            race.contenders.push(Contender::new(Algorithm::Radix(width).name(), sort));
        }

        race.with_generic_contenders()
    }
}

impl<T: Clone> SortRace<T> {
    /// Runs every contender once on a fresh copy of `data`.
    ///
    /// The fastest contender is tracked with a strict comparison, on a tie the one that ran first
    /// wins.
    pub fn run(&self, data: &[T]) -> Result<RaceReport> {
        let mut scratch = Vec::with_capacity(data.len());
        let mut history = Vec::with_capacity(self.contenders.len());
        let mut fastest: Option<RaceEntry> = None;

        for contender in &self.contenders {
            let elapsed = timed_run(data, &mut scratch, contender.sort);
            let entry = RaceEntry {
                name: contender.name,
                elapsed,
            };
            trace!("{entry}");

            if fastest.map_or(true, |best| entry.elapsed < best.elapsed) {
                fastest = Some(entry);
            }
            history.push(entry);
        }

        let fastest = fastest.ok_or(Error::NoContenders)?;
        debug!(
            "fastest of {} contenders on {} elements: {} ({} ticks)",
            history.len(),
            data.len(),
            fastest.name,
            fastest.ticks()
        );

        Ok(RaceReport { fastest, history })
    }
}

/// Copies `source` into `scratch` and times `sort` on it. The copy is not part of the timing.
fn timed_run<T: Clone>(source: &[T], scratch: &mut Vec<T>, sort: SortFn<T>) -> Duration {
    scratch.clear();
    scratch.extend_from_slice(source);

    let start = Instant::now();
    sort(black_box(scratch.as_mut_slice()));
    start.elapsed()
}

/// Races the generic contenders on `data` and prints the report to stdout.
pub fn display_fastest_sort<T: Ord + Clone>(data: &[T]) -> Result<RaceReport> {
    let report = SortRace::generic().run(data)?;
    print!("{report}");
    Ok(report)
}

/// Races the radix widths and the generic contenders on `data` and prints the report to stdout.
pub fn display_fastest_integer_sort<T: RadixKey + Ord>(data: &[T]) -> Result<RaceReport> {
    let report = SortRace::integer().run(data)?;
    print!("{report}");
    Ok(report)
}
