//! Replayable visit/path event streams and their playback timeline.
//!
//! A [`Traversal`](crate::Traversal) is presented as an ordered stream of
//! [`Step`]s. [`Playback`] assigns each step an offset from the start of the
//! animation; it never reads a clock, so a renderer can consume the
//! [`Timeline`] at its own pace.

use std::time::Duration;

use pathway_core::Point;

/// One animation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "pos", rename_all = "lowercase"))]
pub enum Step {
    /// The search finalized this cell.
    Visit(Point),
    /// This cell lies on the reconstructed path.
    Path(Point),
}

impl Step {
    #[inline]
    pub fn pos(self) -> Point {
        match self {
            Step::Visit(p) | Step::Path(p) => p,
        }
    }
}

/// Finite stream of visits followed by path steps.
///
/// Obtained from [`Traversal::events`](crate::Traversal::events); calling
/// that again starts a fresh replay.
#[derive(Debug, Clone)]
pub struct Events<'a> {
    visits: std::slice::Iter<'a, Point>,
    path: std::vec::IntoIter<Point>,
}

impl<'a> Events<'a> {
    pub(crate) fn new(visits: &'a [Point], path: Vec<Point>) -> Self {
        Self {
            visits: visits.iter(),
            path: path.into_iter(),
        }
    }
}

impl Iterator for Events<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(&p) = self.visits.next() {
            return Some(Step::Visit(p));
        }
        self.path.next().map(Step::Path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.visits.len() + self.path.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Events<'_> {}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// Pacing of an animated replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    /// Gap between consecutive visits.
    pub visit_delay: Duration,
    /// Gap between consecutive path steps.
    pub path_delay: Duration,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            visit_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(50),
        }
    }
}

impl Playback {
    pub fn new(visit_delay: Duration, path_delay: Duration) -> Self {
        Self {
            visit_delay,
            path_delay,
        }
    }

    /// Schedule `steps`: visit `i` plays at `i × visit_delay`; the path
    /// starts in the slot after the last visit and path step `j` plays
    /// `j × path_delay` later.
    pub fn timeline<I: IntoIterator<Item = Step>>(&self, steps: I) -> Timeline<I::IntoIter> {
        Timeline {
            steps: steps.into_iter(),
            playback: *self,
            visits: 0,
            paths: 0,
        }
    }
}

/// A step together with its offset from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub at: Duration,
    pub step: Step,
}

/// Lazy schedule produced by [`Playback::timeline`].
#[derive(Debug, Clone)]
pub struct Timeline<I> {
    steps: I,
    playback: Playback,
    visits: u32,
    paths: u32,
}

impl<I: Iterator<Item = Step>> Iterator for Timeline<I> {
    type Item = Cue;

    fn next(&mut self) -> Option<Cue> {
        let step = self.steps.next()?;
        let at = match step {
            Step::Visit(_) => {
                let at = self.playback.visit_delay * self.visits;
                self.visits += 1;
                at
            }
            Step::Path(_) => {
                let at = self.playback.visit_delay * self.visits
                    + self.playback.path_delay * self.paths;
                self.paths += 1;
                at
            }
        };
        Some(Cue { at, step })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}
