//! Grid traversals for the pathway visualizer.
//!
//! Three classic searches run over a [`Grid`](pathway_core::Grid) and
//! report the order in which they finalize cells:
//!
//! - **Breadth-first search** ([`Pathfinder::bfs`])
//! - **Depth-first search** ([`Pathfinder::dfs`])
//! - **Dijkstra** weighted shortest path ([`Pathfinder::dijkstra`])
//!
//! A [`Pathfinder`] owns the per-cell search state (visited flag, distance,
//! predecessor) and resets it at the start of every run, so the grid itself
//! is only ever read. Each run returns an owned [`Traversal`] from which the
//! path is reconstructed and an [`events`](Traversal::events) stream can be
//! replayed through a [`Playback`] timeline.
//!
//! | Algorithm | Walls | Cost model | Path |
//! |---|---|---|---|
//! | BFS | skipped when enqueued | 1 per step | fewest steps |
//! | DFS | discarded when popped | 1 per step | any |
//! | Dijkstra | discarded when selected | weight of entered cell | cheapest |

mod algorithm;
mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod events;
mod neighbors;
mod path;
mod pathfinder;
mod traversal;

pub use algorithm::Algorithm;
pub use error::SearchError;
pub use events::{Cue, Events, Playback, Step, Timeline};
pub use neighbors::Neighbors;
pub use path::path_cost;
pub use pathfinder::{Pathfinder, UNREACHABLE};
pub use traversal::Traversal;
