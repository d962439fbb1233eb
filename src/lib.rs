//! Classic algorithmic patterns as a small library of pure functions:
//! linked-list reversal, sliding window, top-K selection over a bounded
//! heap, tree BFS/DFS families and two-pointer search.
//!
//! Every function owns or borrows its input for the duration of a single
//! call; there is no shared state between modules or invocations.

pub mod bounded_heap;
pub mod list;
pub mod sliding_window;
pub mod top_k;
pub mod tree;
pub mod tree_bfs;
pub mod tree_dfs;
pub mod two_pointers;
