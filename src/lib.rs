pub mod heap;
pub mod render;
pub mod snapshot;

pub use heap::{HeapError, MaxHeap, SortDirection};
pub use snapshot::{Snapshot, SnapshotHook, Style};
