pub mod jsonl;

pub use jsonl::{flush_towns_to_jsonl, read_towns_from_jsonl};
