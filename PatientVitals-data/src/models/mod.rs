pub mod document;

pub use document::{collections, Document, Fields};
