//! File loaders for the document corpus and the patient health record

mod ehr;
mod loader;

pub use ehr::EhrRecord;
pub use loader::load_corpus;
