mod persistence;
mod store;

pub use persistence::{export_csv, load_analysis, load_record, parse_analysis, save_record};
pub use store::{Action, CompositionState, CompositionStore};
