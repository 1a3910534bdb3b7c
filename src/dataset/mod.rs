pub mod filter;
pub mod io;
pub mod processor;
pub mod record;
mod table;

pub use filter::LeadFilter;
pub use io::{default_export_name, export_csv, read_csv, read_csv_from, write_csv};
pub use processor::{process_leads, ScoredDataset, ScoredLead};
pub use record::{LeadRecord, RawValue};
pub use table::{Dataset, DatasetError};
