pub mod formatter;

pub use formatter::{
    format_lead_detail, format_lead_table, format_metrics, format_tsv, should_use_colors,
};
