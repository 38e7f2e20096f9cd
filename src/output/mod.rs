pub mod writer;

pub use writer::OutputFormat;
