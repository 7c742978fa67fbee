mod output;
mod records;
mod report;
mod run;
mod scoring;
mod stats;

pub use run::run;
