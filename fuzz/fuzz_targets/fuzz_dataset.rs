#![no_main]

use libfuzzer_sys::fuzz_target;
use review_scorer::config::{AppConfig, DatasetConfig};
use review_scorer::parsers::parse_dataset_reader;
use review_scorer::run_pipeline;

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary bytes as a review file - should never panic
    if let Ok(dataset) = parse_dataset_reader(data, &DatasetConfig::default()) {
        let _ = run_pipeline(&dataset, &AppConfig::default());
    }
});
