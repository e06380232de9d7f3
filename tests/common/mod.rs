// Shared fixtures for review-sentiment integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding one run's input and output files.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("user_review.csv");
        let output = dir.path().join("processed_reviews.csv");
        let summary = dir.path().join("sentiment_summary.csv");
        Self {
            dir,
            input,
            output,
            summary,
        }
    }

    pub fn with_input(contents: &str) -> Self {
        let ws = Self::new();
        fs::write(&ws.input, contents).unwrap();
        ws
    }

    pub fn with_input_bytes(contents: &[u8]) -> Self {
        let ws = Self::new();
        fs::write(&ws.input, contents).unwrap();
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn request(&self) -> review_sentiment::RunRequest {
        review_sentiment::RunRequest::new(&self.input, &self.output, &self.summary)
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(&self.output).unwrap()
    }

    pub fn read_summary(&self) -> String {
        fs::read_to_string(&self.summary).unwrap()
    }

    /// Parsed `review,sentiment` rows of the processed file.
    pub fn output_rows(&self) -> Vec<(String, String)> {
        let mut reader = csv::Reader::from_path(&self.output).unwrap();
        reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect()
    }

    /// Parsed `sentiment,count` rows of the summary file.
    pub fn summary_rows(&self) -> Vec<(String, usize)> {
        let mut reader = csv::Reader::from_path(&self.summary).unwrap();
        reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect()
    }
}

/// A generated batch of `n` reviews cycling through clear sentiments.
pub fn generated_reviews(n: usize) -> String {
    const SAMPLES: &[&str] = &[
        "This product is amazing and I love it!",
        "Terrible quality, I hate it.",
        "The box arrived on Tuesday.",
        "Great value, works perfectly 10/10",
        "Awful. Broke after 2 days!!",
    ];
    let mut csv = String::from("id,review\n");
    for i in 0..n {
        csv.push_str(&format!("{},\"{}\"\n", i, SAMPLES[i % SAMPLES.len()]));
    }
    csv
}
