//! Result Persistence
//!
//! Writes the collected samples as a pretty-printed JSON array. The
//! file is created fresh each run; failure here is the session's only
//! fatal error class.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::sample::LatencySample;

/// Persist samples in collector receipt order.
pub fn persist(samples: &[LatencySample], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, samples)
        .with_context(|| format!("failed to write samples to {}", path.display()))?;
    let _ = writer.write_all(b"\n");
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<LatencySample> {
        vec![
            LatencySample {
                connection_id: 1,
                update_id: 100,
                latency_ns: 4_200_000,
            },
            LatencySample {
                connection_id: 2,
                update_id: 101,
                latency_ns: -350_000,
            },
        ]
    }

    #[test]
    fn test_roundtrip_preserves_order_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latencies.json");

        let samples = fixture();
        persist(&samples, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let restored: Vec<LatencySample> = serde_json::from_str(&contents).unwrap();
        assert_eq!(restored, samples);
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latencies.json");

        persist(&fixture(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with('['));
        assert!(contents.contains("\n  {"));
        assert!(contents.contains("\"connection_id\": 1"));
    }

    #[test]
    fn test_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latencies.json");

        persist(&fixture(), &path).unwrap();
        persist(&[], &path).unwrap();

        let restored: Vec<LatencySample> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_uncreatable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("latencies.json");
        assert!(persist(&fixture(), &path).is_err());
    }
}
