use crate::config;
use crate::core::Error;
use crate::io::{self, input::UploadData, output};
use crate::recommend::{load_pattern_catalog, LogObserver, Recommender};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct RecommendConfig {
    pub input: PathBuf,
    pub patterns: Option<PathBuf>,
    pub format: output::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_recommend(config: RecommendConfig) -> Result<()> {
    let settings = config::get_config();

    let raw = io::read_file(&config.input)?;
    let upload = io::input::parse_upload(&raw)
        .with_context(|| format!("Invalid upload file: {}", config.input.display()))?;
    enforce_limits(&upload, &settings.limits)?;

    // CLI flag wins over the configured default catalog.
    let catalog_path = config
        .patterns
        .or_else(|| settings.patterns.file.clone());
    let patterns = match catalog_path {
        Some(path) => load_pattern_catalog(&path)?,
        None => Vec::new(),
    };

    log::info!(
        "recommending for {} fragments against {} pools ({} candidates, {} fallback patterns)",
        upload.noise.len(),
        upload.clusters.len(),
        upload.clusters.candidate_count(),
        patterns.len()
    );

    let recommender = Recommender::with_patterns(patterns);
    let results = recommender.recommend(&upload.noise, &upload.clusters, &LogObserver);

    let mut writer = output::create_writer(config.format, config.output)?;
    writer.write_results(&results)
}

// Pure function: Reject inputs exceeding the configured bounds
fn enforce_limits(
    upload: &UploadData,
    limits: &config::LimitsConfig,
) -> std::result::Result<(), Error> {
    if upload.noise.len() > limits.max_fragments {
        return Err(Error::validation(format!(
            "upload has {} fragments, limit is {}",
            upload.noise.len(),
            limits.max_fragments
        )));
    }
    let candidates = upload.clusters.candidate_count();
    if candidates > limits.max_candidates {
        return Err(Error::validation(format!(
            "cluster catalog has {} candidate classes, limit is {}",
            candidates, limits.max_candidates
        )));
    }
    Ok(())
}
