//! Fetch-if-absent for the g2pW converter model.

use {
    crate::error::{PhonemeError, Result},
    flate2::read::GzDecoder,
    std::{
        fs,
        io::Read,
        path::{Path, PathBuf},
    },
};

/// File whose presence marks the model directory as complete.
pub const MODEL_FILE: &str = "g2pw.onnx";

/// Archive containing the g2pW model and its resources.
pub const G2PW_URL: &str = "https://huggingface.co/datasets/rhasspy/piper-checkpoints/resolve/main/zh/zh_CN/_resources/g2pw.tar.gz?download=true";

/// Make sure the model is in `model_dir`, downloading and unpacking `url` if not.
///
/// Returns the path of the model file. No network access happens when the file
/// already exists.
pub fn ensure_model(model_dir: impl AsRef<Path>, url: &str) -> Result<PathBuf> {
    let model_dir = model_dir.as_ref();
    let model_path = model_dir.join(MODEL_FILE);

    if model_path.exists() {
        log::debug!("Found g2pW model at {}", model_path.display());
        return Ok(model_path);
    }

    log::info!(
        "Downloading g2pW model from '{}' to '{}'",
        url,
        model_dir.display()
    );
    fs::create_dir_all(model_dir)?;

    let response = reqwest::blocking::get(url)?.error_for_status()?;
    extract_archive(response, model_dir)?;

    if !model_path.exists() {
        return Err(PhonemeError::Archive(format!(
            "archive from {} did not contain {}",
            url, MODEL_FILE
        )));
    }
    Ok(model_path)
}

/// Unpack a gzip-compressed tar stream into `dir`.
pub fn extract_archive<R: Read>(reader: R, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    archive
        .unpack(dir)
        .map_err(|e| PhonemeError::Archive(format!("{}: {}", dir.display(), e)))
}
