//! High-level, ergonomic library API: normalize elevation PNGs one by one or
//! per directory, and generate device-type YAML documents from a model CSV.
//! Prefer these entrypoints over the low-level `core` modules when embedding devtype.
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::device::record::{DeviceRecord, build_device_record};
use crate::core::device::row::DeviceRow;
use crate::core::params::{GenerateParams, MAX_ASPECT_RATIO, NormalizeParams};
use crate::core::processing::pipeline::normalize_rgba;
use crate::error::{Error, Result};
use crate::io::csv_rows::DeviceRowReader;
use crate::io::writers::png::{read_rgba, write_rgb_png};
use crate::io::writers::yaml::write_yaml_document;
use crate::types::OutputNaming;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Crop to the opaque region, enforce the aspect ratio and write a flattened PNG
pub fn normalize_image_to_path(
    input: &Path,
    output: &Path,
    params: &NormalizeParams,
) -> Result<()> {
    if !(params.ratio > 0.0 && params.ratio <= MAX_ASPECT_RATIO) {
        return Err(Error::InvalidArgument {
            arg: "ratio",
            value: params.ratio.to_string(),
        });
    }

    let img = read_rgba(input)?;
    let final_img = normalize_rgba(&img, params);
    write_rgb_png(output, &final_img)?;
    info!(
        "Saved final {}x{} image to: {:?}",
        final_img.width(),
        final_img.height(),
        output
    );
    Ok(())
}

/// Output location for `input` under the configured naming mode
pub fn normalized_output_path(input: &Path, params: &NormalizeParams) -> PathBuf {
    match params.naming {
        OutputNaming::Overwrite => input.to_path_buf(),
        OutputNaming::Prefixed => {
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            input.with_file_name(format!("{}{}", params.prefix, name))
        }
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with(".png"))
        .unwrap_or(false)
}

/// Regular files directly inside `dir` whose name ends in `.png` (any case), sorted by name.
/// Also returns how many other entries were passed over.
pub fn list_png_files(dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    let mut files = Vec::new();
    let mut skipped = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_png_extension(&path) {
            files.push(path);
        } else {
            skipped += 1;
        }
    }
    files.sort();
    Ok((files, skipped))
}

/// Normalize every PNG in `dir` (non-recursive). Without `continue_on_error`
/// the first failure aborts the batch; files already written stay written.
pub fn normalize_directory(dir: &Path, params: &NormalizeParams) -> Result<BatchReport> {
    let (files, skipped) = list_png_files(dir)?;
    let mut report = BatchReport {
        skipped,
        ..BatchReport::default()
    };

    info!("Normalizing {} PNG file(s) in {:?}", files.len(), dir);

    for input in files {
        let output = normalized_output_path(&input, params);
        match normalize_image_to_path(&input, &output, params) {
            Ok(()) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !params.continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", input, e);
            }
        }
    }

    Ok(report)
}

/// Build the record for one row and write it as `<MODEL>.<ext>` in the output directory
pub fn generate_record_file(row: &DeviceRow, params: &GenerateParams) -> Result<PathBuf> {
    let record: DeviceRecord = build_device_record(row, params);
    let path = write_yaml_document(
        &record,
        &params.output_dir,
        &row.model.to_uppercase(),
        &params.extension,
    )?;
    info!("Generated {:?}", path);
    Ok(path)
}

fn generate_rows<R: Read>(
    rows: DeviceRowReader<R>,
    params: &GenerateParams,
) -> Result<BatchReport> {
    fs::create_dir_all(&params.output_dir)?;

    let mut report = BatchReport::default();
    for row in rows {
        let result = row.and_then(|row| generate_record_file(&row, params));
        match result {
            Ok(_) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !params.continue_on_error {
                    return Err(e);
                }
                warn!("Skipping row: {}", e);
            }
        }
    }

    Ok(report)
}

/// Generate one document per row from any CSV source. Without `continue_on_error`
/// the first malformed row aborts the run; documents already written stay on disk.
pub fn generate_from_reader<R: Read>(input: R, params: &GenerateParams) -> Result<BatchReport> {
    generate_rows(DeviceRowReader::new(input)?, params)
}

/// Generate one document per row of the CSV at `csv_path`
pub fn generate_from_csv(csv_path: &Path, params: &GenerateParams) -> Result<BatchReport> {
    info!("Reading models from {:?}", csv_path);
    generate_rows(DeviceRowReader::from_path(csv_path)?, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_naming() {
        let mut params = NormalizeParams::default();
        let input = Path::new("/imgs/switch.front.PNG");
        assert_eq!(normalized_output_path(input, &params), input);

        params.naming = OutputNaming::Prefixed;
        assert_eq!(
            normalized_output_path(input, &params),
            PathBuf::from("/imgs/final_switch.front.PNG")
        );
    }

    #[test]
    fn png_extension_is_case_insensitive() {
        assert!(has_png_extension(Path::new("a.png")));
        assert!(has_png_extension(Path::new("a.PnG")));
        assert!(!has_png_extension(Path::new("a.png.bak")));
        assert!(!has_png_extension(Path::new("apng")));
    }

    #[test]
    fn rejects_non_positive_ratio() {
        let params = NormalizeParams {
            ratio: 0.0,
            ..NormalizeParams::default()
        };
        let err = normalize_image_to_path(Path::new("x.png"), Path::new("y.png"), &params)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "ratio", .. }));
    }

    #[test]
    fn rejects_oversized_or_non_finite_ratio() {
        for ratio in [1e12, MAX_ASPECT_RATIO + 0.5, f64::INFINITY, f64::NAN] {
            let params = NormalizeParams {
                ratio,
                ..NormalizeParams::default()
            };
            let err = normalize_image_to_path(Path::new("x.png"), Path::new("y.png"), &params)
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument { arg: "ratio", .. }),
                "{ratio}: {err}"
            );
        }
    }
}
