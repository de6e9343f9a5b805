//! Image optimization tool
//!
//! Converts one source image into the three formats the site's <picture>
//! elements serve: AVIF (best compression), WebP (fallback) and JPEG
//! (baseline). One decode, three sequential encodes, sizes reported at
//! the end. Not a pipeline, just a one-off asset-preparation pass.
//!
//! Usage:
//!     optimize-images <input_image> <output_prefix>
//!
//! Example:
//!     optimize-images source_images/hero.jpg static/images/hero

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use rgb::FromSlice;

const AVIF_QUALITY: f32 = 75.0;
// ravif speed: 1 = slowest/best, 10 = fastest/worst
const AVIF_SPEED: u8 = 4;
const WEBP_QUALITY: f32 = 80.0;
const JPEG_QUALITY: u8 = 85;

#[derive(Parser)]
#[command(
    name = "optimize-images",
    about = "Convert a source image into AVIF, WebP and JPEG derivatives"
)]
struct Args {
    /// Path to the source image
    input: PathBuf,
    /// Output path prefix; the format extension is appended per file
    output_prefix: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args.input, &args.output_prefix)
}

fn run(input: &Path, output_prefix: &Path) -> Result<()> {
    if !input.exists() {
        bail!("input file '{}' not found", input.display());
    }
    optimize(input, output_prefix)
}

/// Decode the source once, then write the three derivatives
fn optimize(input: &Path, prefix: &Path) -> Result<()> {
    println!("Loading image: {}", input.display());
    let img = image::open(input)
        .with_context(|| format!("failed to decode '{}'", input.display()))?;

    if let Some(dir) = prefix.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create '{}'", dir.display()))?;
            println!("Created directory: {}", dir.display());
        }
    }

    // AVIF (best compression)
    let avif_path = output_path(prefix, "avif");
    println!("Creating AVIF: {}", avif_path.display());
    fs::write(&avif_path, encode_avif(&img)?)
        .with_context(|| format!("failed to write '{}'", avif_path.display()))?;
    let avif_kb = file_size_kb(&avif_path)?;
    println!("  AVIF saved: {avif_kb:.1}KB");

    // WebP (fallback)
    let webp_path = output_path(prefix, "webp");
    println!("Creating WebP: {}", webp_path.display());
    fs::write(&webp_path, encode_webp(&img)?)
        .with_context(|| format!("failed to write '{}'", webp_path.display()))?;
    let webp_kb = file_size_kb(&webp_path)?;
    println!("  WebP saved: {webp_kb:.1}KB");

    // JPEG (baseline)
    let jpg_path = output_path(prefix, "jpg");
    println!("Creating JPG: {}", jpg_path.display());
    fs::write(&jpg_path, encode_jpeg(&img)?)
        .with_context(|| format!("failed to write '{}'", jpg_path.display()))?;
    let jpg_kb = file_size_kb(&jpg_path)?;
    println!("  JPG saved: {jpg_kb:.1}KB");

    println!();
    println!("Optimization complete!");
    println!("Total size reduction: {jpg_kb:.1}KB (JPG) -> {avif_kb:.1}KB (AVIF)");
    println!("Savings: {:.1}%", (jpg_kb - avif_kb) / jpg_kb * 100.0);
    Ok(())
}

fn encode_avif(img: &DynamicImage) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba.as_raw().as_rgba();
    let encoded = ravif::Encoder::new()
        .with_quality(AVIF_QUALITY)
        .with_alpha_quality(AVIF_QUALITY)
        .with_speed(AVIF_SPEED)
        .encode_rgba(ravif::Img::new(
            pixels,
            width as usize,
            height as usize,
        ))
        .map_err(|e| anyhow!("AVIF encoding failed: {e}"))?;
    Ok(encoded.avif_file)
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>> {
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let encoder =
        webp::Encoder::from_image(&rgba).map_err(|e| anyhow!("WebP encoder rejected image: {e}"))?;
    Ok(encoder.encode(WEBP_QUALITY).to_vec())
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>> {
    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .context("JPEG encoding failed")?;
    Ok(out)
}

/// Append `.ext` to the prefix, matching `<prefix>.avif` style names even
/// when the prefix itself contains dots
fn output_path(prefix: &Path, ext: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!(".{ext}"));
    PathBuf::from(name)
}

fn file_size_kb(path: &Path) -> Result<f64> {
    let len = fs::metadata(path)
        .with_context(|| format!("failed to stat '{}'", path.display()))?
        .len();
    let kb = len as f64 / 1024.0;
    Ok(kb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn sample_image(dir: &Path) -> PathBuf {
        // Gradient with some noise-ish structure, enough for every encoder
        let img = ImageBuffer::from_fn(96, 64, |x, y| {
            Rgb([
                (x * 2 % 256) as u8,
                (y * 3 % 256) as u8,
                ((x + y) * 5 % 256) as u8,
            ])
        });
        let path = dir.join("source.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_optimize_produces_three_nonempty_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let input = sample_image(tmp.path());
        let prefix = tmp.path().join("out").join("hero");

        run(&input, &prefix).unwrap();

        for ext in ["avif", "webp", "jpg"] {
            let path = output_path(&prefix, ext);
            assert!(path.exists(), "{ext} output missing");
            assert!(fs::metadata(&path).unwrap().len() > 0, "{ext} output empty");
        }
    }

    #[test]
    fn test_missing_input_fails_before_any_output() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = tmp.path().join("out").join("hero");

        let err = run(&tmp.path().join("absent.jpg"), &prefix).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!prefix.parent().unwrap().exists());
    }

    #[test]
    fn test_output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("out/hero"), "avif"),
            PathBuf::from("out/hero.avif")
        );
        assert_eq!(
            output_path(Path::new("out/hero.v2"), "jpg"),
            PathBuf::from("out/hero.v2.jpg")
        );
    }
}
