// This file is part of lovemarble-site-tools.
//
// lovemarble-site-tools is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// lovemarble-site-tools is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageError, ImageReader, Rgb, RgbImage, codecs::jpeg::JpegEncoder};
use log::{debug, error, info, warn};
use thiserror::Error;

pub const JPEG_QUALITY: u8 = 95;
/// How many screenshots each locale folder gets before the banner.
pub const SCREENSHOT_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum ImagesError {
    #[error("images: directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("images: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("convert: {0}")]
    Image(#[from] ImageError),
    #[error("convert: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Delete each PNG once its JPG is written.
    pub remove_original: bool,
    /// Only report what would be converted.
    pub dry_run: bool,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// The name the `index`th PNG of a folder (in file name order) is saved under.
#[must_use]
pub fn target_name(index: usize, source: &Path) -> PathBuf {
    let folder = source.parent().unwrap_or_else(|| Path::new(""));

    if index < SCREENSHOT_COUNT {
        folder.join(format!("screen_{:02}.jpg", index + 1))
    } else if index == SCREENSHOT_COUNT {
        folder.join("banner.jpg")
    } else {
        source.with_extension("jpg")
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("png"))
}

/// Lists the PNGs directly in `folder` sorted by file name, each paired with
/// its target.
///
/// # Errors
///
/// If `folder` can't be listed.
pub fn plan_folder(folder: &Path) -> io::Result<Vec<Conversion>> {
    let mut pngs = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_png(&path) {
            pngs.push(path);
        }
    }
    pngs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(pngs
        .into_iter()
        .enumerate()
        .map(|(index, source)| Conversion {
            target: target_name(index, &source),
            source,
        })
        .collect())
}

/// Drops any alpha channel by compositing the image over opaque white.
#[must_use]
pub fn flatten(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = u16::from(a);
        let over_white = |channel: u8| {
            let blended = (u16::from(channel) * a + 255 * (255 - a) + 127) / 255;
            u8::try_from(blended).unwrap_or(u8::MAX)
        };

        Rgb([over_white(r), over_white(g), over_white(b)])
    })
}

/// Decodes `conversion.source` and writes it as a JPG to `conversion.target`.
///
/// # Errors
///
/// If the source can't be decoded or the target can't be written.
pub fn convert(conversion: &Conversion) -> Result<(), ConvertError> {
    let image = ImageReader::open(&conversion.source)?
        .with_guessed_format()?
        .decode()?;
    let rgb = flatten(&image);

    // Encoded in memory so a failure never truncates an existing target.
    let mut jpeg = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY))?;
    fs::write(&conversion.target, jpeg)?;

    Ok(())
}

/// Converts one locale folder, returning how many images were converted (or
/// would be, on a dry run). Failures are logged and skipped.
///
/// # Errors
///
/// If `folder` can't be listed.
pub fn convert_folder(folder: &Path, options: Options) -> io::Result<usize> {
    let plan = plan_folder(folder)?;
    let mut converted = 0;

    for conversion in &plan {
        let Conversion { source, target } = conversion;

        if options.dry_run {
            info!("DRY: {} -> {}", source.display(), target.display());
            converted += 1;
            continue;
        }

        if let Err(err) = convert(conversion) {
            error!("Error converting {}: {err}", source.display());
            continue;
        }

        if options.remove_original
            && let Err(err) = fs::remove_file(source)
        {
            warn!("failed to remove original {}: {err}", source.display());
        }

        info!("Converted: {} -> {}", source.display(), target.display());
        converted += 1;
    }

    Ok(converted)
}

/// Converts every locale folder directly under `root`, in name order.
///
/// # Errors
///
/// If `root` doesn't exist or can't be listed.
pub fn normalize_images(root: &Path, options: Options) -> Result<usize, ImagesError> {
    if !root.exists() {
        return Err(ImagesError::MissingRoot(root.to_path_buf()));
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            folders.push(path);
        } else {
            debug!("ignoring {}", path.display());
        }
    }
    folders.sort();

    let mut total = 0;
    for folder in folders {
        info!("Processing folder: {}", folder.display());

        match convert_folder(&folder, options) {
            Ok(converted) => total += converted,
            Err(err) => error!("Error reading {}: {err}", folder.display()),
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, LumaA, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn positional_names() {
        let folder = Path::new("images").join("de");
        let targets: Vec<PathBuf> = ["a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.PNG"]
            .iter()
            .enumerate()
            .map(|(index, name)| target_name(index, &folder.join(name)))
            .collect();

        assert_eq!(
            targets,
            vec![
                folder.join("screen_01.jpg"),
                folder.join("screen_02.jpg"),
                folder.join("screen_03.jpg"),
                folder.join("screen_04.jpg"),
                folder.join("screen_05.jpg"),
                folder.join("banner.jpg"),
                folder.join("g.jpg"),
            ]
        );
    }

    #[test]
    fn png_extension_ignores_case() {
        assert!(is_png(Path::new("shot.png")));
        assert!(is_png(Path::new("shot.PNG")));
        assert!(is_png(Path::new("shot.Png")));
        assert!(!is_png(Path::new("shot.jpg")));
        assert!(!is_png(Path::new(".png")));
        assert!(!is_png(Path::new("png")));
    }

    #[test]
    fn transparent_becomes_white() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        rgba.put_pixel(1, 0, Rgba([10, 20, 30, 255]));

        let rgb = flatten(&DynamicImage::ImageRgba8(rgba));

        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn half_transparent_black_is_grey() {
        let rgba: RgbaImage = ImageBuffer::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let rgb = flatten(&DynamicImage::ImageRgba8(rgba));

        assert_eq!(rgb.get_pixel(0, 0), &Rgb([127, 127, 127]));
    }

    #[test]
    fn grey_alpha_is_flattened() {
        let luma = ImageBuffer::from_pixel(1, 1, LumaA([0u8, 0]));
        let rgb = flatten(&DynamicImage::ImageLumaA8(luma));

        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn opaque_is_copied() {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let flattened = flatten(&DynamicImage::ImageRgb8(rgb.clone()));

        assert_eq!(flattened, rgb);
    }
}
