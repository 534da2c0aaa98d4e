use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use feedback_core::domain::ResolvedImage;
use feedback_core::ports::{ImageResolver, Result};
use feedback_core::utils::profile_link;
use feedback_core::CoreError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::cell::OnceCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Resolves profile photos stored as `<image_dir>/<id>.jpg`
pub struct FsImageResolver {
    image_dir: PathBuf,
    placeholder: OnceCell<String>,
}

impl FsImageResolver {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            placeholder: OnceCell::new(),
        }
    }

    pub fn photo_path(&self, id: &str) -> PathBuf {
        self.image_dir.join(format!("{}.jpg", id))
    }

    /// The encoded `default.jpg`, decoded on first use
    fn placeholder(&self) -> Result<String> {
        if let Some(uri) = self.placeholder.get() {
            return Ok(uri.clone());
        }
        let uri = encode_data_uri(&self.image_dir.join(DEFAULT_IMAGE))?;
        let _ = self.placeholder.set(uri.clone());
        Ok(uri)
    }
}

/// Loads any supported image and re-encodes it as a base64 JPEG data URI
pub fn encode_data_uri(path: &Path) -> Result<String> {
    let image_err = |e: &dyn std::fmt::Display| CoreError::Image(format!("{}: {}", path.display(), e));

    // Format is sniffed from content, a GIF saved as .jpg still loads
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| image_err(&e))?
        .decode()
        .map_err(|e| image_err(&e))?;

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| image_err(&e))?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(buffer.into_inner())
    ))
}

impl ImageResolver for FsImageResolver {
    fn resolve(&self, id: &str, name: &str) -> Result<ResolvedImage> {
        if id.is_empty() {
            info!("Using default profile image for {} as there is a missing id", name);
            return Ok(ResolvedImage {
                data_uri: self.placeholder()?,
                profile_link: String::new(),
            });
        }

        let link = profile_link(id);
        let photo = self.photo_path(id);
        if !photo.exists() {
            warn!(
                "Couldn't find picture for {}, download from {} and put into {}",
                name,
                link,
                photo.display()
            );
            return Ok(ResolvedImage {
                data_uri: self.placeholder()?,
                profile_link: link,
            });
        }

        Ok(ResolvedImage {
            data_uri: encode_data_uri(&photo)?,
            profile_link: link,
        })
    }
}
