//! Photo capture for the camera screen.
//!
//! A [`FrameSource`] hands out NV21 frames. Capturing converts one frame to
//! RGB, stores it as a JPEG in a temporary file and runs food detection on it.
//! The file lives as long as the [`CapturedPhoto`] that owns it.

use std::{
    cell::OnceCell,
    fmt,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use calorie_core::{Detection, FoodDetector, FrameError, Nv21Frame, PlaceholderDetector};
use eframe::egui::TextureHandle;
use image::RgbImage;
use tempfile::NamedTempFile;

pub(crate) use self::test_pattern::TestPatternSource;

mod test_pattern;

const JPEG_QUALITY: u8 = 100;
const PHOTO_PREFIX: &str = "temp_photo_";
const PHOTO_SUFFIX: &str = ".jpg";

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CaptureError {
    #[display("{_0}")]
    Frame(#[error(source)] FrameError),
    #[display("failed to store photo: {_0}")]
    Io(#[error(source)] io::Error),
}

/// Something that produces camera frames.
pub(crate) trait FrameSource {
    fn capture_frame(&mut self) -> Result<Nv21Frame, FrameError>;
}

/// The frame source, detector and photo directory used for captures.
pub(crate) struct CaptureRig {
    source: Box<dyn FrameSource>,
    detector: Box<dyn FoodDetector>,
    photo_dir: PathBuf,
}

impl fmt::Debug for CaptureRig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureRig")
            .field("photo_dir", &self.photo_dir)
            .finish_non_exhaustive()
    }
}

impl Default for CaptureRig {
    fn default() -> Self {
        Self::new(
            Box::new(TestPatternSource::default()),
            Box::new(PlaceholderDetector::new()),
            std::env::temp_dir(),
        )
    }
}

impl CaptureRig {
    #[must_use]
    pub(crate) fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn FoodDetector>,
        photo_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            detector,
            photo_dir,
        }
    }

    pub(crate) fn capture(&mut self) -> Result<CapturedPhoto, CaptureError> {
        let frame = self.source.capture_frame()?;
        let image = frame.to_rgb_image();
        let file = write_jpeg(&image, &self.photo_dir)?;
        let detection = self.detector.detect(&image);
        log::info!(
            "captured {}x{} photo to {}: {}",
            image.width(),
            image.height(),
            file.path().display(),
            detection.food.name
        );
        Ok(CapturedPhoto {
            file,
            image,
            detection,
            texture: OnceCell::new(),
        })
    }
}

fn write_jpeg(image: &RgbImage, dir: &Path) -> Result<NamedTempFile, CaptureError> {
    let bytes = calorie_core::encode_jpeg(image, JPEG_QUALITY)?;
    let mut file = tempfile::Builder::new()
        .prefix(PHOTO_PREFIX)
        .suffix(PHOTO_SUFFIX)
        .tempfile_in(dir)?;
    file.write_all(&bytes)?;
    file.flush()?;
    Ok(file)
}

/// A photo on disk with its decoded pixels and detection result.
///
/// Dropping it deletes the file.
pub(crate) struct CapturedPhoto {
    file: NamedTempFile,
    image: RgbImage,
    detection: Detection,
    texture: OnceCell<TextureHandle>,
}

impl fmt::Debug for CapturedPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPhoto")
            .field("path", &self.file.path())
            .field("detection", &self.detection)
            .finish_non_exhaustive()
    }
}

impl CapturedPhoto {
    #[must_use]
    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn image(&self) -> &RgbImage {
        &self.image
    }

    #[must_use]
    pub(crate) fn detection(&self) -> Detection {
        self.detection
    }

    /// Uploads the photo on first use and returns the cached texture afterwards.
    pub(crate) fn texture(&self, load: impl FnOnce(&RgbImage) -> TextureHandle) -> &TextureHandle {
        self.texture.get_or_init(|| load(&self.image))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum CameraPermission {
    Pending,
    Granted,
}

#[derive(Debug)]
pub(crate) struct CameraState {
    pub(crate) permission: CameraPermission,
    pub(crate) photo: Option<CapturedPhoto>,
}

impl CameraState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            permission: CameraPermission::Pending,
            photo: None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    pub(crate) struct FailingSource;

    impl FrameSource for FailingSource {
        fn capture_frame(&mut self) -> Result<Nv21Frame, FrameError> {
            Err(FrameError::InvalidDimensions {
                width: 0,
                height: 0,
            })
        }
    }

    pub(crate) fn seeded_rig(dir: &Path) -> CaptureRig {
        CaptureRig::new(
            Box::new(TestPatternSource::new(16, 8)),
            Box::new(PlaceholderDetector::with_rng(Pcg64::seed_from_u64(1))),
            dir.to_path_buf(),
        )
    }

    #[test]
    fn capture_writes_jpeg_to_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut rig = seeded_rig(dir.path());

        let photo = rig.capture().unwrap();
        let name = photo.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("temp_photo_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(photo.path().parent(), Some(dir.path()));

        let bytes = std::fs::read(photo.path()).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!((photo.image().width(), photo.image().height()), (16, 8));
    }

    #[test]
    fn saved_photo_is_full_quality() {
        let dir = tempfile::tempdir().unwrap();
        let mut rig = seeded_rig(dir.path());

        let photo = rig.capture().unwrap();
        let saved = std::fs::read(photo.path()).unwrap();
        let full = calorie_core::encode_jpeg(photo.image(), 100).unwrap();
        let reduced = calorie_core::encode_jpeg(photo.image(), 90).unwrap();
        assert_eq!(saved, full);
        assert_ne!(saved, reduced);
    }

    #[test]
    fn dropping_photo_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut rig = seeded_rig(dir.path());

        let photo = rig.capture().unwrap();
        let path = photo.path().to_path_buf();
        assert!(path.exists());
        drop(photo);
        assert!(!path.exists());
    }

    #[test]
    fn frame_error_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let mut rig = CaptureRig::new(
            Box::new(FailingSource),
            Box::new(PlaceholderDetector::new()),
            dir.path().to_path_buf(),
        );

        let err = rig.capture().unwrap_err();
        assert!(matches!(err, CaptureError::Frame(_)));
        assert_eq!(err.to_string(), "invalid frame dimensions: 0x0");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_photo_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut rig = seeded_rig(&dir.path().join("missing"));

        let err = rig.capture().unwrap_err();
        assert!(matches!(err, CaptureError::Io(_)));
    }
}
