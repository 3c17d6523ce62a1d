//! The dual-format render result.

use std::borrow::Cow;
use std::fs;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::process::Command;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use flowviz_error::{Error, ErrorKind, Result};

use crate::backend::{BackendFormat, render_via_dot};

/// Encoder options honored by raster saves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// JPEG quality from 1 to 100. Ignored by other formats.
    pub jpeg_quality: Option<u8>,
}

impl SaveOptions {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Writer capable of receiving a raster save. The raster encoders seek,
/// so plain `Write` is not enough.
pub trait WriteSeek: Write + Seek {}
impl<T: Write + Seek> WriteSeek for T {}

/// Adapter so a `dyn WriteSeek` satisfies the encoder's generic bounds.
struct DynWriter<'a>(&'a mut dyn WriteSeek);

impl Write for DynWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

impl Seek for DynWriter<'_> {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        self.0.seek(pos)
    }
}

/// Save destination accepted by [`FlowImage::save_to`].
pub enum SaveTarget<'a> {
    /// An open writable stream. Always takes the raster path; vector markup
    /// is never written to a stream.
    Stream(&'a mut dyn WriteSeek),
    /// A filesystem path, dispatched on its extension.
    Path(&'a Path),
}

/// Destination kind, resolved once per save.
enum ResolvedTarget<'a> {
    Stream(&'a mut dyn WriteSeek),
    VectorPath(&'a Path),
    RasterPath(&'a Path),
}

impl<'a> ResolvedTarget<'a> {
    fn resolve(target: SaveTarget<'a>) -> Self {
        match target {
            SaveTarget::Stream(writer) => Self::Stream(writer),
            SaveTarget::Path(path) => {
                let is_vector = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
                if is_vector {
                    Self::VectorPath(path)
                } else {
                    Self::RasterPath(path)
                }
            }
        }
    }
}

/// Dual-format result of rendering one drawing.
///
/// Owns a decoded raster bitmap and the raw vector markup, both captured
/// from one rendering step at construction and never recomputed. Save and
/// display operations are read-only with respect to both representations.
pub struct FlowImage {
    raster: DynamicImage,
    svg: Vec<u8>,
}

impl FlowImage {
    /// Render DOT source through the layout backend and capture both output
    /// formats. Fails if the backend's raster bytes do not decode.
    pub fn render(dot_source: &str) -> Result<Self> {
        let png = render_via_dot(dot_source, BackendFormat::Png)?;
        let svg = render_via_dot(dot_source, BackendFormat::Svg)?;
        Self::from_parts(&png, svg)
    }

    /// Build the result from backend output already in hand.
    pub fn from_parts(raster_bytes: &[u8], svg: Vec<u8>) -> Result<Self> {
        let raster = image::load_from_memory(raster_bytes).map_err(|err| {
            Error::decode_failed("backend raster output did not decode")
                .with_operation("flow_image::from_parts")
                .set_source(err)
        })?;
        Ok(Self { raster, svg })
    }

    /// The decoded bitmap view.
    pub fn raster(&self) -> &DynamicImage {
        &self.raster
    }

    /// The raw vector markup bytes, exactly as the backend produced them.
    pub fn vector_markup(&self) -> &[u8] {
        &self.svg
    }

    /// Vector markup as text, for embedding in rich-output consumers.
    pub fn svg_markup(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.svg)
    }

    /// Save under `path`, inferring the output format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(
            SaveTarget::Path(path.as_ref()),
            None,
            &SaveOptions::default(),
        )
    }

    /// Save under `path` with an explicit raster format or encoder options.
    pub fn save_with(
        &self,
        path: impl AsRef<Path>,
        format: Option<ImageFormat>,
        options: &SaveOptions,
    ) -> Result<()> {
        self.save_to(SaveTarget::Path(path.as_ref()), format, options)
    }

    /// Save the bitmap to an open writable stream in the given raster
    /// format. Vector markup is never written to a stream.
    pub fn save_to_writer(
        &self,
        writer: &mut dyn WriteSeek,
        format: ImageFormat,
        options: &SaveOptions,
    ) -> Result<()> {
        self.save_to(SaveTarget::Stream(writer), Some(format), options)
    }

    /// Save to the given destination.
    ///
    /// Paths ending in `.svg` receive the stored vector markup verbatim in
    /// one write; `format` and `options` do not apply there and are ignored
    /// with a warning. Every other destination takes the raster path, with
    /// the format inferred from the extension when not given. Streams need
    /// an explicit format.
    pub fn save_to(
        &self,
        target: SaveTarget<'_>,
        format: Option<ImageFormat>,
        options: &SaveOptions,
    ) -> Result<()> {
        match ResolvedTarget::resolve(target) {
            ResolvedTarget::Stream(writer) => {
                let format = format.ok_or_else(|| {
                    Error::invalid_argument("stream saves need an explicit raster format")
                        .with_operation("flow_image::save_to")
                })?;
                self.write_raster(writer, format, options)
            }
            ResolvedTarget::VectorPath(path) => {
                if format.is_some() || !options.is_default() {
                    tracing::warn!(
                        path = %path.display(),
                        "format and encoder options are not supported for SVG saves; ignored"
                    );
                }
                fs::write(path, &self.svg).map_err(|err| io_error(err, path))
            }
            ResolvedTarget::RasterPath(path) => {
                let format = match format {
                    Some(format) => format,
                    None => ImageFormat::from_path(path).map_err(|err| {
                        Error::invalid_argument(
                            "cannot infer a raster format from the path extension",
                        )
                        .with_operation("flow_image::save_to")
                        .with_context("path", path.display().to_string())
                        .set_source(err)
                    })?,
                };
                self.save_raster_path(path, format, options)
            }
        }
    }

    /// Open the rendered bitmap in the platform image viewer.
    ///
    /// The bitmap is written to a persisted temporary file; the viewer may
    /// read it after this call returns.
    pub fn show(&self) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("flowviz-")
            .suffix(".png")
            .tempfile()
            .map_err(|err| Error::from(err).with_operation("flow_image::show"))?;

        self.raster
            .write_to(file.as_file_mut(), ImageFormat::Png)
            .map_err(|err| {
                Error::new(ErrorKind::IoFailed, "could not write preview image")
                    .with_operation("flow_image::show")
                    .set_source(err)
            })?;

        let (_, path) = file.keep().map_err(|err| {
            Error::new(ErrorKind::IoFailed, "could not persist preview image")
                .with_operation("flow_image::show")
                .set_source(err.error)
        })?;

        open_viewer(&path)
    }

    fn save_raster_path(
        &self,
        path: &Path,
        format: ImageFormat,
        options: &SaveOptions,
    ) -> Result<()> {
        match (format, options.jpeg_quality) {
            (ImageFormat::Jpeg, Some(quality)) => {
                let file = fs::File::create(path).map_err(|err| io_error(err, path))?;
                let mut writer = BufWriter::new(file);
                let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
                self.raster
                    .write_with_encoder(encoder)
                    .map_err(|err| encode_error(err, path))?;
                writer.flush().map_err(|err| io_error(err, path))
            }
            // The encoder owns the file handling here.
            _ => self
                .raster
                .save_with_format(path, format)
                .map_err(|err| encode_error(err, path)),
        }
    }

    fn write_raster(
        &self,
        writer: &mut dyn WriteSeek,
        format: ImageFormat,
        options: &SaveOptions,
    ) -> Result<()> {
        let mut writer = DynWriter(writer);
        let result = match (format, options.jpeg_quality) {
            (ImageFormat::Jpeg, Some(quality)) => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
                self.raster.write_with_encoder(encoder)
            }
            _ => self.raster.write_to(&mut writer, format),
        };
        result.map_err(|err| {
            Error::new(ErrorKind::IoFailed, "raster stream write failed")
                .with_operation("flow_image::save_to")
                .set_source(err)
        })
    }
}

fn io_error(err: std::io::Error, path: &Path) -> Error {
    Error::from(err)
        .with_operation("flow_image::save_to")
        .with_context("path", path.display().to_string())
}

fn encode_error(err: image::ImageError, path: &Path) -> Error {
    Error::new(ErrorKind::IoFailed, "raster save failed")
        .with_operation("flow_image::save_to")
        .with_context("path", path.display().to_string())
        .set_source(err)
}

#[cfg(target_os = "macos")]
const VIEWER: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const VIEWER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const VIEWER: &[&str] = &["xdg-open"];

fn open_viewer(path: &Path) -> Result<()> {
    Command::new(VIEWER[0])
        .args(&VIEWER[1..])
        .arg(path)
        .spawn()
        .map_err(|err| {
            Error::from(err)
                .with_operation("flow_image::show")
                .with_context("viewer", VIEWER[0])
        })?;
    Ok(())
}
