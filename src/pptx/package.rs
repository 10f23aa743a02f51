//! Presentation model and ZIP packaging.

use std::io::{Cursor, Write};

use chrono::{DateTime, Utc};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::format::ImageFormat;
use super::parts;
use super::slide::Slide;
use crate::error::LyricsError;

#[derive(Debug, Clone)]
struct BackgroundImage {
    data: Vec<u8>,
    format: ImageFormat,
}

/// A presentation under construction.
#[derive(Debug, Clone)]
pub struct Presentation {
    title: String,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    slides: Vec<Slide>,
    background_image: Option<BackgroundImage>,
    created: DateTime<Utc>,
}

impl Presentation {
    pub fn new(title: impl Into<String>, slide_width: i64, slide_height: i64) -> Self {
        Self {
            title: title.into(),
            slide_width,
            slide_height,
            slides: Vec::new(),
            background_image: None,
            created: Utc::now(),
        }
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// The single image shared by every slide with a picture background.
    pub fn set_background_image(&mut self, data: Vec<u8>, format: ImageFormat) {
        self.background_image = Some(BackgroundImage { data, format });
    }

    /// Serialize the whole package into an in-memory `.pptx`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LyricsError> {
        // Only embed the image when a slide actually references it.
        let media = self
            .background_image
            .as_ref()
            .filter(|_| self.slides.iter().any(Slide::uses_picture));
        let media_format = media.map(|m| m.format);
        let slide_count = self.slides.len();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut write_part = |path: &str, data: &[u8]| -> Result<(), LyricsError> {
            zip.start_file(path, options)?;
            zip.write_all(data)?;
            Ok(())
        };

        write_part(
            parts::CONTENT_TYPES_PATH,
            parts::content_types_xml(slide_count, media_format).as_bytes(),
        )?;
        write_part(parts::ROOT_RELS_PATH, parts::root_rels_xml().as_bytes())?;
        write_part(
            parts::CORE_PROPS_PATH,
            parts::core_props_xml(&self.title, self.created).as_bytes(),
        )?;
        write_part(
            parts::APP_PROPS_PATH,
            parts::app_props_xml(slide_count).as_bytes(),
        )?;
        write_part(
            parts::PRESENTATION_PATH,
            parts::presentation_xml(slide_count, self.slide_width, self.slide_height).as_bytes(),
        )?;
        write_part(
            parts::PRESENTATION_RELS_PATH,
            parts::presentation_rels_xml(slide_count).as_bytes(),
        )?;
        write_part(parts::SLIDE_MASTER_PATH, parts::SLIDE_MASTER_XML.as_bytes())?;
        write_part(
            parts::SLIDE_MASTER_RELS_PATH,
            parts::slide_master_rels_xml().as_bytes(),
        )?;
        write_part(parts::SLIDE_LAYOUT_PATH, parts::SLIDE_LAYOUT_XML.as_bytes())?;
        write_part(
            parts::SLIDE_LAYOUT_RELS_PATH,
            parts::slide_layout_rels_xml().as_bytes(),
        )?;
        write_part(parts::THEME_PATH, parts::THEME_XML.as_bytes())?;
        write_part(parts::PRES_PROPS_PATH, parts::PRES_PROPS_XML.as_bytes())?;
        write_part(parts::VIEW_PROPS_PATH, parts::VIEW_PROPS_XML.as_bytes())?;
        write_part(parts::TABLE_STYLES_PATH, parts::TABLE_STYLES_XML.as_bytes())?;

        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            let slide_media = media_format.filter(|_| slide.uses_picture());
            write_part(&parts::slide_path(number), slide.to_xml().as_bytes())?;
            write_part(
                &parts::slide_rels_path(number),
                parts::slide_rels_xml(slide_media).as_bytes(),
            )?;
        }

        if let Some(image) = media {
            write_part(&parts::media_path(image.format), &image.data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
