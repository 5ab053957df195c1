//! Deck writer: builds a new PPTX package from pictures and text boxes.

use crate::package::{rel_types, PRESENTATION_PART};
use crate::templates::{
    app_props_xml, blank_layout_xml, core_props_xml, slide_master_xml, theme_xml,
    APP_PROPS_PART, CORE_PROPS_PART, PML_NAMESPACES, SHAPE_TREE_HEADER, SLIDE_LAYOUT_PART,
    SLIDE_MASTER_PART, THEME_PART, XML_DECLARATION,
};
use icondeck_core::{Error, Rect, Result, EMU_PER_INCH};
use quick_xml::escape::escape;
use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// First id handed out to slides in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn as_ooxml(self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
            TextAlign::Right => "r",
        }
    }
}

/// Character and paragraph formatting for a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: Option<f64>,
    pub bold: bool,
    /// RGB hex colour, e.g. `000000`.
    pub color: Option<String>,
    pub align: TextAlign,
    pub word_wrap: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: None,
            bold: false,
            color: None,
            align: TextAlign::Left,
            word_wrap: true,
        }
    }
}

#[derive(Debug, Clone)]
enum DeckShape {
    Picture {
        id: u32,
        /// Index into the slide's media list.
        media: usize,
        rect: Rect,
        description: String,
    },
    TextBox {
        id: u32,
        rect: Rect,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone)]
struct Media {
    data: Vec<u8>,
    extension: String,
}

/// A slide under construction.
#[derive(Debug, Clone, Default)]
pub struct DeckSlide {
    /// Solid background fill as RGB hex, or the master background when unset.
    background: Option<String>,
    shapes: Vec<DeckShape>,
    media: Vec<Media>,
}

impl DeckSlide {
    /// Fill the slide background with a solid RGB hex colour.
    pub fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn next_shape_id(&self) -> u32 {
        // Id 1 belongs to the shape tree itself.
        self.shapes.len() as u32 + 2
    }

    /// Embed an image and place it. Returns the new shape id.
    pub fn add_picture(
        &mut self,
        data: Vec<u8>,
        extension: &str,
        rect: Rect,
        description: &str,
    ) -> Result<u32> {
        let extension = extension.to_ascii_lowercase();
        if image_content_type(&extension).is_none() {
            return Err(Error::UnsupportedFormat(format!(
                "Cannot embed '.{}' images",
                extension
            )));
        }

        let id = self.next_shape_id();
        self.media.push(Media { data, extension });
        self.shapes.push(DeckShape::Picture {
            id,
            media: self.media.len() - 1,
            rect,
            description: description.to_string(),
        });
        Ok(id)
    }

    /// Add a text box. Lines of `text` become separate paragraphs. Returns
    /// the new shape id.
    pub fn add_text_box(&mut self, rect: Rect, text: &str, style: &TextStyle) -> u32 {
        let id = self.next_shape_id();
        self.shapes.push(DeckShape::TextBox {
            id,
            rect,
            text: text.to_string(),
            style: style.clone(),
        });
        id
    }

    /// Generate slide XML. `first_image_rel` is the relationship number of
    /// this slide's first media part.
    fn to_xml(&self, first_image_rel: usize) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 768);
        xml.push_str(XML_DECLARATION);
        write!(xml, "<p:sld {}>", PML_NAMESPACES).map_err(fmt_err)?;
        xml.push_str("<p:cSld>");

        if let Some(color) = &self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                escape(color.as_str())
            )
            .map_err(fmt_err)?;
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str(SHAPE_TREE_HEADER);
        for shape in &self.shapes {
            match shape {
                DeckShape::Picture {
                    id,
                    media,
                    rect,
                    description,
                } => write_picture(&mut xml, *id, first_image_rel + media, rect, description)?,
                DeckShape::TextBox {
                    id,
                    rect,
                    text,
                    style,
                } => write_text_box(&mut xml, *id, rect, text, style)?,
            }
        }
        xml.push_str("</p:spTree>");

        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }
}

fn write_xfrm(xml: &mut String, rect: &Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.left, rect.top).map_err(fmt_err)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height).map_err(fmt_err)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_picture(
    xml: &mut String,
    id: u32,
    rel_number: usize,
    rect: &Rect,
    description: &str,
) -> Result<()> {
    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
        id,
        id - 1,
        escape(description)
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");

    xml.push_str("<p:blipFill>");
    write!(xml, r#"<a:blip r:embed="rId{}"/>"#, rel_number).map_err(fmt_err)?;
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, rect)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}

fn write_text_box(
    xml: &mut String,
    id: u32,
    rect: &Rect,
    text: &str,
    style: &TextStyle,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="TextBox {}"/>"#, id, id - 1).map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, rect)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    let wrap = if style.word_wrap { "square" } else { "none" };
    write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#, wrap)
        .map_err(fmt_err)?;
    xml.push_str("<a:lstStyle/>");

    let mut run_props = String::from(r#"<a:rPr lang="en-US""#);
    if let Some(size) = style.size {
        write!(run_props, r#" sz="{}""#, (size * 100.0).round() as u32).map_err(fmt_err)?;
    }
    if style.bold {
        run_props.push_str(r#" b="1""#);
    }
    run_props.push_str(r#" dirty="0">"#);
    if let Some(color) = &style.color {
        write!(
            run_props,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            escape(color.as_str())
        )
        .map_err(fmt_err)?;
    }
    run_props.push_str("</a:rPr>");

    for line in text.split('\n') {
        xml.push_str("<a:p>");
        write!(xml, r#"<a:pPr algn="{}"/>"#, style.align.as_ooxml()).map_err(fmt_err)?;
        if line.is_empty() {
            xml.push_str("<a:endParaRPr lang=\"en-US\" dirty=\"0\"/>");
        } else {
            xml.push_str("<a:r>");
            xml.push_str(&run_props);
            write!(xml, "<a:t>{}</a:t>", escape(line)).map_err(fmt_err)?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}

fn put_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    bytes: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(name, options).map_err(zip_err)?;
    zip.write_all(bytes)?;
    Ok(())
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::WriteError(e.to_string())
}

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::ZipError(e.to_string())
}

/// MIME type for an embeddable image extension.
pub fn image_content_type(extension: &str) -> Option<&'static str> {
    match extension {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// A presentation under construction.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    slides: Vec<DeckSlide>,
    /// Slide width in EMU.
    slide_width: i64,
    /// Slide height in EMU.
    slide_height: i64,
}

impl Deck {
    /// Create an empty deck with 10" x 7.5" slides.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            slides: Vec::new(),
            slide_width: EMU_PER_INCH * 10,
            slide_height: EMU_PER_INCH * 15 / 2,
        }
    }

    /// Create an empty deck with the given slide size in EMU.
    pub fn with_slide_size(width: i64, height: i64) -> Self {
        Self {
            slide_width: width,
            slide_height: height,
            ..Self::new()
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Append a blank slide.
    pub fn add_slide(&mut self) -> &mut DeckSlide {
        self.slides.push(DeckSlide::default());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut DeckSlide> {
        self.slides.get_mut(index)
    }

    /// Write the deck to a file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the deck as a PPTX package.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let deflated = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let stored = FileOptions::default().compression_method(CompressionMethod::Stored);

        put_part(&mut zip, "[Content_Types].xml", self.content_types_xml()?.as_bytes(), deflated)?;
        put_part(&mut zip, "_rels/.rels", package_rels_xml().as_bytes(), deflated)?;
        put_part(&mut zip, CORE_PROPS_PART, core_props_xml(&self.title).as_bytes(), deflated)?;
        put_part(&mut zip, APP_PROPS_PART, app_props_xml(self.slides.len()).as_bytes(), deflated)?;
        put_part(&mut zip, PRESENTATION_PART, self.presentation_xml()?.as_bytes(), deflated)?;
        put_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            self.presentation_rels_xml()?.as_bytes(),
            deflated,
        )?;
        put_part(&mut zip, SLIDE_MASTER_PART, slide_master_xml().as_bytes(), deflated)?;
        put_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            relationships_xml(&[
                (1, rel_types::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                (2, rel_types::THEME, "../theme/theme1.xml"),
            ])?
            .as_bytes(),
            deflated,
        )?;
        put_part(&mut zip, SLIDE_LAYOUT_PART, blank_layout_xml().as_bytes(), deflated)?;
        put_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            relationships_xml(&[(1, rel_types::SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])?
                .as_bytes(),
            deflated,
        )?;
        put_part(&mut zip, THEME_PART, theme_xml().as_bytes(), deflated)?;

        let mut media_number = 1;
        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            // rId1 is the layout; media follow from rId2.
            put_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                slide.to_xml(2)?.as_bytes(),
                deflated,
            )?;

            let mut targets = vec![(
                1,
                rel_types::SLIDE_LAYOUT.to_string(),
                "../slideLayouts/slideLayout1.xml".to_string(),
            )];
            for (media_index, media) in slide.media.iter().enumerate() {
                let file_name = format!("image{}.{}", media_number, media.extension);
                put_part(&mut zip, &format!("ppt/media/{}", file_name), &media.data, stored)?;
                targets.push((
                    media_index + 2,
                    rel_types::IMAGE.to_string(),
                    format!("../media/{}", file_name),
                ));
                media_number += 1;
            }

            let targets: Vec<(usize, &str, &str)> = targets
                .iter()
                .map(|(id, ty, target)| (*id, ty.as_str(), target.as_str()))
                .collect();
            put_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                relationships_xml(&targets)?.as_bytes(),
                deflated,
            )?;
        }

        zip.finish().map_err(zip_err)?;
        log::debug!(
            "Wrote deck with {} slides and {} images",
            self.slides.len(),
            media_number - 1
        );
        Ok(())
    }

    fn content_types_xml(&self) -> Result<String> {
        let extensions: BTreeSet<&str> = self
            .slides
            .iter()
            .flat_map(|s| s.media.iter().map(|m| m.extension.as_str()))
            .collect();

        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for ext in extensions {
            if let Some(content_type) = image_content_type(ext) {
                write!(
                    xml,
                    r#"<Default Extension="{}" ContentType="{}"/>"#,
                    ext, content_type
                )
                .map_err(fmt_err)?;
            }
        }

        let overrides = [
            (PRESENTATION_PART, "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
            (SLIDE_MASTER_PART, "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
            (SLIDE_LAYOUT_PART, "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
            (THEME_PART, "application/vnd.openxmlformats-officedocument.theme+xml"),
            (CORE_PROPS_PART, "application/vnd.openxmlformats-package.core-properties+xml"),
            (APP_PROPS_PART, "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
        ];
        for (part, content_type) in overrides {
            write!(
                xml,
                r#"<Override PartName="/{}" ContentType="{}"/>"#,
                part, content_type
            )
            .map_err(fmt_err)?;
        }
        for number in 1..=self.slides.len() {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                number
            )
            .map_err(fmt_err)?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }

    /// Generate presentation.xml. Slides are `rId3` onward; `rId1` is the
    /// master and `rId2` the theme.
    fn presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(XML_DECLARATION);
        write!(xml, r#"<p:presentation {} saveSubsetFonts="1">"#, PML_NAMESPACES)
            .map_err(fmt_err)?;
        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for index in 0..self.slides.len() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    FIRST_SLIDE_ID + index as u32,
                    index + 3
                )
                .map_err(fmt_err)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(fmt_err)?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    fn presentation_rels_xml(&self) -> Result<String> {
        let slide_targets: Vec<String> = (1..=self.slides.len())
            .map(|n| format!("slides/slide{}.xml", n))
            .collect();

        let mut entries = vec![
            (1, rel_types::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            (2, rel_types::THEME, "theme/theme1.xml"),
        ];
        for (index, target) in slide_targets.iter().enumerate() {
            entries.push((index + 3, rel_types::SLIDE, target.as_str()));
        }

        relationships_xml(&entries)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn package_rels_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="{}" Target="{}"/>"#,
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="{}"/>"#,
            r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="{}"/>"#,
            "</Relationships>",
        ),
        XML_DECLARATION,
        rel_types::OFFICE_DOCUMENT,
        PRESENTATION_PART,
        CORE_PROPS_PART,
        APP_PROPS_PART
    )
}

/// Serialize `(number, type, target)` entries as a `.rels` part with ids
/// `rId<number>`.
fn relationships_xml(entries: &[(usize, &str, &str)]) -> Result<String> {
    let mut xml = String::with_capacity(256 + entries.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (number, rel_type, target) in entries {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
            number,
            rel_type,
            escape(*target)
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::parse_relationships;
    use crate::PptxParser;
    use icondeck_core::{Position, ShapeKind};
    use std::io::Cursor;

    fn label_style() -> TextStyle {
        TextStyle {
            size: Some(12.0),
            bold: true,
            color: Some("000000".to_string()),
            align: TextAlign::Center,
            word_wrap: true,
        }
    }

    #[test]
    fn test_create_deck() {
        let deck = Deck::new();
        assert_eq!(deck.slide_count(), 0);
        assert_eq!(deck.slide_width(), 9144000);
        assert_eq!(deck.slide_height(), 6858000);
    }

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut deck = Deck::new();
        let slide = deck.add_slide();
        let pic = slide
            .add_picture(vec![0; 4], "PNG", Rect::new(0, 0, 10, 10), "icon")
            .unwrap();
        let text = slide.add_text_box(Rect::new(0, 20, 10, 10), "icon", &label_style());

        assert_eq!((pic, text), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_rejects_unknown_image_type() {
        let mut deck = Deck::new();
        let result = deck
            .add_slide()
            .add_picture(vec![1], "emf", Rect::default(), "vector");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = DeckSlide::default();
        slide.set_background("808080");
        slide
            .add_picture(vec![1, 2], "png", Rect::new(914400, 914400, 457200, 228600), "A & B")
            .unwrap();
        slide.add_text_box(Rect::new(457200, 1234440, 1371600, 457200), "A & B", &label_style());

        let xml = slide.to_xml(2).unwrap();
        assert!(xml.contains(r#"<a:srgbClr val="808080"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="914400"/>"#));
        assert!(xml.contains(r#"<a:ext cx="457200" cy="228600"/>"#));
        assert!(xml.contains(r#"descr="A &amp; B""#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="1200" b="1""#));
        assert!(xml.contains(r#"wrap="square""#));
        assert!(xml.contains("<a:t>A &amp; B</a:t>"));
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let mut deck = Deck::new();
        deck.add_slide();
        deck.add_slide();

        let xml = deck.presentation_xml().unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));

        let rels = parse_relationships(&deck.presentation_rels_xml().unwrap()).unwrap();
        assert_eq!(rels.len(), 4);
        assert_eq!(rels[3].id, "rId4");
        assert_eq!(rels[3].target, "slides/slide2.xml");
    }

    #[test]
    fn test_written_deck_reads_back() {
        let mut deck = Deck::new();
        let first = deck.add_slide();
        first.set_background("808080");
        first
            .add_picture(b"first".to_vec(), "png", Rect::new(100, 200, 300, 300), "one")
            .unwrap();
        first.add_text_box(Rect::new(50, 600, 400, 100), "one", &label_style());
        let second = deck.add_slide();
        second
            .add_picture(b"second".to_vec(), "png", Rect::new(700, 800, 300, 150), "two")
            .unwrap();
        second.add_text_box(Rect::new(650, 1000, 400, 100), "two", &label_style());

        let mut buffer = Cursor::new(Vec::new());
        deck.write_to(&mut buffer).unwrap();
        buffer.set_position(0);

        let presentation = PptxParser::new().parse(buffer, "deck.pptx").unwrap();
        assert_eq!(presentation.slides.len(), 2);

        let slide = &presentation.slides[1];
        assert_eq!(slide.number, 2);
        assert_eq!(slide.shapes.len(), 2);
        assert_eq!(slide.shapes[0].position(), Position::new(700, 800));
        let blob = slide.shapes[0].image_blob().unwrap();
        assert_eq!(blob.data, b"second");
        assert_eq!(blob.part_name, "ppt/media/image2.png");
        assert_eq!(
            slide.shapes[1].kind,
            ShapeKind::TextFrame {
                text: "two".to_string()
            }
        );
    }
}
