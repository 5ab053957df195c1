//! PPTX file parser implementation.

use crate::package::{
    local_name, read_part, read_relationships, read_xml_part, rel_types, resolve_target,
    Relationship, PRESENTATION_PART,
};
use icondeck_core::{Error, ImageBlob, Position, Presentation, Result, Shape, ShapeKind, Slide};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader, loading every embedded picture.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut presentation = Presentation::new(filename);

        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("Found {} slides in {}", slide_order.len(), filename);

        let mut layouts = HashMap::new();
        for (idx, slide_path) in slide_order.iter().enumerate() {
            let slide = self.parse_slide(&mut archive, slide_path, idx + 1, &mut layouts)?;
            presentation.add_slide(slide);
        }

        Ok(presentation)
    }

    /// Get the ordered list of slide part names.
    ///
    /// The slide id list in `presentation.xml` is authoritative. Packages
    /// without one fall back to slide relationships sorted by number.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels = read_relationships(archive, PRESENTATION_PART)?;
        if rels.is_empty() {
            return Err(Error::PptxParseError(format!(
                "No relationships found for {}",
                PRESENTATION_PART
            )));
        }

        let content = read_xml_part(archive, PRESENTATION_PART)?;
        let slide_ids = extract_slide_rel_ids(&content)?;

        let by_id: HashMap<&str, &Relationship> = rels.iter().map(|r| (r.id.as_str(), r)).collect();
        let mut slides = Vec::with_capacity(slide_ids.len());
        for rel_id in &slide_ids {
            match by_id.get(rel_id.as_str()) {
                Some(rel) => slides.push(resolve_target(PRESENTATION_PART, &rel.target)),
                None => log::warn!("Slide relationship {} is missing, skipping", rel_id),
            }
        }

        if !slides.is_empty() {
            return Ok(slides);
        }

        let mut numbered: Vec<(String, Option<usize>)> = rels
            .iter()
            .filter(|r| r.rel_type == rel_types::SLIDE && !r.external)
            .map(|r| {
                let order_num =
                    extract_slide_number(&r.target).or_else(|| extract_slide_number(&r.id));
                (resolve_target(PRESENTATION_PART, &r.target), order_num)
            })
            .collect();

        numbered.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(numbered.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide from the archive and load its picture blobs.
    ///
    /// Placeholders without an offset of their own take the one their slide
    /// layout gives them. `layouts` caches layout anchors across slides.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
        layouts: &mut HashMap<String, Vec<PlaceholderAnchor>>,
    ) -> Result<Slide> {
        let content = read_xml_part(archive, slide_path)?;
        let raw_shapes = extract_shapes_from_xml(&content);

        let has_pictures = raw_shapes
            .iter()
            .any(|s| s.kind == RawKind::Picture && s.placeholder.is_none());
        let inherits_offsets = raw_shapes.iter().any(ShapeInfo::inherits_offset);

        let rels = if has_pictures || inherits_offsets {
            read_relationships(archive, slide_path)?
        } else {
            Vec::new()
        };

        let layout_path = if inherits_offsets {
            related_part(slide_path, &rels, rel_types::SLIDE_LAYOUT)
        } else {
            None
        };
        if let Some(path) = &layout_path {
            if !layouts.contains_key(path) {
                let anchors = self.layout_anchors(archive, path)?;
                layouts.insert(path.clone(), anchors);
            }
        }
        let anchors: &[PlaceholderAnchor] = layout_path
            .as_ref()
            .and_then(|path| layouts.get(path))
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut slide = Slide::new(slide_number);
        for raw in raw_shapes {
            let position = match &raw.placeholder {
                Some(ph) if !raw.has_offset => anchors
                    .iter()
                    .find(|anchor| anchor.placeholder.idx == ph.idx)
                    .map(|anchor| anchor.position)
                    .unwrap_or_default(),
                _ => Position::new(raw.x, raw.y),
            };

            let kind = match raw.kind {
                // Picture placeholders are layout slots, not inserted pictures.
                RawKind::Picture if raw.placeholder.is_some() => ShapeKind::Other,
                RawKind::Picture => {
                    let image = self.load_blob(archive, slide_path, &rels, raw.embed.as_deref())?;
                    ShapeKind::Picture { image }
                }
                RawKind::Text => ShapeKind::TextFrame { text: raw.text },
                RawKind::Other => ShapeKind::Other,
            };

            slide.add_shape(Shape {
                id: raw.id,
                name: raw.name,
                position,
                kind,
            });
        }

        log::debug!(
            "Slide {} ({}): {} shapes",
            slide_number,
            slide_path,
            slide.shapes.len()
        );

        Ok(slide)
    }

    /// Placeholder offsets defined by a slide layout. Layout placeholders
    /// without an offset take it from the matching master placeholder.
    fn layout_anchors<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        layout_path: &str,
    ) -> Result<Vec<PlaceholderAnchor>> {
        let layout = self.part_shapes(archive, layout_path)?;

        let master = if layout.iter().any(ShapeInfo::inherits_offset) {
            let rels = read_relationships(archive, layout_path)?;
            match related_part(layout_path, &rels, rel_types::SLIDE_MASTER) {
                Some(master_path) => self.part_shapes(archive, &master_path)?,
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        let anchors = layout
            .into_iter()
            .filter_map(|shape| {
                let placeholder = shape.placeholder?;
                let position = if shape.has_offset {
                    Position::new(shape.x, shape.y)
                } else {
                    let base = placeholder.master_type();
                    let master_shape = master
                        .iter()
                        .find(|m| m.placeholder.as_ref().is_some_and(|mp| mp.kind == base))?;
                    if !master_shape.has_offset {
                        return None;
                    }
                    Position::new(master_shape.x, master_shape.y)
                };
                Some(PlaceholderAnchor {
                    placeholder,
                    position,
                })
            })
            .collect::<Vec<_>>();

        log::debug!("Layout {}: {} placeholder anchors", layout_path, anchors.len());
        Ok(anchors)
    }

    /// Top-level shapes of a layout or master part. A missing part has none.
    fn part_shapes<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        part_name: &str,
    ) -> Result<Vec<ShapeInfo>> {
        match read_xml_part(archive, part_name) {
            Ok(content) => Ok(extract_shapes_from_xml(&content)),
            Err(Error::MissingPart(name)) => {
                log::warn!("Part {} is missing, placeholders fall back to the origin", name);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve a picture's relationship id to the embedded image bytes.
    fn load_blob<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        rels: &[Relationship],
        embed: Option<&str>,
    ) -> Result<Option<ImageBlob>> {
        let Some(rel_id) = embed else {
            log::warn!("Picture on {} has no embedded image", slide_path);
            return Ok(None);
        };

        let Some(rel) = rels.iter().find(|r| r.id == rel_id) else {
            log::warn!("Relationship {} not found for {}", rel_id, slide_path);
            return Ok(None);
        };

        if rel.external {
            log::warn!("Image {} on {} is linked, not embedded", rel.target, slide_path);
            return Ok(None);
        }

        let part_name = resolve_target(slide_path, &rel.target);
        match read_part(archive, &part_name) {
            Ok(data) => Ok(Some(ImageBlob { part_name, data })),
            Err(Error::MissingPart(name)) => {
                log::warn!("Image part {} is missing from the package", name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Part name of the first internal relationship of the given type.
fn related_part(source_part: &str, rels: &[Relationship], rel_type: &str) -> Option<String> {
    rels.iter()
        .find(|r| r.rel_type == rel_type && !r.external)
        .map(|r| resolve_target(source_part, &r.target))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    Picture,
    Text,
    Other,
}

/// The `p:ph` marker of a placeholder shape.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placeholder {
    /// Placeholder type, `obj` when unspecified.
    kind: String,
    /// Placeholder index, `0` when unspecified.
    idx: u32,
}

impl Placeholder {
    fn from_element(e: &BytesStart) -> Self {
        let mut placeholder = Self {
            kind: "obj".to_string(),
            idx: 0,
        };
        for attr in e.attributes().flatten() {
            let value = String::from_utf8_lossy(&attr.value);
            match attr.key.as_ref() {
                b"type" => placeholder.kind = value.to_string(),
                b"idx" => placeholder.idx = value.parse().unwrap_or(0),
                _ => {}
            }
        }
        placeholder
    }

    /// Type of the master placeholder a layout placeholder of this type
    /// inherits from.
    fn master_type(&self) -> &str {
        match self.kind.as_str() {
            "ctrTitle" | "title" => "title",
            "dt" => "dt",
            "ftr" => "ftr",
            "sldNum" => "sldNum",
            _ => "body",
        }
    }
}

/// Offset a layout assigns to one of its placeholders.
#[derive(Debug, Clone)]
struct PlaceholderAnchor {
    placeholder: Placeholder,
    position: Position,
}

/// Information about a top-level shape extracted from slide XML.
#[derive(Debug)]
struct ShapeInfo {
    kind: RawKind,
    id: u32,
    name: String,
    x: i64,
    y: i64,
    text: String,
    embed: Option<String>,
    placeholder: Option<Placeholder>,
    has_id: bool,
    has_offset: bool,
    paragraphs: usize,
    /// Element depth of the shape's own start tag.
    depth: usize,
}

impl ShapeInfo {
    fn new(kind: RawKind, depth: usize) -> Self {
        Self {
            kind,
            id: 0,
            name: String::new(),
            x: 0,
            y: 0,
            text: String::new(),
            embed: None,
            placeholder: None,
            has_id: false,
            has_offset: false,
            paragraphs: 0,
            depth,
        }
    }

    /// A placeholder positioned by its layout rather than by itself.
    fn inherits_offset(&self) -> bool {
        self.placeholder.is_some() && !self.has_offset
    }

    /// Apply a descendant element. Only the first `cNvPr`, offset and blip
    /// count, so children of group shapes never override the group.
    fn apply(&mut self, e: &BytesStart) {
        match local_name(e.name().as_ref()) {
            b"cNvPr" if !self.has_id => {
                self.has_id = true;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"id" => {
                            self.id = String::from_utf8_lossy(&attr.value).parse().unwrap_or(0);
                        }
                        b"name" => {
                            self.name = String::from_utf8_lossy(&attr.value).to_string();
                        }
                        _ => {}
                    }
                }
            }
            b"off" if !self.has_offset => {
                self.has_offset = true;
                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value);
                    match attr.key.as_ref() {
                        b"x" => self.x = value.parse().unwrap_or(0),
                        b"y" => self.y = value.parse().unwrap_or(0),
                        _ => {}
                    }
                }
            }
            b"ph" if self.kind != RawKind::Other && self.placeholder.is_none() => {
                self.placeholder = Some(Placeholder::from_element(e));
            }
            b"blip" if self.kind == RawKind::Picture && self.embed.is_none() => {
                self.embed = e
                    .attributes()
                    .flatten()
                    .find(|a| local_name(a.key.as_ref()) == b"embed")
                    .map(|a| String::from_utf8_lossy(&a.value).to_string());
            }
            b"p" if self.kind == RawKind::Text => {
                if self.paragraphs > 0 {
                    self.text.push('\n');
                }
                self.paragraphs += 1;
            }
            b"br" if self.kind == RawKind::Text => {
                self.text.push('\n');
            }
            _ => {}
        }
    }
}

/// Extract the top-level shapes of a slide's shape tree.
///
/// Malformed XML stops parsing; shapes completed before the error are kept.
fn extract_shapes_from_xml(xml_content: &str) -> Vec<ShapeInfo> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml_content);

    let mut depth = 0usize;
    // Depth of the shape tree's direct children, once inside it.
    let mut tree_children: Option<usize> = None;
    let mut current: Option<ShapeInfo> = None;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let name = e.name();
                let local = local_name(name.as_ref());

                if let Some(shape) = current.as_mut() {
                    shape.apply(e);
                    if local == b"t" && shape.kind == RawKind::Text {
                        in_run_text = true;
                    }
                } else if tree_children == Some(depth) {
                    current = shape_kind(local).map(|kind| ShapeInfo::new(kind, depth));
                } else if local == b"spTree" && tree_children.is_none() {
                    tree_children = Some(depth + 1);
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(shape) = current.as_mut() {
                    shape.apply(e);
                } else if tree_children == Some(depth + 1) {
                    if let Some(kind) = shape_kind(local_name(e.name().as_ref())) {
                        let mut shape = ShapeInfo::new(kind, depth + 1);
                        shape.apply(e);
                        shapes.push(shape);
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    if let Some(shape) = current.as_mut() {
                        let text = e.unescape().unwrap_or_default();
                        shape.text.push_str(&text);
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if in_run_text {
                    if let Some(shape) = current.as_mut() {
                        shape.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if local == b"t" {
                    in_run_text = false;
                }

                if current.as_ref().is_some_and(|s| s.depth == depth) {
                    if let Some(shape) = current.take() {
                        shapes.push(shape);
                    }
                } else if tree_children == Some(depth + 1) && local == b"spTree" {
                    tree_children = None;
                }

                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("XML parsing error (keeping {} shapes): {}", shapes.len(), e);
                break;
            }
            _ => {}
        }
    }

    shapes
}

/// Map a shape-tree child element to the kind of shape it declares.
fn shape_kind(local: &[u8]) -> Option<RawKind> {
    match local {
        b"pic" => Some(RawKind::Picture),
        b"sp" => Some(RawKind::Text),
        b"grpSp" | b"graphicFrame" | b"cxnSp" | b"contentPart" => Some(RawKind::Other),
        _ => None,
    }
}

/// Relationship ids of `p:sldIdLst/p:sldId/@r:id`, in presentation order.
fn extract_slide_rel_ids(xml_content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(true);

    let mut ids = Vec::new();
    let mut in_list = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"sldIdLst" => {
                in_list = true;
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"sldIdLst" => {
                in_list = false;
            }
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if in_list && local_name(e.name().as_ref()) == b"sldId" =>
            {
                // The bare `id` is the slide id; the prefixed one is the relationship.
                let rel_id = e
                    .attributes()
                    .flatten()
                    .find(|a| {
                        let key = a.key.as_ref();
                        key.contains(&b':') && local_name(key) == b"id"
                    })
                    .map(|a| String::from_utf8_lossy(&a.value).to_string());

                if let Some(rel_id) = rel_id {
                    ids.push(rel_id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing {}: {}",
                    PRESENTATION_PART, e
                )));
            }
            _ => {}
        }
    }

    Ok(ids)
}

/// Extract a slide number from a string like "rId2" or "slides/slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const NS: &str = concat!(
        r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
    );

    fn rels(entries: &[(&str, &str, &str)]) -> String {
        let mut xml = String::from(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (id, rel_type, target) in entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id, rel_type, target
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }

    fn part(root: &str, shapes: &str) -> String {
        format!(
            "<p:{0} {1}><p:cSld><p:spTree>{2}</p:spTree></p:cSld></p:{0}>",
            root, NS, shapes
        )
    }

    fn text_shape(id: u32, ph: &str, offset: Option<(i64, i64)>, text: &str) -> String {
        let sp_pr = match offset {
            Some((x, y)) => format!(
                r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="10" cy="10"/></a:xfrm></p:spPr>"#,
                x, y
            ),
            None => "<p:spPr/>".to_string(),
        };
        format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="Shape {}"/><p:cNvSpPr/><p:nvPr>{}</p:nvPr></p:nvSpPr>{}<p:txBody><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>"#,
            id, id, ph, sp_pr, text
        )
    }

    fn zip_package(parts: &[(&str, String)]) -> Cursor<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    /// One-slide package whose slide uses `layout` on top of `master`.
    fn placeholder_package(slide: String, layout: String, master: String) -> Cursor<Vec<u8>> {
        zip_package(&[
            (
                "ppt/presentation.xml",
                format!(
                    r#"<p:presentation {}><p:sldIdLst><p:sldId id="256" r:id="rId2"/></p:sldIdLst></p:presentation>"#,
                    NS
                ),
            ),
            (
                "ppt/_rels/presentation.xml.rels",
                rels(&[("rId2", rel_types::SLIDE, "slides/slide1.xml")]),
            ),
            ("ppt/slides/slide1.xml", slide),
            (
                "ppt/slides/_rels/slide1.xml.rels",
                rels(&[(
                    "rId1",
                    rel_types::SLIDE_LAYOUT,
                    "../slideLayouts/slideLayout2.xml",
                )]),
            ),
            ("ppt/slideLayouts/slideLayout2.xml", layout),
            (
                "ppt/slideLayouts/_rels/slideLayout2.xml.rels",
                rels(&[(
                    "rId1",
                    rel_types::SLIDE_MASTER,
                    "../slideMasters/slideMaster1.xml",
                )]),
            ),
            ("ppt/slideMasters/slideMaster1.xml", master),
        ])
    }

    const SLIDE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></a:xfrm></p:grpSpPr>
      <p:pic>
        <p:nvPicPr><p:cNvPr id="4" name="Picture 3"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>
        <p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
        <p:spPr><a:xfrm><a:off x="914400" y="1828800"/><a:ext cx="457200" cy="457200"/></a:xfrm></p:spPr>
      </p:pic>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="5" name="TextBox 4"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
        <p:spPr><a:xfrm><a:off x="457200" y="2377440"/><a:ext cx="1371600" cy="457200"/></a:xfrm></p:spPr>
        <p:txBody><a:bodyPr/><a:lstStyle/>
          <a:p><a:r><a:rPr lang="en-US"/><a:t>Wi-Fi</a:t></a:r><a:r><a:t> &amp; LAN</a:t></a:r></a:p>
          <a:p><a:r><a:t>Edge</a:t></a:r><a:br/><a:r><a:t>Router</a:t></a:r></a:p>
        </p:txBody>
      </p:sp>
      <p:grpSp>
        <p:nvGrpSpPr><p:cNvPr id="6" name="Group 5"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
        <p:grpSpPr><a:xfrm><a:off x="100" y="200"/><a:ext cx="10" cy="10"/></a:xfrm></p:grpSpPr>
        <p:sp>
          <p:nvSpPr><p:cNvPr id="7" name="Nested"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
          <p:spPr><a:xfrm><a:off x="300" y="400"/><a:ext cx="10" cy="10"/></a:xfrm></p:spPr>
          <p:txBody><a:bodyPr/><a:p><a:r><a:t>Hidden</a:t></a:r></a:p></p:txBody>
        </p:sp>
      </p:grpSp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="8" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
        <p:spPr/>
        <p:txBody><a:bodyPr/><a:p/><a:p><a:r><a:t>Title</a:t></a:r></a:p></p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
</p:sld>"#;

    #[test]
    fn test_extract_shapes() {
        let shapes = extract_shapes_from_xml(SLIDE_XML);
        assert_eq!(shapes.len(), 4);

        let pic = &shapes[0];
        assert_eq!(pic.kind, RawKind::Picture);
        assert_eq!(pic.id, 4);
        assert_eq!((pic.x, pic.y), (914400, 1828800));
        assert_eq!(pic.embed.as_deref(), Some("rId2"));

        let text = &shapes[1];
        assert_eq!(text.kind, RawKind::Text);
        assert_eq!(text.id, 5);
        assert_eq!(text.name, "TextBox 4");
        assert_eq!(text.text, "Wi-Fi & LAN\nEdge\nRouter");

        let group = &shapes[2];
        assert_eq!(group.kind, RawKind::Other);
        assert_eq!(group.id, 6);
        assert_eq!((group.x, group.y), (100, 200));
        assert!(group.text.is_empty());

        let title = &shapes[3];
        assert_eq!(title.id, 8);
        assert_eq!((title.x, title.y), (0, 0));
        assert_eq!(title.text, "\nTitle");
        assert!(title.inherits_offset());
        assert_eq!(
            title.placeholder,
            Some(Placeholder {
                kind: "title".to_string(),
                idx: 0
            })
        );
        assert_eq!(pic.placeholder, None);
    }

    #[test]
    fn test_extract_shapes_truncated_xml() {
        let truncated = &SLIDE_XML[..SLIDE_XML.find("<p:grpSp>").unwrap()];
        let shapes = extract_shapes_from_xml(truncated);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_extract_slide_rel_ids() {
        let xml = r#"<p:presentation xmlns:p="p" xmlns:r="r">
            <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
            <p:sldIdLst><p:sldId id="257" r:id="rId7"/><p:sldId id="256" r:id="rId3"/></p:sldIdLst>
            <p:sldSz cx="9144000" cy="6858000"/>
        </p:presentation>"#;

        assert_eq!(extract_slide_rel_ids(xml).unwrap(), vec!["rId7", "rId3"]);
    }

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_placeholder_takes_layout_offset() {
        let slide = part(
            "sld",
            &[
                text_shape(2, r#"<p:ph type="title"/>"#, None, "Network icons"),
                text_shape(3, r#"<p:ph idx="1"/>"#, None, "Body"),
                text_shape(4, "", None, "Loose"),
                text_shape(5, r#"<p:ph type="title"/>"#, Some((7, 8)), "Moved"),
            ]
            .concat(),
        );
        let layout = part(
            "sldLayout",
            &[
                text_shape(2, r#"<p:ph type="title"/>"#, Some((457200, 274638)), ""),
                text_shape(3, r#"<p:ph idx="1"/>"#, Some((457200, 1600200)), ""),
            ]
            .concat(),
        );
        let master = part("sldMaster", "");

        let presentation = PptxParser::new()
            .parse(placeholder_package(slide, layout, master), "deck.pptx")
            .unwrap();
        let shapes = &presentation.slides[0].shapes;

        assert_eq!(shapes[0].position, Position::new(457200, 274638));
        assert_eq!(shapes[0].text(), Some("Network icons"));
        assert_eq!(shapes[1].position, Position::new(457200, 1600200));
        assert_eq!(shapes[2].position, Position::new(0, 0));
        assert_eq!(shapes[3].position, Position::new(7, 8));
    }

    #[test]
    fn test_layout_placeholder_takes_master_offset() {
        let slide = part(
            "sld",
            &text_shape(2, r#"<p:ph type="ctrTitle"/>"#, None, "Cover"),
        );
        let layout = part(
            "sldLayout",
            &text_shape(2, r#"<p:ph type="ctrTitle"/>"#, None, ""),
        );
        let master = part(
            "sldMaster",
            &[
                text_shape(2, r#"<p:ph type="body" idx="1"/>"#, Some((1, 2)), ""),
                text_shape(3, r#"<p:ph type="title"/>"#, Some((685800, 2130425)), ""),
            ]
            .concat(),
        );

        let presentation = PptxParser::new()
            .parse(placeholder_package(slide, layout, master), "deck.pptx")
            .unwrap();

        assert_eq!(
            presentation.slides[0].shapes[0].position,
            Position::new(685800, 2130425)
        );
    }

    #[test]
    fn test_picture_placeholder_is_not_a_picture() {
        let slide = part(
            "sld",
            concat!(
                r#"<p:pic><p:nvPicPr><p:cNvPr id="2" name="Picture Placeholder 1"/><p:cNvPicPr/>"#,
                r#"<p:nvPr><p:ph type="pic" idx="13"/></p:nvPr></p:nvPicPr>"#,
                r#"<p:blipFill><a:blip r:embed="rId9"/></p:blipFill><p:spPr/></p:pic>"#,
            ),
        );
        let layout = part(
            "sldLayout",
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Picture Placeholder 1"/><p:cNvSpPr/>"#,
                r#"<p:nvPr><p:ph type="pic" idx="13"/></p:nvPr></p:nvSpPr>"#,
                r#"<p:spPr><a:xfrm><a:off x="300" y="400"/><a:ext cx="1" cy="1"/></a:xfrm></p:spPr></p:sp>"#,
            ),
        );

        let presentation = PptxParser::new()
            .parse(
                placeholder_package(slide, layout, part("sldMaster", "")),
                "deck.pptx",
            )
            .unwrap();
        let shape = &presentation.slides[0].shapes[0];

        assert!(!shape.is_picture());
        assert_eq!(shape.kind, ShapeKind::Other);
        assert_eq!(shape.position, Position::new(300, 400));
        assert_eq!(presentation.pictures().count(), 0);
    }

    #[test]
    fn test_master_type_mapping() {
        let ph = |kind: &str| Placeholder {
            kind: kind.to_string(),
            idx: 0,
        };
        assert_eq!(ph("ctrTitle").master_type(), "title");
        assert_eq!(ph("subTitle").master_type(), "body");
        assert_eq!(ph("obj").master_type(), "body");
        assert_eq!(ph("sldNum").master_type(), "sldNum");
    }
}
