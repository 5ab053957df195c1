//! Fixed parts of a generated presentation package: slide master, blank
//! layout, theme and document properties.

use std::fmt::Write as FmtWrite;

pub const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Namespace declarations for PresentationML parts.
pub const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

pub const SLIDE_MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
pub const SLIDE_LAYOUT_PART: &str = "ppt/slideLayouts/slideLayout1.xml";
pub const THEME_PART: &str = "ppt/theme/theme1.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

/// Empty group properties every shape tree starts with.
pub const SHAPE_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

pub fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    let _ = write!(xml, "<p:sldMaster {}>", PML_NAMESPACES);
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    let _ = write!(xml, "<p:spTree>{}</p:spTree>", SHAPE_TREE_HEADER);
    xml.push_str("</p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" "#,
        r#"accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" "#,
        r#"accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str("<p:txStyles>");
    xml.push_str(r#"<p:titleStyle><a:lvl1pPr><a:defRPr sz="4400"/></a:lvl1pPr></p:titleStyle>"#);
    xml.push_str(r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="3200"/></a:lvl1pPr></p:bodyStyle>"#);
    xml.push_str(r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>"#);
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");
    xml
}

pub fn blank_layout_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    let _ = write!(
        xml,
        r#"<p:sldLayout {} type="blank" preserve="1">"#,
        PML_NAMESPACES
    );
    let _ = write!(
        xml,
        r#"<p:cSld name="Blank"><p:spTree>{}</p:spTree></p:cSld>"#,
        SHAPE_TREE_HEADER
    );
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

pub fn theme_xml() -> String {
    const ACCENTS: [(&str, &str); 8] = [
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ];
    const SOLID_PH: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    const FONTS: &str = r#"<a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#;

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    );
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    xml.push_str(r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#);
    xml.push_str(r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#);
    for (name, color) in ACCENTS {
        let _ = write!(xml, r#"<a:{0}><a:srgbClr val="{1}"/></a:{0}>"#, name, color);
    }
    xml.push_str("</a:clrScheme>");

    let _ = write!(
        xml,
        r#"<a:fontScheme name="Office"><a:majorFont>{0}</a:majorFont><a:minorFont>{0}</a:minorFont></a:fontScheme>"#,
        FONTS
    );

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    let _ = write!(xml, "<a:fillStyleLst>{}</a:fillStyleLst>", SOLID_PH.repeat(3));
    let line = format!(r#"<a:ln w="9525">{}</a:ln>"#, SOLID_PH);
    let _ = write!(xml, "<a:lnStyleLst>{}</a:lnStyleLst>", line.repeat(3));
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    let _ = write!(xml, "<a:effectStyleLst>{}</a:effectStyleLst>", effect.repeat(3));
    let _ = write!(xml, "<a:bgFillStyleLst>{}</a:bgFillStyleLst>", SOLID_PH.repeat(3));
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    xml
}

pub fn core_props_xml(title: &str) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    let _ = write!(xml, "<dc:title>{}</dc:title>", quick_xml::escape::escape(title));
    xml.push_str("<dc:creator>icondeck</dc:creator>");
    xml.push_str("</cp:coreProperties>");
    xml
}

pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            "<Application>icondeck</Application><Slides>{}</Slides></Properties>",
        ),
        XML_DECLARATION, slide_count
    )
}
