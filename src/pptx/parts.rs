//! Package parts: fixed templates and the generated manifest-like parts.

use chrono::{DateTime, SecondsFormat, Utc};
use constcat::concat;

use super::escape_xml;
use super::format::ImageFormat;

pub(crate) const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

pub(crate) mod rel_type {
    use constcat::concat;

    const BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub const OFFICE_DOCUMENT: &str = concat!(BASE, "/officeDocument");
    pub const EXTENDED_PROPERTIES: &str = concat!(BASE, "/extended-properties");
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const SLIDE_MASTER: &str = concat!(BASE, "/slideMaster");
    pub const SLIDE_LAYOUT: &str = concat!(BASE, "/slideLayout");
    pub const SLIDE: &str = concat!(BASE, "/slide");
    pub const THEME: &str = concat!(BASE, "/theme");
    pub const PRES_PROPS: &str = concat!(BASE, "/presProps");
    pub const VIEW_PROPS: &str = concat!(BASE, "/viewProps");
    pub const TABLE_STYLES: &str = concat!(BASE, "/tableStyles");
    pub const IMAGE: &str = concat!(BASE, "/image");
}

mod content_type {
    use constcat::concat;

    const PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";

    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PRESENTATION: &str = concat!(PML, ".presentation.main+xml");
    pub const SLIDE_MASTER: &str = concat!(PML, ".slideMaster+xml");
    pub const SLIDE_LAYOUT: &str = concat!(PML, ".slideLayout+xml");
    pub const SLIDE: &str = concat!(PML, ".slide+xml");
    pub const PRES_PROPS: &str = concat!(PML, ".presProps+xml");
    pub const VIEW_PROPS: &str = concat!(PML, ".viewProps+xml");
    pub const TABLE_STYLES: &str = concat!(PML, ".tableStyles+xml");
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

pub(crate) const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub(crate) const ROOT_RELS_PATH: &str = "_rels/.rels";
pub(crate) const CORE_PROPS_PATH: &str = "docProps/core.xml";
pub(crate) const APP_PROPS_PATH: &str = "docProps/app.xml";
pub(crate) const PRESENTATION_PATH: &str = "ppt/presentation.xml";
pub(crate) const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";
pub(crate) const SLIDE_MASTER_PATH: &str = "ppt/slideMasters/slideMaster1.xml";
pub(crate) const SLIDE_MASTER_RELS_PATH: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
pub(crate) const SLIDE_LAYOUT_PATH: &str = "ppt/slideLayouts/slideLayout1.xml";
pub(crate) const SLIDE_LAYOUT_RELS_PATH: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
pub(crate) const THEME_PATH: &str = "ppt/theme/theme1.xml";
pub(crate) const PRES_PROPS_PATH: &str = "ppt/presProps.xml";
pub(crate) const VIEW_PROPS_PATH: &str = "ppt/viewProps.xml";
pub(crate) const TABLE_STYLES_PATH: &str = "ppt/tableStyles.xml";

/// Relationships of `presentation.xml` before the first slide.
const FIXED_PRESENTATION_RELS: usize = 5;

pub(crate) fn slide_path(number: usize) -> String {
    format!("ppt/slides/slide{number}.xml")
}

pub(crate) fn slide_rels_path(number: usize) -> String {
    format!("ppt/slides/_rels/slide{number}.xml.rels")
}

pub(crate) fn media_path(format: ImageFormat) -> String {
    format!("ppt/media/image1.{}", format.extension())
}

/// Required group shape header of every `<p:spTree>`.
pub(crate) const GROUP_SHAPE_PROPERTIES: &str = concat!(
    "<p:nvGrpSpPr>",
    r#"<p:cNvPr id="1" name=""/>"#,
    "<p:cNvGrpSpPr/>",
    "<p:nvPr/>",
    "</p:nvGrpSpPr>",
    "<p:grpSpPr>",
    "<a:xfrm>",
    r#"<a:off x="0" y="0"/>"#,
    r#"<a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/>"#,
    r#"<a:chExt cx="0" cy="0"/>"#,
    "</a:xfrm>",
    "</p:grpSpPr>",
);

struct Relationship<'a> {
    id: String,
    rel_type: &'a str,
    target: String,
}

impl<'a> Relationship<'a> {
    fn new(index: usize, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{index}"),
            rel_type,
            target: target.into(),
        }
    }
}

fn relationships_xml(rels: &[Relationship<'_>]) -> String {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    xml.push_str(&format!("<Relationships xmlns=\"{REL_NS}\">"));
    for rel in rels {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
            rel.id, rel.rel_type, rel.target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

pub(crate) fn content_types_xml(slide_count: usize, media: Option<ImageFormat>) -> String {
    let mut xml = String::with_capacity(2048 + slide_count * 160);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(&format!(
        "<Default Extension=\"rels\" ContentType=\"{}\"/>",
        content_type::RELATIONSHIPS
    ));
    xml.push_str(&format!(
        "<Default Extension=\"xml\" ContentType=\"{}\"/>",
        content_type::XML
    ));
    if let Some(format) = media {
        xml.push_str(&format!(
            "<Default Extension=\"{}\" ContentType=\"{}\"/>",
            format.extension(),
            format.mime_type()
        ));
    }

    let overrides = [
        (PRESENTATION_PATH, content_type::PRESENTATION),
        (SLIDE_MASTER_PATH, content_type::SLIDE_MASTER),
        (SLIDE_LAYOUT_PATH, content_type::SLIDE_LAYOUT),
        (THEME_PATH, content_type::THEME),
        (PRES_PROPS_PATH, content_type::PRES_PROPS),
        (VIEW_PROPS_PATH, content_type::VIEW_PROPS),
        (TABLE_STYLES_PATH, content_type::TABLE_STYLES),
        (CORE_PROPS_PATH, content_type::CORE_PROPERTIES),
        (APP_PROPS_PATH, content_type::EXTENDED_PROPERTIES),
    ];
    for (path, ct) in overrides {
        xml.push_str(&format!(
            "<Override PartName=\"/{path}\" ContentType=\"{ct}\"/>"
        ));
    }
    for number in 1..=slide_count {
        xml.push_str(&format!(
            "<Override PartName=\"/{}\" ContentType=\"{}\"/>",
            slide_path(number),
            content_type::SLIDE
        ));
    }
    xml.push_str("</Types>");
    xml
}

pub(crate) fn root_rels_xml() -> String {
    relationships_xml(&[
        Relationship::new(1, rel_type::OFFICE_DOCUMENT, PRESENTATION_PATH),
        Relationship::new(2, rel_type::CORE_PROPERTIES, CORE_PROPS_PATH),
        Relationship::new(3, rel_type::EXTENDED_PROPERTIES, APP_PROPS_PATH),
    ])
}

pub(crate) fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = vec![
        Relationship::new(1, rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        Relationship::new(2, rel_type::PRES_PROPS, "presProps.xml"),
        Relationship::new(3, rel_type::VIEW_PROPS, "viewProps.xml"),
        Relationship::new(4, rel_type::THEME, "theme/theme1.xml"),
        Relationship::new(5, rel_type::TABLE_STYLES, "tableStyles.xml"),
    ];
    for number in 1..=slide_count {
        rels.push(Relationship::new(
            FIXED_PRESENTATION_RELS + number,
            rel_type::SLIDE,
            format!("slides/slide{number}.xml"),
        ));
    }
    relationships_xml(&rels)
}

pub(crate) fn presentation_xml(slide_count: usize, width: i64, height: i64) -> String {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        "<p:presentation {PML_NAMESPACES} saveSubsetFonts=\"1\">"
    ));
    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");
    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for number in 1..=slide_count {
            // slide ids start at 256
            xml.push_str(&format!(
                "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
                255 + number,
                FIXED_PRESENTATION_RELS + number
            ));
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(&format!("<p:sldSz cx=\"{width}\" cy=\"{height}\"/>"));
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

pub(crate) fn slide_rels_xml(media: Option<ImageFormat>) -> String {
    let mut rels = vec![Relationship::new(
        1,
        rel_type::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )];
    if let Some(format) = media {
        rels.push(Relationship::new(
            2,
            rel_type::IMAGE,
            format!("../media/image1.{}", format.extension()),
        ));
    }
    relationships_xml(&rels)
}

pub(crate) fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        Relationship::new(1, rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        Relationship::new(2, rel_type::THEME, "../theme/theme1.xml"),
    ])
}

pub(crate) fn slide_layout_rels_xml() -> String {
    relationships_xml(&[Relationship::new(
        1,
        rel_type::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

pub(crate) fn core_props_xml(title: &str, created: DateTime<Utc>) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        "<cp:coreProperties ",
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", env!("CARGO_PKG_NAME")));
    xml.push_str(&format!(
        "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:created>"
    ));
    xml.push_str(&format!(
        "<dcterms:modified xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:modified>"
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

pub(crate) fn app_props_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        "<Properties ",
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str(&format!("<Application>{}</Application>", env!("CARGO_PKG_NAME")));
    xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
    xml.push_str(&format!("<Slides>{slide_count}</Slides>"));
    xml.push_str("</Properties>");
    xml
}

pub(crate) const SLIDE_MASTER_XML: &str = concat!(
    XML_DECL,
    "<p:sldMaster ",
    PML_NAMESPACES,
    ">",
    "<p:cSld>",
    r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    "<p:spTree>",
    GROUP_SHAPE_PROPERTIES,
    "</p:spTree>",
    "</p:cSld>",
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
    r#"hlink="hlink" folHlink="folHlink"/>"#,
    "<p:sldLayoutIdLst>",
    r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#,
    "</p:sldLayoutIdLst>",
    "<p:txStyles>",
    r#"<p:titleStyle><a:lvl1pPr><a:defRPr sz="4400"/></a:lvl1pPr></p:titleStyle>"#,
    r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="3200"/></a:lvl1pPr></p:bodyStyle>"#,
    r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>"#,
    "</p:txStyles>",
    "</p:sldMaster>",
);

pub(crate) const SLIDE_LAYOUT_XML: &str = concat!(
    XML_DECL,
    "<p:sldLayout ",
    PML_NAMESPACES,
    r#" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank">"#,
    "<p:spTree>",
    GROUP_SHAPE_PROPERTIES,
    "</p:spTree>",
    "</p:cSld>",
    "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
    "</p:sldLayout>",
);

pub(crate) const THEME_XML: &str = concat!(
    XML_DECL,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/>",
    "<a:extraClrSchemeLst/>",
    "</a:theme>",
);

pub(crate) const PRES_PROPS_XML: &str = concat!(
    XML_DECL,
    "<p:presentationPr ",
    PML_NAMESPACES,
    "/>",
);

pub(crate) const VIEW_PROPS_XML: &str = concat!(
    XML_DECL,
    "<p:viewPr ",
    PML_NAMESPACES,
    ">",
    r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    "</p:viewPr>",
);

pub(crate) const TABLE_STYLES_XML: &str = concat!(
    XML_DECL,
    r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#,
);
