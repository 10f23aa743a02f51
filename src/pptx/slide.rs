//! Slide XML generation.

use super::{escape_xml, parts};
use crate::deck::color::RgbColor;

/// Relationship id of the shared background picture inside each slide's rels.
pub(crate) const BACKGROUND_REL_ID: &str = "rId2";

/// Slide background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBackground {
    /// Solid color fill
    Solid(RgbColor),
    /// Stretched picture fill using the presentation's background image
    Picture,
}

impl SlideBackground {
    /// `<p:bg>` element; must precede `<p:spTree>` inside `<p:cSld>`.
    pub(crate) fn to_xml(self) -> String {
        let mut xml = String::with_capacity(256);
        xml.push_str("<p:bg>");
        xml.push_str("<p:bgPr>");
        match self {
            SlideBackground::Solid(color) => {
                xml.push_str("<a:solidFill>");
                xml.push_str(&format!("<a:srgbClr val=\"{color}\"/>"));
                xml.push_str("</a:solidFill>");
            }
            SlideBackground::Picture => {
                xml.push_str("<a:blipFill dpi=\"0\" rotWithShape=\"1\">");
                xml.push_str(&format!("<a:blip r:embed=\"{BACKGROUND_REL_ID}\"/>"));
                xml.push_str("<a:srcRect/>");
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</a:blipFill>");
            }
        }
        xml.push_str("<a:effectLst/>");
        xml.push_str("</p:bgPr>");
        xml.push_str("</p:bg>");
        xml
    }
}

/// Run properties applied to every run of a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub font_name: String,
    /// Whole points.
    pub font_size: u32,
    pub color: RgbColor,
}

impl TextStyle {
    fn write_run_properties(&self, xml: &mut String, tag: &str) {
        // sz is in hundredths of a point
        xml.push_str(&format!(
            "<a:{tag} lang=\"en-US\" sz=\"{}\" dirty=\"0\">",
            self.font_size * 100
        ));
        xml.push_str(&format!(
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            self.color
        ));
        let typeface = escape_xml(&self.font_name);
        xml.push_str(&format!("<a:latin typeface=\"{typeface}\"/>"));
        xml.push_str(&format!("<a:ea typeface=\"{typeface}\"/>"));
        xml.push_str(&format!("<a:cs typeface=\"{typeface}\"/>"));
        xml.push_str(&format!("</a:{tag}>"));
    }
}

/// A word-wrapped, center-aligned, vertically centered text box. Offsets
/// and extents are in EMU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub style: TextStyle,
}

impl TextBox {
    /// A box of the given size centered on a canvas.
    pub fn centered(
        text: impl Into<String>,
        canvas: (i64, i64),
        size: (i64, i64),
        style: TextStyle,
    ) -> Self {
        let (canvas_w, canvas_h) = canvas;
        let (width, height) = size;
        Self {
            text: text.into(),
            x: (canvas_w - width) / 2,
            y: (canvas_h - height) / 2,
            width,
            height,
            style,
        }
    }

    fn write_xml(&self, xml: &mut String, shape_id: u32) {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(&format!(
            "<p:cNvPr id=\"{shape_id}\" name=\"TextBox {}\"/>",
            shape_id - 1
        ));
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(&format!("<a:off x=\"{}\" y=\"{}\"/>", self.x, self.y));
        xml.push_str(&format!(
            "<a:ext cx=\"{}\" cy=\"{}\"/>",
            self.width, self.height
        ));
        xml.push_str("</a:xfrm>");
        xml.push_str("<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>");
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr wrap=\"square\" rtlCol=\"0\" anchor=\"ctr\"><a:noAutofit/></a:bodyPr>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:pPr algn=\"ctr\"/>");
        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.style.write_run_properties(xml, "rPr");
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.style.write_run_properties(xml, "rPr");
            xml.push_str("<a:t>");
            xml.push_str(&escape_xml(line));
            xml.push_str("</a:t>");
            xml.push_str("</a:r>");
        }
        self.style.write_run_properties(xml, "endParaRPr");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
    }
}

/// One slide: a background and a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub background: SlideBackground,
    pub text_box: TextBox,
}

impl Slide {
    pub fn new(background: SlideBackground, text_box: TextBox) -> Self {
        Self {
            background,
            text_box,
        }
    }

    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(parts::XML_DECL);
        xml.push_str(&format!("<p:sld {}>", parts::PML_NAMESPACES));

        xml.push_str("<p:cSld>");
        xml.push_str(&self.background.to_xml());
        xml.push_str("<p:spTree>");
        xml.push_str(parts::GROUP_SHAPE_PROPERTIES);
        // id 1 is the group shape
        self.text_box.write_xml(&mut xml, 2);
        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        xml
    }

    pub(crate) fn uses_picture(&self) -> bool {
        self.background == SlideBackground::Picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::inches;

    fn style() -> TextStyle {
        TextStyle {
            font_name: "Arial".to_string(),
            font_size: 44,
            color: RgbColor::WHITE,
        }
    }

    #[test]
    fn text_box_is_centered() {
        let tb = TextBox::centered(
            "x",
            (inches(16), inches(9)),
            (inches(14), inches(7)),
            style(),
        );
        assert_eq!((tb.x, tb.y), (inches(1), inches(1)));
    }

    #[test]
    fn slide_xml_carries_style_and_line_breaks() {
        let tb = TextBox::centered(
            "Amazing grace\nhow <sweet>",
            (inches(16), inches(9)),
            (inches(14), inches(7)),
            style(),
        );
        let xml = Slide::new(SlideBackground::Solid(RgbColor::BLACK), tb).to_xml();

        assert!(xml.contains(r#"<a:srgbClr val="000000"/>"#));
        assert!(xml.contains(r#"sz="4400""#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr">"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains("<a:t>Amazing grace</a:t>"));
        assert!(xml.contains("<a:t>how &lt;sweet&gt;</a:t>"));
        assert_eq!(xml.matches("<a:br>").count(), 1);
    }

    #[test]
    fn picture_background_references_shared_image() {
        let xml = SlideBackground::Picture.to_xml();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains("<a:stretch><a:fillRect/></a:stretch>"));
    }
}
