//! Plain-text preview of a class graph
//!
//! Draws each class as a box (name, property rows, method rows) in
//! insertion order, then lists the links. Placement is left to a real
//! diagram host; this is for terminals and logs.

use unicode_width::UnicodeWidthStr;

use super::label::ClassLabels;
use crate::model::{ArrowHead, ClassGraphModel, NodeKey, RelationshipLink};

/// Character set used for the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewStyle {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Pure ASCII for maximum compatibility
    Ascii,
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    t_left: char,
    t_right: char,
}

impl PreviewStyle {
    fn box_chars(self) -> BoxChars {
        match self {
            PreviewStyle::Unicode => BoxChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                t_left: '├',
                t_right: '┤',
            },
            PreviewStyle::Ascii => BoxChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                t_left: '+',
                t_right: '+',
            },
        }
    }

    fn arrow(self, head: ArrowHead) -> &'static str {
        match (self, head) {
            (PreviewStyle::Unicode, ArrowHead::Triangle) => "▷",
            (PreviewStyle::Unicode, ArrowHead::OpenTriangle) => ">",
            (PreviewStyle::Unicode, ArrowHead::Diamond) => "◆",
            (PreviewStyle::Unicode, ArrowHead::HollowDiamond) => "◇",
            (PreviewStyle::Ascii, ArrowHead::Triangle) => "|>",
            (PreviewStyle::Ascii, ArrowHead::OpenTriangle) => ">",
            (PreviewStyle::Ascii, ArrowHead::Diamond) => "*",
            (PreviewStyle::Ascii, ArrowHead::HollowDiamond) => "o",
        }
    }

    fn line(self, dashed: bool) -> &'static str {
        match (self, dashed) {
            (PreviewStyle::Unicode, false) => "──",
            (PreviewStyle::Unicode, true) => "╌╌",
            (PreviewStyle::Ascii, false) => "--",
            (PreviewStyle::Ascii, true) => "..",
        }
    }
}

/// Text preview renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPreview {
    style: PreviewStyle,
}

impl TextPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: PreviewStyle) -> Self {
        Self { style }
    }

    /// Render every class box followed by the link list
    pub fn render(&self, model: &ClassGraphModel) -> String {
        let mut lines = Vec::new();

        for node in model.nodes() {
            self.draw_class(&mut lines, &ClassLabels::for_node(node));
        }

        if !model.links().is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            for link in model.links() {
                lines.push(self.link_line(model, link));
            }
        }

        lines.join("\n")
    }

    fn draw_class(&self, lines: &mut Vec<String>, labels: &ClassLabels) {
        let c = self.style.box_chars();
        let inner = labels
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
            + 2;

        let rule = |left: char, right: char| {
            let mut s = String::new();
            s.push(left);
            s.extend(std::iter::repeat(c.horizontal).take(inner));
            s.push(right);
            s
        };
        let row = |text: &str, centered: bool| {
            let width = UnicodeWidthStr::width(text);
            let pad = inner - width;
            let left = if centered { pad / 2 } else { 1 };
            format!(
                "{}{}{}{}{}",
                c.vertical,
                " ".repeat(left),
                text,
                " ".repeat(pad - left),
                c.vertical
            )
        };

        lines.push(rule(c.top_left, c.top_right));
        lines.push(row(labels.name.as_str(), true));

        for section in [&labels.properties, &labels.methods] {
            if section.is_empty() {
                continue;
            }
            lines.push(rule(c.t_left, c.t_right));
            for text in section {
                lines.push(row(text.as_str(), false));
            }
        }

        lines.push(rule(c.bottom_left, c.bottom_right));
    }

    fn endpoint(model: &ClassGraphModel, key: NodeKey) -> String {
        match model.node(key) {
            Some(node) => format!("{}({})", node.name, key),
            None => format!("?({})", key),
        }
    }

    fn link_line(&self, model: &ClassGraphModel, link: &RelationshipLink) -> String {
        let style = link.kind.style();
        let from_arrow = style.from_arrow.map_or("", |h| self.style.arrow(h));
        let to_arrow = style.to_arrow.map_or("", |h| self.style.arrow(h));
        format!(
            "{} {}{}{} {}  [{}]",
            Self::endpoint(model, link.from),
            from_arrow,
            self.style.line(style.dashed),
            to_arrow,
            Self::endpoint(model, link.to),
            link.kind
        )
    }
}
