//! Minimal view tree produced by components and mounted by a host.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H1,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Tag::H1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewNode {
    Element { tag: Tag, children: Vec<ViewNode> },
    Text { text: String },
}

impl ViewNode {
    pub fn element(tag: Tag, children: Vec<ViewNode>) -> Self {
        ViewNode::Element { tag, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text { text: text.into() }
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text { text } => text.clone(),
            ViewNode::Element { children, .. } => {
                children.iter().map(ViewNode::text_content).collect()
            }
        }
    }

    /// Text of every heading, in document order.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines(&mut out);
        out
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        if let ViewNode::Element { tag, children } = self {
            if tag.is_heading() {
                out.push(self.text_content());
            } else {
                for child in children {
                    child.collect_lines(out);
                }
            }
        }
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            ViewNode::Text { text } => out.push_str(&escape(text)),
            ViewNode::Element { tag, children } => {
                out.push('<');
                out.push_str(tag.as_str());
                out.push('>');
                for child in children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(tag.as_str());
                out.push('>');
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
