//! The profile card component.

use crate::profile::{FieldValue, Profile};
use crate::view::{Tag, ViewNode};

/// Field labels, in display order.
pub const LABELS: [&str; 3] = ["name", "age", "city"];
/// Sits between a label and its value on every line.
pub const SEPARATOR: &str = " : ";

/// Renders a [`Profile`] as a container with three headings:
/// `name : <name>`, `age : <age>`, `city : <city>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileCard;

impl ProfileCard {
    pub fn render(profile: &Profile) -> ViewNode {
        let fields = [&profile.name, &profile.age, &profile.city];

        let headings = LABELS
            .iter()
            .zip(fields)
            .map(|(label, value)| heading(label, value.as_ref()))
            .collect();

        ViewNode::element(Tag::Div, headings)
    }
}

fn heading(label: &str, value: Option<&FieldValue>) -> ViewNode {
    // Absent values leave the value portion blank.
    let value = value.map(ToString::to_string).unwrap_or_default();
    ViewNode::element(
        Tag::H1,
        vec![ViewNode::text(format!("{}{}{}", label, SEPARATOR, value))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ada() {
        let view = ProfileCard::render(&Profile::new("Ada", 30, "London"));
        assert_eq!(view.lines(), vec!["name : Ada", "age : 30", "city : London"]);
    }

    #[test]
    fn test_render_empty_values() {
        let view = ProfileCard::render(&Profile::new("", 0, ""));
        assert_eq!(view.lines(), vec!["name : ", "age : 0", "city : "]);
    }

    #[test]
    fn test_render_absent_values() {
        let view = ProfileCard::render(&Profile::default());
        assert_eq!(view.lines(), vec!["name : ", "age : ", "city : "]);
    }

    #[test]
    fn test_render_structure() {
        let view = ProfileCard::render(&Profile::new("Ada", 30, "London"));
        let ViewNode::Element { tag, children } = &view else {
            panic!("card root should be an element");
        };
        assert_eq!(*tag, Tag::Div);
        assert_eq!(children.len(), 3);
        for child in children {
            assert!(matches!(child, ViewNode::Element { tag: Tag::H1, .. }));
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let profile = Profile::new("Ada", 30, "London");
        assert_eq!(ProfileCard::render(&profile), ProfileCard::render(&profile));
    }

    #[test]
    fn test_age_passes_through_opaque() {
        let negative = ProfileCard::render(&Profile::new("Ada", -3, "London"));
        assert_eq!(negative.lines()[1], "age : -3");

        let text = ProfileCard::render(&Profile::new("Ada", "unknown", "London"));
        assert_eq!(text.lines()[1], "age : unknown");

        let float = ProfileCard::render(&Profile::new("Ada", 30.5, "London"));
        assert_eq!(float.lines()[1], "age : 30.5");
    }

    #[test]
    fn test_boolean_age_renders_blank() {
        let profile = Profile::from_json(r#"{"name":"Ada","age":false,"city":"London"}"#).unwrap();
        let view = ProfileCard::render(&profile);
        assert_eq!(view.lines(), vec!["name : Ada", "age : ", "city : London"]);
    }

    #[test]
    fn test_markup() {
        let view = ProfileCard::render(&Profile::new("Ada", 30, "London"));
        assert_eq!(
            view.to_markup(),
            "<div><h1>name : Ada</h1><h1>age : 30</h1><h1>city : London</h1></div>"
        );
    }
}
