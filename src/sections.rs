/// A navigable region of the single-page layout. `id` doubles as the DOM id
/// of the section's landmark element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in document order. The scroll tracker walks these
/// top-to-bottom, so order here must match the layout in `HomePage`.
const SECTIONS: &[Section] = &[
    Section {
        id: "hero",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "skills",
        label: "Skills",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "experience",
        label: "Experience",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Sections shown as links in the header and footer. The hero is reachable
/// through the brand control and back-to-top instead.
pub fn nav_sections() -> &'static [Section] {
    &SECTIONS[1..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_are_unique() {
        let ids = sections().iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), sections().len());
    }

    #[test]
    fn test_nav_sections_skip_hero() {
        assert_eq!(nav_sections().len(), sections().len() - 1);
        assert!(nav_sections().iter().all(|s| s.id != "hero"));
        assert_eq!(nav_sections()[0].id, "about");
    }

    #[test]
    fn test_first_section_is_hero() {
        assert_eq!(sections()[0].id, "hero");
    }
}
