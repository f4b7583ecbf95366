#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Service,
    Tech,
}

impl Category {
    /// Value written to the card's `data-card-type` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Tech => "tech",
        }
    }
}

/// A labeled link that floats in the swarm. A card's identity is its index
/// in the catalog; the particle at the same index carries its kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub href: &'static str,
    pub category: Category,
}

const fn card(label: &'static str, category: Category) -> Card {
    Card {
        label,
        href: "#services",
        category,
    }
}

/// Services first, then the technology tags.
pub const DEFAULT_CATALOG: &[Card] = &[
    card("3D Animation", Category::Service),
    card("Web Applications", Category::Service),
    card("Websites", Category::Service),
    card("AR/VR Experiences", Category::Service),
    card("AI Automations", Category::Service),
    card("Branding & Design", Category::Service),
    card("Character Design", Category::Tech),
    card("Motion Graphics", Category::Tech),
    card("React", Category::Tech),
    card("Next.js", Category::Tech),
    card("Node.js", Category::Tech),
    card("Unity", Category::Tech),
    card("WebXR", Category::Tech),
    card("Machine Learning", Category::Tech),
    card("UI/UX Design", Category::Tech),
    card("WordPress", Category::Tech),
    card("Blender", Category::Tech),
    card("LLM Integration", Category::Tech),
    card("Spatial Computing", Category::Tech),
    card("E-Commerce", Category::Tech),
];
