// DOM contract shared with the page markup and stylesheet.

// Element ids
pub const HERO_ID: &str = "hero"; // geometry, pointer and visibility source
pub const SWARM_CONTAINER_ID: &str = "swarmContainer"; // cards are appended here

// Card markup
pub const CARD_TAG: &str = "a";
pub const CARD_CLASS: &str = "swarm-card";
pub const CARD_ACTIVE_CLASS: &str = "swarm-card--active";
pub const CARD_TYPE_ATTR: &str = "data-card-type";

// Tuning overrides, e.g. `data-swarm-max-speed="6"` on the container
pub const SWARM_ATTR_PREFIX: &str = "data-swarm-";

// Environment queries that switch to the static layout
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
