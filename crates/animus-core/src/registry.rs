/// The page sections, in layout order. The layout must render an element
/// whose DOM id equals `Section::id` for each of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Timeline,
    Locations,
    Characters,
    Weapons,
    Story,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Timeline,
        Section::Locations,
        Section::Characters,
        Section::Weapons,
        Section::Story,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Timeline => "timeline",
            Section::Locations => "locations",
            Section::Characters => "characters",
            Section::Weapons => "weapons",
            Section::Story => "story",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Navbar link text.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Animus",
            Section::Timeline => "Timeline",
            Section::Locations => "Locations",
            Section::Characters => "Assassins",
            Section::Weapons => "Artifacts",
            Section::Story => "Story",
        }
    }

    /// HUD location readout.
    pub fn hud_name(self) -> &'static str {
        match self {
            Section::Hero => "ANIMUS LOADING BAY",
            Section::Timeline => "HISTORICAL ARCHIVES",
            Section::Locations => "GEOGRAPHICAL DATA",
            Section::Characters => "SUBJECT PROFILES",
            Section::Weapons => "ARTIFACT STORAGE",
            Section::Story => "NARRATIVE CONSTRUCT",
        }
    }

    pub fn coordinates(self) -> Coordinates {
        let (lat, lng) = match self {
            Section::Hero => (40.7128, -74.006),
            Section::Timeline => (43.7696, 11.2558),
            Section::Locations => (41.9028, 12.4964),
            Section::Characters => (48.8566, 2.3522),
            Section::Weapons => (51.5074, -0.1278),
            Section::Story => (40.4168, -3.7038),
        };
        Coordinates { lat, lng }
    }
}
