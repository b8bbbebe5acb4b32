use std::fmt::{Display, Formatter};

/// Utility company whose bills are being projected.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Utility {
    /// Southern California Edison.
    #[default]
    Sce,

    /// Los Angeles Department of Water and Power.
    Ladwp,
}

impl Utility {
    pub const ALL: [Self; 2] = [Self::Sce, Self::Ladwp];

    /// Identifier used in share links.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sce => "sce",
            Self::Ladwp => "ladwp",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sce => "SCE",
            Self::Ladwp => "LADWP",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sce => "Southern California Edison",
            Self::Ladwp => "Los Angeles Department of Water and Power",
        }
    }

    /// Case-insensitive lookup by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|utility| utility.id().eq_ignore_ascii_case(id))
    }

    /// Resolve the selection from a share link.
    ///
    /// The query parameter wins over the fragment; anything unrecognised selects the default.
    #[must_use]
    pub fn from_location(query: Option<&str>, fragment: Option<&str>) -> Self {
        query
            .and_then(Self::from_id)
            .or_else(|| fragment.and_then(Self::from_id))
            .unwrap_or_default()
    }
}

impl Display for Utility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
