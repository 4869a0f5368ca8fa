use serde::{Deserialize, Serialize};

/// The eight political dimensions scored independently by the benchmark.
///
/// The set is closed and ordered; labels match the column headers of the
/// historical weight matrix dataset, hence the mixed French/English naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    Progressisme,
    Internationalisme,
    Communisme,
    #[serde(rename = "Régulation")]
    Regulation,
    Libertarianism,
    Pacifism,
    Ecology,
    Secularism,
}

impl Axis {
    /// Every axis, in canonical scoring order.
    pub const ALL: [Axis; 8] = [
        Axis::Progressisme,
        Axis::Internationalisme,
        Axis::Communisme,
        Axis::Regulation,
        Axis::Libertarianism,
        Axis::Pacifism,
        Axis::Ecology,
        Axis::Secularism,
    ];

    /// Number of axes in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    pub const fn label(self) -> &'static str {
        match self {
            Axis::Progressisme => "Progressisme",
            Axis::Internationalisme => "Internationalisme",
            Axis::Communisme => "Communisme",
            Axis::Regulation => "Régulation",
            Axis::Libertarianism => "Libertarianism",
            Axis::Pacifism => "Pacifism",
            Axis::Ecology => "Ecology",
            Axis::Secularism => "Secularism",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
