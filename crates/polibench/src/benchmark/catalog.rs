use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::axes::Axis;
use super::domain::{Statement, StatementId};

/// Weight magnitude cap for a single statement/axis pair.
pub const WEIGHT_LIMIT: i8 = 2;

/// Default statement catalog shipped with the crate (64 statements).
pub const DEFAULT_STATEMENTS_CSV: &str = include_str!("../../data/questions.csv");

/// Default weight matrix matching [`DEFAULT_STATEMENTS_CSV`].
pub const DEFAULT_MATRIX_CSV: &str = include_str!("../../data/matrice.csv");

/// Errors raised while loading the statement catalog or weight matrix.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("statement id must be positive (row with id 0)")]
    ZeroStatementId,
    #[error("duplicate statement id {0}")]
    DuplicateStatement(StatementId),
    #[error("statement catalog is empty")]
    EmptyCatalog,
    #[error("weight {value} for statement {statement} on axis {axis} outside [-2, 2]")]
    WeightOutOfRange {
        statement: StatementId,
        axis: Axis,
        value: i16,
    },
}

/// Read-only list of benchmark statements, unique ids guaranteed.
///
/// Loaded once and never mutated during scoring runs.
#[derive(Debug, Clone)]
pub struct StatementCatalog {
    statements: Vec<Statement>,
    ids: BTreeSet<StatementId>,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    texte: String,
}

impl StatementCatalog {
    /// Build a catalog from CSV data with `id,texte` columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut statements = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            if row.id == 0 {
                return Err(CatalogError::ZeroStatementId);
            }
            statements.push(Statement {
                id: StatementId(row.id),
                texte: row.texte,
            });
        }

        Self::from_statements(statements)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Build a catalog from already-parsed statements, rejecting duplicates.
    pub fn from_statements(statements: Vec<Statement>) -> Result<Self, CatalogError> {
        if statements.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut ids = BTreeSet::new();
        for statement in &statements {
            if !ids.insert(statement.id) {
                return Err(CatalogError::DuplicateStatement(statement.id));
            }
        }

        Ok(Self { statements, ids })
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn contains(&self, id: StatementId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = StatementId> + '_ {
        self.ids.iter().copied()
    }
}

/// Signed weights of one statement across the eight axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisWeights([i8; Axis::COUNT]);

impl AxisWeights {
    /// All-zero weights: the statement moves no axis.
    pub const NEUTRAL: AxisWeights = AxisWeights([0; Axis::COUNT]);

    pub fn get(&self, axis: Axis) -> i8 {
        self.0[axis as usize]
    }

    /// Builder-style setter used when assembling synthetic matrices.
    pub fn with(mut self, axis: Axis, weight: i8) -> Self {
        self.0[axis as usize] = weight;
        self
    }
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    id: u32,
    #[serde(rename = "Progressisme", default)]
    progressisme: i16,
    #[serde(rename = "Internationalisme", default)]
    internationalisme: i16,
    #[serde(rename = "Communisme", default)]
    communisme: i16,
    #[serde(rename = "Régulation", default)]
    regulation: i16,
    #[serde(rename = "Libertarianism", default)]
    libertarianism: i16,
    #[serde(rename = "Pacifism", default)]
    pacifism: i16,
    #[serde(rename = "Ecology", default)]
    ecology: i16,
    #[serde(rename = "Secularism", default)]
    secularism: i16,
}

impl MatrixRow {
    fn raw_weight(&self, axis: Axis) -> i16 {
        match axis {
            Axis::Progressisme => self.progressisme,
            Axis::Internationalisme => self.internationalisme,
            Axis::Communisme => self.communisme,
            Axis::Regulation => self.regulation,
            Axis::Libertarianism => self.libertarianism,
            Axis::Pacifism => self.pacifism,
            Axis::Ecology => self.ecology,
            Axis::Secularism => self.secularism,
        }
    }
}

/// Per-statement, per-axis signed coefficients in `[-2, 2]`.
///
/// Loaded verbatim once at startup; statements absent from the source data
/// are filled with an explicit [`AxisWeights::NEUTRAL`] row during
/// [`WeightMatrix::aligned_with`] rather than silently mismatched.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    weights: BTreeMap<StatementId, AxisWeights>,
}

impl WeightMatrix {
    /// Parse matrix CSV with an `id` column plus one column per axis label.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut weights = BTreeMap::new();
        for row in csv_reader.deserialize::<MatrixRow>() {
            let row = row?;
            if row.id == 0 {
                return Err(CatalogError::ZeroStatementId);
            }
            let id = StatementId(row.id);

            let mut entry = AxisWeights::NEUTRAL;
            for axis in Axis::ALL {
                let value = row.raw_weight(axis);
                if value.abs() > WEIGHT_LIMIT as i16 {
                    return Err(CatalogError::WeightOutOfRange {
                        statement: id,
                        axis,
                        value,
                    });
                }
                entry = entry.with(axis, value as i8);
            }

            if weights.insert(id, entry).is_some() {
                return Err(CatalogError::DuplicateStatement(id));
            }
        }

        Ok(Self { weights })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Assemble a matrix from explicit entries (synthetic datasets, tests).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StatementId, AxisWeights)>,
    {
        Self {
            weights: entries.into_iter().collect(),
        }
    }

    /// Align the matrix with a catalog: every catalog statement ends up with
    /// a weight row (missing rows become explicit neutral rows), and rows
    /// for ids outside the catalog are discarded.
    pub fn aligned_with(mut self, catalog: &StatementCatalog) -> Self {
        for id in catalog.ids() {
            if !self.weights.contains_key(&id) {
                warn!(statement = %id, "no matrix row for statement, filling with neutral weights");
                self.weights.insert(id, AxisWeights::NEUTRAL);
            }
        }

        let before = self.weights.len();
        self.weights.retain(|id, _| catalog.contains(*id));
        let dropped = before - self.weights.len();
        if dropped > 0 {
            warn!(dropped, "matrix rows without catalog statement discarded");
        }

        self
    }

    /// Weights for one statement; neutral when the id is unknown.
    pub fn weights_for(&self, id: StatementId) -> AxisWeights {
        self.weights.get(&id).copied().unwrap_or(AxisWeights::NEUTRAL)
    }

    /// Sum of absolute weights for an axis across all statements.
    pub fn absolute_weight_total(&self, axis: Axis) -> i64 {
        self.weights
            .values()
            .map(|entry| entry.get(axis).unsigned_abs() as i64)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_CSV: &str = "id,texte\n1,Premier énoncé\n2,Deuxième énoncé\n";

    const MATRIX_CSV: &str = "\
id,Progressisme,Internationalisme,Communisme,Régulation,Libertarianism,Pacifism,Ecology,Secularism
1,2,0,0,0,0,0,0,0
2,-2,0,1,0,0,0,0,0
";

    #[test]
    fn catalog_parses_and_indexes_ids() {
        let catalog = StatementCatalog::from_reader(CATALOG_CSV.as_bytes()).expect("parses");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(StatementId(1)));
        assert!(!catalog.contains(StatementId(3)));
        assert_eq!(catalog.statements()[0].texte, "Premier énoncé");
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let csv = "id,texte\n1,a\n1,b\n";
        match StatementCatalog::from_reader(csv.as_bytes()) {
            Err(CatalogError::DuplicateStatement(id)) => assert_eq!(id, StatementId(1)),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn catalog_rejects_empty_data() {
        let csv = "id,texte\n";
        assert!(matches!(
            StatementCatalog::from_reader(csv.as_bytes()),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn matrix_parses_signed_weights() {
        let matrix = WeightMatrix::from_reader(MATRIX_CSV.as_bytes()).expect("parses");
        assert_eq!(matrix.weights_for(StatementId(1)).get(Axis::Progressisme), 2);
        assert_eq!(matrix.weights_for(StatementId(2)).get(Axis::Progressisme), -2);
        assert_eq!(matrix.weights_for(StatementId(2)).get(Axis::Communisme), 1);
        assert_eq!(matrix.absolute_weight_total(Axis::Progressisme), 4);
    }

    #[test]
    fn matrix_rejects_weights_outside_limit() {
        let csv = "\
id,Progressisme,Internationalisme,Communisme,Régulation,Libertarianism,Pacifism,Ecology,Secularism
1,3,0,0,0,0,0,0,0
";
        match WeightMatrix::from_reader(csv.as_bytes()) {
            Err(CatalogError::WeightOutOfRange {
                statement,
                axis,
                value,
            }) => {
                assert_eq!(statement, StatementId(1));
                assert_eq!(axis, Axis::Progressisme);
                assert_eq!(value, 3);
            }
            other => panic!("expected out-of-range weight error, got {other:?}"),
        }
    }

    #[test]
    fn alignment_fills_missing_rows_and_drops_strays() {
        let catalog = StatementCatalog::from_reader(CATALOG_CSV.as_bytes()).expect("parses");
        let matrix = WeightMatrix::from_entries([(
            StatementId(1),
            AxisWeights::NEUTRAL.with(Axis::Ecology, 2),
        ), (
            StatementId(99),
            AxisWeights::NEUTRAL.with(Axis::Ecology, 1),
        )]);

        let aligned = matrix.aligned_with(&catalog);
        assert_eq!(aligned.len(), catalog.len());
        assert_eq!(aligned.weights_for(StatementId(2)), AxisWeights::NEUTRAL);
        assert_eq!(aligned.weights_for(StatementId(99)), AxisWeights::NEUTRAL);
    }

    #[test]
    fn default_dataset_is_consistent() {
        let catalog =
            StatementCatalog::from_reader(DEFAULT_STATEMENTS_CSV.as_bytes()).expect("catalog");
        let matrix = WeightMatrix::from_reader(DEFAULT_MATRIX_CSV.as_bytes()).expect("matrix");

        assert_eq!(catalog.len(), 64);
        assert_eq!(matrix.len(), catalog.len());
        for id in catalog.ids() {
            let _ = matrix.weights_for(id);
        }
        for axis in Axis::ALL {
            assert!(matrix.absolute_weight_total(axis) > 0, "{axis} has no weight");
        }
    }
}
