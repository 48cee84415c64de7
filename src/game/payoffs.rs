use super::*;
use crate::Error;
use crate::Points;
use std::collections::BTreeMap;

/// Payoff table as it appears in configuration:
/// row action → column action → `[row payoff, column payoff]`.
pub type PayoffTable = BTreeMap<String, BTreeMap<String, [Points; 2]>>;

/// Total map from an ordered pair of actions to the pair of payoffs.
///
/// Values come from configuration; only the lookup contract is fixed here.
/// Tables are expected to be symmetric under swapping roles, i.e.
/// `payoffs(a, b) == swap(payoffs(b, a))`, but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payoffs([[(Points, Points); 2]; 2]);

impl Payoffs {
    /// Build from the four outcomes, each given as (row, column) payoffs.
    pub fn new(
        cc: (Points, Points),
        cd: (Points, Points),
        dc: (Points, Points),
        dd: (Points, Points),
    ) -> Self {
        Self([[cc, cd], [dc, dd]])
    }
    /// Payoffs for the first and second player of a round.
    pub fn payoffs(&self, a: Action, b: Action) -> (Points, Points) {
        self.0[a.index()][b.index()]
    }
    /// Whether swapping the players swaps their payoffs for every outcome.
    pub fn is_symmetric(&self) -> bool {
        Action::ALL.iter().all(|&a| {
            Action::ALL.iter().all(|&b| {
                let (x, y) = self.payoffs(a, b);
                self.payoffs(b, a) == (y, x)
            })
        })
    }
}

/// The textbook matrix: T=5, R=3, P=1, S=0.
impl Default for Payoffs {
    fn default() -> Self {
        Self::new((3, 3), (0, 5), (5, 0), (1, 1))
    }
}

impl TryFrom<&PayoffTable> for Payoffs {
    type Error = Error;
    fn try_from(table: &PayoffTable) -> Result<Self, Self::Error> {
        let mut cells = [[None; 2]; 2];
        for (row, cols) in table {
            let a = Action::try_from(row.as_str())
                .map_err(|e| Error::Configuration(format!("payoff_matrix: {}", e)))?;
            for (col, &[p1, p2]) in cols {
                let b = Action::try_from(col.as_str())
                    .map_err(|e| Error::Configuration(format!("payoff_matrix.{}: {}", row, e)))?;
                let cell = &mut cells[a.index()][b.index()];
                if cell.is_some() {
                    return Err(Error::Configuration(format!(
                        "payoff_matrix has duplicate entry {}/{}",
                        a.name(),
                        b.name()
                    )));
                }
                *cell = Some((p1, p2));
            }
        }
        let mut matrix = [[(0, 0); 2]; 2];
        for a in Action::ALL {
            for b in Action::ALL {
                matrix[a.index()][b.index()] = cells[a.index()][b.index()].ok_or_else(|| {
                    Error::Configuration(format!(
                        "payoff_matrix is missing {}/{}",
                        a.name(),
                        b.name()
                    ))
                })?;
            }
        }
        Ok(Self(matrix))
    }
}

impl From<&Payoffs> for PayoffTable {
    fn from(payoffs: &Payoffs) -> Self {
        Action::ALL
            .iter()
            .map(|&a| {
                let cols = Action::ALL
                    .iter()
                    .map(|&b| payoffs.payoffs(a, b))
                    .map(|(p1, p2)| [p1, p2]);
                let cols = Action::ALL
                    .iter()
                    .map(|b| b.name().to_string())
                    .zip(cols)
                    .collect::<BTreeMap<_, _>>();
                (a.name().to_string(), cols)
            })
            .collect()
    }
}

impl std::fmt::Display for Payoffs {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>10}", "")?;
        for b in Action::ALL {
            write!(f, "{:>10}", b.name())?;
        }
        for a in Action::ALL {
            write!(f, "\n{:>10}", a.name())?;
            for b in Action::ALL {
                let (p1, p2) = self.payoffs(a, b);
                write!(f, "{:>10}", format!("{},{}", p1, p2))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> PayoffTable {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn standard_lookup() {
        let payoffs = Payoffs::default();
        assert_eq!(payoffs.payoffs(Action::Cooperate, Action::Cooperate), (3, 3));
        assert_eq!(payoffs.payoffs(Action::Cooperate, Action::Defect), (0, 5));
        assert_eq!(payoffs.payoffs(Action::Defect, Action::Cooperate), (5, 0));
        assert_eq!(payoffs.payoffs(Action::Defect, Action::Defect), (1, 1));
        assert!(payoffs.is_symmetric());
    }

    #[test]
    fn from_complete_table() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "defect":    { "cooperate": [5, 0], "defect": [1, 1] }
            }"#,
        );
        assert_eq!(Payoffs::try_from(&table).unwrap(), Payoffs::default());
    }

    #[test]
    fn missing_entry_is_an_error() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "defect":    { "cooperate": [5, 0] }
            }"#,
        );
        match Payoffs::try_from(&table) {
            Err(Error::Configuration(msg)) => assert!(msg.contains("defect/defect")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_action_key_is_an_error() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "defect":    { "cooperate": [5, 0], "defect": [1, 1] },
                "betray":    { "cooperate": [9, 9] }
            }"#,
        );
        assert!(matches!(
            Payoffs::try_from(&table),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn conflicting_spellings_are_an_error() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "defect":    { "cooperate": [5, 0], "defect": [1, 1], "Defect": [-7, -7] }
            }"#,
        );
        match Payoffs::try_from(&table) {
            Err(Error::Configuration(msg)) => {
                assert!(msg.contains("duplicate entry defect/defect"), "{}", msg)
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_rows_are_an_error() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "COOPERATE": { "cooperate": [9, 9] },
                "defect":    { "cooperate": [5, 0], "defect": [1, 1] }
            }"#,
        );
        assert!(matches!(
            Payoffs::try_from(&table),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn abbreviated_keys_are_an_error() {
        let table = table(
            r#"{
                "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
                "defect":    { "cooperate": [5, 0], "d": [100, 100] }
            }"#,
        );
        assert!(matches!(
            Payoffs::try_from(&table),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn negative_and_asymmetric_payoffs_are_allowed() {
        let payoffs = Payoffs::new((2, 2), (-3, 4), (4, -2), (-1, -1));
        assert_eq!(payoffs.payoffs(Action::Cooperate, Action::Defect), (-3, 4));
        assert!(!payoffs.is_symmetric());
    }

    #[test]
    fn table_export_reads_back() {
        let payoffs = Payoffs::new((2, 2), (-3, 4), (4, -3), (-1, -1));
        let table = PayoffTable::from(&payoffs);
        assert_eq!(table["defect"]["cooperate"], [4, -3]);
        assert_eq!(Payoffs::try_from(&table).unwrap(), payoffs);
    }
}
