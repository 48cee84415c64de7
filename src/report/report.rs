use super::*;
use crate::PayoffTable;
use crate::Seed;
use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Everything an external renderer needs from a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub seed: Seed,
    pub rounds: usize,
    pub payoff_matrix: PayoffTable,
    /// In configuration order.
    pub standings: Vec<Standing>,
    /// One per unordered pair, in scheduling order.
    pub matchups: Vec<Matchup>,
}

impl Report {
    /// Standings sorted by descending score; ties keep configuration order.
    pub fn ranking(&self) -> Vec<&Standing> {
        let mut ranking = self.standings.iter().collect::<Vec<_>>();
        ranking.sort_by(|a, b| b.score.cmp(&a.score));
        ranking
    }

    /// Writes `standings.json` plus one `<a>_vs_<b>.json` per pairing under `dir`.
    /// Fails without writing anything if two pairings map to the same file name.
    pub fn save(&self, dir: impl AsRef<Path>) -> anyhow::Result<()> {
        let dir = dir.as_ref();
        let mut stems = std::collections::BTreeSet::new();
        for matchup in self.matchups.iter() {
            if !stems.insert(matchup.stem()) {
                anyhow::bail!(
                    "{} vs {} would overwrite another artifact named {}.json",
                    matchup.left.name,
                    matchup.right.name,
                    matchup.stem()
                );
            }
        }
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let standings = serde_json::json!({
            "seed": self.seed,
            "rounds": self.rounds,
            "payoff_matrix": self.payoff_matrix,
            "standings": self.standings,
        });
        Self::write(&dir.join("standings.json"), &standings)?;
        for matchup in self.matchups.iter() {
            Self::write(&dir.join(format!("{}.json", matchup.stem())), matchup)?;
        }
        log::info!(
            "saved {} matchups and standings to {}",
            self.matchups.len(),
            dir.display()
        );
        Ok(())
    }

    fn write(path: &Path, value: &impl Serialize) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("flush {}", path.display()))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for matchup in self.matchups.iter() {
            writeln!(f, "{}\n", matchup)?;
        }
        let ranking = self.ranking();
        let top = ranking.first().map(|s| s.score.max(1)).unwrap_or(1);
        writeln!(f, "{}", "SCORES".bold())?;
        for standing in ranking {
            let bar = (standing.score.max(0) as i128 * 40 / top as i128) as usize;
            writeln!(f, "{} {}", standing, "█".repeat(bar).cyan())?;
        }
        Ok(())
    }
}
