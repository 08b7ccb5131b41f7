//! The load → aggregate pipeline shared by every command.
//!
//! Each stage is memoized in caches the caller owns and passes in. Keys are
//! content hashes: the raw bytes of the input files for loading and the
//! per-season aggregates, the match table alone for toss statistics.

use std::sync::Arc;

use crate::{
    core::{CacheStats, ContentHash, MemoCache},
    data::{
        loader::{deliveries_from_reader, matches_from_reader, read_input},
        DataPaths, Tables,
    },
    stats::{season_stats, toss_analysis, SeasonStats, TossAnalysis},
    Result,
};

/// Memo tables for every pipeline stage.
pub struct PipelineCaches {
    pub tables: MemoCache<Arc<Tables>>,
    pub season_stats: MemoCache<SeasonStats>,
    pub toss: MemoCache<TossAnalysis>,
}

impl PipelineCaches {
    pub fn new(capacity: usize) -> Self {
        Self {
            tables: MemoCache::new("tables", capacity),
            season_stats: MemoCache::new("season_stats", capacity),
            toss: MemoCache::new("toss", capacity),
        }
    }

    pub fn stats(&self) -> Result<Vec<(&'static str, CacheStats)>> {
        Ok(vec![
            (self.tables.name(), self.tables.stats()?),
            (self.season_stats.name(), self.season_stats.stats()?),
            (self.toss.name(), self.toss.stats()?),
        ])
    }
}

impl Default for PipelineCaches {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Loaded tables plus the hashes identifying their content.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub deliveries_hash: ContentHash,
    pub matches_hash: ContentHash,
    pub tables: Arc<Tables>,
}

impl LoadedInput {
    /// Key for anything derived from both tables.
    pub fn combined_hash(&self) -> ContentHash {
        ContentHash::combine(&[self.deliveries_hash, self.matches_hash])
    }
}

/// Everything the presenter needs.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub input: LoadedInput,
    pub season_stats: SeasonStats,
    pub toss: TossAnalysis,
}

/// Runs the pipeline against injected caches.
pub struct Pipeline<'c> {
    caches: &'c PipelineCaches,
}

impl<'c> Pipeline<'c> {
    pub fn new(caches: &'c PipelineCaches) -> Self {
        Self { caches }
    }

    /// Read both files and parse them, reusing the parsed tables when the
    /// bytes are unchanged since an earlier load.
    pub fn load(&self, paths: &DataPaths) -> Result<LoadedInput> {
        let deliveries_bytes = read_input(&paths.deliveries)?;
        let matches_bytes = read_input(&paths.matches)?;

        let deliveries_hash = ContentHash::of_bytes(&deliveries_bytes);
        let matches_hash = ContentHash::of_bytes(&matches_bytes);
        let key = ContentHash::combine(&[deliveries_hash, matches_hash]);

        let tables = self.caches.tables.get_or_try_insert_with(key, || {
            let deliveries =
                deliveries_from_reader(deliveries_bytes.as_slice(), &paths.deliveries)?;
            let matches = matches_from_reader(matches_bytes.as_slice(), &paths.matches)?;
            Ok(Arc::new(Tables::new(deliveries, matches)))
        })?;

        Ok(LoadedInput {
            deliveries_hash,
            matches_hash,
            tables,
        })
    }

    /// Wrap tables built in memory, hashing their serialized content.
    pub fn from_tables(&self, tables: Tables) -> Result<LoadedInput> {
        Ok(LoadedInput {
            deliveries_hash: ContentHash::of(&tables.deliveries)?,
            matches_hash: ContentHash::of(&tables.matches)?,
            tables: Arc::new(tables),
        })
    }

    pub fn aggregate(&self, input: LoadedInput) -> Result<PipelineOutput> {
        let stats = self
            .caches
            .season_stats
            .get_or_try_insert_with(input.combined_hash(), || {
                Ok(season_stats(&input.tables))
            })?;

        let toss = self
            .caches
            .toss
            .get_or_try_insert_with(input.matches_hash, || {
                Ok(toss_analysis(&input.tables.matches))
            })?;

        log::info!(
            "Aggregated {} seasons from {} matches and {} deliveries",
            stats.matches_per_season.len(),
            input.tables.matches.len(),
            input.tables.deliveries.len()
        );

        Ok(PipelineOutput {
            input,
            season_stats: stats,
            toss,
        })
    }

    /// Full run: load then aggregate.
    pub fn run(&self, paths: &DataPaths) -> Result<PipelineOutput> {
        let input = self.load(paths)?;
        self.aggregate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use std::fs;
    use tempfile::TempDir;

    const DELIVERIES: &str = "ID,total_run\n1,100\n2,60\n2,60\n3,90\n";
    const MATCHES: &str = "\
ID,Date,Season,TossWinner,TossDecision,WinningTeam
1,2008-04-18,2007/08,A,bat,A
2,2008-04-19,2007/08,B,field,A
3,2009-04-18,2009,C,field,C
";

    fn write_inputs(dir: &TempDir, matches: &str) -> DataPaths {
        fs::write(dir.path().join("deliveries.csv"), DELIVERIES).unwrap();
        fs::write(dir.path().join("matches.csv"), matches).unwrap();
        DataPaths::in_dir(dir.path())
    }

    #[test]
    fn test_run_computes_aggregates() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, MATCHES);
        let caches = PipelineCaches::default();

        let output = Pipeline::new(&caches).run(&paths).unwrap();

        let s2008 = crate::Season::new(2008);
        assert_eq!(output.season_stats.matches_per_season[&s2008], 2);
        assert_eq!(output.season_stats.runs_per_season[&s2008], 220);
        assert_eq!(output.season_stats.runs_per_match[&s2008], 110.0);
        assert_eq!(output.toss.outcome.yes, 2);
        assert_eq!(output.toss.outcome.no, 1);
    }

    #[test]
    fn test_repeat_run_hits_every_cache() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, MATCHES);
        let caches = PipelineCaches::default();
        let pipeline = Pipeline::new(&caches);

        let first = pipeline.run(&paths).unwrap();
        let second = pipeline.run(&paths).unwrap();
        assert_eq!(first.season_stats, second.season_stats);
        assert!(Arc::ptr_eq(&first.input.tables, &second.input.tables));

        for (name, stats) in caches.stats().unwrap() {
            assert_eq!(stats.misses, 1, "{} should compute once", name);
            assert_eq!(stats.hits, 1, "{} should hit once", name);
        }
    }

    #[test]
    fn test_changed_input_recomputes() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, MATCHES);
        let caches = PipelineCaches::default();
        let pipeline = Pipeline::new(&caches);

        pipeline.run(&paths).unwrap();
        write_inputs(&dir, &MATCHES.replace("C,field,C", "C,bat,C"));
        let output = pipeline.run(&paths).unwrap();

        assert_eq!(caches.season_stats.stats().unwrap().misses, 2);
        assert_eq!(output.toss.decision_shares[0].count, 2);
    }

    #[test]
    fn test_from_tables_matches_file_results() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, MATCHES);
        let caches = PipelineCaches::default();
        let pipeline = Pipeline::new(&caches);

        let from_files = pipeline.run(&paths).unwrap();
        let tables = (*from_files.input.tables).clone();
        let from_memory = pipeline
            .aggregate(pipeline.from_tables(tables).unwrap())
            .unwrap();

        assert_eq!(from_files.season_stats, from_memory.season_stats);
        assert_eq!(from_files.toss, from_memory.toss);
    }

    #[test]
    fn test_missing_file_fails_whole_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("deliveries.csv"), DELIVERIES).unwrap();
        let caches = PipelineCaches::default();

        let err = Pipeline::new(&caches)
            .run(&DataPaths::in_dir(dir.path()))
            .unwrap_err();
        assert!(matches!(err, StatsError::FileAccess { .. }));
    }

    #[test]
    fn test_format_error_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir, "ID,Date\n1,2008-04-18\n");
        let caches = PipelineCaches::default();

        let err = Pipeline::new(&caches).run(&paths).unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(caches.tables.stats().unwrap().len, 0);
    }
}
