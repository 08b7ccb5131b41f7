//! Unit tests for CSV loading

use super::*;
use std::fs;
use tempfile::TempDir;

const DELIVERIES_CSV: &str = "\
ID,innings,overs,ballnumber,batter,total_run
1001,1,0,1,SC Ganguly,1
1001,1,0,2,BB McCullum,4
1002,1,0,1,PA Patel,6
";

const MATCHES_CSV: &str = "\
ID,City,Date,Season,Team1,Team2,TossWinner,TossDecision,WinningTeam
1001,Bangalore,2008-04-18,2007/08,Royal Challengers Bangalore,Kolkata Knight Riders,Royal Challengers Bangalore,field,Kolkata Knight Riders
1002,Chandigarh,19/04/2008,2007/08,Kings XI Punjab,Chennai Super Kings,Chennai Super Kings,bat,Chennai Super Kings
1003,Bangalore,2009-04-20,2009,Royal Challengers Bangalore,Rajasthan Royals,Rajasthan Royals,field,NA
";

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn test_deliveries_from_reader() {
        let deliveries =
            deliveries_from_reader(DELIVERIES_CSV.as_bytes(), Path::new("deliveries.csv")).unwrap();

        assert_eq!(deliveries.len(), 3);
        assert_eq!(deliveries[0], DeliveryRecord::new(MatchId::new(1001), 1));
        assert_eq!(deliveries[2], DeliveryRecord::new(MatchId::new(1002), 6));
    }

    #[test]
    fn test_deliveries_header_aliases() {
        let csv_data = "match_id,Total Runs\n7,2\n";
        let deliveries =
            deliveries_from_reader(csv_data.as_bytes(), Path::new("d.csv")).unwrap();
        assert_eq!(deliveries, vec![DeliveryRecord::new(MatchId::new(7), 2)]);
    }

    #[test]
    fn test_matches_from_reader() {
        let matches =
            matches_from_reader(MATCHES_CSV.as_bytes(), Path::new("matches.csv")).unwrap();

        assert_eq!(matches.len(), 3);

        let first = &matches[0];
        assert_eq!(first.id, MatchId::new(1001));
        assert_eq!(first.season, Season::new(2008));
        assert_eq!(first.source_season.as_deref(), Some("2007/08"));
        assert_eq!(
            first.toss_winner.as_deref(),
            Some("Royal Challengers Bangalore")
        );
        assert_eq!(first.toss_decision, Some(TossDecision::Field));
        assert_eq!(first.winning_team.as_deref(), Some("Kolkata Knight Riders"));

        // Day-first date format
        assert_eq!(matches[1].date, NaiveDate::from_ymd_opt(2008, 4, 19).unwrap());
        assert_eq!(matches[1].season, Season::new(2008));

        // "NA" winner is a no-result
        assert_eq!(matches[2].winning_team, None);
        assert_eq!(matches[2].season, Season::new(2009));
    }

    #[test]
    fn test_season_column_is_overridden_by_date() {
        let csv_data = "\
id,date,season,toss_winner,toss_decision,winning_team
1,2010-03-12,2009/10,A,bat,A
";
        let matches = matches_from_reader(csv_data.as_bytes(), Path::new("m.csv")).unwrap();
        assert_eq!(matches[0].season, Season::new(2010));
    }

    #[test]
    fn test_missing_delivery_column() {
        let csv_data = "ID,batter\n1,SC Ganguly\n";
        let err = deliveries_from_reader(csv_data.as_bytes(), Path::new("d.csv")).unwrap_err();

        match err {
            StatsError::MissingColumn { column, path } => {
                assert_eq!(column, "total_runs");
                assert_eq!(path, PathBuf::from("d.csv"));
            }
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_match_column() {
        let csv_data = "ID,Date,Season,TossWinner,WinningTeam\n1,2008-04-18,2008,A,A\n";
        let err = matches_from_reader(csv_data.as_bytes(), Path::new("m.csv")).unwrap_err();

        match err {
            StatsError::MissingColumn { column, .. } => assert_eq!(column, "TossDecision"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_runs_value() {
        let csv_data = "ID,total_run\n1,4\n1,four\n";
        let err = deliveries_from_reader(csv_data.as_bytes(), Path::new("d.csv")).unwrap_err();

        match err {
            StatsError::InvalidValue {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "total_runs");
                assert_eq!(value, "four");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_value() {
        let csv_data = "\
ID,Date,Season,TossWinner,TossDecision,WinningTeam
1,someday,2008,A,bat,A
";
        let err = matches_from_reader(csv_data.as_bytes(), Path::new("m.csv")).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_invalid_toss_decision() {
        let csv_data = "\
ID,Date,Season,TossWinner,TossDecision,WinningTeam
1,2008-04-18,2008,A,coin,A
";
        let err = matches_from_reader(csv_data.as_bytes(), Path::new("m.csv")).unwrap_err();
        match err {
            StatsError::InvalidValue { column, .. } => assert_eq!(column, "TossDecision"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 29);
        assert_eq!(parse_date("2023-05-29"), expected);
        assert_eq!(parse_date("29/05/2023"), expected);
        assert_eq!(parse_date("29-05-2023"), expected);
        assert_eq!(parse_date("2023-05-29 00:00:00"), expected);
        assert_eq!(parse_date("May 29"), None);
    }

    #[test]
    fn test_load_tables_from_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("deliveries.csv"), DELIVERIES_CSV).unwrap();
        fs::write(temp_dir.path().join("matches.csv"), MATCHES_CSV).unwrap();

        let tables = load_tables(&DataPaths::in_dir(temp_dir.path())).unwrap();
        assert_eq!(tables.deliveries.len(), 3);
        assert_eq!(tables.matches.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let err = load_deliveries(&path).unwrap_err();
        match err {
            StatsError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected FileAccess, got {:?}", other),
        }
    }

    #[test]
    fn test_load_tables_fails_when_matches_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("deliveries.csv"), DELIVERIES_CSV).unwrap();

        let err = load_tables(&DataPaths::in_dir(temp_dir.path())).unwrap_err();
        assert!(matches!(err, StatsError::FileAccess { .. }));
    }
}
