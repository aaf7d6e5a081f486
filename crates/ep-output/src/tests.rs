//! Integration tests for ep-output.

#[cfg(test)]
fn snap_row(agent_id: u32, tick: u64) -> crate::AgentSnapshotRow {
    crate::AgentSnapshotRow {
        agent_id,
        label:  format!("mesh{agent_id}"),
        tick,
        x:      agent_id as f64,
        y:      -1.5,
        z:      0.25,
        health: ep_core::HealthState::Infected,
    }
}

#[cfg(test)]
fn summary_row(tick: u64) -> crate::TickSummaryRow {
    crate::TickSummaryRow {
        tick,
        elapsed_days:   (tick + 1) as f64 * 0.1,
        healthy:        90,
        infected:       7,
        quarantined:    3,
        newly_infected: 2,
        moved:          5,
        admitted:       1,
        discharged:     0,
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::{snap_row, summary_row};
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "label", "tick", "x", "y", "z", "health"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2[..3], ["tick", "elapsed_days", "healthy"]);
        assert_eq!(headers2.len(), 9);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "mesh1");
        assert_eq!(&rows[1][2], "5");
        assert_eq!(&rows[1][4], "-1.5");
        assert_eq!(&rows[1][6], "infected");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.40");
        assert_eq!(&rows[0][4], "3"); // quarantined
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use ep_core::{SimConfig, SimSpeed, Vec3};
    use ep_sim::{Outcome, SimBuilder};
    use ep_spatial::DatasetBuilder;
    use tempfile::TempDir;

    use crate::{CsvWriter, SimOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Four isolated agents, one infected, nobody moves.
    fn build_sim(unaware_days: u32) -> ep_sim::Sim {
        let mut b = DatasetBuilder::new();
        for i in 0..4 {
            b.add_node(format!("mesh{i}"), Vec3::new(10.0 * i as f64, 0.0, 0.0));
        }
        let config = SimConfig {
            total_population:      4,
            initial_infected:      1,
            bed_capacity:          10,
            unaware_days,
            moving_percentage:     0,
            speed:                 SimSpeed::Normal,
            agent_radius:          1.0,
            seed:                  Some(1),
            output_interval_ticks: 2,
        };
        SimBuilder::new(config).dataset(b.build()).build().unwrap()
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let mut sim = build_sim(30);
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_until_outcome(Some(6), &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Ticks 0, 2, 4 × 4 agents.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 12);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }

    #[test]
    fn outcome_and_final_counts_recorded() {
        let mut sim = build_sim(0);
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let outcome = sim.run_until_outcome(Some(1_000), &mut obs).unwrap();
        assert_eq!(outcome, Some(Outcome::Won));
        assert_eq!(obs.outcome(), Some(Outcome::Won));
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        let last = rows.last().unwrap();
        assert_eq!(&last[2], "4"); // healthy
        assert_eq!(&rows[0][7], "1"); // admitted on the first tick
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::{snap_row, summary_row};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_health_stored_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(7, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (label, health, x): (String, String, f64) = conn
            .query_row(
                "SELECT label, health, x FROM agent_snapshots WHERE agent_id = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(label, "mesh7");
        assert_eq!(health, "infected");
        assert_eq!(x, 7.0);
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, healthy, quarantined): (i64, i64, i64) = conn
            .query_row(
                "SELECT tick, healthy, quarantined FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((tick, healthy, quarantined), (7, 90, 3));
    }

    #[test]
    fn sqlite_duplicate_tick_rejected() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(1)).unwrap();
        assert!(w.write_tick_summary(&summary_row(1)).is_err());
    }
}
