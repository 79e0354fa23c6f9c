mod common;

use canopy_sim::flush::{DelimitedSink, JsonlSink, TickRecord, write_history_jsonl};
use canopy_sim::sim::{SimConfig, run, run_to_sink};
use canopy_sim::worldgen::{WorldGenConfig, generate_world};
use common::read_lines;

fn small_world() -> canopy_sim::Grid {
    generate_world(&WorldGenConfig {
        size: 11,
        ..WorldGenConfig::default()
    })
    .unwrap()
}

#[test]
fn streamed_jsonl_matches_snapshots() {
    let world = small_world();
    let config = SimConfig::new(15, 9);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");

    let mut sink = JsonlSink::create(&path).unwrap();
    run_to_sink(&world, &config, &mut sink).unwrap();

    let snapshots = run(&world, &config).unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 15, "expected one line per tick");

    for (i, line) in lines.iter().enumerate() {
        let record: TickRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.tick, i as u32 + 1);
        assert_eq!(record.plants, snapshots[i].trait_vectors());
    }
}

#[test]
fn batch_writer_matches_streaming_sink() {
    let world = small_world();
    let config = SimConfig::new(10, 4);
    let dir = tempfile::tempdir().unwrap();

    let streamed = dir.path().join("streamed.jsonl");
    let mut sink = JsonlSink::create(&streamed).unwrap();
    run_to_sink(&world, &config, &mut sink).unwrap();

    let batched = dir.path().join("batched.jsonl");
    write_history_jsonl(&batched, &run(&world, &config).unwrap()).unwrap();

    assert_eq!(read_lines(&streamed), read_lines(&batched));
}

#[test]
fn delimited_history_has_one_record_per_living_plant() {
    let world = small_world();
    let config = SimConfig::new(12, 5);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");

    let mut sink = DelimitedSink::create(&path).unwrap();
    run_to_sink(&world, &config, &mut sink).unwrap();

    let snapshots = run(&world, &config).unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 12);

    for (line, grid) in lines.iter().zip(&snapshots) {
        let records: Vec<&str> = line.split(';').filter(|r| !r.is_empty()).collect();
        assert_eq!(records.len(), grid.population());
        for (record, traits) in records.iter().zip(grid.trait_vectors()) {
            let fields: Vec<u32> = record.split(',').map(|f| f.parse().unwrap()).collect();
            assert_eq!(
                fields,
                vec![traits.height, traits.width, traits.life_span, traits.shade_tolerance]
            );
        }
    }
}
