use fatline_merge::config::merge;
use fatline_merge::io::{read_segments_file, write_json_file};
use fatline_merge::{Error, MergeTrace, OverlapMergeEngine, OverlapMergeGroup};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| Error::Config(usage()))?;
    let config = merge::load_config(Path::new(&config_path))?;

    let input = read_segments_file(&config.input)?;
    let mut engine = OverlapMergeEngine::with_params(config.merge.to_merge_params());
    for seg in input.segments {
        let line = seg.line();
        let thickness = seg.thickness;
        let id = seg.id.clone();
        engine
            .add_item(seg.id, line, thickness)
            .map_err(|source| Error::InvalidInput { item: id, source })?;
    }

    let (mut groups, trace) = engine.get_overlap_groups_with_trace(config.merge.thickness_tolerance);
    if !config.merge.include_singletons {
        groups.retain(|g| !g.is_singleton());
    }

    let report = MergeReport {
        trace,
        groups: groups.iter().map(GroupSummary::from_group).collect(),
    };
    write_json_file(&config.output.groups_json, &report)?;

    println!(
        "Merged {} segments into {} groups ({} fat lines), saved to {}",
        report.trace.input_records,
        report.groups.len(),
        report.groups.iter().map(|g| g.fat_lines.len()).sum::<usize>(),
        config.output.groups_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: merge_segments <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeReport {
    trace: MergeTrace,
    groups: Vec<GroupSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupSummary {
    members: Vec<String>,
    fat_lines: Vec<FatLineSummary>,
}

#[derive(Debug, Serialize)]
struct FatLineSummary {
    start: [f64; 2],
    end: [f64; 2],
    thickness: f64,
}

impl GroupSummary {
    fn from_group(group: &OverlapMergeGroup<String>) -> Self {
        Self {
            members: group.items.clone(),
            fat_lines: group
                .fat_lines
                .iter()
                .map(|f| FatLineSummary {
                    start: [f.centerline.p0.x, f.centerline.p0.y],
                    end: [f.centerline.p1.x, f.centerline.p1.y],
                    thickness: f.thickness,
                })
                .collect(),
        }
    }
}
