use anyhow::{Context, Result};
use lpviz::scene::Scene;
use lpviz::simplex::Terminal;
use lpviz::ConstraintSet;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What `solve` recorded next to a written scene.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolveRecord {
    pub code_rev: String,
    pub lpviz: &'static str,
    pub input: String,
    /// FNV-1a over the coefficient bits, objective, and sense; see [`problem_fingerprint`].
    pub fingerprint: String,
    pub constraints: usize,
    pub vertices: usize,
    /// `None` when the problem has no objective and the simplex did not run.
    pub terminal: Option<Terminal>,
    pub pivots: Option<usize>,
    pub optimal_value: Option<f64>,
    pub outputs: Vec<String>,
}

impl SolveRecord {
    pub fn new(input: &Path, set: &ConstraintSet, scene: &Scene, artifact: &Path) -> Self {
        let trace = scene.trace.as_ref();
        Self {
            code_rev: current_git_rev(),
            lpviz: lpviz::VERSION,
            input: input.to_string_lossy().into_owned(),
            fingerprint: problem_fingerprint(set),
            constraints: set.constraints.len(),
            vertices: scene.vertices.len(),
            terminal: trace.map(|t| t.terminal),
            pivots: trace.map(|t| t.steps.len().saturating_sub(1)),
            optimal_value: scene.optimal_value,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// 16 hex digits identifying the problem, stable across runs and builds.
///
/// Equal coefficients hash equal bit-for-bit, so `-0.0` and `0.0` differ.
pub fn problem_fingerprint(set: &ConstraintSet) -> String {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    let mut words: Vec<u64> = Vec::with_capacity(3 * set.constraints.len() + 4);
    words.push(set.constraints.len() as u64);
    for c in &set.constraints {
        words.extend([c.a.to_bits(), c.b.to_bits(), c.c.to_bits()]);
    }
    match set.objective {
        Some(obj) => words.extend([1, obj.a.to_bits(), obj.b.to_bits()]),
        None => words.push(0),
    }
    words.push(set.maximize as u64);
    let h = words
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .fold(OFFSET, |h, byte| (h ^ byte as u64).wrapping_mul(PRIME));
    format!("{h:016x}")
}

/// Write `<scene>.provenance.json` next to the scene and return its path.
pub fn write_sidecar(record: &SolveRecord, artifact: &Path) -> Result<PathBuf> {
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    fs::write(&provenance_path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("scene"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpviz::scene::{build_scene, SceneCfg};
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/plots/demo.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/plots/demo.provenance.json")
        );
    }

    #[test]
    fn fingerprint_tracks_every_input_field() {
        let demo = ConstraintSet::demo();
        let fp = problem_fingerprint(&demo);
        assert_eq!(fp.len(), 16);
        assert_eq!(fp, problem_fingerprint(&demo.clone()));

        let mut moved = demo.clone();
        moved.constraints[0].c += 1e-9;
        assert_ne!(fp, problem_fingerprint(&moved));

        let mut flipped = demo.clone();
        flipped.maximize = !flipped.maximize;
        assert_ne!(fp, problem_fingerprint(&flipped));

        let mut no_objective = demo.clone();
        no_objective.objective = None;
        assert_ne!(fp, problem_fingerprint(&no_objective));

        let mut dropped = demo;
        dropped.constraints.pop();
        assert_ne!(fp, problem_fingerprint(&dropped));
    }

    #[test]
    fn write_sidecar_records_solver_outcome() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("scene.json");
        let input = dir.path().join("demo.json");
        let set = ConstraintSet::demo();
        let scene = build_scene(&set, SceneCfg::default());
        let record = SolveRecord::new(&input, &set, &scene, &artifact);
        let prov_path = write_sidecar(&record, &artifact).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["lpviz"], lpviz::VERSION);
        assert_eq!(parsed["fingerprint"], problem_fingerprint(&set));
        assert_eq!(parsed["constraints"], set.constraints.len());
        assert_eq!(parsed["vertices"], scene.vertices.len());
        assert_eq!(parsed["terminal"]["kind"], "optimal");
        assert_eq!(parsed["pivots"], record.pivots.unwrap());
        assert!(parsed.get("params").is_none());
    }

    #[test]
    fn record_without_objective_has_no_outcome() {
        let mut set = ConstraintSet::demo();
        set.objective = None;
        let scene = build_scene(&set, SceneCfg::default());
        let record = SolveRecord::new(Path::new("p.json"), &set, &scene, Path::new("s.json"));
        assert_eq!(record.terminal, None);
        assert_eq!(record.pivots, None);
        assert_eq!(record.optimal_value, None);
    }
}
