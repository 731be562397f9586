use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use lpviz::scene::{build_scene, Scene, SceneCfg};
use lpviz::ConstraintSet;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "lpviz-cli")]
#[command(about = "Solve and visualize two-variable linear programs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the plot scene for a problem file and write it as JSON
    Solve {
        /// Problem JSON: {"constraints":[{"a":..,"b":..,"c":..}], "objective":{"a":..,"b":..}, "maximize":true}
        #[arg(long)]
        input: PathBuf,
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the provenance sidecar next to --out
        #[arg(long)]
        no_sidecar: bool,
    },
    /// Print the simplex tableau steps as text
    Trace {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the scene for the built-in demo problem
    Demo,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            no_sidecar,
        } => solve(&input, out.as_deref(), !no_sidecar),
        Action::Trace { input } => trace(&input),
        Action::Demo => demo(),
        Action::Report => report(),
    }
}

fn load_problem(path: &Path) -> Result<ConstraintSet> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let set: ConstraintSet =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    validate(&set)?;
    tracing::info!(
        input = %path.display(),
        constraints = set.constraints.len(),
        objective = set.objective.is_some(),
        maximize = set.maximize,
        "loaded problem"
    );
    Ok(set)
}

fn validate(set: &ConstraintSet) -> Result<()> {
    for (i, c) in set.constraints.iter().enumerate() {
        ensure!(
            c.a.is_finite() && c.b.is_finite() && c.c.is_finite(),
            "constraint {i} has a non-finite coefficient"
        );
    }
    if let Some(obj) = set.objective {
        ensure!(
            obj.a.is_finite() && obj.b.is_finite(),
            "objective has a non-finite coefficient"
        );
    }
    Ok(())
}

fn solve(input: &Path, out: Option<&Path>, sidecar: bool) -> Result<()> {
    let set = load_problem(input)?;
    let scene = build_scene(&set, SceneCfg::default());
    let body = serde_json::to_vec_pretty(&scene)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    write_scene(out, &body)?;
    if sidecar {
        let record = provenance::SolveRecord::new(input, &set, &scene, out);
        let prov = provenance::write_sidecar(&record, out)?;
        tracing::info!(
            sidecar = %prov.display(),
            fingerprint = %record.fingerprint,
            "wrote provenance"
        );
    }
    summarize(&scene);
    Ok(())
}

fn write_scene(out: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), bytes = body.len(), "wrote scene");
    Ok(())
}

fn summarize(scene: &Scene) {
    match (&scene.trace, scene.optimal_value) {
        (Some(t), Some(v)) => tracing::info!(optimal_value = v, steps = t.steps.len(), "optimal"),
        (Some(t), None) => tracing::warn!(terminal = ?t.terminal, "no finite optimum"),
        (None, _) => tracing::info!("no objective supplied"),
    }
}

fn trace(input: &Path) -> Result<()> {
    let set = load_problem(input)?;
    match lpviz::api::trace(&set) {
        Some(t) => print!("{t}"),
        None => tracing::warn!("problem has no objective; nothing to trace"),
    }
    Ok(())
}

fn demo() -> Result<()> {
    let scene = build_scene(&ConstraintSet::demo(), SceneCfg::default());
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "lpviz": lpviz::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const BOX_WITH_CUT: &str = r#"{
        "constraints": [
            {"a": 1, "b": 0, "c": 4},
            {"a": 0, "b": 1, "c": 4},
            {"a": 1, "b": 1, "c": 6},
            {"a": -1, "b": 0, "c": 0},
            {"a": 0, "b": -1, "c": 0}
        ],
        "objective": {"a": 1, "b": 1}
    }"#;

    #[test]
    fn load_defaults_to_maximize() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, BOX_WITH_CUT).unwrap();
        let set = load_problem(&path).unwrap();
        assert_eq!(set.constraints.len(), 5);
        assert!(set.maximize);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"constraints\": 3}").unwrap();
        assert!(load_problem(&path).is_err());
        assert!(load_problem(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn validate_rejects_non_finite() {
        let mut set = ConstraintSet::demo();
        set.constraints[1].c = f64::INFINITY;
        assert!(validate(&set).is_err());
        assert!(validate(&ConstraintSet::demo()).is_ok());
    }

    #[test]
    fn solve_writes_scene_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("p.json");
        fs::write(&input, BOX_WITH_CUT).unwrap();
        let out = dir.path().join("nested").join("scene.json");
        solve(&input, Some(&out), true).unwrap();
        let scene: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(scene["optimal_value"], 6.0);
        assert_eq!(scene["trace"]["terminal"]["kind"], "optimal");
        assert_eq!(scene["vertices"].as_array().unwrap().len(), 5);
        let prov = dir.path().join("nested").join("scene.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(prov["optimal_value"], 6.0);
        assert_eq!(prov["pivots"], 2);
        assert_eq!(prov["terminal"]["kind"], "optimal");
        assert_eq!(prov["vertices"], 5);
    }
}
