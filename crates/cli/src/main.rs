use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;
use trisolve::form::TriangleForm;
use trisolve::record::TriangleRecord;
use trisolve::triangle::rand::{draw_batch, SampleCfg};
use trisolve::triangle::{solve, Method, TriangleSpec};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Solve triangles from three measurements")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one triangle: ssa (a b angleC), aas (angleA angleC b) or sss (a b c)
    Solve {
        #[arg(long)]
        method: Method,
        #[arg(allow_negative_numbers = true)]
        input1: f64,
        #[arg(allow_negative_numbers = true)]
        input2: f64,
        #[arg(allow_negative_numbers = true)]
        input3: f64,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Wrap the result in a persistence envelope with this name
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = 0)]
        author: u64,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Run the form dispatcher on raw fields (blank = not given); angles in degrees
    Form {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        a: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        b: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        c: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        angle_a: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        angle_b: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        angle_c: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Solve every row of a CSV with columns method,input1,input2,input3
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Emit random valid inputs together with their solutions
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long)]
        method: Option<Method>,
        #[arg(long, default_value_t = 5.0)]
        min_angle: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            method,
            input1,
            input2,
            input3,
            format,
            name,
            author,
            out,
        } => run_solve(method, [input1, input2, input3], format, name, author, out),
        Action::Form {
            name,
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
            format,
        } => run_form(
            &name,
            [a.as_str(), b.as_str(), c.as_str()],
            [angle_a.as_str(), angle_b.as_str(), angle_c.as_str()],
            format,
        ),
        Action::Batch { input, out } => batch(&input, &out),
        Action::Sample {
            seed,
            count,
            method,
            min_angle,
        } => sample(seed, count, method, min_angle),
        Action::Report => report(),
    }
}

fn print_triangle(t: &TriangleSpec, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(t)?),
        Format::Text => println!("{t}"),
    }
    Ok(())
}

fn unix_now() -> Result<String> {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    Ok(secs.to_string())
}

fn run_solve(
    method: Method,
    inputs: [f64; 3],
    format: Format,
    name: Option<String>,
    author: u64,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(%method, ?inputs, "solve");
    let [i1, i2, i3] = inputs;
    let t = solve(method, i1, i2, i3).map_err(|e| anyhow!("{method} {inputs:?}: {e}"))?;

    let doc = match &name {
        Some(name) => serde_json::to_value(TriangleRecord::new(name.clone(), author, unix_now()?, t))?,
        None => serde_json::to_value(t)?,
    };
    match out {
        Some(out) => {
            let params = json!({ "method": method.to_string(), "inputs": inputs, "name": name });
            let sidecar = write_json(&out, &doc, "solve", params)?;
            tracing::info!(out, provenance = %sidecar.display(), "written");
        }
        None if name.is_some() => println!("{}", serde_json::to_string_pretty(&doc)?),
        None => print_triangle(&t, format)?,
    }
    Ok(())
}

fn run_form(name: &str, sides: [&str; 3], angles: [&str; 3], format: Format) -> Result<()> {
    let form = TriangleForm::parse(name, sides, angles)?;
    match form.generate() {
        Ok((plan, t)) => {
            tracing::info!(method = %plan.method, inputs = ?plan.inputs, "form");
            print_triangle(&t, format)
        }
        Err(e) => {
            tracing::warn!(error = %e, "form rejected");
            bail!(e.user_message())
        }
    }
}

/// Commit to report: `GIT_COMMIT` at run time, else at build time.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Write `doc` to `out` plus a `<stem>.provenance.json` sidecar recording the
/// command, its parameters and the code revision. Returns the sidecar path.
fn write_json(out: &str, doc: &Value, command: &str, params: Value) -> Result<PathBuf> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display()))?;
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {out}"))?;

    let stem = out_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("artifact");
    let sidecar = out_path.with_file_name(format!("{stem}.provenance.json"));
    let record = json!({
        "command": command,
        "params": params,
        "output": out,
        "code_rev": code_rev(),
        "trisolve_version": trisolve::VERSION,
    });
    std::fs::write(&sidecar, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Solve each CSV row; failures become per-row `error` entries.
fn solve_rows(df: &DataFrame) -> Result<Vec<Value>> {
    let methods = df.column("method")?.cast(&DataType::String)?;
    let methods = methods.str()?;
    let mut cols = Vec::with_capacity(3);
    for name in ["input1", "input2", "input3"] {
        cols.push(df.column(name)?.cast(&DataType::Float64)?);
    }
    let (c1, c2, c3) = (cols[0].f64()?, cols[1].f64()?, cols[2].f64()?);

    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let method = methods.get(row).unwrap_or("");
        let inputs = [c1.get(row), c2.get(row), c3.get(row)];
        let result = match (method.parse::<Method>(), inputs) {
            (Err(e), _) => Err(e.to_string()),
            (Ok(m), [Some(i1), Some(i2), Some(i3)]) => {
                solve(m, i1, i2, i3).map_err(|e| e.to_string())
            }
            (Ok(_), _) => Err("missing input value".to_string()),
        };
        let entry = match result {
            Ok(t) => json!({ "row": row, "method": method, "inputs": inputs, "ok": t }),
            Err(error) => {
                tracing::warn!(row, error, "row rejected");
                json!({ "row": row, "method": method, "inputs": inputs, "error": error })
            }
        };
        rows.push(entry);
    }
    Ok(rows)
}

fn batch(input: &str, out: &str) -> Result<()> {
    tracing::info!(input, out, "batch");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    let rows = solve_rows(&df)?;
    let failed = rows.iter().filter(|r| r.get("error").is_some()).count();
    tracing::info!(rows = rows.len(), failed, "batch_solved");

    let params = json!({ "input": input, "rows": df.height() });
    write_json(out, &Value::Array(rows), "batch", params)?;
    Ok(())
}

fn sample(seed: u64, count: usize, method: Option<Method>, min_angle: f64) -> Result<()> {
    tracing::info!(seed, count, method = ?method, min_angle, "sample");
    let cfg = SampleCfg {
        method,
        min_angle_deg: min_angle,
        ..SampleCfg::default()
    };
    let mut out = Vec::with_capacity(count);
    for s in draw_batch(cfg, seed, count) {
        let [i1, i2, i3] = s.inputs;
        let t = solve(s.method, i1, i2, i3)
            .map_err(|e| anyhow!("sample {} failed: {e}", s.replay.index))?;
        out.push(json!({
            "seed": s.replay.seed,
            "index": s.replay.index,
            "method": s.method,
            "inputs": s.inputs,
            "data": t
        }));
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": code_rev(),
        "trisolve_version": trisolve::VERSION,
        "methods": Method::ALL.map(|m| m.to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
