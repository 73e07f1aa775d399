use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

/// Environment variables the binary reads; cleared so the host cannot leak in.
const CLAR_ENV: &[&str] = &[
    "CLAR_OUTPUT_FORMAT",
    "CLAR_KNOWN_DIR",
    "CLAR_KNOWN_SUFFIX",
    "CLAR_COMPUTED_DIR",
    "CLAR_COMPUTED_SUFFIX",
    "CLAR_PERCENT_DECIMALS",
    "CLAR_STRICT_EXIT",
    "CLAR_LOG_ENABLED",
    "CLAR_LOG_PATH",
    "CLAR_LOG_MAX_SIZE_BYTES",
];

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_clar-compare") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) {
        "clar-compare.exe"
    } else {
        "clar-compare"
    };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve clar-compare binary path for integration test"),
    }
}

/// Run the binary in `cwd` with a sandboxed HOME and the given extra env.
pub fn run_cli_case(case_name: &str, cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> CmdResult {
    let root = std::env::temp_dir().join("clar-compare-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let log_path = root.join(format!("{}-{}.log", sanitize(case_name), now_millis()));
    let bin_path = resolve_bin_path();

    let mut command = Command::new(&bin_path);
    command
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("RUST_BACKTRACE", "1");
    for name in CLAR_ENV {
        command.env_remove(name);
    }
    for (name, value) in envs {
        command.env(name, value);
    }
    let output = command.output().expect("execute clar-compare command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let mut log_content = String::new();
    log_content.push_str(&format!("case={case_name}\n"));
    log_content.push_str(&format!("bin={}\n", bin_path.display()));
    log_content.push_str(&format!("cwd={}\n", cwd.display()));
    log_content.push_str(&format!("args={args:?}\n"));
    log_content.push_str(&format!("status={}\n", output.status));
    log_content.push_str("----- stdout -----\n");
    log_content.push_str(&stdout);
    log_content.push('\n');
    log_content.push_str("----- stderr -----\n");
    log_content.push_str(&stderr);
    log_content.push('\n');
    fs::write(&log_path, log_content).expect("write test log");

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}

/// Temp workspace laid out like a run directory: `<root>/gen_output` for
/// known scores and `<root>/a/b/output` for computed ones, with `<root>/a/b`
/// as the working directory.
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create workspace");
        fs::create_dir_all(dir.path().join("gen_output")).expect("create gen_output");
        fs::create_dir_all(dir.path().join("a/b/output")).expect("create output");
        Self { dir }
    }

    pub fn cwd(&self) -> PathBuf {
        self.dir.path().join("a/b")
    }

    pub fn run_log(&self) -> PathBuf {
        self.dir.path().join("runs.jsonl")
    }

    pub fn write_known(&self, n: u32, p: u32, values: &[u64]) {
        let path = self
            .dir
            .path()
            .join("gen_output")
            .join(format!("{n:03}_{p:02}_anc_#"));
        fs::write(path, lines(values)).expect("write known scores");
    }

    pub fn write_computed(&self, n: u32, p: u32, values: &[u64]) {
        let path = self
            .cwd()
            .join("output")
            .join(format!("{n:03}_{p:02}_anionic_clar_num"));
        fs::write(path, lines(values)).expect("write computed scores");
    }
}

fn lines(values: &[u64]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}
