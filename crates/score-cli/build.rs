use std::process::Command;

/// Exposes the current commit as `GIT_COMMIT_HASH` for `--version`.
fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    println!("cargo::rerun-if-env-changed=GIT_COMMIT_HASH");

    let from_env = std::env::var("GIT_COMMIT_HASH")
        .ok()
        .filter(|hash| !hash.is_empty() && hash != "unknown");

    let commit = from_env
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=GIT_COMMIT_HASH={}", commit);
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|hash| hash.trim().to_string())
}
