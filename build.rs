use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let mut hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    if git(&["status", "--porcelain", "--untracked-files=no"]).is_some() {
        hash.push_str("-dirty");
    }
    println!("cargo:rustc-env=PAINTBRUSH_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir() {
        for name in ["HEAD", "refs", "packed-refs", "index"] {
            rerun_if_exists(&git_dir.join(name));
        }
    }
}

/// Runs git and returns trimmed stdout, or `None` on failure or empty output.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn git_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(dir));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    // Worktrees and submodules use a `gitdir:` pointer file
    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(contents.strip_prefix("gitdir:")?.trim());
    Some(if target.is_relative() { Path::new(".").join(target) } else { target })
}

fn rerun_if_exists(path: &Path) {
    if path.exists() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
