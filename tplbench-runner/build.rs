use std::{
    path::Path,
    process::{Command, Stdio},
};

#[path = "src/revision.rs"]
mod revision;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=src/revision.rs");

    let (version, dirty) = match read_revision() {
        Ok(Some(found)) => found,
        Ok(None) => (revision::UNKNOWN.to_owned(), false),
        Err(err) => {
            println!("cargo::warning=Could not run `git`: {err}");
            (revision::UNKNOWN.to_owned(), false)
        }
    };
    println!("cargo::rustc-env=TPLBENCH_REVISION={version}");
    println!("cargo::rustc-env=TPLBENCH_DIRTY={dirty}");
}

/// `None` when not building from a git checkout.
fn read_revision() -> std::io::Result<Option<(String, bool)>> {
    let Some(sha) = git(&["rev-parse", "--short", "HEAD"])? else {
        return Ok(None);
    };
    let head_ref = git(&["symbolic-ref", "--quiet", "HEAD"])?;
    for name in revision::watched_git_paths(head_ref.as_deref()) {
        let Some(path) = git(&["rev-parse", "--path-format=absolute", "--git-path", name])? else {
            continue;
        };
        // cargo reruns on every build for a missing file
        if Path::new(&path).exists() {
            println!("cargo::rerun-if-changed={path}");
        }
    }
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])?
        .is_some_and(|status| revision::has_changes(&status));
    Ok(Some((revision::describe(&sha, dirty), dirty)))
}

/// Trimmed stdout of a successful `git` run.
fn git(args: &[&str]) -> std::io::Result<Option<String>> {
    let output = Command::new("git")
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(String::from_utf8(output.stdout)
        .ok()
        .map(|out| out.trim().to_owned())
        .filter(|out| !out.is_empty()))
}
