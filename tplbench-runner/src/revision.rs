//! Describes the git revision a build comes from. Compiled into `build.rs` as well.

pub const UNKNOWN: &str = "unknown";

/// Paths, relative to the git directory, that change whenever `HEAD` moves or the
/// index is rewritten. `head_ref` is the branch `HEAD` points at, if any.
pub fn watched_git_paths(head_ref: Option<&str>) -> Vec<&str> {
    let mut paths = vec!["HEAD", "logs/HEAD", "index", "packed-refs"];
    paths.extend(head_ref);
    paths
}

/// Whether `git status --porcelain` output lists any change.
pub fn has_changes(porcelain: &str) -> bool {
    porcelain.lines().any(|line| !line.trim().is_empty())
}

pub fn describe(sha: &str, dirty: bool) -> String {
    if dirty {
        format!("{sha}-dirty")
    } else {
        sha.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_ref_is_watched() {
        let paths = watched_git_paths(Some("refs/heads/main"));
        assert!(paths.contains(&"HEAD"));
        assert!(paths.contains(&"index"));
        assert!(paths.contains(&"refs/heads/main"));
    }

    #[test]
    fn detached_head_watches_head_only() {
        let paths = watched_git_paths(None);
        assert_eq!(paths, ["HEAD", "logs/HEAD", "index", "packed-refs"]);
    }

    #[test]
    fn porcelain_output_means_dirty() {
        assert!(!has_changes(""));
        assert!(!has_changes("\n"));
        assert!(has_changes(" M tplbench-runner/src/main.rs\n"));
        assert!(has_changes("?? notes.txt\n"));
    }

    #[test]
    fn dirty_trees_are_marked() {
        assert_eq!(describe("1a2b3c4", false), "1a2b3c4");
        assert_eq!(describe("1a2b3c4", true), "1a2b3c4-dirty");
    }
}
