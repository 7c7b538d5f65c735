//! Layout checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    /// Files exempt from needing a counterpart
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs"
            || relative == "lib.rs"
            || Path::new(relative).file_name().is_some_and(|name| name == "mod.rs")
    }

    /// Relative paths of every directory and `.rs` file below `root`
    fn tree(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|err| io::Error::other(err.to_string()))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn listing(paths: &[&String], describe: impl Fn(&str) -> String) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", describe(path)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test at the same relative path
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = tree(Path::new(SRC_ROOT)).unwrap_or_default();
        let units = tree(Path::new(UNIT_ROOT)).unwrap_or_default();
        assert!(!sources.is_empty(), "no sources found under {SRC_ROOT}");

        let missing: Vec<&String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "source paths without unit tests:\n{}",
            listing(&missing, |path| format!("src/{path} -> tests/unit/{path}"))
        );
    }

    // Tests no unit test outlives the source it covered
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = tree(Path::new(SRC_ROOT)).unwrap_or_default();
        let units = tree(Path::new(UNIT_ROOT)).unwrap_or_default();

        let orphaned: Vec<&String> = units
            .iter()
            .filter(|path| !is_organizational(path) && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit tests without sources:\n{}",
            listing(&orphaned, |path| format!("tests/unit/{path} (src/{path} missing)"))
        );
    }

    // Tests every non-module test file declares at least one test
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new(TESTS_ROOT);
        let files = tree(root).unwrap_or_default();
        assert!(!files.is_empty(), "no files found under {TESTS_ROOT}");

        let empty: Vec<&String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_organizational(path))
            .filter(|path| {
                fs::read_to_string(root.join(path.as_str()))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test]:\n{}",
            listing(&empty, |path| format!("tests/{path}"))
        );
    }
}
