//! Keeps tests/unit mirroring src file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("Failed to strip prefix"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn listed(dir: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let base = Path::new(dir);
        if let Err(error) = rust_files(base, base, &mut found) {
            assert!(!base.exists(), "Failed to read {dir}: {error}");
        }
        found.retain(|relative| !is_exempt(relative));
        found
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = listed(UNIT_DIR);
        let missing: Vec<String> = listed(SRC_DIR)
            .into_iter()
            .filter(|relative| !tests.contains(relative))
            .map(|relative| format!("  - src/{relative} -> {UNIT_DIR}/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source() {
        let sources = listed(SRC_DIR);
        let orphaned: Vec<String> = listed(UNIT_DIR)
            .into_iter()
            .filter(|relative| !sources.contains(relative))
            .map(|relative| format!("  - {UNIT_DIR}/{relative} -> src/{relative} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_unit_files_are_declared_and_contain_tests() {
        let mut problems = Vec::new();

        for relative in listed(UNIT_DIR) {
            let path = Path::new(UNIT_DIR).join(&relative);
            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                problems.push(format!("  - {} has no #[test] functions", path.display()));
            }

            // An undeclared file is never compiled into the unit harness
            let module = path.with_file_name("mod.rs");
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let declarations = fs::read_to_string(&module).unwrap_or_default();
            if !declarations.contains(&format!("mod {stem};")) {
                problems.push(format!(
                    "  - {} is not declared in {}",
                    path.display(),
                    module.display()
                ));
            }
        }

        assert!(problems.is_empty(), "{}", problems.join("\n"));
    }
}
