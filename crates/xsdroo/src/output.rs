use xsdroo_core::{err, Error, Package, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the target file stem to name the update script.
const UPDATE_SUFFIX: &str = "Update";

/// Scripts generated for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The package the entities were generated in.
    pub package: Package,

    /// Builds a project from scratch.
    pub full: String,

    /// Applies the entities and relationships to an existing project.
    pub update: String,
}

/// Where a run wrote its scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub full: PathBuf,
    pub update: PathBuf,
}

impl Generated {
    /// Writes the full script to `target` and the update script next to it,
    /// creating the directory when missing.
    pub fn write(&self, target: impl AsRef<Path>) -> Result<Written> {
        let full = target.as_ref().to_path_buf();
        let update = update_path(&full);

        if let Some(dir) = full.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| {
                Error::io(source).context(err!("creating `{}`", dir.display()))
            })?;
        }

        write_file(&full, &self.full)?;
        write_file(&update, &self.update)?;

        Ok(Written { full, update })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .map_err(|source| Error::io(source).context(err!("writing `{}`", path.display())))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// The update script's path: the target's file stem followed by `Update`,
/// keeping the extension and directory.
///
/// `out/build.roo` becomes `out/buildUpdate.roo`.
pub fn update_path(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match target.extension() {
        Some(ext) => format!("{stem}{UPDATE_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{UPDATE_SUFFIX}"),
    };

    target.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::{assert_err, assert_ok};

    fn generated() -> Generated {
        Generated {
            package: Package::new("org.example"),
            full: "project --topLevelPackage org.example\n".into(),
            update: "json all\n".into(),
        }
    }

    #[test]
    fn update_path_keeps_extension() {
        assert_eq!(
            update_path(Path::new("out/build.roo")),
            PathBuf::from("out/buildUpdate.roo")
        );
        assert_eq!(update_path(Path::new("script")), PathBuf::from("scriptUpdate"));
        assert_eq!(
            update_path(Path::new("a/b/model.v1.txt")),
            PathBuf::from("a/b/model.v1Update.txt")
        );
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/build.roo");

        let written = assert_ok!(generated().write(&target));

        assert_eq!(written.full, target);
        assert_eq!(written.update, dir.path().join("nested/deeper/buildUpdate.roo"));
        assert_eq!(
            fs::read_to_string(&written.full).unwrap(),
            "project --topLevelPackage org.example\n"
        );
        assert_eq!(fs::read_to_string(&written.update).unwrap(), "json all\n");
    }

    #[test]
    fn write_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();

        // A regular file where the output directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = assert_err!(generated().write(blocker.join("build.roo")));
        assert!(err.is_io());
        assert!(!err.is_schema_error());
    }
}
