//! Registration planning service
//!
//! Decides, for every listed file, whether the run will ask the bridge to
//! open it or skip it as missing. No commands are executed here.

use std::path::PathBuf;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{FilePath, WorkingDir};

/// The action to take for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// File exists; open it through the bridge
    Open,
    /// File does not exist; warn and move on
    SkipMissing,
}

/// A planned action for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path as listed (relative to the working directory)
    pub path: FilePath,
    /// Absolute path handed to the bridge
    pub absolute: PathBuf,
    /// Action to take
    pub action: FileAction,
}

impl PlannedFile {
    /// Check if this file will be opened
    pub fn should_open(&self) -> bool {
        matches!(self.action, FileAction::Open)
    }
}

/// Result of planning a registration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPlan {
    /// Planned files, in list order
    pub files: Vec<PlannedFile>,
}

impl RegisterPlan {
    /// Files that will be opened, in list order
    pub fn to_open(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.should_open())
    }

    /// Files that will be skipped as missing, in list order
    pub fn missing(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| !f.should_open())
    }

    /// Number of bridge commands this plan issues
    pub fn open_count(&self) -> usize {
        self.to_open().count()
    }

    /// Number of files skipped as missing
    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }
}

/// Planner for registration runs
pub struct Planner;

impl Planner {
    /// Classify every file in list order
    ///
    /// No reordering, sorting or deduplication: duplicates are planned twice.
    pub fn plan<FS: FileSystem>(
        working_dir: &WorkingDir,
        files: &[FilePath],
        fs: &FS,
    ) -> RegisterPlan {
        let files = files
            .iter()
            .map(|path| Self::plan_file(working_dir, path, fs))
            .collect();
        RegisterPlan { files }
    }

    /// Classify a single file
    pub fn plan_file<FS: FileSystem>(
        working_dir: &WorkingDir,
        path: &FilePath,
        fs: &FS,
    ) -> PlannedFile {
        let absolute = path.resolve(working_dir.as_path());
        let action = if fs.exists(&absolute) {
            FileAction::Open
        } else {
            FileAction::SkipMissing
        };
        PlannedFile {
            path: path.clone(),
            absolute,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    struct SetFs(HashSet<PathBuf>);

    impl FileSystem for SetFs {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }

        fn is_dir(&self, _path: &Path) -> bool {
            true
        }
    }

    fn dir() -> WorkingDir {
        WorkingDir::new("/proj", Path::new("/"))
    }

    fn paths(entries: &[&str]) -> Vec<FilePath> {
        entries.iter().map(|e| FilePath::new(*e).unwrap()).collect()
    }

    #[test]
    fn plan_marks_existing_and_missing_in_order() {
        let fs = SetFs(
            [PathBuf::from("/proj/a.swift"), PathBuf::from("/proj/c.swift")]
                .into_iter()
                .collect(),
        );
        let files = paths(&["a.swift", "b.swift", "c.swift"]);

        let plan = Planner::plan(&dir(), &files, &fs);

        let actions: Vec<FileAction> = plan.files.iter().map(|f| f.action).collect();
        assert_eq!(
            actions,
            vec![FileAction::Open, FileAction::SkipMissing, FileAction::Open]
        );
        assert_eq!(plan.open_count(), 2);
        assert_eq!(plan.missing_count(), 1);
        assert_eq!(plan.files[2].absolute, PathBuf::from("/proj/c.swift"));
    }

    #[test]
    fn plan_keeps_duplicates() {
        let fs = SetFs([PathBuf::from("/proj/a.swift")].into_iter().collect());
        let files = paths(&["a.swift", "a.swift"]);

        let plan = Planner::plan(&dir(), &files, &fs);

        assert_eq!(plan.open_count(), 2);
    }

    #[test]
    fn plan_of_empty_list_is_empty() {
        let fs = SetFs(HashSet::new());
        let plan = Planner::plan(&dir(), &[], &fs);
        assert!(plan.files.is_empty());
    }
}
