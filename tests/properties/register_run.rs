//! Property tests for planning and running a registration batch.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use xcadd::{
    AppBridge, CommandResult, FilePath, FileSystem, Planner, RegisterEvent, RegisterEventSink,
    RegisterOptions, RegisterUseCase, WorkingDir,
};

const ROOT: &str = "/proj";

struct SetFs {
    files: HashSet<PathBuf>,
}

impl FileSystem for SetFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path == Path::new(ROOT)
    }
}

struct RecordingBridge {
    opened: RefCell<Vec<PathBuf>>,
    failing: HashSet<PathBuf>,
}

impl AppBridge for RecordingBridge {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn describe(&self, path: &Path) -> String {
        format!("open {}", path.display())
    }

    fn open(&self, path: &Path) -> CommandResult {
        self.opened.borrow_mut().push(path.to_path_buf());
        if self.failing.contains(path) {
            CommandResult::failed(self.describe(path), "refused")
        } else {
            CommandResult::succeeded(self.describe(path), "")
        }
    }
}

#[derive(Default)]
struct CountingSink {
    events: RefCell<Vec<RegisterEvent>>,
}

impl RegisterEventSink for CountingSink {
    fn on_event(&self, event: RegisterEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// (file name index, exists on disk, bridge fails for it)
fn entries() -> impl Strategy<Value = Vec<(u8, bool, bool)>> {
    proptest::collection::vec((0u8..12, any::<bool>(), any::<bool>()), 0..16)
}

fn build(entries: &[(u8, bool, bool)]) -> (Vec<FilePath>, SetFs, HashSet<PathBuf>) {
    let mut files = Vec::new();
    let mut on_disk = HashSet::new();
    let mut failing = HashSet::new();
    for (name, exists, fails) in entries {
        let rel = format!("Sources/File{}.swift", name);
        let abs = Path::new(ROOT).join(&rel);
        // Every occurrence of a name shares the first occurrence's disk state.
        if *exists && !files.iter().any(|f: &FilePath| f.as_path() == Path::new(&rel)) {
            on_disk.insert(abs.clone());
        }
        if *fails {
            failing.insert(abs);
        }
        files.push(FilePath::new(rel).unwrap());
    }
    (files, SetFs { files: on_disk }, failing)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Planning the same list against the same filesystem gives the same plan.
    #[test]
    fn property_plan_is_idempotent(entries in entries()) {
        let (files, fs, _) = build(&entries);
        let dir = WorkingDir::new(ROOT, Path::new("/"));

        let first = Planner::plan(&dir, &files, &fs);
        let second = Planner::plan(&dir, &files, &fs);

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Commands go out for exactly the existing files, in list order,
    /// regardless of which of them fail.
    #[test]
    fn property_one_command_per_existing_file(entries in entries()) {
        let (files, fs, failing) = build(&entries);
        let bridge = RecordingBridge { opened: RefCell::new(Vec::new()), failing };
        let sink = CountingSink::default();
        let options = RegisterOptions::new(WorkingDir::new(ROOT, Path::new("/")), files.clone());

        let report = RegisterUseCase::new(&fs, &bridge, &sink).execute(&options).unwrap();

        let expected: Vec<PathBuf> = files
            .iter()
            .map(|f| f.resolve(Path::new(ROOT)))
            .filter(|p| fs.files.contains(p))
            .collect();
        prop_assert_eq!(&*bridge.opened.borrow(), &expected);
        prop_assert_eq!(report.attempted(), expected.len());

        let warnings = sink
            .events
            .borrow()
            .iter()
            .filter(|e| matches!(e, RegisterEvent::FileMissing { .. }))
            .count();
        prop_assert_eq!(warnings, files.len() - expected.len());
        prop_assert_eq!(report.missing.len(), warnings);
    }

    /// PROPERTY: A missing working directory means no checks and no commands.
    #[test]
    fn property_missing_directory_runs_nothing(entries in entries()) {
        let (files, fs, failing) = build(&entries);
        let bridge = RecordingBridge { opened: RefCell::new(Vec::new()), failing };
        let options = RegisterOptions::new(WorkingDir::new("/elsewhere", Path::new("/")), files);

        let result = RegisterUseCase::new(&fs, &bridge, xcadd::domain::ports::NoopEventSink)
            .execute(&options);

        prop_assert!(result.is_err());
        prop_assert!(bridge.opened.borrow().is_empty());
    }
}
