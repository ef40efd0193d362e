//! Output tree upload
//!
//! Walks the local output root and writes every file to the matching path
//! under the remote base directory, creating remote directories on demand.
//! The first failed write aborts the upload; files already written stay.

use std::fs::File;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::domain::ports::{DeployEvent, DeployEventSink, RemoteStore};
use crate::domain::value_objects::remote_path::{dir_prefixes, join_remote, parent};
use crate::error::{DeployError, DeployResult};

/// What an upload wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Remote paths written, in upload order
    pub files: Vec<String>,
    pub bytes: u64,
    /// Directories that could neither be created nor found
    pub dir_warnings: usize,
}

/// List every file under `root`, sorted by path.
///
/// Hidden files and files matched by ignore files are included; the output
/// tree is uploaded exactly as the generator left it.
pub fn list_files(root: &Path) -> DeployResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(true);
        if !is_dir && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Mirror `local_root` onto `remote_base` through an open session
pub fn upload_tree(
    store: &mut dyn RemoteStore,
    local_root: &Path,
    remote_base: &str,
    site: &str,
    events: &dyn DeployEventSink,
) -> DeployResult<UploadReport> {
    if !local_root.is_dir() {
        return Err(DeployError::OutputMissing {
            path: local_root.to_path_buf(),
        });
    }

    let mut report = UploadReport::default();

    for local in list_files(local_root)? {
        let relative = local.strip_prefix(local_root).unwrap_or(&local);
        let remote = join_remote(remote_base, relative);

        if let Some(dir) = parent(&remote) {
            report.dir_warnings += ensure_remote_dirs(store, dir, site, events);
        }

        let mut file = File::open(&local)?;
        let bytes = store
            .put(&remote, &mut file)
            .map_err(|e| DeployError::TransferWrite {
                path: remote.clone(),
                message: e.to_string(),
            })?;

        debug!(remote = %remote, bytes, "uploaded");
        events.on_event(DeployEvent::FileUploaded {
            site: site.to_string(),
            local: local.clone(),
            remote: remote.clone(),
            bytes,
        });
        report.bytes += bytes;
        report.files.push(remote);
    }

    info!(
        "Uploaded {} files ({} bytes) to {}",
        report.files.len(),
        report.bytes,
        remote_base
    );
    Ok(report)
}

/// Create every prefix of `dir`, root first.
///
/// A failed create is fine when the directory turns out to exist. Otherwise
/// it is reported as a warning and the upload carries on; the following
/// write decides whether the deploy fails. Returns the number of warnings.
pub fn ensure_remote_dirs(
    store: &mut dyn RemoteStore,
    dir: &str,
    site: &str,
    events: &dyn DeployEventSink,
) -> usize {
    let mut warnings = 0;

    for prefix in dir_prefixes(dir) {
        let Err(create_err) = store.make_dir(&prefix) else {
            debug!(dir = %prefix, "created remote directory");
            continue;
        };

        let message = match store.dir_exists(&prefix) {
            Ok(true) => continue,
            Ok(false) => create_err.to_string(),
            Err(check_err) => format!("{create_err} (existence check failed: {check_err})"),
        };

        let err = DeployError::TransferDir {
            path: prefix,
            message,
        };
        warn!("{}", err);
        events.on_event(DeployEvent::Warning {
            site: site.to_string(),
            message: err.to_string(),
        });
        warnings += 1;
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{NoopEventSink, TransferError};
    use std::collections::{BTreeMap, BTreeSet};
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;

    /// In-memory server: `make_dir` fails for existing dirs like a real
    /// FTP server, `put` requires the parent to exist.
    #[derive(Default)]
    struct MemoryStore {
        dirs: BTreeSet<String>,
        files: BTreeMap<String, Vec<u8>>,
        mkdir_calls: usize,
        fail_put_at: Option<usize>,
        deny_mkdir: bool,
        /// Accept writes into directories that do not exist
        orphan_writes: bool,
        puts: usize,
    }

    impl RemoteStore for MemoryStore {
        fn make_dir(&mut self, path: &str) -> Result<(), TransferError> {
            self.mkdir_calls += 1;
            if self.deny_mkdir {
                return Err(TransferError::Rejected("550 Permission denied".into()));
            }
            if !self.dirs.insert(path.to_string()) {
                return Err(TransferError::Rejected("550 File exists".into()));
            }
            Ok(())
        }

        fn dir_exists(&mut self, path: &str) -> Result<bool, TransferError> {
            Ok(self.dirs.contains(path))
        }

        fn put(&mut self, path: &str, reader: &mut dyn Read) -> Result<u64, TransferError> {
            self.puts += 1;
            if self.fail_put_at == Some(self.puts) {
                return Err(TransferError::Rejected("452 Insufficient storage".into()));
            }
            if let Some(dir) = parent(path) {
                if !self.orphan_writes && !dir.is_empty() && !self.dirs.contains(dir) {
                    return Err(TransferError::Rejected(format!("553 no such directory {dir}")));
                }
            }
            let mut buf = Vec::new();
            reader
                .read_to_end(&mut buf)
                .map_err(|e| TransferError::Io(e.to_string()))?;
            let len = buf.len() as u64;
            self.files.insert(path.to_string(), buf);
            Ok(len)
        }

        fn close(self: Box<Self>) -> Result<(), TransferError> {
            Ok(())
        }
    }

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn mirrors_tree_with_identical_bytes() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("public");
        write(&root, "index.html", b"<html></html>");
        write(&root, "posts/first/index.html", b"first");
        write(&root, "img/logo.png", &[0u8, 159, 146, 150, 255]);
        write(&root, ".well-known/security.txt", b"contact");

        let mut store = MemoryStore::default();
        let report = upload_tree(&mut store, &root, "/www/blog", "blog", &NoopEventSink).unwrap();

        assert_eq!(report.files.len(), 4);
        assert_eq!(store.files["/www/blog/index.html"], b"<html></html>");
        assert_eq!(store.files["/www/blog/posts/first/index.html"], b"first");
        assert_eq!(store.files["/www/blog/img/logo.png"], vec![0u8, 159, 146, 150, 255]);
        assert_eq!(store.files["/www/blog/.well-known/security.txt"], b"contact");
        assert_eq!(report.bytes, 13 + 5 + 5 + 7);
        assert_eq!(report.dir_warnings, 0);
    }

    #[test]
    fn directory_creation_is_idempotent() {
        let mut store = MemoryStore::default();

        let first = ensure_remote_dirs(&mut store, "/www/a/b", "s", &NoopEventSink);
        let dirs_after_first = store.dirs.clone();
        let second = ensure_remote_dirs(&mut store, "/www/a/b", "s", &NoopEventSink);

        assert_eq!(first, 0);
        assert_eq!(second, 0);
        assert_eq!(store.dirs, dirs_after_first);
        assert_eq!(
            store.dirs.iter().cloned().collect::<Vec<_>>(),
            vec!["/www", "/www/a", "/www/a/b"]
        );
    }

    #[test]
    fn creation_is_attempted_for_every_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("public");
        write(&root, "a/1.txt", b"1");
        write(&root, "a/2.txt", b"2");

        let mut store = MemoryStore::default();
        upload_tree(&mut store, &root, "/www", "s", &NoopEventSink).unwrap();

        // "/www" and "/www/a" for each of the two files
        assert_eq!(store.mkdir_calls, 4);
    }

    #[test]
    fn unverifiable_directory_is_a_warning_not_an_error() {
        let mut store = MemoryStore {
            deny_mkdir: true,
            ..MemoryStore::default()
        };

        let warnings = ensure_remote_dirs(&mut store, "/www/a", "s", &NoopEventSink);
        assert_eq!(warnings, 2);
    }

    #[test]
    fn unverifiable_directories_are_counted_in_the_report() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("public");
        write(&root, "a/x.txt", b"x");
        write(&root, "a/y.txt", b"y");

        let mut store = MemoryStore {
            deny_mkdir: true,
            orphan_writes: true,
            ..MemoryStore::default()
        };
        let report = upload_tree(&mut store, &root, "/www", "s", &NoopEventSink).unwrap();

        // "/www" and "/www/a" for each of the two files
        assert_eq!(report.dir_warnings, 4);
        assert_eq!(report.files, vec!["/www/a/x.txt", "/www/a/y.txt"]);
    }

    #[test]
    fn third_of_five_failing_stops_the_upload() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("public");
        for name in ["1.txt", "2.txt", "3.txt", "4.txt", "5.txt"] {
            write(&root, name, name.as_bytes());
        }

        let mut store = MemoryStore {
            fail_put_at: Some(3),
            ..MemoryStore::default()
        };
        let err = upload_tree(&mut store, &root, "/www", "s", &NoopEventSink).unwrap_err();

        assert!(matches!(err, DeployError::TransferWrite { ref path, .. } if path == "/www/3.txt"));
        assert_eq!(
            store.files.keys().cloned().collect::<Vec<_>>(),
            vec!["/www/1.txt", "/www/2.txt"]
        );
        assert_eq!(store.puts, 3);
    }

    #[test]
    fn missing_output_root_fails_before_any_transfer() {
        let dir = tempdir().unwrap();
        let mut store = MemoryStore::default();

        let err = upload_tree(&mut store, &dir.path().join("public"), "/www", "s", &NoopEventSink)
            .unwrap_err();

        assert!(matches!(err, DeployError::OutputMissing { .. }));
        assert_eq!(store.mkdir_calls, 0);
        assert_eq!(store.puts, 0);
    }

    #[test]
    fn list_files_skips_directories_and_sorts() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.txt", b"");
        write(dir.path(), "a/z.txt", b"");
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let files = list_files(dir.path()).unwrap();
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(rel, vec![PathBuf::from("a/z.txt"), PathBuf::from("b.txt")]);
    }
}
