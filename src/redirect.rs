use std::{
    fs::{File, OpenOptions},
    io,
    os::{fd::AsRawFd, unix::fs::OpenOptionsExt},
    path::{Path, PathBuf},
};

use crate::result::{Result, ShellError};

const OUTPUT_MODE: u32 = 0o644;

/// `> file` for one command. The target is opened (created or truncated) when
/// the redirect is built and installed over stdout inside the child.
#[derive(Debug)]
pub struct OutputRedirect {
    pub filename: PathBuf,
    file: File,
}

impl OutputRedirect {
    pub fn open(filename: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(OUTPUT_MODE)
            .open(filename)
            .map_err(|source| ShellError::RedirectFailure {
                path: filename.to_path_buf(),
                source,
            })?;
        Ok(Self {
            filename: filename.to_path_buf(),
            file,
        })
    }

    /// Makes the file the process's stdout.
    ///
    /// Runs between fork and exec, after the pipe ends have been bound, so the
    /// file wins over any pipe on stdout. Only async-signal-safe calls here.
    pub fn install(&self) -> io::Result<()> {
        // The original descriptor is close-on-exec; the duplicate is not.
        if unsafe { libc::dup2(self.file.as_raw_fd(), libc::STDOUT_FILENO) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write};

    use super::*;

    #[test]
    fn open_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents").unwrap();

        let mut redirect = OutputRedirect::open(&path).unwrap();
        redirect.file.write_all(b"new").unwrap();
        drop(redirect);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn created_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode.txt");
        drop(OutputRedirect::open(&path).unwrap());

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only remove bits
        assert_eq!(mode & !OUTPUT_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn missing_directory_is_a_redirect_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        assert!(matches!(
            OutputRedirect::open(&path),
            Err(ShellError::RedirectFailure { .. })
        ));
    }
}
