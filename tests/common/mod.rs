use std::{
    fs, io,
    ops::Deref,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Scratch directory under `/tmp`, so paths stay well under the token limit.
pub struct Scratch {
    dir: TempDir,
}

impl Deref for Scratch {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.dir.path()
    }
}

impl Scratch {
    pub fn build() -> Result<Self, io::Error> {
        let dir = tempfile::Builder::new().prefix("minish").tempdir_in("/tmp")?;
        Ok(Scratch { dir })
    }

    #[allow(dead_code)]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    #[allow(dead_code)]
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).unwrap()
    }

    #[allow(dead_code)]
    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }
}

/// Runs `line` after replacing each `{}` with the scratch directory.
#[allow(unused_macros)]
macro_rules! run {
    ($scratch:expr, $line:literal) => {
        minish::run_line(&$line.replace("{}", &$scratch.display().to_string()))
    };
}
