use crate::areas::config::Config;
use crate::areas::refs::Refs;
use crate::areas::stash::Stash;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    refs: Refs,
    config: Config,
    stash: Stash,
}

impl Repository {
    /// Open the repository containing `path`
    ///
    /// `path` may be the work tree root or any directory below it; the
    /// nearest ancestor holding a `.git` directory is used.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = Path::new(path).canonicalize()?;
        let Some(path) = Self::discover(&start) else {
            anyhow::bail!("not a git repository: {:?}", start);
        };
        let git_path = path.join(GIT_DIR);
        tracing::debug!(git_path = ?git_path, "opened repository");

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            refs: Refs::new(git_path.clone().into_boxed_path()),
            config: Config::new(git_path.clone().into_boxed_path()),
            stash: Stash::new(git_path.into_boxed_path()),
        })
    }

    fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }
}
