// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the schedule HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    /// A saved copy of the schedule page
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub user_agent: String,
    /// Output path without extension; `.json` and `.csv` are appended.
    dest: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: Source::Remote(SCHEDULE_URL.to_string()),
            user_agent: USER_AGENT.to_string(),
            dest: PathBuf::from(DEFAULT_DEST),
        }
    }
}

impl Options {
    /// `<dest>.<ext>`. The stem may itself contain dots, so this appends
    /// rather than using `with_extension`.
    pub fn out_path(&self, ext: &str) -> PathBuf {
        let mut s = self.dest.clone().into_os_string();
        s.push(".");
        s.push(ext);
        PathBuf::from(s)
    }

    pub fn set_dest(&mut self, stem: &str) {
        self.dest = PathBuf::from(stem.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_paths_use_fixed_stem() {
        let opts = Options::default();
        assert_eq!(opts.out_path("json"), Path::new("schedule/nicar-2019-schedule.json"));
        assert_eq!(opts.out_path("csv"), Path::new("schedule/nicar-2019-schedule.csv"));
        assert_eq!(opts.source, Source::Remote(SCHEDULE_URL.to_string()));
    }

    #[test]
    fn dotted_stem_is_not_truncated() {
        let mut opts = Options::default();
        opts.set_dest("out/nicar.v2 ");
        assert_eq!(opts.out_path("csv"), Path::new("out/nicar.v2.csv"));
    }
}
