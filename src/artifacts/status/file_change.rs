use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChange {
    /// Present in the index, pending for the next commit
    Staged,
    /// Tracked by the last commit, content differs in the working tree
    Modified,
    /// Neither staged nor committed
    Untracked,
}

impl FileChange {
    /// Two-column porcelain label
    pub fn label(&self) -> &'static str {
        match self {
            FileChange::Staged => "A ",
            FileChange::Modified => " M",
            FileChange::Untracked => "??",
        }
    }

    pub fn colored_label(&self) -> String {
        match self {
            FileChange::Staged => self.label().green().to_string(),
            FileChange::Modified => self.label().red().to_string(),
            FileChange::Untracked => self.label().red().to_string(),
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
