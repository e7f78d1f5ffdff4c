use std::fmt;
use std::path::PathBuf;

/// One menu selection, parsed from a single trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    LaunchUi,
    Train,
    Simulate,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::LaunchUi,
            "2" => MenuChoice::Train,
            "3" => MenuChoice::Simulate,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// 子行程的完整命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl ChildCommand {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ChildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a child that was spawned successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Ok,
    /// `code` is `None` when the child was killed by a signal.
    ChildFailed { code: Option<i32> },
}

impl ChildStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ChildStatus::Ok,
            code => ChildStatus::ChildFailed { code },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed { choice: MenuChoice },
    ChildFailed { choice: MenuChoice, code: Option<i32> },
    Exited,
    Rejected { input: String },
}

impl DispatchOutcome {
    /// Child failures are reported but do not change the launcher's exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchOutcome::Completed { .. }
            | DispatchOutcome::ChildFailed { .. }
            | DispatchOutcome::Exited => 0,
            DispatchOutcome::Rejected { .. } => 1,
        }
    }
}
