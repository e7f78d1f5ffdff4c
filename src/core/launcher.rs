use crate::config::LauncherSettings;
use crate::core::menu;
use crate::domain::model::{ChildCommand, ChildStatus, DispatchOutcome, MenuChoice};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Shows the menu, reads one choice and dispatches it. One choice per run.
pub struct Launcher<R: ProcessRunner> {
    runner: R,
    settings: LauncherSettings,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(runner: R, settings: LauncherSettings) -> Self {
        Self { runner, settings }
    }

    pub async fn run<I: BufRead, O: Write>(
        &self,
        mut input: I,
        out: &mut O,
    ) -> Result<DispatchOutcome> {
        menu::render(out)?;
        let choice = menu::read_choice(&mut input, out)?;
        // 釋放 stdin，子行程會繼承終端
        drop(input);

        tracing::debug!("Menu choice: {:?}", choice);
        self.dispatch(choice, out).await
    }

    pub async fn dispatch<O: Write>(
        &self,
        choice: MenuChoice,
        out: &mut O,
    ) -> Result<DispatchOutcome> {
        match choice {
            MenuChoice::LaunchUi => {
                let command = self.settings.ui_command();
                self.launch(MenuChoice::LaunchUi, command, out).await
            }
            MenuChoice::Train => {
                let command = self.settings.train_command();
                self.launch(MenuChoice::Train, command, out).await
            }
            MenuChoice::Simulate => {
                let command = self.settings.simulate_command();
                self.launch(MenuChoice::Simulate, command, out).await
            }
            MenuChoice::Exit => {
                writeln!(out, "{}", menu::GOODBYE)?;
                Ok(DispatchOutcome::Exited)
            }
            MenuChoice::Invalid(input) => {
                tracing::debug!("Rejected menu input: {:?}", input);
                writeln!(out, "{}", menu::INVALID_CHOICE)?;
                Ok(DispatchOutcome::Rejected { input })
            }
        }
    }

    async fn launch<O: Write>(
        &self,
        choice: MenuChoice,
        command: ChildCommand,
        out: &mut O,
    ) -> Result<DispatchOutcome> {
        if let Some(message) = menu::announcement(&choice) {
            writeln!(out, "{}", message)?;
        }

        if self.settings.dry_run {
            writeln!(out, "Would run: {}", command)?;
            return Ok(DispatchOutcome::Completed { choice });
        }

        // The child writes straight to the inherited stdout.
        out.flush()?;

        tracing::info!(
            "🚀 Running `{}` in {}",
            command,
            command.working_dir.display()
        );

        match self.runner.run(&command).await? {
            ChildStatus::Ok => {
                tracing::info!("✅ `{}` finished successfully", command);
                Ok(DispatchOutcome::Completed { choice })
            }
            ChildStatus::ChildFailed { code } => {
                // 失敗訊息已輸出到 stdout，這裡只留除錯紀錄
                tracing::debug!("`{}` failed with exit code {:?}", command, code);
                for line in menu::failure_hint(&choice) {
                    writeln!(out, "{}", line)?;
                }
                Ok(DispatchOutcome::ChildFailed { choice, code })
            }
        }
    }
}
