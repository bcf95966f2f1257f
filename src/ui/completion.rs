//! Shell completion for loadmail

use clap::{Command, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ui::cli::Cli;

const BIN_NAME: &str = "loadmail";

/// Write completions for `app` to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Write completions for `app` to any writer
pub fn write_completions<G: Generator, W: Write>(generator: G, app: &mut Command, out: &mut W) {
    generate(generator, app, BIN_NAME, out);
}

/// Completion script for the loadmail CLI as a string
pub fn completion_script(shell: Shell) -> Result<String, String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    write_completions(shell, &mut cmd, &mut buf);
    String::from_utf8(buf).map_err(|e| format!("Failed to generate completion script: {e}"))
}

/// Install the completion script into the per-user directory for `shell`
pub fn install_completion(shell: Shell) -> Result<String, String> {
    let home =
        std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?;
    install_completion_in(Path::new(&home), shell)
}

/// Install below an explicit home directory
pub fn install_completion_in(home: &Path, shell: Shell) -> Result<String, String> {
    let dir = completion_dir(home, shell)?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {e}", dir.display()))?;

    let path = dir.join(completion_filename(shell));
    fs::write(&path, completion_script(shell)?)
        .map_err(|e| format!("Failed to write completion file to {}: {e}", path.display()))?;

    Ok(format!(
        "Shell completion installed to {}\n{}",
        path.display(),
        setup_hint(shell, &dir)
    ))
}

fn completion_dir(home: &Path, shell: Shell) -> Result<PathBuf, String> {
    match shell {
        Shell::Bash => Ok(home.join(".local/share/bash-completion/completions")),
        Shell::Zsh => Ok(home.join(".zsh/completions")),
        Shell::Fish => Ok(home.join(".config/fish/completions")),
        other => Err(format!(
            "Installing {other} completions is not supported. \
             Use '{BIN_NAME} completion-generate {other}' and add the output to your profile."
        )),
    }
}

fn completion_filename(shell: Shell) -> String {
    match shell {
        Shell::Zsh => format!("_{BIN_NAME}"),
        Shell::Fish => format!("{BIN_NAME}.fish"),
        _ => BIN_NAME.to_string(),
    }
}

fn setup_hint(shell: Shell, dir: &Path) -> String {
    match shell {
        Shell::Zsh => format!(
            "Add to ~/.zshrc:\n  fpath=({} $fpath)\n  autoload -U compinit && compinit",
            dir.display()
        ),
        _ => "Restart your shell to enable completions.".to_string(),
    }
}
