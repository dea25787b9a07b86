//! Shell completion scripts.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd`, registered under its binary name.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin = cmd.get_bin_name().unwrap_or(cmd.get_name()).to_string();
    tracing::debug!(%shell, bin, "writing completion script");
    generate(shell, cmd, bin, out);
}
