//! Shell completion generation for spdx-complete
//!
//! This module generates completion scripts for bash, zsh and fish. On top of
//! the clap-generated script, the `suggest` and `tokenize` arguments complete
//! license keys read from `spdx-complete catalog --keys`.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

const BIN_NAME: &str = "spdx-complete";

/// Generate shell completion script and print it to stdout
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    print!("{}", completion_script(shell));
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(ConfigError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish",
            shell_name
        ))
        .into()),
    }
}

/// Full script for `shell`: clap's output plus license key completion
fn completion_script(shell: Shell) -> String {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);
    let basic_completion = String::from_utf8_lossy(&buffer);

    let extra = match shell {
        Shell::Bash => BASH_LICENSE_KEYS,
        Shell::Zsh => ZSH_LICENSE_KEYS,
        _ => FISH_LICENSE_KEYS,
    };

    format!("{}\n{}", basic_completion, extra)
}

const BASH_LICENSE_KEYS: &str = r#"
# License keys and operators for the expression argument
_spdx_complete_keys() {
    spdx-complete catalog --keys 2>/dev/null
    printf '%s\n' AND OR WITH
}

_spdx_complete_enhanced() {
    local cur prev words cword
    _init_completion || return

    if [[ "${words[1]}" == "suggest" || "${words[1]}" == "tokenize" ]] && (( cword >= 2 )); then
        COMPREPLY=($(compgen -W "$(_spdx_complete_keys)" -- "$cur"))
        return 0
    fi

    _spdx-complete "$@"
}

complete -F _spdx_complete_enhanced spdx-complete
"#;

const ZSH_LICENSE_KEYS: &str = r#"
# License keys and operators for the expression argument
_spdx_complete_keys() {
    local -a keys
    keys=(${(f)"$(spdx-complete catalog --keys 2>/dev/null)"} AND OR WITH)
    _describe 'license keys' keys
}

_spdx_complete_enhanced() {
    if [[ ${words[2]} == "suggest" || ${words[2]} == "tokenize" ]] && (( CURRENT > 2 )); then
        _spdx_complete_keys
        return 0
    fi

    _spdx-complete "$@"
}

compdef _spdx_complete_enhanced spdx-complete
"#;

const FISH_LICENSE_KEYS: &str = r#"
# License keys and operators for the expression argument
function __spdx_complete_keys
    spdx-complete catalog --keys 2>/dev/null
    printf '%s\n' AND OR WITH
end

complete -c spdx-complete -n "__fish_seen_subcommand_from suggest tokenize" -f -a "(__spdx_complete_keys)"
"#;
