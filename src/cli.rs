use clap::Parser;

use crate::bootstrap::Programs;

/// nvim-jk - back up the current neovim config and install a fresh one
#[derive(Parser, Debug)]
#[command(name = "nvim-jk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Back up the current neovim config and install a fresh one")]
#[command(long_about = None)]
pub struct Cli {
    /// Editor binary driven for plugin and grammar installation
    #[arg(long, value_name = "PROGRAM", default_value = "nvim")]
    pub editor: String,

    /// curl-compatible downloader used to fetch vim-plug
    #[arg(long, value_name = "PROGRAM", default_value = "curl")]
    pub fetcher: String,
}

impl Cli {
    pub fn programs(&self) -> Programs {
        Programs {
            editor: self.editor.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_stock_install() {
        let cli = Cli::try_parse_from(["nvim-jk"]).unwrap();
        let programs = cli.programs();
        assert_eq!(programs.editor, "nvim");
        assert_eq!(programs.fetcher, "curl");
    }

    #[test]
    fn programs_can_be_overridden() {
        let cli =
            Cli::try_parse_from(["nvim-jk", "--editor", "/opt/nvim/bin/nvim", "--fetcher", "wcurl"])
                .unwrap();
        assert_eq!(cli.editor, "/opt/nvim/bin/nvim");
        assert_eq!(cli.fetcher, "wcurl");
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["nvim-jk", "extra"]).is_err());
    }
}
