/// Tree-sitter grammars installed on first setup, in install order.
pub const LANGUAGES: &[&str] = &[
    "bash",
    "bibtex",
    "c",
    "cpp",
    "c_sharp",
    "cmake",
    "css",
    "dockerfile",
    "dot",
    "html",
    "javascript",
    "json",
    "latex",
    "lua",
    "luadoc",
    "make",
    "markdown",
    "ninja",
    "python",
    "r",
    "robot",
    "rust",
    "scala",
    "scss",
    "toml",
    "vim",
    "vimdoc",
];

/// Ex command that installs every grammar synchronously, then quits.
pub fn install_command() -> String {
    format!("TSInstallSync {} | qa", LANGUAGES.join(" "))
}
