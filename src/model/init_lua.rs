//! Generated `init.lua` content.
//!
//! The file is written in two passes: [`BASE`] declares the plugins so the
//! editor can install them, and [`EXTENSION`] configures plugins that must
//! already be installed to be `require`d.

/// vim-plug bootstrap script.
pub const PLUG_URL: &str = "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim";

pub const BASE: &str = "
local Plug = vim.fn['plug#']

vim.call('plug#begin', '~/.config/nvim/plugged')

Plug('tpope/vim-sensible')
Plug('scrooloose/NERDTree', {on = 'NERDTreeToggle'})
Plug('junegunn/tabularize')
Plug('nvim-lualine/lualine.nvim')
Plug('nvim-tree/nvim-web-devicons')
Plug('nvim-treesitter/nvim-treesitter', {['do'] = vim.fn['TSUpdateSync']})

vim.call('plug#end')
";

// `enable`/`autoinstall` are `true`; a bare `on` is an undefined Lua global.
pub const EXTENSION: &str = "
require('nvim-treesitter.configs').setup {
    highlight = {
        enable = true,
        autoinstall = true,
    }
}

require('lualine').setup {
    options = {
       section_separators = { left = '\u{e0b4}', right = '\u{e0b6}' },
       component_separators = { left = '\u{e0b5}', right = '\u{e0b7}' }
    }
}
";
