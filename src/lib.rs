//! sift — a GTD task panel for markdown notes.
//!
//! The panel scans a vault of `*.md` files for checkbox task lines,
//! classifies them into GTD buckets by inline tag, and moves them between
//! buckets by rewriting the lines in place. A ratatui terminal UI and a
//! small CLI sit on top of the same core.

pub mod cli;
pub mod io;
pub mod markup;
pub mod model;
pub mod ops;
pub mod panel;
pub mod tui;
pub mod util;
