// Copyright (C) Brian G. Milnes 2025

//! Common test utilities: scratch Cargo packages on disk

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `files` (relative path, contents) under `dir`, plus a Cargo.toml.
pub fn write_package(dir: &Path, files: &[(&str, &str)]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scratch".to_string());
    fs::write(
        dir.join("Cargo.toml"),
        format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n"),
    )?;
    for (rel, contents) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }
    Ok(dir.to_path_buf())
}

/// Read a file under `dir` as a string.
pub fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap()
}

/// Location string for a package directory.
pub fn location(dir: &Path) -> String {
    dir.display().to_string()
}
