//! Grid-manager certificate administration.
//!
//! A node admits a grid manager by storing one signed certificate per name
//! in its configuration directory, as `<name>.cert` next to `fakegrid.cfg`.
//! This module validates certificate input before anything is written and
//! refuses to replace a certificate that already exists.
//!
//! Signature verification is out of scope: the certificate is checked for
//! shape (a JSON object carrying `certificate` and `signature` members)
//! and stored verbatim.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

/// The node's configuration file. Its presence marks a directory as a node
/// directory.
pub const NODE_CONFIG_FILENAME: &str = "fakegrid.cfg";

/// Extension used for stored certificates.
const CERT_EXTENSION: &str = "cert";

/// Read and validate a certificate from `filename`, or from `stdin` when
/// `filename` is `-`.
///
/// Fails before any filesystem mutation: unreadable or unparseable input
/// and structurally incomplete certificates are usage errors.
pub fn read_certificate(filename: &str, stdin: &mut dyn Read) -> Result<serde_json::Value> {
    let text = if filename == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Reading certificate from stdin failed")?;
        buf
    } else {
        fs::read_to_string(filename)
            .with_context(|| format!("Reading certificate from '{filename}' failed"))?
    };

    let parsed: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) if filename == "-" => bail!("Reading certificate from stdin failed: {e}"),
        Err(e) => bail!("Reading certificate from '{filename}' failed: {e}"),
    };

    let complete = parsed
        .as_object()
        .is_some_and(|obj| obj.contains_key("certificate") && obj.contains_key("signature"));
    if !complete {
        bail!("Grid Manager certificate must contain \"certificate\" and \"signature\"");
    }
    Ok(parsed)
}

/// Store `certificate` under `name` in the node directory.
///
/// Returns the process exit code: 0 on success, 1 when a certificate with
/// this name already exists (the existing file is left untouched).
pub fn add_grid_manager_cert(
    node_dir: &Path,
    name: &str,
    certificate: &serde_json::Value,
    stderr: &mut dyn Write,
) -> Result<u8> {
    let config = node_dir.join(NODE_CONFIG_FILENAME);
    if !config.is_file() {
        bail!(
            "'{}' doesn't look like a node directory (no {NODE_CONFIG_FILENAME})",
            node_dir.display()
        );
    }

    let cert_path = node_dir.join(format!("{name}.{CERT_EXTENSION}"));
    if cert_path.exists() {
        writeln!(stderr, "Already have certificate for '{name}'")?;
        return Ok(1);
    }

    let rendered = serde_json::to_string_pretty(certificate)?;
    fs::write(&cert_path, rendered)
        .with_context(|| format!("writing '{}' failed", cert_path.display()))?;
    tracing::debug!(name, path = %cert_path.display(), "stored grid-manager certificate");

    let count = certificate_count(node_dir)?;
    writeln!(
        stderr,
        "{}",
        format!("There are now {count} certificates").green()
    )?;
    Ok(0)
}

/// Number of `.cert` files in the node directory.
fn certificate_count(node_dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in node_dir.read_dir().context("listing node directory failed")? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == CERT_EXTENSION) {
            count += 1;
        }
    }
    Ok(count)
}
