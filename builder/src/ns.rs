//! Build a name space from a namespace file.
//!
//! `new_ns` starts from an empty name space; `add_ns` applies the file to the
//! name space as it stands. Both read the file and its includes from the host
//! filesystem. Environment setup (user, home) is left to the caller.

use std::path::Path;

use nsfile_core::Namespace;
use nsfile_parser::parse_file;

use crate::builder::Builder;
use crate::config::NsConfig;
use crate::error::BuildResult;
use crate::include::FsLoader;
use crate::result::BuildSummary;

/// Clear the name space and interpret `nsfile` (the configured default when `None`).
///
/// The file is parsed before anything is cleared, so a malformed file leaves
/// the name space untouched.
#[tracing::instrument(level = "info", skip(ns, config), err)]
pub fn new_ns<N: Namespace + ?Sized>(
    ns: &mut N,
    nsfile: Option<&Path>,
    config: &NsConfig,
) -> BuildResult<BuildSummary> {
    run(ns, nsfile, config, true)
}

/// Interpret `nsfile` on top of the current name space.
#[tracing::instrument(level = "info", skip(ns, config), err)]
pub fn add_ns<N: Namespace + ?Sized>(
    ns: &mut N,
    nsfile: Option<&Path>,
    config: &NsConfig,
) -> BuildResult<BuildSummary> {
    run(ns, nsfile, config, false)
}

fn run<N: Namespace + ?Sized>(
    ns: &mut N,
    nsfile: Option<&Path>,
    config: &NsConfig,
    from_scratch: bool,
) -> BuildResult<BuildSummary> {
    let path = nsfile.unwrap_or(config.namespace_file.as_path());
    let script = parse_file(path)?;

    let mut loader = FsLoader::from_config(config).with_root(path);
    let mut builder = Builder::new(ns).with_loader(&mut loader);
    if from_scratch {
        builder.build_from_scratch(&script)
    } else {
        builder.build(&script)
    }
}
