//! In-memory union-directory mount table.
//!
//! Models what bind(2) and mount(2) do to a name space without touching the
//! host: every mount point maps to an ordered list of union members, searched
//! front to back. Members are not themselves resolved through the table.

use std::collections::BTreeMap;
use std::fmt;

use nsfile_core::{Action, Namespace, NamespaceError, NamespaceResult, Placement, UnionPosition};

use crate::path::{normalize, strip_mount_prefix};

/// Where a union member's files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A tree already in the name space, spliced by `bind`.
    Path(String),
    /// A tree served over a connection, attached by `mount`.
    Service { server: String, spec: Option<String> },
    /// A tree exported by a remote host, attached by `import`.
    Import { host: String, remote_path: String },
}

impl Source {
    /// The root a path below the mount point is appended to.
    ///
    /// Service roots render as `server` or `server:spec`, imports as
    /// `host:remote_path`.
    pub fn root(&self) -> String {
        match self {
            Source::Path(path) => path.clone(),
            Source::Service { server, spec: None } => server.clone(),
            Source::Service {
                server,
                spec: Some(spec),
            } => format!("{}:{}", server, spec),
            Source::Import { host, remote_path } => format!("{}:{}", host, remote_path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root())
    }
}

/// One constituent of a union directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionMember {
    pub source: Source,
    /// Creates in the union land here (`-c`).
    pub create: bool,
    /// Client-side caching enabled (`-C`, mounts only).
    pub cache: bool,
}

impl UnionMember {
    fn new(source: Source, placement: Placement) -> Self {
        Self {
            source,
            create: placement.contains(Placement::CREATE),
            cache: placement.contains(Placement::CACHE),
        }
    }

    /// `name` as given and `path` as `name` resolved against the current
    /// directory. Host names are never paths.
    fn matches(&self, name: &str, path: &str) -> bool {
        match &self.source {
            Source::Path(source) => source == path,
            Source::Service { server, .. } => server == path,
            Source::Import { host, .. } => host == name,
        }
    }
}

/// A name space held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryNamespace {
    unions: BTreeMap<String, Vec<UnionMember>>,
    cwd: String,
}

impl Default for MemoryNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNamespace {
    /// Create an empty name space rooted at `/`.
    pub fn new() -> Self {
        Self {
            unions: BTreeMap::new(),
            cwd: "/".to_string(),
        }
    }

    /// The current directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// All mount points, in path order.
    pub fn mount_points(&self) -> impl Iterator<Item = &str> {
        self.unions.keys().map(String::as_str)
    }

    /// The union mounted exactly at `path`, if any.
    pub fn union(&self, path: &str) -> Option<&[UnionMember]> {
        self.unions
            .get(&normalize(&self.cwd, path))
            .map(Vec::as_slice)
    }

    /// Candidate locations for `path`, in union search order.
    ///
    /// The mount point with the longest matching prefix wins. A path under no
    /// mount point resolves to itself.
    pub fn resolve(&self, path: &str) -> Vec<String> {
        let path = normalize(&self.cwd, path);
        let best = self
            .unions
            .iter()
            .filter_map(|(mount, members)| {
                strip_mount_prefix(&path, mount).map(|rest| (mount.len(), rest, members))
            })
            .max_by_key(|(len, _, _)| *len);

        match best {
            Some((_, rest, members)) => members
                .iter()
                .map(|m| join(&m.source.root(), rest))
                .collect(),
            None => vec![path],
        }
    }

    /// Where a file created in directory `dir` would land.
    ///
    /// In a union, the first member marked for creation; `None` if no member
    /// is. A directory that is not a mount point is its own target.
    pub fn create_target(&self, dir: &str) -> Option<String> {
        let dir = normalize(&self.cwd, dir);
        match self.unions.get(&dir) {
            Some(members) => members
                .iter()
                .find(|m| m.create)
                .map(|m| m.source.root()),
            None => Some(dir),
        }
    }

    fn attach(&mut self, old: String, member: UnionMember, placement: Placement) {
        tracing::debug!(old = %old, source = %member.source, placement = %placement, "attaching");
        match placement.position() {
            UnionPosition::Replace => {
                self.unions.insert(old, vec![member]);
            }
            UnionPosition::Before | UnionPosition::After => {
                let members = self.unions.entry(old).or_insert_with_key(|old| {
                    vec![UnionMember::new(Source::Path(old.clone()), Placement::REPLACE)]
                });
                if placement.position() == UnionPosition::Before {
                    members.insert(0, member);
                } else {
                    members.push(member);
                }
            }
        }
    }
}

fn join(root: &str, rest: &str) -> String {
    if rest.is_empty() {
        root.to_string()
    } else {
        format!("{}{}", root.trim_end_matches('/'), rest)
    }
}

fn require(value: &str, what: &str) -> NamespaceResult<()> {
    if value.is_empty() {
        return Err(NamespaceError::invalid_spec(format!("empty {}", what)));
    }
    Ok(())
}

impl Namespace for MemoryNamespace {
    fn bind(&mut self, new: &str, old: &str, placement: Placement) -> NamespaceResult<()> {
        let new = normalize(&self.cwd, new);
        let old = normalize(&self.cwd, old);
        // Caching only applies to mounts.
        let mut member = UnionMember::new(Source::Path(new), placement);
        member.cache = false;
        self.attach(old, member, placement);
        Ok(())
    }

    fn mount(
        &mut self,
        server: &str,
        old: &str,
        spec: Option<&str>,
        placement: Placement,
    ) -> NamespaceResult<()> {
        require(server, "server name")?;
        let source = Source::Service {
            server: normalize(&self.cwd, server),
            spec: spec.filter(|s| !s.is_empty()).map(str::to_string),
        };
        let old = normalize(&self.cwd, old);
        self.attach(old, UnionMember::new(source, placement), placement);
        Ok(())
    }

    fn unmount(&mut self, new: Option<&str>, old: &str) -> NamespaceResult<()> {
        let old = normalize(&self.cwd, old);
        let Some(new) = new else {
            return match self.unions.remove(&old) {
                Some(_) => Ok(()),
                None => Err(NamespaceError::not_mounted(old)),
            };
        };

        let path = normalize(&self.cwd, new);
        let members = self
            .unions
            .get_mut(&old)
            .ok_or_else(|| NamespaceError::not_mounted(old.clone()))?;
        let before = members.len();
        members.retain(|m| !m.matches(new, &path));
        if members.len() == before {
            return Err(NamespaceError::not_mounted(format!("{} on {}", path, old)));
        }
        if members.is_empty() {
            self.unions.remove(&old);
        }
        Ok(())
    }

    fn clear(&mut self) -> NamespaceResult<()> {
        tracing::debug!(mounts = self.unions.len(), "clearing name space");
        self.unions.clear();
        self.cwd = "/".to_string();
        Ok(())
    }

    fn chdir(&mut self, dir: &str) -> NamespaceResult<()> {
        require(dir, "directory")?;
        let dir = normalize(&self.cwd, dir);
        if dir.starts_with('#') {
            return Err(NamespaceError::invalid_spec(format!(
                "{}: cannot {} into a device",
                dir,
                Action::ChangeDir
            )));
        }
        self.cwd = dir;
        Ok(())
    }

    fn import(
        &mut self,
        host: &str,
        remote_path: Option<&str>,
        mountpoint: &str,
        placement: Placement,
    ) -> NamespaceResult<()> {
        require(host, "host")?;
        let source = Source::Import {
            host: host.to_string(),
            remote_path: remote_path.unwrap_or("/").to_string(),
        };
        let mountpoint = normalize(&self.cwd, mountpoint);
        self.attach(mountpoint, UnionMember::new(source, placement), placement);
        Ok(())
    }
}
