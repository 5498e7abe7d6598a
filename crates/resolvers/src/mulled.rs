// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mulled (biocontainers) image naming.
//!
//! A mulled image bundles one or more conda packages. Single-package images
//! are named after the package; multi-package images are named by hashing
//! the sorted package list:
//!
//! - v1: `mulled-v1-<sha1("pkg=ver[=build]" lines)>`
//! - v2: `mulled-v2-<sha1(package lines)>:<sha1(version lines)>[-<image build>]`

use std::fmt;
use std::str::FromStr;

use cres_core::Requirement;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// One conda package pinned (optionally) to a version and build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondaTarget {
    pub package: String,
    pub version: Option<String>,
    pub build: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("empty package name in target '{0}'")]
    EmptyPackage(String),
}

impl CondaTarget {
    pub fn new(package: impl Into<String>, version: Option<&str>, build: Option<&str>) -> Self {
        Self {
            package: package.into(),
            version: version.map(str::to_string),
            build: build.map(str::to_string),
        }
    }

    /// `version[=build]`, the line hashed into a v2 tag.
    fn pinned_version(&self) -> Option<String> {
        let version = self.version.as_deref()?;
        Some(match &self.build {
            Some(build) => format!("{}={}", version, build),
            None => version.to_string(),
        })
    }
}

/// `package[=version[=build]]`
impl fmt::Display for CondaTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pinned_version() {
            Some(pinned) => write!(f, "{}={}", self.package, pinned),
            None => f.write_str(&self.package),
        }
    }
}

impl FromStr for CondaTarget {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '=');
        let package = parts.next().unwrap_or_default();
        if package.is_empty() {
            return Err(TargetParseError::EmptyPackage(s.to_string()));
        }
        let version = parts.next().filter(|v| !v.is_empty());
        let build = parts.next().filter(|b| !b.is_empty());
        Ok(CondaTarget::new(package, version, build))
    }
}

/// Parse a comma-separated target list such as `samtools=1.3.1,bedtools=2.26.0`.
pub fn parse_targets(s: &str) -> Result<Vec<CondaTarget>, TargetParseError> {
    s.split(',').filter(|part| !part.trim().is_empty()).map(str::parse).collect()
}

/// Conda targets for a tool's `package` requirements; other kinds are dropped.
pub fn requirements_to_mulled_targets(requirements: &[Requirement]) -> Vec<CondaTarget> {
    requirements
        .iter()
        .filter(|req| req.is_package())
        .map(|req| CondaTarget::new(req.name.as_str(), req.version.as_deref(), None))
        .collect()
}

/// Mulled naming scheme version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashVersion {
    V1,
    #[default]
    V2,
}

cres_core::simple_display! {
    HashVersion {
        V1 => "v1",
        V2 => "v2",
    }
}

impl FromStr for HashVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(HashVersion::V1),
            "v2" => Ok(HashVersion::V2),
            other => Err(format!("unknown mulled hash version '{}' (expected v1 or v2)", other)),
        }
    }
}

/// Image name for `targets` under the given scheme; `None` for no targets.
pub fn image_name(
    hash: HashVersion,
    targets: &[CondaTarget],
    image_build: Option<&str>,
) -> Option<String> {
    match hash {
        HashVersion::V1 => v1_image_name(targets),
        HashVersion::V2 => v2_image_name(targets, image_build),
    }
}

/// Version 1 names. The image build of a v1 image is always 0 and is not
/// part of the name.
pub fn v1_image_name(targets: &[CondaTarget]) -> Option<String> {
    if let [single] = targets {
        return Some(simple_image_name(single, None));
    }
    let sorted = sorted_by_package(targets)?;
    let buffer = sorted.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("\n");
    Some(format!("mulled-v1-{}", sha1_hex(&buffer)))
}

/// Version 2 names. An empty `image_build` counts as absent.
pub fn v2_image_name(targets: &[CondaTarget], image_build: Option<&str>) -> Option<String> {
    let image_build = image_build.filter(|build| !build.is_empty());
    if let [single] = targets {
        return Some(simple_image_name(single, image_build));
    }
    let sorted = sorted_by_package(targets)?;

    let packages = sorted.iter().map(|t| t.package.as_str()).collect::<Vec<_>>().join("\n");
    let package_hash = sha1_hex(&packages);

    // Versions are only hashed when at least one package pins one.
    let version_hash = if sorted.iter().any(|t| t.version.is_some()) {
        let versions = sorted
            .iter()
            .map(|t| t.pinned_version().unwrap_or_else(|| "null".to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        sha1_hex(&versions)
    } else {
        String::new()
    };

    let build_suffix = match image_build {
        None => String::new(),
        Some(build) if !version_hash.is_empty() => format!("-{}", build),
        Some(build) => build.to_string(),
    };

    let mut name = format!("mulled-v2-{}", package_hash);
    if !version_hash.is_empty() || !build_suffix.is_empty() {
        name.push(':');
        name.push_str(&version_hash);
        name.push_str(&build_suffix);
    }
    Some(name)
}

/// `package[:version[--build]]` for single-package images.
fn simple_image_name(target: &CondaTarget, image_build: Option<&str>) -> String {
    let Some(version) = &target.version else {
        return target.package.clone();
    };
    let build = target
        .build
        .as_deref()
        .or(image_build.filter(|b| *b != "0"));
    match build {
        Some(build) => format!("{}:{}--{}", target.package, version, build),
        None => format!("{}:{}", target.package, version),
    }
}

fn sorted_by_package(targets: &[CondaTarget]) -> Option<Vec<&CondaTarget>> {
    if targets.is_empty() {
        return None;
    }
    let mut sorted: Vec<&CondaTarget> = targets.iter().collect();
    sorted.sort_by(|a, b| a.package.cmp(&b.package));
    Some(sorted)
}

fn sha1_hex(buffer: &str) -> String {
    format!("{:x}", Sha1::digest(buffer.as_bytes()))
}

#[cfg(test)]
#[path = "mulled_tests.rs"]
mod tests;
