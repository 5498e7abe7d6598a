// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolver chain specs
//!
//! Verify first-match ordering across resolver kinds.

use super::prelude::*;

const EXPLICIT_THEN_FALLBACK: &str = r#"
- type: explicit
- type: fallback
  identifier: ubuntu:22.04
"#;

const FALLBACK_THEN_EXPLICIT: &str = r#"
- type: fallback
  identifier: ubuntu:22.04
- type: explicit
"#;

#[test]
fn declared_container_beats_later_fallback() {
    let project = Project::empty();
    let chain = project.chain("chain.yml", EXPLICIT_THEN_FALLBACK);
    let tool = tool_with_containers("bwa", vec![docker("quay.io/biocontainers/bwa:0.7.17")]);

    let (kind, identifier) = resolve_with(&chain, &both(), &tool).unwrap();
    assert_eq!(kind, ResolverKind::Explicit);
    assert_eq!(identifier, "quay.io/biocontainers/bwa:0.7.17");
}

#[test]
fn earlier_fallback_hides_declared_container() {
    let project = Project::empty();
    let chain = project.chain("chain.yml", FALLBACK_THEN_EXPLICIT);
    let tool = tool_with_containers("bwa", vec![docker("quay.io/biocontainers/bwa:0.7.17")]);

    let (kind, identifier) = resolve_with(&chain, &both(), &tool).unwrap();
    assert_eq!(kind, ResolverKind::Fallback);
    assert_eq!(identifier, "ubuntu:22.04");
}

#[test]
fn tool_without_containers_falls_through_to_fallback() {
    let project = Project::empty();
    let chain = project.chain("chain.yml", EXPLICIT_THEN_FALLBACK);
    let tool = ToolInfo::new("cat1");

    let (kind, identifier) = resolve_with(&chain, &both(), &tool).unwrap();
    assert_eq!(kind, ResolverKind::Fallback);
    assert_eq!(identifier, "ubuntu:22.04");
}

#[test]
fn default_chain_runs_docker_declarations_through_singularity() {
    let chain = ResolverChain::default_chain();
    let tool = tool_with_containers("bwa", vec![docker("quay.io/biocontainers/bwa:0.7.17")]);
    let singularity_only: EnabledTypes = "singularity".parse().unwrap();

    let resolved = chain.find(&singularity_only, &tool, &ResolveOptions::default()).unwrap();
    assert_eq!(resolved.kind, ResolverKind::ExplicitSingularity);
    assert_eq!(resolved.description.identifier(), "docker://quay.io/biocontainers/bwa:0.7.17");
    assert_eq!(resolved.description.container_type(), ContainerType::Singularity);
    assert!(resolved.description.is_explicit());
}

#[test]
fn nothing_enabled_resolves_nothing() {
    let project = Project::empty();
    let chain = project.chain("chain.yml", EXPLICIT_THEN_FALLBACK);
    let tool = tool_with_containers("bwa", vec![docker("bwa:0.7.17"), singularity("/cvmfs/bwa")]);

    assert_eq!(resolve_with(&chain, &EnabledTypes::none(), &tool), None);
}

#[test]
fn conditional_fallbacks_pick_by_tool_shape() {
    let project = Project::empty();
    let chain = project.chain(
        "chain.yml",
        r#"
- type: requires_galaxy_environment
  identifier: galaxy/env:latest
- type: fallback_no_requirements
  identifier: debian:bookworm
"#,
    );

    let bare = ToolInfo::new("sort1");
    let with_package = tool_with_package("samtools_view", "samtools", "1.17");
    let needs_galaxy = tool_with_package("upload1", "python", "3.11")
        .requires_galaxy_python_environment(true);

    assert_eq!(
        resolve_with(&chain, &both(), &bare),
        Some((ResolverKind::FallbackNoRequirements, "debian:bookworm".to_string()))
    );
    assert_eq!(resolve_with(&chain, &both(), &with_package), None);
    assert_eq!(
        resolve_with(&chain, &both(), &needs_galaxy),
        Some((ResolverKind::RequiresGalaxyEnvironment, "galaxy/env:latest".to_string()))
    );
}

#[test]
fn mapping_prefers_specific_version_row() {
    let project = Project::empty();
    let chain = project.chain(
        "chain.yml",
        r#"
- type: mapping
  mappings:
    - tool_id: bwa_mem
      tool_version: "0.7.15"
      identifier: quay.io/biocontainers/bwa:0.7.15--0
    - tool_id: bwa_mem
      identifier: quay.io/biocontainers/bwa:latest
- type: explicit
"#,
    );

    let pinned = ToolInfo::new("bwa_mem").tool_version("0.7.15");
    let other = ToolInfo::new("bwa_mem").tool_version("0.7.17");
    let unknown = tool_with_containers("hisat2", vec![docker("hisat2:2.2.1")]);

    assert_eq!(
        resolve_with(&chain, &both(), &pinned).map(|(_, id)| id).as_deref(),
        Some("quay.io/biocontainers/bwa:0.7.15--0")
    );
    assert_eq!(
        resolve_with(&chain, &both(), &other).map(|(_, id)| id).as_deref(),
        Some("quay.io/biocontainers/bwa:latest")
    );
    assert_eq!(
        resolve_with(&chain, &both(), &unknown),
        Some((ResolverKind::Explicit, "hisat2:2.2.1".to_string()))
    );
}
