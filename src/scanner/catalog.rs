use super::locations::is_log_file;
use super::project::{is_build_output, is_cargo_target, is_node_modules, is_python_artifact};
use super::{Location, LocationProbe, ProjectArtifactProbe};
use crate::config::ScanConfig;
use crate::plugin::{ProbeRegistry, ScanProfile};
use std::env;
use std::path::{Path, PathBuf};

use ScanProfile::{Broad, Deep, Quick};

fn env_dir(var: &str, fallback: PathBuf) -> PathBuf {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or(fallback)
}

/// Registers every known category probe rooted at `home`.
pub fn default_registry(home: &Path, config: &ScanConfig) -> ProbeRegistry {
    let lib = home.join("Library");
    let mut registry = ProbeRegistry::new();

    registry.register(
        LocationProbe::new("Cache Files")
            .location(Location::children(lib.join("Caches")))
            .location(Location::children(PathBuf::from("/Library/Caches")))
            .location(Location::children(home.join(".cache"))),
        &[Quick, Broad],
    );
    registry.register(
        LocationProbe::new("Log Files")
            .location(Location::files(lib.join("Logs"), is_log_file))
            .location(Location::files(PathBuf::from("/Library/Logs"), is_log_file))
            .location(Location::files(PathBuf::from("/var/log"), is_log_file)),
        &[Quick, Broad],
    );
    registry.register(
        LocationProbe::new("Trash")
            .location(Location::children(home.join(".Trash")))
            .location(Location::children(home.join(".local/share/Trash/files")))
            .keep_empty(),
        &[Quick, Broad],
    );
    registry.register(
        LocationProbe::new("Old Downloads")
            .location(Location::children(home.join("Downloads")))
            .older_than(config.old_download_days),
        &[Broad],
    );
    registry.register(
        LocationProbe::new("Xcode Files")
            .location(Location::prefixed_children(lib.join("Developer/Xcode/DerivedData"), "Xcode: "))
            .location(Location::prefixed_children(lib.join("Developer/Xcode/Archives"), "Xcode: "))
            .location(Location::prefixed_children(lib.join("Developer/CoreSimulator/Devices"), "Xcode: ")),
        &[Broad, Deep],
    );
    registry.register(
        LocationProbe::new("Homebrew Cache")
            .location(Location::prefixed_children(lib.join("Caches/Homebrew"), "Brew: "))
            .location(Location::prefixed_children(home.join(".cache/Homebrew"), "Brew: ")),
        &[Broad, Deep],
    );

    registry.register(
        ProjectArtifactProbe::new("Node Modules", home.to_path_buf(), "📦", is_node_modules),
        &[Deep],
    );
    registry.register(
        ProjectArtifactProbe::new("Python Artifacts", home.to_path_buf(), "🐍", is_python_artifact)
            .show_dir_name()
            .with_fixed(
                LocationProbe::new("Python Artifacts")
                    .location(Location::whole(home.join(".cache/pip"), "Python: pip cache"))
                    .location(Location::whole(lib.join("Caches/pip"), "Python: pip cache"))
                    .location(Location::whole(home.join(".conda/pkgs"), "Python: pkgs cache")),
            ),
        &[Deep],
    );
    let cargo_home = env_dir("CARGO_HOME", home.join(".cargo"));
    registry.register(
        ProjectArtifactProbe::new("Rust Artifacts", home.to_path_buf(), "🦀", is_cargo_target).with_fixed(
            LocationProbe::new("Rust Artifacts")
                .location(Location::whole(cargo_home.join("registry/cache"), "🦀 Cargo registry cache")),
        ),
        &[Deep],
    );
    registry.register(
        ProjectArtifactProbe::new("Build Artifacts", home.to_path_buf(), "🔨", is_build_output).show_dir_name(),
        &[Deep],
    );

    registry.register(
        LocationProbe::new("NPM/Yarn/PNPM Caches")
            .location(Location::whole(home.join(".npm"), "NPM cache"))
            .location(Location::whole(lib.join("Caches/npm"), "NPM cache (Library)"))
            .location(Location::whole(home.join(".yarn/cache"), "Yarn cache"))
            .location(Location::whole(lib.join("Caches/Yarn"), "Yarn cache (Library)"))
            .location(Location::whole(home.join(".pnpm-store"), "PNPM store")),
        &[Deep],
    );
    let go_path = env_dir("GOPATH", home.join("go"));
    registry.register(
        LocationProbe::new("Go Artifacts")
            .location(Location::whole(go_path.join("pkg/mod"), "Go: mod"))
            .location(Location::whole(home.join(".cache/go-build"), "Go: go-build"))
            .location(Location::whole(lib.join("Caches/go-build"), "Go: go-build")),
        &[Deep],
    );
    registry.register(
        LocationProbe::new("Java/JVM Artifacts")
            .location(Location::whole(home.join(".m2/repository"), "Maven: .m2 repository"))
            .location(Location::whole(home.join(".gradle/caches"), "Gradle: caches")),
        &[Deep],
    );
    let gem_home = env_dir("GEM_HOME", home.join(".gem"));
    registry.register(
        LocationProbe::new("Ruby Artifacts")
            .location(Location::whole(gem_home, "Ruby: Gem cache"))
            .location(Location::whole(home.join(".bundle/cache"), "Ruby: Bundler cache")),
        &[Deep],
    );
    registry.register(
        LocationProbe::new("Docker Artifacts")
            .location(Location::whole(
                lib.join("Containers/com.docker.docker/Data"),
                "Docker: Desktop Data",
            ))
            .min_size(config.docker_min_size_bytes),
        &[Deep],
    );
    registry.register(
        LocationProbe::new("IDE Caches")
            .location(Location::whole(lib.join("Application Support/Code/Cache"), "VS Code: Cache"))
            .location(Location::whole(
                lib.join("Application Support/Code/CachedData"),
                "VS Code: CachedData",
            ))
            .location(Location::whole(home.join(".vscode/extensions"), "VS Code: extensions"))
            .location(Location::child_dirs(lib.join("Caches/JetBrains"), "JetBrains: "))
            .location(Location::child_dirs(lib.join("Application Support/JetBrains"), "JetBrains: ")),
        &[Deep],
    );
    registry.register(
        LocationProbe::new("CocoaPods")
            .location(Location::whole(lib.join("Caches/CocoaPods"), "CocoaPods cache")),
        &[Deep],
    );

    registry
}
