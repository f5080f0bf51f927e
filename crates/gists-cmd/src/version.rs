//! Version command implementation.

use clap::Args;

use gists_core::ios_println;
use gists_core::iostreams::IOStreams;

/// Show gists version information.
#[derive(Debug, Args)]
pub struct VersionArgs {}

impl VersionArgs {
    /// Run the version command.
    pub fn run(&self, ios: &IOStreams, version: &str, build_date: &str) {
        ios_println!(ios, "{}", format_version(version, build_date));
    }
}

/// Format version info for display.
pub fn format_version(version: &str, build_date: &str) -> String {
    if build_date.is_empty() {
        format!("gists version {version}")
    } else {
        format!("gists version {version} ({build_date})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_version_without_build_date() {
        assert_eq!(format_version("0.1.0", ""), "gists version 0.1.0");
    }

    #[test]
    fn test_should_format_version_with_build_date() {
        assert_eq!(
            format_version("0.1.0", "2024-01-15"),
            "gists version 0.1.0 (2024-01-15)",
        );
    }

    #[test]
    fn test_should_print_version_to_stdout() {
        let (ios, output) = IOStreams::test_with_output();
        VersionArgs {}.run(&ios, "1.2.3", "");
        assert_eq!(output.stdout(), "gists version 1.2.3\n");
    }
}
