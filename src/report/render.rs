//! Human-readable report rendering.
//!
//! Section order is fixed: system information, core packages, accelerator
//! status, optional packages, version table, summary. Writing goes through
//! an injected `Write` so tests can capture the exact output.

use std::io::{self, Write};

use crate::hardware::SignalSource;
use crate::ui::{StatusKind, Theme};

use super::EnvironmentReport;

const RULE: &str = "============================================================";

/// Render the full report.
pub fn render(report: &EnvironmentReport, theme: &Theme, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", theme.format_header("Environment Validation"))?;
    writeln!(out, "{}", RULE)?;

    render_system(report, theme, out)?;
    render_core(report, theme, out)?;
    render_hardware(report, theme, out)?;
    render_optional(report, theme, out)?;
    render_versions(report, theme, out)?;
    render_summary(report, theme, out)?;

    Ok(())
}

fn render_system(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.format_header("System Information"))?;
    writeln!(out, "{}", theme.format_kv("Platform", &report.system.platform.to_string()))?;
    writeln!(out, "{}", theme.format_kv("OS", &report.system.os))?;
    writeln!(out, "{}", theme.format_kv("Architecture", &report.system.arch))?;
    Ok(())
}

fn render_core(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.format_header("Core Packages"))?;
    for result in &report.core_results {
        if result.present {
            writeln!(out, "{}", StatusKind::Present.format(theme, &result.display_name))?;
        } else {
            let detail = result.detail.as_deref().unwrap_or("not importable");
            let line = format!("{} - {}", result.display_name, detail);
            writeln!(out, "{}", StatusKind::Missing.format(theme, &line))?;
        }
    }
    Ok(())
}

fn render_hardware(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.format_header("Accelerator"))?;

    let hw = &report.hardware;
    if hw.accelerator_present {
        writeln!(out, "{}", StatusKind::Present.format(theme, "CUDA is available"))?;
        if let Some(name) = &hw.device_name {
            writeln!(out, "    {}", theme.dim.apply_to(format!("Device: {}", name)))?;
        }
        if let Some(count) = hw.device_count {
            writeln!(out, "    {}", theme.dim.apply_to(format!("Count: {}", count)))?;
        }
        if hw.source == SignalSource::CommandProbe {
            writeln!(
                out,
                "    {}",
                theme.dim.apply_to("Detected via driver management tool")
            )?;
        }
    } else {
        writeln!(
            out,
            "{}",
            StatusKind::Info.format(theme, "CUDA not available (CPU mode)")
        )?;
    }
    Ok(())
}

fn render_optional(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.format_header("Optional CUDA Packages"))?;

    let mut any_installed = false;
    for result in &report.optional_results {
        if result.present {
            any_installed = true;
            writeln!(out, "{}", StatusKind::Present.format(theme, &result.display_name))?;
        } else {
            writeln!(
                out,
                "  {}",
                theme.dim.apply_to(format!("○ {}", result.display_name))
            )?;
        }
    }

    if !any_installed {
        writeln!(
            out,
            "{}",
            StatusKind::Info.format(theme, "No CUDA-specific packages installed (CPU mode)")
        )?;
    }
    Ok(())
}

fn render_versions(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.format_header("Package Versions"))?;
    for result in &report.version_results {
        if result.present {
            let version = result.detail.as_deref().unwrap_or("unknown");
            writeln!(out, "  • {}: {}", result.display_name, version)?;
        } else {
            writeln!(
                out,
                "  • {}: {}",
                result.display_name,
                theme.dim.apply_to("NOT INSTALLED")
            )?;
        }
    }
    Ok(())
}

fn render_summary(
    report: &EnvironmentReport,
    theme: &Theme,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    if report.ready() {
        writeln!(
            out,
            "{}",
            theme.success.apply_to("✓ Environment is ready")
        )?;
    } else {
        writeln!(
            out,
            "{}",
            theme.warning.apply_to("⚠ Some core packages are missing")
        )?;
        writeln!(
            out,
            "  {}",
            theme.dim.apply_to("Run `trainkit install` to set them up")
        )?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}
