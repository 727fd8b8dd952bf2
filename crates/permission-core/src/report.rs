//! Capability report formatting.

use std::io::{self, Write};

use crate::Capability;

/// Write a user-friendly capability report.
pub fn write_capability_report(
    out: &mut impl Write,
    capabilities: &[Capability],
) -> io::Result<()> {
    writeln!(out, "CamCheck Camera Capabilities:")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        writeln!(out, "  {} {}: {}", status, cap.name, cap.description)?;

        if let Some(ref fix) = cap.fix_instructions {
            writeln!(out, "    Fix: {fix}")?;
        }
    }

    Ok(())
}

/// Whether every required capability is available.
pub fn all_required_available(capabilities: &[Capability]) -> bool {
    capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available)
}
