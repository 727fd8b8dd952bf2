//! Check system capabilities.

use camcheck_permission_core::{all_required_available, write_capability_report};
use camcheck_probe_engine::backend;

pub fn run() -> anyhow::Result<()> {
    println!("CamCheck System Check");
    println!("{}", "=".repeat(50));

    // Device inventory
    #[cfg(target_os = "linux")]
    {
        let devices = camcheck_platform_linux::enumerate_video_devices();
        println!("[OK] Video devices detected: {}", devices.len());
        for d in &devices {
            println!(
                "     {} {}",
                d.path.display(),
                if d.accessible {
                    "(accessible)"
                } else {
                    "(no access)"
                }
            );
        }
    }

    // Check permissions
    let capabilities = backend::check_capabilities();
    println!();
    write_capability_report(&mut std::io::stdout(), &capabilities)?;

    println!();
    if all_required_available(&capabilities) {
        println!("All required capabilities are available. The camera is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}
